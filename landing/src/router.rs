//! Page selection and section composition.
//!
//! The site is a single document; "pages" are fixed compositions of the
//! section components. [`PageId`] is the only routed state and it lives in a
//! signal owned by the root `App`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Identifier of the currently displayed composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    Services,
    About,
    Areas,
    Contact,
}

impl PageId {
    /// Every page, in navigation order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Services,
        PageId::About,
        PageId::Areas,
        PageId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Services => "services",
            PageId::About => "about",
            PageId::Areas => "areas",
            PageId::Contact => "contact",
        }
    }

    /// Navigation label shown to visitors.
    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Services => "Services",
            PageId::About => "About",
            PageId::Areas => "Areas of Practice",
            PageId::Contact => "Contact",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| SiteError::UnknownPage(s.to_string()))
    }
}

/// One independently rendered block of marketing content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Services,
    About,
    Areas,
    Contact,
}

const HOME: &[Section] = &[
    Section::Hero,
    Section::Services,
    Section::About,
    Section::Areas,
    Section::Contact,
];

/// Ordered sections displayed for `page`.
pub fn compose(page: PageId) -> &'static [Section] {
    match page {
        PageId::Home => HOME,
        PageId::Services => &[Section::Services],
        PageId::About => &[Section::About],
        PageId::Areas => &[Section::Areas],
        PageId::Contact => &[Section::Contact],
    }
}

/// Like [`compose`], but for a raw identifier. Unknown identifiers get the
/// home composition.
pub fn compose_id(id: &str) -> &'static [Section] {
    match id.parse::<PageId>() {
        Ok(page) => compose(page),
        Err(err) => {
            tracing::warn!("{err}, falling back to home");
            HOME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn home_shows_every_section_in_order() {
        assert_eq!(
            compose(PageId::Home),
            &[
                Section::Hero,
                Section::Services,
                Section::About,
                Section::Areas,
                Section::Contact
            ]
        );
    }

    #[test]
    fn inner_pages_show_a_single_section() {
        assert_eq!(compose(PageId::Services), &[Section::Services]);
        assert_eq!(compose(PageId::About), &[Section::About]);
        assert_eq!(compose(PageId::Areas), &[Section::Areas]);
        assert_eq!(compose(PageId::Contact), &[Section::Contact]);
    }

    #[test]
    fn unknown_identifier_falls_back_to_home() {
        assert_eq!(compose_id("pricing"), compose(PageId::Home));
        assert_eq!(compose_id(""), compose(PageId::Home));
        assert_eq!(compose_id("Areas"), compose(PageId::Home));
    }

    #[test]
    fn known_identifiers_compose_like_their_page() {
        for page in PageId::ALL {
            assert_eq!(compose_id(page.as_str()), compose(page));
        }
    }

    #[test]
    fn parse_rejects_unknown_page() {
        assert_eq!(
            "blog".parse::<PageId>(),
            Err(SiteError::UnknownPage("blog".into()))
        );
        assert_eq!("areas".parse::<PageId>(), Ok(PageId::Areas));
    }

    #[test]
    fn default_page_is_home() {
        assert_eq!(PageId::default(), PageId::Home);
    }

    #[test]
    fn labels_follow_nav_order() {
        let labels: Vec<_> = PageId::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec!["Home", "Services", "About", "Areas of Practice", "Contact"]
        );
    }

    #[test]
    fn serializes_as_lowercase_identifier() {
        assert_eq!(
            serde_json::to_string(&PageId::Areas).unwrap(),
            "\"areas\""
        );
    }
}
