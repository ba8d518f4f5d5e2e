//! Business identity shared by every section (single source of truth).

pub const COMPANY_NAME: &str = "Dash Appraisals";

/// Upper-cased wordmark used by the hero.
pub const HERO_TITLE: &str = "DASH APPRAISALS";

pub const TAGLINE: &str = "Valuing What You Value";

pub const CONTACT_EMAIL: &str = "info@dashappraisals.com";

pub const YEARS_EXPERIENCE: u32 = 25;

pub const COPYRIGHT_YEAR: u32 = 2024;

/// Link target handing a phone number off to the host dialer.
pub fn tel_href(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Link target handing an address off to the host mail client.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tel_href_keeps_number_verbatim() {
        assert_eq!(tel_href("678-555-0123"), "tel:678-555-0123");
    }

    #[test]
    fn mailto_href_for_office_address() {
        assert_eq!(
            mailto_href(CONTACT_EMAIL),
            "mailto:info@dashappraisals.com"
        );
    }
}
