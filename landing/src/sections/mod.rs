// Site sections
// Dash Appraisals (c)2024

use leptos::prelude::*;

use crate::router::PageId;

mod about;
mod areas;
mod contact;
mod footer;
mod hero;
mod nav;
mod services;
mod tape_measure;

pub use about::About;
pub use areas::Areas;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::{CompactMenu, Nav, select};
pub use services::Services;
pub use tape_measure::{TapeMeasure, feet_label, tick_count};

/// Handle on the router setter, shared through context with every section
/// that links to another page.
#[derive(Clone, Copy)]
pub struct Navigator(WriteSignal<PageId>);

impl Navigator {
    pub fn new(setter: WriteSignal<PageId>) -> Self {
        Self(setter)
    }

    pub fn go(self, page: PageId) {
        tracing::debug!(page = %page, "navigate");
        self.0.set(page);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Navigation callback for section CTAs. Must be called while the component
/// is being built; outside an `App` there is no router and clicks are ignored.
pub(crate) fn use_navigator() -> impl Fn(PageId) + Copy + Send + Sync + 'static {
    let navigator = use_context::<Navigator>();
    move |page| match navigator {
        Some(navigator) => navigator.go(page),
        None => tracing::warn!(page = %page, "no router in context, ignoring navigation"),
    }
}

/// `class` for an element animated by a reveal latch.
pub(crate) fn reveal_class(base: &'static str, revealed: bool) -> String {
    if revealed {
        format!("{base} reveal revealed")
    } else {
        format!("{base} reveal")
    }
}

/// Inline stagger for the `index`-th item of a revealed grid.
pub(crate) fn stagger(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", index as u32 * step_ms)
}
