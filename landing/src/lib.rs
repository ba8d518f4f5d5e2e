//! # dash-landing
//!
//! Marketing site for Dash Appraisals, a residential and commercial real
//! estate appraisal practice south of Atlanta. Built as a Leptos 0.8
//! client-side app and served as a static WASM bundle by trunk.
//!
//! ## Architecture
//!
//! - [`router`] - the current [`router::PageId`] and the section composition
//!   for each page
//! - [`contact`] - contact form record and the submission seam
//! - [`reveal`] - one-shot scroll-into-view latch
//! - [`sections`] - one component per marketing section
//! - [`pages`] - renders the composition for the current page
//! - [`config`], [`content`], [`styles`] - static identity, copy and CSS
//!
//! The only shared state is the current page. It lives in a signal owned by
//! [`App`]; its setter is handed to the navigation bar and, through context,
//! to every section CTA. All other state is local to the component that owns
//! it.
//!
//! ---
//!
//! Dash Appraisals (c)2024

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod pages;
pub mod reveal;
pub mod router;
pub mod sections;
pub mod styles;

use leptos::prelude::*;

use pages::CurrentPage;
use router::PageId;
use sections::{Footer, Nav, Navigator};
use styles::SITE_CSS;

/// Root component. Every reload starts on [`PageId::Home`].
#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(PageId::default());
    let navigator = Navigator::new(set_page);
    provide_context(navigator);

    view! {
        <style>{SITE_CSS}</style>
        <Nav current=page navigator=navigator />
        <main class="main">
            <CurrentPage page=page />
        </main>
        <Footer />
    }
}

/// Install the console logger and panic hook, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Dash Appraisals site starting");
    leptos::mount::mount_to_body(App);
}
