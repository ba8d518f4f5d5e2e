// Page compositions
// Dash Appraisals (c)2024

use leptos::prelude::*;

use crate::router::{PageId, Section, compose};
use crate::sections::{About, Areas, Contact, Hero, Services};

/// Renders the sections composed for `page`, in order.
#[component]
pub fn CurrentPage(#[prop(into)] page: Signal<PageId>) -> impl IntoView {
    move || {
        compose(page.get())
            .iter()
            .map(|section| render_section(*section))
            .collect_view()
    }
}

fn render_section(section: Section) -> AnyView {
    match section {
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::Services => view! { <Services /> }.into_any(),
        Section::About => view! { <About /> }.into_any(),
        Section::Areas => view! { <Areas /> }.into_any(),
        Section::Contact => view! { <Contact /> }.into_any(),
    }
}
