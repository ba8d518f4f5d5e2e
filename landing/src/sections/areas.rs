use leptos::html;
use leptos::prelude::*;

use super::{reveal_class, stagger, use_navigator};
use crate::content::{AREAS_BACKGROUND, COUNTIES, OFFICES};
use crate::reveal::use_reveal_once;
use crate::router::PageId;

#[component]
pub fn Areas() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal_once(node);
    let navigate = use_navigator();

    let background = format!("background-image: url('{AREAS_BACKGROUND}')");
    let offices_note = format!(
        "We have two offices strategically located in {} and {} to better serve our clients.",
        OFFICES[0], OFFICES[1]
    );

    view! {
        <section node_ref=node id="areas" class="areas">
            <div class="areas-bg" style=background></div>
            <div class="container">
                <div class=move || reveal_class("section-header", revealed.get())>
                    <h2 class="section-title">"Areas We Serve"</h2>
                    <p class="section-lead">
                        "We provide professional appraisal services across multiple counties south of Atlanta."
                    </p>
                </div>

                <div class="county-grid">
                    {COUNTIES
                        .iter()
                        .enumerate()
                        .map(|(index, county)| {
                            let base = if OFFICES.contains(county) {
                                "county-tile pop office"
                            } else {
                                "county-tile pop"
                            };
                            view! {
                                <div
                                    class=move || reveal_class(base, revealed.get())
                                    style=stagger(index, 100)
                                >
                                    <h3>{*county}</h3>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class=move || reveal_class("areas-footer", revealed.get())
                    style="transition-delay: 500ms"
                >
                    <p>{offices_note}</p>
                    <button class="btn btn-primary" on:click=move |_| navigate(PageId::Contact)>
                        "Find Your Area"
                    </button>
                </div>
            </div>
        </section>
    }
}
