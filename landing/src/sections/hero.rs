use leptos::html;
use leptos::prelude::*;

use super::{TapeMeasure, reveal_class, use_navigator};
use crate::config::{COMPANY_NAME, HERO_TITLE, TAGLINE, YEARS_EXPERIENCE};
use crate::content::HERO_BACKGROUND;
use crate::reveal::use_reveal_once;
use crate::router::PageId;

#[component]
pub fn Hero() -> impl IntoView {
    let (measuring, set_measuring) = signal(false);
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal_once(node);
    let navigate = use_navigator();

    let background = format!(
        "background-image: linear-gradient(rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.4)), url('{HERO_BACKGROUND}')"
    );
    let description = format!(
        "With over {YEARS_EXPERIENCE}+ years of experience, {COMPANY_NAME} delivers reliable property valuations. \
         We've seen all market conditions and property types to provide fast and accurate appraisals."
    );

    view! {
        <section node_ref=node id="hero" class="hero">
            <div class="hero-bg" style=background></div>

            <div class="hero-content">
                <div class=move || reveal_class("hero-logo", revealed.get())>
                    <div class="hero-letters">
                        <span class="tilt-left">"D"</span>
                        <span class="tilt-right">"A"</span>
                    </div>
                    <div class="hero-house"></div>
                    <div class="hero-tape">
                        <TapeMeasure active=measuring length=300 />
                    </div>
                </div>

                <h1
                    class=move || reveal_class("hero-title", revealed.get())
                    style="transition-delay: 600ms"
                >
                    {HERO_TITLE}
                </h1>
                <p
                    class=move || reveal_class("hero-tagline", revealed.get())
                    style="transition-delay: 800ms"
                >
                    {TAGLINE}
                </p>
                <p
                    class=move || reveal_class("hero-description", revealed.get())
                    style="transition-delay: 1000ms"
                >
                    {description}
                </p>

                <div
                    class=move || reveal_class("hero-actions", revealed.get())
                    style="transition-delay: 1200ms"
                >
                    <button
                        class="btn btn-primary btn-large"
                        on:click=move |_| set_measuring.update(|m| *m = !*m)
                    >
                        "📏 Try Interactive Measure"
                    </button>
                    <button
                        class="btn btn-outline btn-large"
                        on:click=move |_| navigate(PageId::Contact)
                    >
                        "Get Free Quote"
                    </button>
                </div>
            </div>

            <div class="scroll-indicator"></div>
        </section>
    }
}
