use leptos::html;
use leptos::prelude::*;

use super::{reveal_class, stagger, use_navigator};
use crate::content::{SERVICES, Service};
use crate::reveal::use_reveal_once;
use crate::router::PageId;

#[component]
pub fn Services() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal_once(node);

    view! {
        <section node_ref=node id="services" class="services">
            <div class="container">
                <div class=move || reveal_class("section-header", revealed.get())>
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-lead">
                        "Professional appraisal services tailored to your specific needs with accuracy and reliability."
                    </p>
                </div>

                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            view! { <ServiceCard service=*service index=index revealed=revealed /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service, index: usize, revealed: ReadSignal<bool>) -> impl IntoView {
    let navigate = use_navigator();

    view! {
        <div
            class=move || reveal_class("service-card", revealed.get())
            style=stagger(index, 200)
        >
            <div class="service-image">
                <img src=service.image alt=service.title />
            </div>
            <div class="service-body">
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <ul class="bullet-list">
                    {service
                        .features
                        .iter()
                        .map(|feature| view! { <li>{*feature}</li> })
                        .collect_view()}
                </ul>
                <button
                    class="btn btn-primary btn-block"
                    on:click=move |_| navigate(PageId::Contact)
                >
                    "Learn More"
                </button>
            </div>
        </div>
    }
}
