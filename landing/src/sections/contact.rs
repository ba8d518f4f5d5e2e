use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use super::reveal_class;
use crate::config::{CONTACT_EMAIL, mailto_href, tel_href};
use crate::contact::{FormField, FormFields, InquirySink, SharedSink, sink_or_default};
use crate::content::{CONTACT_BACKGROUND, TEAM};
use crate::reveal::use_reveal_once;

#[component]
pub fn Contact() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let revealed = use_reveal_once(node);
    let (fields, set_fields) = signal(FormFields::default());
    let sink = sink_or_default(use_context::<SharedSink>());

    let on_submit = move |ev: SubmitEvent| {
        // Keep the browser from reloading the page.
        ev.prevent_default();
        fields.with_untracked(|inquiry| sink.deliver(inquiry));
    };

    let banner = format!(
        "background-image: linear-gradient(rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.6)), url('{CONTACT_BACKGROUND}')"
    );

    view! {
        <section node_ref=node id="contact" class="contact">
            <div class="container">
                <div class=move || reveal_class("section-header", revealed.get())>
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section-lead">
                        "Ready to schedule your appraisal? Contact us for a fast and reliable property valuation."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class=move || reveal_class("contact-info from-left", revealed.get())>
                        <div class="contact-banner" style=banner>
                            <div>
                                <h3>"Professional Service"</h3>
                                <p>"Contact us today for your property appraisal needs"</p>
                            </div>
                        </div>

                        {TEAM
                            .iter()
                            .map(|member| {
                                view! {
                                    <ContactCard
                                        icon="📞"
                                        heading=member.name
                                        detail=member.phone
                                        href=tel_href(member.phone)
                                    />
                                }
                            })
                            .collect_view()}
                        <ContactCard
                            icon="✉️"
                            heading="Email Us"
                            detail=CONTACT_EMAIL
                            href=mailto_href(CONTACT_EMAIL)
                        />
                    </div>

                    <div class=move || reveal_class("contact-form-wrap from-right", revealed.get())>
                        <form class="contact-form" on:submit=on_submit>
                            <div class="form-row">
                                <FormInput field=FormField::Name kind="text" fields=fields set_fields=set_fields />
                                <FormInput field=FormField::Phone kind="tel" fields=fields set_fields=set_fields />
                            </div>
                            <FormInput field=FormField::Email kind="email" fields=fields set_fields=set_fields />
                            <FormInput field=FormField::Property kind="text" fields=fields set_fields=set_fields />
                            <div class="form-field">
                                <label>{FormField::Message.label()}</label>
                                <textarea
                                    name=FormField::Message.name()
                                    rows="4"
                                    prop:value=move || fields.with(|f| f.message.clone())
                                    on:input=move |ev| {
                                        set_fields.update(|f| f.set(FormField::Message, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </div>
                            <button type="submit" class="btn btn-primary btn-block btn-large">
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One single-line input bound to `field` of the shared form record.
#[component]
fn FormInput(
    field: FormField,
    kind: &'static str,
    fields: ReadSignal<FormFields>,
    set_fields: WriteSignal<FormFields>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{field.label()}</label>
            <input
                type=kind
                name=field.name()
                required=field.required()
                prop:value=move || fields.with(|f| f.get(field).to_string())
                on:input=move |ev| set_fields.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn ContactCard(
    icon: &'static str,
    heading: &'static str,
    detail: &'static str,
    href: String,
) -> impl IntoView {
    view! {
        <a class="contact-card" href=href>
            <div class="contact-icon">{icon}</div>
            <div>
                <h4>{heading}</h4>
                <p>{detail}</p>
            </div>
        </a>
    }
}
