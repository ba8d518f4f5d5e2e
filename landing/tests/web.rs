//! In-browser checks of the mounted site.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use std::sync::{Arc, Mutex};

use dash_landing::App;
use dash_landing::contact::{FormFields, InquirySink, SharedSink};
use dash_landing::reveal::live_observers;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fresh_container() -> web_sys::HtmlElement {
    let document = document();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into().unwrap()
}

/// Let the reactive scheduler flush.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn section_ids(container: &web_sys::HtmlElement) -> Vec<String> {
    let sections = container.query_selector_all("main > section").unwrap();
    (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.id())
        .collect()
}

#[wasm_bindgen_test]
async fn home_then_areas_of_practice() {
    let container = fresh_container();
    let _handle = leptos::mount::mount_to(container.clone(), App);
    settle().await;

    assert_eq!(
        section_ids(&container),
        vec!["hero", "services", "about", "areas", "contact"]
    );

    let links = container.query_selector_all(".nav-links .nav-link").unwrap();
    assert_eq!(links.length(), 5);
    let areas = links
        .item(3)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert_eq!(areas.text_content().unwrap(), "Areas of Practice");

    areas.click();
    settle().await;

    assert_eq!(section_ids(&container), vec!["areas"]);
}

fn submit_event() -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    web_sys::Event::new_with_event_init_dict("submit", &init).unwrap()
}

fn nav_link(container: &web_sys::HtmlElement, label: &str) -> web_sys::HtmlElement {
    let links = container.query_selector_all(".nav-links .nav-link").unwrap();
    (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .find(|link| link.text_content().as_deref() == Some(label))
        .unwrap()
}

fn type_into(container: &web_sys::HtmlElement, name: &str, value: &str) {
    let input = container
        .query_selector(&format!("form.contact-form input[name={name}]"))
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(value);

    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<FormFields>>>);

impl InquirySink for Recorder {
    fn deliver(&self, inquiry: &FormFields) {
        self.0.lock().unwrap().push(inquiry.clone());
    }
}

#[wasm_bindgen_test]
async fn submit_hands_typed_fields_to_the_provided_sink() {
    let recorder = Recorder::default();
    let sink: SharedSink = Arc::new(recorder.clone());

    let container = fresh_container();
    let _handle = leptos::mount::mount_to(container.clone(), move || {
        provide_context(sink);
        view! { <App /> }
    });
    settle().await;

    type_into(&container, "name", "Jane Doe");
    type_into(&container, "email", "done@x.com");
    settle().await;

    let form = container.query_selector("form.contact-form").unwrap().unwrap();
    let submit = submit_event();
    form.dispatch_event(&submit).unwrap();

    assert!(submit.default_prevented());
    assert_eq!(
        *recorder.0.lock().unwrap(),
        vec![FormFields {
            name: "Jane Doe".into(),
            email: "done@x.com".into(),
            ..FormFields::default()
        }]
    );
}

#[wasm_bindgen_test]
async fn leaving_a_page_releases_its_reveal_observers() {
    let before = live_observers();

    let container = fresh_container();
    let handle = leptos::mount::mount_to(container.clone(), App);
    settle().await;
    assert_eq!(live_observers(), before + 5);

    nav_link(&container, "Services").click();
    settle().await;
    assert_eq!(section_ids(&container), vec!["services"]);
    assert_eq!(live_observers(), before + 1);

    nav_link(&container, "Contact").click();
    settle().await;
    assert_eq!(live_observers(), before + 1);

    drop(handle);
    settle().await;
    assert_eq!(live_observers(), before);
}

#[wasm_bindgen_test]
async fn submitting_the_contact_form_does_not_navigate() {
    let container = fresh_container();
    let _handle = leptos::mount::mount_to(container.clone(), App);
    settle().await;

    let form = container.query_selector("form.contact-form").unwrap().unwrap();

    let submit = submit_event();
    form.dispatch_event(&submit).unwrap();

    assert!(submit.default_prevented());
}
