//! One-shot "reveal when scrolled into view".
//!
//! Sections start hidden and fade in the first time any part of them enters
//! the viewport. Scrolling away never hides them again.

use std::cell::Cell;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Boolean latch: set on the first visible observation, never cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one visibility observation. Returns `true` only for the
    /// observation that tripped the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// A live observer and the Rust callback it calls into.
///
/// Dropping it disconnects the observer and frees the callback, so a section
/// that unmounts before it was ever seen leaves nothing behind.
struct Observation {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

thread_local! {
    static LIVE_OBSERVATIONS: Cell<usize> = const { Cell::new(0) };
}

impl Observation {
    fn start(
        element: &web_sys::Element,
        set_revealed: WriteSignal<bool>,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let mut latch = RevealLatch::default();

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if latch.observe(visible) {
                    set_revealed.set(true);
                    // The closure itself stays alive until the section unmounts.
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let observer = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);
        LIVE_OBSERVATIONS.with(|live| live.set(live.get() + 1));

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
        LIVE_OBSERVATIONS.with(|live| live.set(live.get().saturating_sub(1)));
    }
}

/// Number of reveal observers currently attached to mounted sections.
pub fn live_observers() -> usize {
    LIVE_OBSERVATIONS.with(Cell::get)
}

/// Track whether `target` has ever been on screen.
///
/// The observer is attached once the element mounts, disconnected as soon as
/// the latch trips, and released together with its callback when the owning
/// component is cleaned up.
pub fn use_reveal_once(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let observation = StoredValue::new_local(None::<Observation>);

    Effect::new(move |attached: Option<bool>| {
        if attached == Some(true) {
            return true;
        }
        let Some(element) = target.get() else {
            return false;
        };
        match Observation::start(&element, set_revealed) {
            Ok(started) => observation.set_value(Some(started)),
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable ({:?}), revealing eagerly", e);
                set_revealed.set(true);
            }
        }
        true
    });

    on_cleanup(move || {
        // Already gone if the arena was torn down first; its drop disconnected it.
        let _ = observation.try_update_value(|slot| slot.take());
    });

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealLatch::default().is_revealed());
    }

    #[test]
    fn invisible_observations_do_not_trip() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn trips_once_and_never_resets() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // Scrolling away and back again changes nothing.
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }
}
