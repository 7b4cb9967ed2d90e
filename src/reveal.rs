//! One-shot reveal-on-visibility for page content.
//!
//! `RevealGate` is the plain two-state machine; `FadeIn` wires it to an
//! `IntersectionObserver` and to the CSS transition that does the actual
//! animation.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Minimum visible-area ratio that counts as "entered the viewport".
pub const RATIO_THRESHOLD: f64 = 0.1;

/// Bottom inset passed to the observer: a region only qualifies once it is
/// within 50px of the viewport's bottom edge.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Revealed,
}

/// Monotonic visibility gate: `Hidden` until the first qualifying
/// observation, `Revealed` forever after.
#[derive(Debug)]
pub struct RevealGate {
    phase: Phase,
}

impl RevealGate {
    pub fn new() -> Self {
        Self {
            phase: Phase::Hidden,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Feeds one observed intersection ratio to the gate. Returns `true`
    /// only on the single call that flips the state.
    pub fn offer(&mut self, ratio: f64) -> bool {
        if self.phase == Phase::Hidden && ratio >= RATIO_THRESHOLD {
            self.phase = Phase::Revealed;
            true
        } else {
            false
        }
    }
}

impl Default for RevealGate {
    fn default() -> Self {
        Self::new()
    }
}

struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    // Kept alive for as long as the observer may still fire.
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

/// Wraps content that starts transparent and offset, then animates into
/// place the first time it scrolls into view.
///
/// `delay` postpones the CSS transition, not the trigger itself. The
/// observer is registered once on mount and torn down either on the first
/// qualifying callback or when the component is disposed, whichever comes
/// first. If the observer cannot be constructed the content renders shown
/// immediately rather than staying invisible.
#[component]
pub fn FadeIn(
    #[prop(optional)] delay: u32,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let (revealed, set_revealed) = signal(false);
    let handle = StoredValue::new_local(None::<ObserverHandle>);

    Effect::new(move || {
        let Some(el) = node_ref.get() else {
            return;
        };
        if handle.with_value(|h| h.is_some()) {
            return;
        }

        let gate = Rc::new(RefCell::new(RevealGate::new()));
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if gate.borrow_mut().offer(entry.intersection_ratio()) {
                        set_revealed.set(true);
                        observer.unobserve(&entry.target());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(RATIO_THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => {
                observer.observe(&el);
                handle.set_value(Some(ObserverHandle {
                    observer,
                    _callback: callback,
                }));
            }
            Err(_) => {
                // No observation facility: fail open, never hide content.
                set_revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        if let Some(handle) = handle.try_update_value(|h| h.take()).flatten() {
            handle.observer.disconnect();
        }
    });

    let classes = move || {
        let state = if revealed.get() {
            "fade-in is-visible"
        } else {
            "fade-in"
        };
        if class.is_empty() {
            state.to_string()
        } else {
            format!("{state} {class}")
        }
    };

    view! {
        <div node_ref=node_ref class=classes style=format!("transition-delay: {delay}ms")>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_stays_hidden_without_observations() {
        let gate = RevealGate::new();
        assert_eq!(gate.phase(), Phase::Hidden);
        assert!(!gate.is_revealed());
    }

    #[test]
    fn sub_threshold_ratio_does_not_reveal() {
        let mut gate = RevealGate::new();
        assert!(!gate.offer(0.05));
        assert!(!gate.is_revealed());
        assert!(gate.offer(0.15));
        assert!(gate.is_revealed());
    }

    #[test]
    fn exact_threshold_reveals() {
        let mut gate = RevealGate::new();
        assert!(gate.offer(RATIO_THRESHOLD));
        assert!(gate.is_revealed());
    }

    #[test]
    fn reveal_is_one_shot_and_monotonic() {
        let mut gate = RevealGate::new();
        assert!(gate.offer(0.5));
        // Later observations, qualifying or not, are no-ops.
        assert!(!gate.offer(0.9));
        assert!(!gate.offer(0.0));
        assert!(gate.is_revealed());
    }

    #[test]
    fn repeated_qualifying_offers_transition_exactly_once() {
        let mut gate = RevealGate::new();
        let transitions = (0..5).filter(|_| gate.offer(1.0)).count();
        assert_eq!(transitions, 1);
    }
}
