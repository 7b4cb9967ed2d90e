//! Header scroll state: a single flag derived from the vertical offset.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Vertical offset above which the header switches to its scrolled treatment.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Strict comparison, no hysteresis band.
pub fn past_threshold(offset_px: f64) -> bool {
    offset_px > SCROLL_THRESHOLD_PX
}

/// Returns a signal tracking whether the page is scrolled past the threshold.
///
/// The signal is owned by the calling component's scope. A window `scroll`
/// listener recomputes the flag on every event (one comparison, no debounce)
/// and is removed again when the scope is disposed. Without a window the flag
/// simply stays `false`.
pub fn watch_scrolled() -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    // The closure has to outlive the listener registration; stored
    // thread-locally so cleanup can drop it.
    let listener = StoredValue::new_local(None::<Closure<dyn FnMut()>>);

    Effect::new(move || {
        if listener.with_value(|l| l.is_some()) {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let win = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            let offset = win.scroll_y().unwrap_or(0.0);
            set_scrolled.set(past_threshold(offset));
        }) as Box<dyn FnMut()>);
        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            listener.set_value(Some(callback));
        }
    });

    on_cleanup(move || {
        if let Some(callback) = listener.try_update_value(|l| l.take()).flatten() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    });

    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(50.0));
        assert!(past_threshold(50.1));
        assert!(past_threshold(1200.0));
    }

    #[test]
    fn follows_offset_sequence_without_hysteresis() {
        // 0 -> 80 -> 30 must read false -> true -> false
        let flags: Vec<bool> = [0.0, 80.0, 30.0]
            .iter()
            .map(|&offset| past_threshold(offset))
            .collect();
        assert_eq!(flags, vec![false, true, false]);
    }
}
