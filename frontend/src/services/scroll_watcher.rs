use gloo::events::EventListener;
use web_sys::EventTarget;

#[cfg(test)]
thread_local! {
    static LIVE_WATCHERS: std::cell::Cell<usize> = std::cell::Cell::new(0);
}

/// Scroll subscription bound to a target. The listener is removed when the
/// watcher is dropped, so it cannot outlive the component that owns it.
pub struct ScrollWatcher {
    _listener: EventListener,
}

impl ScrollWatcher {
    pub fn attach<F>(target: &EventTarget, mut on_scroll: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let listener = EventListener::new(target, "scroll", move |_| on_scroll());
        #[cfg(test)]
        LIVE_WATCHERS.with(|live| live.set(live.get() + 1));
        Self {
            _listener: listener,
        }
    }

    /// Attach to the global window. `None` when there is no window.
    pub fn attach_to_window<F>(on_scroll: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        Some(Self::attach(&window, on_scroll))
    }
}

#[cfg(test)]
impl ScrollWatcher {
    /// Watchers currently attached on this thread.
    pub fn live_count() -> usize {
        LIVE_WATCHERS.with(|live| live.get())
    }
}

#[cfg(test)]
impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        LIVE_WATCHERS.with(|live| live.set(live.get() - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_scroll(target: &EventTarget) {
        let event = web_sys::Event::new("scroll").unwrap();
        target.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_listener_detached_on_drop() {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        let target: &EventTarget = element.unchecked_ref();

        let live_before = ScrollWatcher::live_count();
        let count = Rc::new(Cell::new(0u32));
        let watcher = {
            let count = count.clone();
            ScrollWatcher::attach(target, move || count.set(count.get() + 1))
        };
        assert_eq!(ScrollWatcher::live_count(), live_before + 1);

        fire_scroll(target);
        fire_scroll(target);
        assert_eq!(count.get(), 2);

        drop(watcher);
        assert_eq!(ScrollWatcher::live_count(), live_before);

        // Unmounted: events still fire but nothing observes them
        fire_scroll(target);
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    fn test_attach_to_window() {
        let count = Rc::new(Cell::new(0u32));
        let watcher = {
            let count = count.clone();
            ScrollWatcher::attach_to_window(move || count.set(count.get() + 1))
        };
        assert!(watcher.is_some());

        let window: EventTarget = web_sys::window().unwrap().into();
        fire_scroll(&window);
        assert_eq!(count.get(), 1);

        drop(watcher);
        fire_scroll(&window);
        assert_eq!(count.get(), 1);
    }
}
