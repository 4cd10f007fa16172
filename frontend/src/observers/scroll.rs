use std::cell::Cell;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

/// Anything that can report a vertical scroll offset and notify on change.
pub trait ScrollSource {
    fn offset(&self) -> f64;
    fn subscribe(&self, listener: Box<dyn FnMut(f64)>) -> ScrollSubscription;
}

/// Live listener registration. Dropping it removes the listener.
pub struct ScrollSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription that was never registered, e.g. when there is no window.
    pub fn inert() -> Self {
        Self { cancel: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Tracks whether the page is scrolled past `threshold` pixels and reports
/// flips through `on_change`. Detaches from its source when dropped.
pub struct ScrollObserver {
    _subscription: ScrollSubscription,
}

impl ScrollObserver {
    pub fn attach<S: ScrollSource + ?Sized>(
        source: &S,
        threshold: f64,
        on_change: impl Fn(bool) + 'static,
    ) -> Self {
        let initial = source.offset() > threshold;
        on_change(initial);

        let state = Cell::new(initial);
        let subscription = source.subscribe(Box::new(move |offset| {
            let now = offset > threshold;
            if state.replace(now) != now {
                on_change(now);
            }
        }));

        Self {
            _subscription: subscription,
        }
    }
}

/// The browser window's vertical scroll position.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn subscribe(&self, mut listener: Box<dyn FnMut(f64)>) -> ScrollSubscription {
        let Some(window) = web_sys::window() else {
            error!("No window available, scroll observer stays inert");
            return ScrollSubscription::inert();
        };

        let window_clone = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Ok(scroll_y) = window_clone.scroll_y() {
                listener(scroll_y);
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            error!("Failed to register scroll listener: {:?}", e);
            return ScrollSubscription::inert();
        }

        ScrollSubscription::new(move || {
            if let Err(e) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                error!("Failed to remove scroll listener: {:?}", e);
            }
        })
    }
}

/// Whether the window is scrolled past `threshold`. The listener lives exactly
/// as long as the calling component.
#[hook]
pub fn use_is_scrolled(threshold: f64) -> bool {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let observer = ScrollObserver::attach(&WindowScroll, *threshold, move |scrolled| {
                    is_scrolled.set(scrolled);
                });
                move || drop(observer)
            },
            threshold,
        );
    }

    *is_scrolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Listeners = Rc<RefCell<Vec<(usize, Box<dyn FnMut(f64)>)>>>;

    #[derive(Clone, Default)]
    struct FakeScroll {
        offset: Rc<Cell<f64>>,
        listeners: Listeners,
        next_id: Rc<Cell<usize>>,
    }

    impl FakeScroll {
        fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            for (_, listener) in self.listeners.borrow_mut().iter_mut() {
                listener(offset);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSource for FakeScroll {
        fn offset(&self) -> f64 {
            self.offset.get()
        }

        fn subscribe(&self, listener: Box<dyn FnMut(f64)>) -> ScrollSubscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, listener));

            let listeners = Rc::downgrade(&self.listeners);
            ScrollSubscription::new(move || {
                if let Some(listeners) = listeners.upgrade() {
                    listeners.borrow_mut().retain(|(other, _)| *other != id);
                }
            })
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |scrolled| sink.borrow_mut().push(scrolled))
    }

    fn latest(seen: &Rc<RefCell<Vec<bool>>>) -> Option<bool> {
        seen.borrow().last().copied()
    }

    #[test]
    fn flips_around_the_threshold() {
        let source = FakeScroll::default();
        let (seen, on_change) = recorder();
        let _observer = ScrollObserver::attach(&source, 50.0, on_change);
        assert_eq!(latest(&seen), Some(false));

        source.scroll_to(50.0);
        assert_eq!(latest(&seen), Some(false));
        source.scroll_to(51.0);
        assert_eq!(latest(&seen), Some(true));
        source.scroll_to(0.0);
        assert_eq!(latest(&seen), Some(false));

        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn repeated_events_on_the_same_side_do_not_notify() {
        let source = FakeScroll::default();
        let (seen, on_change) = recorder();
        let _observer = ScrollObserver::attach(&source, 50.0, on_change);

        for offset in [60.0, 200.0, 900.0] {
            source.scroll_to(offset);
        }
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn samples_the_offset_on_attach() {
        let source = FakeScroll::default();
        source.offset.set(400.0);
        let (seen, on_change) = recorder();
        let _observer = ScrollObserver::attach(&source, 50.0, on_change);

        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn dropping_the_observer_unsubscribes() {
        let source = FakeScroll::default();
        let (seen, on_change) = recorder();
        let observer = ScrollObserver::attach(&source, 50.0, on_change);
        source.scroll_to(51.0);
        assert_eq!(source.listener_count(), 1);

        drop(observer);
        assert_eq!(source.listener_count(), 0);

        source.scroll_to(0.0);
        source.scroll_to(120.0);
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn observers_are_independent() {
        let source = FakeScroll::default();
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let a = ScrollObserver::attach(&source, 50.0, first);
        let _b = ScrollObserver::attach(&source, 500.0, second);

        source.scroll_to(100.0);
        drop(a);
        source.scroll_to(600.0);

        assert_eq!(latest(&second_seen), Some(true));
        assert_eq!(*first_seen.borrow(), vec![false, true]);
        assert_eq!(*second_seen.borrow(), vec![false, true]);
    }
}
