use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot visibility latch for an entry animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Unseen,
    Revealed,
}

impl Reveal {
    /// `Revealed` is terminal; leaving the viewport again changes nothing.
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            Reveal::Unseen if intersecting => Reveal::Revealed,
            other => other,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Reveal::Revealed
    }

    /// CSS class toggled on the animated container.
    pub fn class(self) -> &'static str {
        match self {
            Reveal::Unseen => "reveal",
            Reveal::Revealed => "revealed",
        }
    }
}

/// Shrinks the viewport on every side, so the element has to be `margin_px`
/// inside before it counts as visible.
pub fn root_margin(margin_px: u32) -> String {
    format!("-{}px", margin_px)
}

/// Latches to `Revealed` the first time `node` intersects the viewport and
/// then stops observing.
#[hook]
pub fn use_reveal(node: NodeRef, margin_px: u32) -> Reveal {
    let reveal = use_state_eq(Reveal::default);

    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |(node, margin_px)| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => observe_once(element, *margin_px, move |state| reveal.set(state)),
                    None => {
                        warn!("Reveal target not mounted, showing content immediately");
                        reveal.set(Reveal::Revealed);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (node, margin_px),
        );
    }

    *reveal
}

fn observe_once(
    element: Element,
    margin_px: u32,
    on_reveal: impl Fn(Reveal) + 'static,
) -> Box<dyn FnOnce()> {
    let latch = Rc::new(Cell::new(Reveal::Unseen));
    let on_reveal = Rc::new(on_reveal);

    let callback = {
        let latch = latch.clone();
        let on_reveal = on_reveal.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                let next = latch.get().observe(intersecting);
                if next.is_revealed() && !latch.get().is_revealed() {
                    latch.set(next);
                    debug!("Section revealed");
                    (*on_reveal)(next);
                    observer.disconnect();
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&root_margin(margin_px));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Box::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable ({:?}), showing content immediately", e);
            (*on_reveal)(Reveal::Revealed);
            Box::new(|| ())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_first_intersection() {
        let state = Reveal::default();
        assert_eq!(state, Reveal::Unseen);
        assert_eq!(state.observe(false), Reveal::Unseen);
        assert_eq!(state.observe(true), Reveal::Revealed);
    }

    #[test]
    fn never_goes_back_to_unseen() {
        let mut state = Reveal::Unseen.observe(true);
        for intersecting in [false, true, false, false] {
            state = state.observe(intersecting);
            assert!(state.is_revealed());
        }
    }

    #[test]
    fn margin_shrinks_the_viewport() {
        assert_eq!(root_margin(60), "-60px");
        assert_eq!(root_margin(0), "-0px");
        assert_eq!(Reveal::Unseen.class(), "reveal");
        assert_eq!(Reveal::Revealed.class(), "revealed");
    }
}
