use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use matsuri_recap_core::threshold_crossed;

struct Subscription {
    target: Element,
    on_enter: Box<dyn FnOnce(&Element)>,
}

/// Viewport subscriptions that fire at most once. The first time a target
/// crosses the threshold its callback runs and the target is unobserved.
/// Dropping the observer disconnects every pending subscription.
pub(crate) struct OneShotObserver {
    observer: IntersectionObserver,
    subscriptions: Rc<RefCell<Vec<Subscription>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OneShotObserver {
    pub(crate) fn is_supported() -> bool {
        dom::has_global_function("IntersectionObserver")
    }

    pub(crate) fn new(threshold: f64, root_margin: Option<&str>) -> Result<Self, JsValue> {
        let subscriptions: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
        let pending = Rc::clone(&subscriptions);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !crossed(&entry, threshold) {
                        continue;
                    }
                    let target = entry.target();
                    let taken = {
                        let mut pending = pending.borrow_mut();
                        pending
                            .iter()
                            .position(|subscription| subscription.target == target)
                            .map(|index| pending.remove(index))
                    };
                    let Some(subscription) = taken else {
                        continue;
                    };
                    observer.unobserve(&target);
                    (subscription.on_enter)(&target);
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            subscriptions,
            _callback: callback,
        })
    }

    pub(crate) fn subscribe<F>(&self, target: &Element, on_enter: F)
    where
        F: FnOnce(&Element) + 'static,
    {
        self.subscriptions.borrow_mut().push(Subscription {
            target: target.clone(),
            on_enter: Box::new(on_enter),
        });
        self.observer.observe(target);
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.subscriptions.borrow_mut().clear();
    }
}

// first callback after observe() reports any overlap, below threshold too
fn crossed(entry: &IntersectionObserverEntry, threshold: f64) -> bool {
    threshold_crossed(
        entry.is_intersecting(),
        entry.intersection_ratio(),
        threshold,
        entry.intersection_rect().height(),
        entry.root_bounds().map(|root| root.height()),
    )
}
