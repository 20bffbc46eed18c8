use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlTemplateElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use crate::dom;
use crate::view_controller::ViewController;
use matsuri_recap_core::vocab::{
    CLASS_ACTIVE, CONTENT_WRAPPER, FLOW_HINT, FLOW_RESULT_BTN, FLOW_RESULT_DETAIL,
    FLOW_RESULT_LINK, RESULT_ATTR, RESULT_CLOSE, RESULT_CONTENT,
};
use matsuri_recap_core::{normalize_result_id, result_scroll_top, result_selector, Language};

impl ViewController {
    pub(crate) fn install_flow_results(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        for link in dom::elements(self.document.query_selector_all(FLOW_RESULT_LINK)) {
            let view = Rc::clone(self);
            let origin = link.clone();
            let listener = EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event| {
                    event.prevent_default();
                    view.show_result_from(&origin);
                },
            );
            listeners.push(listener);
        }
        for button in dom::elements(self.document.query_selector_all(FLOW_RESULT_BTN)) {
            let view = Rc::clone(self);
            let origin = button.clone();
            let listener = EventListener::new(&button, "click", move |_event| {
                // the wrapping link handles it
                if dom::first(origin.closest(FLOW_RESULT_LINK)).is_some() {
                    return;
                }
                view.show_result_from(&origin);
            });
            listeners.push(listener);
        }
        for close in dom::elements(self.document.query_selector_all(RESULT_CLOSE)) {
            let origin = close.clone();
            let listener = EventListener::new(&close, "click", move |_event| {
                if let Some(detail) = dom::first(origin.closest(FLOW_RESULT_DETAIL)) {
                    dom::set_class(&detail, CLASS_ACTIVE, false);
                }
            });
            listeners.push(listener);
        }
        self.listeners.borrow_mut().extend(listeners);
    }

    fn show_result_from(&self, origin: &Element) {
        let raw = origin.get_attribute(RESULT_ATTR);
        let Some(result_id) = normalize_result_id(raw.as_deref()) else {
            gloo::console::warn!("flow result: trigger without id");
            return;
        };
        self.show_result(origin, result_id);
    }

    /// Fills and opens the detail panel of the content block holding
    /// `origin`. Returns false, touching nothing, when any piece is missing.
    pub(crate) fn show_result(&self, origin: &Element, result_id: &str) -> bool {
        let Some(wrapper) = dom::first(origin.closest(CONTENT_WRAPPER)) else {
            return false;
        };
        let Some(lang) = Language::from_content_id(&wrapper.id()) else {
            return false;
        };
        let Some(fragment) = self.result_fragment(lang, result_id) else {
            gloo::console::warn!("flow result: unknown id", result_id, lang.code());
            return false;
        };
        let Some(detail) = dom::first(wrapper.query_selector(FLOW_RESULT_DETAIL)) else {
            return false;
        };
        let Some(content) = dom::first(detail.query_selector(RESULT_CONTENT)) else {
            return false;
        };
        content.set_inner_html(&fragment.inner_html());
        dom::set_class(&detail, CLASS_ACTIVE, true);
        self.scroll_to_result(&wrapper, &detail);
        true
    }

    fn result_fragment(&self, lang: Language, result_id: &str) -> Option<Element> {
        let registry = self
            .document
            .get_element_by_id(lang.result_registry_id())?
            .dyn_into::<HtmlTemplateElement>()
            .ok()?;
        dom::first(registry.content().query_selector(&result_selector(result_id)))
    }

    fn scroll_to_result(&self, wrapper: &Element, detail: &Element) {
        let behavior = if self.config.smooth_scroll {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };
        let Some(hint) = dom::first(wrapper.query_selector(FLOW_HINT)) else {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(behavior);
            options.set_block(ScrollLogicalPosition::Start);
            detail.scroll_into_view_with_scroll_into_view_options(&options);
            return;
        };
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let hint_bottom = hint.get_bounding_client_rect().bottom();
        let options = ScrollToOptions::new();
        options.set_top(result_scroll_top(
            scroll_y,
            hint_bottom,
            self.config.result_scroll_gap,
        ));
        options.set_behavior(behavior);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
