use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Element;

use crate::dom;
use crate::view_controller::ViewController;
use matsuri_recap_core::vocab::{CLASS_ACTIVE, NUMBER_ITEM};

impl ViewController {
    /// One delegated document listener handles both the item toggle and the
    /// outside-click dismissal, so a click on an item can never also dismiss it.
    pub(crate) fn install_tooltip_toggle(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new(&self.document, "click", move |event| {
            let clicked = dom::event_element(event)
                .and_then(|target| dom::first(target.closest(NUMBER_ITEM)));
            view.toggle_annotation(clicked.as_ref());
        });
        self.push_listener(listener);
    }

    /// `None` means the click landed outside every annotation item. A click
    /// on an expanded item collapses it; any other item click expands only
    /// that item.
    pub(crate) fn toggle_annotation(&self, clicked: Option<&Element>) {
        let items = dom::elements(self.document.query_selector_all(NUMBER_ITEM));
        let clicked_index = clicked.and_then(|clicked| items.iter().position(|item| item == clicked));
        let was_expanded = clicked_index
            .map(|index| dom::has_class(&items[index], CLASS_ACTIVE))
            .unwrap_or(false);
        let next = clicked_index.filter(|_| !was_expanded);
        for (index, item) in items.iter().enumerate() {
            dom::set_class(item, CLASS_ACTIVE, Some(index) == next);
        }
    }
}
