use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, NodeList};

pub(crate) fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn first(found: Result<Option<Element>, JsValue>) -> Option<Element> {
    found.ok().flatten()
}

pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn set_class(element: &Element, class: &str, enabled: bool) {
    let list = element.class_list();
    let _ = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub(crate) fn is_displayed(element: &HtmlElement) -> bool {
    let display = element
        .style()
        .get_property_value("display")
        .unwrap_or_default();
    display.trim() != "none"
}

pub(crate) fn set_displayed(element: &HtmlElement, displayed: bool) {
    let value = if displayed { "block" } else { "none" };
    let _ = element.style().set_property("display", value);
}

pub(crate) fn has_global_function(name: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str(name))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

pub(crate) fn js_err(error: JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}
