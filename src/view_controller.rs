use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::app_config;
use crate::observer::OneShotObserver;
use crate::persisted_store;
use matsuri_recap_core::{Language, ViewConfig};

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<ViewController>>> = RefCell::new(None);
}

pub(crate) struct LanguageControls {
    pub(crate) content: HtmlElement,
    pub(crate) switch: Element,
}

/// Owns every DOM handle and listener the page script needs. Built once
/// per page load; all behavior after `start` is event driven.
pub(crate) struct ViewController {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) config: ViewConfig,
    pub(crate) ja: LanguageControls,
    pub(crate) en: LanguageControls,
    pub(crate) reveal_observer: RefCell<Option<OneShotObserver>>,
    pub(crate) hint_observer: RefCell<Option<OneShotObserver>>,
    pub(crate) listeners: RefCell<Vec<EventListener>>,
}

impl ViewController {
    pub(crate) fn new(config: ViewConfig) -> Option<Rc<Self>> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let ja = resolve_controls(&document, Language::Ja)?;
        let en = resolve_controls(&document, Language::En)?;
        Some(Rc::new(Self {
            window,
            document,
            config,
            ja,
            en,
            reveal_observer: RefCell::new(None),
            hint_observer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    pub(crate) fn controls(&self, lang: Language) -> &LanguageControls {
        match lang {
            Language::Ja => &self.ja,
            Language::En => &self.en,
        }
    }

    /// Applies the initial language first so its reveal pass is queued before
    /// any interaction handler exists.
    pub(crate) fn start(self: &Rc<Self>, initial: Language) {
        self.activate_language(initial);
        self.install_language_switches();
        self.install_tooltip_toggle();
        self.install_flow_results();
        self.install_scroll_hint();
    }

    pub(crate) fn push_listener(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn shutdown(&self) {
        self.listeners.borrow_mut().clear();
        self.reveal_observer.borrow_mut().take();
        self.hint_observer.borrow_mut().take();
    }
}

fn resolve_controls(document: &Document, lang: Language) -> Option<LanguageControls> {
    let content = document
        .get_element_by_id(lang.content_id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let switch = document.get_element_by_id(lang.switch_id())?;
    Some(LanguageControls { content, switch })
}

pub(crate) fn boot() {
    let config = app_config::load_view_config();
    let initial = persisted_store::load_language();
    let Some(view) = ViewController::new(config) else {
        gloo::console::warn!("view: page markup incomplete, interactivity disabled");
        return;
    };
    gloo::console::log!("view: starting", initial.code());
    view.start(initial);
    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(view);
    });
}
