use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;

use crate::dom;
use crate::persisted_store;
use crate::view_controller::ViewController;
use matsuri_recap_core::vocab::CLASS_ACTIVE;
use matsuri_recap_core::Language;

impl ViewController {
    /// Shows `lang`'s content block, hides the other one and restarts the
    /// reveal animation once layout has settled. Never fails.
    pub(crate) fn activate_language(self: &Rc<Self>, lang: Language) {
        for candidate in Language::ALL {
            let controls = self.controls(candidate);
            let selected = candidate == lang;
            dom::set_displayed(&controls.content, selected);
            dom::set_class(&controls.switch, CLASS_ACTIVE, selected);
        }
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", lang.code());
        }
        self.document.set_title(lang.title());
        persisted_store::save_language(lang);
        self.schedule_reveal_pass();
    }

    /// Stale timers from rapid switching only re-run an idempotent pass.
    fn schedule_reveal_pass(self: &Rc<Self>) {
        let view = Rc::clone(self);
        Timeout::new(self.config.reveal_rerun_delay_ms, move || {
            view.run_reveal_pass();
        })
        .forget();
    }

    pub(crate) fn install_language_switches(self: &Rc<Self>) {
        for lang in Language::ALL {
            let view = Rc::clone(self);
            let listener = EventListener::new(&self.controls(lang).switch, "click", move |_event| {
                view.activate_language(lang);
            });
            self.push_listener(listener);
        }
    }
}
