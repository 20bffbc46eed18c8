use web_sys::{Element, HtmlElement};

use crate::dom::{self, js_err};
use crate::observer::OneShotObserver;
use crate::view_controller::ViewController;
use matsuri_recap_core::vocab::{CLASS_VISIBLE, HERO, REVEAL_SECTIONS};
use matsuri_recap_core::Language;

impl ViewController {
    pub(crate) fn active_block(&self) -> Option<&HtmlElement> {
        Language::ALL
            .into_iter()
            .map(|lang| &self.controls(lang).content)
            .find(|content| dom::is_displayed(content))
    }

    /// Restarts the reveal animation for the visible content block. Each
    /// call disconnects the previous pass before observing again.
    pub(crate) fn run_reveal_pass(&self) {
        let Some(block) = self.active_block() else {
            return;
        };
        let sections = dom::elements(block.query_selector_all(REVEAL_SECTIONS));
        self.reveal_observer.borrow_mut().take();

        if !OneShotObserver::is_supported() {
            gloo::console::log!("reveal: IntersectionObserver unavailable, showing all");
            reveal_all(&sections);
            return;
        }
        let observer = match OneShotObserver::new(
            self.config.reveal_threshold,
            Some(&self.config.reveal_root_margin),
        ) {
            Ok(observer) => observer,
            Err(err) => {
                gloo::console::warn!("reveal: observer failed", js_err(err));
                reveal_all(&sections);
                return;
            }
        };
        for section in &sections {
            dom::set_class(section, CLASS_VISIBLE, false);
            observer.subscribe(section, |target| {
                dom::set_class(target, CLASS_VISIBLE, true);
            });
        }
        // above the fold; no scroll may ever come
        if let Some(hero) = dom::first(block.query_selector(HERO)) {
            dom::set_class(&hero, CLASS_VISIBLE, true);
        }
        *self.reveal_observer.borrow_mut() = Some(observer);
    }
}

fn reveal_all(sections: &[Element]) {
    for section in sections {
        dom::set_class(section, CLASS_VISIBLE, true);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo::timers::future::TimeoutFuture;
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    use super::reveal_all;
    use crate::dom;
    use crate::view_controller::fixture::{mount, mount_default, quiet_config};
    use matsuri_recap_core::vocab::{CLASS_VISIBLE, REVEAL_SECTIONS};
    use matsuri_recap_core::Language;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn hero_is_revealed_after_initial_pass() {
        let page = mount_default(Some("ja"));
        TimeoutFuture::new(page.view.config.reveal_rerun_delay_ms + 50).await;
        assert!(dom::has_class(&page.query("#content-ja .hero"), CLASS_VISIBLE));
        assert!(!dom::has_class(&page.query("#content-en .hero"), CLASS_VISIBLE));
    }

    #[wasm_bindgen_test(async)]
    async fn pass_leaves_hidden_block_alone() {
        let page = mount_default(Some("ja"));
        let en_results = page.query("#content-en .results");
        dom::set_class(&en_results, CLASS_VISIBLE, true);
        TimeoutFuture::new(page.view.config.reveal_rerun_delay_ms + 50).await;

        let ja_block = &page.view.controls(Language::Ja).content;
        assert_eq!(
            page.view.active_block().map(|block| block.id()),
            Some(ja_block.id())
        );
        assert!(dom::has_class(&en_results, CLASS_VISIBLE));
    }

    #[wasm_bindgen_test(async)]
    async fn stale_timer_from_rapid_switch_targets_current_block() {
        let page = mount_default(Some("ja"));
        TimeoutFuture::new(page.view.config.reveal_rerun_delay_ms + 50).await;

        page.view.activate_language(Language::En);
        page.view.activate_language(Language::Ja);
        TimeoutFuture::new(page.view.config.reveal_rerun_delay_ms + 50).await;
        assert!(dom::has_class(&page.query("#content-ja .hero"), CLASS_VISIBLE));
        assert!(!dom::has_class(&page.query("#content-en .hero"), CLASS_VISIBLE));
    }

    #[wasm_bindgen_test(async)]
    async fn new_pass_clears_earlier_reveal() {
        let page = mount(Some("ja"), quiet_config());
        TimeoutFuture::new(page.view.config.reveal_rerun_delay_ms + 50).await;
        let contact = page.query("#content-ja .contact");
        dom::set_class(&contact, CLASS_VISIBLE, true);

        page.view.run_reveal_pass();
        assert!(!dom::has_class(&contact, CLASS_VISIBLE));
        assert!(dom::has_class(&page.query("#content-ja .hero"), CLASS_VISIBLE));
    }

    #[wasm_bindgen_test(async)]
    async fn observed_section_is_revealed_once() {
        let page = mount(Some("ja"), quiet_config());
        let flowchart = page.query("#content-ja .flowchart");
        TimeoutFuture::new(page.view.config.reveal_rerun_delay_ms + 150).await;
        assert!(dom::has_class(&flowchart, CLASS_VISIBLE));

        dom::set_class(&flowchart, CLASS_VISIBLE, false);
        TimeoutFuture::new(150).await;
        assert!(!dom::has_class(&flowchart, CLASS_VISIBLE));
    }

    #[wasm_bindgen_test(async)]
    async fn later_pass_disconnects_previous_observer() {
        let page = mount(Some("ja"), quiet_config());
        TimeoutFuture::new(page.view.config.reveal_rerun_delay_ms + 50).await;
        let ja = &page.view.controls(Language::Ja).content;
        let en = &page.view.controls(Language::En).content;
        let flowchart = page.query("#content-ja .flowchart");

        page.view.run_reveal_pass();
        assert!(!dom::has_class(&flowchart, CLASS_VISIBLE));
        dom::set_displayed(ja, false);
        dom::set_displayed(en, true);
        page.view.run_reveal_pass();
        dom::set_displayed(en, false);
        dom::set_displayed(ja, true);

        TimeoutFuture::new(150).await;
        assert!(!dom::has_class(&flowchart, CLASS_VISIBLE));
        assert!(dom::has_class(&page.query("#content-ja .hero"), CLASS_VISIBLE));
    }

    #[wasm_bindgen_test(async)]
    async fn missing_intersection_observer_reveals_everything() {
        let page = mount(Some("ja"), quiet_config());
        TimeoutFuture::new(page.view.config.reveal_rerun_delay_ms + 50).await;
        let window = web_sys::window().expect("window available");
        let key = JsValue::from_str("IntersectionObserver");
        let saved = Reflect::get(&window, &key).expect("read IntersectionObserver");
        Reflect::set(&window, &key, &JsValue::UNDEFINED).expect("hide IntersectionObserver");

        page.view.run_reveal_pass();
        let installed = page.view.reveal_observer.borrow().is_some();
        Reflect::set(&window, &key, &saved).expect("restore IntersectionObserver");

        assert!(!installed);
        for selector in [".hero", ".flowchart", ".results", ".contact"] {
            let section = page.query(&format!("#content-ja {selector}"));
            assert!(dom::has_class(&section, CLASS_VISIBLE), "{selector}");
        }
    }

    #[wasm_bindgen_test]
    fn reveal_all_marks_every_section() {
        let page = mount(Some("ja"), quiet_config());
        let block = &page.view.controls(Language::En).content;
        let sections = dom::elements(block.query_selector_all(REVEAL_SECTIONS));
        assert_eq!(sections.len(), 3);
        reveal_all(&sections);
        assert!(sections
            .iter()
            .all(|section| dom::has_class(section, CLASS_VISIBLE)));
    }

    #[wasm_bindgen_test]
    fn repeated_passes_are_idempotent() {
        let page = mount_default(Some("en"));
        page.view.run_reveal_pass();
        page.view.run_reveal_pass();
        assert!(dom::has_class(&page.query("#content-en .hero"), CLASS_VISIBLE));
        assert!(page.view.reveal_observer.borrow().is_some());
    }
}
