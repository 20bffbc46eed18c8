use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::Element;

use crate::app_config;
use crate::dom::{self, js_err};
use crate::observer::OneShotObserver;
use crate::view_controller::ViewController;
use matsuri_recap_core::vocab::{CLASS_ACTIVE, CLASS_SHOWN, FLOWCHART, SCROLL_HINT_OVERLAY};

impl ViewController {
    /// Narrow viewports only, judged once here; no resize tracking and no
    /// fallback when IntersectionObserver is missing.
    pub(crate) fn install_scroll_hint(self: &Rc<Self>) {
        let Some(width) = app_config::viewport_width(&self.window) else {
            return;
        };
        if !self.config.is_narrow_viewport(width) {
            return;
        }
        if !OneShotObserver::is_supported() {
            return;
        }
        let observer = match OneShotObserver::new(self.config.hint_threshold, None) {
            Ok(observer) => observer,
            Err(err) => {
                gloo::console::warn!("scroll hint: observer failed", js_err(err));
                return;
            }
        };
        let duration_ms = self.config.hint_duration_ms;
        for flowchart in dom::elements(self.document.query_selector_all(FLOWCHART)) {
            observer.subscribe(&flowchart, move |target| {
                if let Some(overlay) = dom::first(target.query_selector(SCROLL_HINT_OVERLAY)) {
                    play_scroll_hint(&overlay, duration_ms);
                }
            });
        }
        *self.hint_observer.borrow_mut() = Some(observer);
    }
}

/// Arms the overlay's entrance animation unless it was already shown, then
/// retracts `active` after `duration_ms`. `shown` is never cleared, so this
/// fires at most once per overlay. Returns whether it fired.
pub(crate) fn play_scroll_hint(overlay: &Element, duration_ms: u32) -> bool {
    if dom::has_class(overlay, CLASS_SHOWN) {
        return false;
    }
    dom::set_class(overlay, CLASS_ACTIVE, true);
    dom::set_class(overlay, CLASS_SHOWN, true);
    gloo::console::log!("scroll hint: shown");
    let overlay = overlay.clone();
    Timeout::new(duration_ms, move || {
        dom::set_class(&overlay, CLASS_ACTIVE, false);
    })
    .forget();
    true
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::play_scroll_hint;
    use crate::dom;
    use crate::view_controller::fixture::{mount, quiet_config};
    use matsuri_recap_core::vocab::{CLASS_ACTIVE, CLASS_SHOWN};
    use matsuri_recap_core::{Language, ViewConfig};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn hint_plays_once_and_retracts() {
        let page = mount(Some("ja"), quiet_config());
        let overlay = page.query("#content-ja .scroll-hint-overlay");
        assert!(!dom::has_class(&overlay, CLASS_SHOWN));

        assert!(play_scroll_hint(&overlay, 30));
        assert!(dom::has_class(&overlay, CLASS_ACTIVE));
        assert!(dom::has_class(&overlay, CLASS_SHOWN));

        assert!(!play_scroll_hint(&overlay, 30));

        TimeoutFuture::new(80).await;
        assert!(!dom::has_class(&overlay, CLASS_ACTIVE));
        assert!(dom::has_class(&overlay, CLASS_SHOWN));

        assert!(!play_scroll_hint(&overlay, 30));
        assert!(!dom::has_class(&overlay, CLASS_ACTIVE));
    }

    #[wasm_bindgen_test(async)]
    async fn visible_flowchart_plays_hint_once() {
        let config = ViewConfig {
            narrow_viewport_max_width: f64::MAX,
            hint_duration_ms: 400,
            ..quiet_config()
        };
        let page = mount(Some("ja"), config);
        let overlay = page.query("#content-ja .scroll-hint-overlay");
        TimeoutFuture::new(150).await;
        assert!(dom::has_class(&overlay, CLASS_ACTIVE));
        assert!(dom::has_class(&overlay, CLASS_SHOWN));

        TimeoutFuture::new(400).await;
        assert!(!dom::has_class(&overlay, CLASS_ACTIVE));
        assert!(dom::has_class(&overlay, CLASS_SHOWN));

        // leave and re-enter the viewport with the one-shot marker cleared
        dom::set_class(&overlay, CLASS_SHOWN, false);
        let ja = &page.view.controls(Language::Ja).content;
        dom::set_displayed(ja, false);
        TimeoutFuture::new(100).await;
        dom::set_displayed(ja, true);
        TimeoutFuture::new(150).await;
        assert!(!dom::has_class(&overlay, CLASS_ACTIVE));
        assert!(!dom::has_class(&overlay, CLASS_SHOWN));
    }

    #[wasm_bindgen_test]
    fn wide_viewport_never_installs_hint() {
        let config = ViewConfig {
            narrow_viewport_max_width: 0.0,
            ..ViewConfig::default()
        };
        let page = mount(Some("ja"), config);
        assert!(page.view.hint_observer.borrow().is_none());
    }

    #[wasm_bindgen_test]
    fn narrow_viewport_installs_hint() {
        let config = ViewConfig {
            narrow_viewport_max_width: f64::MAX,
            ..ViewConfig::default()
        };
        let page = mount(Some("ja"), config);
        assert!(page.view.hint_observer.borrow().is_some());
    }
}
