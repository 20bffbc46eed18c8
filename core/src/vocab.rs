//! Ids, class names and marker classes shared with the page markup and CSS.

pub const CONTENT_WRAPPER: &str = ".content-wrapper";

pub const REVEAL_SECTIONS: &str =
    ".hero, .flowchart, .results, .community-info, .ending, .next-event, .contact";
pub const HERO: &str = ".hero";

pub const NUMBER_ITEM: &str = ".number-item";

pub const FLOW_RESULT_LINK: &str = ".flow-result-link";
pub const FLOW_RESULT_BTN: &str = ".flow-result-btn";
pub const FLOW_RESULT_DETAIL: &str = ".flow-result-detail";
pub const RESULT_CONTENT: &str = ".result-content";
pub const RESULT_CLOSE: &str = ".result-close";
pub const FLOW_HINT: &str = ".flow-hint";

pub const FLOWCHART: &str = ".flowchart";
pub const SCROLL_HINT_OVERLAY: &str = ".scroll-hint-overlay";

pub const RESULT_ATTR: &str = "data-result";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SHOWN: &str = "shown";
