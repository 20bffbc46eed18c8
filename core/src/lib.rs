pub mod config;
pub mod flow;
pub mod language;
pub mod viewport;
pub mod vocab;

pub use config::{DebugOverrides, ViewConfig, DEBUG_OVERRIDES_KEY};
pub use flow::{normalize_result_id, result_scroll_top, result_selector};
pub use language::{Language, LanguageParseError, LANGUAGE_STORAGE_KEY};
pub use viewport::threshold_crossed;
