use serde::Deserialize;

pub const DEBUG_OVERRIDES_KEY: &str = "matsuri-recap.debug";

pub const REVEAL_RERUN_DELAY_MS: u32 = 50;
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const HINT_THRESHOLD: f64 = 0.3;
pub const HINT_DURATION_MS: u32 = 2500;
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 800.0;
pub const RESULT_SCROLL_GAP: f64 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Wait between showing a content block and measuring its sections.
    pub reveal_rerun_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub hint_threshold: f64,
    pub hint_duration_ms: u32,
    pub narrow_viewport_max_width: f64,
    pub result_scroll_gap: f64,
    /// `false` scrolls to a flow result instantly.
    pub smooth_scroll: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            reveal_rerun_delay_ms: REVEAL_RERUN_DELAY_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            hint_threshold: HINT_THRESHOLD,
            hint_duration_ms: HINT_DURATION_MS,
            narrow_viewport_max_width: NARROW_VIEWPORT_MAX_WIDTH,
            result_scroll_gap: RESULT_SCROLL_GAP,
            smooth_scroll: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DebugOverrides {
    pub reveal_rerun_delay_ms: Option<u32>,
    pub hint_duration_ms: Option<u32>,
    pub narrow_viewport_max_width: Option<f64>,
}

impl DebugOverrides {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        serde_json::from_str(trimmed).ok()
    }
}

impl ViewConfig {
    pub fn with_overrides(mut self, overrides: &DebugOverrides) -> Self {
        if let Some(delay) = overrides.reveal_rerun_delay_ms {
            self.reveal_rerun_delay_ms = delay;
        }
        if let Some(duration) = overrides.hint_duration_ms {
            self.hint_duration_ms = duration;
        }
        if let Some(width) = overrides.narrow_viewport_max_width {
            if width.is_finite() && width > 0.0 {
                self.narrow_viewport_max_width = width;
            }
        }
        self
    }

    pub fn is_narrow_viewport(&self, width: f64) -> bool {
        width <= self.narrow_viewport_max_width
    }
}
