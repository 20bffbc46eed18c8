/// Slack for ratios the browser reports a hair under the threshold it
/// fired for.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether an intersection entry counts as having crossed `threshold`.
/// A target taller than the root can never reach a large ratio, so one
/// that covers the whole root height counts as well.
pub fn threshold_crossed(
    is_intersecting: bool,
    ratio: f64,
    threshold: f64,
    covered_height: f64,
    root_height: Option<f64>,
) -> bool {
    if !is_intersecting {
        return false;
    }
    if ratio + RATIO_TOLERANCE >= threshold {
        return true;
    }
    match root_height {
        Some(root_height) if root_height > 0.0 => covered_height + 1.0 >= root_height,
        _ => false,
    }
}
