/// Document offset that puts the result panel `gap` below the hint's
/// bottom edge.
pub fn result_scroll_top(scroll_y: f64, hint_bottom: f64, gap: f64) -> f64 {
    scroll_y + hint_bottom + gap
}

/// Attribute selector for a result id. Quotes and backslashes are escaped
/// so odd ids stay a valid selector and simply match nothing.
pub fn result_selector(result_id: &str) -> String {
    let mut escaped = String::with_capacity(result_id.len());
    for ch in result_id.chars() {
        match ch {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\n' => escaped.push_str("\\a "),
            _ => escaped.push(ch),
        }
    }
    format!("[{}=\"{escaped}\"]", crate::vocab::RESULT_ATTR)
}

/// Missing or empty ids never resolve to a result.
pub fn normalize_result_id(raw: Option<&str>) -> Option<&str> {
    let id = raw?;
    if id.trim().is_empty() {
        return None;
    }
    Some(id)
}
