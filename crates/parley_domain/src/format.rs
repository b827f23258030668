//! Human readable rendering of response metadata.

/// `850ms`, `1.2s`
pub fn format_response_time(milliseconds: i64) -> String {
    if milliseconds < 1000 {
        format!("{milliseconds}ms")
    } else {
        format!("{:.1}s", milliseconds as f64 / 1000.0)
    }
}

/// `$0.0088`
pub fn format_cost(cost: f64) -> String {
    format!("${cost:.4}")
}

/// `950`, `1.2k`
pub fn format_token_count(count: u64) -> String {
    if count > 1000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}
