//! One-line textual progress bar.

/// Build a fixed-width progress line, recomputed fresh on every call.
///
/// The bar is `bar_length` characters wide, a dash arrow with a `>` head,
/// followed by the percentage and the raw counts. A zero total reports 0%.
pub fn progress_line(current: u32, total: u32, bar_length: usize) -> String {
    let fraction = if total == 0 {
        0.0
    } else {
        current as f64 / total as f64
    };

    let arrow_len = ((fraction * bar_length as f64) as i64 - 1).max(0) as usize;
    let arrow = format!("{}>", "-".repeat(arrow_len));
    let padding = " ".repeat(bar_length.saturating_sub(arrow.len()));

    format!(
        "Progress: [{}{}] {:.2}% ({}/{})",
        arrow,
        padding,
        fraction * 100.0,
        current,
        total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_has_fixed_width() {
        for current in [0, 1, 500, 999, 1000] {
            let line = progress_line(current, 1000, 75);
            let open = line.find('[').unwrap();
            let close = line.find(']').unwrap();
            assert_eq!(close - open - 1, 75);
        }
    }

    #[test]
    fn test_empty_progress() {
        let line = progress_line(0, 1000, 75);
        assert!(line.starts_with("Progress: [>"));
        assert!(line.ends_with("0.00% (0/1000)"));
    }

    #[test]
    fn test_full_progress() {
        let line = progress_line(1000, 1000, 75);
        assert!(line.contains("100.00% (1000/1000)"));
        // Arrow fills the bar: 74 dashes plus the head
        assert!(line.contains(&format!("[{}>]", "-".repeat(74))));
    }

    #[test]
    fn test_half_progress() {
        let line = progress_line(500, 1000, 75);
        assert!(line.contains("50.00% (500/1000)"));
        assert!(line.contains(&format!("[{}>", "-".repeat(36))));
    }

    #[test]
    fn test_zero_total_reports_zero() {
        let line = progress_line(0, 0, 75);
        assert!(line.contains("0.00% (0/0)"));
    }
}
