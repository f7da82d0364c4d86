//! Fixed illustrative datasets for the Insights section.
//!
//! These are sample numbers, not derived from live session stats; the
//! charts sketch what a week of focus could look like.

/// Weekly focus-time trend, minutes per day
pub const WEEKLY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const WEEKLY_MINUTES: [u64; 7] = [45, 60, 30, 75, 90, 45, 60];

/// Focus-category breakdown, percent of total
pub const CATEGORY_SHARES: [(&str, u64); 5] = [
    ("Study", 35),
    ("Work", 25),
    ("Reading", 20),
    ("Creative", 15),
    ("Other", 5),
];

/// Weekly series as (x, y) points for a line chart
pub fn weekly_points() -> Vec<(f64, f64)> {
    WEEKLY_MINUTES
        .iter()
        .enumerate()
        .map(|(i, &m)| (i as f64, m as f64))
        .collect()
}

/// Upper Y bound for the weekly chart, rounded up to a clean gridline
pub fn weekly_y_max() -> f64 {
    let max = WEEKLY_MINUTES.iter().copied().max().unwrap_or(0);
    (max.div_ceil(30) * 30) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_weekly_points_match_dataset() {
        let points = weekly_points();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], (0.0, 45.0));
        assert_eq!(points[4], (4.0, 90.0));
    }

    #[test]
    fn test_weekly_y_max_covers_peak() {
        assert_eq!(weekly_y_max(), 90.0);
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let total: u64 = CATEGORY_SHARES.iter().map(|(_, pct)| pct).sum();
        assert_eq!(total, 100);
    }
}
