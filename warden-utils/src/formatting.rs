/// Format seconds into a compact human-readable duration (e.g. 45s, 10m, 2h 30m, 1d 6h).
pub fn format_compact_duration(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    // Days render at most one sub-unit to stay short.
    if days > 0 {
        return if hours > 0 {
            format!("{}d {}h", days, hours)
        } else {
            format!("{}d", days)
        };
    }

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

/// Capitalize a category identifier for display ("fun" -> "Fun").
pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_category, format_compact_duration};

    #[test]
    fn compact_duration_formatting() {
        assert_eq!(format_compact_duration(0), "0s");
        assert_eq!(format_compact_duration(59), "59s");
        assert_eq!(format_compact_duration(60), "1m");
        assert_eq!(format_compact_duration(61), "1m 1s");
        assert_eq!(format_compact_duration(3600), "1h");
        assert_eq!(format_compact_duration(3660), "1h 1m");
        assert_eq!(format_compact_duration(3605), "1h 5s");
        assert_eq!(format_compact_duration(86400), "1d");
        assert_eq!(format_compact_duration(90000), "1d 1h");
    }

    #[test]
    fn category_labels_are_capitalized() {
        assert_eq!(display_category("fun"), "Fun");
        assert_eq!(display_category("moderation"), "Moderation");
        assert_eq!(display_category(""), "");
    }
}
