use std::time::{SystemTime, UNIX_EPOCH};

/// Return the current unix timestamp in seconds.
pub fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}

/// Render a unix timestamp as a Discord timestamp tag, which clients
/// display in the viewer's locale. Styles: `F` full, `f` short, `R`
/// relative.
pub fn discord_timestamp(unix_secs: i64, style: char) -> String {
    format!("<t:{}:{}>", unix_secs, style)
}

#[cfg(test)]
mod tests {
    use super::discord_timestamp;

    #[test]
    fn timestamp_tags_render_for_client_side_formatting() {
        assert_eq!(discord_timestamp(1_700_000_000, 'F'), "<t:1700000000:F>");
        assert_eq!(discord_timestamp(0, 'R'), "<t:0:R>");
    }
}
