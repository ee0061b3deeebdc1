/// Parse a compact duration token like `30s`, `10m`, `2h`, `1d`, `1h30m`,
/// or a plain number of seconds.
pub fn parse_duration_seconds(raw: &str) -> Option<u64> {
    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut saw_unit = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            continue;
        }

        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }

        let multiplier = match ch.to_ascii_lowercase() {
            's' => 1,
            'm' => 60,
            'h' => 3_600,
            'd' => 86_400,
            _ => return None,
        };

        if digits.is_empty() {
            return None;
        }

        let value = digits.parse::<u64>().ok()?;
        digits.clear();
        total = total.checked_add(value.checked_mul(multiplier)?)?;
        saw_unit = true;
    }

    if !digits.is_empty() {
        // A bare trailing number is plain seconds, valid only on its own.
        if saw_unit {
            return None;
        }
        total = digits.parse::<u64>().ok()?;
    }

    (total > 0).then_some(total)
}

/// Reference to a user given as command input: a numeric ID or an exact
/// `name#discriminator` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserRef {
    Id(u64),
    Tag(String),
}

/// Parse a ban-list user identifier.
pub fn parse_user_ref(raw: &str) -> Option<UserRef> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if value.chars().all(|ch| ch.is_ascii_digit()) {
        return value.parse::<u64>().ok().map(UserRef::Id);
    }

    let (name, discriminator) = value.rsplit_once('#')?;
    if name.is_empty()
        || discriminator.is_empty()
        || !discriminator.chars().all(|ch| ch.is_ascii_digit())
    {
        return None;
    }

    Some(UserRef::Tag(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{UserRef, parse_duration_seconds, parse_user_ref};

    #[test]
    fn parses_single_unit_durations() {
        assert_eq!(parse_duration_seconds("30s"), Some(30));
        assert_eq!(parse_duration_seconds("10m"), Some(600));
        assert_eq!(parse_duration_seconds("2h"), Some(7_200));
        assert_eq!(parse_duration_seconds("1d"), Some(86_400));
        assert_eq!(parse_duration_seconds("90"), Some(90));
        assert_eq!(parse_duration_seconds("  10M "), Some(600));
    }

    #[test]
    fn parses_compound_durations() {
        assert_eq!(parse_duration_seconds("1h30m"), Some(5_400));
        assert_eq!(parse_duration_seconds("1d 6h"), Some(108_000));
    }

    #[test]
    fn rejects_invalid_durations() {
        assert_eq!(parse_duration_seconds(""), None);
        assert_eq!(parse_duration_seconds("0"), None);
        assert_eq!(parse_duration_seconds("0m"), None);
        assert_eq!(parse_duration_seconds("m"), None);
        assert_eq!(parse_duration_seconds("10x"), None);
        assert_eq!(parse_duration_seconds("1h30"), None);
        assert_eq!(parse_duration_seconds("soon"), None);
    }

    #[test]
    fn parses_numeric_user_ids() {
        assert_eq!(
            parse_user_ref("123456789012345678"),
            Some(UserRef::Id(123456789012345678))
        );
        assert_eq!(parse_user_ref(" 42 "), Some(UserRef::Id(42)));
    }

    #[test]
    fn parses_user_tags() {
        assert_eq!(
            parse_user_ref("someone#1234"),
            Some(UserRef::Tag("someone#1234".to_owned()))
        );
    }

    #[test]
    fn rejects_malformed_user_refs() {
        assert_eq!(parse_user_ref(""), None);
        assert_eq!(parse_user_ref("someone"), None);
        assert_eq!(parse_user_ref("#1234"), None);
        assert_eq!(parse_user_ref("someone#"), None);
        assert_eq!(parse_user_ref("someone#12ab"), None);
    }
}
