/// Token lifetime when none is configured or the configured value cannot be
/// parsed: one hour.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Parse a token lifetime written as a duration string into seconds.
///
/// Accepts an integer followed by a unit suffix: `s` (seconds), `m`
/// (minutes), `h` (hours), or `d` (days). Anything else, including a bare
/// number or an unrecognized unit, collapses to [`DEFAULT_TTL_SECS`].
///
/// # Examples
/// ```
/// use auth::parse_ttl;
///
/// assert_eq!(parse_ttl("1h"), 3600);
/// assert_eq!(parse_ttl("90s"), 90);
/// assert_eq!(parse_ttl("2w"), 3600); // unrecognized unit
/// ```
pub fn parse_ttl(ttl: &str) -> u64 {
    let ttl = ttl.trim();
    let digits = ttl.len() - ttl.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let (value, unit) = ttl.split_at(digits);

    let Ok(value) = value.parse::<u64>() else {
        return DEFAULT_TTL_SECS;
    };

    match unit {
        "s" => value,
        "m" => value * 60,
        "h" => value * 3600,
        "d" => value * 86400,
        _ => DEFAULT_TTL_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_ttl("30s"), 30);
        assert_eq!(parse_ttl("15m"), 900);
        assert_eq!(parse_ttl("1h"), 3600);
        assert_eq!(parse_ttl("2d"), 172_800);
    }

    #[test]
    fn test_unrecognized_falls_back_to_default() {
        assert_eq!(parse_ttl("1w"), DEFAULT_TTL_SECS);
        assert_eq!(parse_ttl("3600"), DEFAULT_TTL_SECS);
        assert_eq!(parse_ttl("h"), DEFAULT_TTL_SECS);
        assert_eq!(parse_ttl(""), DEFAULT_TTL_SECS);
        assert_eq!(parse_ttl("abc"), DEFAULT_TTL_SECS);
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(parse_ttl(" 1h "), 3600);
    }
}
