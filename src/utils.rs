/// Shared utility functions for the surf spots service
///
/// Parse a spot id from a raw path segment
///
/// Parsing is lenient: leading whitespace and an optional sign are accepted,
/// then the leading run of digits is taken and anything after it is ignored.
/// A `0x`/`0X` prefix switches to hexadecimal digits. Values with no leading
/// digits (or that overflow) yield `None`, which callers treat the same as an
/// id that is not in the catalog.
///
/// # Examples
///
/// ```
/// use surf_spots_service::utils::parse_spot_id;
///
/// assert_eq!(parse_spot_id("3"), Some(3));
/// assert_eq!(parse_spot_id("2abc"), Some(2));
/// assert_eq!(parse_spot_id("-4"), Some(-4));
/// assert_eq!(parse_spot_id("0x1"), Some(1));
/// assert_eq!(parse_spot_id("abc"), None);
/// ```
pub fn parse_spot_id(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = rest
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
