//! Generic field grammar: comma-separated conditions, each a wildcard,
//! value, or `low-high` range with an optional `/step` suffix.

/// Parse a digits-only non-negative integer.
///
/// Anything else (empty, sign, whitespace, overflow) is `None`, which
/// fails every subsequent bound comparison the way a NaN would.
pub(crate) fn parse_num(value: &str) -> Option<u32> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}

pub(crate) fn in_range(value: u32, start: u32, stop: u32) -> bool {
    value >= start && value <= stop
}

/// Only digits and the four structural characters may appear in a numeric
/// field. Aliases must be substituted away before this screen runs.
fn has_valid_charset(field: &str) -> bool {
    field
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | ',' | '/' | '*'))
}

/// One range expression: `*`, a bare value, or `low-high`, within bounds.
fn is_valid_range(value: &str, start: u32, stop: u32) -> bool {
    let sides: Vec<&str> = value.split('-').collect();
    match sides.as_slice() {
        [single] => {
            *single == "*" || parse_num(single).is_some_and(|v| in_range(v, start, stop))
        }
        [small, big] => match (parse_num(small), parse_num(big)) {
            (Some(small), Some(big)) => {
                small <= big && in_range(small, start, stop) && in_range(big, start, stop)
            }
            _ => false,
        },
        // Two or more dashes is structurally malformed.
        _ => false,
    }
}

/// A step divisor must be a nonzero run of digits. It is not bounded by
/// the field's range, so check the digits directly instead of going
/// through a width-limited integer parse.
fn is_valid_step(step: &str) -> bool {
    !step.is_empty()
        && step.bytes().all(|b| b.is_ascii_digit())
        && step.bytes().any(|b| b != b'0')
}

fn is_valid_condition(condition: &str, start: u32, stop: u32) -> bool {
    // A dangling divisor (`*/`) still splits into two parts; reject it
    // before looking at the split.
    if condition.ends_with('/') {
        return false;
    }
    let splits: Vec<&str> = condition.split('/').collect();
    match splits.as_slice() {
        [range] => is_valid_range(range, start, stop),
        [range, step] => is_valid_range(range, start, stop) && is_valid_step(step),
        // More than one `/` (`*/*/*`) is malformed.
        _ => false,
    }
}

/// Validate a whole field against the inclusive bound `[start, stop]`.
pub(crate) fn validate_for_range(field: &str, start: u32, stop: u32) -> bool {
    if !has_valid_charset(field) {
        return false;
    }
    field
        .split(',')
        .all(|condition| is_valid_condition(condition, start, stop))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_num_requires_bare_digits() {
        assert_eq!(parse_num("15"), Some(15));
        assert_eq!(parse_num("007"), Some(7));
        assert_eq!(parse_num(""), None);
        assert_eq!(parse_num("+5"), None);
        assert_eq!(parse_num("-5"), None);
        assert_eq!(parse_num(" 5"), None);
        assert_eq!(parse_num("5x"), None);
    }

    #[test]
    fn accepts_wildcard_values_and_lists() {
        assert!(validate_for_range("*", 0, 59));
        assert!(validate_for_range("0", 0, 59));
        assert!(validate_for_range("59", 0, 59));
        assert!(validate_for_range("1,15,30,45", 0, 59));
        assert!(validate_for_range("1,2,3-5,*/2", 0, 59));
    }

    #[test]
    fn rejects_out_of_bounds_values() {
        assert!(!validate_for_range("60", 0, 59));
        assert!(!validate_for_range("24", 0, 23));
        assert!(!validate_for_range("0", 1, 31));
        assert!(!validate_for_range("1,15,72", 0, 59));
    }

    #[test]
    fn range_bounds_and_ordering() {
        assert!(validate_for_range("5-10", 0, 59));
        assert!(validate_for_range("0-59", 0, 59));
        assert!(!validate_for_range("10-5", 0, 59));
        assert!(!validate_for_range("5-10-15", 0, 59));
        assert!(!validate_for_range("50-70", 0, 59));
        assert!(!validate_for_range("*-5", 0, 59));
        assert!(!validate_for_range("5-", 0, 59));
    }

    #[test]
    fn step_suffixes() {
        assert!(validate_for_range("*/5", 0, 59));
        assert!(validate_for_range("10-30/5", 0, 59));
        assert!(!validate_for_range("*/0", 0, 59));
        assert!(!validate_for_range("*/", 0, 59));
        assert!(!validate_for_range("5/3/2", 0, 59));
        assert!(!validate_for_range("/5", 0, 59));
    }

    #[test]
    fn oversized_step_divisor_is_still_a_divisor() {
        assert!(validate_for_range("*/4294967296", 0, 59));
        assert!(!validate_for_range("*/0000", 0, 59));
    }

    #[test]
    fn rejects_stray_characters() {
        assert!(!validate_for_range("", 0, 59));
        assert!(!validate_for_range("?", 0, 59));
        assert!(!validate_for_range("1 2", 0, 59));
        assert!(!validate_for_range("mon", 0, 6));
        assert!(!validate_for_range("1#2", 0, 6));
        assert!(!validate_for_range("%", 0, 59));
    }

    #[test]
    fn rejects_empty_list_entries() {
        assert!(!validate_for_range("1,,2", 0, 59));
        assert!(!validate_for_range(",1", 0, 59));
        assert!(!validate_for_range("1,", 0, 59));
    }
}
