//! Per-field rules and the top-level cron expression check.

use tracing::trace;

use crate::alias;
use crate::field::{in_range, parse_num, validate_for_range};
use crate::options::CronOptions;

fn has_valid_seconds(seconds: &str) -> bool {
    validate_for_range(seconds, 0, 59)
}

fn has_valid_minutes(minutes: &str) -> bool {
    validate_for_range(minutes, 0, 59)
}

fn has_valid_hours(hours: &str) -> bool {
    validate_for_range(hours, 0, 23)
}

/// Day-of-month. `?` bypasses the grammar entirely when blank days are
/// allowed. Purely syntactic otherwise: `31` passes for every month.
fn has_valid_days(days: &str, allow_blank_day: bool) -> bool {
    (allow_blank_day && days == "?") || validate_for_range(days, 1, 31)
}

fn has_valid_months(months: &str, alias_enabled: bool) -> bool {
    if alias::has_alias_step(months) {
        return false;
    }
    if alias_enabled {
        // An unrecognized alias survives the substitution as letters and
        // fails the character screen, so no separate rejection is needed.
        validate_for_range(&alias::remap_months(months), 1, 12)
    } else {
        validate_for_range(months, 1, 12)
    }
}

fn has_valid_weekdays(weekdays: &str, options: &CronOptions) -> bool {
    if weekdays == "?" {
        return options.allow_blank_day;
    }
    if alias::has_alias_step(weekdays) {
        return false;
    }

    let remapped = if options.alias {
        alias::remap_weekdays(weekdays)
    } else {
        weekdays.to_string()
    };
    let max_weekday = if options.allow_seven_as_sunday { 7 } else { 6 };

    // Quartz-style `weekday#occurrence`. This shape does not compose with
    // lists, ranges, or steps.
    if options.allow_nth_weekday_of_month && remapped.contains('#') {
        let splits: Vec<&str> = remapped.split('#').collect();
        return match splits.as_slice() {
            [weekday, occurrence] => {
                parse_num(occurrence).is_some_and(|n| in_range(n, 1, 5))
                    && parse_num(weekday).is_some_and(|n| in_range(n, 0, max_weekday))
            }
            _ => false,
        };
    }

    validate_for_range(&remapped, 0, max_weekday)
}

/// At most one of the two day fields may be the blank marker at a time;
/// at least one of them has to constrain the schedule.
fn has_compatible_day_format(days: &str, weekdays: &str, allow_blank_day: bool) -> bool {
    !(allow_blank_day && days == "?" && weekdays == "?")
}

fn split_fields(expression: &str) -> Vec<&str> {
    expression.split_whitespace().collect()
}

/// Check a cron expression against the grammar under the given options.
///
/// Total over its input: any string, including empty, all-whitespace, or
/// arbitrary bytes, yields a boolean. Malformed input of every kind is
/// reported as `false`, never as a panic.
pub fn is_valid_cron(expression: &str, options: &CronOptions) -> bool {
    let fields = split_fields(expression);

    let expected = if options.seconds { 6 } else { 5 };
    if fields.len() != expected {
        trace!(count = fields.len(), expected, "wrong cron field count");
        return false;
    }

    let (seconds, rest) = if options.seconds {
        (Some(fields[0]), &fields[1..])
    } else {
        (None, &fields[..])
    };
    let (minutes, hours, days, months, weekdays) = (rest[0], rest[1], rest[2], rest[3], rest[4]);

    let valid = seconds.is_none_or(has_valid_seconds)
        && has_valid_minutes(minutes)
        && has_valid_hours(hours)
        && has_valid_days(days, options.allow_blank_day)
        && has_valid_months(months, options.alias)
        && has_valid_weekdays(weekdays, options)
        && has_compatible_day_format(days, weekdays, options.allow_blank_day);

    if !valid {
        trace!(%expression, "cron expression rejected");
    }
    valid
}
