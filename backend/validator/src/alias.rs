//! Three-letter month and weekday aliases and their numeric substitution.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTH_ALIASES: &[(&str, &str)] = &[
    ("jan", "1"),
    ("feb", "2"),
    ("mar", "3"),
    ("apr", "4"),
    ("may", "5"),
    ("jun", "6"),
    ("jul", "7"),
    ("aug", "8"),
    ("sep", "9"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

const WEEKDAY_ALIASES: &[(&str, &str)] = &[
    ("sun", "0"),
    ("mon", "1"),
    ("tue", "2"),
    ("wed", "3"),
    ("thu", "4"),
    ("fri", "5"),
    ("sat", "6"),
];

/// Any run of three lowercase letters is an alias candidate.
static ALIAS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]{3}").unwrap());

/// A `/` immediately followed by a letter is an alias used as a step
/// divisor (`*/jan`), which is never valid.
static ALIAS_STEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"/[a-zA-Z]").unwrap());

pub(crate) fn has_alias_step(field: &str) -> bool {
    ALIAS_STEP.is_match(field)
}

/// Lower-case the field and substitute recognized three-letter runs with
/// their numeric value. Unrecognized runs are left in place so the numeric
/// grammar rejects them downstream.
fn remap(field: &str, table: &[(&str, &str)]) -> String {
    let lowered = field.to_lowercase();
    ALIAS_RUN
        .replace_all(&lowered, |caps: &regex::Captures| {
            let run = &caps[0];
            table
                .iter()
                .find(|(name, _)| *name == run)
                .map_or_else(|| run.to_string(), |(_, num)| (*num).to_string())
        })
        .into_owned()
}

pub(crate) fn remap_months(months: &str) -> String {
    remap(months, MONTH_ALIASES)
}

pub(crate) fn remap_weekdays(weekdays: &str) -> String {
    remap(weekdays, WEEKDAY_ALIASES)
}
