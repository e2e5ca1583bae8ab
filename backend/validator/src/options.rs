//! Validation options: toggles for the optional parts of the cron grammar.

use serde::{Deserialize, Serialize};

/// Options consumed by one validation call.
///
/// Everything defaults to off, which matches plain five-field crontab
/// syntax. The wire form uses camelCase names (`{"allowBlankDay": true}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CronOptions {
    /// Accept three-letter month and weekday names (`JAN`, `fri`).
    pub alias: bool,
    /// Expect a leading seconds field (six fields instead of five).
    pub seconds: bool,
    /// Accept `?` in day-of-month or day-of-week.
    pub allow_blank_day: bool,
    /// Accept weekday 7 as an alternative spelling of Sunday.
    pub allow_seven_as_sunday: bool,
    /// Accept Quartz-style `weekday#occurrence` in day-of-week.
    pub allow_nth_weekday_of_month: bool,
}
