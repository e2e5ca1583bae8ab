//! Cron expression grammar validation for CronGuard.
//!
//! Answers a single question per input string: does the expression conform
//! to the cron grammar (five fields, or six with a leading seconds field)
//! under a given set of options? There is no next-fire computation and no
//! structured parse result, just one boolean per call, for any input.

mod alias;
mod field;
pub mod options;
pub mod validate;

pub use options::CronOptions;
pub use validate::is_valid_cron;
