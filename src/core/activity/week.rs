//! Built-in week log
//!
//! The week is compiled into the binary from `week.toml`; nothing is read
//! from disk at run time.

use super::types::WeekLog;
use crate::error::Result;

const BUILTIN_WEEK: &str = include_str!("week.toml");

/// Parse a week log from TOML text containing `[[activities]]` tables
pub fn parse_week(content: &str) -> Result<WeekLog> {
    let week: WeekLog = toml::from_str(content)?;
    tracing::debug!(records = week.len(), "parsed week log");
    Ok(week)
}

/// Load the built-in seven-day week
pub fn load_builtin_week() -> Result<WeekLog> {
    parse_week(BUILTIN_WEEK)
}
