//! Weekly activity log and analysis
//!
//! This module provides:
//! - The activity record and week log data structures
//! - The built-in week embedded at build time
//! - The analyzer that answers aggregate queries over a week

pub mod analyzer;
pub mod types;
pub mod week;

// Re-export commonly used items
pub use analyzer::ActivityAnalyzer;
pub use types::{ActivityRecord, TimeOfDay, WeekLog, Weekday};
pub use week::{load_builtin_week, parse_week};
