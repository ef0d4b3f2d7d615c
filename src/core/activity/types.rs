//! Activity log data structures
//!
//! This module defines the records that make up a week of logged
//! activities and the ordered log the analyzer works over.

use crate::error::WeekLogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week a record was logged on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Part of the day an activity happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Lowercase tag as written in the log (e.g., "morning")
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = WeekLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            other => Err(WeekLogError::UnknownTimeOfDay(other.to_string())),
        }
    }
}

/// One day's logged activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub day: Weekday,
    /// Free-text label (e.g., "Morning Run")
    pub activity: String,
    /// Free-text tag; observed values include physical, work, creative,
    /// chores and social, but any string is accepted
    pub category: String,
    /// Hours spent, expected non-negative (not enforced)
    pub hours_spent: f64,
    /// Enjoyment score, expected 0-10 (not enforced)
    pub enjoyment: f64,
    pub time_of_day: TimeOfDay,
}

impl ActivityRecord {
    /// Create a new record
    pub fn new(
        day: Weekday,
        activity: &str,
        category: &str,
        hours_spent: f64,
        enjoyment: f64,
        time_of_day: TimeOfDay,
    ) -> Self {
        Self {
            day,
            activity: activity.to_string(),
            category: category.to_string(),
            hours_spent,
            enjoyment,
            time_of_day,
        }
    }
}

/// Ordered, read-only collection of activity records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekLog {
    #[serde(rename = "activities", default)]
    records: Vec<ActivityRecord>,
}

impl WeekLog {
    /// Create a log from records in day order
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }

    /// Get all records in log order
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Iterate over records in log order
    pub fn iter(&self) -> std::slice::Iter<'_, ActivityRecord> {
        self.records.iter()
    }

    /// Number of records in the log
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a WeekLog {
    type Item = &'a ActivityRecord;
    type IntoIter = std::slice::Iter<'a, ActivityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
