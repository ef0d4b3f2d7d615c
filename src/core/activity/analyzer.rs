//! Weekly activity analysis
//!
//! Every query is a single pass over the borrowed log and never fails.
//! Results that name records preserve the log's order.

use super::types::{ActivityRecord, TimeOfDay, WeekLog};
use crate::config::AnalyzerConfig;

pub struct ActivityAnalyzer<'a> {
    log: &'a WeekLog,
    config: AnalyzerConfig,
}

impl<'a> ActivityAnalyzer<'a> {
    /// Create an analyzer with the default thresholds
    pub fn new(log: &'a WeekLog) -> Self {
        Self::with_config(log, AnalyzerConfig::default())
    }

    /// Create an analyzer with custom thresholds
    pub fn with_config(log: &'a WeekLog, config: AnalyzerConfig) -> Self {
        Self { log, config }
    }

    /// Get the log being analyzed
    pub fn log(&self) -> &'a WeekLog {
        self.log
    }

    /// Total hours spent on activities with exactly this category
    pub fn total_hours_by_category(&self, category: &str) -> f64 {
        self.log
            .iter()
            .filter(|r| r.category == category)
            .fold(0.0, |total, r| total + r.hours_spent)
    }

    /// Mean enjoyment of the activities at this time of day.
    ///
    /// Returns `0.0` when nothing matches, so a zero is ambiguous between
    /// "no activity" and "no enjoyment".
    pub fn average_enjoyment_by_time(&self, time_of_day: TimeOfDay) -> f64 {
        let (sum, count) = self
            .log
            .iter()
            .filter(|r| r.time_of_day == time_of_day)
            .fold((0.0, 0usize), |(sum, count), r| (sum + r.enjoyment, count + 1));

        tracing::debug!(%time_of_day, matches = count, "averaging enjoyment");

        if count == 0 {
            return 0.0;
        }
        sum / count as f64
    }

    /// Names of activities that took at most `low_effort_max_hours` and
    /// scored at least `high_enjoyment_min` (both bounds inclusive)
    pub fn find_low_effort_high_enjoyment_activities(&self) -> Vec<&'a str> {
        let max_hours = self.config.low_effort_max_hours;
        let min_enjoyment = self.config.high_enjoyment_min;

        self.filter_by_condition(|r| r.hours_spent <= max_hours && r.enjoyment >= min_enjoyment)
            .into_iter()
            .map(|r| r.activity.as_str())
            .collect()
    }

    /// Records for which `predicate` holds, in log order
    pub fn filter_by_condition<F>(&self, predicate: F) -> Vec<&'a ActivityRecord>
    where
        F: Fn(&ActivityRecord) -> bool,
    {
        self.log.iter().filter(|&r| predicate(r)).collect()
    }

    /// Names of every activity sharing the top enjoyment score
    pub fn highest_enjoyment_activities(&self) -> Vec<&'a str> {
        let Some(max) = self
            .log
            .iter()
            .map(|r| r.enjoyment)
            .reduce(f64::max)
        else {
            return Vec::new();
        };

        self.filter_by_condition(|r| r.enjoyment == max)
            .into_iter()
            .map(|r| r.activity.as_str())
            .collect()
    }

    /// Category with the most total hours. Ties go to the category that
    /// appears first in the log.
    pub fn dominant_category(&self) -> Option<(String, f64)> {
        let mut totals: Vec<(&str, f64)> = Vec::new();
        for record in self.log {
            match totals.iter_mut().find(|(c, _)| *c == record.category) {
                Some((_, hours)) => *hours += record.hours_spent,
                None => totals.push((record.category.as_str(), record.hours_spent)),
            }
        }

        let mut best: Option<(&str, f64)> = None;
        for (category, hours) in totals {
            match best {
                Some((_, top)) if hours <= top => {}
                _ => best = Some((category, hours)),
            }
        }

        best.map(|(category, hours)| (category.to_string(), hours))
    }
}
