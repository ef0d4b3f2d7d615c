//! Weekly report rendering
//!
//! Runs the analyzer queries once and prints the results either as plain
//! text or as JSON.
//!
//! # Text Output
//!
//! ```text
//! Analyzing My Weekly Activities...
//! ==================================
//! Total hours spent on physical activities: 5
//! Average enjoyment for evening activities: 9.0
//! Low-effort, high-enjoyment activities: Morning Run, Reading a Book
//! High-enjoyment morning activities found with custom filter: [ 'Hiking' ]
//! ```
//!
//! With insights enabled two more lines follow: the highest-enjoyment
//! activities and the category with the most hours.

use crate::config::{OutputFormat, ReportConfig};
use crate::core::activity::{ActivityAnalyzer, TimeOfDay, WeekLog};
use crate::error::Result;
use serde::Serialize;

const HEADER: &str = "Analyzing My Weekly Activities...";
const RULE: &str = "==================================";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantCategory {
    pub category: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub highest_enjoyment: Vec<String>,
    pub dominant_category: Option<DominantCategory>,
}

/// Results of one analysis run over a week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub category: String,
    pub category_hours: f64,
    pub time_of_day: TimeOfDay,
    pub average_enjoyment: f64,
    pub low_effort_high_enjoyment: Vec<String>,
    pub high_enjoyment_morning: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
}

impl WeeklyReport {
    pub fn collect(week: &WeekLog, config: &ReportConfig) -> Self {
        let analyzer = ActivityAnalyzer::with_config(week, config.analyzer);

        let high_enjoyment_morning = analyzer
            .filter_by_condition(|r| r.time_of_day == TimeOfDay::Morning && r.enjoyment > 8.0)
            .into_iter()
            .map(|r| r.activity.clone())
            .collect();

        let insights = config.show_insights.then(|| Insights {
            highest_enjoyment: to_strings(analyzer.highest_enjoyment_activities()),
            dominant_category: analyzer
                .dominant_category()
                .map(|(category, hours)| DominantCategory { category, hours }),
        });

        Self {
            category: config.category.clone(),
            category_hours: analyzer.total_hours_by_category(&config.category),
            time_of_day: config.time_of_day,
            average_enjoyment: analyzer.average_enjoyment_by_time(config.time_of_day),
            low_effort_high_enjoyment: to_strings(
                analyzer.find_low_effort_high_enjoyment_activities(),
            ),
            high_enjoyment_morning,
            insights,
        }
    }

    /// Render the report as the lines printed in text mode
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            HEADER.to_string(),
            RULE.to_string(),
            format!(
                "Total hours spent on {} activities: {}",
                self.category, self.category_hours
            ),
            format!(
                "Average enjoyment for {} activities: {}",
                self.time_of_day,
                format_one_decimal(self.average_enjoyment)
            ),
            format!(
                "Low-effort, high-enjoyment activities: {}",
                self.low_effort_high_enjoyment.join(", ")
            ),
            format!(
                "High-enjoyment morning activities found with custom filter: {}",
                format_name_list(&self.high_enjoyment_morning)
            ),
        ];

        if let Some(insights) = &self.insights {
            lines.push(format!(
                "Highest-enjoyment activities: {}",
                insights.highest_enjoyment.join(", ")
            ));
            lines.push(match &insights.dominant_category {
                Some(d) => format!("Dominant category: {} ({} hours)", d.category, d.hours),
                None => "Dominant category: none".to_string(),
            });
        }

        lines
    }
}

fn to_strings(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

/// Format with one decimal, rounding ties away from zero (8.25 -> "8.3")
fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Quote a name the way a JS console prints strings inside arrays: single
/// quotes unless the name contains one, then double quotes, then backticks
fn quote_name(name: &str) -> String {
    if !name.contains('\'') {
        format!("'{}'", name)
    } else if !name.contains('"') {
        format!("\"{}\"", name)
    } else if !name.contains('`') {
        format!("`{}`", name)
    } else {
        format!("'{}'", name.replace('\'', "\\'"))
    }
}

/// Format names as a bracketed, quoted list, e.g. `[ 'Hiking' ]`
fn format_name_list(names: &[String]) -> String {
    if names.is_empty() {
        return "[]".to_string();
    }
    let quoted: Vec<String> = names.iter().map(|n| quote_name(n)).collect();
    format!("[ {} ]", quoted.join(", "))
}

/// Renders a weekly report in the configured output format
pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn render(&self, week: &WeekLog) -> Result<String> {
        let report = WeeklyReport::collect(week, &self.config);
        match self.config.format {
            OutputFormat::Text => Ok(report.to_lines().join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::activity::{load_builtin_week, ActivityRecord, Weekday};

    #[test]
    fn test_default_text_report() {
        let week = load_builtin_week().unwrap();
        let renderer = ReportRenderer::new(ReportConfig::default());
        let output = renderer.render(&week).unwrap();

        let expected = [
            "Analyzing My Weekly Activities...",
            "==================================",
            "Total hours spent on physical activities: 5",
            "Average enjoyment for evening activities: 9.0",
            "Low-effort, high-enjoyment activities: Morning Run, Reading a Book",
            "High-enjoyment morning activities found with custom filter: [ 'Hiking' ]",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_report_for_other_category_and_time() {
        let week = load_builtin_week().unwrap();
        let config = ReportConfig {
            category: "creative".to_string(),
            time_of_day: TimeOfDay::Afternoon,
            ..ReportConfig::default()
        };
        let lines = WeeklyReport::collect(&week, &config).to_lines();

        assert_eq!(lines[2], "Total hours spent on creative activities: 4.5");
        assert_eq!(lines[3], "Average enjoyment for afternoon activities: 6.0");
    }

    #[test]
    fn test_report_with_insights() {
        let week = load_builtin_week().unwrap();
        let config = ReportConfig {
            show_insights: true,
            ..ReportConfig::default()
        };
        let lines = WeeklyReport::collect(&week, &config).to_lines();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[6], "Highest-enjoyment activities: Hiking");
        assert_eq!(lines[7], "Dominant category: physical (5 hours)");
    }

    #[test]
    fn test_empty_week_report() {
        let week = WeekLog::default();
        let config = ReportConfig {
            show_insights: true,
            ..ReportConfig::default()
        };
        let lines = WeeklyReport::collect(&week, &config).to_lines();

        assert_eq!(lines[2], "Total hours spent on physical activities: 0");
        assert_eq!(lines[3], "Average enjoyment for evening activities: 0.0");
        assert_eq!(lines[4], "Low-effort, high-enjoyment activities: ");
        assert_eq!(
            lines[5],
            "High-enjoyment morning activities found with custom filter: []"
        );
        assert_eq!(lines[7], "Dominant category: none");
    }

    #[test]
    fn test_json_report() {
        let week = load_builtin_week().unwrap();
        let config = ReportConfig {
            format: OutputFormat::Json,
            ..ReportConfig::default()
        };
        let output = ReportRenderer::new(config).render(&week).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["category"], "physical");
        assert_eq!(json["category_hours"], 5.0);
        assert_eq!(json["time_of_day"], "evening");
        assert_eq!(json["average_enjoyment"], 9.0);
        assert_eq!(
            json["low_effort_high_enjoyment"],
            serde_json::json!(["Morning Run", "Reading a Book"])
        );
        assert_eq!(json["high_enjoyment_morning"], serde_json::json!(["Hiking"]));
        assert!(json.get("insights").is_none());
    }

    #[test]
    fn test_average_rounds_ties_up() {
        let week = WeekLog::new(
            [8.0, 8.0, 8.0, 9.0]
                .into_iter()
                .map(|enjoyment| {
                    ActivityRecord::new(
                        Weekday::Monday,
                        "Evening Walk",
                        "physical",
                        1.0,
                        enjoyment,
                        TimeOfDay::Evening,
                    )
                })
                .collect(),
        );
        let lines = WeeklyReport::collect(&week, &ReportConfig::default()).to_lines();

        assert_eq!(lines[3], "Average enjoyment for evening activities: 8.3");
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_one_decimal(9.0), "9.0");
        assert_eq!(format_one_decimal(8.25), "8.3");
        assert_eq!(format_one_decimal(6.666), "6.7");
        assert_eq!(format_one_decimal(0.0), "0.0");
    }

    #[test]
    fn test_quote_name() {
        assert_eq!(quote_name("Hiking"), "'Hiking'");
        assert_eq!(quote_name("Bob's Run"), "\"Bob's Run\"");
        assert_eq!(quote_name("Bob's \"Run\""), "`Bob's \"Run\"`");
        assert_eq!(quote_name("a'b\"c`d"), "'a\\'b\"c`d'");
    }

    #[test]
    fn test_format_name_list() {
        assert_eq!(format_name_list(&[]), "[]");
        assert_eq!(
            format_name_list(&["A".to_string(), "B".to_string()]),
            "[ 'A', 'B' ]"
        );
    }
}
