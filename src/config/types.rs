use crate::core::activity::TimeOfDay;

/// Thresholds used by the analyzer's low-effort query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    /// Upper bound on hours for a low-effort activity, inclusive (default: 2)
    pub low_effort_max_hours: f64,
    /// Lower bound on enjoyment for a high-enjoyment activity, inclusive (default: 8)
    pub high_enjoyment_min: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            low_effort_max_hours: 2.0,
            high_enjoyment_min: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the weekly report covers and how it is printed
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Category whose total hours are reported (default: "physical")
    pub category: String,
    /// Time of day whose average enjoyment is reported (default: evening)
    pub time_of_day: TimeOfDay,
    pub format: OutputFormat,
    /// Append the highest-enjoyment and dominant-category lines
    pub show_insights: bool,
    pub analyzer: AnalyzerConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            category: "physical".to_string(),
            time_of_day: TimeOfDay::Evening,
            format: OutputFormat::Text,
            show_insights: false,
            analyzer: AnalyzerConfig::default(),
        }
    }
}
