use crate::config::{AnalyzerConfig, OutputFormat, ReportConfig};
use crate::core::activity::TimeOfDay;
use crate::error::WeekLogError;
use clap::Parser;

#[derive(Parser)]
#[command(name = "weeklog")]
#[command(version, about = "Aggregate statistics over a week of logged activities", long_about = None)]
pub struct Cli {
    /// Category whose total hours are reported
    #[arg(short, long, default_value = "physical")]
    pub category: String,

    /// Time of day whose average enjoyment is reported (morning, afternoon or evening)
    #[arg(short, long, value_parser = parse_time_of_day, default_value = "evening")]
    pub time: TimeOfDay,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Most hours a low-effort activity may take (inclusive)
    #[arg(long, default_value_t = 2.0)]
    pub max_hours: f64,

    /// Least enjoyment a high-enjoyment activity must score (inclusive)
    #[arg(long, default_value_t = 8.0)]
    pub min_enjoyment: f64,

    /// Also report the highest-enjoyment activities and dominant category
    #[arg(short, long)]
    pub insights: bool,
}

fn parse_time_of_day(s: &str) -> Result<TimeOfDay, WeekLogError> {
    s.parse()
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            category: self.category.clone(),
            time_of_day: self.time,
            format: self.format,
            show_insights: self.insights,
            analyzer: AnalyzerConfig {
                low_effort_max_hours: self.max_hours,
                high_enjoyment_min: self.min_enjoyment,
            },
        }
    }
}
