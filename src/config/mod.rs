pub mod types;

pub use types::{AnalyzerConfig, OutputFormat, ReportConfig};
