pub mod activity;
pub mod report;

pub use report::{ReportRenderer, WeeklyReport};
