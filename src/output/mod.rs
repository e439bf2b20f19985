//! Resume records and report rendering

pub mod report;
pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{RecordResponse, ResumeRecord, ScoreBand};
