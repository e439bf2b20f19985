//! Resume analysis: role detection, keyword extraction, scoring and insights

pub mod matcher;
pub mod roles;
pub mod role_detector;
pub mod keywords;
pub mod sections;
pub mod scorer;
pub mod insights;
pub mod analyzer;

pub use analyzer::{AnalysisResult, Assessment, ResumeAnalyzer};
pub use roles::{Role, RoleProfile, RoleTable};
