pub mod analysis_service;

pub use analysis_service::{interpret_reply, AnalysisService};
