pub mod analysis_client;

pub use analysis_client::{AnalysisTransport, HttpAnalysisClient, HttpReply};
