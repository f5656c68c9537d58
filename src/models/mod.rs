pub mod analysis;
pub mod form;
pub mod outcome;

pub use analysis::{AnalysisResult, AnalyzeResponse, ErrorBody, HealthStatus};
pub use form::{AnalysisRequest, FormInput, PhotoFile};
pub use outcome::{Action, RequestOutcome, ViewModel};
