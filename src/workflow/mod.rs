pub mod submission;

pub use submission::{PendingSubmission, SubmissionController};
