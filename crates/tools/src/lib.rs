//! PR assistant tools
//!
//! Each of the three tools gets a [`ToolController`] that runs a submission
//! through validation, prompt building and one completion call. The
//! [`Assistant`] owns all three.

pub mod assistant;
pub mod controller;
pub mod state;
pub mod upload;

pub use assistant::Assistant;
pub use controller::{SubmissionOutcome, SubmissionResult, ToolController};
pub use state::{SubmissionState, Trail};
pub use upload::{decode_text_upload, UploadError, UploadedFile};
