//! Analysis domain - link in, report out

pub mod actions;
pub mod data;
pub mod error;

pub use actions::{analyze_link, classify_link, summarize_link};
pub use data::{AnalyzeRequest, ClassifyResponse, ErrorResponse, PredictResponse, Report};
pub use error::AnalysisError;
