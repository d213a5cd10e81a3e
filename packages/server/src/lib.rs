// Review Insights - API Core
//
// Turns a product link into a category-level review report: reviews are
// fetched, classified with a local model, grouped, and summarized by an LLM.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
