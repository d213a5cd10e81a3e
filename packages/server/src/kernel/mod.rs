//! Kernel module - server infrastructure and dependencies.

pub mod classifier_model;
pub mod deps;
pub mod ollama;
pub mod review_source;
pub mod test_dependencies;
pub mod traits;

pub use classifier_model::BertCategoryModel;
pub use deps::ServerDeps;
pub use ollama::OllamaAI;
pub use review_source::RapidApiReviewSource;
pub use test_dependencies::TestDependencies;
pub use traits::*;
