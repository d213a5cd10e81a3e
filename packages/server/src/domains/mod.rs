// Business domains
pub mod analysis;
pub mod classification;
pub mod reviews;
pub mod summarization;
