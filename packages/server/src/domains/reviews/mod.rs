//! Reviews domain - product identification and review retrieval
//!
//! ```text
//! link → ProductId::from_link → fetch_all_reviews → review texts
//! ```

pub mod fetcher;
pub mod identifier;

pub use fetcher::{fetch_all_reviews, page_count, FetchError, MISSING_COMMENT, REVIEWS_PER_PAGE};
pub use identifier::{InvalidLinkError, ProductId};
