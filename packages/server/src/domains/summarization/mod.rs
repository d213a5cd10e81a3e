//! Summarization domain - prompt construction, generation and report parsing
//!
//! ```text
//! CategoryMap → build_summary_prompt → BaseAI::complete → parse_narrative → ScoreTable + summary
//! ```

pub mod prompts;
pub mod report;
pub mod summarizer;

pub use prompts::{build_summary_prompt, render_category_block, SUMMARIZE_REVIEWS_PROMPT};
pub use report::{
    extract_summary, parse_narrative, parse_scores, ParsedNarrative, ScoreBand, ScoreCategory,
    ScoreTable,
};
pub use summarizer::summarize_reviews;
