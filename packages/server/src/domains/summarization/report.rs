//! Parsing of the generated narrative back into scores and summary prose.
//!
//! The narrative is free text. Nothing here assumes it is well-formed: lines
//! that do not match simply contribute nothing, and a category with no
//! parseable score is absent from the table rather than zero.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domains::classification::Category;

lazy_static! {
    // "7/10", "7,5/10", "8.25/10"
    static ref SCORE_REGEX: Regex = Regex::new(r"(\d+(?:[,.]\d+)?)/10").unwrap();
}

/// Marker line that opens the summary section.
pub const SUMMARY_MARKER: &str = "Yorum Özetleri:";

/// Header of the score section.
pub const SCORES_HEADER: &str = "Yorumların Puanları:";

pub const MAX_SCORE: f64 = 10.0;

/// Category label as it appears in the narrative.
///
/// Variant order is the order of the score section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreCategory {
    #[serde(rename = "Ürün Kalitesi")]
    Quality,
    #[serde(rename = "Paketleme/Teslimat")]
    PackagingDelivery,
    #[serde(rename = "Ürün Tasarımı")]
    Design,
    #[serde(rename = "Fiyat/Performans")]
    PricePerformance,
    #[serde(rename = "Genel Sonuç")]
    GeneralConclusion,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::Quality,
        ScoreCategory::PackagingDelivery,
        ScoreCategory::Design,
        ScoreCategory::PricePerformance,
        ScoreCategory::GeneralConclusion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Quality => "Ürün Kalitesi",
            ScoreCategory::PackagingDelivery => "Paketleme/Teslimat",
            ScoreCategory::Design => "Ürün Tasarımı",
            ScoreCategory::PricePerformance => "Fiyat/Performans",
            ScoreCategory::GeneralConclusion => "Genel Sonuç",
        }
    }

    /// The classification category this label reports on; `None` for the overall conclusion.
    pub fn content_category(&self) -> Option<Category> {
        match self {
            ScoreCategory::Quality => Some(Category::Quality),
            ScoreCategory::PackagingDelivery => Some(Category::PackagingDelivery),
            ScoreCategory::Design => Some(Category::Design),
            ScoreCategory::PricePerformance => Some(Category::PricePerformance),
            ScoreCategory::GeneralConclusion => None,
        }
    }
}

/// Coarse rating band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score <= 6.9 {
            ScoreBand::Low
        } else if score <= 7.9 {
            ScoreBand::Fair
        } else if score <= 8.9 {
            ScoreBand::Good
        } else {
            ScoreBand::Excellent
        }
    }
}

/// Scores keyed by narrative label. Values are in [0, 10] with one decimal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    scores: IndexMap<ScoreCategory, f64>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `category`; `None` means unknown, not zero.
    pub fn get(&self, category: ScoreCategory) -> Option<f64> {
        self.scores.get(&category).copied()
    }

    pub fn band(&self, category: ScoreCategory) -> Option<ScoreBand> {
        self.get(category).map(ScoreBand::for_score)
    }

    /// Present scores in score-section order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, f64)> + '_ {
        ScoreCategory::ALL
            .into_iter()
            .filter_map(move |c| self.get(c).map(|s| (c, s)))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn set(&mut self, category: ScoreCategory, score: f64) {
        self.scores.insert(category, score);
    }
}

/// Scores and summary prose recovered from a narrative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedNarrative {
    pub scores: ScoreTable,
    pub summary: String,
}

pub fn parse_narrative(text: &str) -> ParsedNarrative {
    ParsedNarrative {
        scores: parse_scores(text),
        summary: extract_summary(text),
    }
}

/// Extract per-label scores.
///
/// Every line is checked for every label (case-insensitive substring). On a
/// matching line the first `<n>/10` is the score. Lines are scanned top to
/// bottom and a later match overwrites an earlier one for the same label.
pub fn parse_scores(text: &str) -> ScoreTable {
    let labels: Vec<(ScoreCategory, String)> = ScoreCategory::ALL
        .into_iter()
        .map(|c| (c, c.label().to_lowercase()))
        .collect();

    let mut table = ScoreTable::new();
    for line in text.split('\n') {
        let lowered = line.to_lowercase();
        for (category, label) in &labels {
            if !lowered.contains(label.as_str()) {
                continue;
            }
            if let Some(score) = line_score(line) {
                table.set(*category, score);
            }
        }
    }
    table
}

/// First `<n>/10` on a line, comma decimals accepted, rounded to one decimal.
/// Values above 10 are not scores.
fn line_score(line: &str) -> Option<f64> {
    let raw = SCORE_REGEX.captures(line)?.get(1)?.as_str().replace(',', ".");
    let score: f64 = raw.parse().ok()?;
    if !(0.0..=MAX_SCORE).contains(&score) {
        return None;
    }
    Some((score * 10.0).round() / 10.0)
}

/// Everything after the first line containing the summary marker
/// (case-insensitive), verbatim. Lines split on `\n` only, so `\r` survives.
/// Empty if there is no marker.
pub fn extract_summary(text: &str) -> String {
    let marker = SUMMARY_MARKER.to_lowercase();
    let lines: Vec<&str> = text.split('\n').collect();

    lines
        .iter()
        .position(|line| line.to_lowercase().contains(&marker))
        .map(|i| lines[i + 1..].join("\n"))
        .unwrap_or_default()
}
