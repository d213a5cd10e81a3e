use serde::{Deserialize, Serialize};
use std::fmt;

/// Topical category a review can be classified into.
///
/// Variant order is the label index order of the classification model's outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "URUN_KALITESI")]
    Quality,
    #[serde(rename = "PAKETLEME/TESLIMAT")]
    PackagingDelivery,
    #[serde(rename = "FIYAT/PERFORMANS")]
    PricePerformance,
    #[serde(rename = "URUN_TASARIMI")]
    Design,
}

impl Category {
    /// All categories, in model output order.
    pub const ALL: [Category; 4] = [
        Category::Quality,
        Category::PackagingDelivery,
        Category::PricePerformance,
        Category::Design,
    ];

    /// Number of categories (and model outputs).
    pub const COUNT: usize = Self::ALL.len();

    /// Label used for this category in the model checkpoint and in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Quality => "URUN_KALITESI",
            Category::PackagingDelivery => "PAKETLEME/TESLIMAT",
            Category::PricePerformance => "FIYAT/PERFORMANS",
            Category::Design => "URUN_TASARIMI",
        }
    }

    /// Category for a model output index.
    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A review paired with the categories the classifier assigned to it.
///
/// An empty category set is valid: the review is kept here but contributes
/// nothing to aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedReview {
    pub review: String,
    pub categories: Vec<Category>,
}

impl ClassifiedReview {
    pub fn new(review: impl Into<String>, categories: Vec<Category>) -> Self {
        Self {
            review: review.into(),
            categories,
        }
    }

    pub fn is_unclassified(&self) -> bool {
        self.categories.is_empty()
    }
}
