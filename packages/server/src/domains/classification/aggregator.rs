//! Grouping of classified reviews by category.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::models::{Category, ClassifiedReview};

/// Review texts grouped by category.
///
/// Categories keep the order in which they first received a review, and each
/// category's reviews keep insertion order. That order is what the summary
/// prompt and downstream displays see. Only categories with at least one
/// review are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap {
    entries: IndexMap<Category, Vec<String>>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `review` to `category`, creating the entry on first use.
    pub fn insert_or_append(&mut self, category: Category, review: impl Into<String>) {
        self.entries.entry(category).or_default().push(review.into());
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.entries.get(&category).map(Vec::as_slice)
    }

    /// Categories in key order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries.iter().map(|(c, r)| (*c, r.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (category, review) assignments.
    pub fn assignment_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Fold classified reviews into a [`CategoryMap`].
///
/// A review with several categories is appended to each of them; one with none
/// contributes nothing.
pub fn aggregate_by_category(classified: &[ClassifiedReview]) -> CategoryMap {
    let mut map = CategoryMap::new();
    for item in classified {
        for category in &item.categories {
            map.insert_or_append(*category, item.review.as_str());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_appears_under_each_category() {
        let classified = vec![
            ClassifiedReview::new("A", vec![Category::Quality, Category::Design]),
            ClassifiedReview::new("B", vec![Category::Quality]),
        ];

        let map = aggregate_by_category(&classified);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(Category::Quality).unwrap(), ["A", "B"]);
        assert_eq!(map.get(Category::Design).unwrap(), ["A"]);
        assert_eq!(map.assignment_count(), 3);
    }

    #[test]
    fn test_unclassified_reviews_create_no_entries() {
        let classified = vec![
            ClassifiedReview::new("meh", vec![]),
            ClassifiedReview::new("cheap", vec![Category::PricePerformance]),
        ];

        let map = aggregate_by_category(&classified);

        assert_eq!(map.categories().collect::<Vec<_>>(), vec![Category::PricePerformance]);
        assert!(map.get(Category::Quality).is_none());
    }

    #[test]
    fn test_key_order_is_first_use() {
        let classified = vec![
            ClassifiedReview::new("late box", vec![Category::PackagingDelivery]),
            ClassifiedReview::new("solid", vec![Category::Quality]),
            ClassifiedReview::new("late again", vec![Category::PackagingDelivery]),
        ];

        let map = aggregate_by_category(&classified);

        assert_eq!(
            map.categories().collect::<Vec<_>>(),
            vec![Category::PackagingDelivery, Category::Quality]
        );
        assert_eq!(
            map.get(Category::PackagingDelivery).unwrap(),
            ["late box", "late again"]
        );
    }

    #[test]
    fn test_duplicate_reviews_are_kept() {
        let classified = vec![
            ClassifiedReview::new("great product", vec![Category::Quality]),
            ClassifiedReview::new("great product", vec![Category::Quality]),
        ];

        let map = aggregate_by_category(&classified);

        assert_eq!(map.get(Category::Quality).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        assert!(aggregate_by_category(&[]).is_empty());
    }

    #[test]
    fn test_serializes_as_label_keyed_object() {
        let mut map = CategoryMap::new();
        map.insert_or_append(Category::Design, "şık");
        map.insert_or_append(Category::Quality, "sağlam");

        let json = serde_json::to_string(&map).unwrap();

        assert_eq!(json, r#"{"URUN_TASARIMI":["şık"],"URUN_KALITESI":["sağlam"]}"#);
    }
}
