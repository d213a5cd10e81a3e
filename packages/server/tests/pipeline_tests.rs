//! End-to-end pipeline tests against in-memory mocks.

mod common;

use common::*;
use server_core::domains::analysis::{analyze_link, classify_link, summarize_link, AnalysisError};
use server_core::domains::classification::Category;
use server_core::domains::reviews::FetchError;
use server_core::domains::summarization::ScoreCategory;
use server_core::kernel::test_dependencies::{MockAI, MockCategoryModel, MockReviewSource};
use server_core::kernel::{SourcePage, TestDependencies};

#[tokio::test]
async fn groups_reviews_before_summarizing() {
    let test_deps = five_review_deps();
    let deps = test_deps.to_deps();

    let response = summarize_link(PRODUCT_LINK, None, &deps).await.unwrap();

    assert_eq!(
        response.categories.get(Category::Quality).unwrap(),
        &["great product", "too expensive", "great product"]
    );
    assert_eq!(
        response.categories.get(Category::PricePerformance).unwrap(),
        &["too expensive"]
    );
    assert_eq!(
        response.categories.get(Category::PackagingDelivery).unwrap(),
        &["bad packaging"]
    );
    assert_eq!(response.categories.get(Category::Design).unwrap(), &["nice design"]);
    assert_eq!(response.conclusion, NARRATIVE);

    assert_eq!(test_deps.review_source.requested_pages(), vec![1]);
    assert_eq!(
        test_deps.review_source.requested_products(),
        vec!["B000000000".to_string()]
    );
    assert_eq!(test_deps.model.batch_sizes(), vec![5]);
    assert_eq!(test_deps.ai.call_count(), 1);
}

#[tokio::test]
async fn prompt_lists_categories_in_first_seen_order() {
    let test_deps = five_review_deps();

    summarize_link(PRODUCT_LINK, None, &test_deps.to_deps())
        .await
        .unwrap();

    let prompt = test_deps.ai.last_prompt().unwrap();
    assert!(prompt.ends_with(
        "URUN_KALITESI: great product | too expensive | great product\n\
         PAKETLEME/TESLIMAT: bad packaging\n\
         FIYAT/PERFORMANS: too expensive\n\
         URUN_TASARIMI: nice design"
    ));
}

#[tokio::test]
async fn analyze_parses_scores_and_summary() {
    let deps = five_review_deps().to_deps();

    let report = analyze_link(PRODUCT_LINK, None, &deps).await.unwrap();

    assert_eq!(report.scores.get(ScoreCategory::Quality), Some(8.5));
    assert_eq!(report.scores.get(ScoreCategory::PackagingDelivery), Some(4.0));
    assert_eq!(report.scores.get(ScoreCategory::Design), Some(9.0));
    assert_eq!(report.scores.get(ScoreCategory::PricePerformance), Some(6.5));
    assert_eq!(report.scores.get(ScoreCategory::GeneralConclusion), Some(7.0));
    assert_eq!(
        report.summary,
        "1. Ürün Kalitesi: Kullanıcılar ürünü beğeniyor.\n\
         2. Paketleme/Teslimat: Paketler hasarlı gelmiş.\n\
         5. Genel Sonuç: Fiyatına göre iyi bir ürün."
    );
    assert_eq!(report.categories.len(), 4);
}

#[tokio::test]
async fn classify_returns_every_review_in_order() {
    let deps = five_review_deps().to_deps();

    let classified = classify_link(PRODUCT_LINK, None, &deps).await.unwrap();

    let texts: Vec<&str> = classified.iter().map(|c| c.review.as_str()).collect();
    assert_eq!(texts, REVIEWS);
    assert_eq!(
        classified[2].categories,
        vec![Category::Quality, Category::PricePerformance]
    );
}

#[tokio::test]
async fn invalid_link_stops_before_fetching() {
    let test_deps = five_review_deps();

    let err = analyze_link("https://example.com/product/123", None, &test_deps.to_deps())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::InvalidLink(_)));
    assert!(test_deps.review_source.requested_pages().is_empty());
    assert_eq!(test_deps.ai.call_count(), 0);
}

#[tokio::test]
async fn zero_reviews_is_no_reviews() {
    let test_deps = TestDependencies::new()
        .mock_reviews(MockReviewSource::new().with_page(1, SourcePage::with_comments(0, &[])));

    let err = summarize_link(PRODUCT_LINK, None, &test_deps.to_deps())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Fetch(FetchError::NoReviews)));
    assert_eq!(err.kind(), "no_reviews");
    assert!(test_deps.model.batch_sizes().is_empty());
    assert_eq!(test_deps.ai.call_count(), 0);
}

#[tokio::test]
async fn first_page_failure_is_fetch_failure() {
    let test_deps =
        TestDependencies::new().mock_reviews(MockReviewSource::new().with_failing_page(1));

    let err = classify_link(PRODUCT_LINK, None, &test_deps.to_deps())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Fetch(FetchError::Request)));
    assert_eq!(err.kind(), "fetch_failed");
}

fn as_refs(texts: &[String]) -> Vec<&str> {
    texts.iter().map(String::as_str).collect()
}

#[tokio::test]
async fn failed_middle_page_is_omitted() {
    let page_one: Vec<String> = (1..=10).map(|i| format!("review {}", i)).collect();
    let page_three: Vec<String> = (21..=25).map(|i| format!("review {}", i)).collect();

    let source = MockReviewSource::new()
        .with_page(1, SourcePage::with_comments(25, &as_refs(&page_one)))
        .with_failing_page(2)
        .with_page(3, SourcePage::with_comments(25, &as_refs(&page_three)));
    let test_deps = TestDependencies::new().mock_reviews(source);

    let classified = classify_link(PRODUCT_LINK, None, &test_deps.to_deps())
        .await
        .unwrap();

    assert_eq!(test_deps.review_source.requested_pages(), vec![1, 2, 3]);
    assert_eq!(classified.len(), 15);
    assert_eq!(classified[9].review, "review 10");
    assert_eq!(classified[10].review, "review 21");
}

#[tokio::test]
async fn model_failure_is_classification_failure() {
    let test_deps = TestDependencies::new()
        .mock_reviews(five_review_source())
        .mock_model(MockCategoryModel::new().failing());

    let err = summarize_link(PRODUCT_LINK, None, &test_deps.to_deps())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Classification(_)));
    assert_eq!(test_deps.ai.call_count(), 0);
}

#[tokio::test]
async fn summarizer_failure_is_summarization_failure() {
    let test_deps = five_review_deps().mock_ai(MockAI::new().failing());

    let err = summarize_link(PRODUCT_LINK, None, &test_deps.to_deps())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Summarization));
    assert_eq!(err.to_string(), "summarization failed");
}

#[tokio::test]
async fn blank_summary_is_summarization_failure() {
    let test_deps = five_review_deps().mock_ai(MockAI::new().with_response("  \n "));

    let err = analyze_link(PRODUCT_LINK, None, &test_deps.to_deps())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Summarization));
}

#[tokio::test]
async fn threshold_override_applies_to_classification() {
    // sigmoid(0.0) == 0.5
    let model = MockCategoryModel::new().with_logits("borderline", [0.0, -6.0, -6.0, -6.0]);
    let test_deps = TestDependencies::new()
        .mock_reviews(
            MockReviewSource::new().with_page(1, SourcePage::with_comments(1, &["borderline"])),
        )
        .mock_model(model);
    let deps = test_deps.to_deps();

    let inclusive = classify_link(PRODUCT_LINK, None, &deps).await.unwrap();
    let stricter = classify_link(PRODUCT_LINK, Some(0.6), &deps).await.unwrap();

    assert_eq!(inclusive[0].categories, vec![Category::Quality]);
    assert!(stricter[0].categories.is_empty());
}

#[tokio::test]
async fn unclassified_reviews_are_left_out_of_groups() {
    let test_deps = TestDependencies::new()
        .mock_reviews(MockReviewSource::new().with_page(
            1,
            SourcePage::with_comments(2, &["great product", "meh"]),
        ))
        .mock_model(MockCategoryModel::new().with_categories("great product", &[Category::Quality]))
        .mock_ai(MockAI::new().with_response(NARRATIVE));

    let response = summarize_link(PRODUCT_LINK, None, &test_deps.to_deps())
        .await
        .unwrap();

    assert_eq!(response.categories.len(), 1);
    assert_eq!(response.categories.assignment_count(), 1);
    assert!(!test_deps.ai.was_called_with("meh"));
}
