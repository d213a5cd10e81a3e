use reviews_client::{ReviewQuery, ReviewsClient, ReviewsError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReviewsClient {
    ReviewsClient::new("test-key".into()).with_base_url(server.uri())
}

#[tokio::test]
async fn fetches_and_parses_a_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product-reviews"))
        .and(header("x-rapidapi-key", "test-key"))
        .and(header("x-rapidapi-host", "real-time-amazon-data.p.rapidapi.com"))
        .and(query_param("asin", "B07TPWWH77"))
        .and(query_param("country", "TR"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {
                "asin": "B07TPWWH77",
                "total_reviews": 23,
                "reviews": [
                    { "review_id": "R1", "review_comment": "Harika ürün" },
                    { "review_id": "R2", "review_title": "Başlık" }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .get_review_page(&ReviewQuery::new("B07TPWWH77"), 1)
        .await
        .unwrap();

    assert_eq!(page.total_reviews(), Some(23));
    let reviews = page.reviews().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].review_comment.as_deref(), Some("Harika ürün"));
    assert_eq!(reviews[1].review_comment, None);
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product-reviews"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_review_page(&ReviewQuery::new("B07TPWWH77"), 2)
        .await
        .unwrap_err();

    match err {
        ReviewsError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Too many requests");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product-reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_review_page(&ReviewQuery::new("B07TPWWH77"), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, ReviewsError::Parse(_)));
}

#[tokio::test]
async fn page_missing_total_still_parses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product-reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": { "reviews": [] }
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .get_review_page(&ReviewQuery::new("B07TPWWH77"), 1)
        .await
        .unwrap();

    assert_eq!(page.total_reviews(), None);
    assert_eq!(page.reviews().map(|r| r.len()), Some(0));
}

#[tokio::test]
async fn unused_fields_of_any_type_are_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product-reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "request_id": 17,
            "data": {
                "asin": "B07TPWWH77",
                "country": "TR",
                "total_reviews": 2,
                "rating_distribution": { "5": 80, "1": 20 },
                "reviews": [
                    {
                        "review_id": 1001,
                        "review_comment": "Çok iyi",
                        "review_star_rating": 5,
                        "is_verified_purchase": true
                    },
                    { "review_star_rating": 1.5, "review_title": null }
                ]
            }
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .get_review_page(&ReviewQuery::new("B07TPWWH77"), 1)
        .await
        .unwrap();

    assert_eq!(page.total_reviews(), Some(2));
    let reviews = page.reviews().unwrap();
    assert_eq!(reviews[0].review_comment.as_deref(), Some("Çok iyi"));
    assert_eq!(reviews[1].review_comment, None);
}
