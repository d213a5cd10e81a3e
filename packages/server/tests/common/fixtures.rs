//! Shared fixtures: a five-review product and a well-formed narrative.

use server_core::domains::classification::Category;
use server_core::kernel::test_dependencies::{MockAI, MockCategoryModel, MockReviewSource};
use server_core::kernel::{SourcePage, TestDependencies};

pub const PRODUCT_LINK: &str = "https://www.amazon.com.tr/Ornek-Urun/dp/B000000000/ref=sr_1_1";

pub const REVIEWS: [&str; 5] = [
    "great product",
    "bad packaging",
    "too expensive",
    "nice design",
    "great product",
];

pub const NARRATIVE: &str = "Yorumların Puanları:
1. Ürün Kalitesi: (8,5/10)
2. Paketleme/Teslimat: (4/10)
3. Ürün Tasarımı: (9/10)
4. Fiyat/Performans: (6.5/10)
5. Genel Sonuç: (7/10)

Yorum Özetleri:
1. Ürün Kalitesi: Kullanıcılar ürünü beğeniyor.
2. Paketleme/Teslimat: Paketler hasarlı gelmiş.
5. Genel Sonuç: Fiyatına göre iyi bir ürün.";

pub fn five_review_source() -> MockReviewSource {
    MockReviewSource::new().with_page(1, SourcePage::with_comments(5, &REVIEWS))
}

pub fn five_review_model() -> MockCategoryModel {
    MockCategoryModel::new()
        .with_categories("great product", &[Category::Quality])
        .with_categories("bad packaging", &[Category::PackagingDelivery])
        .with_categories(
            "too expensive",
            &[Category::Quality, Category::PricePerformance],
        )
        .with_categories("nice design", &[Category::Design])
}

pub fn five_review_deps() -> TestDependencies {
    TestDependencies::new()
        .mock_reviews(five_review_source())
        .mock_model(five_review_model())
        .mock_ai(MockAI::new().with_response(NARRATIVE))
}
