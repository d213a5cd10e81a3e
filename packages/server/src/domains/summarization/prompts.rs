//! Prompt sent to the generative service.
//!
//! The format block is what `report::parse_narrative` reads back, so its
//! labels and the summary marker must stay in step with `ScoreCategory`.

use crate::domains::classification::CategoryMap;

/// Separator between reviews on one category line.
pub const REVIEW_SEPARATOR: &str = " | ";

const REVIEWS_PLACEHOLDER: &str = "{reviews}";

pub const SUMMARIZE_REVIEWS_PROMPT: &str = r#"Sen ürün yorumlarını özetleyen bir asistansın. Yanıtını yalnızca Türkçe ver.

Aşağıda bir ürün için kullanıcı yorumları kategorilere ayrılmış olarak veriliyor. Her satır bir kategoridir ve yorumlar " | " ile ayrılmıştır.

Yapman gerekenler:
- Her kategori için yorumların genel duygusunu değerlendir ve 10 üzerinden bir puan ver.
- Her kategoriyi kısa ve anlaşılır bir paragrafla özetle.
- Son olarak tüm kategorileri kapsayan genel bir sonuç yaz.
- Yorumlarda bulunmayan bilgileri uydurma.

Yanıtını tam olarak aşağıdaki formatta ver:

Yorumların Puanları:
1. Ürün Kalitesi: (puan/10)
2. Paketleme/Teslimat: (puan/10)
3. Ürün Tasarımı: (puan/10)
4. Fiyat/Performans: (puan/10)
5. Genel Sonuç: (puan/10)

Yorum Özetleri:
1. Ürün Kalitesi: (bu kategorideki yorumların özeti)
2. Paketleme/Teslimat: (bu kategorideki yorumların özeti)
3. Ürün Tasarımı: (bu kategorideki yorumların özeti)
4. Fiyat/Performans: (bu kategorideki yorumların özeti)
5. Genel Sonuç: (tüm yorumlara dayanan genel değerlendirme)

Yorumlar:
{reviews}"#;

/// One line per category in map order: `LABEL: r1 | r2 | ...`.
pub fn render_category_block(categories: &CategoryMap) -> String {
    categories
        .iter()
        .map(|(category, reviews)| {
            format!("{}: {}", category.label(), reviews.join(REVIEW_SEPARATOR))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_summary_prompt(categories: &CategoryMap) -> String {
    SUMMARIZE_REVIEWS_PROMPT.replace(REVIEWS_PLACEHOLDER, &render_category_block(categories))
}
