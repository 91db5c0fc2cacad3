use scraper::Html;
use std::fs;

use crate::extractor::{Extractor, SelectorTable, extract};
use crate::summarizer::{Summarizer, create_bullet_point_summary};

fn fixture(name: &str) -> Html {
    let html = fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture");
    Html::parse_document(&html)
}

#[test]
fn test_extract_site_family_article() {
    let document = fixture("vnexpress.html");
    let content = extract(&document);

    assert_eq!(content.paragraph_count, 6);
    assert_eq!(content.paragraphs.len(), content.paragraph_count);
    assert_eq!(content.full_content, content.paragraphs.join("\n\n"));

    // Lead comes first, body paragraphs follow in document order.
    assert!(content.paragraphs[0].starts_with("Giá xăng RON 95 tăng thêm 1.020 đồng"));
    assert!(content.paragraphs[1].starts_with("Theo thông báo của liên bộ"));
    assert!(content.paragraphs[5].starts_with("Liên bộ quyết định"));

    assert!(!content.full_content.contains("Xem thêm"));
    assert!(!content.full_content.contains("Trang chủ"));
    assert!(!content.full_content.contains("Chia sẻ"));
    assert!(!content.full_content.contains("Tin liên quan"));
    assert!(!content.full_content.contains("Bình luận"));
    assert!(!content.full_content.contains("Minh Anh"));
}

#[test]
fn test_extract_metadata() {
    let document = fixture("vnexpress.html");
    let metadata = Extractor::default().metadata(&document);
    assert_eq!(metadata.title.as_deref(), Some("Giá xăng tăng lần thứ ba liên tiếp"));
    assert_eq!(metadata.site_name.as_deref(), Some("VnExpress"));
}

#[test]
fn test_extract_skips_boilerplate_paragraphs() {
    let document = fixture("boilerplate.html");
    let content = extract(&document);

    assert_eq!(content.paragraph_count, 3);
    assert!(content.paragraphs[0].starts_with("Mưa lớn"));
    assert!(content.paragraphs[1].starts_with("Chính quyền"));
    assert!(content.paragraphs[2].starts_with("Lực lượng cứu hộ"));

    let bullets = create_bullet_point_summary(&content.full_content, None, None);
    assert!(!bullets.bullets.is_empty());
    for bullet in &bullets.bullets {
        assert!(!bullet.contains("Xem thêm"));
        assert!(!bullet.contains("Chia sẻ"));
        assert!(!bullet.contains("Nhấn vào đây"));
    }
}

#[test]
fn test_sparse_page_falls_back_to_meta_description() {
    let document = fixture("sparse.html");
    let content = extract(&document);

    assert_eq!(content.paragraph_count, 1);
    assert!(content.full_content.starts_with("Lễ hội pháo hoa quốc tế Đà Nẵng"));

    let bullets = create_bullet_point_summary(&content.full_content, None, None);
    assert_eq!(bullets.bullets.len(), 1);
    assert_eq!(bullets.bullets[0], format!("• {}", content.full_content));
}

#[test]
fn test_density_fallback_without_article_markup() {
    let document = fixture("blog.html");
    let content = extract(&document);

    assert_eq!(content.paragraph_count, 4);
    assert!(content.paragraphs[0].starts_with("Chúng tôi bắt đầu hành trình"));
    assert!(content.paragraphs[3].starts_with("Đêm đó trời lạnh"));
    assert!(!content.full_content.contains("Bài viết mới nhất"));
}

#[test]
fn test_body_scan_on_unstructured_page() {
    let first = "Buổi hòa nhạc ngoài trời tối qua diễn ra tại công viên trung tâm với sự tham gia của hàng nghìn khán giả yêu âm nhạc.";
    let second = "Ban tổ chức cho biết chương trình sẽ được tổ chức định kỳ mỗi tháng một lần nhằm mang nghệ thuật đến gần hơn với người dân.";
    let html = format!(
        r#"<html><body><div class="page"><span>{first}</span><br><br><span>{second}</span></div></body></html>"#
    );
    let content = extract(&Html::parse_document(&html));

    assert_eq!(content.paragraphs, vec![first.to_string(), second.to_string()]);
}

#[test]
fn test_empty_document_yields_empty_content() {
    let content = extract(&Html::parse_document("<html><head></head><body></body></html>"));
    assert!(content.is_empty());
    assert_eq!(content.paragraph_count, 0);
    assert!(content.full_content.is_empty());
}

#[test]
fn test_extraction_leaves_document_untouched() {
    let document = fixture("vnexpress.html");
    let before = document.root_element().html();

    let first = extract(&document);
    let second = extract(&document);

    assert_eq!(first, second);
    assert_eq!(document.root_element().html(), before);
}

#[test]
fn test_paragraphs_are_not_duplicated() {
    let html = r#"<html><body><article>
        <p class="sapo">Ngân hàng Nhà nước vừa công bố điều chỉnh lãi suất điều hành.</p>
        <p>Ngân hàng Nhà nước vừa công bố điều chỉnh lãi suất điều hành.</p>
        <p>Mức giảm 0,5 điểm phần trăm áp dụng từ ngày mai đối với tất cả các ngân hàng.</p>
        <p>Mức giảm 0,5 điểm phần trăm áp dụng từ ngày mai đối với tất cả các ngân hàng.</p>
        <p>Quyết định này nhằm hỗ trợ doanh nghiệp tiếp cận vốn với chi phí thấp hơn.</p>
    </article></body></html>"#;
    let content = extract(&Html::parse_document(html));

    assert_eq!(content.paragraph_count, 3);
    for (i, paragraph) in content.paragraphs.iter().enumerate() {
        for other in content.paragraphs.iter().skip(i + 1) {
            assert!(!paragraph.contains(other.as_str()) && !other.contains(paragraph.as_str()));
        }
    }
}

#[test]
fn test_custom_selector_table() {
    let table = SelectorTable::from_json(
        r#"{"families":[{"name":"story","article":".story-body","paragraphs":".para"}]}"#,
    )
    .unwrap();
    let html = r#"<html><body>
        <div class="story-body">
            <div class="para">Đoạn đầu tiên của câu chuyện được đánh dấu riêng.</div>
            <div class="para">Đoạn thứ hai của câu chuyện được đánh dấu riêng.</div>
            <div class="para">Đoạn thứ ba của câu chuyện được đánh dấu riêng.</div>
        </div>
    </body></html>"#;
    let content = Extractor::new(&table).extract(&Html::parse_document(html));

    assert_eq!(content.paragraph_count, 3);
    assert!(content.paragraphs[1].starts_with("Đoạn thứ hai"));
}

#[test]
fn test_extract_and_summarize_fixture() {
    let document = fixture("vnexpress.html");
    let summarizer = Summarizer::default();

    let short = summarizer.extract_and_summarize(&document, 30);
    let full = summarizer.extract_and_summarize(&document, 100);

    assert_eq!(short.original_paragraphs.len(), 6);
    assert!(short.stats.summary_length <= full.stats.summary_length);
    assert!(full.stats.summary_length <= full.stats.original_length);
    assert!(short.bullets.len() <= 3);
    assert!(full.summary.contains("24.530"));
    assert!(full.summary.contains("1.020"));
}
