#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;
use url::Url;

use newsbrief::{
    api,
    app_state::AppState,
    cache::MemoryCache,
    fetcher::{FetchError, PageFetcher, PageResponse},
    summarizer::Summarizer,
};

/// Serves one canned page, or one canned failure, and counts calls.
pub struct StubFetcher {
    html: Option<String>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn page(html: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            html: Some(html.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            html: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let url = Url::parse(url)?;
        match &self.html {
            Some(html) => Ok(PageResponse::from_html(url, html.clone())),
            None => Err(FetchError::Connect("connection refused".to_string())),
        }
    }
}

pub fn test_app(fetcher: Arc<StubFetcher>) -> Router {
    let state = AppState {
        fetcher,
        cache: Arc::new(MemoryCache::new()),
        summarizer: Arc::new(Summarizer::default()),
        cache_ttl: Duration::from_secs(60),
    };
    api::router(state)
}

pub fn article_html(paragraphs: &[&str]) -> String {
    let body: String = paragraphs.iter().map(|p| format!("<p>{p}</p>\n")).collect();
    format!(
        "<!DOCTYPE html><html><head><title>Bài viết mẫu - Báo Mẫu</title></head>\
         <body><nav>Trang chủ</nav><article>{body}</article></body></html>"
    )
}

/// Five two-sentence paragraphs of 125 to 137 characters.
pub const CLEAN_ARTICLE: [&str; 5] = [
    "Ủy ban nhân dân thành phố vừa phê duyệt kế hoạch mở rộng tuyến đường ven sông. Công trình dự kiến khởi công vào cuối năm nay.",
    "Tuyến đường mới dài khoảng tám cây số và đi qua ba quận nội thành đông dân. Người dân địa phương bày tỏ sự đồng tình với dự án.",
    "Kinh phí xây dựng được lấy từ ngân sách thành phố và nguồn vốn xã hội hóa. Các nhà thầu sẽ được lựa chọn qua hình thức đấu thầu rộng rãi.",
    "Trong thời gian thi công, các phương tiện sẽ được phân luồng sang đường khác. Lực lượng cảnh sát giao thông sẽ hỗ trợ điều tiết.",
    "Khi hoàn thành, con đường sẽ giúp giảm ùn tắc cho khu vực phía đông thành phố. Dự kiến công trình sẽ đưa vào sử dụng sau hai năm.",
];
