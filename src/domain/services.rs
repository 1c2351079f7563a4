//! Service traits implemented by the infrastructure layer

use anyhow::Result;
use async_trait::async_trait;

/// Response of a single GET: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Page download service
///
/// Implementations return `Ok` for any HTTP response, whatever its status;
/// `Err` means the request itself failed (DNS, connection, timeout).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;

    /// Fetch and require a success status
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let page = self.fetch(url).await?;
        if !page.is_success() {
            anyhow::bail!("HTTP request failed with status {}: {}", page.status, url);
        }
        Ok(page.body)
    }
}
