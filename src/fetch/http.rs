//! HTTP fragment source.
//!
//! Resolves an `href` the way a browser resolves an anchor's attribute
//! (relative to the page URL), issues a plain GET and hands back the body
//! decoded as UTF-8. Any non-2xx status is a failure, regardless of the code.

use async_trait::async_trait;
use log::{debug, info, warn};
use url::Url;

use super::source::{FetchError, Fragment, FragmentSource};

pub struct HttpFragmentSource {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpFragmentSource {
    /// Creates a source whose relative hrefs resolve against `page_url`.
    pub fn new(page_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(page_url)
            .map_err(|e| FetchError::Network(format!("invalid page URL {page_url}: {e}")))?;

        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    /// Resolves an absolute or relative href against the page URL.
    pub fn resolve(&self, href: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(href)
            .map_err(|e| FetchError::Network(format!("invalid href {href}: {e}")))
    }
}

#[async_trait]
impl FragmentSource for HttpFragmentSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, href: &str) -> Result<Fragment, FetchError> {
        let url = self.resolve(href)?;
        info!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Fragment response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Fragment fetch failed: {url} answered {status}");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        // Always UTF-8, whatever charset the Content-Type names.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Fragment body read: {} bytes", bytes.len());

        Ok(Fragment::new(String::from_utf8_lossy(&bytes)))
    }
}
