//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::Variant;
use crate::core::navigator::{Navigator, NavigatorSettings};
use crate::fetch::{FetchError, Fragment, FragmentSource};
use crate::surface::{MemoryPage, Selectors};

pub const HEADER_HTML: &str = r#"<nav><a id="goHome" href="/">Home</a></nav>"#;

pub const LIST_HTML: &str = r#"<ul>
  <li><a class="reading" href="/posts/42">Hello</a></li>
  <li><a class="reading" href="/posts/missing">Gone</a></li>
</ul>"#;

/// A fragment source serving canned responses. Unknown URLs fail like a refused connection.
#[derive(Default)]
pub struct StaticSource {
    responses: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), (status, body.to_string()));
        self
    }

    /// Every href fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FragmentSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, href: &str) -> Result<Fragment, FetchError> {
        self.requests.lock().unwrap().push(href.to_string());
        match self.responses.get(href) {
            Some((status, body)) if (200..300).contains(status) => Ok(Fragment::new(body.clone())),
            Some((status, _)) => Err(FetchError::Status {
                url: href.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Network(format!("connection refused: {href}"))),
        }
    }
}

/// A page with a header holding the close/home link, the list and a hidden overlay.
pub fn test_page() -> MemoryPage {
    MemoryPage::new(Selectors::default())
        .with_container("header", HEADER_HTML, true)
        .with_container("html5", LIST_HTML, true)
        .with_container("overlay", "", false)
}

/// Creates a test Navigator over `test_page()`, returning the source for request assertions.
pub fn test_navigator(
    variant: Variant,
    source: StaticSource,
) -> (Navigator<MemoryPage>, Arc<StaticSource>) {
    let source = Arc::new(source);
    let settings = NavigatorSettings {
        variant,
        ..Default::default()
    };
    let navigator = Navigator::new(test_page(), source.clone(), settings);
    (navigator, source)
}
