use std::fmt;

use async_trait::async_trait;

/// An HTML string returned by the server for one renderable unit of content.
///
/// Never parsed or validated. It is injected verbatim into a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Errors that can occur while fetching a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status. Every status is treated alike.
    Status { url: String, status: u16 },
    /// The request could not complete (bad URL, DNS, connection refused, body read).
    Network(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status { .. } => write!(f, "Failed to fetch."),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Performs a GET for `href` and returns the full response body as a fragment.
    async fn fetch(&self, href: &str) -> Result<Fragment, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "http://localhost/posts/missing".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to fetch.");
    }

    #[test]
    fn test_fragment_is_kept_verbatim() {
        let html = "  <article>Hello</article>\n";
        let fragment = Fragment::new(html);
        assert_eq!(fragment.as_str(), html);
        assert_eq!(fragment.into_string(), html);
    }
}
