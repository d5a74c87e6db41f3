use std::fmt;

use crate::core::state::Transition;
use crate::fetch::FetchError;
use crate::surface::SurfaceError;

/// The underlying reason a transition failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    /// The server answered with a non-success status.
    Fetch { url: String, status: u16 },
    /// The request could not complete.
    Network(String),
    /// An expected container or element is missing from the page.
    DomAccess(String),
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Fetch { .. } => write!(f, "Failed to fetch."),
            Cause::Network(msg) => write!(f, "network error: {msg}"),
            Cause::DomAccess(msg) => write!(f, "DOM access error: {msg}"),
        }
    }
}

impl From<FetchError> for Cause {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status { url, status } => Cause::Fetch { url, status },
            FetchError::Network(msg) => Cause::Network(msg),
        }
    }
}

impl From<SurfaceError> for Cause {
    fn from(err: SurfaceError) -> Self {
        Cause::DomAccess(err.to_string())
    }
}

/// Any failure during a transition, wrapped with the transition it interrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationError {
    pub transition: Transition,
    pub cause: Cause,
}

impl NavigationError {
    pub fn new(transition: Transition, cause: impl Into<Cause>) -> Self {
        Self {
            transition,
            cause: cause.into(),
        }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "navigation to {} failed: {}", self.transition, self.cause)
    }
}

impl std::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl std::error::Error for Cause {}
