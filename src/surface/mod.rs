//! # Rendering Surface
//!
//! The capability the navigator mutates instead of reaching for a global
//! `document`. Everything the navigator does to a page goes through
//! [`RenderSurface`], so the navigation logic runs the same against a real
//! page adapter or the in-memory [`MemoryPage`].

pub mod markup;
pub mod memory;

use std::fmt;

use serde::Serialize;

pub use memory::{ContainerSnapshot, MemoryPage, PageSnapshot};

/// Handle to an interactive element in the rendered page.
///
/// The generation is bumped every time the container's content is replaced,
/// so a handle taken before a swap never matches an element rendered after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementKey {
    pub container: String,
    pub generation: u64,
    pub ordinal: usize,
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}/{}", self.container, self.generation, self.ordinal)
    }
}

/// A rendered element tagged as a reading link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingLink {
    pub key: ElementKey,
    pub href: String,
}

/// How interactive elements are recognized in rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    /// Class token marking an anchor as a reading link.
    pub reading_class: String,
    /// Id of the close/home affordance.
    pub close_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            reading_class: "reading".to_string(),
            close_id: "goHome".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No container with this id exists on the page.
    MissingContainer(String),
    /// An expected interactive element is not rendered.
    MissingElement(&'static str),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::MissingContainer(id) => write!(f, "no container with id '{id}'"),
            SurfaceError::MissingElement(what) => write!(f, "{what} is not rendered"),
        }
    }
}

impl std::error::Error for SurfaceError {}

pub trait RenderSurface {
    /// Replaces the inner markup of a container wholesale.
    fn replace_content(&mut self, container: &str, html: &str) -> Result<(), SurfaceError>;

    fn show(&mut self, container: &str) -> Result<(), SurfaceError>;

    fn hide(&mut self, container: &str) -> Result<(), SurfaceError>;

    /// Sets the body's inline overflow to hidden.
    fn lock_scroll(&mut self);

    /// Clears the body's inline overflow.
    fn unlock_scroll(&mut self);

    fn has_container(&self, container: &str) -> bool;

    /// Every reading link currently rendered in a visible container, in document order.
    fn reading_links(&self) -> Vec<ReadingLink>;

    /// The close/home element of the current view, if one is rendered.
    fn close_affordance(&self) -> Option<ElementKey>;
}
