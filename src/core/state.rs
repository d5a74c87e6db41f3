//! # Navigation State
//!
//! ```text
//!            reading link (fetch ok)
//!   ┌──────┐ ────────────────────────▶ ┌────────┐
//!   │ LIST │                           │ DETAIL │
//!   └──────┘ ◀──────────────────────── └────────┘
//!            close/home (fetch ok | overlay dismissed)
//! ```
//!
//! The view state is stored explicitly. Listener bindings are recomputed
//! from it after every transition and never patched incrementally.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::surface::ElementKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    List,
    Detail,
}

/// One of the two guarded transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ToDetail,
    ToList,
}

impl Transition {
    pub fn target(self) -> ViewState {
        match self {
            Transition::ToDetail => ViewState::Detail,
            Transition::ToList => ViewState::List,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::ToDetail => write!(f, "detail view"),
            Transition::ToList => write!(f, "list view"),
        }
    }
}

/// What a bound element does when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "handler", rename_all = "snake_case")]
pub enum Handler {
    /// Open the detail view for the link's target.
    ReadPost { href: String },
    /// Return to the list view.
    GoHome,
}

/// Click handlers currently attached, at most one per element.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    handlers: BTreeMap<ElementKey, Handler>,
}

impl Bindings {
    /// Drops every existing binding and attaches the given ones.
    pub fn replace(&mut self, bindings: impl IntoIterator<Item = (ElementKey, Handler)>) {
        self.handlers = bindings.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn get(&self, key: &ElementKey) -> Option<&Handler> {
        self.handlers.get(key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ElementKey> {
        self.handlers.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementKey, &Handler)> {
        self.handlers.iter()
    }
}
