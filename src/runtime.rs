//! # Page Runtime
//!
//! The page's event loop. Events arrive on a channel and are handled one at
//! a time: a click is resolved against the page as it is rendered *now*,
//! dispatched to the navigator and awaited to completion before the next
//! event is read.
//!
//! This is the only place navigation errors are caught. They are logged and
//! the loop moves on; the page simply does not update.

use std::fmt;
use std::str::FromStr;

use log::{debug, error, info, warn};
use tokio::sync::mpsc::Receiver;

use crate::core::navigator::{ClickEvent, Navigator};
use crate::surface::{ElementKey, RenderSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    DomContentLoaded,
    Click(ClickTarget),
}

/// Which rendered element a click lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The first reading link with this href.
    ReadingLink(String),
    /// The n-th reading link (zero-based) in document order.
    ReadingLinkAt(usize),
    /// The close/home affordance.
    Close,
}

impl ClickTarget {
    /// Finds the element this target currently refers to.
    pub fn resolve<S: RenderSurface>(&self, surface: &S) -> Option<ElementKey> {
        match self {
            ClickTarget::ReadingLink(href) => surface
                .reading_links()
                .into_iter()
                .find(|link| &link.href == href)
                .map(|link| link.key),
            ClickTarget::ReadingLinkAt(index) => surface
                .reading_links()
                .into_iter()
                .nth(*index)
                .map(|link| link.key),
            ClickTarget::Close => surface.close_affordance(),
        }
    }
}

impl fmt::Display for ClickTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickTarget::ReadingLink(href) => write!(f, "read:{href}"),
            ClickTarget::ReadingLinkAt(index) => write!(f, "read#{index}"),
            ClickTarget::Close => write!(f, "home"),
        }
    }
}

/// Parses `read:<href>`, `read#<n>`, `home` or `close`.
impl FromStr for ClickTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(href) = s.strip_prefix("read:") {
            if href.is_empty() {
                return Err("read: needs an href".to_string());
            }
            return Ok(ClickTarget::ReadingLink(href.to_string()));
        }
        if let Some(index) = s.strip_prefix("read#") {
            return index
                .parse()
                .map(ClickTarget::ReadingLinkAt)
                .map_err(|e| format!("invalid link index '{index}': {e}"));
        }
        match s {
            "home" | "close" => Ok(ClickTarget::Close),
            other => Err(format!(
                "unknown step '{other}' (expected read:<href>, read#<n>, home or close)"
            )),
        }
    }
}

/// Drains `events` into the navigator until the sender side is dropped.
pub async fn run<S: RenderSurface>(
    mut navigator: Navigator<S>,
    mut events: Receiver<PageEvent>,
) -> Navigator<S> {
    while let Some(event) = events.recv().await {
        debug!("Page event: {:?}", event);
        match event {
            PageEvent::DomContentLoaded => {
                if let Err(e) = navigator.ready() {
                    error!("{e}");
                }
            }
            PageEvent::Click(target) => {
                let Some(key) = target.resolve(navigator.surface()) else {
                    warn!("Click on {target} ignored: no such element is rendered");
                    continue;
                };
                let mut click = ClickEvent::new(key);
                if let Err(e) = navigator.click(&mut click).await {
                    error!("{e}");
                }
                if !click.default_prevented() {
                    info!(
                        "Click on {target} was not intercepted; a browser would navigate away"
                    );
                }
            }
        }
    }
    navigator
}
