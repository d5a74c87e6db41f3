//! In-memory page.
//!
//! ```text
//! MemoryPage
//! ├── selectors: Selectors          // how links/close are recognized
//! ├── containers: Vec<Container>    // document order
//! │   ├── id, html, visible
//! │   └── generation                // bumped on every content swap
//! └── body_overflow: Option<String> // inline style, "hidden" while locked
//! ```

use log::debug;
use serde::Serialize;

use super::markup::start_tags;
use super::{ElementKey, ReadingLink, RenderSurface, Selectors, SurfaceError};

const OVERFLOW_HIDDEN: &str = "hidden";

#[derive(Debug, Clone)]
struct Container {
    id: String,
    html: String,
    visible: bool,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct MemoryPage {
    selectors: Selectors,
    containers: Vec<Container>,
    body_overflow: Option<String>,
}

/// Serializable view of a page at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub containers: Vec<ContainerSnapshot>,
    pub body_overflow: Option<String>,
    pub reading_links: Vec<String>,
    pub close_affordance: Option<ElementKey>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerSnapshot {
    pub id: String,
    pub visible: bool,
    pub html: String,
}

impl MemoryPage {
    pub fn new(selectors: Selectors) -> Self {
        Self {
            selectors,
            containers: Vec::new(),
            body_overflow: None,
        }
    }

    /// Appends a container to the page. Ids are expected to be unique.
    pub fn with_container(mut self, id: &str, html: impl Into<String>, visible: bool) -> Self {
        self.containers.push(Container {
            id: id.to_string(),
            html: html.into(),
            visible,
            generation: 0,
        });
        self
    }

    pub fn content(&self, container: &str) -> Option<&str> {
        self.find(container).map(|c| c.html.as_str())
    }

    pub fn is_visible(&self, container: &str) -> Option<bool> {
        self.find(container).map(|c| c.visible)
    }

    pub fn body_overflow(&self) -> Option<&str> {
        self.body_overflow.as_deref()
    }

    pub fn scroll_locked(&self) -> bool {
        self.body_overflow.as_deref() == Some(OVERFLOW_HIDDEN)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            containers: self
                .containers
                .iter()
                .map(|c| ContainerSnapshot {
                    id: c.id.clone(),
                    visible: c.visible,
                    html: c.html.clone(),
                })
                .collect(),
            body_overflow: self.body_overflow.clone(),
            reading_links: self.reading_links().into_iter().map(|l| l.href).collect(),
            close_affordance: self.close_affordance(),
        }
    }

    fn find(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Container, SurfaceError> {
        self.containers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| SurfaceError::MissingContainer(id.to_string()))
    }

    fn visible(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter().filter(|c| c.visible)
    }
}

impl RenderSurface for MemoryPage {
    fn replace_content(&mut self, container: &str, html: &str) -> Result<(), SurfaceError> {
        let target = self.find_mut(container)?;
        target.html = html.to_string();
        target.generation += 1;
        debug!(
            "Replaced #{} content ({} bytes, generation {})",
            container,
            html.len(),
            target.generation
        );
        Ok(())
    }

    fn show(&mut self, container: &str) -> Result<(), SurfaceError> {
        self.find_mut(container)?.visible = true;
        Ok(())
    }

    fn hide(&mut self, container: &str) -> Result<(), SurfaceError> {
        self.find_mut(container)?.visible = false;
        Ok(())
    }

    fn lock_scroll(&mut self) {
        self.body_overflow = Some(OVERFLOW_HIDDEN.to_string());
    }

    fn unlock_scroll(&mut self) {
        self.body_overflow = None;
    }

    fn has_container(&self, container: &str) -> bool {
        self.find(container).is_some()
    }

    fn reading_links(&self) -> Vec<ReadingLink> {
        let class = self.selectors.reading_class.as_str();
        self.visible()
            .flat_map(|c| {
                start_tags(&c.html).filter_map(move |tag| {
                    if tag.name != "a" || !tag.has_class(class) {
                        return None;
                    }
                    let href = tag.attr("href")?.to_string();
                    Some(ReadingLink {
                        key: ElementKey {
                            container: c.id.clone(),
                            generation: c.generation,
                            ordinal: tag.ordinal,
                        },
                        href,
                    })
                })
            })
            .collect()
    }

    fn close_affordance(&self) -> Option<ElementKey> {
        let close_id = self.selectors.close_id.as_str();
        self.visible().find_map(|c| {
            start_tags(&c.html)
                .find(|tag| tag.attr("id") == Some(close_id))
                .map(|tag| ElementKey {
                    container: c.id.clone(),
                    generation: c.generation,
                    ordinal: tag.ordinal,
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"<h1>Blog</h1>
<a class="reading" href="/posts/1">One</a>
<a href="/about">About</a>
<a class="title reading" href="/posts/2">Two</a>
<a class="reading">No target</a>"#;

    fn page() -> MemoryPage {
        MemoryPage::new(Selectors::default())
            .with_container("html5", LIST, true)
            .with_container("overlay", "", false)
    }

    #[test]
    fn test_reading_links_need_class_and_href() {
        let hrefs: Vec<_> = page().reading_links().into_iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/posts/1", "/posts/2"]);
    }

    #[test]
    fn test_commented_out_links_are_not_rendered() {
        let page = MemoryPage::new(Selectors::default()).with_container(
            "html5",
            r#"<!-- <a class="reading" href="/posts/draft">Draft</a> --><a class="reading" href="/posts/1">One</a>"#,
            true,
        );
        let links = page.reading_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "/posts/1");
        assert_eq!(links[0].key.ordinal, 0);
    }

    #[test]
    fn test_angle_bracket_in_attribute_keeps_link() {
        let page = MemoryPage::new(Selectors::default()).with_container(
            "html5",
            r#"<a title="a > b" class="reading" href="/posts/1">One</a>"#,
            true,
        );
        let hrefs: Vec<_> = page.reading_links().into_iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/posts/1"]);
    }

    #[test]
    fn test_hidden_containers_are_not_scanned() {
        let mut page = page();
        page.replace_content("overlay", r#"<button id="goHome">x</button>"#)
            .unwrap();
        assert_eq!(page.close_affordance(), None);

        page.show("overlay").unwrap();
        let key = page.close_affordance().unwrap();
        assert_eq!(key.container, "overlay");
        assert_eq!(key.generation, 1);
    }

    #[test]
    fn test_replace_invalidates_old_keys() {
        let mut page = page();
        let before: Vec<_> = page.reading_links().into_iter().map(|l| l.key).collect();

        page.replace_content("html5", LIST).unwrap();
        let after: Vec<_> = page.reading_links().into_iter().map(|l| l.key).collect();

        assert_eq!(before.len(), after.len());
        assert!(before.iter().all(|k| !after.contains(k)));
    }

    #[test]
    fn test_replace_missing_container() {
        let mut page = page();
        let result = page.replace_content("nope", "<p>x</p>");
        assert_eq!(result, Err(SurfaceError::MissingContainer("nope".into())));
        assert_eq!(page.content("html5"), Some(LIST));
    }

    #[test]
    fn test_scroll_lock_toggles_body_overflow() {
        let mut page = page();
        assert!(!page.scroll_locked());
        page.lock_scroll();
        assert_eq!(page.body_overflow(), Some("hidden"));
        page.unlock_scroll();
        assert_eq!(page.body_overflow(), None);
    }

    #[test]
    fn test_custom_selectors() {
        let selectors = Selectors {
            reading_class: "post-link".into(),
            close_id: "back".into(),
        };
        let page = MemoryPage::new(selectors).with_container(
            "main",
            r#"<a class="post-link" href="/p/9">9</a><a id="back" href="/">Back</a>"#,
            true,
        );
        assert_eq!(page.reading_links()[0].href, "/p/9");
        assert_eq!(page.close_affordance().unwrap().ordinal, 1);
    }
}
