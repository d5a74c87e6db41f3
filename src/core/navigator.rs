//! # Fragment Navigator
//!
//! Owns the LIST ⇄ DETAIL transition and every page/network side effect
//! needed to realize it.
//!
//! A transition runs in three steps:
//!
//! 1. `plan()` turns the action into an `Effect` (pure).
//! 2. The effect is applied: at most one GET, then the page mutation.
//!    A failed fetch returns before the page is touched.
//! 3. The view state is committed and bindings are rebuilt from it.
//!
//! If rebinding fails after the page was already mutated, bindings are
//! left empty rather than pointing at destroyed elements.

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::Variant;
use crate::core::action::{Action, Effect, plan};
use crate::core::config::ResolvedConfig;
use crate::core::error::{Cause, NavigationError};
use crate::core::state::{Bindings, Handler, Transition, ViewState};
use crate::fetch::FragmentSource;
use crate::surface::{ElementKey, MemoryPage, PageSnapshot, RenderSurface, SurfaceError};

pub const DEFAULT_PAGE_URL: &str = "http://localhost:5000/";
pub const DEFAULT_MAIN_CONTAINER: &str = "html5";
pub const DEFAULT_OVERLAY_CONTAINER: &str = "overlay";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorSettings {
    pub variant: Variant,
    /// URL of the current page; the in-place variant re-fetches it to go home.
    pub page_url: String,
    pub main_container: String,
    pub overlay_container: String,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            page_url: DEFAULT_PAGE_URL.to_string(),
            main_container: DEFAULT_MAIN_CONTAINER.to_string(),
            overlay_container: DEFAULT_OVERLAY_CONTAINER.to_string(),
        }
    }
}

impl NavigatorSettings {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            variant: config.variant,
            page_url: config.page_url.clone(),
            main_container: config.main_container.clone(),
            overlay_container: config.overlay_container.clone(),
        }
    }
}

/// A click delivered to the navigator.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    target: ElementKey,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target: ElementKey) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn target(&self) -> &ElementKey {
        &self.target
    }

    /// Suppresses the browser's own navigation for this click.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub struct Navigator<S> {
    surface: S,
    source: Arc<dyn FragmentSource>,
    settings: NavigatorSettings,
    view: ViewState,
    bindings: Bindings,
}

impl<S: RenderSurface> Navigator<S> {
    pub fn new(surface: S, source: Arc<dyn FragmentSource>, settings: NavigatorSettings) -> Self {
        Self {
            surface,
            source,
            settings,
            view: ViewState::List,
            bindings: Bindings::default(),
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Document-ready bootstrap: establishes the LIST state.
    pub fn ready(&mut self) -> Result<(), NavigationError> {
        if !self.surface.has_container(&self.settings.main_container) {
            return Err(NavigationError::new(
                Transition::ToList,
                SurfaceError::MissingContainer(self.settings.main_container.clone()),
            ));
        }
        self.view = ViewState::List;
        self.bind_reading_links();
        info!(
            "Navigator ready ({:?} variant, source '{}')",
            self.settings.variant,
            self.source.name()
        );
        Ok(())
    }

    /// Runs the handler bound to the clicked element, if any.
    ///
    /// Clicks on unbound elements are ignored and keep their default action.
    pub async fn click(&mut self, event: &mut ClickEvent) -> Result<(), NavigationError> {
        let Some(handler) = self.bindings.get(event.target()).cloned() else {
            debug!("No handler bound to {}", event.target());
            return Ok(());
        };

        match handler {
            Handler::ReadPost { href } => self.activate_detail(event, &href).await,
            Handler::GoHome => self.activate_list(event).await,
        }
    }

    /// Opens the detail view for a reading link's target.
    pub async fn activate_detail(
        &mut self,
        event: &mut ClickEvent,
        href: &str,
    ) -> Result<(), NavigationError> {
        event.prevent_default();
        self.transition(Action::ReadPost {
            href: href.to_string(),
        })
        .await
    }

    /// Returns to the list view.
    pub async fn activate_list(&mut self, event: &mut ClickEvent) -> Result<(), NavigationError> {
        event.prevent_default();
        self.transition(Action::GoHome).await
    }

    /// Binds the detail handler to every reading link currently rendered.
    pub fn bind_reading_links(&mut self) {
        let links = self.surface.reading_links();
        self.bindings.replace(
            links
                .into_iter()
                .map(|link| (link.key, Handler::ReadPost { href: link.href })),
        );
        debug!("Bound {} reading links", self.bindings.len());
    }

    /// Binds the list handler to the close/home element of the current view.
    pub fn bind_close_affordance(&mut self) -> Result<(), SurfaceError> {
        match self.surface.close_affordance() {
            Some(key) => {
                debug!("Close affordance bound at {key}");
                self.bindings.replace([(key, Handler::GoHome)]);
                Ok(())
            }
            None => {
                self.bindings.clear();
                Err(SurfaceError::MissingElement("close/home affordance"))
            }
        }
    }

    async fn transition(&mut self, action: Action) -> Result<(), NavigationError> {
        let transition = action.transition();
        let effect = plan(&self.settings, &action);
        debug!("{action:?} planned as {effect:?}");

        self.apply(effect)
            .await
            .map_err(|cause| NavigationError::new(transition, cause))?;

        self.view = transition.target();
        info!("View is now {:?}", self.view);

        self.rebind()
            .map_err(|cause| NavigationError::new(transition, cause))
    }

    async fn apply(&mut self, effect: Effect) -> Result<(), Cause> {
        match effect {
            Effect::FetchInto {
                url,
                container,
                reveal,
            } => {
                if !self.surface.has_container(&container) {
                    return Err(SurfaceError::MissingContainer(container).into());
                }
                let fragment = self.source.fetch(&url).await?;
                self.surface.replace_content(&container, fragment.as_str())?;
                if reveal {
                    self.surface.show(&container)?;
                    self.surface.lock_scroll();
                }
            }
            Effect::Dismiss { container } => {
                self.surface.hide(&container)?;
                self.surface.replace_content(&container, "")?;
                self.surface.unlock_scroll();
            }
        }
        Ok(())
    }

    fn rebind(&mut self) -> Result<(), SurfaceError> {
        match self.view {
            ViewState::List => {
                self.bind_reading_links();
                Ok(())
            }
            ViewState::Detail => self.bind_close_affordance(),
        }
    }
}

/// A bound element and its handler, as reported in snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct BoundHandler {
    pub element: ElementKey,
    #[serde(flatten)]
    pub handler: Handler,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationSnapshot {
    pub view: ViewState,
    pub bound: Vec<BoundHandler>,
    pub page: PageSnapshot,
}

impl Navigator<MemoryPage> {
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            view: self.view,
            bound: self
                .bindings
                .iter()
                .map(|(element, handler)| BoundHandler {
                    element: element.clone(),
                    handler: handler.clone(),
                })
                .collect(),
            page: self.surface.snapshot(),
        }
    }
}
