//! # Actions
//!
//! Every bound click becomes an `Action`. A reading link is
//! `Action::ReadPost { href }`; the close/home affordance is `Action::GoHome`.
//!
//! `plan()` decides which side effects the action needs for the configured
//! variant. No I/O happens here; the navigator performs the `Effect`.
//!
//! ```text
//! Settings + Action  →  plan()  →  Effect
//! ```

use crate::Variant;
use crate::core::navigator::NavigatorSettings;
use crate::core::state::{Handler, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ReadPost { href: String },
    GoHome,
}

impl Action {
    pub fn transition(&self) -> Transition {
        match self {
            Action::ReadPost { .. } => Transition::ToDetail,
            Action::GoHome => Transition::ToList,
        }
    }
}

impl From<Handler> for Action {
    fn from(handler: Handler) -> Self {
        match handler {
            Handler::ReadPost { href } => Action::ReadPost { href },
            Handler::GoHome => Action::GoHome,
        }
    }
}

/// Side effects a transition needs, in the order they are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// GET `url`, then replace `container` with the body.
    /// With `reveal`, also show the container and lock page scroll.
    FetchInto {
        url: String,
        container: String,
        reveal: bool,
    },
    /// Hide `container`, empty it and unlock page scroll. No request.
    Dismiss { container: String },
}

pub fn plan(settings: &NavigatorSettings, action: &Action) -> Effect {
    match (settings.variant, action) {
        (Variant::InPlace, Action::ReadPost { href }) => Effect::FetchInto {
            url: href.clone(),
            container: settings.main_container.clone(),
            reveal: false,
        },
        (Variant::Overlay, Action::ReadPost { href }) => Effect::FetchInto {
            url: href.clone(),
            container: settings.overlay_container.clone(),
            reveal: true,
        },
        (Variant::InPlace, Action::GoHome) => Effect::FetchInto {
            url: settings.page_url.clone(),
            container: settings.main_container.clone(),
            reveal: false,
        },
        (Variant::Overlay, Action::GoHome) => Effect::Dismiss {
            container: settings.overlay_container.clone(),
        },
    }
}
