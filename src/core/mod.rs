//! # Core Navigation Logic
//!
//! This module contains the fragment navigator. It knows nothing about a
//! real browser: pages are reached through `RenderSurface` and the network
//! through `FragmentSource`.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState, Bindings  │
//!                    │  • Action → plan()      │
//!                    │  • Navigator            │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌──────────────┐                        ┌──────────────┐
//!     │ RenderSurface│                        │FragmentSource│
//!     │ (MemoryPage) │                        │   (reqwest)  │
//!     └──────────────┘                        └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ViewState` and the `Bindings` derived from it
//! - [`action`]: the `Action` enum and the pure `plan()` step
//! - [`navigator`]: the `Navigator` that performs transitions
//! - [`error`]: `NavigationError` and its causes
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod error;
pub mod navigator;
pub mod state;

pub use error::{Cause, NavigationError};
pub use navigator::{ClickEvent, Navigator, NavigatorSettings};
pub use state::{Handler, ViewState};
