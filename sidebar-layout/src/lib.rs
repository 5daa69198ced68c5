//! Collapsible, resizable sidebar layout controller.
//!
//! The crate is host-agnostic: a host (browser page, desktop UI) resolves its
//! page elements, provides a [`LayoutStore`] for persistence and a
//! [`LayoutSurface`] for presentation, then feeds pointer and click events
//! into [`SidebarController::reduce`]. The returned [`SidebarEffect`] tells
//! the host when a drag gesture needs page-wide pointer listeners.
//!
//! # Quick Example
//!
//! ```
//! use sidebar_layout::{
//!     STORAGE_KEY_WIDTH, MemoryStore, MemorySurface, SidebarConfig,
//!     SidebarController, SidebarEffect, SidebarEvent, WidthBounds,
//! };
//!
//! let config = SidebarConfig {
//!     bounds: WidthBounds::default(),
//!     store: MemoryStore::new(),
//! };
//! let mut controller = SidebarController::new(config, MemorySurface::new());
//!
//! assert_eq!(
//!     controller.reduce(SidebarEvent::PointerDown),
//!     SidebarEffect::CaptureDrag,
//! );
//! controller.reduce(SidebarEvent::PointerMove { x: 150.0 });
//! controller.reduce(SidebarEvent::PointerUp);
//!
//! assert_eq!(
//!     controller.store().value(STORAGE_KEY_WIDTH),
//!     Some("220px"),
//! );
//! ```

mod bounds;
mod controller;
mod elements;
mod errors;
mod event;
mod json_store;
mod state;
mod store;
mod surface;

pub use bounds::{
    DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, WidthBounds, format_pixels,
    parse_pixels,
};
pub use controller::{DragState, SidebarConfig, SidebarController, mount};
pub use elements::{ElementRole, Elements, PageElements};
pub use errors::{LayoutError, StoreError};
pub use event::{SidebarEffect, SidebarEvent};
pub use json_store::JsonFileStore;
pub use state::{LayoutState, STORAGE_KEY_COLLAPSED, STORAGE_KEY_WIDTH};
pub use store::{LayoutStore, MemoryStore};
pub use surface::{LayoutSurface, MemorySurface};
