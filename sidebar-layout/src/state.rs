use crate::bounds::parse_pixels;
use crate::store::LayoutStore;

/// Store key holding the last user-set width, e.g. `"312px"`.
pub const STORAGE_KEY_WIDTH: &str = "sidebarWidth";
/// Store key holding the collapsed flag, `"true"` or `"false"`.
pub const STORAGE_KEY_COLLAPSED: &str = "sidebarCollapsed";

/// Persisted sidebar layout as read from a [`LayoutStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub collapsed: bool,
    /// Saved width in pixels, not yet clamped. `None` when absent or
    /// malformed.
    pub width: Option<i64>,
}

impl LayoutState {
    /// Read the persisted layout, treating malformed entries as absent.
    pub fn load(store: &impl LayoutStore) -> Self {
        Self {
            collapsed: store
                .get(STORAGE_KEY_COLLAPSED)
                .is_some_and(|value| value == encode_collapsed(true)),
            width: saved_width(store),
        }
    }
}

/// Read the saved width entry, if it holds a leading integer.
pub(crate) fn saved_width(store: &impl LayoutStore) -> Option<i64> {
    store
        .get(STORAGE_KEY_WIDTH)
        .as_deref()
        .and_then(parse_pixels)
}

pub(crate) fn encode_collapsed(collapsed: bool) -> &'static str {
    if collapsed { "true" } else { "false" }
}
