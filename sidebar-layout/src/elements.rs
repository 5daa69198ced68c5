use std::fmt;

use crate::errors::LayoutError;

/// Structural elements a page must provide for the sidebar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    PageWrapper,
    Sidebar,
    DragHandle,
    ToggleButton,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementRole::PageWrapper => "page wrapper",
            ElementRole::Sidebar => "sidebar",
            ElementRole::DragHandle => "drag handle",
            ElementRole::ToggleButton => "toggle button",
        };
        f.write_str(name)
    }
}

/// Element handles as found on the page, any of which may be absent.
#[derive(Debug, Clone)]
pub struct PageElements<E> {
    pub page_wrapper: Option<E>,
    pub sidebar: Option<E>,
    pub drag_handle: Option<E>,
    pub toggle_button: Option<E>,
}

/// Element handles after every required role was found.
#[derive(Debug, Clone)]
pub struct Elements<E> {
    pub page_wrapper: E,
    pub sidebar: E,
    pub drag_handle: E,
    pub toggle_button: E,
}

impl<E> PageElements<E> {
    /// Resolve every role, failing on the first missing element.
    pub fn require(self) -> Result<Elements<E>, LayoutError> {
        let missing = LayoutError::MissingElement;

        Ok(Elements {
            page_wrapper: self
                .page_wrapper
                .ok_or(missing(ElementRole::PageWrapper))?,
            sidebar: self.sidebar.ok_or(missing(ElementRole::Sidebar))?,
            drag_handle: self
                .drag_handle
                .ok_or(missing(ElementRole::DragHandle))?,
            toggle_button: self
                .toggle_button
                .ok_or(missing(ElementRole::ToggleButton))?,
        })
    }
}
