use crate::bounds::{format_pixels, parse_pixels};

/// Presentation state the controller drives: a collapsed marker on the page
/// wrapper and the active sidebar width.
pub trait LayoutSurface {
    fn is_collapsed(&self) -> bool;

    fn set_collapsed(&mut self, collapsed: bool);

    /// Apply `width` pixels as the active sidebar width.
    fn set_width(&mut self, width: u32);

    /// Raw active width as the presentation layer reports it, e.g.
    /// `"312px"`. `None` or an empty string means no width was applied.
    fn width_value(&self) -> Option<String>;

    /// Active width in pixels, if one was applied and reads back as an
    /// integer.
    fn active_width(&self) -> Option<u32> {
        self.width_value()
            .as_deref()
            .and_then(parse_pixels)
            .and_then(|pixels| u32::try_from(pixels).ok())
    }
}

/// Plain in-process surface for hosts that render from owned state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySurface {
    collapsed: bool,
    width: Option<u32>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applied width, `None` while the host default is in effect.
    pub fn width(&self) -> Option<u32> {
        self.width
    }
}

impl LayoutSurface for MemorySurface {
    fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    fn set_width(&mut self, width: u32) {
        self.width = Some(width);
    }

    fn width_value(&self) -> Option<String> {
        self.width.map(format_pixels)
    }
}
