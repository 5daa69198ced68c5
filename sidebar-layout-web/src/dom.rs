use sidebar_layout::{LayoutSurface, PageElements, WidthBounds, format_pixels};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

pub const PAGE_WRAPPER_SELECTOR: &str = ".page-wrapper";
pub const SIDEBAR_SELECTOR: &str = ".sidebar";
pub const DRAG_HANDLE_SELECTOR: &str = ".sidebar-resizer";
pub const TOGGLE_BUTTON_SELECTOR: &str = ".sidebar-toggle-button";

/// Class marking the page wrapper while the sidebar is collapsed.
pub const COLLAPSED_CLASS: &str = "sidebar-collapsed";
/// Root custom property driving the rendered sidebar width.
pub const WIDTH_PROPERTY: &str = "--sidebar-width";
pub const MIN_WIDTH_PROPERTY: &str = "--sidebar-min-width";
pub const MAX_WIDTH_PROPERTY: &str = "--sidebar-max-width";

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Look up every structural element; absent ones stay `None`.
pub(crate) fn query_elements(
    document: &Document,
) -> Result<PageElements<Element>, JsValue> {
    Ok(PageElements {
        page_wrapper: document.query_selector(PAGE_WRAPPER_SELECTOR)?,
        sidebar: document.query_selector(SIDEBAR_SELECTOR)?,
        drag_handle: document.query_selector(DRAG_HANDLE_SELECTOR)?,
        toggle_button: document.query_selector(TOGGLE_BUTTON_SELECTOR)?,
    })
}

/// Read width limits from the root element's computed style.
pub(crate) fn read_bounds(
    window: &Window,
    document: &Document,
) -> Result<WidthBounds, JsValue> {
    let Some(root) = document.document_element() else {
        return Ok(WidthBounds::default());
    };
    let Some(computed) = window.get_computed_style(&root)? else {
        return Ok(WidthBounds::default());
    };

    let min = computed.get_property_value(MIN_WIDTH_PROPERTY).ok();
    let max = computed.get_property_value(MAX_WIDTH_PROPERTY).ok();

    Ok(WidthBounds::from_style_values(min.as_deref(), max.as_deref()))
}

/// Inline style of the root element, where the width property lives.
pub(crate) fn root_style(
    document: &Document,
) -> Result<CssStyleDeclaration, JsValue> {
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;
    let root: HtmlElement = root.dyn_into().map_err(|_| {
        JsValue::from_str("document root is not an HTML element")
    })?;

    Ok(root.style())
}

/// DOM-backed presentation: collapsed class on the page wrapper and the
/// width custom property on the root element.
#[derive(Debug, Clone)]
pub struct DomSurface {
    page_wrapper: Element,
    root_style: CssStyleDeclaration,
}

impl DomSurface {
    pub fn new(
        page_wrapper: Element,
        root_style: CssStyleDeclaration,
    ) -> Self {
        Self {
            page_wrapper,
            root_style,
        }
    }
}

impl LayoutSurface for DomSurface {
    fn is_collapsed(&self) -> bool {
        self.page_wrapper.class_list().contains(COLLAPSED_CLASS)
    }

    fn set_collapsed(&mut self, collapsed: bool) {
        let classes = self.page_wrapper.class_list();
        let result = if collapsed {
            classes.add_1(COLLAPSED_CLASS)
        } else {
            classes.remove_1(COLLAPSED_CLASS)
        };

        if let Err(err) = result {
            log::warn!("failed to update {COLLAPSED_CLASS} class: {err:?}");
        }
    }

    fn set_width(&mut self, width: u32) {
        if let Err(err) = self
            .root_style
            .set_property(WIDTH_PROPERTY, &format_pixels(width))
        {
            log::warn!("failed to set {WIDTH_PROPERTY}: {err:?}");
        }
    }

    fn width_value(&self) -> Option<String> {
        self.root_style
            .get_property_value(WIDTH_PROPERTY)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}
