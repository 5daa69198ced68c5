//! Browser binding for [`sidebar_layout`].
//!
//! Expects the page to provide `.page-wrapper`, `.sidebar`,
//! `.sidebar-resizer` and `.sidebar-toggle-button`, plus the
//! `--sidebar-min-width` / `--sidebar-max-width` custom properties on the
//! root element. Width is published through `--sidebar-width` and the
//! collapsed state through the `sidebar-collapsed` class on the wrapper.

mod dom;
mod listeners;
mod logger;
mod storage;

use sidebar_layout::{SidebarConfig, mount};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::listeners::ListenerTargets;

pub use dom::{
    COLLAPSED_CLASS, DomSurface, MAX_WIDTH_PROPERTY, MIN_WIDTH_PROPERTY,
    WIDTH_PROPERTY,
};
pub use storage::LocalStorageStore;

/// Module entry point: bind the sidebar once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init();

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move || {
            if let Err(err) = init_layout() {
                log::error!("sidebar layout failed to start: {err:?}");
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        return Ok(());
    }

    init_layout()
}

fn init_layout() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;

    let elements = dom::query_elements(&document)?;
    let config = SidebarConfig {
        bounds: dom::read_bounds(&window, &document)?,
        store: LocalStorageStore::from_window(&window),
    };

    let root_style = dom::root_style(&document)?;
    let mut targets = None;
    let Some(controller) = mount(config, elements, |elements| {
        targets = Some(ListenerTargets {
            drag_handle: elements.drag_handle,
            toggle_button: elements.toggle_button,
        });
        DomSurface::new(elements.page_wrapper, root_style)
    }) else {
        return Ok(());
    };
    let Some(targets) = targets else {
        return Ok(());
    };

    listeners::attach(&document, targets, controller)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use sidebar_layout::{STORAGE_KEY_COLLAPSED, STORAGE_KEY_WIDTH};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{
        Document, Element, HtmlElement, MouseEvent, MouseEventInit, Storage,
    };

    use super::{COLLAPSED_CLASS, WIDTH_PROPERTY, dom, init_layout};

    wasm_bindgen_test_configure!(run_in_browser);

    fn storage() -> Storage {
        dom::window()
            .expect("window should exist")
            .local_storage()
            .expect("localStorage should be accessible")
            .expect("localStorage should exist")
    }

    fn append(document: &Document, class: &str) -> Element {
        let element = document
            .create_element("div")
            .expect("element should be created");
        element.set_class_name(class);
        document
            .body()
            .expect("body should exist")
            .append_child(&element)
            .expect("element should be appended");
        element
    }

    fn mouse_event(kind: &str, client_x: i32) -> MouseEvent {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_client_x(client_x);
        MouseEvent::new_with_mouse_event_init_dict(kind, &init)
            .expect("mouse event should be created")
    }

    fn remove_layout_elements(document: &Document) {
        let selectors = [
            ".page-wrapper",
            ".sidebar",
            ".sidebar-resizer",
            ".sidebar-toggle-button",
        ];
        for selector in selectors {
            while let Some(element) = document
                .query_selector(selector)
                .expect("selector should be valid")
            {
                element.remove();
            }
        }
    }

    #[wasm_bindgen_test]
    fn given_page_without_elements_when_started_then_storage_is_untouched() {
        let storage = storage();
        storage.clear().expect("storage should clear");
        let document = dom::document().expect("document should exist");
        remove_layout_elements(&document);
        assert!(
            document
                .query_selector(".page-wrapper")
                .expect("selector should be valid")
                .is_none()
        );
        let stray = append(&document, "sidebar-resizer-stray");

        init_layout().expect("missing elements are not an error");

        let targets: [&web_sys::EventTarget; 2] = [&stray, &document];
        for target in targets {
            for kind in ["click", "mousedown", "mousemove", "mouseup"] {
                target
                    .dispatch_event(&mouse_event(kind, 150))
                    .expect("event should dispatch");
            }
        }
        assert_eq!(storage.length().expect("length should read"), 0);

        stray.remove();
    }

    #[wasm_bindgen_test]
    fn given_bound_page_when_dragged_and_toggled_then_layout_persists() {
        let storage = storage();
        storage.clear().expect("storage should clear");
        let document = dom::document().expect("document should exist");
        let wrapper = append(&document, "page-wrapper");
        append(&document, "sidebar");
        let handle = append(&document, "sidebar-resizer");
        let toggle: HtmlElement = append(&document, "sidebar-toggle-button")
            .dyn_into()
            .expect("toggle should be an HTML element");

        init_layout().expect("layout should start");

        handle
            .dispatch_event(&mouse_event("mousedown", 0))
            .expect("mousedown should dispatch");
        document
            .dispatch_event(&mouse_event("mousemove", 150))
            .expect("mousemove should dispatch");
        document
            .dispatch_event(&mouse_event("mouseup", 150))
            .expect("mouseup should dispatch");
        assert_eq!(
            storage.get_item(STORAGE_KEY_WIDTH).expect("read should work"),
            Some(String::from("220px"))
        );

        toggle.click();
        assert!(wrapper.class_list().contains(COLLAPSED_CLASS));
        assert_eq!(
            storage
                .get_item(STORAGE_KEY_COLLAPSED)
                .expect("read should work"),
            Some(String::from("true"))
        );

        toggle.click();
        assert!(!wrapper.class_list().contains(COLLAPSED_CLASS));
        let root_style = dom::root_style(&document).expect("root style");
        assert_eq!(
            root_style
                .get_property_value(WIDTH_PROPERTY)
                .expect("property should read"),
            "220px"
        );

        remove_layout_elements(&document);
        storage.clear().expect("storage should clear");
    }
}
