#[path = "subscription.rs"]
mod subscription;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};
use sidebar_layout::{
    JsonFileStore, MemorySurface, SidebarConfig, SidebarController,
    SidebarEffect, SidebarEvent, WidthBounds,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 900.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Sidebar width rendered until the user resizes it.
pub(crate) const DEFAULT_SIDEBAR_WIDTH: u32 = 280;

const APP_NAME: &str = "sidebar-layout";
const MIN_WIDTH_ENV: &str = "SIDEBAR_MIN_WIDTH";
const MAX_WIDTH_ENV: &str = "SIDEBAR_MAX_WIDTH";

pub(crate) type Controller = SidebarController<JsonFileStore, MemorySurface>;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Sidebar(SidebarEvent),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) controller: Controller,
}

impl App {
    /// Initialize the application from the persisted layout.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = SidebarConfig {
            bounds: bounds_from_env(),
            store: load_store(),
        };

        let app = App {
            controller: SidebarController::new(config, MemorySurface::new()),
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Sidebar Layout")
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        match event {
            AppEvent::Sidebar(event) => {
                match self.controller.reduce(event) {
                    SidebarEffect::CaptureDrag => {
                        log::debug!("listening for window-wide drag events")
                    },
                    SidebarEffect::ReleaseDrag => {
                        log::debug!("stopped listening for drag events")
                    },
                    SidebarEffect::None => {},
                }
                Task::none()
            },
        }
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Width the sidebar renders at, falling back to the default width.
    pub(crate) fn sidebar_width(&self) -> u32 {
        self.controller
            .surface()
            .width()
            .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
    }
}

/// Width limits, overridable through the environment at startup.
fn bounds_from_env() -> WidthBounds {
    let min = std::env::var(MIN_WIDTH_ENV).ok();
    let max = std::env::var(MAX_WIDTH_ENV).ok();
    WidthBounds::from_style_values(min.as_deref(), max.as_deref())
}

/// Open the layout file, falling back to an empty store on error.
fn load_store() -> JsonFileStore {
    let path = JsonFileStore::default_path(APP_NAME);
    match JsonFileStore::open(&path) {
        Ok(store) => store,
        Err(err) => {
            let store = JsonFileStore::new(path);
            log::warn!(
                "Failed to load sidebar layout from {}, using defaults: {err}",
                store.path().display()
            );
            store
        },
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use sidebar_layout::{
        STORAGE_KEY_WIDTH, JsonFileStore, LayoutStore, MemorySurface,
        SidebarConfig, SidebarController, SidebarEvent, WidthBounds,
    };

    use super::{App, AppEvent, DEFAULT_SIDEBAR_WIDTH};

    fn app_with_store(store: JsonFileStore) -> App {
        let config = SidebarConfig {
            bounds: WidthBounds::new(220, 500),
            store,
        };
        App {
            controller: SidebarController::new(config, MemorySurface::new()),
        }
    }

    #[test]
    fn given_fresh_layout_when_rendered_then_default_width_is_used() {
        let root = test_temp_dir("fresh");
        let app =
            app_with_store(JsonFileStore::new(root.join("layout.json")));

        assert_eq!(app.sidebar_width(), DEFAULT_SIDEBAR_WIDTH);
        assert!(!app.controller.is_collapsed());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_drag_events_when_updated_then_width_is_saved_to_layout_file() {
        let root = test_temp_dir("drag");
        let path = root.join("layout.json");
        let mut app = app_with_store(JsonFileStore::new(&path));

        let _task = app.update(AppEvent::Sidebar(SidebarEvent::PointerDown));
        let _task = app.update(AppEvent::Sidebar(SidebarEvent::PointerMove {
            x: 360.0,
        }));
        let _task = app.update(AppEvent::Sidebar(SidebarEvent::PointerUp));

        assert_eq!(app.sidebar_width(), 360);
        let reopened =
            JsonFileStore::open(&path).expect("layout file should reopen");
        assert_eq!(
            reopened.get(STORAGE_KEY_WIDTH).as_deref(),
            Some("360px")
        );

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_toggle_event_when_updated_then_sidebar_collapses() {
        let root = test_temp_dir("toggle");
        let mut app =
            app_with_store(JsonFileStore::new(root.join("layout.json")));

        let _task = app.update(AppEvent::Sidebar(SidebarEvent::Toggle));
        assert!(app.controller.is_collapsed());

        let _task = app.update(AppEvent::Sidebar(SidebarEvent::PointerDown));
        assert!(!app.controller.is_dragging());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "sidebar-layout-iced-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
