use crate::bounds::{WidthBounds, format_pixels};
use crate::elements::{Elements, PageElements};
use crate::event::{SidebarEffect, SidebarEvent};
use crate::state::{
    LayoutState, STORAGE_KEY_COLLAPSED, STORAGE_KEY_WIDTH, encode_collapsed,
    saved_width,
};
use crate::store::LayoutStore;
use crate::surface::LayoutSurface;

/// Resize gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Startup configuration for a [`SidebarController`].
#[derive(Debug, Clone)]
pub struct SidebarConfig<S> {
    pub bounds: WidthBounds,
    pub store: S,
}

/// Owns the sidebar width and collapsed flag, keeps them in sync with the
/// store, and runs the resize gesture.
#[derive(Debug)]
pub struct SidebarController<S, P> {
    bounds: WidthBounds,
    store: S,
    surface: P,
    drag: DragState,
}

/// Mount the controller once every required page element is present.
///
/// When an element is missing a single warning is logged and `None` is
/// returned, so the host attaches no behavior and the store is never
/// touched. `bind` turns the resolved elements into the host surface.
pub fn mount<E, S, P>(
    config: SidebarConfig<S>,
    elements: PageElements<E>,
    bind: impl FnOnce(Elements<E>) -> P,
) -> Option<SidebarController<S, P>>
where
    S: LayoutStore,
    P: LayoutSurface,
{
    match elements.require() {
        Ok(elements) => Some(SidebarController::new(config, bind(elements))),
        Err(err) => {
            log::warn!("{err}; skipping sidebar layout");
            None
        },
    }
}

impl<S, P> SidebarController<S, P>
where
    S: LayoutStore,
    P: LayoutSurface,
{
    /// Build the controller and apply the persisted layout to `surface`.
    pub fn new(config: SidebarConfig<S>, surface: P) -> Self {
        let mut controller = Self {
            bounds: config.bounds,
            store: config.store,
            surface,
            drag: DragState::Idle,
        };
        controller.init_layout();
        controller
    }

    /// Reduce an input event into surface and store updates.
    pub fn reduce(&mut self, event: SidebarEvent) -> SidebarEffect {
        match event {
            SidebarEvent::Toggle => {
                self.toggle();
                SidebarEffect::None
            },
            SidebarEvent::PointerDown => self.start_resize(),
            SidebarEvent::PointerMove { x } => {
                self.resize_to(x);
                SidebarEffect::None
            },
            SidebarEvent::PointerUp => self.stop_resize(),
        }
    }

    pub fn bounds(&self) -> WidthBounds {
        self.bounds
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    pub fn is_collapsed(&self) -> bool {
        self.surface.is_collapsed()
    }

    /// Active width as reported by the surface.
    pub fn active_width(&self) -> Option<u32> {
        self.surface.active_width()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    fn init_layout(&mut self) {
        let state = LayoutState::load(&self.store);

        if state.collapsed {
            self.surface.set_collapsed(true);
            log::debug!("sidebar layout restored collapsed");
            return;
        }

        if let Some(saved) = state.width {
            let width = self.bounds.clamp(saved);
            self.surface.set_width(width);
            log::debug!("sidebar layout restored width {width}px");
        }
    }

    fn toggle(&mut self) {
        let collapsed = !self.surface.is_collapsed();
        self.surface.set_collapsed(collapsed);
        self.persist(STORAGE_KEY_COLLAPSED, encode_collapsed(collapsed));

        if !collapsed {
            let width = saved_width(&self.store)
                .map(|saved| self.bounds.clamp(saved))
                .unwrap_or(self.bounds.min());
            self.surface.set_width(width);
        }

        log::debug!("sidebar toggled, collapsed={collapsed}");
    }

    fn start_resize(&mut self) -> SidebarEffect {
        if self.drag == DragState::Dragging || self.surface.is_collapsed() {
            return SidebarEffect::None;
        }

        self.drag = DragState::Dragging;
        log::debug!("sidebar resize started");
        SidebarEffect::CaptureDrag
    }

    fn resize_to(&mut self, x: f64) {
        if self.drag != DragState::Dragging {
            return;
        }
        if !x.is_finite() {
            log::debug!("ignoring non-finite resize coordinate {x}");
            return;
        }

        // Float to int `as` saturates, and clamping handles the rest.
        let width = self.bounds.clamp(x.round() as i64);
        self.surface.set_width(width);
    }

    fn stop_resize(&mut self) -> SidebarEffect {
        if self.drag != DragState::Dragging {
            return SidebarEffect::None;
        }

        self.drag = DragState::Idle;
        match self.surface.active_width() {
            Some(width) => {
                self.persist(STORAGE_KEY_WIDTH, &format_pixels(width));
                log::debug!("sidebar resize finished at {width}px");
            },
            None => log::debug!("sidebar resize finished without a width"),
        }

        SidebarEffect::ReleaseDrag
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            log::warn!("failed to persist sidebar layout key {key}: {err}");
        }
    }
}
