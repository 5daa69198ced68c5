/// Input events a host dispatches into the sidebar controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarEvent {
    /// Click on the toggle control.
    Toggle,
    /// Primary button pressed over the drag handle.
    PointerDown,
    /// Pointer moved anywhere on the page; `x` is relative to the page origin.
    PointerMove { x: f64 },
    /// Primary button released anywhere on the page.
    PointerUp,
}

/// Follow-up work the host performs after an event was reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarEffect {
    #[default]
    None,
    /// A drag started: suppress the default action of the triggering input
    /// and start routing page-wide move and release events.
    CaptureDrag,
    /// The drag ended: stop routing page-wide move and release events.
    ReleaseDrag,
}
