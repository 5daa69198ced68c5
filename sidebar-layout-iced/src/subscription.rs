use iced::{Event, Subscription, event, mouse, window};
use sidebar_layout::SidebarEvent;

use super::{App, AppEvent};

/// Route window-wide pointer events only while a resize drag is active.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    if !app.controller.is_dragging() {
        return Subscription::none();
    }

    event::listen_with(drag_event)
}

fn drag_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(AppEvent::Sidebar(SidebarEvent::PointerMove {
                x: f64::from(position.x),
            }))
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(AppEvent::Sidebar(SidebarEvent::PointerUp))
        },
        _ => None,
    }
}
