use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Element, Length, Theme, mouse};
use sidebar_layout::SidebarEvent;

use super::{App, AppEvent};

const HANDLE_WIDTH: f32 = 6.0;
const CONTENT_PADDING: u16 = 16;

/// Render sidebar, drag handle and content side by side.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let collapsed = app.controller.is_collapsed();

    let mut layout = row![].height(Length::Fill);
    if !collapsed {
        layout = layout.push(sidebar(app.sidebar_width()));
    }

    layout
        .push(drag_handle(app.controller.is_dragging()))
        .push(content(app))
        .into()
}

fn sidebar<'a>(width: u32) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let body = column![
        text("Sidebar").size(18),
        text(format!("{width}px")).size(12),
    ]
    .spacing(8);

    container(body)
        .padding(CONTENT_PADDING)
        .width(Length::Fixed(width as f32))
        .height(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            iced::widget::container::Style {
                background: Some(palette.background.weak.color.into()),
                ..Default::default()
            }
        })
        .into()
}

fn drag_handle<'a>(
    is_dragging: bool,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let strip = container(Space::new())
        .width(Length::Fixed(HANDLE_WIDTH))
        .height(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let color = if is_dragging {
                palette.primary.base.color
            } else {
                palette.background.strong.color
            };
            iced::widget::container::Style {
                background: Some(color.into()),
                ..Default::default()
            }
        });

    mouse_area(strip)
        .on_press(AppEvent::Sidebar(SidebarEvent::PointerDown))
        .interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}

fn content(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let collapsed = app.controller.is_collapsed();
    let label = if collapsed { "Show sidebar" } else { "Hide sidebar" };
    let bounds = app.controller.bounds();

    let toggle = button(text(label))
        .on_press(AppEvent::Sidebar(SidebarEvent::Toggle));
    let status = text(format!(
        "Width limits: {}px to {}px",
        bounds.min(),
        bounds.max()
    ))
    .size(12);

    container(column![toggle, status].spacing(12))
        .padding(CONTENT_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
