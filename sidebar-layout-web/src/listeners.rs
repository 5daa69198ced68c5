use std::cell::RefCell;
use std::rc::{Rc, Weak};

use sidebar_layout::{SidebarController, SidebarEffect, SidebarEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent};

use crate::dom::DomSurface;
use crate::storage::LocalStorageStore;

type Controller = SidebarController<LocalStorageStore, DomSurface>;
type SharedController = Rc<RefCell<Controller>>;

/// Elements that receive the toggle and drag-start listeners.
pub(crate) struct ListenerTargets {
    pub(crate) drag_handle: Element,
    pub(crate) toggle_button: Element,
}

/// Document-level move and release listeners, attached only while a drag
/// is in progress.
struct PageDragListeners {
    document: Document,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
}

impl PageDragListeners {
    fn new(document: Document, controller: &SharedController) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Self>| {
            let on_move = {
                let controller = controller.clone();
                Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    let x = f64::from(event.client_x());
                    dispatch(&controller, SidebarEvent::PointerMove { x });
                })
            };

            let on_up = {
                let controller = controller.clone();
                let this = this.clone();
                Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let effect = dispatch(&controller, SidebarEvent::PointerUp);
                    if effect == SidebarEffect::ReleaseDrag {
                        if let Some(listeners) = this.upgrade() {
                            listeners.release();
                        }
                    }
                })
            };

            Self {
                document,
                on_move,
                on_up,
            }
        })
    }

    fn acquire(&self) {
        let added = self
            .document
            .add_event_listener_with_callback(
                "mousemove",
                self.on_move.as_ref().unchecked_ref(),
            )
            .and_then(|()| {
                self.document.add_event_listener_with_callback(
                    "mouseup",
                    self.on_up.as_ref().unchecked_ref(),
                )
            });

        if let Err(err) = added {
            log::warn!("failed to attach sidebar drag listeners: {err:?}");
        }
    }

    fn release(&self) {
        let removed = self
            .document
            .remove_event_listener_with_callback(
                "mousemove",
                self.on_move.as_ref().unchecked_ref(),
            )
            .and_then(|()| {
                self.document.remove_event_listener_with_callback(
                    "mouseup",
                    self.on_up.as_ref().unchecked_ref(),
                )
            });

        if let Err(err) = removed {
            log::warn!("failed to detach sidebar drag listeners: {err:?}");
        }
    }
}

/// Wire the toggle click and the drag-start press. Both closures live for
/// the lifetime of the page.
pub(crate) fn attach(
    document: &Document,
    targets: ListenerTargets,
    controller: Controller,
) -> Result<(), JsValue> {
    let controller = Rc::new(RefCell::new(controller));
    let drag = PageDragListeners::new(document.clone(), &controller);

    {
        let controller = controller.clone();
        let closure =
            Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&controller, SidebarEvent::Toggle);
            });
        targets.toggle_button.add_event_listener_with_callback(
            "click",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    }

    {
        let controller = controller.clone();
        let closure =
            Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let effect = dispatch(&controller, SidebarEvent::PointerDown);
                if effect == SidebarEffect::CaptureDrag {
                    event.prevent_default();
                    drag.acquire();
                }
            });
        targets.drag_handle.add_event_listener_with_callback(
            "mousedown",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    }

    Ok(())
}

fn dispatch(
    controller: &SharedController,
    event: SidebarEvent,
) -> SidebarEffect {
    // A held borrow means a re-entrant dispatch; drop the event.
    match controller.try_borrow_mut() {
        Ok(mut controller) => controller.reduce(event),
        Err(_) => {
            log::debug!("sidebar controller busy, dropping {event:?}");
            SidebarEffect::None
        },
    }
}
