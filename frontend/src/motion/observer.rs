use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element};
use yew::prelude::*;

use super::curve::{ElementBounds, ScrollRange};

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Source of scroll and resize notifications plus the viewport height they
/// are measured against.
pub trait ScrollPort {
    fn viewport_height(&self) -> f64;

    /// Calls `handler` on every scroll or resize until the returned
    /// [`Listener`] is dropped.
    fn listen(&self, handler: Rc<dyn Fn()>) -> Listener;
}

/// Detaches its handler when dropped.
#[must_use = "dropping a Listener detaches it immediately"]
pub struct Listener {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Listener {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn noop() -> Self {
        Self { detach: None }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Tracks one element against `range`. Progress is measured once right away
/// and again on every event, and `on_progress` only hears about changes.
/// A `measure` returning `None` (element gone) skips the update.
pub fn attach<P, M, F>(port: &P, range: ScrollRange, measure: M, on_progress: F) -> Listener
where
    P: ScrollPort + Clone + 'static,
    M: Fn() -> Option<ElementBounds> + 'static,
    F: Fn(f64) + 'static,
{
    let last = Rc::new(Cell::new(None::<f64>));
    let viewport = port.clone();

    let update: Rc<dyn Fn()> = Rc::new(move || {
        let Some(bounds) = measure() else {
            return;
        };
        let progress = range.progress(bounds, viewport.viewport_height());
        if last.get() != Some(progress) {
            last.set(Some(progress));
            on_progress(progress);
        }
    });

    update();
    port.listen(update)
}

/// Passive listeners on the browser window.
#[derive(Clone)]
pub struct WindowScroll {
    window: web_sys::Window,
}

impl WindowScroll {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ScrollPort for WindowScroll {
    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn listen(&self, handler: Rc<dyn Fn()>) -> Listener {
        let callback = Closure::<dyn Fn()>::new(move || handler());

        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        for event in EVENTS {
            if let Err(err) = self
                .window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
            {
                warn!("could not listen for {}: {:?}", event, err);
            }
        }

        let window = self.window.clone();
        Listener::new(move || {
            for event in EVENTS {
                let _ = window
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        })
    }
}

pub fn element_bounds(node: &NodeRef) -> Option<ElementBounds> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(ElementBounds {
        top: rect.top(),
        height: rect.height(),
    })
}

/// Scroll progress of the element behind `node` through `range`.
/// The window listeners live exactly as long as the calling component.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, range)| {
                let node = node.clone();
                let listener = match WindowScroll::new() {
                    Some(port) => attach(
                        &port,
                        *range,
                        move || element_bounds(&node),
                        move |value| progress.set(value),
                    ),
                    None => Listener::noop(),
                };
                move || drop(listener)
            },
            (node, range),
        );
    }

    *progress
}
