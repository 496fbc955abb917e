//! Browser glue for the `motion` module: window listeners that sample
//! layout on scroll/resize and push it into the pure trackers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::motion::observer::{ProgressObserver, RevealFrame};
use crate::motion::scroll::{
    page_progress, ElementBounds, PageMetrics, ScrollOffsets, Viewport,
};

pub const LAYOUT_EVENTS: &[&str] = &["scroll", "resize"];

pub fn viewport() -> Viewport {
    let height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    Viewport { height }
}

pub fn element_bounds(node: &NodeRef) -> Option<ElementBounds> {
    let element = node.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(ElementBounds {
        top: rect.top(),
        height: rect.height(),
    })
}

pub fn page_metrics() -> PageMetrics {
    let Some(window) = web_sys::window() else {
        return PageMetrics::default();
    };
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    PageMetrics {
        scroll_top: window.scroll_y().unwrap_or(0.0),
        scroll_height,
        viewport_height: viewport().height,
    }
}

/// Current time in milliseconds, for frame deltas.
pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

/// Attaches `callback` to each of `events` on the window and returns the
/// matching teardown. The closure is kept alive by the teardown.
pub fn listen_window(
    events: &'static [&'static str],
    callback: Closure<dyn Fn()>,
) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    for event in events {
        if window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not listen for {} events", event);
        }
    }
    Box::new(move || {
        for event in events {
            let _ = window
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    })
}

/// Opacity/offset of an element that fades in as it scrolls through the
/// reveal window. `delay_s` holds the first reveal back once.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, offsets: ScrollOffsets, delay_s: f64) -> RevealFrame {
    let frame = use_state(|| RevealFrame {
        opacity: 0.0,
        translate_y: 40.0,
    });

    {
        let frame = frame.clone();
        use_effect_with_deps(
            move |(node, offsets, delay_s): &(NodeRef, ScrollOffsets, f64)| {
                let destructor: Box<dyn FnOnce()> = match ProgressObserver::reveal(*offsets) {
                    Ok(observer) => {
                        let observer = Rc::new(RefCell::new(observer.with_delay(delay_s * 1000.0)));
                        let held: Rc<Cell<Option<Timeout>>> = Rc::new(Cell::new(None));
                        let publish = {
                            let observer = observer.clone();
                            let node = node.clone();
                            move || {
                                let next = observer.borrow_mut().observe(
                                    element_bounds(&node),
                                    &viewport(),
                                    now_ms(),
                                );
                                if let Some(next) = next {
                                    frame.set(next);
                                }
                            }
                        };
                        let sample = {
                            let held = held.clone();
                            move || {
                                publish();
                                let wait = observer.borrow().held_for(now_ms());
                                if let Some(wait) = wait {
                                    let publish = publish.clone();
                                    held.set(Some(Timeout::new(wait.ceil() as u32, publish)));
                                }
                            }
                        };
                        // layout is ready by the time effects run
                        sample();
                        let remove = listen_window(LAYOUT_EVENTS, Closure::<dyn Fn()>::new(sample));
                        Box::new(move || {
                            remove();
                            held.take();
                        })
                    }
                    Err(e) => {
                        log::error!("scroll reveal disabled: {}", e);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (node, offsets, delay_s),
        );
    }

    *frame
}

/// Fraction of the page scrolled so far, for the top progress bar.
#[hook]
pub fn use_page_progress() -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let last = Rc::new(RefCell::new(f64::NAN));
                let sample = move || {
                    let value = page_progress(&page_metrics());
                    let mut last = last.borrow_mut();
                    if *last != value {
                        *last = value;
                        progress.set(value);
                    }
                };
                sample();
                let destructor = listen_window(LAYOUT_EVENTS, Closure::<dyn Fn()>::new(sample));
                move || destructor()
            },
            (),
        );
    }

    *progress
}

/// Becomes `true` the first time the element is at least `margin` px inside
/// the viewport and stays `true`.
#[hook]
pub fn use_in_view(node: NodeRef, margin: f64) -> bool {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        let already = *shown;
        use_effect_with_deps(
            move |(node, _): &(NodeRef, bool)| {
                let destructor: Box<dyn FnOnce()> = if already {
                    Box::new(|| ())
                } else {
                    let node = node.clone();
                    let check = move || {
                        let visible = element_bounds(&node)
                            .map(|b| viewport().intersects(&b, margin))
                            .unwrap_or(false);
                        if visible {
                            shown.set(true);
                        }
                    };
                    check();
                    listen_window(LAYOUT_EVENTS, Closure::<dyn Fn()>::new(check))
                };
                move || destructor()
            },
            (node, already),
        );
    }

    *shown
}
