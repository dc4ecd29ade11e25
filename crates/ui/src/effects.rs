//! One-shot page effects: fade-in reveal, navbar restyle, smooth anchors
//!
//! Thin wiring over browser observers. The stateful parts of the page live
//! in `dotgrid` and `slider`; everything here fires and forgets.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions,
};

use crate::dom::query_all;

/// Elements revealed on first intersection
const FADE_TARGETS: &str = ".project-card, .contact-card, #projects h2, #contact h2";
const FADE_CLASS: &str = "fade-in-visible";
/// Scroll offset (px) past which the navbar goes opaque
const NAVBAR_SOLID_AT: f64 = 100.0;
/// Fixed navbar height compensated when jumping to an anchor
const NAVBAR_HEIGHT_PX: f64 = 80.0;

/// Reveal cards and section headers as they scroll into view.
pub fn setup_fade_ins(document: &Document) -> Result<(), JsValue> {
    let targets = query_all(document, FADE_TARGETS);
    if targets.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for i in 0..entries.length() {
            if let Ok(entry) = entries.get(i).dyn_into::<IntersectionObserverEntry>() {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(FADE_CLASS);
                }
            }
        }
    }) as Box<dyn FnMut(_)>);

    let options = IntersectionObserverInit::new();
    // Trigger when 10% is visible, slightly before the viewport edge.
    options.set_threshold(&JsValue::from(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    for target in &targets {
        observer.observe(target);
    }
    on_intersect.forget();
    Ok(())
}

/// Swap the navbar between translucent and opaque past a scroll threshold.
pub fn setup_navbar_restyle(document: &Document) -> Result<(), JsValue> {
    let navbar: HtmlElement = match document.query_selector(".navbar") {
        Ok(Some(el)) => match el.dyn_into() {
            Ok(el) => el,
            Err(_) => return Ok(()),
        },
        // Page variant without a navbar.
        _ => return Ok(()),
    };

    let win = window().ok_or("no window")?;
    let win_scroll = win.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let style = navbar.style();
        if win_scroll.scroll_y().unwrap_or(0.0) > NAVBAR_SOLID_AT {
            let _ = style.set_property("background", "rgba(20, 2, 16, 0.95)");
            let _ = style.set_property("box-shadow", "0 4px 12px rgba(6, 6, 206, 0.3)");
        } else {
            let _ = style.set_property("background", "rgba(20, 2, 16, 0.67)");
            let _ = style.set_property("box-shadow", "0 2px 5px rgba(6, 6, 206, 0.2)");
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Scroll in-page anchors smoothly, compensating for the fixed navbar.
pub fn setup_anchor_scroll(document: &Document) -> Result<(), JsValue> {
    for anchor in query_all(document, "a[href^=\"#\"]") {
        let href = match anchor.get_attribute("href") {
            // Skip bare "#" links; they have no target to resolve.
            Some(href) if href.len() > 1 => href,
            _ => continue,
        };

        let doc = document.clone();
        let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let target = match doc.query_selector(&href) {
                Ok(Some(target)) => target,
                _ => return,
            };
            if let Some(target) = target.dyn_ref::<HtmlElement>() {
                let options = ScrollToOptions::new();
                options.set_top(f64::from(target.offset_top()) - NAVBAR_HEIGHT_PX);
                options.set_behavior(ScrollBehavior::Smooth);
                if let Some(win) = window() {
                    win.scroll_to_with_scroll_to_options(&options);
                }
            }
        }) as Box<dyn FnMut(_)>);
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Kill reveal transitions when the user prefers reduced motion.
pub fn suppress_transitions(document: &Document) {
    for el in query_all(document, ".project-card, .contact-card") {
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("transition", "none");
        }
    }
}
