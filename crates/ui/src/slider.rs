#![allow(clippy::cast_possible_wrap)]
//! Per-project gallery slider
//!
//! One cursor per gallery, keyed by its `data-gallery` id. Navigation
//! re-resolves slides and dots from the document on every call; the page
//! never mutates gallery structure after discovery, so the offsets stay
//! valid for the session.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlVideoElement, MouseEvent};

use pagefx_motion::{wrap_index, GalleryMap};

use crate::dom::query_all_in;

const GALLERY_ATTR: &str = "data-gallery";
const GALLERY_SELECTOR: &str = "[data-gallery]";
const SLIDE_SELECTOR: &str = ".slide";
const DOT_STRIP_SELECTOR: &str = ".gallery-dots";
const DOT_SELECTOR: &str = ".gallery-dots .dot";
const PREV_SELECTOR: &str = ".gallery-prev";
const NEXT_SELECTOR: &str = ".gallery-next";
const ACTIVE_CLASS: &str = "active";

/// Owns every gallery cursor for the page session
pub struct SliderController {
    document: Document,
    cursors: RefCell<GalleryMap>,
}

impl SliderController {
    pub fn new(document: Document) -> Rc<Self> {
        Rc::new(Self {
            document,
            cursors: RefCell::new(GalleryMap::new()),
        })
    }

    pub fn gallery_count(&self) -> usize {
        self.cursors.borrow().len()
    }

    /// Find every gallery, rebuild its indicator dots, bind its controls,
    /// and render it at slide 0. Runs once at page-ready.
    pub fn discover(self: &Rc<Self>) -> Result<(), JsValue> {
        for gallery in crate::dom::query_all(&self.document, GALLERY_SELECTOR) {
            let id = match gallery.get_attribute(GALLERY_ATTR) {
                Some(id) if !id.is_empty() => id,
                _ => continue,
            };
            let slides = query_all_in(&gallery, SLIDE_SELECTOR);
            if slides.is_empty() {
                web_sys::console::warn_1(&format!("[pagefx] gallery '{id}' has no slides").into());
                continue;
            }

            self.cursors.borrow_mut().register(&id);
            self.rebuild_dots(&gallery, &id, slides.len())?;
            self.bind_step(&gallery, &id, PREV_SELECTOR, -1)?;
            self.bind_step(&gallery, &id, NEXT_SELECTOR, 1)?;
            self.show_slide(&id, 0);
        }
        Ok(())
    }

    /// Shift a gallery's cursor by `delta` slides.
    pub fn change_slide(&self, id: &str, delta: i64) {
        let current = match self.cursors.borrow().cursor(id) {
            Some(current) => current,
            None => return,
        };
        self.show_slide(id, current as i64 + delta);
    }

    /// Jump a gallery to `index`, wrapping one step past either end.
    ///
    /// Unknown ids and empty galleries are no-ops. All video slides are
    /// paused on every navigation; pausing a non-playing video is a no-op.
    pub fn show_slide(&self, id: &str, index: i64) {
        let gallery = match self.find_gallery(id) {
            Some(gallery) => gallery,
            None => return,
        };
        let slides = query_all_in(&gallery, SLIDE_SELECTOR);
        if slides.is_empty() {
            return;
        }
        let dots = query_all_in(&gallery, DOT_SELECTOR);

        let cursor = wrap_index(slides.len(), index);
        self.cursors.borrow_mut().set_cursor(id, cursor);

        for slide in &slides {
            let _ = slide.class_list().remove_1(ACTIVE_CLASS);
            if let Some(video) = slide.dyn_ref::<HtmlVideoElement>() {
                let _ = video.pause();
            }
        }
        for dot in &dots {
            let _ = dot.class_list().remove_1(ACTIVE_CLASS);
        }

        if let Some(slide) = slides.get(cursor) {
            let _ = slide.class_list().add_1(ACTIVE_CLASS);
        }
        if let Some(dot) = dots.get(cursor) {
            let _ = dot.class_list().add_1(ACTIVE_CLASS);
        }
    }

    /// Clear and rebuild the indicator strip, one dot per slide, each
    /// jumping straight to its slide on click.
    fn rebuild_dots(self: &Rc<Self>, gallery: &Element, id: &str, count: usize) -> Result<(), JsValue> {
        let strip = match gallery.query_selector(DOT_STRIP_SELECTOR) {
            Ok(Some(strip)) => strip,
            // A gallery without an indicator strip is fine.
            _ => return Ok(()),
        };
        strip.set_inner_html("");

        for index in 0..count {
            let dot = self.document.create_element("span")?;
            dot.set_class_name("dot");

            let controller = self.clone();
            let gallery_id = id.to_string();
            let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
                controller.show_slide(&gallery_id, index as i64);
            }) as Box<dyn FnMut(_)>);
            dot.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();

            strip.append_child(&dot)?;
        }
        Ok(())
    }

    /// Bind a prev/next control to a ∓1/+1 cursor step.
    fn bind_step(
        self: &Rc<Self>,
        gallery: &Element,
        id: &str,
        selector: &str,
        delta: i64,
    ) -> Result<(), JsValue> {
        let control = match gallery.query_selector(selector) {
            Ok(Some(control)) => control,
            _ => return Ok(()),
        };

        let controller = self.clone();
        let gallery_id = id.to_string();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            controller.change_slide(&gallery_id, delta);
        }) as Box<dyn FnMut(_)>);
        control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }

    fn find_gallery(&self, id: &str) -> Option<Element> {
        let selector = format!("[{GALLERY_ATTR}=\"{id}\"]");
        self.document.query_selector(&selector).ok().flatten()
    }
}
