//! Pointer-reactive dot field
//!
//! Builds a grid of dot elements sized to its container, lights the dots
//! near the pointer on every animation frame, and rebuilds the whole
//! population whenever the container resizes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, MouseEvent, ResizeObserver, ResizeObserverEntry, Window};

use pagefx_motion::DotField;

use crate::config;

/// Id of the container the field mounts into
const CONTAINER_ID: &str = "dot-grid";
/// Class of each dot element
const DOT_CLASS: &str = "dot";
/// Class toggled while a dot sits inside the highlight radius
const BRIGHT_CLASS: &str = "bright";

/// Cancellation handle for the frame loop.
///
/// Dropping the handle does not stop the loop; call [`DotGridHandle::stop`]
/// when the owning view goes away.
pub struct DotGridHandle {
    running: Rc<Cell<bool>>,
}

impl DotGridHandle {
    /// End the loop; the tick already scheduled runs once more and does
    /// not reschedule.
    pub fn stop(&self) {
        self.running.set(false);
    }
}

/// The dot field: container element, geometry, and the dot population
pub struct DotGrid {
    container: Element,
    field: RefCell<DotField>,
    dots: RefCell<Vec<Element>>,
    running: Rc<Cell<bool>>,
}

impl DotGrid {
    /// Locate the container, lay out the initial population, and wire the
    /// resize and pointer listeners.
    ///
    /// A page without the container cannot host the field at all, so this
    /// is the one DOM lookup that fails loudly instead of degrading.
    pub fn mount(document: &Document) -> Result<Rc<Self>, JsValue> {
        let container = document.get_element_by_id(CONTAINER_ID).ok_or_else(|| {
            JsValue::from_str("[pagefx] #dot-grid container not found; dot field cannot start")
        })?;

        let cfg = config::resolve_motion(&container);
        let grid = Rc::new(Self {
            container,
            field: RefCell::new(DotField::new(cfg)),
            dots: RefCell::new(Vec::new()),
            running: Rc::new(Cell::new(false)),
        });

        let rect = grid.container.get_bounding_client_rect();
        grid.rebuild(rect.width(), rect.height())?;
        grid.observe_resize()?;
        grid.track_pointer()?;
        Ok(grid)
    }

    pub fn dot_count(&self) -> usize {
        self.dots.borrow().len()
    }

    /// Throw away every dot and lay out a fresh population for the new box.
    fn rebuild(&self, width: f64, height: f64) -> Result<(), JsValue> {
        let document = self
            .container
            .owner_document()
            .ok_or("dot field container is detached")?;

        self.field.borrow_mut().resize(width, height);
        self.container.set_inner_html("");

        let mut dots = self.dots.borrow_mut();
        dots.clear();
        for _ in 0..self.field.borrow().cell_count() {
            let dot = document.create_element("div")?;
            dot.set_class_name(DOT_CLASS);
            self.container.append_child(&dot)?;
            dots.push(dot);
        }
        Ok(())
    }

    /// Rebuild on every container resize; a resize invalidates all
    /// geometry, there is no incremental layout.
    fn observe_resize(self: &Rc<Self>) -> Result<(), JsValue> {
        let grid = self.clone();

        let on_resize = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for i in 0..entries.length() {
                if let Ok(entry) = entries.get(i).dyn_into::<ResizeObserverEntry>() {
                    let rect = entry.content_rect();
                    if let Err(e) = grid.rebuild(rect.width(), rect.height()) {
                        web_sys::console::warn_1(
                            &format!("[pagefx] dot field rebuild failed: {e:?}").into(),
                        );
                    }
                }
            }
        }) as Box<dyn FnMut(_)>);

        let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        observer.observe(&self.container);
        on_resize.forget();
        Ok(())
    }

    /// Track the pointer in container-local coordinates; leaving the
    /// container parks it out of range of every dot.
    fn track_pointer(self: &Rc<Self>) -> Result<(), JsValue> {
        let grid = self.clone();
        let container = self.container.clone();
        let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
            let rect = container.get_bounding_client_rect();
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            grid.field.borrow_mut().set_pointer(x, y);
        }) as Box<dyn FnMut(_)>);
        self.container
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let grid = self.clone();
        let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
            grid.field.borrow_mut().park_pointer();
        }) as Box<dyn FnMut(_)>);
        self.container
            .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
        Ok(())
    }

    /// Light every dot within the highlight radius of the pointer.
    ///
    /// Runs before first layout too: a field with zero rows or columns has
    /// nothing to light and the loop simply comes around again.
    fn tick(&self) {
        let field = self.field.borrow();
        if !field.is_laid_out() {
            return;
        }
        for (i, dot) in self.dots.borrow().iter().enumerate() {
            let classes = dot.class_list();
            if field.is_bright(i) {
                let _ = classes.add_1(BRIGHT_CLASS);
            } else {
                let _ = classes.remove_1(BRIGHT_CLASS);
            }
        }
    }

    /// Start the self-rescheduling frame loop and hand back its stop
    /// handle. Each tick schedules the next, so the loop survives periods
    /// where the field has no geometry yet.
    pub fn start(self: &Rc<Self>) -> Result<DotGridHandle, JsValue> {
        self.running.set(true);
        let running = self.running.clone();

        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let scheduled = slot.clone();
        let grid = self.clone();

        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !grid.running.get() {
                // Stopped: fall through without rescheduling.
                return;
            }
            grid.tick();
            if let Some(cb) = scheduled.borrow().as_ref() {
                let _ = window()
                    .unwrap()
                    .request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = slot.borrow().as_ref() {
            window()
                .unwrap()
                .request_animation_frame(cb.as_ref().unchecked_ref())?;
        }
        Ok(DotGridHandle { running })
    }
}

/// Publish `stop` to the page as `window.__pagefx_stop_dots`, so embedding
/// code (or the console) can cancel the loop without reaching into wasm.
pub fn expose_stop_handle(window: &Window, handle: DotGridHandle) {
    let stop_fn = Closure::wrap(Box::new(move || {
        handle.stop();
        web_sys::console::log_1(&"[pagefx] dot field loop stopped".into());
    }) as Box<dyn FnMut()>);

    if js_sys::Reflect::set(window, &"__pagefx_stop_dots".into(), stop_fn.as_ref()).is_err() {
        web_sys::console::warn_1(&"[pagefx] could not expose __pagefx_stop_dots".into());
    }
    stop_fn.forget();
}
