//! pagefx WASM frontend
//!
//! Wires the page's presentational behavior at module start: fade-in
//! reveals, navbar restyle, smooth anchor scrolling, the per-project
//! gallery sliders, and the pointer-reactive dot field.

mod config;
mod dom;
mod dotgrid;
mod effects;
mod slider;

use wasm_bindgen::prelude::*;

use crate::dotgrid::DotGrid;
use crate::slider::SliderController;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Read once at startup; either the media query or the kill switch
    // keeps the page static.
    let still = config::prefers_reduced_motion() || config::motion_disabled();
    if still {
        web_sys::console::log_1(&"[pagefx] motion disabled, rendering static".into());
    }

    effects::setup_fade_ins(&document)?;
    effects::setup_navbar_restyle(&document)?;
    effects::setup_anchor_scroll(&document)?;
    if still {
        effects::suppress_transitions(&document);
    }

    let sliders = SliderController::new(document.clone());
    sliders.discover()?;

    // The dot field container is the one hard precondition: without it the
    // engine cannot run at all, so fail the module start with a clear
    // diagnostic instead of limping into per-frame math.
    let grid = DotGrid::mount(&document)?;
    if !still {
        let handle = grid.start()?;
        dotgrid::expose_stop_handle(&window, handle);
    }

    web_sys::console::log_1(
        &format!(
            "[pagefx] ready: {} galleries, {} dots",
            sliders.gallery_count(),
            grid.dot_count()
        )
        .into(),
    );
    Ok(())
}
