//! Pure presentation state for pagefx
//!
//! Geometry for the pointer-reactive dot field and the per-gallery slide
//! cursor. No DOM types live here, so everything is testable off the
//! browser with plain `cargo test`.

pub mod config;
pub mod field;
pub mod gallery;

pub use config::MotionConfig;
pub use field::DotField;
pub use gallery::{wrap_index, GalleryMap};
