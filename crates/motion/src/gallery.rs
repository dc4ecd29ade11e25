#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
//! Per-gallery slide cursors
//!
//! One cursor per gallery, keyed by the gallery's stable id. Cursors are
//! created at discovery time and live for the page session.

use std::collections::HashMap;

/// Normalize a slide index using the page's single-step wrap: past the end
/// lands on 0, before the start lands on the last slide.
///
/// An overshoot of more than one slide still clamps to a single boundary;
/// this is intentionally not modular arithmetic.
pub fn wrap_index(count: usize, target: i64) -> usize {
    debug_assert!(count > 0, "wrap_index on an empty gallery");
    if target >= count as i64 {
        0
    } else if target < 0 {
        count - 1
    } else {
        target as usize
    }
}

/// Cursor store for every gallery on the page
#[derive(Debug, Default)]
pub struct GalleryMap {
    cursors: HashMap<String, usize>,
}

impl GalleryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gallery at cursor 0; an already-known gallery keeps its
    /// cursor.
    pub fn register(&mut self, id: &str) {
        self.cursors.entry(id.to_string()).or_insert(0);
    }

    /// Current cursor of a gallery, if it was ever discovered.
    pub fn cursor(&self, id: &str) -> Option<usize> {
        self.cursors.get(id).copied()
    }

    /// Store a normalized cursor. Creates the entry if the gallery was
    /// never registered; navigation and discovery stay consistent either
    /// way.
    pub fn set_cursor(&mut self, id: &str, index: usize) {
        self.cursors.insert(id.to_string(), index);
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_one_step_past_either_end() {
        assert_eq!(wrap_index(3, 3), 0);
        assert_eq!(wrap_index(3, -1), 2);
        assert_eq!(wrap_index(1, 1), 0);
        assert_eq!(wrap_index(1, -1), 0);
    }

    #[test]
    fn overshoot_clamps_to_one_boundary() {
        // Not taken modulo: 5 over a 3-slide gallery is 0, not 2.
        assert_eq!(wrap_index(3, 5), 0);
        assert_eq!(wrap_index(3, -4), 2);
    }

    #[test]
    fn in_range_targets_pass_through() {
        assert_eq!(wrap_index(3, 0), 0);
        assert_eq!(wrap_index(3, 2), 2);
    }

    #[test]
    fn full_forward_cycle_returns_to_start() {
        let count = 4;
        let mut cursor = 0usize;
        for _ in 0..count {
            cursor = wrap_index(count, cursor as i64 + 1);
        }
        assert_eq!(cursor, 0);
    }

    #[test]
    fn three_slide_gallery_scenario() {
        let mut map = GalleryMap::new();
        map.register("proj1");
        assert_eq!(map.cursor("proj1"), Some(0));

        // prev from 0 wraps to the last slide
        let cursor = wrap_index(3, map.cursor("proj1").unwrap() as i64 - 1);
        map.set_cursor("proj1", cursor);
        assert_eq!(map.cursor("proj1"), Some(2));

        // next from 2 wraps back to the first
        let cursor = wrap_index(3, map.cursor("proj1").unwrap() as i64 + 1);
        map.set_cursor("proj1", cursor);
        assert_eq!(map.cursor("proj1"), Some(0));
    }

    #[test]
    fn galleries_are_independent() {
        let mut map = GalleryMap::new();
        map.register("proj1");
        map.register("proj2");
        map.set_cursor("proj1", 2);
        assert_eq!(map.cursor("proj1"), Some(2));
        assert_eq!(map.cursor("proj2"), Some(0));
    }

    #[test]
    fn reregistering_keeps_the_cursor() {
        let mut map = GalleryMap::new();
        map.register("proj1");
        map.set_cursor("proj1", 1);
        map.register("proj1");
        assert_eq!(map.cursor("proj1"), Some(1));
    }

    #[test]
    fn unknown_gallery_has_no_cursor() {
        let map = GalleryMap::new();
        assert_eq!(map.cursor("nope"), None);
        assert!(map.is_empty());
    }
}
