#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
//! Dot field geometry and pointer state
//!
//! The field is a row-major grid of cells sized to its container. A resize
//! recomputes everything from scratch; cell identity never survives a
//! geometry change.

use crate::config::MotionConfig;

/// Container-local pointer position used while the pointer is outside the
/// field. Farther than any realistic container diagonal plus highlight
/// radius, so no cell can light up.
pub const PARKED_POINTER: (f64, f64) = (-1.0e4, -1.0e4);

/// Layout and pointer state for the dot field
#[derive(Debug, Clone)]
pub struct DotField {
    config: MotionConfig,
    width: f64,
    height: f64,
    columns: usize,
    rows: usize,
    pointer: (f64, f64),
}

impl DotField {
    /// A field with no geometry yet; `resize` establishes the layout.
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config: config.sanitized(),
            width: 0.0,
            height: 0.0,
            columns: 0,
            rows: 0,
            pointer: PARKED_POINTER,
        }
    }

    /// Recompute the layout for a new container box.
    ///
    /// `columns = floor(width / cell)`, `rows = floor(height / cell)`; a
    /// box smaller than one cell in either direction leaves the field
    /// without layout (zero rows or columns).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.columns = (self.width / self.config.cell_size_px).floor() as usize;
        self.rows = (self.height / self.config.cell_size_px).floor() as usize;
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether a usable layout exists; a tick on an unlaid-out field is a
    /// no-op, not an error.
    pub const fn is_laid_out(&self) -> bool {
        self.rows > 0 && self.columns > 0
    }

    /// Pitch between cell centers; 0.0 until the field is laid out.
    pub fn spacing(&self) -> f64 {
        if self.columns == 0 {
            0.0
        } else {
            self.width / self.columns as f64
        }
    }

    /// `(row, column)` of a cell, row-major.
    pub const fn cell_position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Container-local center of a cell.
    pub fn cell_center(&self, index: usize) -> (f64, f64) {
        let spacing = self.spacing();
        let (row, column) = self.cell_position(index);
        (
            column as f64 * spacing + spacing / 2.0,
            row as f64 * spacing + spacing / 2.0,
        )
    }

    /// Record the pointer in container-local coordinates.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Move the pointer out of range of every cell.
    pub fn park_pointer(&mut self) {
        self.pointer = PARKED_POINTER;
    }

    pub const fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    /// Whether a cell sits strictly inside the highlight radius of the
    /// pointer.
    pub fn is_bright(&self, index: usize) -> bool {
        let (cx, cy) = self.cell_center(index);
        let (px, py) = self.pointer;
        (px - cx).hypot(py - cy) < self.config.highlight_radius_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out_field() -> DotField {
        let mut field = DotField::new(MotionConfig::default());
        field.resize(350.0, 175.0);
        field
    }

    #[test]
    fn layout_is_floor_of_box_over_cell_size() {
        let field = laid_out_field();
        assert_eq!(field.columns(), 10);
        assert_eq!(field.rows(), 5);
        assert_eq!(field.cell_count(), 50);
        assert_eq!(field.spacing(), 35.0);
    }

    #[test]
    fn cells_are_row_major() {
        let field = laid_out_field();
        assert_eq!(field.cell_position(0), (0, 0));
        assert_eq!(field.cell_position(9), (0, 9));
        assert_eq!(field.cell_position(10), (1, 0));
        assert_eq!(field.cell_position(23), (2, 3));
        assert_eq!(field.cell_position(49), (4, 9));
    }

    #[test]
    fn cell_centers_sit_mid_pitch() {
        let field = laid_out_field();
        assert_eq!(field.cell_center(0), (17.5, 17.5));
        assert_eq!(field.cell_center(11), (52.5, 52.5));
    }

    #[test]
    fn highlight_is_strict_at_the_radius() {
        let mut field = laid_out_field();
        let (cx, cy) = field.cell_center(0);

        field.set_pointer(cx, cy);
        assert!(field.is_bright(0));

        field.set_pointer(cx + 119.9, cy);
        assert!(field.is_bright(0));

        field.set_pointer(cx + 120.0, cy);
        assert!(!field.is_bright(0));
    }

    #[test]
    fn moving_away_eventually_unlights() {
        let mut field = laid_out_field();
        let (cx, cy) = field.cell_center(0);
        let mut was_bright = true;
        for step in 0..40 {
            field.set_pointer(cx + f64::from(step) * 10.0, cy);
            let bright = field.is_bright(0);
            // Monotone: once unlit while retreating, never lit again.
            assert!(was_bright || !bright);
            was_bright = bright;
        }
        assert!(!was_bright);
    }

    #[test]
    fn parked_pointer_lights_nothing() {
        let field = laid_out_field();
        assert!((0..field.cell_count()).all(|i| !field.is_bright(i)));
    }

    #[test]
    fn unlaid_out_field_is_inert() {
        let field = DotField::new(MotionConfig::default());
        assert!(!field.is_laid_out());
        assert_eq!(field.cell_count(), 0);
        assert_eq!(field.spacing(), 0.0);
    }

    #[test]
    fn box_smaller_than_one_cell_has_no_layout() {
        let mut field = DotField::new(MotionConfig::default());
        field.resize(20.0, 500.0);
        assert_eq!(field.columns(), 0);
        assert!(!field.is_laid_out());
        assert_eq!(field.spacing(), 0.0);
    }

    #[test]
    fn resize_replaces_the_whole_layout() {
        let mut field = laid_out_field();
        field.resize(700.0, 70.0);
        assert_eq!(field.columns(), 20);
        assert_eq!(field.rows(), 2);
        assert_eq!(field.cell_count(), 40);
    }

    #[test]
    fn custom_pitch_is_honored() {
        let mut field = DotField::new(MotionConfig {
            cell_size_px: 50.0,
            highlight_radius_px: 10.0,
        });
        field.resize(350.0, 175.0);
        assert_eq!(field.columns(), 7);
        assert_eq!(field.rows(), 3);
        assert_eq!(field.spacing(), 50.0);
    }
}
