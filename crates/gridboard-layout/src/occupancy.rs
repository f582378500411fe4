#![forbid(unsafe_code)]

//! Dense occupancy bitmap over the top rows of the grid.
//!
//! One `u64` per row, bit `x` set when column `x` is covered. Cells outside
//! the tracked rows or columns are ignored when marking.

use gridboard_core::GridArea;

/// Occupancy bitmap for `rows × columns` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    columns: u16,
    rows: Vec<u64>,
}

impl OccupancyGrid {
    /// Create an empty grid. `columns` must not exceed [`crate::MAX_COLUMNS`].
    pub fn new(columns: u16, rows: u16) -> Self {
        debug_assert!(columns <= crate::config::MAX_COLUMNS);
        Self {
            columns,
            rows: vec![0; usize::from(rows)],
        }
    }

    /// Build a grid with every given area marked.
    pub fn from_areas<'a>(
        columns: u16,
        rows: u16,
        areas: impl IntoIterator<Item = &'a GridArea>,
    ) -> Self {
        let mut grid = Self::new(columns, rows);
        for area in areas {
            grid.mark(area);
        }
        grid
    }

    /// Number of tracked rows.
    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows.len() as u16
    }

    /// Number of tracked columns.
    #[inline]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Mark every tracked cell covered by `area`.
    pub fn mark(&mut self, area: &GridArea) {
        let left = area.x.min(self.columns);
        let right = area.right().min(self.columns);
        if left >= right {
            return;
        }
        let mask = span_mask(left, right - left);
        let top = usize::from(area.y).min(self.rows.len());
        let bottom = usize::from(area.bottom()).min(self.rows.len());
        for row in &mut self.rows[top..bottom] {
            *row |= mask;
        }
    }

    /// Whether a single cell is marked. Untracked cells read as free.
    pub fn is_occupied(&self, x: u16, y: u16) -> bool {
        x < self.columns
            && self
                .rows
                .get(usize::from(y))
                .is_some_and(|row| row & (1u64 << x) != 0)
    }

    /// Whether `area` lies fully inside the tracked region with no marked cell.
    pub fn is_free(&self, area: &GridArea) -> bool {
        if area.is_empty() || !area.fits_columns(self.columns) {
            return false;
        }
        let bottom = usize::from(area.y) + usize::from(area.h);
        if bottom > self.rows.len() {
            return false;
        }
        let mask = span_mask(area.x, area.w);
        self.rows[usize::from(area.y)..bottom]
            .iter()
            .all(|row| row & mask == 0)
    }

    /// First free `w × h` origin in row-major order (top rows first, then
    /// left columns).
    pub fn first_fit(&self, w: u16, h: u16) -> Option<GridArea> {
        if w == 0 || h == 0 || w > self.columns || h > self.rows() {
            return None;
        }
        let mask = span_mask(0, w);
        let rows = usize::from(h);
        for y in 0..=(self.rows.len() - rows) {
            let band = self.rows[y..y + rows].iter().fold(0u64, |acc, row| acc | *row);
            for x in 0..=(self.columns - w) {
                if band & (mask << x) == 0 {
                    return Some(GridArea::new(x, y as u16, w, h));
                }
            }
        }
        None
    }
}

/// Bits `x..x + w` set.
#[inline]
fn span_mask(x: u16, w: u16) -> u64 {
    let ones = if w >= 64 { u64::MAX } else { (1u64 << w) - 1 };
    ones << x
}
