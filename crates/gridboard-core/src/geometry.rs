#![forbid(unsafe_code)]

//! Grid geometry.
//!
//! Dashboard coordinates are whole grid cells: columns run left to right
//! across a fixed-width grid, rows run top to bottom without a lower bound.

use serde::{Deserialize, Serialize};

/// Column count of the standard dashboard grid.
pub const DEFAULT_COLUMNS: u16 = 12;

/// A rectangle of grid cells.
///
/// Uses grid coordinates (0-indexed, origin at top-left). Right and bottom
/// edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridArea {
    /// Left column (inclusive).
    pub x: u16,
    /// Top row (inclusive).
    pub y: u16,
    /// Width in columns.
    pub w: u16,
    /// Height in rows.
    pub h: u16,
}

impl GridArea {
    /// Create a new area.
    #[inline]
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Create an area at `(x, y)` with the given size.
    #[inline]
    pub const fn at(x: u16, y: u16, size: GridSize) -> Self {
        Self::new(x, y, size.w, size.h)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Size without origin.
    #[inline]
    pub const fn size(&self) -> GridSize {
        GridSize::new(self.w, self.h)
    }

    /// Number of cells covered.
    #[inline]
    pub const fn cells(&self) -> u32 {
        self.w as u32 * self.h as u32
    }

    /// Check if the area covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a cell is inside the area.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Axis-aligned overlap test.
    ///
    /// Two areas collide unless they are disjoint on at least one axis.
    /// Touching edges do not count as overlap.
    #[inline]
    pub const fn intersects(&self, other: &GridArea) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Check that the area lies on a grid of `columns` columns.
    #[inline]
    pub const fn fits_columns(&self, columns: u16) -> bool {
        self.w <= columns && self.x <= columns - self.w
    }

    /// Same area moved to row `y`.
    #[inline]
    #[must_use]
    pub const fn with_y(self, y: u16) -> Self {
        Self { y, ..self }
    }

    /// Same origin with a different size.
    #[inline]
    #[must_use]
    pub const fn with_size(self, size: GridSize) -> Self {
        Self {
            w: size.w,
            h: size.h,
            ..self
        }
    }
}

/// A width/height pair in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridSize {
    /// Width in columns.
    pub w: u16,
    /// Height in rows.
    pub h: u16,
}

impl GridSize {
    /// Create a new size.
    #[inline]
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }

    /// Check if the size covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl From<(u16, u16)> for GridSize {
    fn from((w, h): (u16, u16)) -> Self {
        Self::new(w, h)
    }
}
