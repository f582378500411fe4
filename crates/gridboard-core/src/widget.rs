#![forbid(unsafe_code)]

//! Dashboard widget records.
//!
//! A [`Widget`] is the engine's whole view of a dashboard tile: a stable id,
//! where it sits on the grid, and whether the engine may move it. Widget
//! content, type, and data bindings belong to the catalog and never reach
//! the layout code.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{GridArea, GridSize};

/// Stable identifier for a widget within one layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Create a new widget ID.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for WidgetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WidgetId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for WidgetId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// One widget placed on the dashboard grid.
///
/// Field names serialize in the camelCase shape used by stored dashboards
/// (`gridArea`, `isVisible`, `isLocked`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    #[serde(rename = "gridArea")]
    pub area: GridArea,
    #[serde(rename = "isVisible", default = "default_visible")]
    pub visible: bool,
    /// Locked widgets are never pushed or compacted.
    #[serde(rename = "isLocked", default)]
    pub locked: bool,
}

fn default_visible() -> bool {
    true
}

impl Widget {
    /// Create a visible, unlocked widget.
    pub fn new(id: impl Into<WidgetId>, area: GridArea) -> Self {
        Self {
            id: id.into(),
            area,
            visible: true,
            locked: false,
        }
    }

    /// Mark the widget as locked.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Set visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Copy of this widget at a different area.
    #[must_use]
    pub fn with_area(&self, area: GridArea) -> Self {
        Self {
            area,
            ..self.clone()
        }
    }

    /// Whether the layout engine may reposition this widget.
    #[inline]
    pub const fn is_movable(&self) -> bool {
        !self.locked
    }
}

/// Size bounds a widget catalog publishes per widget type.
///
/// The layout engine does not enforce these; callers clamp a requested
/// resize with [`WidgetSizeSpec::clamp`] before reflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSizeSpec {
    pub default_size: GridSize,
    pub min_size: GridSize,
    #[serde(default)]
    pub max_size: Option<GridSize>,
}

impl WidgetSizeSpec {
    /// Spec with a default and minimum size and no maximum.
    pub const fn new(default_size: GridSize, min_size: GridSize) -> Self {
        Self {
            default_size,
            min_size,
            max_size: None,
        }
    }

    /// Set the maximum size.
    #[must_use]
    pub const fn with_max(mut self, max_size: GridSize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Clamp a requested size to `[min_size, max_size]`.
    ///
    /// Every dimension of the result is at least 1 so the clamped size can
    /// always be placed.
    pub fn clamp(&self, size: GridSize) -> GridSize {
        let max = self.max_size.unwrap_or(GridSize::new(u16::MAX, u16::MAX));
        let clamp_axis = |value: u16, min: u16, max: u16| value.max(min).min(max.max(min)).max(1);
        GridSize::new(
            clamp_axis(size.w, self.min_size.w, max.w),
            clamp_axis(size.h, self.min_size.h, max.h),
        )
    }
}
