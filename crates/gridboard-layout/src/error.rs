#![forbid(unsafe_code)]

//! Contract violations rejected by the layout engine.
//!
//! The algorithms themselves never fail: a reflow that runs out of cascade
//! passes still completes. These errors only cover inputs the caller should
//! have clamped or validated first.

use std::fmt;

use gridboard_core::{GridArea, WidgetId};

use crate::config::ConfigError;

/// Rejected layout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The referenced widget is not in the layout.
    UnknownWidget { id: WidgetId },
    /// Two widgets in the layout share an id, or an added widget reuses one.
    DuplicateWidgetId { id: WidgetId },
    /// The requested area extends past the right edge of the grid.
    AreaOutOfBounds { area: GridArea, columns: u16 },
    /// The requested area has zero width or height.
    EmptyArea { area: GridArea },
    /// A placement size that can never fit the grid.
    InvalidSize { w: u16, h: u16, columns: u16 },
    /// The engine configuration is unusable.
    Config(ConfigError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWidget { id } => write!(f, "widget {id:?} is not in the layout"),
            Self::DuplicateWidgetId { id } => write!(f, "widget id {id:?} is not unique"),
            Self::AreaOutOfBounds { area, columns } => write!(
                f,
                "area x={} w={} exceeds {columns} columns",
                area.x, area.w
            ),
            Self::EmptyArea { area } => {
                write!(f, "area {}x{} covers no cells", area.w, area.h)
            }
            Self::InvalidSize { w, h, columns } => {
                write!(f, "size {w}x{h} cannot be placed on a {columns}-column grid")
            }
            Self::Config(err) => write!(f, "invalid grid config: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Config(err) = self {
            return Some(err);
        }
        None
    }
}

impl From<ConfigError> for LayoutError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Check that `area` is a non-empty area on a `columns`-wide grid.
pub fn check_area(area: GridArea, columns: u16) -> Result<(), LayoutError> {
    if area.is_empty() {
        return Err(LayoutError::EmptyArea { area });
    }
    if !area.fits_columns(columns) {
        return Err(LayoutError::AreaOutOfBounds { area, columns });
    }
    Ok(())
}
