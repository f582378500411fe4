#![forbid(unsafe_code)]

//! gridboard public facade crate.
//!
//! Re-exports the widget model from `gridboard-core` and the layout engine
//! from `gridboard-layout`, and adds a single error type for callers that
//! drive the engine end to end.
//!
//! ```
//! use gridboard::prelude::*;
//!
//! fn build() -> gridboard::Result<Vec<Widget>> {
//!     let controller = LayoutController::new(GridConfig::default())?;
//!     let change = controller.add_widget(&[], "kpi", GridSize::new(4, 2))?;
//!     let change = controller.add_widget(&change.widgets, "chart", GridSize::new(8, 4))?;
//!     Ok(change.widgets)
//! }
//!
//! let widgets = build().unwrap();
//! assert_eq!(widgets[1].area, GridArea::new(4, 0, 8, 4));
//! ```

use std::fmt;

// --- Model re-exports ------------------------------------------------------

pub use gridboard_core::{DEFAULT_COLUMNS, GridArea, GridSize, Widget, WidgetId, WidgetSizeSpec};

// --- Engine re-exports -----------------------------------------------------

pub use gridboard_layout::{
    ConfigError, GridConfig, IssueSeverity, LAYOUT_SCHEMA_VERSION, LayoutChange,
    LayoutController, LayoutError, LayoutIssue, LayoutIssueCode, LayoutReport, LayoutSnapshot,
    MAX_COLUMNS, ReflowOutcome, SnapshotError, colliding_widgets, compact_layout,
    find_empty_space, has_any_collision, has_collision, reflow_layout, validate_layout,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for gridboard callers.
#[derive(Debug)]
pub enum Error {
    /// A layout operation rejected its input.
    Layout(LayoutError),
    /// Invalid grid configuration.
    Config(ConfigError),
    /// A persisted layout could not be restored.
    Snapshot(SnapshotError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Config(inner) => Self::Config(inner),
            other => Self::Layout(other),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<SnapshotError> for Error {
    fn from(err: SnapshotError) -> Self {
        Self::Snapshot(err)
    }
}

/// Standard result type for gridboard APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, GridArea, GridConfig, GridSize, LayoutChange, LayoutController, LayoutReport,
        LayoutSnapshot, Result, Widget, WidgetId, WidgetSizeSpec,
    };

    pub use crate::{core, layout};
}

pub use gridboard_core as core;
pub use gridboard_layout as layout;
