#![forbid(unsafe_code)]

//! Core: grid geometry, widget records, and logging shims shared by the
//! gridboard layout engine.

pub mod geometry;
pub mod logging;
pub mod widget;

pub use geometry::{DEFAULT_COLUMNS, GridArea, GridSize};
pub use widget::{Widget, WidgetId, WidgetSizeSpec};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
