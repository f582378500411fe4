#![forbid(unsafe_code)]

//! Dashboard grid layout engine.
//!
//! Widgets are rectangles on a fixed-width integer grid. This crate decides
//! where they go:
//!
//! - [`find_empty_space`] - first-fit placement for a new widget
//! - [`reflow_layout`] - push widgets out of the way of a resized/moved one
//! - [`compact_layout`] - pull widgets up to close vertical gaps
//! - [`has_any_collision`] / [`validate_layout`] - detect what a best-effort
//!   reflow could not resolve
//! - [`LayoutController`] - the add/resize/move/remove sequences a dashboard
//!   editor needs
//! - [`LayoutSnapshot`] - versioned plain data for storage and presets
//!
//! Every operation is a synchronous pure function: layouts come in as
//! `&[Widget]` and go out as a new `Vec<Widget>`. Locked widgets are never
//! repositioned.
//!
//! # Example
//!
//! ```
//! use gridboard_core::{GridArea, GridSize, WidgetId};
//! use gridboard_layout::{GridConfig, LayoutController, has_any_collision};
//!
//! let controller = LayoutController::new(GridConfig::default()).unwrap();
//! let change = controller.add_widget(&[], "pipeline", GridSize::new(6, 2)).unwrap();
//! let change = controller
//!     .add_widget(&change.widgets, "offers", GridSize::new(6, 2))
//!     .unwrap();
//! assert_eq!(change.widgets[1].area, GridArea::new(6, 0, 6, 2));
//!
//! let change = controller
//!     .resize_widget(&change.widgets, &WidgetId::new("pipeline"), GridArea::new(0, 0, 12, 2))
//!     .unwrap();
//! assert_eq!(change.moved, [WidgetId::new("offers")]);
//! assert!(!has_any_collision(&change.widgets));
//! ```
//!
//! # Tracing
//!
//! Enable the `tracing` feature to get `grid_find_empty_space`,
//! `grid_reflow`, and `grid_compact` spans plus push/fallback events.

pub mod collision;
pub mod compact;
pub mod config;
pub mod controller;
pub mod error;
pub mod occupancy;
pub mod placement;
pub mod reflow;
pub mod snapshot;
pub mod validate;

pub use collision::{colliding_widgets, has_any_collision, has_collision};
pub use compact::compact_layout;
pub use config::{ConfigError, GridConfig, MAX_COLUMNS};
pub use controller::{LayoutChange, LayoutController};
pub use error::LayoutError;
pub use gridboard_core::{GridArea, GridSize, Widget, WidgetId, WidgetSizeSpec};
pub use occupancy::OccupancyGrid;
pub use placement::{content_bottom, find_empty_space};
pub use reflow::{ReflowOutcome, reflow_layout};
pub use snapshot::{LAYOUT_SCHEMA_VERSION, LayoutSnapshot, SnapshotError};
pub use validate::{IssueSeverity, LayoutIssue, LayoutIssueCode, LayoutReport, validate_layout};
