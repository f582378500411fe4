#![forbid(unsafe_code)]

//! Caller-facing orchestration.
//!
//! [`LayoutController`] sequences the engine for the gestures a dashboard
//! editor produces: add a widget, resize or drag one, remove one. It holds
//! only configuration; every call takes the caller's current layout by
//! reference and hands back a fresh one.

use gridboard_core::{GridArea, GridSize, Widget, WidgetId, WidgetSizeSpec};

use crate::compact::compact_layout;
use crate::config::GridConfig;
use crate::error::LayoutError;
use crate::placement::find_empty_space;
use crate::reflow::{ReflowOutcome, reflow_layout};
use crate::validate::{LayoutReport, ensure_unique_ids, validate_layout};

/// New layout produced by a controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutChange {
    pub widgets: Vec<Widget>,
    /// Pre-existing widgets whose area changed, in layout order.
    pub moved: Vec<WidgetId>,
    /// False when a reflow ran out of cascade passes.
    pub converged: bool,
}

impl From<ReflowOutcome> for LayoutChange {
    fn from(outcome: ReflowOutcome) -> Self {
        Self {
            widgets: outcome.widgets,
            moved: outcome.moved,
            converged: outcome.converged,
        }
    }
}

/// Stateless driver for dashboard edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutController {
    config: GridConfig,
}

impl LayoutController {
    /// Create a controller, rejecting unusable configs up front.
    pub fn new(config: GridConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Place a new widget of `size` in the first free spot and append it.
    pub fn add_widget(
        &self,
        widgets: &[Widget],
        id: impl Into<WidgetId>,
        size: GridSize,
    ) -> Result<LayoutChange, LayoutError> {
        let id = id.into();
        ensure_unique_ids(widgets)?;
        if widgets.iter().any(|widget| widget.id == id) {
            return Err(LayoutError::DuplicateWidgetId { id });
        }
        let area = find_empty_space(widgets, size.w, size.h, &self.config)?;
        let mut out = widgets.to_vec();
        out.push(Widget::new(id, area));
        Ok(LayoutChange {
            widgets: out,
            moved: Vec::new(),
            converged: true,
        })
    }

    /// Place a new widget at the catalog's default size.
    pub fn add_widget_with_spec(
        &self,
        widgets: &[Widget],
        id: impl Into<WidgetId>,
        spec: &WidgetSizeSpec,
    ) -> Result<LayoutChange, LayoutError> {
        let mut size = spec.clamp(spec.default_size);
        size.w = size.w.min(self.config.columns);
        self.add_widget(widgets, id, size)
    }

    /// Give `id` a new area and reflow the rest of the layout around it.
    pub fn resize_widget(
        &self,
        widgets: &[Widget],
        id: &WidgetId,
        new_area: GridArea,
    ) -> Result<LayoutChange, LayoutError> {
        reflow_layout(widgets, id, new_area, &self.config).map(LayoutChange::from)
    }

    /// Like [`Self::resize_widget`], first clamping the requested size to
    /// the catalog bounds and the grid.
    ///
    /// Width is clamped to the grid, then the origin is shifted left if the
    /// widget would hang off the right edge.
    pub fn resize_widget_clamped(
        &self,
        widgets: &[Widget],
        id: &WidgetId,
        requested: GridArea,
        spec: &WidgetSizeSpec,
    ) -> Result<LayoutChange, LayoutError> {
        let mut size = spec.clamp(requested.size());
        size.w = size.w.min(self.config.columns);
        let x = requested.x.min(self.config.columns - size.w);
        self.resize_widget(widgets, id, GridArea::at(x, requested.y, size))
    }

    /// Drag `id` so its top-left corner lands at `(x, y)`, keeping its size.
    pub fn move_widget(
        &self,
        widgets: &[Widget],
        id: &WidgetId,
        x: u16,
        y: u16,
    ) -> Result<LayoutChange, LayoutError> {
        let current = widgets
            .iter()
            .find(|widget| &widget.id == id)
            .ok_or_else(|| LayoutError::UnknownWidget { id: id.clone() })?;
        self.resize_widget(widgets, id, GridArea::at(x, y, current.area.size()))
    }

    /// Drop `id` and compact the remaining widgets into the space it freed.
    pub fn remove_widget(
        &self,
        widgets: &[Widget],
        id: &WidgetId,
    ) -> Result<LayoutChange, LayoutError> {
        let idx = widgets
            .iter()
            .position(|widget| &widget.id == id)
            .ok_or_else(|| LayoutError::UnknownWidget { id: id.clone() })?;
        let mut remaining = widgets.to_vec();
        remaining.remove(idx);
        Ok(self.compact(&remaining))
    }

    /// Standalone compaction.
    pub fn compact(&self, widgets: &[Widget]) -> LayoutChange {
        let out = compact_layout(widgets);
        let moved = widgets
            .iter()
            .zip(&out)
            .filter(|(before, after)| before.area != after.area)
            .map(|(_, after)| after.id.clone())
            .collect();
        LayoutChange {
            widgets: out,
            moved,
            converged: true,
        }
    }

    /// Report overlaps and off-grid widgets.
    pub fn validate(&self, widgets: &[Widget]) -> LayoutReport {
        validate_layout(widgets, &self.config)
    }
}
