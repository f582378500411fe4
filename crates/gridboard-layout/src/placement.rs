#![forbid(unsafe_code)]

//! First-fit placement for new widgets.

use gridboard_core::{GridArea, Widget, debug, debug_span};

use crate::config::GridConfig;
use crate::error::LayoutError;
use crate::occupancy::OccupancyGrid;

/// Find the first unoccupied `w × h` area.
///
/// Scans the top `config.scan_rows` rows row-major (top rows first, then left
/// columns). When nothing fits there, the area is appended at column 0 right
/// below the lowest widget, which never overlaps anything.
///
/// ```
/// use gridboard_core::{GridArea, Widget};
/// use gridboard_layout::{GridConfig, find_empty_space};
///
/// let layout = vec![Widget::new("funnel", GridArea::new(0, 0, 6, 2))];
/// let area = find_empty_space(&layout, 6, 2, &GridConfig::default()).unwrap();
/// assert_eq!(area, GridArea::new(6, 0, 6, 2));
/// ```
pub fn find_empty_space(
    widgets: &[Widget],
    w: u16,
    h: u16,
    config: &GridConfig,
) -> Result<GridArea, LayoutError> {
    config.validate()?;
    if w == 0 || h == 0 || w > config.columns {
        return Err(LayoutError::InvalidSize {
            w,
            h,
            columns: config.columns,
        });
    }

    let _span = debug_span!("grid_find_empty_space", widgets = widgets.len(), w, h).entered();

    let grid = OccupancyGrid::from_areas(
        config.columns,
        config.scan_rows,
        widgets.iter().map(|widget| &widget.area),
    );
    if let Some(area) = grid.first_fit(w, h) {
        debug!(x = area.x, y = area.y, "first fit");
        return Ok(area);
    }

    let y = content_bottom(widgets);
    debug!(y, "no fit in scanned rows, appending below content");
    Ok(GridArea::new(0, y, w, h))
}

/// Lowest occupied row edge (`max(y + h)`), or 0 for an empty layout.
pub fn content_bottom(widgets: &[Widget]) -> u16 {
    widgets
        .iter()
        .map(|widget| widget.area.bottom())
        .max()
        .unwrap_or(0)
}
