#![forbid(unsafe_code)]

//! Collision predicates over widget areas.

use gridboard_core::{GridArea, Widget, WidgetId};

/// True if `widget` overlaps any other widget in `others`.
///
/// Entries sharing `widget`'s id are skipped, so the widget itself may be
/// part of `others`.
pub fn has_collision(widget: &Widget, others: &[Widget]) -> bool {
    others
        .iter()
        .any(|other| other.id != widget.id && other.area.intersects(&widget.area))
}

/// All widgets overlapping `area`, in input order.
pub fn colliding_widgets<'a>(
    area: &GridArea,
    widgets: &'a [Widget],
    exclude: Option<&WidgetId>,
) -> Vec<&'a Widget> {
    widgets
        .iter()
        .filter(|widget| Some(&widget.id) != exclude && widget.area.intersects(area))
        .collect()
}

/// True if any two widgets in the layout overlap.
///
/// Overlaps involving locked widgets count too: this is how callers detect a
/// reflow that could not fully resolve.
pub fn has_any_collision(widgets: &[Widget]) -> bool {
    first_collision(widgets).is_some()
}

/// Index pair of the first overlapping widgets in scan order.
pub(crate) fn first_collision(widgets: &[Widget]) -> Option<(usize, usize)> {
    colliding_pairs(widgets).next()
}

/// Every overlapping index pair `(i, j)` with `i < j`.
pub(crate) fn colliding_pairs(widgets: &[Widget]) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..widgets.len()).flat_map(move |i| {
        (i + 1..widgets.len())
            .filter(move |&j| widgets[i].area.intersects(&widgets[j].area))
            .map(move |j| (i, j))
    })
}
