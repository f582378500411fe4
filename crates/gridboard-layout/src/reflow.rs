#![forbid(unsafe_code)]

//! Push-down reflow after a widget is resized or moved.
//!
//! The resized widget keeps the column and size the caller asked for. Widgets
//! it now overlaps are pushed straight down just far enough to clear it; a
//! pushed widget may land on another one, so the whole layout is re-scanned
//! and pushed again, pass after pass, until nothing moves or the pass cap in
//! [`GridConfig::max_reflow_iterations`] is reached. A compaction pass then
//! closes the gaps the pushes left behind, and may raise the resized widget's
//! row along with the others.
//!
//! The algorithm is greedy and local. It does not minimize total
//! displacement, and running out of passes is not an error: the outcome
//! reports `converged = false` and the caller can inspect the result with
//! [`crate::has_any_collision`] or [`crate::validate_layout`].
//!
//! # Example
//!
//! ```
//! use gridboard_core::{GridArea, Widget, WidgetId};
//! use gridboard_layout::{GridConfig, reflow_layout};
//!
//! let layout = vec![
//!     Widget::new("a", GridArea::new(0, 0, 3, 1)),
//!     Widget::new("b", GridArea::new(3, 0, 3, 1)),
//! ];
//! let outcome = reflow_layout(
//!     &layout,
//!     &WidgetId::new("a"),
//!     GridArea::new(0, 0, 6, 1),
//!     &GridConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(outcome.widgets[1].area.y, 1);
//! assert_eq!(outcome.moved, [WidgetId::new("b")]);
//! ```

use gridboard_core::{GridArea, Widget, WidgetId, debug, debug_span, trace, warn};

use crate::compact::compact_layout;
use crate::config::GridConfig;
use crate::error::{LayoutError, check_area};
use crate::validate::ensure_unique_ids;

/// Result of a completed reflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflowOutcome {
    /// The repositioned layout, in input order.
    pub widgets: Vec<Widget>,
    /// Always `true` for a completed reflow, including one that ran out of
    /// cascade passes.
    pub success: bool,
    /// Widgets other than the resized one whose area changed, in input order.
    pub moved: Vec<WidgetId>,
    /// Whether the cascade settled with no resolvable overlap left.
    pub converged: bool,
    /// Cascade passes run.
    pub iterations: u16,
}

/// Apply `new_area` to `target` and push colliding widgets out of the way.
///
/// Returns an error only when the request breaks the engine's contract: an
/// unknown target, duplicate ids in `widgets`, or an area that is empty or
/// hangs off the right edge of the grid.
pub fn reflow_layout(
    widgets: &[Widget],
    target: &WidgetId,
    new_area: GridArea,
    config: &GridConfig,
) -> Result<ReflowOutcome, LayoutError> {
    config.validate()?;
    check_area(new_area, config.columns)?;
    ensure_unique_ids(widgets)?;
    let target_idx = widgets
        .iter()
        .position(|widget| &widget.id == target)
        .ok_or_else(|| LayoutError::UnknownWidget { id: target.clone() })?;

    let _span = debug_span!(
        "grid_reflow",
        widget = %target,
        x = new_area.x,
        y = new_area.y,
        w = new_area.w,
        h = new_area.h,
        widgets = widgets.len()
    )
    .entered();

    let mut working = widgets.to_vec();
    working[target_idx].area = new_area;

    let direct: Vec<usize> = (0..working.len())
        .filter(|&idx| idx != target_idx && working[idx].area.intersects(&new_area))
        .collect();
    if direct.is_empty() {
        trace!("no collisions, nothing to reflow");
        return Ok(ReflowOutcome {
            widgets: working,
            success: true,
            moved: Vec::new(),
            converged: true,
            iterations: 0,
        });
    }

    for idx in direct {
        if working[idx].locked {
            debug!(widget = %working[idx].id, "locked widget blocks reflow");
            continue;
        }
        push_below(&mut working[idx], new_area.bottom());
    }

    let (converged, iterations) = cascade(&mut working, target_idx, config.max_reflow_iterations);
    if !converged {
        warn!(
            iterations,
            cap = config.max_reflow_iterations,
            "reflow cascade hit its pass cap with overlaps left"
        );
    }

    let compacted = compact_layout(&working);
    let moved = moved_ids(widgets, &compacted, target_idx);
    debug!(moved = moved.len(), converged, iterations, "reflow complete");

    Ok(ReflowOutcome {
        widgets: compacted,
        success: true,
        moved,
        converged,
        iterations,
    })
}

/// Move `widget` down so its top edge sits at `bottom`. Returns whether it moved.
fn push_below(widget: &mut Widget, bottom: u16) -> bool {
    if bottom <= widget.area.y {
        return false;
    }
    trace!(widget = %widget.id, from = widget.area.y, to = bottom, "push");
    widget.area.y = bottom;
    true
}

/// Re-scan the whole layout, pushing apart overlapping pairs, until a pass
/// moves nothing or `cap` passes have run.
///
/// Returns `(converged, passes)`.
fn cascade(working: &mut [Widget], target_idx: usize, cap: u16) -> (bool, u16) {
    let mut passes = 0;
    while passes < cap {
        passes += 1;
        let mut pushed = false;
        for i in 0..working.len() {
            for j in (i + 1)..working.len() {
                if !working[i].area.intersects(&working[j].area) {
                    continue;
                }
                let Some((mover, anchor)) = pick_mover(working, i, j, target_idx) else {
                    continue;
                };
                let bottom = working[anchor].area.bottom();
                pushed |= push_below(&mut working[mover], bottom);
            }
        }
        if !pushed {
            return (true, passes);
        }
    }
    (!has_resolvable_overlap(working, target_idx), passes)
}

/// Choose which widget of an overlapping pair moves: `(mover, anchor)`.
///
/// Locked widgets and the resized widget never move. When both may move, the
/// lower one goes (the later one on equal rows). `None` means neither can.
fn pick_mover(working: &[Widget], i: usize, j: usize, target_idx: usize) -> Option<(usize, usize)> {
    let movable = |idx: usize| idx != target_idx && working[idx].is_movable();
    match (movable(i), movable(j)) {
        (false, false) => None,
        (true, false) => Some((i, j)),
        (false, true) => Some((j, i)),
        (true, true) if working[i].area.y > working[j].area.y => Some((i, j)),
        (true, true) => Some((j, i)),
    }
}

fn has_resolvable_overlap(working: &[Widget], target_idx: usize) -> bool {
    crate::collision::colliding_pairs(working)
        .any(|(i, j)| pick_mover(working, i, j, target_idx).is_some())
}

fn moved_ids(before: &[Widget], after: &[Widget], target_idx: usize) -> Vec<WidgetId> {
    before
        .iter()
        .zip(after)
        .enumerate()
        .filter(|(idx, (old, new))| *idx != target_idx && old.area != new.area)
        .map(|(_, (_, new))| new.id.clone())
        .collect()
}
