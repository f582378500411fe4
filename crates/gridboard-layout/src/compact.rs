#![forbid(unsafe_code)]

//! Vertical compaction.
//!
//! Widgets are visited top to bottom and each unlocked one is lifted to the
//! smallest row where it overlaps nothing already settled. Settled means the
//! locked widgets, which never move, and the widgets visited before it at
//! their new rows. Widgets further down are not consulted: they are visited
//! later and dodge whatever lands above them. Running the pass on its own
//! output changes nothing, whatever the input looked like.

use gridboard_core::{GridArea, Widget, debug_span, trace};

/// Pull every unlocked widget up as far as it can go. Output keeps input order.
pub fn compact_layout(widgets: &[Widget]) -> Vec<Widget> {
    let _span = debug_span!("grid_compact", widgets = widgets.len()).entered();

    let mut out = widgets.to_vec();
    let mut order: Vec<usize> = (0..out.len()).collect();
    // Stable: equal rows keep input order.
    order.sort_by_key(|&idx| out[idx].area.y);

    let mut settled: Vec<GridArea> = out
        .iter()
        .filter(|widget| widget.locked)
        .map(|widget| widget.area)
        .collect();

    for idx in order {
        if out[idx].locked {
            continue;
        }
        let area = out[idx].area;
        let lifted = (0..area.y).find(|&y| {
            let candidate = area.with_y(y);
            settled.iter().all(|other| !other.intersects(&candidate))
        });
        if let Some(y) = lifted {
            trace!(widget = %out[idx].id, from = area.y, to = y, "compact");
            out[idx].area.y = y;
        }
        settled.push(out[idx].area);
    }
    out
}
