#![forbid(unsafe_code)]

//! Reflow Test Matrix (Grid Width x Preset x Edit)
//!
//! Runs every edit gesture against every preset dashboard on several grid
//! widths and checks the layout invariants after each one.
//!
//! # Invariants Checked
//!
//! | Name              | Invariant                                              |
//! |-------------------|--------------------------------------------------------|
//! | `success`         | Reflow always completes with `success == true`         |
//! | `locked_fixed`    | Locked widgets keep their exact area                   |
//! | `target_geometry` | Resized widget keeps its column and requested size     |
//! | `no_overlap`      | Converged reflow leaves no unlocked overlap            |
//! | `deterministic`   | Same input gives the same output                       |
//! | `compact_stable`  | Compacted results are stable; no-op edits keep gaps    |
//!
//! # Running Tests
//!
//! ```sh
//! cargo test -p gridboard-layout --test reflow_matrix
//! ```
//!
//! # JSONL Logging
//!
//! ```sh
//! GRIDBOARD_LOG=1 cargo test -p gridboard-layout --test reflow_matrix
//! ```

use gridboard_layout::{
    GridArea, GridConfig, GridSize, LayoutIssueCode, Widget, WidgetId, compact_layout,
    reflow_layout, validate_layout,
};
use serde_json::json;
use std::io::Write;

// ============================================================================
// JSONL Logger
// ============================================================================

struct MatrixLogger {
    writer: Option<Box<dyn Write>>,
    run_id: String,
}

impl MatrixLogger {
    fn new(case_name: &str) -> Self {
        let writer = if std::env::var("GRIDBOARD_LOG").is_ok() {
            let dir = std::env::temp_dir().join("gridboard_reflow_matrix");
            let _ = std::fs::create_dir_all(&dir);
            let path = dir.join(format!("{case_name}.jsonl"));
            std::fs::File::create(path)
                .ok()
                .map(|f| Box::new(f) as Box<dyn Write>)
        } else {
            None
        };
        Self {
            writer,
            run_id: format!(
                "{}-{}",
                case_name,
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_millis()
            ),
        }
    }

    fn log_event(&mut self, event: &str, data: serde_json::Value) {
        if let Some(ref mut w) = self.writer {
            let ts = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis();
            let line = json!({
                "run_id": self.run_id,
                "event": event,
                "ts_ms": ts as u64,
                "data": data,
            });
            let _ = writeln!(w, "{line}");
        }
    }

    fn log_scenario(&mut self, columns: u16, preset: &str, edit: &str, widgets: usize) {
        self.log_event(
            "scenario",
            json!({ "columns": columns, "preset": preset, "edit": edit, "widgets": widgets }),
        );
    }

    fn log_invariant(&mut self, invariant: &str, passed: bool, detail: &str) {
        self.log_event(
            "invariant",
            json!({ "id": invariant, "passed": passed, "detail": detail }),
        );
    }

    fn log_complete(&mut self, passed: bool, total_checks: usize) {
        self.log_event(
            "complete",
            json!({ "passed": passed, "total_checks": total_checks }),
        );
    }
}

// ============================================================================
// Presets and Edits
// ============================================================================

const MATRIX_COLUMNS: [u16; 3] = [6, 12, 24];

fn widget(id: &str, x: u16, y: u16, w: u16, h: u16) -> Widget {
    Widget::new(id, GridArea::new(x, y, w, h))
}

/// Full-width rows stacked top to bottom.
fn stacked(columns: u16) -> Vec<Widget> {
    (0..6)
        .map(|n| widget(&format!("row{n}"), 0, n * 2, columns, 2))
        .collect()
}

/// Two columns of cards.
fn two_column(columns: u16) -> Vec<Widget> {
    let half = columns / 2;
    (0..4)
        .flat_map(|n| {
            [
                widget(&format!("left{n}"), 0, n * 3, half, 3),
                widget(&format!("right{n}"), half, n * 3, columns - half, 3),
            ]
        })
        .collect()
}

/// Mixed sizes with a locked header and a locked card in the middle.
fn pinned(columns: u16) -> Vec<Widget> {
    let third = columns / 3;
    vec![
        widget("header", 0, 0, columns, 1).locked(),
        widget("kpi-a", 0, 1, third, 2),
        widget("kpi-b", third, 1, third, 2),
        widget("kpi-c", third * 2, 1, columns - third * 2, 2),
        widget("chart", 0, 3, third * 2, 4),
        widget("pinned", third * 2, 3, columns - third * 2, 4).locked(),
        widget("table", 0, 7, columns, 3),
    ]
}

type Preset = fn(u16) -> Vec<Widget>;

const PRESETS: [(&str, Preset); 3] = [
    ("stacked", stacked),
    ("two_column", two_column),
    ("pinned", pinned),
];

/// An edit: which widget, and the area derived from its current one.
struct Edit {
    name: &'static str,
    apply: fn(GridArea, u16) -> GridArea,
}

const EDITS: [Edit; 5] = [
    Edit {
        name: "grow_tall",
        apply: |a, _| GridArea::new(a.x, a.y, a.w, a.h + 4),
    },
    Edit {
        name: "grow_wide",
        apply: |a, cols| GridArea::new(0, a.y, cols, a.h),
    },
    Edit {
        name: "shrink",
        apply: |a, _| GridArea::new(a.x, a.y, (a.w / 2).max(1), 1),
    },
    Edit {
        name: "drag_to_top",
        apply: |a, _| GridArea::new(a.x, 0, a.w, a.h),
    },
    Edit {
        name: "drag_down",
        apply: |a, _| GridArea::new(a.x, a.y + 3, a.w, a.h),
    },
];

fn unlocked_overlap(widgets: &[Widget]) -> bool {
    widgets.iter().enumerate().any(|(i, a)| {
        widgets[i + 1..]
            .iter()
            .any(|b| !a.locked && !b.locked && a.area.intersects(&b.area))
    })
}

// ============================================================================
// Matrix
// ============================================================================

#[test]
fn reflow_matrix_invariants_hold() {
    let mut logger = MatrixLogger::new("invariants");
    let mut checks = 0;

    for columns in MATRIX_COLUMNS {
        let config = GridConfig::default().with_columns(columns);
        for (preset_name, preset) in PRESETS {
            let layout = preset(columns);
            assert!(
                validate_layout(&layout, &config).is_clean(),
                "{preset_name} preset must start clean at {columns} columns"
            );

            for edit in &EDITS {
                for target in layout.iter().filter(|w| !w.locked) {
                    logger.log_scenario(columns, preset_name, edit.name, layout.len());
                    let new_area = (edit.apply)(target.area, columns);
                    let outcome = reflow_layout(&layout, &target.id, new_area, &config)
                        .expect("matrix edits stay on the grid");
                    let ctx = format!("{columns}/{preset_name}/{}/{}", edit.name, target.id);

                    assert!(outcome.success, "success: {ctx}");
                    logger.log_invariant("success", true, &ctx);

                    for (before, after) in layout.iter().zip(&outcome.widgets) {
                        if before.locked {
                            assert_eq!(before.area, after.area, "locked_fixed: {ctx}");
                            assert!(!outcome.moved.contains(&before.id), "locked_fixed: {ctx}");
                        }
                    }
                    logger.log_invariant("locked_fixed", true, &ctx);

                    let placed = outcome
                        .widgets
                        .iter()
                        .find(|w| w.id == target.id)
                        .expect("target survives");
                    assert_eq!(placed.area.x, new_area.x, "target_geometry: {ctx}");
                    assert_eq!(placed.area.size(), new_area.size(), "target_geometry: {ctx}");
                    logger.log_invariant("target_geometry", true, &ctx);

                    if outcome.converged {
                        assert!(!unlocked_overlap(&outcome.widgets), "no_overlap: {ctx}");
                        assert_eq!(
                            validate_layout(&outcome.widgets, &config)
                                .with_code(LayoutIssueCode::Overlap)
                                .count(),
                            0,
                            "no_overlap: {ctx}"
                        );
                    }
                    logger.log_invariant("no_overlap", outcome.converged, &ctx);

                    let again = reflow_layout(&layout, &target.id, new_area, &config)
                        .expect("matrix edits stay on the grid");
                    assert_eq!(outcome, again, "deterministic: {ctx}");
                    logger.log_invariant("deterministic", true, &ctx);

                    if outcome.iterations > 0 {
                        assert_eq!(
                            compact_layout(&outcome.widgets),
                            outcome.widgets,
                            "compact_stable: {ctx}"
                        );
                    } else {
                        // Nothing collided: only the edited widget changed and
                        // the gaps it left are kept.
                        assert!(outcome.moved.is_empty(), "compact_stable: {ctx}");
                        for (before, after) in layout.iter().zip(&outcome.widgets) {
                            if before.id != target.id {
                                assert_eq!(before, after, "compact_stable: {ctx}");
                            }
                        }
                    }
                    logger.log_invariant("compact_stable", true, &ctx);

                    checks += 6;
                }
            }
        }
    }

    logger.log_complete(true, checks);
    assert!(checks > 0);
}

#[test]
fn reflow_matrix_default_cap_converges_on_presets() {
    let mut logger = MatrixLogger::new("convergence");
    let mut runs = 0;

    for columns in MATRIX_COLUMNS {
        let config = GridConfig::default().with_columns(columns);
        for (preset_name, preset) in PRESETS {
            let layout = preset(columns);
            for target in layout.iter().filter(|w| !w.locked) {
                let grown = target.area.with_size(GridSize::new(target.area.w, target.area.h + 4));
                let outcome =
                    reflow_layout(&layout, &target.id, grown, &config).expect("on-grid edit");
                logger.log_event(
                    "reflow",
                    json!({
                        "columns": columns,
                        "preset": preset_name,
                        "target": target.id.as_str(),
                        "iterations": outcome.iterations,
                        "converged": outcome.converged,
                        "moved": outcome.moved.len(),
                    }),
                );
                assert!(
                    outcome.converged,
                    "{preset_name} at {columns} columns did not settle growing {}",
                    target.id
                );
                runs += 1;
            }
        }
    }

    logger.log_complete(true, runs);
}

#[test]
fn reflow_matrix_moved_ids_match_changed_areas() {
    let config = GridConfig::default();
    let layout = pinned(12);
    let target = WidgetId::new("kpi-a");
    let outcome = reflow_layout(&layout, &target, GridArea::new(0, 1, 12, 3), &config)
        .expect("on-grid edit");

    let changed: Vec<WidgetId> = layout
        .iter()
        .zip(&outcome.widgets)
        .filter(|(before, after)| before.id != target && before.area != after.area)
        .map(|(before, _)| before.id.clone())
        .collect();
    assert_eq!(outcome.moved, changed);
    assert!(outcome.moved.contains(&WidgetId::new("kpi-b")));
    assert!(!outcome.moved.contains(&WidgetId::new("pinned")));
}
