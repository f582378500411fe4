#![forbid(unsafe_code)]

//! Layout validation.
//!
//! The engine is best effort: a reflow blocked by locked widgets, or one that
//! runs out of cascade passes, can return overlapping widgets. Calling UI
//! code runs [`validate_layout`] (or the cheaper
//! [`crate::has_any_collision`]) to find and surface those cases instead of
//! assuming every reflow settles.

use std::collections::BTreeSet;

use gridboard_core::{Widget, WidgetId};
use serde::{Deserialize, Serialize};

use crate::collision::colliding_pairs;
use crate::config::GridConfig;
use crate::error::LayoutError;

/// Severity for one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Stable code for layout findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutIssueCode {
    /// Two unlocked widgets overlap.
    Overlap,
    /// An overlap involving at least one locked widget.
    LockedOverlap,
    OutOfBounds,
    EmptyArea,
    DuplicateWidgetId,
}

/// One finding about a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutIssue {
    pub code: LayoutIssueCode,
    pub severity: IssueSeverity,
    pub widget: WidgetId,
    pub related: Option<WidgetId>,
    pub message: String,
}

/// Structured report over a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub issues: Vec<LayoutIssue>,
}

impl LayoutReport {
    /// True if nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// True if any error-level finding exists.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::Error)
    }

    /// True if any two widgets overlap, locked or not.
    #[must_use]
    pub fn has_overlaps(&self) -> bool {
        self.issues.iter().any(|issue| {
            matches!(
                issue.code,
                LayoutIssueCode::Overlap | LayoutIssueCode::LockedOverlap
            )
        })
    }

    /// Findings with the given code.
    pub fn with_code(&self, code: LayoutIssueCode) -> impl Iterator<Item = &LayoutIssue> + '_ {
        self.issues.iter().filter(move |issue| issue.code == code)
    }
}

/// Inspect a layout and report every invariant it breaks.
///
/// Overlaps between two unlocked widgets are errors; overlaps involving a
/// locked widget are warnings, since the engine is allowed to leave them.
pub fn validate_layout(widgets: &[Widget], config: &GridConfig) -> LayoutReport {
    let mut issues = Vec::new();

    let mut seen = BTreeSet::new();
    for widget in widgets {
        if !seen.insert(widget.id.as_str()) {
            issues.push(LayoutIssue {
                code: LayoutIssueCode::DuplicateWidgetId,
                severity: IssueSeverity::Error,
                widget: widget.id.clone(),
                related: None,
                message: format!("widget id {} appears more than once", widget.id),
            });
        }
        let area = widget.area;
        if area.is_empty() {
            issues.push(LayoutIssue {
                code: LayoutIssueCode::EmptyArea,
                severity: IssueSeverity::Error,
                widget: widget.id.clone(),
                related: None,
                message: format!("area {}x{} covers no cells", area.w, area.h),
            });
        } else if !area.fits_columns(config.columns) {
            issues.push(LayoutIssue {
                code: LayoutIssueCode::OutOfBounds,
                severity: IssueSeverity::Error,
                widget: widget.id.clone(),
                related: None,
                message: format!(
                    "columns {}..{} exceed a {}-column grid",
                    area.x,
                    area.right(),
                    config.columns
                ),
            });
        }
    }

    for (i, j) in colliding_pairs(widgets) {
        let (a, b) = (&widgets[i], &widgets[j]);
        let locked = a.locked || b.locked;
        let (code, severity) = if locked {
            (LayoutIssueCode::LockedOverlap, IssueSeverity::Warning)
        } else {
            (LayoutIssueCode::Overlap, IssueSeverity::Error)
        };
        issues.push(LayoutIssue {
            code,
            severity,
            widget: a.id.clone(),
            related: Some(b.id.clone()),
            message: format!("{} overlaps {}", a.id, b.id),
        });
    }

    LayoutReport { issues }
}

/// Reject layouts where two widgets share an id.
pub(crate) fn ensure_unique_ids(widgets: &[Widget]) -> Result<(), LayoutError> {
    let mut seen = BTreeSet::new();
    for widget in widgets {
        if !seen.insert(widget.id.as_str()) {
            return Err(LayoutError::DuplicateWidgetId {
                id: widget.id.clone(),
            });
        }
    }
    Ok(())
}
