#![forbid(unsafe_code)]

//! Plain-data layout snapshots.
//!
//! A [`LayoutSnapshot`] is what the storage layer saves and loads, and what
//! preset dashboards ship as. The engine never reads or writes storage
//! itself; it only converts between snapshots and widget slices.

use std::collections::BTreeMap;
use std::fmt;

use gridboard_core::Widget;
use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::validate::{LayoutReport, validate_layout};

/// Current layout snapshot schema version.
pub const LAYOUT_SCHEMA_VERSION: u16 = 1;

/// Serialized dashboard layout.
///
/// The extension map is reserved for forward-compatible fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u16,
    pub columns: u16,
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

fn default_schema_version() -> u16 {
    LAYOUT_SCHEMA_VERSION
}

impl LayoutSnapshot {
    /// Snapshot `widgets` laid out on the grid described by `config`.
    pub fn new(config: &GridConfig, widgets: Vec<Widget>) -> Self {
        Self {
            schema_version: LAYOUT_SCHEMA_VERSION,
            columns: config.columns,
            widgets,
            extensions: BTreeMap::new(),
        }
    }

    /// Canonicalize widget ordering by ID for deterministic serialization.
    pub fn canonicalize(&mut self) {
        self.widgets.sort_by(|a, b| a.id.cmp(&b.id));
    }

    /// Deterministic hash over canonical snapshot state.
    ///
    /// Independent of widget order, so two snapshots of the same layout hash
    /// equal however the caller happened to store them.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        snapshot_state_hash(self)
    }

    /// Check schema version and layout invariants.
    pub fn validate(&self) -> Result<LayoutReport, SnapshotError> {
        if self.schema_version != LAYOUT_SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedSchemaVersion {
                version: self.schema_version,
            });
        }
        let config = GridConfig::default().with_columns(self.columns);
        config
            .validate()
            .map_err(|_| SnapshotError::InvalidColumns {
                columns: self.columns,
            })?;
        Ok(validate_layout(&self.widgets, &config))
    }

    /// Accept the snapshot as a working layout.
    ///
    /// Warnings such as overlaps with locked widgets are tolerated; any
    /// error-level finding rejects the snapshot.
    pub fn into_widgets(self) -> Result<Vec<Widget>, SnapshotError> {
        let report = self.validate()?;
        if report.has_errors() {
            return Err(SnapshotError::InvalidLayout { report });
        }
        Ok(self.widgets)
    }
}

/// Reason a snapshot cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    UnsupportedSchemaVersion { version: u16 },
    InvalidColumns { columns: u16 },
    InvalidLayout { report: LayoutReport },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSchemaVersion { version } => write!(
                f,
                "unsupported layout schema version {version} (expected {LAYOUT_SCHEMA_VERSION})"
            ),
            Self::InvalidColumns { columns } => {
                write!(f, "snapshot declares an unusable {columns}-column grid")
            }
            Self::InvalidLayout { report } => write!(
                f,
                "snapshot layout is invalid ({} issues)",
                report.issues.len()
            ),
        }
    }
}

impl std::error::Error for SnapshotError {}

fn snapshot_state_hash(snapshot: &LayoutSnapshot) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0001_0000_01b3;

    fn mix(hash: &mut u64, byte: u8) {
        *hash ^= u64::from(byte);
        *hash = hash.wrapping_mul(PRIME);
    }

    fn mix_bytes(hash: &mut u64, bytes: &[u8]) {
        for byte in bytes {
            mix(hash, *byte);
        }
    }

    fn mix_u16(hash: &mut u64, value: u16) {
        mix_bytes(hash, &value.to_le_bytes());
    }

    fn mix_u64(hash: &mut u64, value: u64) {
        mix_bytes(hash, &value.to_le_bytes());
    }

    fn mix_str(hash: &mut u64, value: &str) {
        mix_u64(hash, value.len() as u64);
        mix_bytes(hash, value.as_bytes());
    }

    let mut canonical = snapshot.clone();
    canonical.canonicalize();

    let mut hash = OFFSET_BASIS;
    mix_u16(&mut hash, canonical.schema_version);
    mix_u16(&mut hash, canonical.columns);
    mix_u64(&mut hash, canonical.extensions.len() as u64);
    for (key, value) in &canonical.extensions {
        mix_str(&mut hash, key);
        mix_str(&mut hash, value);
    }
    mix_u64(&mut hash, canonical.widgets.len() as u64);
    for widget in &canonical.widgets {
        mix_str(&mut hash, widget.id.as_str());
        mix_u16(&mut hash, widget.area.x);
        mix_u16(&mut hash, widget.area.y);
        mix_u16(&mut hash, widget.area.w);
        mix_u16(&mut hash, widget.area.h);
        mix(&mut hash, u8::from(widget.visible));
        mix(&mut hash, u8::from(widget.locked));
    }
    hash
}
