// File: crates/snap-core/src/tool.rs
// Summary: Host-integration traits (config persistence, selection) and the SnapTool facade.

use std::cell::RefCell;

use crate::config::GridConfig;
use crate::grid::{self, GridGeometry, PolarGrid};
use crate::snap::snap;
use crate::types::Point3;

/// Persistence contract for the three config scalars. The host decides the
/// backing store (editor preferences, a settings file); the tool only calls
/// `load` at activation and `store` at deactivation.
pub trait ConfigStore {
    fn load(&self) -> Option<GridConfig>;
    fn store(&self, config: &GridConfig);
}

/// World positions of the currently selected objects. Writing snapped
/// positions back into object transforms, and recording that mutation for
/// undo, stay on the host side.
pub trait SelectionSource {
    fn positions(&self) -> Vec<Point3>;
}

/// In-memory store for tests and demos.
#[derive(Default)]
pub struct MemoryConfigStore {
    saved: RefCell<Option<GridConfig>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GridConfig) -> Self {
        Self { saved: RefCell::new(Some(config)) }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Option<GridConfig> {
        *self.saved.borrow()
    }

    fn store(&self, config: &GridConfig) {
        *self.saved.borrow_mut() = Some(*config);
    }
}

/// The tool facade a host embeds: holds the active config and forwards to
/// the pure snapping and grid builders. Holds no global state; lifecycle is
/// explicit through `activate`/`deactivate` against an injected store.
pub struct SnapTool {
    pub config: GridConfig,
}

impl SnapTool {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Restore the last stored config, or defaults when the store is empty.
    pub fn activate(store: &dyn ConfigStore) -> Self {
        Self { config: store.load().unwrap_or_default() }
    }

    /// Persist the current config back into the injected store.
    pub fn deactivate(&self, store: &dyn ConfigStore) {
        store.store(&self.config);
    }

    pub fn snap_point(&self, p: Point3) -> Point3 {
        snap(&self.config, p)
    }

    /// Snap every selected position, returning (original, snapped) pairs.
    pub fn snap_selection(&self, selection: &dyn SelectionSource) -> Vec<(Point3, Point3)> {
        selection
            .positions()
            .into_iter()
            .map(|p| (p, snap(&self.config, p)))
            .collect()
    }

    pub fn cartesian_lines(&self, extent: f64) -> Vec<crate::geometry::Segment> {
        grid::cartesian_lines(&self.config, extent)
    }

    pub fn polar_grid(&self, extent: f64) -> PolarGrid {
        grid::polar_grid(&self.config, extent)
    }

    /// Primitives for the active grid kind; what a draw callback hands to
    /// the host's line/disc primitives once per redraw.
    pub fn visible_grid(&self, extent: f64) -> GridGeometry {
        grid::visible_grid(&self.config, extent)
    }
}
