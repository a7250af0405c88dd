// File: crates/snap-core/src/config.rs
// Summary: Grid configuration value type with validation and clamping.

use thiserror::Error;

/// Smallest cell size `normalized` will clamp to. Keeps every operation
/// finite when a caller hands us a zero or negative spacing.
pub const MIN_CELL_SIZE: f64 = 1e-9;

/// Fewer than 4 sectors makes a polar grid degenerate (a single line or a
/// half-plane split), so both validation and clamping draw the line here.
pub const MIN_ANGULAR_DIVISIONS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridKind {
    Cartesian,
    Polar,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number")]
    CellSize,
    #[error("angular divisions must be at least {MIN_ANGULAR_DIVISIONS}")]
    AngularDivisions,
}

/// Immutable grid description shared by the snapper and the grid builders.
///
/// `angular_divisions` only matters for `GridKind::Polar` but is kept valid
/// for both kinds so a config can switch kind without revalidation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub kind: GridKind,
    /// Spacing between adjacent lines (Cartesian) or rings (polar).
    pub cell_size: f64,
    /// Number of equal angular sectors in a polar grid.
    pub angular_divisions: u32,
}

impl GridConfig {
    /// Validated constructor.
    pub fn new(kind: GridKind, cell_size: f64, angular_divisions: u32) -> Result<Self, ConfigError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ConfigError::CellSize);
        }
        if angular_divisions < MIN_ANGULAR_DIVISIONS {
            return Err(ConfigError::AngularDivisions);
        }
        Ok(Self { kind, cell_size, angular_divisions })
    }

    pub fn cartesian(cell_size: f64) -> Result<Self, ConfigError> {
        Self::new(GridKind::Cartesian, cell_size, MIN_ANGULAR_DIVISIONS)
    }

    pub fn polar(cell_size: f64, angular_divisions: u32) -> Result<Self, ConfigError> {
        Self::new(GridKind::Polar, cell_size, angular_divisions)
    }

    /// Copy of this config with out-of-range fields clamped into range.
    ///
    /// All core operations normalize their input first, so they stay total
    /// even when fields were mutated past `new`'s checks.
    pub fn normalized(&self) -> Self {
        let cell_size = if self.cell_size.is_finite() {
            self.cell_size.max(MIN_CELL_SIZE)
        } else {
            1.0
        };
        Self {
            kind: self.kind,
            cell_size,
            angular_divisions: self.angular_divisions.max(MIN_ANGULAR_DIVISIONS),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { kind: GridKind::Cartesian, cell_size: 1.0, angular_divisions: 24 }
    }
}
