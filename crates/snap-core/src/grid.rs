// File: crates/snap-core/src/grid.rs
// Summary: Grid geometry builders: Cartesian line sets and polar ring/spoke sets.

use std::f64::consts::TAU;

use crate::config::{GridConfig, GridKind};
use crate::geometry::{Ring, Segment};
use crate::types::Point3;

/// Rings and spokes making up a visible polar grid.
#[derive(Clone, Debug, Default)]
pub struct PolarGrid {
    pub rings: Vec<Ring>,
    pub spokes: Vec<Segment>,
}

/// Primitives for either grid kind, as produced by [`visible_grid`].
#[derive(Clone, Debug, Default)]
pub struct GridGeometry {
    pub segments: Vec<Segment>,
    pub rings: Vec<Ring>,
}

/// Build the Cartesian grid lines visible out to `extent` world units.
///
/// The line count is rounded from `extent * 2 / cell_size` and forced odd,
/// so a line always passes through the origin and the grid is centered on
/// (0, 0). Each step emits one line parallel to Z and one parallel to X;
/// both axes span the same `[-half, +half]` cells, making the grid square.
pub fn cartesian_lines(config: &GridConfig, extent: f64) -> Vec<Segment> {
    let cell = config.normalized().cell_size;
    let extent = extent.max(0.0);

    let mut line_count = (extent * 2.0 / cell).round() as i64;
    if line_count % 2 == 0 {
        line_count += 1;
    }
    let half = line_count / 2;
    let reach = half as f64 * cell;

    let mut lines = Vec::with_capacity(line_count as usize * 2);
    for i in 0..line_count {
        let coord = (i - half) as f64 * cell;

        lines.push(Segment::new(
            Point3::new(coord, 0.0, -reach),
            Point3::new(coord, 0.0, reach),
        ));
        lines.push(Segment::new(
            Point3::new(-reach, 0.0, coord),
            Point3::new(reach, 0.0, coord),
        ));
    }
    lines
}

/// Build the polar grid visible out to `extent` world units.
///
/// Emits `round(extent / cell_size) - 1` concentric rings (no zero-radius
/// ring) around the origin with the up axis as their normal, and one spoke
/// per angular division from the origin to the outermost ring, starting at
/// angle 0.
pub fn polar_grid(config: &GridConfig, extent: f64) -> PolarGrid {
    let config = config.normalized();
    let cell = config.cell_size;
    let extent = extent.max(0.0);

    let ring_count = (extent / cell).round() as i64;
    let outer_radius = (ring_count - 1).max(0) as f64 * cell;

    let mut rings = Vec::with_capacity(ring_count.max(1) as usize - 1);
    for i in 1..ring_count {
        rings.push(Ring::new(Point3::ZERO, Point3::UP, i as f64 * cell));
    }

    let divisions = config.angular_divisions;
    let mut spokes = Vec::with_capacity(divisions as usize);
    for i in 0..divisions {
        let turn = f64::from(i) / f64::from(divisions);
        let angle = turn * TAU;
        let dir = Point3::new(angle.cos(), 0.0, angle.sin());
        spokes.push(Segment::new(Point3::ZERO, dir.scaled(outer_radius)));
    }

    PolarGrid { rings, spokes }
}

/// Build the primitives for `config`'s grid kind in one call, for hosts that
/// draw segments and rings through the same path.
pub fn visible_grid(config: &GridConfig, extent: f64) -> GridGeometry {
    match config.kind {
        GridKind::Cartesian => GridGeometry { segments: cartesian_lines(config, extent), rings: Vec::new() },
        GridKind::Polar => {
            let PolarGrid { rings, spokes } = polar_grid(config, extent);
            GridGeometry { segments: spokes, rings }
        }
    }
}
