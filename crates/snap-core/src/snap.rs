// File: crates/snap-core/src/snap.rs
// Summary: Map an arbitrary world point onto the nearest point of the configured grid.

use std::f64::consts::TAU;

use crate::config::{GridConfig, GridKind};
use crate::round::round_to_step;
use crate::types::Point3;

/// Snap `p` to the nearest point on the grid described by `config`.
///
/// The grid lies in the X-Z plane; `p.y` is returned unchanged for both
/// grid kinds. Total over finite inputs: the config is normalized first,
/// so degenerate spacings and division counts cannot divide by zero.
///
/// Polar snapping rounds the radius and the angle independently rather
/// than searching grid intersections, which keeps it O(1) and idempotent:
/// a snapped point re-snaps to itself.
pub fn snap(config: &GridConfig, p: Point3) -> Point3 {
    let config = config.normalized();
    match config.kind {
        GridKind::Cartesian => Point3::new(
            round_to_step(p.x, config.cell_size),
            p.y,
            round_to_step(p.z, config.cell_size),
        ),
        GridKind::Polar => {
            let radius = p.x.hypot(p.z);
            let radius_snapped = round_to_step(radius, config.cell_size);

            let angle = p.z.atan2(p.x);
            let turns = angle / TAU;
            let turns_snapped = round_to_step(turns, 1.0 / f64::from(config.angular_divisions));
            let angle_snapped = turns_snapped * TAU;

            Point3::new(
                angle_snapped.cos() * radius_snapped,
                p.y,
                angle_snapped.sin() * radius_snapped,
            )
        }
    }
}
