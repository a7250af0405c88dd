// File: crates/snap-examples/src/bin/grids.rs
// Summary: Minimal example that renders a Cartesian and a polar grid to PNG.

use snap_core::{GridConfig, DRAW_EXTENT};
use snap_render_skia::{RenderOptions, Scene};

fn main() {
    let opts = RenderOptions::default();
    let out_dir = std::path::PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).unwrap();

    let cartesian = Scene::new(GridConfig::default(), DRAW_EXTENT);
    let out = out_dir.join("example_grid_cartesian.png");
    cartesian.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());

    let polar = Scene::new(GridConfig::polar(1.0, 24).expect("valid config"), DRAW_EXTENT);
    let out = out_dir.join("example_grid_polar.png");
    polar.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
