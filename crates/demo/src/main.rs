// File: crates/demo/src/main.rs
// Summary: Demo loads a point cloud CSV and renders snapped results on Cartesian and polar grids.

use anyhow::{Context, Result};
use snap_core::{GridConfig, Point3, SelectionSource, SnapTool, DRAW_EXTENT};
use snap_render_skia::{RenderOptions, Scene};
use std::path::{Path, PathBuf};

/// Stand-in for the host's selection: the points loaded from disk.
struct LoadedSelection(Vec<Point3>);

impl SelectionSource for LoadedSelection {
    fn positions(&self) -> Vec<Point3> {
        self.0.clone()
    }
}

fn main() -> Result<()> {
    let (selection, label) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let points = load_points_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} points from {}", points.len(), path.display());
            if points.is_empty() {
                anyhow::bail!("no points loaded — check headers/delimiter.");
            }
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("points").to_string();
            (LoadedSelection(points), stem)
        }
        None => {
            println!("No input file given; using built-in sample points.");
            (LoadedSelection(sample_points()), "sample".to_string())
        }
    };

    let configs = [
        ("cartesian", GridConfig::default()),
        ("polar", GridConfig::polar(1.0, 24).expect("valid polar config")),
    ];

    let opts = RenderOptions::default();
    for (name, config) in configs {
        let tool = SnapTool::new(config);
        let pairs = tool.snap_selection(&selection);

        println!("\n{name} grid (cell {}):", config.cell_size);
        for (original, snapped) in pairs.iter().take(8) {
            println!(
                "  ({:7.3}, {:7.3}, {:7.3}) -> ({:7.3}, {:7.3}, {:7.3})",
                original.x, original.y, original.z, snapped.x, snapped.y, snapped.z
            );
        }
        if pairs.len() > 8 {
            println!("  ... {} more", pairs.len() - 8);
        }

        let mut scene = Scene::new(config, DRAW_EXTENT);
        scene.add_snap_pairs(&pairs);

        let out = out_name_with(&label, name);
        scene.render_to_png(&opts, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Produce output file name like target/out/snap_<stem>_<suffix>.png
fn out_name_with(stem: &str, suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("snap_{}_{}.png", stem, suffix));
    out
}

/// Load world positions from CSV with tolerant x/y/z header matching.
fn load_points_csv(path: &Path) -> Result<Vec<Point3>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["x", "pos_x", "px"]);
    let i_y = idx(&["y", "pos_y", "py", "height"]);
    let i_z = idx(&["z", "pos_z", "pz"]);

    if i_x.is_none() || i_z.is_none() {
        println!("Warning: could not find x/z columns; rows will be skipped.");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };

        let (x, z) = match (parse(i_x), parse(i_z)) {
            (Some(x), Some(z)) => (x, z),
            _ => continue,
        };
        // Y is optional: a flat point set snaps the same either way.
        let y = parse(i_y).unwrap_or(0.0);
        out.push(Point3::new(x, y, z));
    }
    Ok(out)
}

/// Deterministic point cloud spread over the default extent.
fn sample_points() -> Vec<Point3> {
    let mut points = Vec::new();
    for i in 0..24 {
        let t = i as f64 * 0.7;
        points.push(Point3::new(
            t.cos() * (1.0 + 0.55 * t),
            (i % 3) as f64,
            t.sin() * (1.0 + 0.55 * t),
        ));
    }
    points
}
