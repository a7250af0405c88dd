// File: crates/snap-render-skia/src/theme.rs
// Summary: Light/Dark theming for grid rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis: skia::Color,
    pub marker_source: skia::Color,
    pub marker_snapped: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 70, 70, 78),
            axis: skia::Color::from_argb(255, 180, 180, 190),
            marker_source: skia::Color::from_argb(255, 255, 230, 70),
            marker_snapped: skia::Color::from_argb(255, 40, 200, 120),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 210, 210, 218),
            axis: skia::Color::from_argb(255, 60, 60, 70),
            marker_source: skia::Color::from_argb(255, 200, 140, 20),
            marker_snapped: skia::Color::from_argb(255, 20, 160, 90),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
