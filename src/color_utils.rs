// File: ./src/color_utils.rs
// Deterministic accent colours for activity and place categories.
// No terminal types in here; the TUI converts the tuples itself.

use crate::model::Category;
use std::hash::{Hash, Hasher};

/// Deterministic (r, g, b) in [0.0, 1.0] for an arbitrary label, such as a
/// place category read from the seed.
pub fn generate_color(tag: &str) -> (f32, f32, f32) {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    tag.hash(&mut hasher);
    let hash = hasher.finish();

    let h = (hash % 360) as f32;

    let hash_s = hash >> 16;
    let hash_l = hash >> 32;

    // Saturation 40-90%, lightness 65-90%: readable on dark backgrounds.
    let s = 0.40 + ((hash_s % 51) as f32 / 100.0);
    let l = 0.65 + ((hash_l % 26) as f32 / 100.0);

    hsl_to_rgb(h, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r1 + m, g1 + m, b1 + m)
}

/// Fixed colours for the activity categories.
pub fn category_rgb(category: Category) -> (f32, f32, f32) {
    match category {
        Category::Transport => (0.55, 0.75, 1.0), // Sky
        Category::Food => (1.0, 0.55, 0.55),      // Rose
        Category::Culture => (0.75, 0.6, 1.0),    // Violet
        Category::Experience => (0.45, 0.9, 0.7), // Emerald
        Category::Other => (0.7, 0.7, 0.75),      // Slate
    }
}

/// Scales [0.0, 1.0] components to bytes.
pub fn to_u8(rgb: (f32, f32, f32)) -> (u8, u8, u8) {
    let conv = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (conv(rgb.0), conv(rgb.1), conv(rgb.2))
}

/// Whether black text reads better than white on this colour.
pub fn is_dark(r: f32, g: f32, b: f32) -> bool {
    let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
    brightness < 0.5
}
