//! Shared numeric constants for the hexboard crate.

use std::num::NonZeroU32;

// ── Math ────────────────────────────────────────────────────────

/// √3, the height of a unit-radius pointy hexagon in radii.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// π / 3 (60°) — angular step between adjacent hexagon corners.
pub const CORNER_STEP: f64 = std::f64::consts::FRAC_PI_3;

// ── Zoom ────────────────────────────────────────────────────────

/// Hex radius in pixels at [`crate::camera::ZoomLevel::In`].
pub const ZOOM_RADIUS_IN: f64 = 48.0;

/// Hex radius in pixels at [`crate::camera::ZoomLevel::Normal`].
pub const ZOOM_RADIUS_NORMAL: f64 = 24.0;

/// Hex radius in pixels at [`crate::camera::ZoomLevel::Out`].
pub const ZOOM_RADIUS_OUT: f64 = 12.0;

// ── World ───────────────────────────────────────────────────────

/// Default world width in columns when the host supplies no config.
pub const DEFAULT_WORLD_COLS: NonZeroU32 = NonZeroU32::new(20).unwrap();

/// Default world height in rows when the host supplies no config.
pub const DEFAULT_WORLD_ROWS: NonZeroU32 = NonZeroU32::new(20).unwrap();

/// Fixed six-player fill palette, indexed by player id.
pub const PLAYER_COLORS: [&str; 6] = [
    "#D94B4B", // red
    "#4B8FD9", // blue
    "#58B368", // green
    "#E0C25A", // yellow
    "#9B6BD9", // purple
    "#E08A4B", // orange
];

// ── Background pattern ──────────────────────────────────────────

/// Background fill behind the grid.
pub const BACKGROUND_FILL: &str = "#1395A1";

/// Side length in pixels of the square wave-motif pattern tile.
pub const PATTERN_SIZE: f64 = 50.0;

/// Vertical positions of the two wave motifs inside the pattern tile.
pub const PATTERN_WAVE_OFFSETS: [f64; 2] = [5.0, 30.0];
