//! Camera state: discrete zoom levels, pan offset, and the grid→screen
//! projection.
//!
//! The camera is mutated only through [`CameraCommand`]s applied by
//! [`Camera::apply`], so every transform is reproducible in tests without
//! any DOM wiring. `ZoomLevel` is a pure state tag; the pixel radius each
//! level maps to lives in [`crate::consts`].

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{CORNER_STEP, SQRT_3, ZOOM_RADIUS_IN, ZOOM_RADIUS_NORMAL, ZOOM_RADIUS_OUT};
use crate::geom::{GridCoord, Vec2};
use crate::grid::WorldSize;

/// Discrete zoom setting. Scrolling steps one level at a time and saturates
/// at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomLevel {
    /// Closest view; the starting level.
    #[default]
    In,
    Normal,
    /// Widest view.
    Out,
}

impl ZoomLevel {
    /// The hex radius in pixels this level projects at.
    #[must_use]
    pub fn radius(self) -> f64 {
        match self {
            Self::In => ZOOM_RADIUS_IN,
            Self::Normal => ZOOM_RADIUS_NORMAL,
            Self::Out => ZOOM_RADIUS_OUT,
        }
    }

    /// One step toward `Out`; saturates there.
    #[must_use]
    pub fn stepped_out(self) -> Self {
        match self {
            Self::In => Self::Normal,
            Self::Normal | Self::Out => Self::Out,
        }
    }

    /// One step toward `In`; saturates there.
    #[must_use]
    pub fn stepped_in(self) -> Self {
        match self {
            Self::Out => Self::Normal,
            Self::Normal | Self::In => Self::In,
        }
    }
}

/// Which way a zoom step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// A camera mutation produced by input handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate the view by a screen-space delta.
    PanBy(Vec2),
    /// Step the zoom level, keeping the grid point under `anchor` fixed.
    ZoomStep { direction: ZoomDirection, anchor: Vec2 },
}

/// Pan offset plus zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub level: ZoomLevel,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset: Vec2::ZERO, level: ZoomLevel::default() }
    }
}

impl Camera {
    /// A camera whose offset centers a world of `size` in `viewport`.
    #[must_use]
    pub fn centered_on(size: WorldSize, viewport: Vec2) -> Self {
        let base = Self::default();
        Self {
            offset: Vec2::new(
                viewport.x / 2.0 - f64::from(size.width()) / 2.0 * base.hex_width(),
                viewport.y / 2.0 - f64::from(size.height()) / 2.0 * base.hex_height(),
            ),
            ..base
        }
    }

    /// The active hex radius in pixels.
    #[must_use]
    pub fn radius(self) -> f64 {
        self.level.radius()
    }

    /// Horizontal distance between adjacent column centers:
    /// `radius * (1 + cos 60°)`.
    #[must_use]
    pub fn hex_width(self) -> f64 {
        self.radius() * 1.5
    }

    /// Vertical distance between adjacent row centers:
    /// `radius * 2 sin 60°`.
    #[must_use]
    pub fn hex_height(self) -> f64 {
        self.radius() * SQRT_3
    }

    /// Screen center of the hex at `coord` under the current pan and zoom.
    #[must_use]
    pub fn hex_center(self, coord: GridCoord) -> Vec2 {
        let r = self.radius();
        let parity_shift = if coord.shifted_down() { self.hex_height() * 0.5 } else { 0.0 };
        Vec2::new(
            self.offset.x + r + f64::from(coord.col) * self.hex_width(),
            self.offset.y + r * (SQRT_3 / 2.0)
                + f64::from(coord.row) * self.hex_height()
                + parity_shift,
        )
    }

    /// The grid-space position of a screen point, in fractional columns and
    /// rows measured from the camera offset.
    #[must_use]
    pub fn grid_position(self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x - self.offset.x) / self.hex_width(),
            (screen.y - self.offset.y) / self.hex_height(),
        )
    }

    /// Apply one command. The only mutation path into the camera.
    pub fn apply(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::PanBy(delta) => self.offset = self.offset.add(delta),
            CameraCommand::ZoomStep { direction, anchor } => self.zoom_step(direction, anchor),
        }
    }

    /// Step the zoom level and re-solve the offset so the grid-space point
    /// under `anchor` stays under it.
    fn zoom_step(&mut self, direction: ZoomDirection, anchor: Vec2) {
        let before = self.grid_position(anchor);

        self.level = match direction {
            ZoomDirection::In => self.level.stepped_in(),
            ZoomDirection::Out => self.level.stepped_out(),
        };

        self.offset = Vec2::new(
            anchor.x - before.x * self.hex_width(),
            anchor.y - before.y * self.hex_height(),
        );
    }
}

/// The six corner points of the hex with the given screen `center`, in edge
/// order: corner `i` sits at angle `60° · i`.
#[must_use]
pub fn hex_corners(center: Vec2, radius: f64) -> [Vec2; 6] {
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)] // i < 6
        let angle = CORNER_STEP * i as f64;
        Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    })
}
