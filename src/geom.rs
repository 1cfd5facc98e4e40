//! Geometry primitives: screen-space vectors and grid cell addresses.
//!
//! `Vec2` is a screen-space point or offset in CSS pixels. `GridCoord` is an
//! integer cell address into the hex grid. The two never mix implicitly —
//! converting between them goes through the camera projection in
//! [`crate::camera`]. `GridCoord` also carries the single authoritative
//! column-parity rule that both the projection and the neighbor tables read.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use rand::Rng;

use crate::util;

/// A point or offset in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The origin / zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components set to `n`.
    #[must_use]
    pub fn splat(n: f64) -> Self {
        Self { x: n, y: n }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }

    /// Heading from `self` to `other` in degrees, via `atan2`.
    ///
    /// Identical points give 0.
    #[must_use]
    pub fn angle_toward(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }

    /// Euclidean distance from `self` to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The point `distance` away from `self` along `angle_deg`.
    #[must_use]
    pub fn point_toward(self, angle_deg: f64, distance: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            x: self.x + distance * rad.cos(),
            y: self.y + distance * rad.sin(),
        }
    }

    /// A random integer-valued point with both components in `min..=max`.
    #[must_use]
    pub fn random(rng: &mut impl Rng, min: i32, max: i32) -> Self {
        Self::random_rect(rng, min, max, min, max)
    }

    /// A random integer-valued point inside the given axis ranges.
    #[must_use]
    pub fn random_rect(rng: &mut impl Rng, xmin: i32, xmax: i32, ymin: i32, ymax: i32) -> Self {
        Self {
            x: f64::from(util::random_integer(rng, xmin, xmax)),
            y: f64::from(util::random_integer(rng, ymin, ymax)),
        }
    }
}

/// An integer cell address in the hex grid: column then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCoord {
    pub col: u32,
    pub row: u32,
}

impl GridCoord {
    #[must_use]
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Whether this cell's column is drawn half a hex lower than its row base.
    ///
    /// Odd columns are shifted down. This is the one place the parity rule
    /// lives; projection and neighbor resolution both call it.
    #[must_use]
    pub fn shifted_down(self) -> bool {
        self.col % 2 == 1
    }
}
