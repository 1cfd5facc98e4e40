//! Random-number helpers shared by geometry and world generation.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

use rand::Rng;

/// A uniformly random integer in `min..=max`.
#[must_use]
pub fn random_integer(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    rng.gen_range(min..=max)
}

/// A uniformly random heading in whole degrees, `0..=360`.
#[must_use]
pub fn random_orientation(rng: &mut impl Rng) -> i32 {
    random_integer(rng, 0, 360)
}
