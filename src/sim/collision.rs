//! Collision and sampling helpers
//!
//! Everything in the game is a circle, so collision is just center distance
//! against the sum of radii.

use glam::Vec2;
use rand::Rng;

/// True if two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Uniform sample in `[min, max)`
///
/// A degenerate range (`max <= min`) yields `min` instead of panicking.
pub fn random_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
