//! Ring spawn sampling.
//!
//! Stars are born on a horizontal ring around the attractor with a small
//! vertical jitter and a tangential velocity, so they start out orbiting
//! rather than falling straight in. All randomness comes from the caller's
//! generator, which keeps spawning deterministic under a seeded RNG.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::SPAWN_HEIGHT;
use crate::particle::Star;

/// Sample a position on the spawn ring of the given radius.
///
/// Azimuth is uniform over [0, 2pi); height is uniform over the jitter band.
pub fn ring_position(rng: &mut impl Rng, radius: f32) -> Vec3 {
    let azimuth = rng.gen_range(0.0..TAU);
    let height = rng.gen_range(-SPAWN_HEIGHT..SPAWN_HEIGHT);
    Vec3::new(azimuth.cos() * radius, height, azimuth.sin() * radius)
}

/// Unit tangent to the ring at `position`, in the horizontal plane, scaled
/// to `speed`. Degenerate only if `position` sits on the vertical axis,
/// which ring positions never do.
pub fn tangential_velocity(position: Vec3, speed: f32) -> Vec3 {
    Vec3::new(-position.z, 0.0, position.x).normalize() * speed
}

/// Sample a fresh orbiting star on the ring.
pub fn ring_star(rng: &mut impl Rng, radius: f32, speed: f32) -> Star {
    let position = ring_position(rng, radius);
    Star::new(position, tangential_velocity(position, speed))
}
