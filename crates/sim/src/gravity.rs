//! Inverse-square gravity integrator.
//!
//! One explicit Euler step per rendered frame:
//! 1. Capture check against the softened distance
//! 2. Inverse-square acceleration toward the origin
//! 3. Acceleration clamp near the softened core
//! 4. Velocity integration + damping
//! 5. Position integration
//!
//! Captured stars are teleported back onto the spawn ring rather than
//! removed, so the store's cardinality never changes.

use rand::Rng;
use rayon::prelude::*;

use crate::constants;
use crate::particle::{Star, Stars};
use crate::spawn;

/// Integrator tunables. `Default` matches [`crate::constants`].
#[derive(Clone, Copy, Debug)]
pub struct GravityParams {
    /// Gravitational strength of the central attractor
    pub g: f32,
    /// Additive softening on the distance to the attractor
    pub softening: f32,
    /// Softened distance below which a star is consumed
    pub capture_radius: f32,
    /// Upper bound on acceleration magnitude
    pub max_acceleration: f32,
    /// Per-step velocity damping factor
    pub damping: f32,
    /// Radius of the respawn ring
    pub respawn_radius: f32,
    /// Tangential speed given to respawned stars
    pub respawn_speed: f32,
}

impl Default for GravityParams {
    fn default() -> Self {
        Self {
            g: constants::G,
            softening: constants::SOFTENING,
            capture_radius: constants::CAPTURE_RADIUS,
            max_acceleration: constants::MAX_ACCELERATION,
            damping: constants::DAMPING,
            respawn_radius: constants::SPAWN_RADIUS,
            respawn_speed: constants::RESPAWN_SPEED,
        }
    }
}

/// Observable counters for one integrator step.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepStats {
    /// Stars that crossed the capture radius this step
    pub captures: usize,
}

/// Gravity well simulation state.
pub struct GravitySimulation {
    /// All stars in the simulation
    pub stars: Stars,
    /// Integrator tunables (mutable for tests and experiments)
    pub params: GravityParams,
    /// Frames simulated so far
    pub frame: u32,
}

impl GravitySimulation {
    /// Create a simulation with `star_count` stars on the spawn ring.
    pub fn new(star_count: usize, rng: &mut impl Rng) -> Self {
        let mut stars = Stars::with_capacity(star_count);
        for _ in 0..star_count {
            stars.list.push(spawn::ring_star(
                rng,
                constants::SPAWN_RADIUS,
                constants::INITIAL_SPEED,
            ));
        }
        Self {
            stars,
            params: GravityParams::default(),
            frame: 0,
        }
    }

    /// Advance every star by exactly one step.
    ///
    /// The force/integration pass is independent per star and runs in
    /// parallel. Respawns draw from the caller's RNG, so captures are
    /// collected as indices and applied serially afterwards - one draw
    /// site, deterministic under a seeded generator.
    pub fn update(&mut self, rng: &mut impl Rng, dt: f32) -> StepStats {
        self.frame = self.frame.wrapping_add(1);
        let params = self.params;

        let captured: Vec<usize> = self
            .stars
            .list
            .par_iter_mut()
            .enumerate()
            .filter_map(|(i, star)| step_star(star, &params, dt).then_some(i))
            .collect();

        for &i in &captured {
            self.stars.list[i] =
                spawn::ring_star(rng, params.respawn_radius, params.respawn_speed);
        }

        StepStats {
            captures: captured.len(),
        }
    }
}

/// Advance a single star. Returns true if it crossed the capture radius,
/// leaving its state untouched for the caller to respawn.
fn step_star(star: &mut Star, params: &GravityParams, dt: f32) -> bool {
    let dir = -star.position;
    let dist = dir.length() + params.softening;

    if dist < params.capture_radius {
        return true;
    }

    // Inverse-square pull toward the origin. The capture check above keeps
    // the direction well-defined: anything close enough to degenerate has
    // already been consumed.
    let mut acc = dir.normalize() * (params.g / (dist * dist));

    if acc.length() > params.max_acceleration {
        acc = acc.normalize() * params.max_acceleration;
    }

    star.velocity += acc * dt;
    star.velocity *= params.damping;
    star.position += star.velocity * dt;

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_single_step_closed_form() {
        // Star at (2,0,0) at rest, damping off:
        //   dist = 2.05, |acc| = 4/2.05^2, direction (-1,0,0)
        let mut star = Star::at(Vec3::new(2.0, 0.0, 0.0));
        let params = GravityParams {
            damping: 1.0,
            ..GravityParams::default()
        };

        let captured = step_star(&mut star, &params, constants::DT);
        assert!(!captured);

        let expected_acc = 4.0 / (2.05 * 2.05);
        let expected_vel = -expected_acc * constants::DT;
        assert!(
            (star.velocity.x - expected_vel).abs() < 1e-5,
            "Velocity should match closed form. Got {}, expected {}",
            star.velocity.x,
            expected_vel
        );
        assert_eq!(star.velocity.y, 0.0);
        assert_eq!(star.velocity.z, 0.0);

        let expected_pos = 2.0 + expected_vel * constants::DT;
        assert!(
            (star.position.x - expected_pos).abs() < 1e-5,
            "Position should match closed form. Got {}, expected {}",
            star.position.x,
            expected_pos
        );
    }

    #[test]
    fn test_acceleration_clamp_preserves_direction() {
        // G large enough that the raw force exceeds the clamp at dist 2.05
        let mut star = Star::at(Vec3::new(2.0, 0.0, 0.0));
        let params = GravityParams {
            g: 1000.0,
            damping: 1.0,
            ..GravityParams::default()
        };

        step_star(&mut star, &params, constants::DT);

        // With damping off, velocity after one step from rest is acc * dt
        let acc = star.velocity / constants::DT;
        assert!(
            (acc.length() - params.max_acceleration).abs() < 1e-3,
            "Clamped acceleration should sit exactly on the bound. Got {}",
            acc.length()
        );
        assert!(acc.x < 0.0, "Clamp must preserve direction toward the origin");
    }

    #[test]
    fn test_capture_leaves_state_for_respawn() {
        let mut star = Star::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(99.0, 0.0, 0.0));
        let params = GravityParams::default();

        let captured = step_star(&mut star, &params, constants::DT);

        assert!(captured, "dist 0.55 < 1.0 must capture regardless of velocity");
        assert_eq!(star.position, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(star.velocity, Vec3::new(99.0, 0.0, 0.0));
    }

    #[test]
    fn test_softening_counts_toward_capture() {
        // |pos| = 0.96 -> softened dist 1.01, just outside the boundary
        let mut outside = Star::at(Vec3::new(0.96, 0.0, 0.0));
        assert!(!step_star(&mut outside, &GravityParams::default(), constants::DT));

        // |pos| = 0.94 -> softened dist 0.99, inside
        let mut inside = Star::at(Vec3::new(0.94, 0.0, 0.0));
        assert!(step_star(&mut inside, &GravityParams::default(), constants::DT));
    }
}
