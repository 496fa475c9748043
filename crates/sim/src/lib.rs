//! Black-Hole Gravity Well - Simulation Library
//!
//! Explicit Euler integration of independent stars around a point attractor
//! at the origin:
//! - Inverse-square pull with a softened distance
//! - Acceleration clamp near the softened core
//! - Passive velocity damping every step
//! - Capture-respawn back onto the spawn ring
//!
//! This crate is framework-agnostic - it handles simulation only.
//! Use the `viz` crate for rendering with Macroquad.
//!
//! # Example
//!
//! ```
//! use sim::constants::{DT, STAR_COUNT};
//! use sim::GravitySimulation;
//!
//! let mut rng = rand::thread_rng();
//! let mut sim = GravitySimulation::new(STAR_COUNT, &mut rng);
//!
//! // One simulation step per rendered frame
//! let stats = sim.update(&mut rng, DT);
//! assert_eq!(sim.stars.len(), STAR_COUNT);
//! assert!(stats.captures <= STAR_COUNT);
//! ```

pub mod constants;
pub mod gravity;
pub mod particle;
pub mod spawn;

pub use glam::Vec3;
pub use gravity::{GravityParams, GravitySimulation, StepStats};
pub use particle::{Star, Stars};
