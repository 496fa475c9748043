//! Physical constants for the gravity well.
//!
//! All of these are nominal, unitless tuning values. `DT` is a fixed step
//! applied once per rendered frame, not derived from wall-clock time.

/// Gravitational strength of the central attractor
pub const G: f32 = 4.0;

/// Fixed integration time step (one step per rendered frame)
pub const DT: f32 = 0.015;

/// Per-step velocity damping factor (passive energy dissipation)
pub const DAMPING: f32 = 0.9995;

/// Softened distance below which a star is consumed and respawned
pub const CAPTURE_RADIUS: f32 = 1.0;

/// Additive distance softening - keeps the force law finite at the origin
pub const SOFTENING: f32 = 0.05;

/// Upper bound on acceleration magnitude near the softened core
pub const MAX_ACCELERATION: f32 = 12.0;

/// Radius of the ring stars spawn on
pub const SPAWN_RADIUS: f32 = 18.0;

/// Half-extent of the vertical jitter applied to ring spawns
pub const SPAWN_HEIGHT: f32 = 50.0 / 30.0;

/// Tangential speed of freshly initialized stars
pub const INITIAL_SPEED: f32 = 0.25;

/// Tangential speed of respawned stars
pub const RESPAWN_SPEED: f32 = 0.35;

/// Number of stars in the simulation, fixed for the process lifetime
pub const STAR_COUNT: usize = 800;
