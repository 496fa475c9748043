//! Star particles orbiting the attractor.
//!
//! Each star has a continuous position and velocity. Stars never interact
//! with each other; the integrator advances them independently.

use glam::Vec3;

/// A single star in the gravity well.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    /// World position
    pub position: Vec3,
    /// Current velocity
    pub velocity: Vec3,
}

impl Star {
    /// Create a new star at the given position with initial velocity.
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Create a stationary star at the given position.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }
}

impl Default for Star {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}

/// Collection of stars.
///
/// Cardinality is fixed after initialization: capture teleports a star back
/// onto the spawn ring in place, it never removes one.
pub struct Stars {
    pub list: Vec<Star>,
}

impl Stars {
    /// Create an empty star collection.
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: Vec::with_capacity(capacity),
        }
    }

    /// Add a star with the given position and velocity.
    pub fn spawn(&mut self, position: Vec3, velocity: Vec3) {
        self.list.push(Star::new(position, velocity));
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Read-only iteration for rendering.
    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.list.iter()
    }
}

impl Default for Stars {
    fn default() -> Self {
        Self::new()
    }
}
