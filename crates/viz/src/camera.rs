//! Orbiting scene camera.
//!
//! The camera circles the attractor at a fixed radius and height, always
//! looking at the origin. The orbit angle is advanced once per frame by the
//! main loop.

use macroquad::prelude::*;

/// Orbit radius around the attractor
pub const ORBIT_RADIUS: f32 = 12.0;
/// Camera height above the disk plane
pub const ORBIT_HEIGHT: f32 = 6.0;
/// Orbit advance per frame, degrees
pub const ORBIT_RATE: f32 = 0.15;
/// Starting orbit angle, degrees
const START_ANGLE: f32 = 20.0;

/// Camera circling the origin at fixed radius and height.
pub struct OrbitCamera {
    /// Orbit angle in degrees, monotonically increasing
    pub angle: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self { angle: START_ANGLE }
    }

    /// World position for the current orbit angle.
    pub fn position(&self) -> Vec3 {
        let a = self.angle.to_radians();
        vec3(ORBIT_RADIUS * a.sin(), ORBIT_HEIGHT, ORBIT_RADIUS * a.cos())
    }

    /// Advance the orbit by one frame.
    pub fn advance(&mut self) {
        self.angle += ORBIT_RATE;
    }

    /// Macroquad camera looking at the origin, +Y up.
    pub fn camera(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            target: vec3(0.0, 0.0, 0.0),
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        }
    }

    /// Camera-space right and up axes, for billboarding star quads.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (-self.position()).normalize();
        let right = forward.cross(vec3(0.0, 1.0, 0.0)).normalize();
        let up = right.cross(forward);
        (right, up)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
