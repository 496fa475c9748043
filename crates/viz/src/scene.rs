//! Immediate-mode scene drawing.
//!
//! Warped ground grid, accretion disk, the hole itself, and the star field.
//! Mesh builders are pure functions over vertex/index buffers so they stay
//! testable without a window; the `draw_*` wrappers submit them.

use macroquad::prelude::*;
use sim::Stars;

use crate::camera::OrbitCamera;

/// Half-extent of the ground grid, in grid steps
const GRID_SIZE: i32 = 20;
/// Grid line spacing
const GRID_STEP: f32 = 1.0;
/// Grid line color, 40% gray
const GRID_COLOR: Color = Color::new(0.4, 0.4, 0.4, 1.0);

/// Accretion disk inner radius
pub const DISK_INNER: f32 = 1.5;
/// Accretion disk outer radius
pub const DISK_OUTER: f32 = 4.0;
/// Vertical half-thickness of the disk slab
const DISK_HALF_THICKNESS: f32 = 0.05;
/// Radial subdivisions of the disk mesh
const DISK_RINGS: usize = 16;
/// Angular subdivisions of the disk mesh
const DISK_SEGMENTS: usize = 96;

/// Half-size of one star billboard, world units
const STAR_SIZE: f32 = 0.05;

/// Decorative gravity-well sag of the ground grid at `(x, z)`.
/// Render-only; never fed back into the physics.
pub fn well_depth(x: f32, z: f32) -> f32 {
    -5.0 / (x * x + z * z + 1.0).sqrt()
}

/// Draw the deformed ground-plane grid.
pub fn draw_grid() {
    for gi in -GRID_SIZE..=GRID_SIZE {
        for gj in -GRID_SIZE..=GRID_SIZE {
            let i = gi as f32 * GRID_STEP;
            let j = gj as f32 * GRID_STEP;
            let y = well_depth(i, j);

            draw_line_3d(
                vec3(i, y, j),
                vec3(i + GRID_STEP, well_depth(i + GRID_STEP, j), j),
                GRID_COLOR,
            );
            draw_line_3d(
                vec3(i, y, j),
                vec3(i, well_depth(i, j + GRID_STEP), j + GRID_STEP),
                GRID_COLOR,
            );
        }
    }
}

/// Radial disk gradient: orange-white at the inner edge fading to a dim
/// orange rim at the outer edge.
pub fn disk_color(r: f32) -> Color {
    let glow = (DISK_OUTER - r) / (DISK_OUTER - DISK_INNER);
    Color::new(1.0, 0.7 * glow, 0.1, 1.0)
}

/// Build the annulus slab, rotated by `angle_deg` about +Y.
///
/// Two flat annulus faces at y = +/- the slab half-thickness. The rotation
/// is baked into the vertices since the toolkit has no model-matrix stack.
pub fn disk_geometry(angle_deg: f32) -> (Vec<Vertex>, Vec<u16>) {
    let rotation = angle_deg.to_radians();
    let mut vertices = Vec::with_capacity(2 * (DISK_RINGS + 1) * (DISK_SEGMENTS + 1));
    let mut indices = Vec::with_capacity(2 * DISK_RINGS * DISK_SEGMENTS * 6);

    for &y in &[DISK_HALF_THICKNESS, -DISK_HALF_THICKNESS] {
        let face_base = vertices.len() as u16;

        for ring in 0..=DISK_RINGS {
            let r = DISK_INNER + (DISK_OUTER - DISK_INNER) * ring as f32 / DISK_RINGS as f32;
            let color = disk_color(r);

            for seg in 0..=DISK_SEGMENTS {
                let a = rotation + std::f32::consts::TAU * seg as f32 / DISK_SEGMENTS as f32;
                vertices.push(Vertex::new(
                    a.cos() * r,
                    y,
                    a.sin() * r,
                    ring as f32 / DISK_RINGS as f32,
                    seg as f32 / DISK_SEGMENTS as f32,
                    color,
                ));
            }
        }

        let stride = (DISK_SEGMENTS + 1) as u16;
        for ring in 0..DISK_RINGS as u16 {
            for seg in 0..DISK_SEGMENTS as u16 {
                let inner = face_base + ring * stride + seg;
                let outer = inner + stride;
                indices.extend_from_slice(&[inner, outer, inner + 1, inner + 1, outer, outer + 1]);
            }
        }
    }

    (vertices, indices)
}

/// Draw the spinning accretion disk.
pub fn draw_accretion_disk(angle_deg: f32) {
    let (vertices, indices) = disk_geometry(angle_deg);
    draw_mesh(&Mesh {
        vertices,
        indices,
        texture: None,
    });
}

/// Draw the attractor as a solid black sphere at the capture radius.
pub fn draw_black_hole() {
    draw_sphere(vec3(0.0, 0.0, 0.0), sim::constants::CAPTURE_RADIUS, None, BLACK);
}

/// Batch every star into one camera-facing quad mesh.
///
/// The toolkit's 3-D API has no point primitive; a billboard batch is the
/// single-draw equivalent. Star counts stay far below the u16 index limit.
pub fn star_geometry(stars: &Stars, camera: &OrbitCamera) -> (Vec<Vertex>, Vec<u16>) {
    let (right, up) = camera.billboard_axes();
    let mut vertices = Vec::with_capacity(stars.len() * 4);
    let mut indices = Vec::with_capacity(stars.len() * 6);

    for star in stars.iter() {
        let center = vec3(star.position.x, star.position.y, star.position.z);
        let base = vertices.len() as u16;

        for (cu, cv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = center + right * (cu * STAR_SIZE) + up * (cv * STAR_SIZE);
            vertices.push(Vertex::new(
                corner.x,
                corner.y,
                corner.z,
                (cu + 1.0) * 0.5,
                (cv + 1.0) * 0.5,
                WHITE,
            ));
        }

        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// Draw the star field.
pub fn draw_stars(stars: &Stars, camera: &OrbitCamera) {
    let (vertices, indices) = star_geometry(stars, camera);
    draw_mesh(&Mesh {
        vertices,
        indices,
        texture: None,
    });
}
