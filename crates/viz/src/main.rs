//! Black-Hole Gravity Well - Visualization
//!
//! Real-time view of the toy gravity field: a point attractor deforms the
//! ground grid, the accretion disk spins, and the star swarm orbits, falls
//! in, and respawns. The `sim` crate owns the physics; this binary owns the
//! window, the orbital camera, and the frame loop.

use macroquad::prelude::*;
use sim::constants::{DT, STAR_COUNT};
use sim::GravitySimulation;

mod camera;
mod scene;

use camera::OrbitCamera;

/// Disk rotation per frame, degrees
const DISK_SPIN_RATE: f32 = 0.5;

fn window_conf() -> Conf {
    Conf {
        window_title: "Black Hole Gravity Well".to_owned(),
        window_width: 1200,
        window_height: 700,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut rng = ::rand::thread_rng();
    let mut sim = GravitySimulation::new(STAR_COUNT, &mut rng);
    let mut cam = OrbitCamera::new();
    let mut disk_angle: f32 = 0.0;
    let mut total_captures: usize = 0;

    log::info!(
        "spawned {} stars on the r={} ring",
        sim.stars.len(),
        sim::constants::SPAWN_RADIUS
    );

    loop {
        // Exactly one integrator step per displayed frame
        let stats = sim.update(&mut rng, DT);
        total_captures += stats.captures;

        clear_background(BLACK);
        set_camera(&cam.camera());

        scene::draw_grid();
        scene::draw_accretion_disk(disk_angle);
        scene::draw_black_hole();
        scene::draw_stars(&sim.stars, &cam);

        // Stats overlay in screen space
        set_default_camera();
        draw_text(
            &format!(
                "Stars: {} | Captured: {} | FPS: {}",
                sim.stars.len(),
                total_captures,
                get_fps()
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );

        disk_angle += DISK_SPIN_RATE;
        cam.advance();

        next_frame().await
    }
}
