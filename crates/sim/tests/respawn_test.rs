//! Statistical tests for respawn sampling.
//!
//! Large-sample checks under a seeded generator: azimuth uniformity over
//! the ring and height confinement to the jitter band.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim::constants::{SPAWN_HEIGHT, SPAWN_RADIUS};
use sim::spawn;

const SAMPLES: usize = 100_000;

#[test]
fn test_respawn_azimuth_is_uniform() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let mut octants = [0usize; 8];

    for _ in 0..SAMPLES {
        let p = spawn::ring_position(&mut rng, SPAWN_RADIUS);
        let azimuth = p.z.atan2(p.x).rem_euclid(std::f32::consts::TAU);
        let bin = ((azimuth / std::f32::consts::TAU) * 8.0) as usize;
        octants[bin.min(7)] += 1;
    }

    let expected = SAMPLES as f32 / 8.0;
    for (i, &count) in octants.iter().enumerate() {
        let deviation = (count as f32 - expected).abs() / expected;
        assert!(
            deviation < 0.05,
            "Octant {} holds {} samples, expected ~{} (deviation {:.1}%)",
            i,
            count,
            expected,
            deviation * 100.0
        );
    }
}

#[test]
fn test_respawn_height_stays_in_band() {
    let mut rng = ChaCha8Rng::seed_from_u64(5678);
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut sum = 0.0f64;

    for _ in 0..SAMPLES {
        let p = spawn::ring_position(&mut rng, SPAWN_RADIUS);
        min = min.min(p.y);
        max = max.max(p.y);
        sum += p.y as f64;
    }

    assert!(min >= -SPAWN_HEIGHT, "Height {} below the jitter band", min);
    assert!(max < SPAWN_HEIGHT, "Height {} above the jitter band", max);

    // Band edges should actually be approached over a large sample
    assert!(min < -SPAWN_HEIGHT * 0.99, "Band lower edge never approached: {}", min);
    assert!(max > SPAWN_HEIGHT * 0.99, "Band upper edge never approached: {}", max);

    let mean = sum / SAMPLES as f64;
    assert!(
        mean.abs() < 0.02,
        "Height mean should sit near zero over {} samples. Got {}",
        SAMPLES,
        mean
    );
}

#[test]
fn test_respawn_speed_is_exact() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..1000 {
        let star = spawn::ring_star(&mut rng, SPAWN_RADIUS, 0.35);
        assert!(
            (star.velocity.length() - 0.35).abs() < 1e-5,
            "Respawn speed should be exactly 0.35. Got {}",
            star.velocity.length()
        );
    }
}
