// Host-side tests for single-particle motion, the opacity oscillator and
// the force clamp.

use glam::Vec2;
use particle_field::constants::{MAX_SPEED, OPACITY_STEP};
use particle_field::core::{Particle, Surface};
use rand::prelude::*;

const BOUNDS: Vec2 = Vec2::new(640.0, 480.0);

fn in_bounds(p: &Particle) -> bool {
    p.position.x >= 0.0 && p.position.x < BOUNDS.x && p.position.y >= 0.0 && p.position.y < BOUNDS.y
}

#[test]
fn positions_stay_wrapped_over_many_ticks() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let mut particle = Particle::spawn(BOUNDS, &mut rng);
        // Exaggerate the velocity so wrapping actually triggers.
        particle.velocity = Vec2::new(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0));
        for tick in 0..500 {
            particle.update(BOUNDS);
            assert!(
                in_bounds(&particle),
                "escaped at tick {}: {:?}",
                tick,
                particle.position
            );
        }
    }
}

#[test]
fn opacity_never_escapes_unit_interval() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut particle = Particle::spawn(BOUNDS, &mut rng);
    for _ in 0..10_000 {
        particle.update(BOUNDS);
        assert!((0.0..=1.0).contains(&particle.opacity));
    }
}

#[test]
fn opacity_oscillates_rather_than_settling() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut particle = Particle::spawn(BOUNDS, &mut rng);
    let mut seen_growing = false;
    let mut seen_shrinking = false;
    let mut last = particle.opacity;
    for _ in 0..1_000 {
        particle.update(BOUNDS);
        if particle.opacity > last + OPACITY_STEP / 2.0 {
            seen_growing = true;
        }
        if particle.opacity < last - OPACITY_STEP / 2.0 {
            seen_shrinking = true;
        }
        last = particle.opacity;
    }
    assert!(seen_growing && seen_shrinking);
}

#[test]
fn update_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(21);
    let original = Particle::spawn(BOUNDS, &mut rng);
    let mut a = original.clone();
    let mut b = original;
    for _ in 0..200 {
        a.update(BOUNDS);
        b.update(BOUNDS);
    }
    assert_eq!(a, b);
}

#[test]
fn force_clamp_holds_under_sustained_impulses() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut particle = Particle::spawn(BOUNDS, &mut rng);
    for _ in 0..100 {
        particle.apply_force(Vec2::new(1.0, 0.3), 10.0);
        assert!(particle.speed() <= MAX_SPEED * 1.0001);
    }
}

#[test]
fn zero_direction_force_is_inert() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut particle = Particle::spawn(BOUNDS, &mut rng);
    let before = particle.velocity;
    particle.apply_force(Vec2::ZERO, 10.0);
    assert_eq!(particle.velocity, before);
    assert!(particle.velocity.is_finite());
}

#[test]
fn draw_reports_current_position_and_opacity() {
    struct Captures {
        center: Option<Vec2>,
        alpha: Option<f32>,
    }
    impl Surface for Captures {
        fn fill_circle(&mut self, center: Vec2, _radius: f32, _color: [u8; 3], alpha: f32) {
            self.center = Some(center);
            self.alpha = Some(alpha);
        }
        fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _color: [u8; 3], _alpha: f32) {}
    }

    let mut rng = StdRng::seed_from_u64(13);
    let particle = Particle::spawn(BOUNDS, &mut rng);
    let mut captures = Captures {
        center: None,
        alpha: None,
    };
    particle.draw(&mut captures);
    assert_eq!(captures.center, Some(particle.position));
    assert_eq!(captures.alpha, Some(particle.opacity));
}
