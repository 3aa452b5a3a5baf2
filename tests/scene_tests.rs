//! Integration tests driving a headless scene.
//!
//! These tests run the full simulation against a `SpriteSurface` with a fixed
//! seed and a synthetic clock, then inspect where sprites are and how they
//! are colored.

use neon_text::prelude::*;
use neon_text::ParticleId;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn scene_with(lines: &[&str], canvas: Vec2) -> Scene<SpriteSurface> {
    let config = DisplayConfig {
        lines: lines.iter().map(|s| s.to_string()).collect(),
        seed: Some(1234),
        ..Default::default()
    };
    Scene::new(SpriteSurface::new(canvas), &config)
}

fn position(scene: &Scene<SpriteSurface>, id: ParticleId, at: Duration) -> Vec3 {
    let visual = scene.particles().get(id).unwrap().visual();
    scene.surface().position_at(visual, at).unwrap()
}

fn destination(scene: &Scene<SpriteSurface>, id: ParticleId) -> Vec3 {
    let visual = scene.particles().get(id).unwrap().visual();
    scene.surface().sprite(visual).unwrap().destination()
}

// ============================================================================
// Layout end to end
// ============================================================================

#[test]
fn test_m_glyph_lands_on_exact_grid() {
    let mut scene = scene_with(&["M"], Vec2::new(100.0, 100.0));
    assert!(scene.create_particles(ms(0)));

    let pattern = ["10001", "11011", "10101", "10101", "10001", "10001", "10001"];
    let mut expected = Vec::new();
    for px in 0..5 {
        for (py, row) in pattern.iter().enumerate() {
            if row.as_bytes()[px] == b'1' {
                expected.push(Vec3::new(16.0 + px as f32 * 12.0, 8.0 + py as f32 * 12.0, 0.0));
            }
        }
    }

    let targets: Vec<Vec3> = scene.particles().iter().map(|p| p.target()).collect();
    assert_eq!(targets, expected);

    // After the fly-in every sprite sits on its target.
    for particle in scene.particles() {
        assert_eq!(position(&scene, particle.id(), ms(1500)), particle.target());
    }
}

#[test]
fn test_default_text_particle_count() {
    let lines = ["MICROSOFT", "WINUI 3", "MEHDIMYADI"];
    let mut scene = scene_with(&lines, Vec2::new(1280.0, 720.0));
    scene.create_particles(ms(0));

    assert_eq!(scene.particles().len(), neon_text::layout::particle_count(&lines));
    assert_eq!(scene.surface().len(), scene.particles().len());
}

#[test]
fn test_layout_runs_once() {
    let mut scene = scene_with(&["HI"], Vec2::new(400.0, 300.0));
    assert!(scene.create_particles(ms(0)));
    let first: Vec<Vec3> = scene.particles().iter().map(|p| p.target()).collect();

    scene.surface_mut().set_canvas_size(Vec2::new(1000.0, 1000.0));
    assert!(!scene.create_particles(ms(50)));
    assert!(!scene.create_particles(ms(60)));

    let after: Vec<Vec3> = scene.particles().iter().map(|p| p.target()).collect();
    assert_eq!(first, after);
}

#[test]
fn test_same_seed_same_fly_in() {
    let mut a = scene_with(&["NEON"], Vec2::new(600.0, 400.0));
    let mut b = scene_with(&["NEON"], Vec2::new(600.0, 400.0));
    a.create_particles(ms(0));
    b.create_particles(ms(0));

    for particle in a.particles() {
        assert_eq!(
            position(&a, particle.id(), ms(0)),
            position(&b, particle.id(), ms(0))
        );
    }
}

// ============================================================================
// Repulsion
// ============================================================================

/// A single 'I' pixel-column; particle 0 is the top-left pixel.
fn settled_scene() -> (Scene<SpriteSurface>, Vec3) {
    let mut scene = scene_with(&["I"], Vec2::new(400.0, 400.0));
    scene.create_particles(ms(0));
    scene.advance(ms(1500));
    let target = scene.particles().get(ParticleId(0)).unwrap().target();
    (scene, target)
}

#[test]
fn test_pointer_outside_radius_does_nothing() {
    let (mut scene, target) = settled_scene();
    // Far above the text so only distance to particle 0 matters.
    let pointer = Vec2::new(target.x, target.y - 120.5);
    let before: Vec<Vec3> = scene
        .particles()
        .iter()
        .map(|p| destination(&scene, p.id()))
        .collect();

    assert_eq!(scene.pointer_moved(pointer, ms(2000)), 0);
    assert_eq!(scene.scheduler().pending_returns(), 0);

    let after: Vec<Vec3> = scene
        .particles()
        .iter()
        .map(|p| destination(&scene, p.id()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_pointer_inside_radius_pushes() {
    let (mut scene, target) = settled_scene();
    let pointer = Vec2::new(target.x, target.y - 119.5);

    assert_eq!(scene.pointer_moved(pointer, ms(2000)), 1);

    let pushed = destination(&scene, ParticleId(0));
    let push = target - pushed;
    assert!((push.length() - (200.0 - 119.5)).abs() < 1e-3);
    assert!(push.length() > 80.0);
    // Pushed downward, away from the pointer above.
    assert!(pushed.y > target.y);
    assert_eq!(pushed.x, target.x);

    // Burst takes 200 ms.
    assert!((position(&scene, ParticleId(0), ms(2200)) - pushed).length() < 1e-3);
}

#[test]
fn test_pointer_on_target_is_finite() {
    let (mut scene, target) = settled_scene();
    scene.pointer_moved(target.truncate(), ms(2000));

    for particle in scene.particles() {
        let at = position(&scene, particle.id(), ms(2100));
        assert!(at.is_finite(), "particle {:?} at {:?}", particle.id(), at);
    }
    // No direction to push in: particle 0 stays on its target.
    assert_eq!(destination(&scene, ParticleId(0)), target);
}

#[test]
fn test_return_after_delay() {
    let (mut scene, target) = settled_scene();
    let pointer = Vec2::new(target.x - 30.0, target.y);
    assert!(scene.pointer_moved(pointer, ms(2000)) > 0);
    assert_ne!(destination(&scene, ParticleId(0)), target);

    scene.advance(ms(2199));
    assert_ne!(destination(&scene, ParticleId(0)), target);

    scene.advance(ms(2200));
    assert_eq!(destination(&scene, ParticleId(0)), target);
    assert_eq!(position(&scene, ParticleId(0), ms(2700)), target);
    assert_eq!(scene.scheduler().pending_returns(), 0);
}

#[test]
fn test_repeated_push_delays_return() {
    let (mut scene, target) = settled_scene();
    let pointer = Vec2::new(target.x - 30.0, target.y);

    scene.pointer_moved(pointer, ms(2000));
    scene.pointer_moved(pointer, ms(2100));
    let pushed = destination(&scene, ParticleId(0));

    // The first push's return was replaced by the second one's.
    scene.advance(ms(2200));
    assert_eq!(destination(&scene, ParticleId(0)), pushed);

    scene.advance(ms(2300));
    assert_eq!(destination(&scene, ParticleId(0)), target);
}

#[test]
fn test_push_interrupts_fly_in() {
    let mut scene = scene_with(&["I"], Vec2::new(400.0, 400.0));
    scene.create_particles(ms(0));
    let target = scene.particles().get(ParticleId(0)).unwrap().target();

    // Mid fly-in.
    scene.advance(ms(700));
    assert!(scene.pointer_moved(Vec2::new(target.x, target.y - 10.0), ms(700)) > 0);
    scene.advance(ms(900));
    scene.advance(ms(1400));

    assert_eq!(position(&scene, ParticleId(0), ms(1400)), target);
}

// ============================================================================
// Color cycling
// ============================================================================

#[test]
fn test_hue_after_ticks() {
    let mut scene = scene_with(&["HI"], Vec2::new(400.0, 300.0));
    scene.create_particles(ms(0));

    for n in 1..=240u64 {
        scene.advance(ms(16 * n));
    }

    assert_eq!(scene.motion().ticks(), 240);
    assert_eq!(scene.motion().hue(), 100.0 + 0.5 * 240.0);
}

#[test]
fn test_colors_follow_target_position() {
    let mut scene = scene_with(&["HI"], Vec2::new(400.0, 300.0));
    scene.create_particles(ms(0));
    scene.advance(ms(16));

    let hue = scene.motion().hue();
    assert_eq!(hue, 100.5);

    for particle in scene.particles() {
        let sprite = scene.surface().sprite(particle.visual()).unwrap();
        let target = particle.target();
        assert_eq!(sprite.brush, NeonBrush::from_hue(hue + target.x * 0.2));
        assert_eq!(sprite.glow.color, hsv_to_rgb((hue + target.y) % 360.0, 1.0, 1.0));
    }
}

#[test]
fn test_colors_before_first_tick() {
    let mut scene = scene_with(&["I"], Vec2::new(400.0, 300.0));
    scene.create_particles(ms(0));

    for particle in scene.particles() {
        let sprite = scene.surface().sprite(particle.visual()).unwrap();
        assert_eq!(sprite.brush, NeonBrush::from_hue(0.0));
        assert_eq!(sprite.glow.opacity, 0.9);
    }
}
