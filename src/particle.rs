//! Particle store.
//!
//! A particle is a visual bound to the glyph pixel it belongs to. The target
//! is fixed at creation; every later animation returns to it.

use crate::color::{hsv_to_rgb, NeonBrush};
use crate::surface::{Glow, Surface, VisualHandle, VisualSpec};
use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Dense index of a particle within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

/// One rendered glyph pixel.
#[derive(Debug, Clone)]
pub struct Particle {
    id: ParticleId,
    visual: VisualHandle,
    target: Vec3,
}

impl Particle {
    #[inline]
    pub fn id(&self) -> ParticleId {
        self.id
    }

    #[inline]
    pub fn visual(&self) -> VisualHandle {
        self.visual
    }

    /// Resting position. Never changes after creation.
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }
}

/// Look of newly created particles and their entrance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
    /// Edge length of a particle at scale 1.
    pub size: f32,
    pub scale: f32,
    /// Glow blur radius at scale 1.
    pub glow_blur: f32,
    pub glow_opacity: f32,
    /// Fly-in starts up to this far from the target on X and Y.
    pub spawn_spread: i32,
    /// Fly-in duration in milliseconds.
    pub fly_in_ms: u64,
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            size: 7.0,
            scale: 1.0,
            glow_blur: 15.0,
            glow_opacity: 0.9,
            spawn_spread: 400,
            fly_in_ms: 1500,
        }
    }
}

impl ParticleStyle {
    #[inline]
    pub fn fly_in(&self) -> Duration {
        Duration::from_millis(self.fly_in_ms)
    }
}

/// The live particle list. Particles are only ever appended.
#[derive(Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a particle anchored at `target` and start its fly-in.
    ///
    /// The visual starts at a random integer offset from the target and gets
    /// a hue-0 brush plus a randomly colored glow; the first color tick
    /// overwrites both.
    pub fn create_particle<S: Surface, R: Rng>(
        &mut self,
        surface: &mut S,
        rng: &mut R,
        target: Vec3,
        style: &ParticleStyle,
    ) -> ParticleId {
        let spread = style.spawn_spread.max(1);
        let start = target
            + Vec3::new(
                rng.gen_range(-spread..spread) as f32,
                rng.gen_range(-spread..spread) as f32,
                0.0,
            );

        let visual = surface.create_visual(VisualSpec {
            size: Vec2::splat(style.size * style.scale),
            offset: start,
            brush: NeonBrush::from_hue(0.0),
            glow: Glow {
                color: hsv_to_rgb(rng.gen_range(0..360) as f32, 1.0, 1.0),
                blur_radius: style.glow_blur * style.scale,
                opacity: style.glow_opacity,
            },
        });

        let id = ParticleId(self.particles.len() as u32);
        self.particles.push(Particle { id, visual, target });
        surface.animate_offset(visual, target, style.fly_in());
        id
    }

    #[inline]
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0 as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
