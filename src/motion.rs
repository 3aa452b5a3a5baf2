//! Motion controller: fly-in, pointer repulsion and color cycling.
//!
//! All three behaviors act on the same particles without coordinating with
//! each other. Whatever animation was issued last on a visual is the one the
//! surface plays.
//!
//! # Per-particle states
//!
//! ```text
//! Created → FlyingIn → Settled ⇄ Repelling → Returning → Settled
//! ```
//!
//! Repulsion can interrupt any state, including an unfinished fly-in. Each
//! push schedules a single return; a newer push replaces the pending one.

use crate::color::{hsv_to_rgb, NeonBrush};
use crate::particle::{Particle, ParticleId, ParticleStore};
use crate::scheduler::Scheduler;
use crate::surface::Surface;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Brush hue advances this many degrees per unit of target X.
pub const BRUSH_HUE_PER_X: f32 = 0.2;

/// Timing and strength of the motion behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Global hue at startup, in degrees.
    pub initial_hue: f32,
    /// Degrees added to the global hue per color tick.
    pub hue_step: f32,
    pub tick_interval_ms: u64,
    /// Pointer distance below which particles are pushed.
    pub repulsion_radius: f32,
    /// Push length is `push_strength - distance`.
    pub push_strength: f32,
    pub burst_ms: u64,
    /// Delay between a push and the return toward the target.
    pub return_delay_ms: u64,
    pub return_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            initial_hue: 100.0,
            hue_step: 0.5,
            tick_interval_ms: 16,
            repulsion_radius: 120.0,
            push_strength: 200.0,
            burst_ms: 200,
            return_delay_ms: 200,
            return_ms: 500,
        }
    }
}

impl MotionConfig {
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Where a particle anchored at `target` gets pushed by a pointer at `pointer`.
    ///
    /// `None` when the pointer is outside the repulsion radius. A pointer
    /// sitting exactly on the target has no direction to push in, so the
    /// particle stays put.
    pub fn pushed_position(&self, target: Vec3, pointer: Vec3) -> Option<Vec3> {
        let dist = pointer.distance(target);
        if dist >= self.repulsion_radius {
            return None;
        }
        let dir = (target - pointer).normalize_or_zero();
        Some(target + dir * (self.push_strength - dist))
    }
}

/// Drives particle animation and owns the global hue.
#[derive(Debug)]
pub struct MotionController {
    config: MotionConfig,
    hue: f32,
    ticks: u64,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            hue: config.initial_hue,
            config,
            ticks: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Global hue. Grows without bound; wrapping happens in the color model.
    #[inline]
    pub fn hue(&self) -> f32 {
        self.hue
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Animate a particle from wherever it is back to its target.
    pub fn animate_to_target<S: Surface>(&self, surface: &mut S, particle: &Particle, duration: Duration) {
        surface.animate_offset(particle.visual(), particle.target(), duration);
    }

    /// Push every particle near `pointer` away and schedule its return.
    ///
    /// Returns how many particles were pushed.
    pub fn repel<S: Surface>(
        &self,
        surface: &mut S,
        store: &ParticleStore,
        scheduler: &mut Scheduler,
        pointer: Vec2,
        now: Duration,
    ) -> usize {
        let pointer = pointer.extend(0.0);
        let burst = Duration::from_millis(self.config.burst_ms);
        let return_at = now + Duration::from_millis(self.config.return_delay_ms);

        let mut pushed = 0;
        for particle in store {
            if let Some(position) = self.config.pushed_position(particle.target(), pointer) {
                surface.animate_offset(particle.visual(), position, burst);
                scheduler.schedule_return(particle.id(), return_at);
                pushed += 1;
            }
        }
        pushed
    }

    /// Fire a scheduled return. Unknown particles are ignored.
    pub fn return_to_target<S: Surface>(&self, surface: &mut S, store: &ParticleStore, id: ParticleId) -> bool {
        match store.get(id) {
            Some(particle) => {
                self.animate_to_target(surface, particle, Duration::from_millis(self.config.return_ms));
                true
            }
            None => false,
        }
    }

    /// Advance the global hue one step and recolor every particle.
    ///
    /// The brush hue follows the target's X (scaled by [`BRUSH_HUE_PER_X`]),
    /// the glow hue its unscaled Y, so color sweeps across the text as a wave.
    pub fn tick<S: Surface>(&mut self, surface: &mut S, store: &ParticleStore) {
        self.hue += self.config.hue_step;
        self.ticks += 1;

        for particle in store {
            let target = particle.target();
            surface.set_brush(particle.visual(), NeonBrush::from_hue(self.hue + target.x * BRUSH_HUE_PER_X));
            surface.set_glow_color(particle.visual(), hsv_to_rgb((self.hue + target.y) % 360.0, 1.0, 1.0));
        }
    }
}
