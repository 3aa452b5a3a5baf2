//! The simulation state for one window.
//!
//! A [`Scene`] owns the particles, the motion controller, the timers and the
//! surface they draw on. Platform code forwards three things to it: the
//! canvas becoming ready, pointer movement, and the passage of time.

use crate::config::DisplayConfig;
use crate::layout::{layout, LayoutConfig};
use crate::motion::MotionController;
use crate::particle::{ParticleStore, ParticleStyle};
use crate::scheduler::{Scheduler, Timer};
use crate::surface::Surface;
use glam::Vec2;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;

pub struct Scene<S: Surface> {
    surface: S,
    store: ParticleStore,
    motion: MotionController,
    scheduler: Scheduler,
    rng: SmallRng,
    lines: Vec<String>,
    layout: LayoutConfig,
    style: ParticleStyle,
    created: bool,
}

impl<S: Surface> Scene<S> {
    pub fn new(surface: S, config: &DisplayConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            surface,
            store: ParticleStore::new(),
            motion: MotionController::new(config.motion),
            scheduler: Scheduler::new(config.motion.tick_interval()),
            rng,
            lines: config.lines.clone(),
            layout: config.layout,
            style: config.style,
            created: false,
        }
    }

    /// Lay out the text and spawn its particles, once.
    ///
    /// Call whenever the canvas reports a size. Only the first call does
    /// anything; later ones return `false`. Color ticks start here.
    pub fn create_particles(&mut self, now: Duration) -> bool {
        if self.created {
            return false;
        }
        self.created = true;

        let canvas = self.surface.canvas_size();
        self.surface.set_time(now);
        for target in layout(&self.lines, canvas, &self.layout) {
            self.store
                .create_particle(&mut self.surface, &mut self.rng, target, &self.style);
        }
        self.scheduler.start_ticks(now);

        info!(
            "Created {} particles for {} lines on a {}x{} canvas",
            self.store.len(),
            self.lines.len(),
            canvas.x,
            canvas.y
        );
        true
    }

    /// Pointer moved to `pointer` (canvas coordinates).
    ///
    /// Returns how many particles were pushed.
    pub fn pointer_moved(&mut self, pointer: Vec2, now: Duration) -> usize {
        self.surface.set_time(now);
        let pushed = self
            .motion
            .repel(&mut self.surface, &self.store, &mut self.scheduler, pointer, now);
        if pushed > 0 {
            debug!("Pointer at ({:.0}, {:.0}) pushed {} particles", pointer.x, pointer.y, pushed);
        }
        pushed
    }

    /// Fire every timer due at `now`. Returns the number fired.
    pub fn advance(&mut self, now: Duration) -> usize {
        self.surface.set_time(now);
        let due = self.scheduler.poll(now);
        for timer in &due {
            match *timer {
                Timer::ColorTick => self.motion.tick(&mut self.surface, &self.store),
                Timer::Return(id) => {
                    self.motion.return_to_target(&mut self.surface, &self.store, id);
                }
            }
        }
        due.len()
    }

    /// When the next timer is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    #[inline]
    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.store
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::SpriteSurface;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn scene(lines: &[&str]) -> Scene<SpriteSurface> {
        let config = DisplayConfig {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            seed: Some(11),
            ..Default::default()
        };
        Scene::new(SpriteSurface::new(Vec2::new(800.0, 600.0)), &config)
    }

    #[test]
    fn test_created_once() {
        let mut scene = scene(&["MEH"]);
        assert!(!scene.is_created());
        assert!(scene.create_particles(ms(0)));
        let count = scene.particles().len();
        assert!(count > 0);
        assert_eq!(scene.surface().len(), count);

        scene.surface_mut().set_canvas_size(Vec2::new(1920.0, 1080.0));
        assert!(!scene.create_particles(ms(100)));
        assert_eq!(scene.particles().len(), count);
        assert_eq!(scene.surface().len(), count);
    }

    #[test]
    fn test_no_ticks_before_creation() {
        let mut scene = scene(&["M"]);
        assert_eq!(scene.advance(ms(1000)), 0);
        assert_eq!(scene.motion().ticks(), 0);
        assert_eq!(scene.next_deadline(), None);
    }

    #[test]
    fn test_ticks_after_creation() {
        let mut scene = scene(&["M"]);
        scene.create_particles(ms(0));
        assert_eq!(scene.next_deadline(), Some(ms(16)));
        for frame in 1..=10 {
            scene.advance(ms(16 * frame));
        }
        assert_eq!(scene.motion().ticks(), 10);
        assert_eq!(scene.motion().hue(), 105.0);
    }

    #[test]
    fn test_pointer_before_creation_is_harmless() {
        let mut scene = scene(&["M"]);
        assert_eq!(scene.pointer_moved(Vec2::new(400.0, 300.0), ms(0)), 0);
    }
}
