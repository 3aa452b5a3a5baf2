//! CPU-side sprite list: the [`Surface`] the window renders from.
//!
//! Sprites keep their style and a position animation. The renderer samples
//! every sprite at the current frame time; the simulation never reads
//! positions back, but tests and tools can through [`SpriteSurface::position_at`].

use crate::animation::OffsetAnimation;
use crate::color::{NeonBrush, Rgba8};
use crate::surface::{Glow, Surface, VisualHandle, VisualSpec};
use glam::{Vec2, Vec3};
use std::time::Duration;

/// A rendered square with a gradient fill and a glow.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub size: Vec2,
    pub brush: NeonBrush,
    pub glow: Glow,
    offset: OffsetAnimation,
}

impl Sprite {
    /// Position at time `now`.
    #[inline]
    pub fn position(&self, now: Duration) -> Vec3 {
        self.offset.sample(now)
    }

    /// Where the current animation ends.
    #[inline]
    pub fn destination(&self) -> Vec3 {
        self.offset.destination()
    }

    #[inline]
    pub fn is_settled(&self, now: Duration) -> bool {
        self.offset.is_finished(now)
    }
}

/// Sprite list plus the clock animations are issued against.
///
/// Sprites are stored back to front: later sprites draw on top.
#[derive(Debug)]
pub struct SpriteSurface {
    canvas: Vec2,
    now: Duration,
    sprites: Vec<Sprite>,
}

impl SpriteSurface {
    pub fn new(canvas: Vec2) -> Self {
        Self {
            canvas,
            now: Duration::ZERO,
            sprites: Vec::new(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set_canvas_size(&mut self, canvas: Vec2) {
        self.canvas = canvas;
    }

    pub fn sprite(&self, visual: VisualHandle) -> Option<&Sprite> {
        self.sprites.get(visual.0 as usize)
    }

    pub fn position_at(&self, visual: VisualHandle, now: Duration) -> Option<Vec3> {
        self.sprite(visual).map(|s| s.position(now))
    }

    /// Sprites in draw order.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    fn sprite_mut(&mut self, visual: VisualHandle) -> Option<&mut Sprite> {
        self.sprites.get_mut(visual.0 as usize)
    }
}

impl Surface for SpriteSurface {
    /// Advance the clock used to start new animations. Never moves backwards.
    fn set_time(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn canvas_size(&self) -> Vec2 {
        self.canvas
    }

    fn create_visual(&mut self, spec: VisualSpec) -> VisualHandle {
        let handle = VisualHandle(self.sprites.len() as u32);
        self.sprites.push(Sprite {
            size: spec.size,
            brush: spec.brush,
            glow: spec.glow,
            offset: OffsetAnimation::at_rest(spec.offset),
        });
        handle
    }

    fn set_brush(&mut self, visual: VisualHandle, brush: NeonBrush) {
        if let Some(sprite) = self.sprite_mut(visual) {
            sprite.brush = brush;
        }
    }

    fn set_glow_color(&mut self, visual: VisualHandle, color: Rgba8) {
        if let Some(sprite) = self.sprite_mut(visual) {
            sprite.glow.color = color;
        }
    }

    fn animate_offset(&mut self, visual: VisualHandle, target: Vec3, duration: Duration) {
        let now = self.now;
        if let Some(sprite) = self.sprite_mut(visual) {
            sprite.offset.retarget(now, target, duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(offset: Vec3) -> VisualSpec {
        VisualSpec {
            size: Vec2::splat(7.0),
            offset,
            brush: NeonBrush::from_hue(0.0),
            glow: Glow {
                color: Rgba8::RED,
                blur_radius: 15.0,
                opacity: 0.9,
            },
        }
    }

    #[test]
    fn test_handles_are_sequential() {
        let mut surface = SpriteSurface::new(Vec2::new(10.0, 10.0));
        assert_eq!(surface.create_visual(spec(Vec3::ZERO)), VisualHandle(0));
        assert_eq!(surface.create_visual(spec(Vec3::ONE)), VisualHandle(1));
        assert_eq!(surface.len(), 2);
        assert_eq!(surface.position_at(VisualHandle(1), Duration::ZERO), Some(Vec3::ONE));
    }

    #[test]
    fn test_animation_uses_surface_clock() {
        let mut surface = SpriteSurface::new(Vec2::new(10.0, 10.0));
        let v = surface.create_visual(spec(Vec3::ZERO));
        surface.set_time(Duration::from_millis(1000));
        surface.animate_offset(v, Vec3::new(10.0, 0.0, 0.0), Duration::from_millis(100));

        assert_eq!(surface.position_at(v, Duration::from_millis(1000)), Some(Vec3::ZERO));
        let mid = surface.position_at(v, Duration::from_millis(1050)).unwrap();
        assert!((mid.x - 5.0).abs() < 1e-3);
        assert!(surface.sprite(v).unwrap().is_settled(Duration::from_millis(1100)));
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut surface = SpriteSurface::new(Vec2::ZERO);
        surface.set_time(Duration::from_millis(50));
        surface.set_time(Duration::from_millis(10));
        assert_eq!(surface.now(), Duration::from_millis(50));
    }

    #[test]
    fn test_unknown_handle_is_ignored() {
        let mut surface = SpriteSurface::new(Vec2::ZERO);
        surface.set_brush(VisualHandle(9), NeonBrush::from_hue(10.0));
        surface.set_glow_color(VisualHandle(9), Rgba8::BLUE);
        surface.animate_offset(VisualHandle(9), Vec3::ONE, Duration::ZERO);
        assert!(surface.is_empty());
        assert!(surface.position_at(VisualHandle(9), Duration::ZERO).is_none());
    }

    #[test]
    fn test_restyle() {
        let mut surface = SpriteSurface::new(Vec2::ZERO);
        let v = surface.create_visual(spec(Vec3::ZERO));
        surface.set_brush(v, NeonBrush::from_hue(120.0));
        surface.set_glow_color(v, Rgba8::BLUE);
        let sprite = surface.sprite(v).unwrap();
        assert_eq!(sprite.brush.start, Rgba8::GREEN);
        assert_eq!(sprite.glow.color, Rgba8::BLUE);
    }
}
