//! Linear keyframe animation of a visual's position.
//!
//! Each animation holds a single keyframe at t = 1. Its start value is
//! captured from the displayed position at the moment it is issued, so
//! issuing a new animation mid-flight continues smoothly from wherever the
//! previous one had got to.

use glam::Vec3;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnimation {
    from: Vec3,
    to: Vec3,
    start: Duration,
    duration: Duration,
}

impl OffsetAnimation {
    /// A visual resting at `position` with nothing running.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            from: position,
            to: position,
            start: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    /// Interpolated position at time `now`.
    pub fn sample(&self, now: Duration) -> Vec3 {
        if now <= self.start {
            return self.from;
        }
        let elapsed = now - self.start;
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, t)
    }

    /// Replace this animation with one heading to `target`, starting at `now`.
    pub fn retarget(&mut self, now: Duration, target: Vec3, duration: Duration) {
        *self = Self {
            from: self.sample(now),
            to: target,
            start: now,
            duration,
        };
    }

    /// Final position of the current animation.
    #[inline]
    pub fn destination(&self) -> Vec3 {
        self.to
    }

    /// Whether the animation has reached its keyframe at `now`.
    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.start + self.duration
    }
}
