//! The capability surface between the simulation and whatever draws it.
//!
//! The core never owns pixels, windows or interpolation. It creates visuals,
//! restyles them and asks for position animations; the surface does the rest.
//! [`SpriteSurface`](crate::sprites::SpriteSurface) is the implementation the
//! window renders from.

use crate::color::{NeonBrush, Rgba8};
use glam::{Vec2, Vec3};
use std::time::Duration;

/// Non-owning reference to a visual that lives inside a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(pub u32);

/// Drop-shadow style glow drawn behind a visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Rgba8,
    pub blur_radius: f32,
    pub opacity: f32,
}

/// Everything needed to create a visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualSpec {
    /// Width and height in canvas units.
    pub size: Vec2,
    /// Initial top-left position.
    pub offset: Vec3,
    pub brush: NeonBrush,
    pub glow: Glow,
}

/// Rendering primitives the simulation drives.
///
/// All calls happen on the event thread. Animation playback is the surface's
/// business; the caller only ever issues terminal targets.
pub trait Surface {
    /// Move the surface clock to `now` before issuing calls for that instant.
    ///
    /// Surfaces that keep their own time can ignore this.
    fn set_time(&mut self, _now: Duration) {}

    /// Current drawable size in canvas units.
    fn canvas_size(&self) -> Vec2;

    /// Create a visual and insert it at the top of the render list.
    fn create_visual(&mut self, spec: VisualSpec) -> VisualHandle;

    /// Replace the fill of a visual.
    fn set_brush(&mut self, visual: VisualHandle, brush: NeonBrush);

    /// Recolor the glow of a visual.
    fn set_glow_color(&mut self, visual: VisualHandle, color: Rgba8);

    /// Start a linear position animation toward `target`.
    ///
    /// The animation begins at wherever the visual is currently displayed and
    /// replaces any animation already running on it. Non-blocking.
    fn animate_offset(&mut self, visual: VisualHandle, target: Vec3, duration: Duration);
}
