//! # Neon Text
//!
//! Animated neon particle text in a desktop window.
//!
//! Every lit pixel of a 5×7 bitmap font becomes a particle. Particles fly in
//! from random offsets to form the text, cycle through a hue-shifting neon
//! gradient, and scatter away from the pointer before drifting back.
//!
//! ## Quick Start
//!
//! ```ignore
//! use neon_text::prelude::*;
//!
//! fn main() -> Result<(), DisplayError> {
//!     NeonDisplay::new()
//!         .with_lines(["HELLO", "WORLD"])
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Layout
//!
//! [`layout()`] places one target per lit glyph pixel, centering each line
//! horizontally and the whole block vertically. Layout happens once, when
//! the window first reports its size.
//!
//! ### Motion
//!
//! The [`MotionController`] drives three independent behaviors:
//!
//! | Behavior | Trigger | Effect |
//! |----------|---------|--------|
//! | Fly-in | particle creation | random offset → target over 1.5 s |
//! | Repulsion | pointer within 120 units | push away, return after 200 ms |
//! | Color cycling | 16 ms tick | hue += 0.5, tinted by target position |
//!
//! ### Surfaces
//!
//! The simulation talks to rendering only through the [`Surface`] trait.
//! [`SpriteSurface`] keeps sprites on the CPU and is what the window draws;
//! it also works headless, which is how the tests drive a [`Scene`].

pub mod animation;
pub mod color;
mod config;
mod display;
mod error;
pub mod font;
mod gpu;
pub mod input;
pub mod layout;
pub mod motion;
pub mod particle;
mod scene;
pub mod scheduler;
pub mod sprites;
pub mod surface;
pub mod time;

pub use color::{hsv_to_rgb, NeonBrush, Rgba8};
pub use config::DisplayConfig;
pub use display::NeonDisplay;
pub use error::{ConfigError, DisplayError, GpuError};
pub use glam::{Vec2, Vec3};
pub use layout::{layout, LayoutConfig};
pub use motion::{MotionConfig, MotionController};
pub use particle::{Particle, ParticleId, ParticleStore, ParticleStyle};
pub use scene::Scene;
pub use sprites::SpriteSurface;
pub use surface::{Surface, VisualHandle};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use neon_text::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{hsv_to_rgb, NeonBrush, Rgba8};
    pub use crate::config::DisplayConfig;
    pub use crate::display::NeonDisplay;
    pub use crate::error::{ConfigError, DisplayError};
    pub use crate::layout::{layout, LayoutConfig};
    pub use crate::motion::{MotionConfig, MotionController};
    pub use crate::particle::{ParticleStore, ParticleStyle};
    pub use crate::scene::Scene;
    pub use crate::sprites::SpriteSurface;
    pub use crate::surface::{Surface, VisualHandle};
    pub use crate::{Vec2, Vec3};
}
