//! Text layout: turns lines of text into one target position per lit glyph pixel.
//!
//! Every line is centered horizontally on the canvas and the whole block of
//! lines is centered vertically. Nothing is clamped, so a canvas smaller than
//! the text simply pushes targets off-screen.
//!
//! ```ignore
//! let targets = layout(&["MICROSOFT", "WINUI 3"], Vec2::new(1280.0, 720.0), &LayoutConfig::default());
//! ```

use crate::font::{self, GLYPH_COLS, GLYPH_ROWS};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Spacing parameters for glyph layout, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between adjacent pixels of a glyph.
    pub particle_spacing: f32,
    /// Extra gap after each glyph's five columns.
    pub char_gap: f32,
    /// Vertical gap between lines.
    pub line_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            particle_spacing: 12.0,
            char_gap: 8.0,
            line_spacing: 30.0,
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance from one character's origin to the next.
    #[inline]
    pub fn glyph_advance(&self) -> f32 {
        GLYPH_COLS as f32 * self.particle_spacing + self.char_gap
    }

    /// Height of a single line of glyphs.
    #[inline]
    pub fn line_height(&self) -> f32 {
        GLYPH_ROWS as f32 * self.particle_spacing
    }

    /// Height of a block of `lines` lines, including the gaps between them.
    pub fn block_height(&self, lines: usize) -> f32 {
        if lines == 0 {
            return 0.0;
        }
        lines as f32 * self.line_height() + (lines - 1) as f32 * self.line_spacing
    }
}

/// Placement of one line of text. Only lives long enough to produce targets.
#[derive(Debug, Clone, Copy)]
pub struct LineLayout<'a> {
    pub text: &'a str,
    /// Top-left corner of the first character cell.
    pub origin: Vec2,
    advance: f32,
    spacing: f32,
}

impl<'a> LineLayout<'a> {
    /// Target positions for this line: character order, then column-major pixels.
    ///
    /// Unsupported characters produce nothing but still take up their cell.
    pub fn targets(&self) -> impl Iterator<Item = Vec3> + 'a {
        let Self { text, origin, advance, spacing } = *self;
        text.chars().enumerate().flat_map(move |(i, c)| {
            let cell_x = origin.x + i as f32 * advance;
            font::glyph(c)
                .into_iter()
                .flat_map(|g| g.lit_pixels())
                .map(move |(px, py)| {
                    Vec3::new(cell_x + px as f32 * spacing, origin.y + py as f32 * spacing, 0.0)
                })
        })
    }
}

/// Place each line on a canvas of the given size.
pub fn layout_lines<'a, S: AsRef<str>>(
    lines: &'a [S],
    canvas: Vec2,
    config: &LayoutConfig,
) -> Vec<LineLayout<'a>> {
    let start_y = (canvas.y - config.block_height(lines.len())) / 2.0;
    let advance = config.glyph_advance();

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let text = line.as_ref();
            let width = text.chars().count() as f32 * advance;
            LineLayout {
                text,
                origin: Vec2::new(
                    (canvas.x - width) / 2.0,
                    start_y + index as f32 * (config.line_height() + config.line_spacing),
                ),
                advance,
                spacing: config.particle_spacing,
            }
        })
        .collect()
}

/// Compute every particle target for `lines`, in deterministic order.
pub fn layout<S: AsRef<str>>(lines: &[S], canvas: Vec2, config: &LayoutConfig) -> Vec<Vec3> {
    layout_lines(lines, canvas, config)
        .iter()
        .flat_map(|line| line.targets())
        .collect()
}

/// Number of particles `lines` will produce.
pub fn particle_count<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .flat_map(|l| l.as_ref().chars())
        .filter_map(font::glyph)
        .map(|g| g.lit_count())
        .sum()
}
