//! Fixed 5×7 bitmap font.
//!
//! Each glyph is seven rows of five pixels. Only the characters needed by the
//! default display (plus space) are present; everything else maps to `None`
//! and renders as an empty cell.

/// Glyph width in pixels.
pub const GLYPH_COLS: usize = 5;
/// Glyph height in pixels.
pub const GLYPH_ROWS: usize = 7;

/// A 5×7 on/off pixel grid, stored row-major (`rows[py]` bit `4 - px`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    const fn new(rows: [u8; GLYPH_ROWS]) -> Self {
        Self { rows }
    }

    /// Whether the pixel at column `px`, row `py` is lit.
    ///
    /// Out-of-range coordinates are reported as unlit.
    #[inline]
    pub fn is_on(&self, px: usize, py: usize) -> bool {
        if px >= GLYPH_COLS || py >= GLYPH_ROWS {
            return false;
        }
        self.rows[py] & (1 << (GLYPH_COLS - 1 - px)) != 0
    }

    /// Lit pixels as `(px, py)` pairs, column-major (px outer, py inner).
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_COLS).flat_map(move |px| {
            (0..GLYPH_ROWS).filter_map(move |py| self.is_on(px, py).then_some((px, py)))
        })
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }
}

const SPACE: Glyph = Glyph::new([0; GLYPH_ROWS]);

static GLYPHS: &[(char, Glyph)] = &[
    ('M', Glyph::new([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001])),
    ('I', Glyph::new([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111])),
    ('C', Glyph::new([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('R', Glyph::new([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
    ('O', Glyph::new([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('S', Glyph::new([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('F', Glyph::new([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('T', Glyph::new([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('W', Glyph::new([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001])),
    ('N', Glyph::new([0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001])),
    ('U', Glyph::new([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('3', Glyph::new([0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('Y', Glyph::new([0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('A', Glyph::new([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('D', Glyph::new([0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110])),
    ('H', Glyph::new([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('E', Glyph::new([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111])),
    (' ', SPACE),
];

/// Look up the glyph for a character, ignoring case.
///
/// Returns `None` for unsupported characters; callers render nothing for them.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let upper = c.to_uppercase().next().unwrap_or(c);
    GLYPHS.iter().find(|(k, _)| *k == upper).map(|(_, g)| g)
}

/// Whether the font has a glyph for `c`.
pub fn is_supported(c: char) -> bool {
    glyph(c).is_some()
}
