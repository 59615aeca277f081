//! Shaped glyph runs, as handed over by a text-shaping collaborator.

/// Average character widths in hundredths of the nominal character width,
/// for the printable ASCII range `' '..='~'`.
#[rustfmt::skip]
const PROPORTIONAL_WIDTHS: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Width used for characters outside the table.
const FALLBACK_WIDTH: u8 = 100;

/// Nominal character width as a fraction of the font size.
pub const CHAR_WIDTH_EM: f64 = 0.55;

/// Ascent, descent and leading of the built-in proportional metrics, in em.
const PROPORTIONAL_ASCENT: f64 = 0.8;
const PROPORTIONAL_DESCENT: f64 = 0.2;
const PROPORTIONAL_LEADING: f64 = 0.2;

/// One shaped glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// Distance the pen moves after this glyph.
    pub advance: f64,
    /// Width of the inked box, for overlays.
    pub visual_width: f64,
}

impl Glyph {
    pub fn new(advance: f64) -> Self {
        Self {
            advance,
            visual_width: advance,
        }
    }
}

/// An ordered run of glyphs with the line metrics of its font.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphRun {
    glyphs: Vec<Glyph>,
    typographic_width: f64,
    ascent: f64,
    descent: f64,
    leading: f64,
}

impl GlyphRun {
    pub fn new(glyphs: Vec<Glyph>, ascent: f64, descent: f64, leading: f64) -> Self {
        let typographic_width = glyphs.iter().map(|g| g.advance).sum();
        Self {
            glyphs,
            typographic_width,
            ascent,
            descent,
            leading,
        }
    }

    /// A run with the given advances and zero line metrics.
    pub fn from_advances(advances: impl IntoIterator<Item = f64>) -> Self {
        Self::new(advances.into_iter().map(Glyph::new).collect(), 0.0, 0.0, 0.0)
    }

    /// Approximate shaping of `text` from a built-in proportional width
    /// table. Good enough for demos and tests; real shaping is external.
    pub fn proportional(text: &str, font_size: f64) -> Self {
        let em = font_size * CHAR_WIDTH_EM * 0.01;
        let glyphs = text
            .chars()
            .map(|c| {
                let width = match c {
                    ' '..='~' => PROPORTIONAL_WIDTHS[c as usize - 0x20],
                    _ => FALLBACK_WIDTH,
                };
                Glyph::new(f64::from(width) * em)
            })
            .collect();
        Self::new(
            glyphs,
            PROPORTIONAL_ASCENT * font_size,
            PROPORTIONAL_DESCENT * font_size,
            PROPORTIONAL_LEADING * font_size,
        )
    }

    pub fn with_metrics(mut self, ascent: f64, descent: f64, leading: f64) -> Self {
        self.ascent = ascent;
        self.descent = descent;
        self.leading = leading;
        self
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Sum of advances, before kerning.
    pub fn typographic_width(&self) -> f64 {
        self.typographic_width
    }

    pub fn ascent(&self) -> f64 {
        self.ascent
    }

    pub fn descent(&self) -> f64 {
        self.descent
    }

    pub fn leading(&self) -> f64 {
        self.leading
    }
}
