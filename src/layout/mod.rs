//! Text-on-path layout
//!
//! Maps a [`GlyphRun`] onto a [`Path`], producing one placement per glyph.
//! The engine never draws; a rasterizer takes the positions and angles.
//!
//! # Key Concepts
//!
//! - **Overflow**: a run wider than the path is scaled down to fit exactly
//!   and forced to justified alignment. Spacing is never negative.
//! - **Anchors**: static text is centred on a fraction of the path chosen
//!   by the shape (its visual top) and re-targeted by [`PhraseAnchor`].
//! - **Wraparound**: glyph distances outside `[0, length]` are taken modulo
//!   the path length, so animated text loops round closed shapes.

mod glyphs;

pub use glyphs::{CHAR_WIDTH_EM, Glyph, GlyphRun};

use std::f64::consts::PI;

use crate::errors::LayoutError;
use crate::geometry::Path;
use crate::shapes::Anchor;
use crate::types::Point;

/// Where a run sits within the space left over on the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
    /// Spread the leftover space evenly between glyphs.
    Justified,
}

/// Which side of the shape static text is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhraseAnchor {
    /// Centre on the middle of the path, ignoring the shape's anchor.
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl PhraseAnchor {
    /// Re-target a shape's top anchor. `None` means no anchor shift.
    pub fn resolve(self, shape_anchor: Anchor) -> Option<Anchor> {
        match self {
            PhraseAnchor::None => None,
            PhraseAnchor::Top => Some(shape_anchor),
            PhraseAnchor::Right => Some(shape_anchor.rotate(2)),
            PhraseAnchor::Left => Some(shape_anchor.rotate(-2)),
            PhraseAnchor::Bottom => Some(shape_anchor.mirror()),
        }
    }
}

/// How glyphs sit relative to the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    /// Baseline on the curve.
    #[default]
    Baseline,
    /// Glyph box centred on the curve.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub alignment: Alignment,
    pub phrase_anchor: PhraseAnchor,
    /// Turn every glyph by π, for text read from the other side of the curve.
    pub rotate_characters: bool,
    /// Extra space after each glyph but the last, in path units.
    pub kerning: f64,
    pub vertical_align: VerticalAlign,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            phrase_anchor: PhraseAnchor::default(),
            rotate_characters: false,
            kerning: 0.0,
            vertical_align: VerticalAlign::default(),
        }
    }
}

impl LayoutOptions {
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_phrase_anchor(mut self, phrase_anchor: PhraseAnchor) -> Self {
        self.phrase_anchor = phrase_anchor;
        self
    }

    pub fn with_rotate_characters(mut self, rotate: bool) -> Self {
        self.rotate_characters = rotate;
        self
    }

    pub fn with_kerning(mut self, kerning: f64) -> Self {
        self.kerning = kerning;
        self
    }

    pub fn with_vertical_align(mut self, vertical_align: VerticalAlign) -> Self {
        self.vertical_align = vertical_align;
        self
    }
}

/// Where the run starts along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Static text centred on the shape's anchor.
    Anchored(Anchor),
    /// Animated text starting at `offset` path units.
    Animated { offset: f64 },
}

/// Transform for one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub glyph_index: usize,
    /// Glyph origin (baseline, horizontally centred on the advance).
    pub position: Point,
    /// Rotation in radians, clockwise on screen.
    pub angle: f64,
    /// True when the glyph was turned by π.
    pub flipped: bool,
    /// Arc length of the glyph centre along the path, after wrapping.
    pub distance: f64,
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub placements: Vec<GlyphPlacement>,
    /// Alignment actually used; overflow forces [`Alignment::Justified`].
    pub alignment: Alignment,
    /// Extra space inserted after each glyph.
    pub char_spacing: f64,
    /// Scale applied to advances and kerning; below 1 only on overflow.
    pub fit_scale: f64,
    pub path_length: f64,
    /// Unscaled width of the run including kerning.
    pub string_width: f64,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// True when the run did not fit and was scaled down.
    pub fn overflowed(&self) -> bool {
        self.fit_scale < 1.0
    }
}

/// Lay `run` out along `path`.
pub fn layout(
    run: &GlyphRun,
    path: &Path,
    options: &LayoutOptions,
    placement: Placement,
) -> Result<LayoutResult, LayoutError> {
    let path_length = path.total_length();
    if !(path_length.is_finite() && path_length > 0.0) {
        return Err(LayoutError::DegeneratePath {
            length: path_length,
        });
    }
    validate_metrics(run, options, placement)?;

    let count = run.len();
    if count == 0 {
        return Ok(LayoutResult {
            placements: Vec::new(),
            alignment: options.alignment,
            char_spacing: 0.0,
            fit_scale: 1.0,
            path_length,
            string_width: 0.0,
        });
    }

    let gaps = (count - 1) as f64;
    let string_width = run.typographic_width() + options.kerning * gaps;
    if !string_width.is_finite() {
        return Err(LayoutError::InvalidMetrics {
            what: "string width",
            value: string_width,
        });
    }

    let mut space_remaining = path_length - string_width;
    let (alignment, fit_scale) = if space_remaining < 0.0 {
        crate::log::debug!(
            path_length,
            string_width,
            "text overflows the path, justifying and scaling to fit"
        );
        space_remaining = 0.0;
        (Alignment::Justified, path_length / string_width)
    } else {
        (options.alignment, 1.0)
    };

    let (align_offset, char_spacing) = match alignment {
        Alignment::Left => (0.0, 0.0),
        Alignment::Center => (space_remaining / 2.0, 0.0),
        Alignment::Right => (space_remaining, 0.0),
        Alignment::Justified if count > 1 => (0.0, space_remaining / gaps),
        // A single glyph has nothing to spread against; centre it.
        Alignment::Justified => (space_remaining / 2.0, 0.0),
    };

    let shift = match placement {
        Placement::Anchored(anchor) => match options.phrase_anchor.resolve(anchor) {
            Some(target) => target.fraction() * path_length - path_length / 2.0,
            None => 0.0,
        },
        Placement::Animated { offset } => offset,
    };

    let kerning = options.kerning * fit_scale;
    let baseline_shift = match options.vertical_align {
        VerticalAlign::Baseline => 0.0,
        VerticalAlign::Center => (run.descent() - run.ascent()) / 2.0 * fit_scale,
    };

    let mut line_pos = shift + align_offset;
    let mut placements = Vec::with_capacity(count);
    for (glyph_index, glyph) in run.glyphs().iter().enumerate() {
        let advance = glyph.advance * fit_scale;
        let mut distance = line_pos + advance / 2.0;
        if !(0.0..=path_length).contains(&distance) {
            distance = distance.rem_euclid(path_length);
        }

        let point = path
            .point_at_distance(distance)
            .ok_or(LayoutError::DegeneratePath {
                length: path_length,
            })?;

        let flipped = options.rotate_characters;
        let (angle, up) = if flipped {
            (point.tangent_angle + PI, -point.normal)
        } else {
            (point.tangent_angle, point.normal)
        };

        placements.push(GlyphPlacement {
            glyph_index,
            position: point.position + up * baseline_shift,
            angle,
            flipped,
            distance,
        });

        line_pos += char_spacing + advance + kerning;
    }

    crate::log::trace!(
        glyphs = count,
        ?alignment,
        fit_scale,
        char_spacing,
        "laid out text on path"
    );

    Ok(LayoutResult {
        placements,
        alignment,
        char_spacing,
        fit_scale,
        path_length,
        string_width,
    })
}

fn validate_metrics(
    run: &GlyphRun,
    options: &LayoutOptions,
    placement: Placement,
) -> Result<(), LayoutError> {
    if let Some(glyph) = run
        .glyphs()
        .iter()
        .find(|g| !(g.advance.is_finite() && g.advance >= 0.0))
    {
        return Err(LayoutError::InvalidMetrics {
            what: "advance",
            value: glyph.advance,
        });
    }
    let checks = [
        ("kerning", options.kerning),
        ("ascent", run.ascent()),
        ("descent", run.descent()),
    ];
    for (what, value) in checks {
        if !value.is_finite() {
            return Err(LayoutError::InvalidMetrics { what, value });
        }
    }
    if let Placement::Animated { offset } = placement {
        if !offset.is_finite() {
            return Err(LayoutError::InvalidMetrics {
                what: "offset",
                value: offset,
            });
        }
    }
    Ok(())
}
