//! Error types with diagnostics using miette
//!
//! Configuration problems fail fast when a path is built; layout problems are
//! rejected before any glyph is placed. Out-of-range distance queries are not
//! errors at all: the path walker returns `None` for them.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Path Errors
// ============================================================================

/// Errors from constructing a [`Path`](crate::geometry::Path) out of segments.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("segment {index} draws without a current point")]
    #[diagnostic(
        code(pathtext::path::missing_move_to),
        help("every subpath must start with a MoveTo, including the one after a ClosePath")
    )]
    MissingMoveTo { index: usize },

    #[error("segment {index} has a NaN or infinite coordinate")]
    #[diagnostic(code(pathtext::path::non_finite))]
    NonFinite { index: usize },
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Configuration errors raised while generating a shape's path.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("spiral theta step is zero")]
    #[diagnostic(
        code(pathtext::shape::zero_theta_step),
        help("a zero step never reaches the end angle; use a small non-zero step such as π/8")
    )]
    ZeroThetaStep,

    #[error("invalid {field}: {value} ({reason})")]
    #[diagnostic(code(pathtext::shape::invalid_parameter))]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("need at least {needed} points, got {got}")]
    #[diagnostic(code(pathtext::shape::too_few_points))]
    TooFewPoints { needed: usize, got: usize },

    #[error("viewport must have a finite, positive size (got {width} x {height})")]
    #[diagnostic(code(pathtext::shape::invalid_viewport))]
    InvalidViewport { width: f64, height: f64 },

    #[error("{shape} produced a path with no length")]
    #[diagnostic(
        code(pathtext::shape::degenerate),
        help("check that the size parameters are not all zero")
    )]
    Degenerate { shape: &'static str },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] PathError),
}

impl ShapeError {
    /// Wrap a failed numeric check for a named parameter.
    pub(crate) fn parameter(field: &'static str, value: f64, err: NumericError) -> Self {
        ShapeError::InvalidParameter {
            field,
            value,
            reason: err.to_string(),
        }
    }
}

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors that stop a text-on-path layout pass before any glyph is placed.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("cannot lay text along a path of length {length}")]
    #[diagnostic(
        code(pathtext::layout::degenerate_path),
        help("skip rendering, or place the text at a single point instead")
    )]
    DegeneratePath { length: f64 },

    #[error("invalid {what}: {value}")]
    #[diagnostic(code(pathtext::layout::invalid_metrics))]
    InvalidMetrics { what: &'static str, value: f64 },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Shape(#[from] ShapeError),
}

// ============================================================================
// Path Data Errors
// ============================================================================

/// Errors from reading SVG-style path data text.
#[derive(Error, Diagnostic, Debug)]
pub enum PathDataError {
    #[error("invalid path data: {message}")]
    #[diagnostic(code(pathtext::pathdata::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number {text:?}")]
    #[diagnostic(code(pathtext::pathdata::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a finite number")]
        span: SourceSpan,
    },

    #[error("command {command:?} expects {expected} numbers per repetition")]
    #[diagnostic(code(pathtext::pathdata::argument_count))]
    ArgumentCount {
        command: char,
        expected: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("wrong number of arguments")]
        span: SourceSpan,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] PathError),
}
