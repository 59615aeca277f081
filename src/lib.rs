//! Path geometry and text-on-path layout.
//!
//! Build an outline for a shape, measure it, and flow a run of glyphs along
//! it:
//!
//! ```
//! use pathtext::layout::{GlyphRun, LayoutOptions};
//! use pathtext::shapes::{CircleParams, ShapeKind, Viewport};
//!
//! let shape = ShapeKind::from(CircleParams::default());
//! let run = GlyphRun::proportional("HELLO", 24.0);
//! let result = pathtext::layout_on_shape(
//!     &run,
//!     &shape,
//!     &Viewport::new(400.0, 400.0),
//!     &LayoutOptions::default(),
//!     None,
//! )
//! .unwrap();
//! assert_eq!(result.placements.len(), 5);
//! ```

use pest_derive::Parser;

pub mod animation;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod log;
pub mod pathdata;
pub mod shapes;
pub mod types;

pub use animation::{AnimationState, Direction, direction_sign};
pub use errors::{LayoutError, PathDataError, PathError, ShapeError};
pub use geometry::{Path, PathBuilder, PathPoint, PathSegment};
pub use layout::{GlyphRun, LayoutOptions, LayoutResult, Placement};
pub use pathdata::parse_path_data;
pub use shapes::{ShapeGenerator, ShapeKind, Viewport};
pub use types::Point;

#[derive(Parser)]
#[grammar = "pathdata.pest"]
pub struct PathDataParser;

/// Build `shape` in `viewport` and lay `run` out along it.
///
/// With no animation the text is centred on the shape's anchor (re-targeted
/// by the phrase anchor); otherwise it starts at the animation's offset.
pub fn layout_on_shape(
    run: &GlyphRun,
    shape: &ShapeKind,
    viewport: &Viewport,
    options: &LayoutOptions,
    animation: Option<&AnimationState>,
) -> Result<LayoutResult, LayoutError> {
    let path = shape.build(viewport)?;
    let placement = match animation {
        Some(state) => Placement::Animated {
            offset: state.offset(),
        },
        None => Placement::Anchored(shape.anchor()),
    };
    layout::layout(run, &path, options, placement)
}
