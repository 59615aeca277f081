//! SVG-style path data: printing paths and reading them back.
//!
//! Output is always absolute (`M`, `L`, `Q`, `C`, `Z`) with single spaces
//! and the shortest decimal form of each coordinate, so printing and
//! re-parsing reproduces the exact same segments.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};
use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::errors::PathDataError;
use crate::geometry::{Path, PathSegment};
use crate::types::Point;
use crate::{PathDataParser, Rule};

/// Name shown in diagnostics for parsed text.
const SOURCE_NAME: &str = "path data";

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *segment {
                PathSegment::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathSegment::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathSegment::QuadCurveTo { control, end } => write!(
                    f,
                    "Q {} {} {} {}",
                    control.x, control.y, end.x, end.y
                )?,
                PathSegment::CubicCurveTo {
                    control1,
                    control2,
                    end,
                } => write!(
                    f,
                    "C {} {} {} {} {} {}",
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y
                )?,
                PathSegment::ClosePath => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path_data(s)
    }
}

/// Parse SVG path data (`M m L l H h V v Q q C c Z z`) into a [`Path`].
///
/// Numbers may be separated by whitespace and/or commas. Extra coordinate
/// groups repeat the command; after a move they are line-tos.
pub fn parse_path_data(source: &str) -> Result<Path, PathDataError> {
    let pairs = PathDataParser::parse(Rule::path_data, source)
        .map_err(|err| syntax_error(source, &err))?;

    let mut reader = Reader::default();
    for pair in pairs.flatten().filter(|p| p.as_rule() == Rule::command) {
        reader.command(source, pair)?;
    }
    Ok(Path::new(reader.segments)?)
}

fn named(source: &str) -> NamedSource<String> {
    NamedSource::new(SOURCE_NAME, source.to_string())
}

fn syntax_error(source: &str, err: &pest::error::Error<Rule>) -> PathDataError {
    let span = match err.location {
        InputLocation::Pos(pos) => SourceSpan::from((pos, 0)),
        InputLocation::Span((start, end)) => SourceSpan::from((start, end - start)),
    };
    PathDataError::Syntax {
        message: err.variant.message().into_owned(),
        src: named(source),
        span,
    }
}

fn span_of(pair: &Pair<'_, Rule>) -> SourceSpan {
    let span = pair.as_span();
    SourceSpan::from((span.start(), span.end() - span.start()))
}

/// Pen state while turning commands into segments.
#[derive(Default)]
struct Reader {
    segments: Vec<PathSegment>,
    /// `None` before the first move; after a close the pen rests on the
    /// subpath start but a new subpath has not been opened yet.
    current: Option<Point>,
    subpath_start: Option<Point>,
    closed: bool,
}

impl Reader {
    fn pen(&self) -> Point {
        self.current.unwrap_or(DVec2::ZERO)
    }

    /// Drawing right after a close implicitly reopens at the old start.
    fn reopen(&mut self) {
        if self.closed {
            if let Some(start) = self.subpath_start {
                self.segments.push(PathSegment::MoveTo(start));
            }
            self.closed = false;
        }
    }

    fn move_to(&mut self, p: Point) {
        self.segments.push(PathSegment::MoveTo(p));
        self.current = Some(p);
        self.subpath_start = Some(p);
        self.closed = false;
    }

    fn draw(&mut self, segment: PathSegment) {
        self.reopen();
        self.segments.push(segment);
        if let Some(end) = segment.end_point() {
            self.current = Some(end);
        }
    }

    /// A repeated close has nothing left to close and is dropped.
    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.segments.push(PathSegment::ClosePath);
        self.current = self.subpath_start;
        self.closed = true;
    }

    fn command(&mut self, source: &str, pair: Pair<'_, Rule>) -> Result<(), PathDataError> {
        let span = span_of(&pair);
        let mut inner = pair.into_inner();
        let letter = inner
            .next()
            .and_then(|p| p.as_str().chars().next())
            .unwrap_or('Z');

        let mut args = Vec::new();
        for number in inner {
            let text = number.as_str();
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => args.push(value),
                _ => {
                    return Err(PathDataError::InvalidNumber {
                        text: text.to_string(),
                        src: named(source),
                        span: span_of(&number),
                    });
                }
            }
        }

        let arity = match letter.to_ascii_uppercase() {
            'M' | 'L' => 2,
            'H' | 'V' => 1,
            'Q' => 4,
            'C' => 6,
            _ => 0,
        };
        let wrong_count = if arity == 0 {
            !args.is_empty()
        } else {
            args.is_empty() || args.len() % arity != 0
        };
        if wrong_count {
            return Err(PathDataError::ArgumentCount {
                command: letter,
                expected: arity,
                src: named(source),
                span,
            });
        }

        if arity == 0 {
            self.close();
            return Ok(());
        }

        let relative = letter.is_ascii_lowercase();
        for (repeat, group) in args.chunks(arity).enumerate() {
            let origin = if relative { self.pen() } else { DVec2::ZERO };
            let at = |i: usize| origin + dvec2(group[i], group[i + 1]);
            match letter.to_ascii_uppercase() {
                'M' if repeat == 0 => self.move_to(at(0)),
                'M' | 'L' => self.draw(PathSegment::LineTo(at(0))),
                'H' => {
                    let y = self.pen().y;
                    let x = if relative { self.pen().x + group[0] } else { group[0] };
                    self.draw(PathSegment::LineTo(dvec2(x, y)));
                }
                'V' => {
                    let x = self.pen().x;
                    let y = if relative { self.pen().y + group[0] } else { group[0] };
                    self.draw(PathSegment::LineTo(dvec2(x, y)));
                }
                'Q' => self.draw(PathSegment::QuadCurveTo {
                    control: at(0),
                    end: at(2),
                }),
                _ => self.draw(PathSegment::CubicCurveTo {
                    control1: at(0),
                    control2: at(2),
                    end: at(4),
                }),
            }
        }
        Ok(())
    }
}
