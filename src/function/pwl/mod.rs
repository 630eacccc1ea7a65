//! # Piecewise Linear Functions
//!
//! A function made of linear pieces joined at breakpoints. It is configured
//! from its textual encoding, an ordered list of `x;y` breakpoints separated
//! by whitespace:
//!
//! ```rust
//! use fcm_membership::PiecewiseLinear;
//!
//! let mut triangle = PiecewiseLinear::new();
//! triangle.set(&["0;0 2;2 4;0"]).unwrap();
//!
//! assert_eq!(triangle.get(), "0;0 2;2 4;0");
//! assert_eq!(triangle.evaluate(1.0), 1.0);
//! assert_eq!(triangle.evaluate(5.0), -1.0); // extrapolated
//! ```
//!
//! ## Breakpoints
//!
//! - x-coordinates must not decrease.
//! - Two breakpoints with the same x and different y describe a jump.
//! - Breakpoints within `EPSILON` of their predecessor are dropped.
//!
//! ## Derived functions
//!
//! [`PiecewiseLinear::derivative`] and [`PiecewiseLinear::inverse`] return
//! new functions. Where the source is not injective, the inverse reports
//! the weighted average of all branches.

pub mod construction;
pub mod derivative;
pub mod encoding;
pub mod evaluation;
pub mod inverse;
pub mod piece;
pub mod point;
pub mod validation;

use std::{fmt, str::FromStr};

use itertools::Itertools;
use log::{debug, warn};

pub use piece::Piece;
pub use point::Point;

use super::{FunctionError, InvalidArgument, MembershipFunction, SisoFunction};

/// Tolerance shared by breakpoint deduplication, piece simplification and
/// overlap detection during inversion.
///
/// Whether the point tolerance and the slope tolerance should differ is
/// unresolved; both use this value.
pub const EPSILON: f64 = 1e-7;

/// Separator between breakpoints in the textual encoding.
pub const POINT_SEPARATOR: &str = " ";

const INFO: &str = "Simple piecewise linear function.";

/// A piecewise linear function of one real variable.
///
/// Pieces are ordered by `start.x`, contiguous and never collinear with
/// their neighbour. An unset function has no pieces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiecewiseLinear {
    pieces: Vec<Piece>,
}

impl PiecewiseLinear {
    /// Creates an unset function.
    pub fn new() -> Self {
        PiecewiseLinear { pieces: Vec::new() }
    }

    /// Creates a function from structured breakpoints.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, FunctionError> {
        let mut function = PiecewiseLinear::new();
        function.set_points(points)?;
        Ok(function)
    }

    pub(crate) fn from_pieces(pieces: Vec<Piece>) -> Self {
        PiecewiseLinear { pieces }
    }

    /// Fixed description of this function kind.
    pub fn info(&self) -> &'static str {
        INFO
    }

    /// Whether `set` has succeeded at least once.
    pub fn is_configured(&self) -> bool {
        !self.pieces.is_empty()
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Breakpoints reconstructed from the pieces.
    pub fn points(&self) -> Vec<Point> {
        construction::pieces_to_points(&self.pieces)
    }

    /// The x-range covered by the pieces, if configured.
    pub fn domain(&self) -> Option<(f64, f64)> {
        match (self.pieces.first(), self.pieces.last()) {
            (Some(first), Some(last)) => Some((first.start.x, last.end.x)),
            _ => None,
        }
    }

    /// Textual encoding `x;y x;y ...`, empty when unset.
    pub fn get(&self) -> String {
        self.points().iter().join(POINT_SEPARATOR)
    }

    /// Replaces the function with the breakpoints in `parameters`.
    ///
    /// `parameters` is either a single string holding every breakpoint or
    /// one string per breakpoint. On error the function is left unchanged.
    pub fn set(&mut self, parameters: &[&str]) -> Result<(), FunctionError> {
        let points = construction::parse_breakpoints(parameters)?;
        self.configure(points)
    }

    /// Same as [`PiecewiseLinear::set`] for already separated coordinates.
    pub fn set_points(&mut self, points: &[(f64, f64)]) -> Result<(), FunctionError> {
        if points.is_empty() {
            return Err(InvalidArgument::Empty.into());
        }

        let points: Vec<Point> = points.iter().copied().map(Point::from).collect();
        if let Some(point) = points
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(InvalidArgument::NonFiniteCoordinate(point.to_string()).into());
        }

        self.configure(points)
    }

    fn configure(&mut self, points: Vec<Point>) -> Result<(), FunctionError> {
        construction::check_order(&points)?;

        let (pieces, warnings): (Vec<Piece>, Vec<String>) =
            construction::build_pieces(points)?.into();
        warnings.into_iter().for_each(|w| warn!("{}", w));

        debug!(
            "Configured piecewise linear function with {} pieces",
            pieces.len()
        );
        self.pieces = pieces;
        Ok(())
    }

    /// Merges adjacent collinear pieces.
    pub fn simplify(&mut self) {
        self.pieces = construction::simplify_pieces(std::mem::take(&mut self.pieces));
    }
}

impl SisoFunction for PiecewiseLinear {
    fn info(&self) -> &'static str {
        PiecewiseLinear::info(self)
    }

    fn get(&self) -> String {
        PiecewiseLinear::get(self)
    }

    fn set(&mut self, parameters: &[&str]) -> Result<(), FunctionError> {
        PiecewiseLinear::set(self, parameters)
    }

    fn evaluate(&self, input: f64) -> f64 {
        PiecewiseLinear::evaluate(self, input)
    }

    fn derivative(&self) -> MembershipFunction {
        PiecewiseLinear::derivative(self).into()
    }

    fn inverse(&self) -> MembershipFunction {
        PiecewiseLinear::inverse(self).into()
    }

    fn is_configured(&self) -> bool {
        PiecewiseLinear::is_configured(self)
    }
}

impl fmt::Display for PiecewiseLinear {
    /// Formats the function as its textual encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get())
    }
}

impl FromStr for PiecewiseLinear {
    type Err = FunctionError;

    /// Parses the textual encoding. An empty string yields an unset
    /// function, mirroring what `get` produces for one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut function = PiecewiseLinear::new();
        if !s.trim().is_empty() {
            function.set(&[s])?;
        }
        Ok(function)
    }
}
