use std::{fmt, str::FromStr};

use crate::function::error::InvalidArgument;

use super::EPSILON;

/// Separator between the two coordinates of a breakpoint.
pub const COORDINATE_SEPARATOR: char = ';';

/// A breakpoint `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The same point with its axes exchanged.
    pub fn swapped(self) -> Self {
        Point {
            x: self.y,
            y: self.x,
        }
    }

    /// Both coordinates lie within `EPSILON` of `other`'s.
    pub fn is_close(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    /// The x-coordinates lie within `EPSILON` of each other.
    pub fn shares_x(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < EPSILON
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    /// Formats the point as `x;y`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.x, COORDINATE_SEPARATOR, self.y)
    }
}

impl FromStr for Point {
    type Err = InvalidArgument;

    /// Parses a single `x;y` token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut coords = token.split(COORDINATE_SEPARATOR);

        let (Some(x), Some(y), None) = (coords.next(), coords.next(), coords.next()) else {
            return Err(InvalidArgument::MalformedPoint(token.to_string()));
        };

        let parse = |c: &str| {
            c.trim()
                .parse::<f64>()
                .map_err(|_| InvalidArgument::MalformedPoint(token.to_string()))
        };
        let point = Point::new(parse(x)?, parse(y)?);

        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(InvalidArgument::NonFiniteCoordinate(token.to_string()));
        }

        Ok(point)
    }
}
