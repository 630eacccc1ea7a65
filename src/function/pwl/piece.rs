use super::{EPSILON, Point};

/// A linear segment between two breakpoints.
///
/// Slope and intercept are computed once from the endpoints. A segment whose
/// endpoints share x (within `EPSILON`) has no finite slope; it is stored as
/// the flat line `y = end.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub start: Point,
    pub end: Point,
    slope: f64,
    intercept: f64,
}

impl Piece {
    pub fn new(start: Point, end: Point) -> Self {
        let (slope, intercept) = if (start.x - end.x).abs() > EPSILON {
            let slope = (start.y - end.y) / (start.x - end.x);
            (slope, start.y - slope * start.x)
        } else {
            (0.0, end.y)
        };

        Piece {
            start,
            end,
            slope,
            intercept,
        }
    }

    /// A flat segment holding `y` over `[start_x, end_x]`.
    pub fn constant(start_x: f64, end_x: f64, y: f64) -> Self {
        Piece::new(Point::new(start_x, y), Point::new(end_x, y))
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluates the segment's line at `x`, inside or outside its range.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Half-open membership test on `[start.x, end.x)`.
    pub fn contains(&self, x: f64) -> bool {
        self.start.x <= x && x < self.end.x
    }

    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Same endpoints in reverse order when the piece runs right to left.
    pub fn normalized(self) -> Self {
        if self.start.x > self.end.x {
            Piece {
                start: self.end,
                end: self.start,
                ..self
            }
        } else {
            self
        }
    }

    /// Slope and intercept both agree within `EPSILON`.
    pub fn is_collinear_with(&self, other: &Piece) -> bool {
        (self.slope - other.slope).abs() < EPSILON
            && (self.intercept - other.intercept).abs() < EPSILON
    }
}
