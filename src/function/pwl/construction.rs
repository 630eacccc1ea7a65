//! Conversions between breakpoint lists and piece sequences.

use itertools::Itertools;

use crate::{
    function::error::{FunctionError, InvalidArgument},
    types::WithWarnings,
};

use super::{Piece, Point};

/// Splits raw parameters into breakpoint tokens and parses them.
///
/// A single parameter holds all breakpoints separated by whitespace; several
/// parameters hold one breakpoint each.
pub fn parse_breakpoints(parameters: &[&str]) -> Result<Vec<Point>, FunctionError> {
    let tokens: Vec<&str> = match parameters {
        [] => return Err(InvalidArgument::Empty.into()),
        [joined] => joined.split_whitespace().collect(),
        separate => separate.iter().map(|token| token.trim()).collect(),
    };

    match tokens.len() {
        0 => Err(InvalidArgument::Empty.into()),
        1 => Err(InvalidArgument::InsufficientPoints(1).into()),
        _ => tokens
            .into_iter()
            .map(|token| token.parse::<Point>().map_err(FunctionError::from))
            .collect(),
    }
}

/// Rejects any strict decrease of x between consecutive breakpoints.
pub fn check_order(points: &[Point]) -> Result<(), FunctionError> {
    match points
        .iter()
        .tuple_windows()
        .position(|(previous, current)| current.x < previous.x)
    {
        Some(i) => Err(FunctionError::OrderViolation {
            index: i + 1,
            previous: points[i].x,
            current: points[i + 1].x,
        }),
        None => Ok(()),
    }
}

/// Drops every breakpoint that is within tolerance of the one kept before it.
pub fn remove_near_duplicates(points: Vec<Point>) -> WithWarnings<Vec<Point>, String> {
    let mut warnings = Vec::new();
    let mut kept: Vec<Point> = Vec::with_capacity(points.len());

    for point in points {
        match kept.last() {
            Some(previous) if previous.is_close(&point) => warnings.push(format!(
                "Breakpoint {} duplicates {} and was removed",
                point, previous
            )),
            _ => kept.push(point),
        }
    }

    WithWarnings::new(kept, warnings)
}

/// Sign of the direction the sequence moves away from its first point, or
/// `None` when every point shares that x.
fn heading<'a>(mut points: impl Iterator<Item = &'a Point>) -> Option<f64> {
    let anchor = points.next()?;
    points
        .find(|p| !p.shares_x(anchor))
        .map(|p| (p.x - anchor.x).signum())
}

/// Connects consecutive breakpoints with pieces.
///
/// Breakpoints sharing x mark a vertical jump and are not connected. A jump
/// at either end of the sequence gets a flat piece one unit outside the
/// domain so the boundary value is kept.
pub fn points_to_pieces(points: &[Point]) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(points.len() + 1);
    let [first, second, ..] = points else {
        return pieces;
    };

    if first.shares_x(second) {
        let outward = -heading(points.iter()).unwrap_or(1.0);
        pieces.push(Piece::new(Point::new(first.x + outward, first.y), *first));
    }

    let mut previous = *first;
    for &point in &points[1..] {
        if previous.shares_x(&point) {
            previous = Point::new(previous.x, point.y);
        } else {
            pieces.push(Piece::new(previous, point));
            previous = point;
        }
    }

    let n = points.len();
    if points[n - 2].shares_x(&points[n - 1]) {
        let outward = -heading(points.iter().rev()).unwrap_or(-1.0);
        pieces.push(Piece::new(
            previous,
            Point::new(previous.x + outward, previous.y),
        ));
    }

    pieces
}

/// Rebuilds the breakpoint list that `points_to_pieces` would turn back
/// into `pieces`.
///
/// A piece's start is only repeated when it differs from the previous
/// piece's end, which marks a jump (or a gap).
pub fn pieces_to_points(pieces: &[Piece]) -> Vec<Point> {
    let mut points = Vec::with_capacity(pieces.len() + 1);
    let Some(first) = pieces.first() else {
        return points;
    };

    points.push(first.start);
    points.push(first.end);

    for (previous, current) in pieces.iter().tuple_windows() {
        if !previous.end.is_close(&current.start) {
            points.push(current.start);
        }
        points.push(current.end);
    }

    points
}

/// Merges runs of adjacent collinear pieces into single pieces.
pub fn simplify_pieces(pieces: Vec<Piece>) -> Vec<Piece> {
    pieces
        .into_iter()
        .fold(Vec::new(), |mut merged: Vec<Piece>, piece| {
            match merged.last_mut() {
                Some(last) if last.is_collinear_with(&piece) => {
                    *last = Piece::new(last.start, piece.end);
                }
                _ => merged.push(piece),
            }
            merged
        })
}

/// Full construction pipeline for ordered breakpoints.
pub fn build_pieces(points: Vec<Point>) -> Result<WithWarnings<Vec<Piece>, String>, FunctionError> {
    let (points, warnings): (Vec<Point>, Vec<String>) = remove_near_duplicates(points).into();

    if points.len() < 2 {
        return Err(InvalidArgument::InsufficientPoints(points.len()).into());
    }

    let pieces = simplify_pieces(points_to_pieces(&points));
    Ok(WithWarnings::new(pieces, warnings))
}
