//! Inversion of piecewise linear functions.
//!
//! Swapping the axes of a non-monotonic function yields pieces whose
//! x-ranges overlap. Overlaps are folded pairwise into a single piece
//! holding the weighted average of both, where a piece's weight counts the
//! original segments already folded into it. Each pass builds a fresh
//! sequence, so the scan never mutates what it iterates.

use std::cmp::Ordering;

use itertools::Itertools;
use log::{debug, trace};

use super::{EPSILON, Piece, PiecewiseLinear, Point, construction};

/// A piece carrying the number of original segments merged into it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WeightedPiece {
    piece: Piece,
    weight: u32,
}

impl WeightedPiece {
    fn new(start: Point, end: Point, weight: u32) -> Self {
        WeightedPiece {
            piece: Piece::new(start, end),
            weight,
        }
    }

    fn start_x(&self) -> f64 {
        self.piece.start.x
    }

    fn end_x(&self) -> f64 {
        self.piece.end.x
    }

    fn point_at(&self, x: f64) -> Point {
        if x == self.piece.start.x {
            self.piece.start
        } else if x == self.piece.end.x {
            self.piece.end
        } else {
            Point::new(x, self.piece.value_at(x))
        }
    }

    /// The part of this piece over `[from, to]`, same weight.
    fn section(&self, from: f64, to: f64) -> Self {
        WeightedPiece::new(self.point_at(from), self.point_at(to), self.weight)
    }
}

fn by_position(a: &WeightedPiece, b: &WeightedPiece) -> Ordering {
    a.start_x()
        .total_cmp(&b.start_x())
        .then(a.end_x().total_cmp(&b.end_x()))
}

/// Index of the first adjacent pair whose x-ranges overlap.
fn first_overlap(pieces: &[WeightedPiece]) -> Option<usize> {
    pieces
        .iter()
        .tuple_windows()
        .position(|(p, q)| p.end_x() - q.start_x() >= EPSILON)
}

/// Replaces an overlapping pair with up to three non-overlapping pieces:
/// the part only the earlier piece covers, the weighted average over the
/// shared range, and the part only the longer piece covers.
fn merge_pair(p: WeightedPiece, q: WeightedPiece) -> Vec<WeightedPiece> {
    let (mut first, second) = if p.start_x() <= q.start_x() {
        (p, q)
    } else {
        (q, p)
    };
    let mut merged = Vec::with_capacity(3);

    let shared_start = second.start_x();
    if shared_start - first.start_x() > EPSILON {
        merged.push(first.section(first.start_x(), shared_start));
        first = first.section(shared_start, first.end_x());
    }

    let longer = if first.end_x() > second.end_x() {
        first
    } else {
        second
    };
    let shared_end = first.end_x().min(second.end_x());

    let weight = first.weight + second.weight;
    let average = |x: f64| {
        let y = (f64::from(first.weight) * first.piece.value_at(x)
            + f64::from(second.weight) * second.piece.value_at(x))
            / f64::from(weight);
        Point::new(x, y)
    };
    merged.push(WeightedPiece::new(
        average(shared_start),
        average(shared_end),
        weight,
    ));

    if longer.end_x() - shared_end > EPSILON {
        merged.push(longer.section(shared_end, longer.end_x()));
    }

    merged
}

/// Folds overlapping pieces until the sequence is single-valued.
fn merge_overlaps(mut pieces: Vec<WeightedPiece>) -> Vec<WeightedPiece> {
    pieces.sort_by(by_position);

    let mut passes = 0usize;
    while let Some(i) = first_overlap(&pieces) {
        trace!(
            "Merging [{}, {}] (weight {}) with [{}, {}] (weight {})",
            pieces[i].start_x(),
            pieces[i].end_x(),
            pieces[i].weight,
            pieces[i + 1].start_x(),
            pieces[i + 1].end_x(),
            pieces[i + 1].weight
        );

        let mut next: Vec<WeightedPiece> = pieces[..i]
            .iter()
            .copied()
            .chain(merge_pair(pieces[i], pieces[i + 1]))
            .chain(pieces[i + 2..].iter().copied())
            .collect();
        next.sort_by(by_position);

        pieces = next;
        passes += 1;
    }

    debug!(
        "Inverse merge finished after {} passes with {} pieces",
        passes,
        pieces.len()
    );
    pieces
}

impl PiecewiseLinear {
    /// The inverse relation as a new single-valued function.
    ///
    /// Where several branches map to the same value, the inverse returns
    /// their weighted average. Unset functions yield an unset inverse.
    pub fn inverse(&self) -> PiecewiseLinear {
        if self.pieces.is_empty() {
            return PiecewiseLinear::new();
        }

        let swapped: Vec<Point> = construction::pieces_to_points(&self.pieces)
            .into_iter()
            .map(Point::swapped)
            .collect();
        let (swapped, _): (Vec<Point>, Vec<String>) =
            construction::remove_near_duplicates(swapped).into();

        let pieces = construction::points_to_pieces(&swapped)
            .into_iter()
            .map(|piece| WeightedPiece {
                piece: piece.normalized(),
                weight: 1,
            })
            .collect();

        let merged = merge_overlaps(pieces)
            .into_iter()
            .map(|weighted| weighted.piece)
            .collect();

        PiecewiseLinear::from_pieces(construction::simplify_pieces(merged))
    }
}
