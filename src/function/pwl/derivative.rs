use super::{Piece, PiecewiseLinear, construction};

impl PiecewiseLinear {
    /// The derivative as a new step function: each piece becomes a flat
    /// piece at its slope. Unset functions yield an unset derivative.
    pub fn derivative(&self) -> PiecewiseLinear {
        let steps = self
            .pieces
            .iter()
            .map(|p| Piece::constant(p.start.x, p.end.x, p.slope()))
            .collect();

        PiecewiseLinear::from_pieces(construction::simplify_pieces(steps))
    }
}
