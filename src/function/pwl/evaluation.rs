use super::{Piece, PiecewiseLinear};

impl PiecewiseLinear {
    /// Evaluates the function at `x`.
    ///
    /// Inputs left of the first piece or at/after the end of the last piece
    /// are extrapolated along the boundary piece's line. An unset function
    /// evaluates to `0.0`; check [`PiecewiseLinear::is_configured`] first
    /// when that matters. A NaN input yields NaN.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.piece_for(x).map_or(0.0, |piece| piece.value_at(x))
    }

    /// The piece whose line is used for `x`.
    fn piece_for(&self, x: f64) -> Option<&Piece> {
        let first = self.pieces.first()?;
        if x < first.start.x {
            return Some(first);
        }

        let index = self.pieces.partition_point(|p| p.end.x <= x);
        match self.pieces.get(index) {
            Some(piece) if piece.contains(x) => Some(piece),
            // x falls in a gap between two pieces, or is NaN
            Some(_) => index
                .checked_sub(1)
                .and_then(|i| self.pieces.get(i))
                .or(Some(first)),
            None => self.pieces.last(),
        }
    }
}
