use itertools::Itertools;

use crate::{
    types::{Validate, ValidationResult},
    validation_utils,
};

use super::{EPSILON, PiecewiseLinear};

impl Validate for PiecewiseLinear {
    /// Checks the piece sequence invariants.
    ///
    /// # Returns
    /// - `Valid(())` for a configured, well-formed function.
    /// - `Warnings` for an unset function, gaps between pieces, or adjacent
    ///   collinear pieces.
    /// - `Invalid` for non-finite coordinates, reversed pieces, unordered or
    ///   overlapping pieces.
    fn validate(&self) -> ValidationResult {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        if self.pieces.is_empty() {
            warnings.push("function is not configured".to_string());
            return validation_utils::_return(warnings, errors);
        }

        let coordinates: Vec<f64> = self
            .pieces
            .iter()
            .flat_map(|p| [p.start.x, p.start.y, p.end.x, p.end.y])
            .collect();
        validation_utils::_chain(
            validation_utils::validate_finite(&coordinates),
            &mut warnings,
            &mut errors,
        );

        let starts: Vec<f64> = self.pieces.iter().map(|p| p.start.x).collect();
        validation_utils::_chain(
            validation_utils::validate_ascending(&starts),
            &mut warnings,
            &mut errors,
        );

        for (i, piece) in self.pieces.iter().enumerate() {
            if piece.start.x > piece.end.x {
                errors.push(format!(
                    "piece {} runs backwards: {} > {}",
                    i, piece.start.x, piece.end.x
                ));
            }
        }

        for (i, (previous, current)) in self.pieces.iter().tuple_windows().enumerate() {
            let gap = current.start.x - previous.end.x;
            if gap <= -EPSILON {
                errors.push(format!(
                    "pieces {} and {} overlap on [{}, {}]",
                    i,
                    i + 1,
                    current.start.x,
                    previous.end.x
                ));
            } else if gap >= EPSILON {
                warnings.push(format!(
                    "gap between pieces {} and {} on [{}, {}]",
                    i,
                    i + 1,
                    previous.end.x,
                    current.start.x
                ));
            }

            if previous.is_collinear_with(current) {
                warnings.push(format!(
                    "pieces {} and {} are collinear and could be merged",
                    i,
                    i + 1
                ));
            }
        }

        validation_utils::_return(warnings, errors)
    }
}
