#![cfg(test)]

use crate::function::pwl::PiecewiseLinear;

// Helper function to assert floating point equality with tolerance
pub fn assert_float_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() < tolerance,
        "Expected {} to be approximately equal to {} (tolerance: {})",
        a,
        b,
        tolerance
    );
}

/// Build a function from its textual encoding, panicking on bad input.
pub fn pwl(encoding: &str) -> PiecewiseLinear {
    encoding
        .parse()
        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", encoding, e))
}

/// Collect `(start, end)` coordinate pairs of every piece for comparisons.
pub fn piece_coords(function: &PiecewiseLinear) -> Vec<((f64, f64), (f64, f64))> {
    function
        .pieces()
        .iter()
        .map(|p| ((p.start.x, p.start.y), (p.end.x, p.end.y)))
        .collect()
}
