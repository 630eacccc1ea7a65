#![allow(dead_code)]

use fcm_membership::PiecewiseLinear;

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

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn pwl(encoding: &str) -> PiecewiseLinear {
    let mut function = PiecewiseLinear::new();
    function
        .set(&[encoding])
        .unwrap_or_else(|e| panic!("Failed to configure '{}': {}", encoding, e));
    function
}
