#![cfg(test)]

use itertools::Itertools;
use proptest::prelude::*;

use fcm_membership::{EPSILON, PiecewiseLinear};

/// Breakpoints on an integer grid with strictly increasing x.
fn breakpoints() -> impl Strategy<Value = Vec<(f64, f64)>> {
    (-20i32..20, prop::collection::vec((1i32..5, -10i32..10), 1..8)).prop_map(|(x0, steps)| {
        let mut x = x0;
        let mut points = vec![(f64::from(x0), 0.0)];
        for (dx, y) in steps {
            x += dx;
            points.push((f64::from(x), f64::from(y)));
        }
        points
    })
}

/// Breakpoints with non-decreasing x, so repeated x values produce jumps,
/// including the case where every breakpoint shares one x.
fn breakpoints_with_jumps() -> impl Strategy<Value = Vec<(f64, f64)>> {
    let stepped = (-20i32..20, prop::collection::vec((0i32..3, -5i32..5), 1..8)).prop_map(
        |(x0, steps)| {
            let mut x = x0;
            let mut points = vec![(f64::from(x0), 0.0)];
            for (dx, y) in steps {
                x += dx;
                points.push((f64::from(x), f64::from(y)));
            }
            points
        },
    );
    let vertical = (-20i32..20, prop::collection::vec(-5i32..5, 2..6)).prop_map(|(x, ys)| {
        ys.into_iter()
            .map(|y| (f64::from(x), f64::from(y)))
            .collect::<Vec<_>>()
    });

    prop_oneof![stepped, vertical]
        .prop_filter("needs two distinct breakpoints", |points| {
            points.iter().any(|p| *p != points[0])
        })
}

/// Breakpoints with both coordinates strictly increasing.
fn increasing_breakpoints() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((1i32..5, 1i32..5), 1..8).prop_map(|steps| {
        let (mut x, mut y) = (0, 0);
        let mut points = vec![(0.0, 0.0)];
        for (dx, dy) in steps {
            x += dx;
            y += dy;
            points.push((f64::from(x), f64::from(y)));
        }
        points
    })
}

fn configured(points: &[(f64, f64)]) -> PiecewiseLinear {
    PiecewiseLinear::from_points(points).expect("generated breakpoints are valid")
}

proptest! {
    #[test]
    fn encoding_is_stable(points in breakpoints()) {
        let f = configured(&points);
        let again: PiecewiseLinear = f.get().parse().unwrap();

        prop_assert_eq!(again.get(), f.get());
        prop_assert_eq!(again, f);
    }

    #[test]
    fn encoding_with_jumps_is_stable(points in breakpoints_with_jumps()) {
        let f = configured(&points);
        let again: PiecewiseLinear = f.get().parse().unwrap();

        prop_assert!(f.pieces().iter().all(|p| p.start.x <= p.end.x));
        prop_assert_eq!(again.get(), f.get());
        prop_assert_eq!(again, f);
    }

    #[test]
    fn inverse_with_jumps_is_readable(points in breakpoints_with_jumps()) {
        let inverse = configured(&points).inverse();

        prop_assert!(
            inverse
                .pieces()
                .iter()
                .tuple_windows()
                .all(|(p, q)| p.end.x <= q.start.x + EPSILON)
        );

        let encoded = inverse.get();
        let parsed = encoded.parse::<PiecewiseLinear>();
        prop_assert!(parsed.is_ok(), "inverse encoding '{}' rejected: {:?}", encoded, parsed);
    }

    #[test]
    fn breakpoints_are_interpolated(points in breakpoints()) {
        let f = configured(&points);

        for &(x, y) in &points {
            prop_assert!((f.evaluate(x) - y).abs() < 1e-9);
        }
    }

    #[test]
    fn simplify_is_idempotent(points in breakpoints()) {
        let mut f = configured(&points);
        let configured_once = f.clone();

        f.simplify();
        prop_assert_eq!(&f, &configured_once);

        let pieces = f.pieces();
        prop_assert!(pieces.iter().tuple_windows().all(|(p, q)| !p.is_collinear_with(q)));
    }

    #[test]
    fn single_piece_extrapolates(x0 in -50i32..50, width in 1i32..20, y0 in -50i32..50, y1 in -50i32..50, probe in -200i32..200) {
        let (x0, x1) = (f64::from(x0), f64::from(x0 + width));
        let (y0, y1) = (f64::from(y0), f64::from(y1));
        let f = configured(&[(x0, y0), (x1, y1)]);

        let slope = (y1 - y0) / (x1 - x0);
        let probe = f64::from(probe);
        prop_assert!((f.evaluate(probe) - (y0 + slope * (probe - x0))).abs() < 1e-6);

        let derivative = f.derivative();
        prop_assert_eq!(derivative.pieces().len(), 1);
        prop_assert!((derivative.evaluate(probe) - slope).abs() < 1e-9);
    }

    #[test]
    fn monotonic_inverse_round_trips(points in increasing_breakpoints(), t in 0.0f64..1.0) {
        let f = configured(&points);
        let (lo, hi) = f.domain().unwrap();
        let x = lo + t * (hi - lo);

        prop_assert!((f.inverse().evaluate(f.evaluate(x)) - x).abs() < 1e-6);
    }

    #[test]
    fn inverse_is_single_valued(points in breakpoints()) {
        let inverse = configured(&points).inverse();

        prop_assert!(
            inverse
                .pieces()
                .iter()
                .tuple_windows()
                .all(|(p, q)| p.end.x <= q.start.x + EPSILON)
        );
    }
}
