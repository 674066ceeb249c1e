//! Property-based tests for order independence and exhaustive classification
//!
//! Uses proptest to generate side triples

use proptest::prelude::*;
use triangle_core::*;

fn permutations(a: u32, b: u32, c: u32) -> [(u32, u32, u32); 6] {
    [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)]
}

proptest! {
    #[test]
    fn classification_ignores_argument_order(a in 0u32..50, b in 0u32..50, c in 0u32..50) {
        let expected = classify(a, b, c);

        for (x, y, z) in permutations(a, b, c) {
            prop_assert_eq!(classify(x, y, z), expected);
        }
    }

    #[test]
    fn valid_triples_match_pairwise_definition(a in 1u32..100, b in 1u32..100, c in 1u32..100) {
        let mut sorted = [a, b, c];
        sorted.sort_unstable();
        prop_assume!(sorted[0] + sorted[1] > sorted[2]);

        let expected = if a == b && b == c {
            TriangleKind::Equilateral
        } else if a == b || b == c || a == c {
            TriangleKind::Isosceles
        } else {
            TriangleKind::Scalene
        };

        prop_assert_eq!(classify(a, b, c), Ok(expected));
    }

    #[test]
    fn non_positive_side_always_rejected(a in -100i64..=0, b in -100i64..100, c in -100i64..100) {
        prop_assert_eq!(
            classify(a, b, c),
            Err(TriangleError::InvalidTriangle(Violation::NonPositiveSide))
        );
        prop_assert_eq!(
            classify(b, c, a),
            Err(TriangleError::InvalidTriangle(Violation::NonPositiveSide))
        );
    }

    #[test]
    fn float_sides_agree_with_integer_sides(a in 1u32..1000, b in 1u32..1000, c in 1u32..1000) {
        prop_assert_eq!(
            classify(f64::from(a), f64::from(b), f64::from(c)),
            classify(a, b, c)
        );
    }
}
