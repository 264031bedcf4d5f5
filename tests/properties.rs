//! Property tests for the forwarding contract.

use bound_call::bind;
use proptest::prelude::*;

proptest! {
    #[test]
    fn bound_prefix_always_precedes_call_suffix(b0: i32, b1: i32, x0: i32, x1: i32) {
        let mut cb = bind(|a: i32, b: i32, c: i32, d: i32| vec![a, b, c, d], (b0, b1));
        prop_assert_eq!(cb.run((x0, x1)), vec![b0, b1, x0, x1]);
    }

    #[test]
    fn repeat_runs_are_stable_for_pure_targets(seed: i64, n in -1000i64..1000) {
        let mut cb = bind(|s: i64, m: i64| s.wrapping_mul(31).wrapping_add(m), (seed,));
        let first = cb.run((n,));
        let second = cb.run((n,));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn string_prefixing_matches_format(prefix in "[a-z]{0,8}", n: u16) {
        let mut cb = bind(|p: String, m: u16| format!("{p}{m}"), (prefix.clone(),));
        prop_assert_eq!(cb.run((n,)), format!("{prefix}{n}"));
    }
}
