//! Property tests across the generator stack: range contracts,
//! distinctness, and determinism for arbitrary seeds and shapes.
#![allow(clippy::expect_used)]

use std::collections::HashSet;
use std::convert::Infallible;

use proptest::prelude::*;

use dimgen_core::config::{AsnConfig, CostMode, DegreeMode, SeedMode};
use dimgen_core::{PRAND_MAX, PortableRng, Selector, uniform_float, uniform_int, write_assignment};

proptest! {
    #[test]
    fn raw_draws_stay_in_range(seed in any::<i64>()) {
        let mut rng = PortableRng::new(seed);
        for _ in 0..128 {
            let v = rng.next_raw();
            prop_assert!((0..PRAND_MAX).contains(&v));
        }
    }

    #[test]
    fn raw_stream_is_deterministic(seed in any::<i64>()) {
        let mut r1 = PortableRng::new(seed);
        let mut r2 = PortableRng::new(seed);
        for _ in 0..128 {
            prop_assert_eq!(r1.next_raw(), r2.next_raw());
        }
    }

    #[test]
    fn uniform_int_is_in_closed_range(seed in any::<i64>(), max in 1_i64..=PRAND_MAX) {
        let mut rng = PortableRng::new(seed);
        for _ in 0..64 {
            let v = uniform_int(&mut rng, max);
            prop_assert!((1..=max).contains(&v));
        }
    }

    #[test]
    fn uniform_float_is_half_open(seed in any::<i64>()) {
        let mut rng = PortableRng::new(seed);
        for _ in 0..64 {
            let x = uniform_float(&mut rng);
            prop_assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn selection_is_distinct_and_complete(
        seed in any::<i64>(),
        (n, d) in (1_i64..400).prop_flat_map(|n| (Just(n), 1_i64..=n)),
    ) {
        let mut rng = PortableRng::new(seed);
        let mut selector = Selector::new();
        let mut picks = Vec::new();
        selector
            .select(&mut rng, d, n, |_, v| {
                picks.push(v);
                Ok::<(), Infallible>(())
            })
            .expect("infallible");
        prop_assert_eq!(picks.len() as i64, d);
        prop_assert!(picks.iter().all(|v| (1..=n).contains(v)));
        let distinct: HashSet<i64> = picks.iter().copied().collect();
        prop_assert_eq!(distinct.len() as i64, d);
    }

    #[test]
    fn assignment_instances_are_reproducible(
        seed in any::<i64>(),
        (nodes, sources) in (2_i64..60).prop_flat_map(|n| (Just(n), 1_i64..n)),
    ) {
        let config = AsnConfig {
            nodes,
            sources,
            max_cost: 1_000,
            degree: DegreeMode::Fixed(1),
            costs: CostMode::Random,
            seed: SeedMode::Given(seed),
        };
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_assignment(&config, &mut first).expect("write");
        write_assignment(&config, &mut second).expect("write");
        prop_assert_eq!(first, second);
    }
}
