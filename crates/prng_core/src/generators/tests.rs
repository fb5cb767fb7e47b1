//! Unit tests for the generator family.
//!
//! This module contains tests verifying:
//! - Seed determinism for every algorithm
//! - Copy independence
//! - State replay for the stateful generator
//! - Static dispatch parity between `GeneratorEnum` and the concrete types
//! - Seeding properties via property-based testing

use super::*;
use crate::types::Algorithm;

const LONG_RUN: usize = 10_000;

fn all_generators(seed: u64) -> Vec<GeneratorEnum> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| GeneratorEnum::new(algorithm, seed))
        .collect()
}

/// Same seed, same algorithm: identical sequences over a long run.
#[test]
fn test_seed_determinism_long_run() {
    for (mut a, mut b) in all_generators(31337).into_iter().zip(all_generators(31337)) {
        for i in 0..LONG_RUN {
            assert_eq!(
                a.next_u64(),
                b.next_u64(),
                "{} diverged at draw {}",
                a.algorithm(),
                i
            );
        }
    }
}

/// A copy replays the original's sequence and does not observe its draws.
#[test]
fn test_copy_independence() {
    for mut original in all_generators(8) {
        original.next_u64();
        let mut copy = original.copy();

        assert_eq!(original.next_u64(), copy.next_u64());

        // Advance the original alone; the copy must be unaffected
        let ahead: Vec<u64> = (0..10).map(|_| original.next_u64()).collect();
        let behind: Vec<u64> = (0..10).map(|_| copy.next_u64()).collect();
        assert_eq!(ahead, behind, "{} copy shares state", original.algorithm());

        // Divergent histories stay divergent
        original.next_u64();
        assert_ne!(original.next_u64(), copy.next_u64());
    }
}

/// Replaying from a saved state yields the same next value.
#[test]
fn test_state_replay() {
    let mut rng = SplitMix64::new(2016);
    for _ in 0..17 {
        rng.next_u64();
    }
    let x = rng.state();
    let a = rng.next_u64();
    for _ in 0..5 {
        rng.next_u64();
    }
    rng.set_state(x);
    let b = rng.next_u64();
    assert_eq!(a, b);
}

/// Reseeding restarts the sequence from scratch.
#[test]
fn test_reseed_restarts_sequence() {
    for mut rng in all_generators(77) {
        let first: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
        rng.seed(77);
        let again: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
        assert_eq!(first, again);
    }
}

/// `GeneratorEnum` dispatches to exactly the concrete implementations.
#[test]
fn test_enum_dispatch_parity() {
    let mut xs = XorShift128Plus::new(5);
    let mut xr = Xoroshiro128Plus::new(5);
    let mut sm = SplitMix64::new(5);
    let mut e_xs = GeneratorEnum::from(xs.clone());
    let mut e_xr = GeneratorEnum::from(xr.clone());
    let mut e_sm = GeneratorEnum::from(sm.clone());

    for _ in 0..100 {
        assert_eq!(xs.next_u64(), e_xs.next_u64());
        assert_eq!(xr.next_u64(), e_xr.next_u64());
        assert_eq!(sm.next_u64(), e_sm.next_u64());
    }
}

/// Only the SplitMix64 variant is state-inspectable.
#[test]
fn test_as_stateful() {
    for mut rng in all_generators(1) {
        let is_stateful = rng.algorithm().is_stateful();
        assert_eq!(rng.as_stateful().is_some(), is_stateful);
        assert_eq!(rng.as_stateful_mut().is_some(), is_stateful);
    }
}

/// Converting a non-stateful generator seeds from exactly one draw.
#[test]
fn test_into_stateful_conversion() {
    let source = GeneratorEnum::new(Algorithm::XorShift128Plus, 40);
    let mut reference = source.copy();
    let expected = SplitMix64::new(reference.next_u64());

    assert_eq!(source.into_stateful(), expected);

    let already = GeneratorEnum::new(Algorithm::SplitMix64, 40);
    assert_eq!(already.into_stateful().state(), 40);
}

/// Entropy seeding is available but opt-in.
#[test]
fn test_from_entropy_constructors() {
    let a = XorShift128Plus::from_entropy().unwrap();
    let b = Xoroshiro128Plus::from_entropy().unwrap();
    let c = SplitMix64::from_entropy().unwrap();
    let d = GeneratorEnum::from_entropy(Algorithm::SplitMix64).unwrap();
    assert_eq!(a.algorithm(), Algorithm::XorShift128Plus);
    assert_eq!(b.algorithm(), Algorithm::Xoroshiro128Plus);
    assert_eq!(c.algorithm(), Algorithm::SplitMix64);
    assert_eq!(d.algorithm(), Algorithm::SplitMix64);
}

// ============================================================================
// Property-Based Tests with Proptest
// ============================================================================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Same seed must produce identical sequences for every algorithm.
    #[test]
    fn prop_seed_determinism(seed in any::<u64>(), count in 1..500usize) {
        for (mut a, mut b) in all_generators(seed).into_iter().zip(all_generators(seed)) {
            for i in 0..count {
                let v1 = a.next_u64();
                let v2 = b.next_u64();
                prop_assert_eq!(
                    v1, v2,
                    "Mismatch at index {} for seed {} ({})",
                    i, seed, a.algorithm()
                );
            }
        }
    }

    /// The 128-bit generators never hold an all-zero state after seeding.
    #[test]
    fn prop_seeded_state_never_all_zero(seed in any::<u64>()) {
        prop_assert_ne!(XorShift128Plus::new(seed).state_words(), (0, 0));
        prop_assert_ne!(Xoroshiro128Plus::new(seed).state_words(), (0, 0));
    }

    /// set_state followed by state is the identity.
    #[test]
    fn prop_set_state_round_trip(state in any::<u64>()) {
        let mut rng = SplitMix64::new(0);
        rng.set_state(state);
        prop_assert_eq!(rng.state(), state);
    }

    /// Different seeds should produce different sequences.
    #[test]
    fn prop_different_seeds_different_sequences(seed1 in any::<u64>(), seed2 in any::<u64>()) {
        prop_assume!(seed1 != seed2);
        // xorshift128+ seeding is many-to-one (0 and u64::MAX, s and !s)
        prop_assume!(XorShift128Plus::new(seed1) != XorShift128Plus::new(seed2));

        for (mut a, mut b) in all_generators(seed1).into_iter().zip(all_generators(seed2)) {
            let values1: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
            let values2: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
            prop_assert_ne!(
                values1, values2,
                "Seeds {} and {} produced identical {} sequences",
                seed1, seed2, a.algorithm()
            );
        }
    }
}
