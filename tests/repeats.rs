//! Repetition sampler scenarios (spec §8, S1 and S6).

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use regexgen::{Args, Generator};

#[test]
fn s1_bounded_repeat_matches_and_is_deterministic() {
    let rx = Regex::new("^[ab]{5}$").unwrap();
    let args = Args::new().with_rng_source(StdRng::seed_from_u64(0));
    let generator = Generator::new("[ab]{5}", args).unwrap();
    let first = generator.generate().unwrap();
    assert!(rx.is_match(&first));

    let args_again = Args::new().with_rng_source(StdRng::seed_from_u64(0));
    let second = Generator::new("[ab]{5}", args_again).unwrap().generate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn repeat_lengths_stay_within_bounds() {
    let args = Args::new().with_rng_source(StdRng::seed_from_u64(5));
    let generator = Generator::new("a{2,7}", args).unwrap();
    for _ in 0..500 {
        let s = generator.generate().unwrap();
        assert!((2..=7).contains(&s.len()), "length {} out of [2,7]", s.len());
    }
}

#[test]
fn endpoint_coverage_both_bounds_appear() {
    let lo = 2;
    let hi = 6;
    let args = Args::new().with_rng_source(StdRng::seed_from_u64(6));
    let generator = Generator::new(&format!("a{{{lo},{hi}}}"), args).unwrap();
    let samples = std::cmp::max(2000, 4 * hi);
    let mut lengths = HashSet::new();
    for _ in 0..samples {
        lengths.insert(generator.generate().unwrap().len());
    }
    assert!(lengths.contains(&lo), "never saw the lower bound {lo}");
    assert!(lengths.contains(&hi), "never saw the upper bound {hi}");
}

#[test]
fn s6_unbounded_star_respects_custom_max() {
    let args = Args::new()
        .with_rng_source(StdRng::seed_from_u64(0))
        .with_max_unbounded_repeat_count(200);
    let generator = Generator::new("a{0,}", args).unwrap();
    let mut saw_max = false;
    for _ in 0..2000 {
        let len = generator.generate().unwrap().len();
        assert!(len <= 200, "length {len} exceeds max_unbounded_repeat_count 200");
        if len == 200 {
            saw_max = true;
        }
    }
    assert!(saw_max, "never observed the 200-length bucket");
}

#[test]
fn unbounded_star_defaults_to_default_max() {
    let args = Args::new().with_rng_source(StdRng::seed_from_u64(1));
    let generator = Generator::new("a*", args).unwrap();
    for _ in 0..500 {
        let len = generator.generate().unwrap().len();
        assert!(len <= regexgen::args::DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT as usize);
    }
}

#[test]
fn minimum_floor_applies_to_unbounded_repeats() {
    let args = Args::new()
        .with_rng_source(StdRng::seed_from_u64(2))
        .with_min_unbounded_repeat_count(200)
        .with_max_unbounded_repeat_count(210);
    let generator = Generator::new("a*", args).unwrap();
    let mut saw_floor = false;
    for _ in 0..500 {
        let len = generator.generate().unwrap().len();
        assert!(len >= 200, "length {len} below the configured floor of 200");
        if len == 200 {
            saw_floor = true;
        }
    }
    assert!(saw_floor, "never observed the 200-length bucket");
}
