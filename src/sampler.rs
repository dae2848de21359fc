//! Rune-range and repetition sampling (spec §4.3, §4.4).

use rand::Rng;

use crate::args::Args;
use crate::error::Error;

/// Samples one codepoint uniformly over the union of `ranges`.
///
/// `ranges` must be non-empty, disjoint, inclusive codepoint ranges, as the
/// bridge emits them. Weighted by range size: the total span `W` is
/// computed, a draw `r` in `[0, W)` is made, and the range containing `r`
/// is located by its prefix sum.
pub fn sample_rune_range<R: Rng + ?Sized>(
    ranges: &[(char, char)],
    rng: &mut R,
) -> Result<char, Error> {
    if ranges.is_empty() {
        return Err(Error::EmptyClass);
    }

    let total: u64 = ranges
        .iter()
        .map(|&(lo, hi)| hi as u64 - lo as u64 + 1)
        .sum();
    let mut r = rng.gen_range(0..total);
    for &(lo, hi) in ranges {
        let span = hi as u64 - lo as u64 + 1;
        if r < span {
            let cp = lo as u32 + r as u32;
            // `char::from_u32` only fails inside the UTF-16 surrogate gap,
            // which a parser-emitted range never straddles internally, but
            // a pattern could still union two ranges that abut it.
            return Ok(char::from_u32(cp).unwrap_or(lo));
        }
        r -= span;
    }
    unreachable!("r was drawn from [0, total)")
}

/// Chooses a repeat count under spec §4.4's policy.
///
/// `hi_raw` of `None` means the node's upper bound is unbounded.
pub fn sample_repeat_count<R: Rng + ?Sized>(
    lo_raw: u32,
    hi_raw: Option<u32>,
    args: &Args,
    rng: &mut R,
) -> u32 {
    let (lo, hi) = match hi_raw {
        None => {
            let hi = args.max_unbounded_repeat_count;
            let lo = if lo_raw < args.min_unbounded_repeat_count {
                args.min_unbounded_repeat_count
            } else {
                lo_raw
            };
            (lo, hi)
        }
        Some(hi_raw) => (lo_raw, hi_raw),
    };
    assert!(
        lo <= hi,
        "programmer error: repeat lower bound {lo} exceeds upper bound {hi}"
    );
    let count = rng.gen_range(lo..=hi);
    log::trace!("sampled repeat count {count} from [{lo}, {hi}]");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_codepoint_range_returns_that_codepoint() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sample_rune_range(&[('x', 'x')], &mut rng).unwrap(), 'x');
    }

    #[test]
    fn empty_ranges_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_rune_range(&[], &mut rng),
            Err(Error::EmptyClass)
        ));
    }

    #[test]
    fn sample_stays_within_the_union_of_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let ranges = [('a', 'c'), ('x', 'z')];
        for _ in 0..200 {
            let c = sample_rune_range(&ranges, &mut rng).unwrap();
            assert!(('a'..='c').contains(&c) || ('x'..='z').contains(&c), "{c} out of range");
        }
    }

    #[test]
    fn bounded_repeat_uses_explicit_bounds() {
        let args = Args::new().initialize().unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let count = sample_repeat_count(3, Some(8), &args, &mut rng);
            assert!((3..=8).contains(&count));
        }
    }

    #[test]
    fn unbounded_repeat_is_capped_by_max_unbounded_repeat_count() {
        let args = Args::new().with_max_unbounded_repeat_count(5).initialize().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let count = sample_repeat_count(0, None, &args, &mut rng);
            assert!(count <= 5);
        }
    }

    #[test]
    fn unbounded_repeat_respects_the_minimum_floor() {
        let args = Args::new()
            .with_min_unbounded_repeat_count(50)
            .with_max_unbounded_repeat_count(60)
            .initialize()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let count = sample_repeat_count(0, None, &args, &mut rng);
            assert!((50..=60).contains(&count));
        }
    }
}
