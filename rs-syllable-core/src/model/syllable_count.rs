use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::{Error, Result};

/// Default syllable counts, one entry per draw "ticket".
///
/// 1 and 4 syllables are half as likely as 2 and 3.
const DEFAULT_LENGTHS: [usize; 6] = [1, 2, 2, 3, 3, 4];

/// How many syllables a generated name has.
///
/// # Variants
/// - `Default`: 1 to 4 syllables, with 2 and 3 twice as likely as 1 and 4
/// - `Fixed(n)`: exactly `n` syllables (`0` gives an empty name)
/// - `Range(lo, hi)`: uniform count in `lo..=hi`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyllableCount {
	#[default]
	Default,
	Fixed(usize),
	Range(usize, usize),
}

impl SyllableCount {
	/// Draws the number of syllables.
	///
	/// # Errors
	/// Returns `InvalidRange` for a `Range` with `lo > hi`.
	/// Bounds are never swapped.
	///
	/// `Fixed` and single-value ranges do not consume randomness,
	/// so `Range(n, n)` and `Fixed(n)` produce the same names from the same seed.
	pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
		match *self {
			SyllableCount::Default => Ok(DEFAULT_LENGTHS[rng.random_range(0..DEFAULT_LENGTHS.len())]),
			SyllableCount::Fixed(n) => Ok(n),
			SyllableCount::Range(lo, hi) if lo > hi => Err(Error::InvalidRange { lo, hi }),
			SyllableCount::Range(lo, hi) if lo == hi => Ok(lo),
			SyllableCount::Range(lo, hi) => Ok(rng.random_range(lo..=hi)),
		}
	}
}

impl From<usize> for SyllableCount {
	fn from(n: usize) -> Self {
		SyllableCount::Fixed(n)
	}
}

impl From<(usize, usize)> for SyllableCount {
	fn from((lo, hi): (usize, usize)) -> Self {
		SyllableCount::Range(lo, hi)
	}
}

impl From<RangeInclusive<usize>> for SyllableCount {
	fn from(range: RangeInclusive<usize>) -> Self {
		SyllableCount::Range(*range.start(), *range.end())
	}
}

impl From<Option<usize>> for SyllableCount {
	fn from(n: Option<usize>) -> Self {
		n.map_or(SyllableCount::Default, SyllableCount::Fixed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn default_distribution() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut counts = [0usize; 5];
		let draws = 60_000;
		for _ in 0..draws {
			counts[SyllableCount::Default.resolve(&mut rng).unwrap()] += 1;
		}

		assert_eq!(counts[0], 0);
		for (length, expected) in [(1, 1.0 / 6.0), (2, 2.0 / 6.0), (3, 2.0 / 6.0), (4, 1.0 / 6.0)] {
			let ratio = counts[length] as f64 / draws as f64;
			assert!((ratio - expected).abs() < 0.02, "P({length}) was {ratio}");
		}
	}

	#[test]
	fn fixed_is_returned_as_is() {
		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(SyllableCount::Fixed(0).resolve(&mut rng).unwrap(), 0);
		assert_eq!(SyllableCount::from(7).resolve(&mut rng).unwrap(), 7);
	}

	#[test]
	fn range_is_inclusive() {
		let mut rng = StdRng::seed_from_u64(4);
		let mut seen = [false; 4];
		for _ in 0..1000 {
			let n = SyllableCount::from(1..=3).resolve(&mut rng).unwrap();
			assert!((1..=3).contains(&n));
			seen[n] = true;
		}
		assert_eq!(seen, [false, true, true, true]);
		assert_eq!(SyllableCount::Range(2, 2).resolve(&mut rng).unwrap(), 2);
	}

	#[test]
	fn single_value_range_leaves_the_rng_untouched() {
		let mut ranged = StdRng::seed_from_u64(17);
		let mut untouched = StdRng::seed_from_u64(17);
		assert_eq!(SyllableCount::Range(3, 3).resolve(&mut ranged).unwrap(), 3);
		assert_eq!(ranged.random::<u64>(), untouched.random::<u64>());
	}

	#[test]
	fn inverted_range_is_rejected() {
		let mut rng = StdRng::seed_from_u64(0);
		let err = SyllableCount::from((3, 1)).resolve(&mut rng).unwrap_err();
		assert!(matches!(err, Error::InvalidRange { lo: 3, hi: 1 }));
		assert!(err.is_invalid_argument());
	}

	#[test]
	fn conversions() {
		assert_eq!(SyllableCount::from(None), SyllableCount::Default);
		assert_eq!(SyllableCount::from(Some(2)), SyllableCount::Fixed(2));
		assert_eq!(SyllableCount::default(), SyllableCount::Default);
	}
}
