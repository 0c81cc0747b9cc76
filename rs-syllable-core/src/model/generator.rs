use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;

use crate::error::Result;
use crate::model::syllable_count::SyllableCount;
use crate::model::syllable_scheme::SyllableScheme;

/// High-level name generator over one or three syllable schemes.
///
/// # Responsibilities
/// - Pick the scheme of each syllable from its position in the name
/// - Draw the syllable count and assemble the syllables
/// - Capitalize the result
/// - Generate batches while avoiding duplicates
///
/// # Scheme selection
/// For a name of `length` syllables, syllable `i` uses:
/// - `initial` if `i == 0` (also when the name has a single syllable)
/// - `last` if `i == length - 1`
/// - `medial` otherwise
///
/// A generator built from a single scheme uses it for every position.
/// Schemes are shared through `Arc`, so cloning a generator is cheap and
/// the same scheme can fill several positions.
#[derive(Clone, Debug)]
pub struct NameGenerator {
	initial: Arc<SyllableScheme>,
	medial: Arc<SyllableScheme>,
	last: Arc<SyllableScheme>,
}

impl NameGenerator {
	/// Creates a generator using `scheme` for every syllable.
	pub fn new(scheme: SyllableScheme) -> Self {
		let scheme = Arc::new(scheme);
		Self::from_shared(scheme.clone(), scheme.clone(), scheme)
	}

	/// Creates a generator with one scheme per position.
	pub fn positional(initial: SyllableScheme, medial: SyllableScheme, last: SyllableScheme) -> Self {
		Self::from_shared(Arc::new(initial), Arc::new(medial), Arc::new(last))
	}

	/// Creates a positional generator from already shared schemes.
	pub fn from_shared(
		initial: Arc<SyllableScheme>,
		medial: Arc<SyllableScheme>,
		last: Arc<SyllableScheme>,
	) -> Self {
		debug!(
			"Name generator ready ({})",
			if Arc::ptr_eq(&initial, &medial) && Arc::ptr_eq(&medial, &last) {
				"single scheme"
			} else {
				"positional schemes"
			}
		);
		Self { initial, medial, last }
	}

	/// Returns the scheme used by syllable `index` of a `length`-syllable name.
	///
	/// The first syllable always uses the initial scheme,
	/// even when it is also the last one.
	pub fn scheme_for(&self, index: usize, length: usize) -> &SyllableScheme {
		if index == 0 {
			&self.initial
		} else if index + 1 == length {
			&self.last
		} else {
			&self.medial
		}
	}

	/// Generates a name using the thread-local generator.
	///
	/// # Errors
	/// See `generate_with`.
	pub fn generate(&self, count: impl Into<SyllableCount>) -> Result<String> {
		self.generate_with(count, &mut rand::rng())
	}

	/// Generates a name.
	///
	/// Syllables are concatenated and only the first character is
	/// uppercased, the others are left untouched.
	/// `SyllableCount::Fixed(0)` gives an empty string.
	///
	/// # Errors
	/// Returns `InvalidRange` if the syllable range is inverted.
	pub fn generate_with<R: Rng + ?Sized>(&self, count: impl Into<SyllableCount>, rng: &mut R) -> Result<String> {
		let name = capitalize(&self.syllables_with(count, rng)?.concat());
		trace!("Generated name '{}'", name);
		Ok(name)
	}

	/// Draws the syllables of one name, lowercase and in order.
	///
	/// `generate_with` is the capitalized concatenation of this draw.
	pub fn syllables_with<R: Rng + ?Sized>(&self, count: impl Into<SyllableCount>, rng: &mut R) -> Result<Vec<String>> {
		let length = count.into().resolve(rng)?;

		(0..length)
			.map(|index| self.scheme_for(index, length).syllable_with(&mut *rng))
			.collect()
	}

	/// Generates `amount` names, avoiding duplicates if possible.
	///
	/// # Parameters
	/// - `amount`: Number of names to return.
	/// - `count`: Syllable count used for every name.
	/// - `nb_try`: Number of re-draws allowed for each duplicate.
	///
	/// # Behavior
	/// - Duplicates are detected case-insensitively.
	/// - After `nb_try` failed re-draws, the last attempt is kept,
	///   so uniqueness is best effort (small schemes run out of names).
	/// - If `nb_try` is 0, duplicates are not checked.
	pub fn generate_batch<R: Rng + ?Sized>(
		&self,
		amount: usize,
		count: impl Into<SyllableCount>,
		nb_try: usize,
		rng: &mut R,
	) -> Result<Vec<String>> {
		let count = count.into();
		let mut seen: HashSet<String> = HashSet::with_capacity(amount);
		let mut names = Vec::with_capacity(amount);

		for _ in 0..amount {
			let mut name = self.generate_with(count, rng)?;
			let mut tries = nb_try;
			while tries > 0 && seen.contains(&name.to_lowercase()) {
				name = self.generate_with(count, rng)?;
				tries -= 1;
			}
			seen.insert(name.to_lowercase());
			names.push(name);
		}

		Ok(names)
	}
}

impl From<SyllableScheme> for NameGenerator {
	fn from(scheme: SyllableScheme) -> Self {
		Self::new(scheme)
	}
}

/// Uppercases the first character, the rest is unchanged.
///
/// Works on characters, not bytes (`"élan"` → `"Élan"`).
pub fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
