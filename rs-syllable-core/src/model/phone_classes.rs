use std::collections::BTreeMap;

use rand::Rng;

use super::weighted_pool::WeightedPool;
use crate::error::Result;

/// Named phone classes, each one a weighted pool of phonemes.
///
/// Ex. `"vowel" => { "a": 15, "e": 10, ... }`.
/// Phonemes are plain strings, so digraphs (`"th"`) are allowed.
#[derive(Clone, Debug, Default)]
pub struct PhoneClassTable {
	classes: BTreeMap<String, WeightedPool<String>>,
}

impl PhoneClassTable {
	/// Builds every class pool.
	///
	/// # Errors
	/// Returns an error if a class has no phoneme or a zero weight.
	pub fn new(classes: BTreeMap<String, BTreeMap<String, u64>>) -> Result<Self> {
		let classes = classes
			.into_iter()
			.map(|(name, members)| -> Result<(String, WeightedPool<String>)> {
				let pool = WeightedPool::new(&format!("phone class '{}'", name), members)?;
				Ok((name, pool))
			})
			.collect::<Result<BTreeMap<_, _>>>()?;

		Ok(Self { classes })
	}

	pub fn contains(&self, class: &str) -> bool {
		self.classes.contains_key(class)
	}

	pub fn get(&self, class: &str) -> Option<&WeightedPool<String>> {
		self.classes.get(class)
	}

	/// Draws one phoneme of `class`.
	///
	/// Returns `None` if the class does not exist.
	pub fn sample<R: Rng + ?Sized>(&self, class: &str, rng: &mut R) -> Option<&str> {
		self.get(class).map(|pool| pool.sample(rng).as_str())
	}

	/// Iterates over the class names.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.classes.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.classes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn members(entries: &[(&str, u64)]) -> BTreeMap<String, u64> {
		entries.iter().map(|(k, w)| (k.to_string(), *w)).collect()
	}

	#[test]
	fn samples_members_of_the_requested_class() {
		let table = PhoneClassTable::new(BTreeMap::from([
			("vowel".to_owned(), members(&[("a", 2), ("o", 1)])),
			("liquid".to_owned(), members(&[("r", 1), ("l", 1)])),
		]))
		.unwrap();

		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..100 {
			let vowel = table.sample("vowel", &mut rng).unwrap();
			assert!(vowel == "a" || vowel == "o");
		}
		assert!(table.sample("nasal", &mut rng).is_none());
		assert_eq!(table.names().collect::<Vec<_>>(), vec!["liquid", "vowel"]);
	}

	#[test]
	fn empty_class_is_rejected() {
		let err = PhoneClassTable::new(BTreeMap::from([("vowel".to_owned(), BTreeMap::new())]))
			.unwrap_err();
		assert!(matches!(err, Error::EmptyTable { ref table } if table.contains("vowel")));
	}
}
