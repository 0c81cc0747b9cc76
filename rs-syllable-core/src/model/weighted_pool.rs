use std::collections::BTreeMap;
use std::fmt::Debug;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::{Error, Result};

/// A read-only population sampled proportionally to integer weights.
///
/// Conceptually a `WeightedPool` is the multiset where each item occurs
/// `weight` times, and a draw is a uniform pick over that multiset.
/// Instead of materializing the repeated items, the pool keeps the distinct
/// items with a cumulative-weight sampler (binary search), which yields the
/// same selection probabilities.
///
/// ## Responsibilities:
/// - Validate a weight table (non-empty, every weight >= 1)
/// - Draw one item with probability `weight / total_weight`
/// - Expose the logical multiset for inspection
///
/// ## Invariants
/// - `items` is sorted and holds no duplicates (built from a `BTreeMap`)
/// - `items` and `weights` have the same, non-zero length
/// - Each weight is strictly positive
#[derive(Clone, Debug)]
pub struct WeightedPool<T> {
	/// Distinct items, in key order.
	items: Vec<T>,
	/// Weight of each item, aligned with `items`.
	weights: Vec<u32>,
	/// Cumulative-weight sampler over `weights`.
	sampler: WeightedIndex<u32>,
}

impl<T: Ord + Debug> WeightedPool<T> {
	/// Builds a pool from a weight table.
	///
	/// `table` names the table in error messages (ex. `"onset"`).
	///
	/// # Errors
	/// - `EmptyTable` if `entries` is empty
	/// - `ZeroWeight` if an entry has a weight of 0
	/// - `WeightOverflow` if a weight or the summed weights do not fit in a `u32`
	pub fn new(table: &str, entries: BTreeMap<T, u64>) -> Result<Self> {
		if entries.is_empty() {
			return Err(Error::EmptyTable { table: table.to_owned() });
		}

		let mut items = Vec::with_capacity(entries.len());
		let mut weights = Vec::with_capacity(entries.len());
		for (item, weight) in entries {
			if weight == 0 {
				return Err(Error::ZeroWeight {
					table: table.to_owned(),
					key: format!("{:?}", item),
				});
			}
			let weight = u32::try_from(weight)
				.map_err(|_| Error::WeightOverflow { table: table.to_owned() })?;
			items.push(item);
			weights.push(weight);
		}

		// Empty tables and zero weights are already rejected, only an overflow remains
		let sampler = WeightedIndex::new(&weights)
			.map_err(|_| Error::WeightOverflow { table: table.to_owned() })?;

		Ok(Self { items, weights, sampler })
	}

	/// Draws one item.
	///
	/// The probability of an item is its weight divided by the total weight.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
		&self.items[self.sampler.sample(rng)]
	}

	/// Returns the weight of `item`, or `None` if it is not in the pool.
	pub fn weight(&self, item: &T) -> Option<u32> {
		self.items
			.binary_search(item)
			.ok()
			.map(|index| self.weights[index])
	}

	/// Returns the logical multiset: each item repeated `weight` times, in key order.
	///
	/// Mostly useful for inspection, sampling never builds it.
	pub fn expand(&self) -> Vec<&T> {
		self.iter()
			.flat_map(|(item, weight)| std::iter::repeat_n(item, weight as usize))
			.collect()
	}
}

impl<T> WeightedPool<T> {
	/// Number of distinct items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Always `false`, an empty pool cannot be built.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Sum of all weights, i.e. the size of the logical multiset.
	pub fn total_weight(&self) -> u64 {
		self.weights.iter().map(|w| *w as u64).sum()
	}

	/// Iterates over `(item, weight)` pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&T, u32)> {
		self.items.iter().zip(self.weights.iter().copied())
	}

	/// Iterates over the distinct items in key order.
	pub fn items(&self) -> impl Iterator<Item = &T> {
		self.items.iter()
	}
}
