use std::collections::BTreeMap;

use log::debug;
use rand::Rng;

use super::cluster_table::{Cluster, ClusterTable, Position};
use super::phone_classes::PhoneClassTable;
use crate::error::{Error, Result};

/// Phonological style of a syllable.
///
/// A scheme bundles the phone classes with one cluster table per syllable
/// position. Generating a syllable draws a cluster for the onset, the nucleus
/// and the coda, then one phoneme for every class of each cluster.
///
/// ## Responsibilities:
/// - Validate that every class used by a cluster is defined
/// - Generate syllables
///
/// ## Invariants
/// - Immutable once built, so it can be shared freely (`Send + Sync`)
/// - Every class name of every cluster exists in `phone_classes`
#[derive(Clone, Debug)]
pub struct SyllableScheme {
	phone_classes: PhoneClassTable,
	onset: ClusterTable,
	nucleus: ClusterTable,
	coda: ClusterTable,
}

impl SyllableScheme {
	/// Builds a scheme from its frequency tables.
	///
	/// # Parameters
	/// - `phone_classes`: class name → (phoneme → weight), ex. `"vowel" => {"a": 1}`
	/// - `onset`, `nucleus`, `coda`: cluster → weight. The empty cluster
	///   stands for an empty position.
	///
	/// # Errors
	/// - `EmptyTable`, `ZeroWeight` or `WeightOverflow` for an invalid table
	/// - `UnknownPhoneClass` if a cluster uses a class absent from `phone_classes`
	pub fn new(
		phone_classes: BTreeMap<String, BTreeMap<String, u64>>,
		onset: BTreeMap<Cluster, u64>,
		nucleus: BTreeMap<Cluster, u64>,
		coda: BTreeMap<Cluster, u64>,
	) -> Result<Self> {
		let scheme = Self {
			phone_classes: PhoneClassTable::new(phone_classes)?,
			onset: ClusterTable::new(Position::Onset, onset)?,
			nucleus: ClusterTable::new(Position::Nucleus, nucleus)?,
			coda: ClusterTable::new(Position::Coda, coda)?,
		};
		scheme.check_classes()?;

		debug!(
			"Built syllable scheme: {} phone classes, {}/{}/{} onset/nucleus/coda clusters",
			scheme.phone_classes.len(),
			scheme.onset.pool().len(),
			scheme.nucleus.pool().len(),
			scheme.coda.pool().len(),
		);
		Ok(scheme)
	}

	/// Cross-checks cluster tables against the phone classes.
	fn check_classes(&self) -> Result<()> {
		for table in self.cluster_tables() {
			for cluster in table.clusters() {
				if let Some(class) = cluster.iter().find(|class| !self.phone_classes.contains(class)) {
					return Err(Error::UnknownPhoneClass {
						class: class.clone(),
						position: table.position(),
						cluster: cluster.clone(),
					});
				}
			}
		}
		Ok(())
	}

	/// Cluster tables in syllable order.
	fn cluster_tables(&self) -> [&ClusterTable; 3] {
		[&self.onset, &self.nucleus, &self.coda]
	}

	pub fn phone_classes(&self) -> &PhoneClassTable {
		&self.phone_classes
	}

	/// Returns the cluster table of `position`.
	pub fn clusters(&self, position: Position) -> &ClusterTable {
		match position {
			Position::Onset => &self.onset,
			Position::Nucleus => &self.nucleus,
			Position::Coda => &self.coda,
		}
	}

	/// Maximum number of phonemes in one syllable.
	pub fn max_syllable_phonemes(&self) -> usize {
		self.cluster_tables().iter().map(|table| table.max_len()).sum()
	}

	/// Generates one syllable using the thread-local generator.
	pub fn syllable(&self) -> Result<String> {
		self.syllable_with(&mut rand::rng())
	}

	/// Generates one syllable.
	///
	/// Phonemes are concatenated without separator: onset classes in
	/// cluster order, then nucleus, then coda.
	/// An empty cluster contributes nothing.
	///
	/// # Errors
	/// Returns `UnknownPhoneClass` if a drawn cluster uses an undefined class.
	/// `new` rejects such schemes, so this is not expected in practice.
	pub fn syllable_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		let mut syllable = String::new();
		self.push_syllable(&mut syllable, rng)?;
		Ok(syllable)
	}

	/// Appends one syllable to `out`.
	pub(crate) fn push_syllable<R: Rng + ?Sized>(&self, out: &mut String, rng: &mut R) -> Result<()> {
		for table in self.cluster_tables() {
			let cluster = table.sample(rng);
			for class in cluster {
				match self.phone_classes.sample(class, rng) {
					Some(phoneme) => out.push_str(phoneme),
					None => {
						return Err(Error::UnknownPhoneClass {
							class: class.clone(),
							position: table.position(),
							cluster: cluster.clone(),
						});
					}
				}
			}
		}
		Ok(())
	}
}
