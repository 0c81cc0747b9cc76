use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cluster_table::{Cluster, Position};
use super::syllable_scheme::SyllableScheme;
use crate::error::Result;

/// Author-supplied frequency data of a syllable scheme.
///
/// This is the serializable side of a `SyllableScheme`: plain weight tables
/// that can be written by hand, assembled with the `with_*` helpers, merged,
/// or embedded as bytes. Nothing is validated until `build` is called.
///
/// Weights are summed with saturation: a sum past `u32::MAX` is reported
/// as `WeightOverflow` by `build` instead of wrapping.
///
/// # Fields
/// - `phone_classes`: class name → (phoneme → weight)
/// - `onset`, `nucleus`, `coda`: cluster of class names → weight
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemeDefinition {
	pub phone_classes: BTreeMap<String, BTreeMap<String, u64>>,
	pub onset: BTreeMap<Cluster, u64>,
	pub nucleus: BTreeMap<Cluster, u64>,
	pub coda: BTreeMap<Cluster, u64>,
}

impl SchemeDefinition {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds the members of a phone class.
	///
	/// Weights of members already present are summed.
	pub fn with_class(mut self, class: &str, members: &[(&str, u64)]) -> Self {
		let entry = self.phone_classes.entry(class.to_owned()).or_default();
		for (phoneme, weight) in members {
			add_weight(entry.entry((*phoneme).to_owned()).or_insert(0), *weight);
		}
		self
	}

	/// Adds a cluster to the table of `position`.
	///
	/// An empty `classes` slice adds the empty cluster.
	/// If the cluster already exists, the weights are summed.
	pub fn with_cluster(mut self, position: Position, classes: &[&str], weight: u64) -> Self {
		let cluster: Cluster = classes.iter().map(|c| (*c).to_owned()).collect();
		add_weight(self.clusters_mut(position).entry(cluster).or_insert(0), weight);
		self
	}

	pub fn with_onset(self, classes: &[&str], weight: u64) -> Self {
		self.with_cluster(Position::Onset, classes, weight)
	}

	pub fn with_nucleus(self, classes: &[&str], weight: u64) -> Self {
		self.with_cluster(Position::Nucleus, classes, weight)
	}

	pub fn with_coda(self, classes: &[&str], weight: u64) -> Self {
		self.with_cluster(Position::Coda, classes, weight)
	}

	/// Returns the cluster table of `position`.
	pub fn clusters(&self, position: Position) -> &BTreeMap<Cluster, u64> {
		match position {
			Position::Onset => &self.onset,
			Position::Nucleus => &self.nucleus,
			Position::Coda => &self.coda,
		}
	}

	fn clusters_mut(&mut self, position: Position) -> &mut BTreeMap<Cluster, u64> {
		match position {
			Position::Onset => &mut self.onset,
			Position::Nucleus => &mut self.nucleus,
			Position::Coda => &mut self.coda,
		}
	}

	/// Merges another definition into this one.
	///
	/// Weights of matching phonemes and clusters are summed,
	/// missing classes and clusters are copied.
	pub fn merge(&mut self, other: &Self) {
		for (class, members) in &other.phone_classes {
			let entry = self.phone_classes.entry(class.clone()).or_default();
			for (phoneme, weight) in members {
				add_weight(entry.entry(phoneme.clone()).or_insert(0), *weight);
			}
		}

		for position in Position::ALL {
			let target = self.clusters_mut(position);
			for (cluster, weight) in other.clusters(position) {
				add_weight(target.entry(cluster.clone()).or_insert(0), *weight);
			}
		}
	}

	/// Validates the tables and builds the samplable scheme.
	///
	/// # Errors
	/// See `SyllableScheme::new`.
	pub fn build(&self) -> Result<SyllableScheme> {
		SyllableScheme::new(
			self.phone_classes.clone(),
			self.onset.clone(),
			self.nucleus.clone(),
			self.coda.clone(),
		)
	}

	/// Encodes the definition with `postcard`.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		Ok(postcard::to_stdvec(self)?)
	}

	/// Decodes a definition produced by `to_bytes`.
	///
	/// # Errors
	/// Returns `Error::Encoding` if the bytes are not a valid definition.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		Ok(postcard::from_bytes(bytes)?)
	}
}

fn add_weight(total: &mut u64, weight: u64) {
	*total = total.saturating_add(weight);
}

impl TryFrom<&SchemeDefinition> for SyllableScheme {
	type Error = crate::error::Error;

	fn try_from(definition: &SchemeDefinition) -> Result<Self> {
		definition.build()
	}
}
