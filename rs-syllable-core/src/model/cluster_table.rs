use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::weighted_pool::WeightedPool;
use crate::error::Result;

/// Ordered phone-class names filling one syllable position.
///
/// The empty cluster is valid and means the position stays empty
/// (ex. a syllable without onset).
pub type Cluster = Vec<String>;

/// Position of a cluster inside a syllable.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
	Onset,
	Nucleus,
	Coda,
}

impl Position {
	/// All positions, in the order they are spelled out.
	pub const ALL: [Position; 3] = [Position::Onset, Position::Nucleus, Position::Coda];
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Position::Onset => "onset",
			Position::Nucleus => "nucleus",
			Position::Coda => "coda",
		};
		f.write_str(name)
	}
}

/// Weighted clusters for one syllable position.
#[derive(Clone, Debug)]
pub struct ClusterTable {
	position: Position,
	pool: WeightedPool<Cluster>,
}

impl ClusterTable {
	/// Builds the table of `position` from cluster frequencies.
	///
	/// # Errors
	/// Same as `WeightedPool::new`: the table must be non-empty with weights >= 1.
	pub fn new(position: Position, clusters: BTreeMap<Cluster, u64>) -> Result<Self> {
		let pool = WeightedPool::new(&position.to_string(), clusters)?;
		Ok(Self { position, pool })
	}

	pub fn position(&self) -> Position {
		self.position
	}

	/// Draws one cluster (possibly empty).
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &Cluster {
		self.pool.sample(rng)
	}

	/// Number of classes in the longest cluster.
	pub fn max_len(&self) -> usize {
		self.pool.items().map(Vec::len).max().unwrap_or(0)
	}

	/// Iterates over the distinct clusters.
	pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
		self.pool.items()
	}

	pub fn pool(&self) -> &WeightedPool<Cluster> {
		&self.pool
	}
}
