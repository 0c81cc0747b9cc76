use thiserror::Error;

use crate::model::cluster_table::{Cluster, Position};

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building schemes or generating names.
///
/// Two families exist:
/// - configuration errors, raised while a scheme is built from its frequency
///   data (or decoded from bytes)
/// - invalid arguments, raised by a generation call
#[derive(Error, Debug)]
pub enum Error {
	/// A weight table that must be sampled from has no entry.
	#[error("{table} table is empty")]
	EmptyTable { table: String },

	/// A weight table entry has a weight of zero.
	#[error("weight of {key} in {table} table must be >= 1")]
	ZeroWeight { table: String, key: String },

	/// The summed weights of a table do not fit the sampler.
	#[error("total weight of {table} table overflows")]
	WeightOverflow { table: String },

	/// A cluster references a phone class the scheme does not define.
	#[error("phone class '{class}' used by {position} cluster {cluster:?} is not defined")]
	UnknownPhoneClass {
		class: String,
		position: Position,
		cluster: Cluster,
	},

	/// A syllable range with `lo > hi`.
	#[error("invalid syllable range: {lo} > {hi}")]
	InvalidRange { lo: usize, hi: usize },

	/// Malformed binary scheme definition.
	#[error("scheme encoding error: {0}")]
	Encoding(#[from] postcard::Error),
}

impl Error {
	/// Returns `true` if the error comes from scheme data.
	pub fn is_configuration(&self) -> bool {
		!self.is_invalid_argument()
	}

	/// Returns `true` if the error comes from a generation argument.
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Error::InvalidRange { .. })
	}
}
