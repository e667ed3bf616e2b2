//! Error type shared by every fallible chain operation.

use thiserror::Error;

use crate::model::key::Key;
use crate::model::key_node::Direction;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ChainError {
	/// No node matches the requested key or id.
	#[error("key not found: {0}")]
	NotFound(String),

	/// The node has no edge to sample in the requested direction.
	///
	/// Happens for `next` on `End`, `prev` on `Start`, or any sampling on
	/// an unseeded chain.
	#[error("no {direction} edge to sample from {key}")]
	EmptyDistribution { key: Key, direction: Direction },

	/// Minimum length above the maximum length.
	#[error("invalid length bounds: min {min} > max {max}")]
	InvalidBounds { min: usize, max: usize },

	#[error("max_attempts must be at least 1")]
	InvalidAttempts,

	/// Corpus file could not be read.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}
