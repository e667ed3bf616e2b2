//! Word-level chain text generation library.
//!
//! This crate builds a weighted directed graph of token transitions from
//! lines of text and samples new sequences from it:
//! - Forward and backward edges with occurrence counts
//! - Frequency-weighted, uniform and Gaussian-smoothed sampling
//! - Forward / backward walks and context windows around any token
//! - Whole-sequence generation with soft length bounds
//!
//! Randomness is injected through `rand::Rng`, so a seeded generator gives
//! reproducible output.

/// Chain model: keys, nodes, edges, curves and the `Chain` itself.
pub mod model;

/// Error type returned by fallible operations.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::ChainError;
pub use model::chain::{Chain, END, Generation, NodeRef, START};
pub use model::generate_options::{GenerateOptions, Sampling};
pub use model::key::{Key, Sentinel};
pub use model::key_node::{Direction, KeyNode, NodeId};
