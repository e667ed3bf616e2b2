use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// Default number of full walks tried by `Chain::generate`.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Neighbour selection strategy used by walks and generation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
	/// Proportional to raw occurrence counts (`next` / `prev`).
	#[default]
	Weighted,
	/// Uniform over distinct edges (`rand_next` / `rand_prev`).
	Uniform,
	/// Proportional to the node curve's CDF (`gaus_next` / `gaus_prev`).
	Smoothed,
}

impl Sampling {
	/// Maps the `random` walk flag onto a strategy.
	pub fn from_random(random: bool) -> Self {
		if random { Sampling::Uniform } else { Sampling::Weighted }
	}

	/// Maps the `gaussian` generation flag onto a strategy.
	pub fn from_gaussian(gaussian: bool) -> Self {
		if gaussian { Sampling::Smoothed } else { Sampling::Weighted }
	}
}

/// Parameters for `Chain::generate`.
///
/// Length bounds count tokens only, sentinels excluded. They are soft:
/// once `max_attempts` walks missed them, the last walk is returned anyway.
///
/// # Invariants
/// - `min_len <= max_len` when both are set
/// - `max_attempts >= 1`
///
/// Deserialization goes through the same checks as the setters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawGenerateOptions")]
pub struct GenerateOptions {
	min_len: Option<usize>,
	max_len: Option<usize>,
	pub sampling: Sampling,
	max_attempts: usize,
}

/// Unchecked wire form of `GenerateOptions`.
#[derive(Deserialize)]
#[serde(default)]
struct RawGenerateOptions {
	min_len: Option<usize>,
	max_len: Option<usize>,
	sampling: Sampling,
	max_attempts: usize,
}

impl Default for RawGenerateOptions {
	fn default() -> Self {
		Self {
			min_len: None,
			max_len: None,
			sampling: Sampling::Weighted,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

impl TryFrom<RawGenerateOptions> for GenerateOptions {
	type Error = ChainError;

	fn try_from(raw: RawGenerateOptions) -> Result<Self, ChainError> {
		let mut options = Self::default().with_sampling(raw.sampling);
		options.set_bounds(raw.min_len, raw.max_len)?;
		options.set_max_attempts(raw.max_attempts)?;
		Ok(options)
	}
}

impl Default for GenerateOptions {
	fn default() -> Self {
		Self {
			min_len: None,
			max_len: None,
			sampling: Sampling::Weighted,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

impl GenerateOptions {
	/// Options with the given length bounds and default everything else.
	///
	/// # Errors
	/// `InvalidBounds` if `min > max`.
	pub fn bounded(min_len: Option<usize>, max_len: Option<usize>) -> Result<Self, ChainError> {
		let mut options = Self::default();
		options.set_bounds(min_len, max_len)?;
		Ok(options)
	}

	pub fn min_len(&self) -> Option<usize> {
		self.min_len
	}

	pub fn max_len(&self) -> Option<usize> {
		self.max_len
	}

	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	/// Sets both length bounds.
	///
	/// # Errors
	/// `InvalidBounds` if `min > max`.
	pub fn set_bounds(&mut self, min_len: Option<usize>, max_len: Option<usize>) -> Result<(), ChainError> {
		if let (Some(min), Some(max)) = (min_len, max_len) {
			if min > max {
				return Err(ChainError::InvalidBounds { min, max });
			}
		}
		self.min_len = min_len;
		self.max_len = max_len;
		Ok(())
	}

	/// # Errors
	/// `InvalidAttempts` if `max_attempts == 0`.
	pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<(), ChainError> {
		if max_attempts == 0 {
			return Err(ChainError::InvalidAttempts);
		}
		self.max_attempts = max_attempts;
		Ok(())
	}

	/// Builder form of the `sampling` field.
	pub fn with_sampling(mut self, sampling: Sampling) -> Self {
		self.sampling = sampling;
		self
	}

	/// Whether a sequence of `len` tokens satisfies the bounds.
	pub fn accepts(&self, len: usize) -> bool {
		self.min_len.is_none_or(|min| len >= min) && self.max_len.is_none_or(|max| len <= max)
	}
}
