/// Normal distribution described by its mean and variance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
	mean: f64,
	variance: f64,
}

impl Gaussian {
	/// # Notes
	/// - `variance` must be strictly positive.
	pub fn new(mean: f64, variance: f64) -> Self {
		Self { mean, variance }
	}

	pub fn mean(&self) -> f64 {
		self.mean
	}

	pub fn variance(&self) -> f64 {
		self.variance
	}

	pub fn standard_deviation(&self) -> f64 {
		self.variance.sqrt()
	}

	/// Cumulative distribution function evaluated at `x`.
	///
	/// `0.5 * (1 + erf((x - mean) / sqrt(2 * variance)))`
	pub fn cdf(&self, x: f64) -> f64 {
		0.5 * erfc(-(x - self.mean) / (2.0 * self.variance).sqrt())
	}
}

/// Complementary error function.
///
/// Chebyshev fit with a fractional error below 1.2e-7 everywhere, which keeps
/// the far tails strictly positive instead of rounding to zero.
fn erfc(x: f64) -> f64 {
	let z = x.abs();
	let t = 1.0 / (1.0 + 0.5 * z);
	let poly = -z * z - 1.265_512_23
		+ t * (1.000_023_68
			+ t * (0.374_091_96
				+ t * (0.096_784_18
					+ t * (-0.186_288_06
						+ t * (0.278_868_07
							+ t * (-1.135_203_98
								+ t * (1.488_515_87 + t * (-0.822_152_23 + t * 0.170_872_77))))))));
	let r = t * poly.exp();
	if x >= 0.0 { r } else { 2.0 - r }
}

/// Gaussian model of a node's edge-weight distribution.
///
/// Built from the occurrence counts of one edge set (forward or backward):
/// - `mean = sum / edge_count`
/// - `variance = max(1, (max_count - min_count)^2)`
///
/// The variance floor keeps the distribution usable when every edge carries
/// the same count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbabilityCurve {
	gaussian: Gaussian,
}

impl ProbabilityCurve {
	/// Builds the curve for an edge set whose counts sum to `sum`.
	///
	/// Returns `None` for an empty edge set.
	pub fn from_counts<I>(sum: usize, counts: I) -> Option<Self>
	where
		I: IntoIterator<Item = usize>,
	{
		let mut edge_count = 0usize;
		let mut min_count = usize::MAX;
		let mut max_count = 0usize;
		for count in counts {
			edge_count += 1;
			min_count = min_count.min(count);
			max_count = max_count.max(count);
		}
		if edge_count == 0 {
			return None;
		}

		let mean = sum as f64 / edge_count as f64;
		let deviation = (max_count - min_count) as f64;
		let variance = (deviation * deviation).max(1.0);

		Some(Self { gaussian: Gaussian::new(mean, variance) })
	}

	pub fn gaussian(&self) -> &Gaussian {
		&self.gaussian
	}

	pub fn mean(&self) -> f64 {
		self.gaussian.mean()
	}

	pub fn variance(&self) -> f64 {
		self.gaussian.variance()
	}

	/// Smoothed weight of an edge observed `associations` times.
	pub fn cdf(&self, associations: usize) -> f64 {
		self.gaussian.cdf(associations as f64)
	}
}
