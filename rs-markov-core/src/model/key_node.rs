use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::association::Association;
use super::curve::ProbabilityCurve;
use super::key::Key;
use crate::error::ChainError;

/// Index of a node inside the arena of its `Chain`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Which edge set of a node is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	/// Outgoing edges (`links`).
	Forward,
	/// Incoming edges (`parents`).
	Backward,
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Direction::Forward => f.write_str("forward"),
			Direction::Backward => f.write_str("backward"),
		}
	}
}

/// Insertion-ordered set of weighted edges, with its cached curve.
///
/// Sampling scans the edges in the order they were first observed, so the
/// order is part of the observable behavior when the random source is fixed.
///
/// ## Invariants
/// - `weight_sum` equals the sum of all association counts
/// - `curve` is `Some` exactly when there is at least one edge, and always
///   reflects the current counts
#[derive(Clone, Debug, Default)]
pub struct Edges {
	associations: Vec<Association>,
	index: HashMap<NodeId, usize>,
	weight_sum: usize,
	curve: Option<ProbabilityCurve>,
}

impl Edges {
	/// Records one more observation of the edge toward `target`.
	fn observe(&mut self, target: NodeId) {
		match self.index.get(&target) {
			Some(&position) => self.associations[position].increment(),
			None => {
				self.index.insert(target, self.associations.len());
				self.associations.push(Association::new(target));
			}
		}
		self.weight_sum += 1;
		self.refresh_curve();
	}

	fn refresh_curve(&mut self) {
		self.curve = ProbabilityCurve::from_counts(
			self.weight_sum,
			self.associations.iter().map(Association::associations),
		);
	}

	pub fn iter(&self) -> impl Iterator<Item = &Association> {
		self.associations.iter()
	}

	pub fn get(&self, target: NodeId) -> Option<&Association> {
		self.index.get(&target).map(|&position| &self.associations[position])
	}

	pub fn len(&self) -> usize {
		self.associations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.associations.is_empty()
	}

	pub fn weight_sum(&self) -> usize {
		self.weight_sum
	}

	pub fn curve(&self) -> Option<&ProbabilityCurve> {
		self.curve.as_ref()
	}

	/// Frequency-weighted sampling.
	///
	/// Draws an integer threshold in `[1, weight_sum]` and returns the first
	/// edge whose cumulative count reaches it, so each edge is picked with
	/// probability `associations / weight_sum`.
	fn sample_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<NodeId> {
		if self.weight_sum == 0 {
			return None;
		}
		let threshold = rng.random_range(1..=self.weight_sum);
		let position = select_by_threshold(
			self.associations.iter().map(Association::associations),
			threshold,
		)?;
		Some(self.associations[position].target())
	}

	/// Uniform pick over distinct edges, ignoring their counts.
	fn sample_uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<NodeId> {
		self.associations.choose(rng).map(Association::target)
	}

	/// Smoothed sampling: each edge weighs `curve.cdf(associations)`.
	fn sample_smoothed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<NodeId> {
		let curve = self.curve.as_ref()?;
		let weights: Vec<f64> = self.associations.iter().map(|a| curve.cdf(a.associations())).collect();
		let total: f64 = weights.iter().sum();
		if total.is_nan() || total <= 0.0 {
			// Every weight underflowed, fall back to a uniform pick
			return self.sample_uniform(rng);
		}
		let threshold = rng.random::<f64>() * total;
		let position = select_by_threshold(weights, threshold)?;
		Some(self.associations[position].target())
	}
}

/// Returns the position of the first weight whose running sum is `>= threshold`.
///
/// If rounding prevents any match, the last position is returned so the scan
/// always terminates with a result. `None` only for an empty sequence.
pub(crate) fn select_by_threshold<W, I>(weights: I, threshold: W) -> Option<usize>
where
	W: Copy + PartialOrd + std::ops::AddAssign + Default,
	I: IntoIterator<Item = W>,
{
	let mut accu = W::default();
	let mut last = None;
	for (position, weight) in weights.into_iter().enumerate() {
		accu += weight;
		if accu >= threshold {
			return Some(position);
		}
		last = Some(position);
	}
	last
}

/// A vertex of the chain: one canonical key and its edges in both directions.
///
/// ## Responsibilities
/// - Accumulate forward (`links`) and backward (`parents`) transitions
/// - Keep every surface form that canonicalizes to `key`
/// - Sample a neighbour with one of three strategies
///
/// ## Invariants
/// - For every edge `A --n--> B` in `A.links`, `B.parents` holds `A` with the
///   same count. The `Chain` maintains this, a lone node cannot.
#[derive(Clone, Debug)]
pub struct KeyNode {
	key: Key,
	links: Edges,
	parents: Edges,
	output: Vec<String>,
}

impl KeyNode {
	/// Creates a node without any surface form (used for sentinels).
	pub fn new(key: Key) -> Self {
		Self {
			key,
			links: Edges::default(),
			parents: Edges::default(),
			output: Vec::new(),
		}
	}

	/// Creates a token node from its first surface form.
	pub fn from_surface(raw: &str) -> Self {
		let mut node = Self::new(Key::token(raw));
		node.output.push(raw.to_owned());
		node
	}

	pub fn key(&self) -> &Key {
		&self.key
	}

	pub fn links(&self) -> &Edges {
		&self.links
	}

	pub fn parents(&self) -> &Edges {
		&self.parents
	}

	pub fn edges(&self, direction: Direction) -> &Edges {
		match direction {
			Direction::Forward => &self.links,
			Direction::Backward => &self.parents,
		}
	}

	pub fn weight_sum(&self) -> usize {
		self.links.weight_sum()
	}

	pub fn parent_weight_sum(&self) -> usize {
		self.parents.weight_sum()
	}

	pub fn curve(&self) -> Option<&ProbabilityCurve> {
		self.links.curve()
	}

	pub fn parent_curve(&self) -> Option<&ProbabilityCurve> {
		self.parents.curve()
	}

	/// Surface forms seen for this key, in first-seen order.
	pub fn output(&self) -> &[String] {
		&self.output
	}

	/// Adds `raw` to the surface forms if it is new.
	///
	/// Returns `true` when it was added.
	pub(crate) fn add_output(&mut self, raw: &str) -> bool {
		if self.output.iter().any(|o| o == raw) {
			return false;
		}
		self.output.push(raw.to_owned());
		true
	}

	pub fn add_link(&mut self, target: NodeId) {
		self.links.observe(target);
	}

	pub fn add_parent(&mut self, source: NodeId) {
		self.parents.observe(source);
	}

	fn empty(&self, direction: Direction) -> ChainError {
		ChainError::EmptyDistribution { key: self.key.clone(), direction }
	}

	/// Samples an outgoing edge proportionally to its count.
	///
	/// # Errors
	/// `EmptyDistribution` if the node has no outgoing edge.
	pub fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NodeId, ChainError> {
		self.links.sample_weighted(rng).ok_or_else(|| self.empty(Direction::Forward))
	}

	/// Samples an incoming edge proportionally to its count.
	pub fn prev<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NodeId, ChainError> {
		self.parents.sample_weighted(rng).ok_or_else(|| self.empty(Direction::Backward))
	}

	pub fn rand_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NodeId, ChainError> {
		self.links.sample_uniform(rng).ok_or_else(|| self.empty(Direction::Forward))
	}

	pub fn rand_prev<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NodeId, ChainError> {
		self.parents.sample_uniform(rng).ok_or_else(|| self.empty(Direction::Backward))
	}

	/// Samples an outgoing edge through the forward curve.
	///
	/// Counts far from the node's mean get compressed weights, so a few very
	/// frequent edges dominate less than with [`KeyNode::next`].
	pub fn gaus_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NodeId, ChainError> {
		self.links.sample_smoothed(rng).ok_or_else(|| self.empty(Direction::Forward))
	}

	pub fn gaus_prev<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NodeId, ChainError> {
		self.parents.sample_smoothed(rng).ok_or_else(|| self.empty(Direction::Backward))
	}

	/// Picks one surface form at random.
	///
	/// Sentinels have none and render as their key.
	pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		match self.output.choose(rng) {
			Some(surface) => surface.clone(),
			None => self.key.to_string(),
		}
	}
}
