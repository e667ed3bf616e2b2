use std::collections::HashMap;
use std::ops::Index;
use std::path::Path;

use log::{debug, trace, warn};
use rand::Rng;
use rand::rngs::ThreadRng;

use super::generate_options::{GenerateOptions, Sampling};
use super::key::{Key, Sentinel};
use super::key_node::{Direction, KeyNode, NodeId};
use crate::error::ChainError;
use crate::io::read_corpus;

/// Id of the `Start` sentinel in every chain.
pub const START: NodeId = NodeId(0);
/// Id of the `End` sentinel in every chain.
pub const END: NodeId = NodeId(1);

/// Anything that designates a node of a `Chain`.
///
/// - `Id`: a node id previously returned by the chain
/// - `Key`: a canonical key
/// - `Sentinel`: `Start` or `End`
/// - `Text`: a raw surface form, canonicalized before the lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRef<'a> {
	Id(NodeId),
	Key(&'a Key),
	Sentinel(Sentinel),
	Text(&'a str),
}

impl From<NodeId> for NodeRef<'_> {
	fn from(id: NodeId) -> Self {
		NodeRef::Id(id)
	}
}

impl<'a> From<&'a Key> for NodeRef<'a> {
	fn from(key: &'a Key) -> Self {
		NodeRef::Key(key)
	}
}

impl From<Sentinel> for NodeRef<'_> {
	fn from(sentinel: Sentinel) -> Self {
		NodeRef::Sentinel(sentinel)
	}
}

impl<'a> From<&'a str> for NodeRef<'a> {
	fn from(text: &'a str) -> Self {
		NodeRef::Text(text)
	}
}

impl<'a> From<&'a String> for NodeRef<'a> {
	fn from(text: &'a String) -> Self {
		NodeRef::Text(text.as_str())
	}
}

/// Outcome of `Chain::generate_walk`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	/// Visited token nodes, sentinels excluded.
	pub nodes: Vec<NodeId>,
	/// Number of full walks performed, `1..=max_attempts`.
	pub attempts: usize,
	/// Whether `nodes` satisfies the requested length bounds.
	pub satisfied: bool,
}

/// First-order chain over word tokens, bounded by `Start` / `End` sentinels.
///
/// The chain is the sole owner of its nodes. Edges refer to nodes through
/// `NodeId`, which stays valid for the chain's lifetime since nodes are
/// never removed.
///
/// # Responsibilities
/// - Build the graph from lines of text (`seed`)
/// - Resolve nodes by id, key, sentinel or surface form (`lookup`)
/// - Sample neighbours, walk forward / backward around a node, and generate
///   whole sequences between the sentinels
///
/// # Invariants
/// - `nodes[0]` is `Start`, `nodes[1]` is `End`
/// - `index` maps every key to the position of its node
/// - Every forward edge has its backward twin with the same count
///
/// Randomness comes from the injected `R`; use a seeded generator for
/// reproducible results.
#[derive(Debug)]
pub struct Chain<R = ThreadRng> {
	names: Vec<String>,
	nodes: Vec<KeyNode>,
	index: HashMap<Key, NodeId>,
	rng: R,
}

impl Chain<ThreadRng> {
	/// Creates an empty chain drawing from the thread-local generator.
	pub fn new() -> Self {
		Self::with_rng(rand::rng())
	}
}

impl Default for Chain<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> Chain<R> {
	/// Creates an empty chain (two sentinels) drawing from `rng`.
	pub fn with_rng(rng: R) -> Self {
		let mut chain = Self {
			names: Vec::new(),
			nodes: Vec::new(),
			index: HashMap::new(),
			rng,
		};
		for sentinel in [Sentinel::Start, Sentinel::End] {
			let key = Key::from(sentinel);
			chain.index.insert(key.clone(), NodeId(chain.nodes.len()));
			chain.nodes.push(KeyNode::new(key));
		}
		chain
	}

	/// Attaches opaque metadata. Not read by any algorithm.
	pub fn named(mut self, names: Vec<String>) -> Self {
		self.names = names;
		self
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Number of nodes, sentinels included.
	pub fn size(&self) -> usize {
		self.nodes.len()
	}

	pub fn start(&self) -> &KeyNode {
		&self.nodes[START.0]
	}

	pub fn end(&self) -> &KeyNode {
		&self.nodes[END.0]
	}

	pub fn node(&self, id: NodeId) -> Option<&KeyNode> {
		self.nodes.get(id.0)
	}

	/// All nodes with their ids, in creation order.
	pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &KeyNode)> {
		self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
	}

	/// Adds one line to the model.
	///
	/// Splits on whitespace and links `Start -> t1 -> ... -> tn -> End`,
	/// updating both edge directions at each step.
	/// A blank line leaves the chain untouched.
	///
	/// Returns the number of tokens seeded.
	pub fn seed(&mut self, line: &str) -> usize {
		let mut last = START;
		let mut tokens = 0;
		for raw in line.split_whitespace() {
			let id = self.get_or_create(raw);
			self.link(last, id);
			last = id;
			tokens += 1;
		}
		if tokens == 0 {
			trace!("Skipping blank line");
			return 0;
		}
		self.link(last, END);
		trace!("Seeded {} tokens", tokens);
		tokens
	}

	/// Seeds every line of a collection.
	///
	/// Returns the number of non-blank lines seeded.
	pub fn seed_lines<I, S>(&mut self, lines: I) -> usize
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut seeded = 0;
		for line in lines {
			if self.seed(line.as_ref()) > 0 {
				seeded += 1;
			}
		}
		debug!("Seeded {} lines, chain has {} nodes", seeded, self.size());
		seeded
	}

	/// Seeds every line of a text file.
	///
	/// # Errors
	/// `Io` if the file cannot be read.
	pub fn seed_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ChainError> {
		let lines = read_corpus(&path)?;
		debug!("Read {} lines from {}", lines.len(), path.as_ref().display());
		Ok(self.seed_lines(lines))
	}

	fn link(&mut self, from: NodeId, to: NodeId) {
		self.nodes[from.0].add_link(to);
		self.nodes[to.0].add_parent(from);
	}

	/// Returns the node for the canonical form of `raw`, creating it if needed.
	///
	/// `raw` is recorded as a surface form of the node if it is new.
	pub fn get_or_create(&mut self, raw: &str) -> NodeId {
		let key = Key::token(raw);
		if let Some(&id) = self.index.get(&key) {
			self.nodes[id.0].add_output(raw);
			return id;
		}
		let id = NodeId(self.nodes.len());
		self.nodes.push(KeyNode::from_surface(raw));
		self.index.insert(key, id);
		id
	}

	/// Resolves a node.
	///
	/// # Errors
	/// `NotFound` if no node matches.
	pub fn lookup<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<NodeId, ChainError> {
		match node.into() {
			NodeRef::Id(id) if id.0 < self.nodes.len() => Ok(id),
			NodeRef::Id(id) => Err(ChainError::NotFound(id.to_string())),
			NodeRef::Key(key) => self
				.index
				.get(key)
				.copied()
				.ok_or_else(|| ChainError::NotFound(key.to_string())),
			NodeRef::Sentinel(Sentinel::Start) => Ok(START),
			NodeRef::Sentinel(Sentinel::End) => Ok(END),
			NodeRef::Text(raw) => self
				.index
				.get(&Key::token(raw))
				.copied()
				.ok_or_else(|| ChainError::NotFound(format!("\"{}\"", raw))),
		}
	}

	/// Resolves a node and borrows it.
	pub fn key_node<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<&KeyNode, ChainError> {
		let id = self.lookup(node)?;
		Ok(&self.nodes[id.0])
	}

	/// Uniformly random node, sentinels included.
	pub fn pick(&mut self) -> NodeId {
		NodeId(self.rng.random_range(0..self.nodes.len()))
	}

	/// Samples one neighbour of `id`.
	fn step(&mut self, id: NodeId, direction: Direction, sampling: Sampling) -> Result<NodeId, ChainError> {
		let node = &self.nodes[id.0];
		let rng = &mut self.rng;
		match (direction, sampling) {
			(Direction::Forward, Sampling::Weighted) => node.next(rng),
			(Direction::Forward, Sampling::Uniform) => node.rand_next(rng),
			(Direction::Forward, Sampling::Smoothed) => node.gaus_next(rng),
			(Direction::Backward, Sampling::Weighted) => node.prev(rng),
			(Direction::Backward, Sampling::Uniform) => node.rand_prev(rng),
			(Direction::Backward, Sampling::Smoothed) => node.gaus_prev(rng),
		}
	}

	/// Samples one neighbour of `node` in the given direction.
	///
	/// # Errors
	/// - `NotFound` if the node does not exist
	/// - `EmptyDistribution` if it has no edge in that direction
	pub fn sample<'a>(
		&mut self,
		node: impl Into<NodeRef<'a>>,
		direction: Direction,
		sampling: Sampling,
	) -> Result<NodeId, ChainError> {
		let id = self.lookup(node)?;
		self.step(id, direction, sampling)
	}

	pub fn next<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> Result<NodeId, ChainError> {
		self.sample(node, Direction::Forward, Sampling::Weighted)
	}

	pub fn prev<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> Result<NodeId, ChainError> {
		self.sample(node, Direction::Backward, Sampling::Weighted)
	}

	pub fn rand_next<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> Result<NodeId, ChainError> {
		self.sample(node, Direction::Forward, Sampling::Uniform)
	}

	pub fn rand_prev<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> Result<NodeId, ChainError> {
		self.sample(node, Direction::Backward, Sampling::Uniform)
	}

	pub fn gaus_next<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> Result<NodeId, ChainError> {
		self.sample(node, Direction::Forward, Sampling::Smoothed)
	}

	pub fn gaus_prev<'a>(&mut self, node: impl Into<NodeRef<'a>>) -> Result<NodeId, ChainError> {
		self.sample(node, Direction::Backward, Sampling::Smoothed)
	}

	/// Walks from `from` (included) until the terminal sentinel of `direction`
	/// is sampled (excluded) or more than `limit` steps were taken.
	///
	/// Starting on the terminal sentinel itself returns it alone.
	fn walk(
		&mut self,
		from: NodeId,
		direction: Direction,
		limit: Option<usize>,
		sampling: Sampling,
	) -> Result<Vec<NodeId>, ChainError> {
		let terminal = match direction {
			Direction::Forward => END,
			Direction::Backward => START,
		};
		let mut visited = Vec::new();
		let mut current = from;
		let mut steps = 0;
		loop {
			visited.push(current);
			if current == terminal {
				break;
			}
			let next = self.step(current, direction, sampling)?;
			steps += 1;
			if next == terminal || limit.is_some_and(|limit| steps > limit) {
				break;
			}
			current = next;
		}
		Ok(visited)
	}

	/// Walks forward from `node` (included) until `End` or the step limit.
	pub fn forward<'a>(
		&mut self,
		node: impl Into<NodeRef<'a>>,
		limit: Option<usize>,
		sampling: Sampling,
	) -> Result<Vec<NodeId>, ChainError> {
		let id = self.lookup(node)?;
		self.walk(id, Direction::Forward, limit, sampling)
	}

	/// Walks backward from `node` (included) until `Start` or the step limit.
	///
	/// The result reads in forward order, ending on `node`.
	pub fn backward<'a>(
		&mut self,
		node: impl Into<NodeRef<'a>>,
		limit: Option<usize>,
		sampling: Sampling,
	) -> Result<Vec<NodeId>, ChainError> {
		let id = self.lookup(node)?;
		let mut visited = self.walk(id, Direction::Backward, limit, sampling)?;
		visited.reverse();
		Ok(visited)
	}

	/// Context window around `node`: a backward walk, then a forward walk
	/// sharing the remaining `limit`, with `node` appearing once.
	pub fn fill<'a>(
		&mut self,
		node: impl Into<NodeRef<'a>>,
		limit: Option<usize>,
		sampling: Sampling,
	) -> Result<Vec<NodeId>, ChainError> {
		let id = self.lookup(node)?;
		let mut window = self.backward(id, limit, sampling)?;
		let remaining = match limit {
			None => None,
			Some(limit) if window.len() < limit => Some(limit - window.len()),
			Some(_) => return Ok(window),
		};
		let ahead = self.walk(id, Direction::Forward, remaining, sampling)?;
		window.extend(ahead.into_iter().skip(1));
		Ok(window)
	}

	/// One walk from `Start` to `End`, sentinels excluded.
	///
	/// There is no step cap: every seeded node reaches `End`, so the walk
	/// terminates with probability 1, but a node dominated by a self-loop can
	/// make it arbitrarily long.
	fn sequence(&mut self, sampling: Sampling) -> Result<Vec<NodeId>, ChainError> {
		let mut nodes = Vec::new();
		let mut current = self.step(START, Direction::Forward, sampling)?;
		while current != END {
			nodes.push(current);
			current = self.step(current, Direction::Forward, sampling)?;
		}
		Ok(nodes)
	}

	/// Generates a sequence between the sentinels.
	///
	/// Walks are retried while the length bounds of `options` are missed, at
	/// most `max_attempts` walks in total; the last walk is kept whatever its
	/// length.
	///
	/// The number of walks is bounded, the length of each walk is not (see
	/// the termination note on the single walk): generation ends with
	/// probability 1 rather than under a hard length bound.
	///
	/// # Errors
	/// `EmptyDistribution` if the chain was never seeded.
	pub fn generate_walk(&mut self, options: &GenerateOptions) -> Result<Generation, ChainError> {
		let max_attempts = options.max_attempts();
		let mut attempts = 0;
		loop {
			attempts += 1;
			let nodes = self.sequence(options.sampling)?;
			let satisfied = options.accepts(nodes.len());
			trace!("Attempt {}/{}: {} tokens", attempts, max_attempts, nodes.len());
			if satisfied || attempts >= max_attempts {
				if !satisfied {
					warn!(
						"No sequence within bounds {:?}..={:?} after {} attempts, keeping {} tokens",
						options.min_len(),
						options.max_len(),
						attempts,
						nodes.len()
					);
				}
				return Ok(Generation { nodes, attempts, satisfied });
			}
		}
	}

	/// Generates a sequence and renders it to surface forms.
	pub fn generate(&mut self, options: &GenerateOptions) -> Result<Vec<String>, ChainError> {
		let generation = self.generate_walk(options)?;
		Ok(self.render(&generation.nodes))
	}

	/// Renders nodes to text, picking one surface form per node.
	///
	/// Unknown ids are skipped.
	pub fn render(&mut self, ids: &[NodeId]) -> Vec<String> {
		let nodes = &self.nodes;
		let rng = &mut self.rng;
		ids.iter()
			.filter_map(|id| nodes.get(id.0))
			.map(|node| node.render(rng))
			.collect()
	}
}

impl<R> Index<NodeId> for Chain<R> {
	type Output = KeyNode;

	fn index(&self, id: NodeId) -> &KeyNode {
		&self.nodes[id.0]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn chain() -> Chain<StdRng> {
		Chain::with_rng(StdRng::seed_from_u64(42))
	}

	fn words(chain: &Chain<StdRng>, ids: &[NodeId]) -> Vec<String> {
		ids.iter().map(|&id| chain[id].key().to_string()).collect()
	}

	#[test]
	fn new_chain_has_only_sentinels() {
		let chain = chain();
		assert_eq!(chain.size(), 2);
		assert_eq!(chain.start().key(), &Key::from(Sentinel::Start));
		assert_eq!(chain.end().key(), &Key::from(Sentinel::End));
		assert!(chain.names().is_empty());
	}

	#[test]
	fn names_are_carried() {
		let chain = Chain::new().named(vec!["a".to_owned(), "b".to_owned()]);
		assert_eq!(chain.names(), ["a", "b"]);
	}

	#[test]
	fn seed_links_both_sentinels() {
		let mut chain = chain();
		assert_eq!(chain.seed("one two"), 2);

		let one = chain.lookup("one").unwrap();
		let two = chain.lookup("two").unwrap();
		assert_eq!(chain.start().links().get(one).map(|a| a.associations()), Some(1));
		assert_eq!(chain[one].parents().get(START).map(|a| a.associations()), Some(1));
		assert_eq!(chain[two].links().get(END).map(|a| a.associations()), Some(1));
		assert_eq!(chain.end().parents().get(two).map(|a| a.associations()), Some(1));
	}

	#[test]
	fn blank_lines_are_ignored() {
		let mut chain = chain();
		assert_eq!(chain.seed(""), 0);
		assert_eq!(chain.seed("   \t "), 0);
		assert_eq!(chain.size(), 2);
		assert!(chain.start().links().is_empty());
		assert_eq!(chain.seed_lines(["", "one", "  "]), 1);
	}

	#[test]
	fn surface_forms_share_a_node() {
		let mut chain = chain();
		chain.seed("three three. three, three.");
		assert_eq!(chain.size(), 3);

		let node = chain.key_node("three").unwrap();
		assert_eq!(node.output(), ["three", "three.", "three,"]);
		assert_eq!(node.links().len(), 2);
		assert_eq!(node.weight_sum(), 4);
	}

	#[test]
	fn uppercase_letters_are_dropped_from_keys() {
		let mut chain = chain();
		chain.seed("One one");
		assert!(chain.lookup(&Key::Token("ne".to_owned())).is_ok());
		assert!(chain.lookup(&Key::Token("one".to_owned())).is_ok());
		assert_eq!(chain.size(), 4);
	}

	#[test]
	fn lookup_accepts_every_reference() {
		let mut chain = chain();
		chain.seed("one two");
		let one = chain.lookup("one").unwrap();

		assert_eq!(chain.lookup(one).unwrap(), one);
		assert_eq!(chain.lookup(&Key::token("one")).unwrap(), one);
		assert_eq!(chain.lookup("one!").unwrap(), one);
		assert_eq!(chain.lookup(&"one".to_owned()).unwrap(), one);
		assert_eq!(chain.lookup(Sentinel::Start).unwrap(), START);
		assert_eq!(chain.lookup(Sentinel::End).unwrap(), END);
	}

	#[test]
	fn lookup_unknown_names_the_key() {
		let chain = chain();
		match chain.lookup("missing") {
			Err(ChainError::NotFound(key)) => assert_eq!(key, "\"missing\""),
			other => panic!("unexpected result: {:?}", other),
		}
		assert!(matches!(chain.lookup(NodeId(99)), Err(ChainError::NotFound(_))));
		let error = chain.lookup(&Key::token("gone")).unwrap_err();
		assert_eq!(error.to_string(), "key not found: gone");
	}

	#[test]
	fn sampling_sentinels_outward_fails() {
		let mut chain = chain();
		chain.seed("one two");
		assert!(matches!(
			chain.next(Sentinel::End),
			Err(ChainError::EmptyDistribution { direction: Direction::Forward, .. })
		));
		assert!(matches!(
			chain.prev(Sentinel::Start),
			Err(ChainError::EmptyDistribution { direction: Direction::Backward, .. })
		));
		assert!(chain.gaus_next(Sentinel::End).is_err());
		assert!(chain.rand_prev(Sentinel::Start).is_err());
	}

	#[test]
	fn samplers_follow_single_edges() {
		let mut chain = chain();
		chain.seed("one two three");
		let two = chain.lookup("two").unwrap();
		let one = chain.lookup("one").unwrap();
		let three = chain.lookup("three").unwrap();

		assert_eq!(chain.next("one").unwrap(), two);
		assert_eq!(chain.rand_next("one").unwrap(), two);
		assert_eq!(chain.gaus_next("one").unwrap(), two);
		assert_eq!(chain.prev("two").unwrap(), one);
		assert_eq!(chain.rand_prev("two").unwrap(), one);
		assert_eq!(chain.gaus_prev("two").unwrap(), one);
		assert_eq!(chain.next("three").unwrap(), END);
		assert_eq!(chain.prev("three").unwrap(), two);
		assert_eq!(chain.sample(three, Direction::Backward, Sampling::Uniform).unwrap(), two);
	}

	#[test]
	fn pick_covers_sentinels() {
		let mut chain = chain();
		chain.seed("one");
		let mut seen = [false; 3];
		for _ in 0..200 {
			seen[chain.pick().0] = true;
		}
		assert_eq!(seen, [true, true, true]);
	}

	#[test]
	fn walks_respect_limits() {
		let mut chain = chain();
		chain.seed("one two three four five");

		let forward = chain.forward("one", Some(2), Sampling::Weighted).unwrap();
		assert_eq!(words(&chain, &forward), ["one", "two", "three"]);

		let backward = chain.backward("five", Some(2), Sampling::Weighted).unwrap();
		assert_eq!(words(&chain, &backward), ["three", "four", "five"]);

		let fill = chain.fill("three", Some(4), Sampling::Weighted).unwrap();
		assert_eq!(words(&chain, &fill), ["one", "two", "three", "four"]);

		let fill = chain.fill("three", Some(3), Sampling::Weighted).unwrap();
		assert_eq!(words(&chain, &fill), ["one", "two", "three"]);
	}

	#[test]
	fn zero_limit_keeps_only_the_start_node() {
		let mut chain = chain();
		chain.seed("one two three");

		let forward = chain.forward("two", Some(0), Sampling::Weighted).unwrap();
		assert_eq!(words(&chain, &forward), ["two"]);

		let backward = chain.backward("two", Some(0), Sampling::Uniform).unwrap();
		assert_eq!(words(&chain, &backward), ["two"]);

		let unbounded = chain.forward("two", None, Sampling::Weighted).unwrap();
		assert_eq!(words(&chain, &unbounded), ["two", "three"]);
	}

	#[test]
	fn self_loops_still_reach_end() {
		let mut chain = chain();
		chain.seed(&["loop"; 40].join(" "));
		let options = GenerateOptions::default().with_sampling(Sampling::Smoothed);
		for _ in 0..20 {
			let generation = chain.generate_walk(&options).unwrap();
			assert!(!generation.nodes.is_empty());
			assert_eq!(generation.attempts, 1);
		}
	}

	#[test]
	fn walks_stop_on_terminal_sentinels() {
		let mut chain = chain();
		chain.seed("one two");

		assert_eq!(chain.forward(Sentinel::End, None, Sampling::Weighted).unwrap(), [END]);
		assert_eq!(chain.backward(Sentinel::Start, None, Sampling::Weighted).unwrap(), [START]);

		let from_start = chain.forward(Sentinel::Start, None, Sampling::Weighted).unwrap();
		assert_eq!(words(&chain, &from_start), ["<START>", "one", "two"]);

		let to_end = chain.backward(Sentinel::End, None, Sampling::Uniform).unwrap();
		assert_eq!(words(&chain, &to_end), ["one", "two", "<END>"]);

		let around_end = chain.fill(Sentinel::End, None, Sampling::Weighted).unwrap();
		assert_eq!(words(&chain, &around_end), ["one", "two", "<END>"]);
	}

	#[test]
	fn unseeded_chain_cannot_generate() {
		let mut chain = chain();
		assert!(matches!(
			chain.generate(&GenerateOptions::default()),
			Err(ChainError::EmptyDistribution { .. })
		));
		assert!(chain.forward(Sentinel::Start, None, Sampling::Weighted).is_err());
	}

	#[test]
	fn generation_excludes_sentinels() {
		let mut chain = chain();
		chain.seed("one two three");
		for sampling in [Sampling::Weighted, Sampling::Uniform, Sampling::Smoothed] {
			let options = GenerateOptions::default().with_sampling(sampling);
			assert_eq!(chain.generate(&options).unwrap(), ["one", "two", "three"]);
		}
	}

	#[test]
	fn unreachable_bounds_use_every_attempt() {
		let mut chain = chain();
		chain.seed("one two three");
		let options = GenerateOptions::bounded(Some(10), Some(20)).unwrap();

		let generation = chain.generate_walk(&options).unwrap();
		assert_eq!(generation.attempts, 10);
		assert!(!generation.satisfied);
		assert_eq!(generation.nodes.len(), 3);
	}

	#[test]
	fn reachable_bounds_stop_early() {
		let mut chain = chain();
		chain.seed("one two three");
		let options = GenerateOptions::bounded(Some(3), Some(3)).unwrap();

		let generation = chain.generate_walk(&options).unwrap();
		assert_eq!(generation.attempts, 1);
		assert!(generation.satisfied);
	}

	#[test]
	fn render_keeps_surface_text() {
		let mut chain = chain();
		chain.seed("Hello, world!");
		let ids = chain.forward("world", None, Sampling::Weighted).unwrap();
		assert_eq!(chain.render(&ids), ["world!"]);
		assert_eq!(chain.render(&[START, NodeId(77)]), ["<START>"]);
	}
}
