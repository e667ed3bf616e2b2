use super::key_node::NodeId;

/// A weighted edge toward another node of the same `Chain`.
///
/// The edge only stores the target's id; the `Chain` owns every node.
///
/// ## Invariants
/// - `associations >= 1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Association {
	target: NodeId,
	associations: usize,
}

impl Association {
	/// Creates an edge observed once.
	pub fn new(target: NodeId) -> Self {
		Self { target, associations: 1 }
	}

	pub fn target(&self) -> NodeId {
		self.target
	}

	/// Number of times this transition was observed.
	pub fn associations(&self) -> usize {
		self.associations
	}

	pub fn increment(&mut self) {
		self.associations += 1;
	}
}
