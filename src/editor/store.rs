//! Canonical node and edge sequences.

use log::debug;

use super::types::{
	Connection, EdgeChange, Field, NodeChange, NodeData, Position, SchemaEdge, SchemaNode,
};

/// Monotonic node-id source owned by the store.
#[derive(Clone, Debug)]
pub struct IdAllocator {
	next: u64,
}

impl IdAllocator {
	/// Start allocating from `next`.
	pub const fn starting_at(next: u64) -> Self {
		Self { next }
	}

	/// The id the next call to [`IdAllocator::allocate`] returns.
	pub fn peek(&self) -> String {
		self.next.to_string()
	}

	/// Hand out the next id and advance.
	pub fn allocate(&mut self) -> String {
		let current = self.next;
		self.next += 1;
		current.to_string()
	}
}

impl Default for IdAllocator {
	fn default() -> Self {
		Self::starting_at(1)
	}
}

/// Ordered node and edge records plus the counters that name them.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	nodes: Vec<SchemaNode>,
	edges: Vec<SchemaEdge>,
	node_ids: IdAllocator,
	edge_seq: u64,
	revision: u64,
}

impl GraphStore {
	/// Empty store whose first node id is `first_id`.
	pub fn new(first_id: u64) -> Self {
		Self {
			node_ids: IdAllocator::starting_at(first_id),
			..Self::default()
		}
	}

	/// The starter diagram: a single `Person` concept and no edges.
	pub fn seeded() -> Self {
		let person = SchemaNode::new(
			"1",
			Position::new(250.0, 100.0),
			NodeData {
				label: "Person".into(),
				fields: vec![
					Field::new("String", "firstName"),
					Field::new("String", "lastName"),
					Field::new("Integer", "age"),
				],
			},
		);
		let mut store = Self::new(2);
		store.nodes.push(person);
		store
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> &[SchemaNode] {
		&self.nodes
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[SchemaEdge] {
		&self.edges
	}

	/// Look a node up by id.
	pub fn node(&self, id: &str) -> Option<&SchemaNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Counter bumped by every mutation.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// Allocate a fresh node id.
	pub fn next_node_id(&mut self) -> String {
		self.node_ids.allocate()
	}

	/// Peek at the id the next created node will get.
	pub fn peek_node_id(&self) -> String {
		self.node_ids.peek()
	}

	/// Merge a batch of node deltas. Deltas naming unknown ids are skipped.
	pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) {
		if changes.is_empty() {
			return;
		}
		for change in changes {
			match change {
				NodeChange::Position { id, position, .. } => {
					if let (Some(node), Some(position)) = (self.node_mut(&id), position) {
						node.position = position;
					}
				}
				NodeChange::Select { id, selected } => {
					if let Some(node) = self.node_mut(&id) {
						node.selected = selected;
					}
				}
				NodeChange::Remove { id } => {
					self.nodes.retain(|n| n.id != id);
					self.edges.retain(|e| e.source != id && e.target != id);
					debug!("removed node {id}");
				}
				NodeChange::Add(node) => self.nodes.push(node),
			}
		}
		self.touch();
	}

	/// Merge a batch of edge deltas. Deltas naming unknown ids are skipped.
	pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) {
		if changes.is_empty() {
			return;
		}
		for change in changes {
			match change {
				EdgeChange::Select { id, selected } => {
					if let Some(edge) = self.edges.iter_mut().find(|e| e.id == id) {
						edge.selected = selected;
					}
				}
				EdgeChange::Remove { id } => self.edges.retain(|e| e.id != id),
				EdgeChange::Add(edge) => self.edges.push(edge),
			}
		}
		self.touch();
	}

	/// Append an edge. Endpoints are not checked; duplicates and self-loops are kept.
	pub fn connect(&mut self, connection: Connection) -> String {
		self.edge_seq += 1;
		let id = format!("e{}", self.edge_seq);
		debug!(
			"connected {} -> {} as {id}",
			connection.source, connection.target
		);
		self.edges.push(SchemaEdge {
			id: id.clone(),
			source: connection.source,
			target: connection.target,
			selected: false,
		});
		self.touch();
		id
	}

	/// Replace the node sequence wholesale.
	pub fn set_nodes(&mut self, nodes: Vec<SchemaNode>) {
		self.nodes = nodes;
		self.touch();
	}

	/// Replace the node sequence with the output of `f`.
	pub fn update_nodes(&mut self, f: impl FnOnce(&[SchemaNode]) -> Vec<SchemaNode>) {
		let next = f(&self.nodes);
		self.set_nodes(next);
	}

	/// Patch one node's data in place and bump its version. Returns `false` for unknown ids.
	pub fn patch_node_data(&mut self, id: &str, patch: impl FnOnce(&mut NodeData)) -> bool {
		let Some(node) = self.node_mut(id) else {
			return false;
		};
		patch(&mut node.data);
		node.version += 1;
		self.touch();
		true
	}

	fn node_mut(&mut self, id: &str) -> Option<&mut SchemaNode> {
		self.nodes.iter_mut().find(|n| n.id == id)
	}

	fn touch(&mut self) {
		self.revision += 1;
	}
}
