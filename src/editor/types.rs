//! Records held by the graph store.

/// Type tag carried by every node record.
pub const NODE_KIND: &str = "concerto";

/// A point in canvas space (or screen space, depending on who holds it).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Position {
	/// Build a position from its two coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A typed, named property of a schema declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
	/// Primitive schema type, e.g. `String` or `Integer`.
	pub kind: String,
	/// Property name.
	pub name: String,
}

impl Field {
	/// Build a field from a type name and a property name.
	pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			name: name.into(),
		}
	}
}

/// Editable payload of a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeData {
	/// Declaration name shown in the node header.
	pub label: String,
	/// Ordered property list.
	pub fields: Vec<Field>,
}

/// One concept, asset or enum box on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaNode {
	/// Unique identifier (decimal string).
	pub id: String,
	/// Always [`NODE_KIND`].
	pub kind: String,
	/// Top-left corner in canvas space.
	pub position: Position,
	/// Label and fields.
	pub data: NodeData,
	/// Bumped every time `data` is patched.
	pub version: u64,
	/// Surface-level selection flag, used for deletion.
	pub selected: bool,
}

impl SchemaNode {
	/// Build a fresh, unselected node at version zero.
	pub fn new(id: impl Into<String>, position: Position, data: NodeData) -> Self {
		Self {
			id: id.into(),
			kind: NODE_KIND.into(),
			position,
			data,
			version: 0,
			selected: false,
		}
	}
}

/// Directed visual connector between two nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaEdge {
	/// Store-assigned identifier.
	pub id: String,
	/// Node the edge leaves from (bottom connector).
	pub source: String,
	/// Node the edge enters (top connector).
	pub target: String,
	/// Surface-level selection flag, used for deletion.
	pub selected: bool,
}

/// Endpoints of a connect gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
	/// Outgoing side.
	pub source: String,
	/// Incoming side.
	pub target: String,
}

impl Connection {
	/// Build a connection from source and target ids.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Declarative delta applied to the node sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeChange {
	/// Node moved; `position` is `None` while the gesture has not produced a point yet.
	Position {
		/// Target node.
		id: String,
		/// New top-left corner.
		position: Option<Position>,
		/// Whether a drag gesture is still in progress.
		dragging: bool,
	},
	/// Surface selection toggled.
	Select {
		/// Target node.
		id: String,
		/// New flag value.
		selected: bool,
	},
	/// Node deleted.
	Remove {
		/// Target node.
		id: String,
	},
	/// Node appended.
	Add(SchemaNode),
}

/// Declarative delta applied to the edge sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeChange {
	/// Surface selection toggled.
	Select {
		/// Target edge.
		id: String,
		/// New flag value.
		selected: bool,
	},
	/// Edge deleted.
	Remove {
		/// Target edge.
		id: String,
	},
	/// Edge appended.
	Add(SchemaEdge),
}
