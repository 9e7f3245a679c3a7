use std::collections::HashMap;

use crate::editor::{
	Connection, EdgeChange, EditorShell, NodeChange, NodeData, Position, SchemaEdge, SchemaNode,
	ScreenToCanvas,
};

use super::types::CanvasConfig;

pub const NODE_MIN_WIDTH: f64 = 160.0;
pub const HEADER_HEIGHT: f64 = 30.0;
pub const ROW_HEIGHT: f64 = 20.0;
pub const BODY_PADDING: f64 = 8.0;
pub const TEXT_PADDING: f64 = 12.0;
pub const HANDLE_RADIUS: f64 = 4.0;
// Hit radii are in screen px and shrink in canvas space as the view zooms in.
pub const HANDLE_HIT_RADIUS: f64 = 10.0;
pub const EDGE_HIT_DISTANCE: f64 = 6.0;
const EDGE_SAMPLES: usize = 24;
const EDGE_CURVATURE: f64 = 0.25;

/// Pan (`x`, `y`, screen px) and zoom (`k`) of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	pub fn canvas_to_screen(&self, p: Position) -> Position {
		Position::new(p.x * self.k + self.x, p.y * self.k + self.y)
	}

	/// Zoom by `factor` keeping the canvas point under `screen` fixed.
	pub fn zoom_at(&mut self, screen: Position, factor: f64, min: f64, max: f64) {
		let new_k = (self.k * factor).clamp(min, max);
		let ratio = new_k / self.k;
		self.x = screen.x - (screen.x - self.x) * ratio;
		self.y = screen.y - (screen.y - self.y) * ratio;
		self.k = new_k;
	}
}

impl ScreenToCanvas for ViewTransform {
	fn screen_to_canvas(&self, screen: Position) -> Position {
		Position::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
	}
}

/// Connector attachment points of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
	/// Top, incoming.
	Target,
	/// Bottom, outgoing.
	Source,
}

/// Axis-aligned rectangle in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeBox {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
}

impl NodeBox {
	pub fn contains(&self, p: Position) -> bool {
		p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
	}

	pub fn handle(&self, handle: Handle) -> Position {
		let cx = self.x + self.w / 2.0;
		match handle {
			Handle::Target => Position::new(cx, self.y),
			Handle::Source => Position::new(cx, self.y + self.h),
		}
	}

	fn union(&self, other: &NodeBox) -> NodeBox {
		let (x, y) = (self.x.min(other.x), self.y.min(other.y));
		let right = (self.x + self.w).max(other.x + other.w);
		let bottom = (self.y + self.h).max(other.y + other.h);
		NodeBox {
			x,
			y,
			w: right - x,
			h: bottom - y,
		}
	}
}

/// Header plus one row per field, or a single placeholder row.
pub fn node_height(data: &NodeData) -> f64 {
	HEADER_HEIGHT + 2.0 * BODY_PADDING + ROW_HEIGHT * data.fields.len().max(1) as f64
}

/// Measured node widths keyed by node id and data version.
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
	widths: HashMap<String, (u64, f64)>,
}

impl LayoutCache {
	/// Re-measure nodes whose data version moved since the last refresh and
	/// forget nodes that are gone. Returns how many nodes were measured.
	pub fn refresh(
		&mut self,
		nodes: &[SchemaNode],
		mut measure: impl FnMut(&NodeData) -> f64,
	) -> usize {
		self.widths
			.retain(|id, _| nodes.iter().any(|n| &n.id == id));
		let mut measured = 0;
		for node in nodes {
			if matches!(self.widths.get(&node.id), Some((v, _)) if *v == node.version) {
				continue;
			}
			let width = measure(&node.data).max(NODE_MIN_WIDTH);
			self.widths.insert(node.id.clone(), (node.version, width));
			measured += 1;
		}
		measured
	}

	pub fn node_box(&self, node: &SchemaNode) -> NodeBox {
		let w = self
			.widths
			.get(&node.id)
			.map(|&(_, w)| w)
			.unwrap_or(NODE_MIN_WIDTH);
		NodeBox {
			x: node.position.x,
			y: node.position.y,
			w,
			h: node_height(&node.data),
		}
	}

	/// Smallest box enclosing every node.
	pub fn bounds(&self, nodes: &[SchemaNode]) -> Option<NodeBox> {
		nodes
			.iter()
			.map(|n| self.node_box(n))
			.reduce(|acc, b| acc.union(&b))
	}

	/// Source connector of the edge's source node and target connector of its target node.
	pub fn edge_endpoints(
		&self,
		nodes: &[SchemaNode],
		edge: &SchemaEdge,
	) -> Option<(Position, Position)> {
		let source = nodes.iter().find(|n| n.id == edge.source)?;
		let target = nodes.iter().find(|n| n.id == edge.target)?;
		Some((
			self.node_box(source).handle(Handle::Source),
			self.node_box(target).handle(Handle::Target),
		))
	}
}

fn control_offset(distance: f64) -> f64 {
	if distance >= 0.0 {
		0.5 * distance
	} else {
		EDGE_CURVATURE * 25.0 * (-distance).sqrt()
	}
}

/// Control points of a bezier leaving `s` downwards and entering `t` from above.
pub fn bezier_controls(s: Position, t: Position) -> (Position, Position) {
	let offset = control_offset(t.y - s.y);
	(
		Position::new(s.x, s.y + offset),
		Position::new(t.x, t.y - offset),
	)
}

fn bezier_point(s: Position, c1: Position, c2: Position, t: Position, u: f64) -> Position {
	let v = 1.0 - u;
	let (a, b, c, d) = (v * v * v, 3.0 * v * v * u, 3.0 * v * u * u, u * u * u);
	Position::new(
		a * s.x + b * c1.x + c * c2.x + d * t.x,
		a * s.y + b * c1.y + c * c2.y + d * t.y,
	)
}

fn distance_to_segment(p: Position, a: Position, b: Position) -> f64 {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let len_sq = dx * dx + dy * dy;
	let u = if len_sq == 0.0 {
		0.0
	} else {
		(((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
	};
	let (cx, cy) = (a.x + u * dx, a.y + u * dy);
	((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_id: Option<String>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: Position,
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
	pub moved: bool,
	/// Edge under the pointer when the press started.
	pub edge: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ConnectState {
	pub node_id: String,
	pub handle: Handle,
	pub cursor: Position,
}

pub struct SchemaCanvasState {
	pub config: CanvasConfig,
	pub transform: ViewTransform,
	pub layout: LayoutCache,
	pub drag: DragState,
	pub pan: PanState,
	pub connect: Option<ConnectState>,
	pub width: f64,
	pub height: f64,
	/// Disables node dragging and connecting.
	pub locked: bool,
	pub needs_fit: bool,
}

impl SchemaCanvasState {
	pub fn new(config: CanvasConfig, width: f64, height: f64) -> Self {
		Self {
			config,
			transform: ViewTransform::default(),
			layout: LayoutCache::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			connect: None,
			width,
			height,
			locked: false,
			needs_fit: true,
		}
	}

	pub fn screen_to_canvas(&self, screen: Position) -> Position {
		self.transform.screen_to_canvas(screen)
	}

	/// Topmost node under the pointer.
	pub fn node_at<'a>(&self, nodes: &'a [SchemaNode], screen: Position) -> Option<&'a SchemaNode> {
		let p = self.screen_to_canvas(screen);
		nodes
			.iter()
			.rev()
			.find(|n| self.layout.node_box(n).contains(p))
	}

	/// Nearest connector within reach of the pointer.
	pub fn handle_at<'a>(
		&self,
		nodes: &'a [SchemaNode],
		screen: Position,
	) -> Option<(&'a SchemaNode, Handle)> {
		let p = self.screen_to_canvas(screen);
		let reach = HANDLE_HIT_RADIUS / self.transform.k;
		let mut best: Option<(f64, &SchemaNode, Handle)> = None;
		for node in nodes {
			let b = self.layout.node_box(node);
			for handle in [Handle::Target, Handle::Source] {
				let h = b.handle(handle);
				let d = ((p.x - h.x).powi(2) + (p.y - h.y).powi(2)).sqrt();
				if d < reach && best.is_none_or(|(bd, _, _)| d < bd) {
					best = Some((d, node, handle));
				}
			}
		}
		best.map(|(_, n, h)| (n, h))
	}

	/// Topmost edge passing near the pointer.
	pub fn edge_at<'a>(
		&self,
		nodes: &[SchemaNode],
		edges: &'a [SchemaEdge],
		screen: Position,
	) -> Option<&'a SchemaEdge> {
		let p = self.screen_to_canvas(screen);
		let reach = EDGE_HIT_DISTANCE / self.transform.k;
		edges.iter().rev().find(|edge| {
			let Some((s, t)) = self.layout.edge_endpoints(nodes, edge) else {
				return false;
			};
			let (c1, c2) = bezier_controls(s, t);
			let mut prev = s;
			(1..=EDGE_SAMPLES).any(|i| {
				let next = bezier_point(s, c1, c2, t, i as f64 / EDGE_SAMPLES as f64);
				let hit = distance_to_segment(p, prev, next) < reach;
				prev = next;
				hit
			})
		})
	}

	pub fn pointer_down(&mut self, shell: &EditorShell, screen: Position) {
		let store = shell.store();
		if !self.locked {
			if let Some((node, handle)) = self.handle_at(store.nodes(), screen) {
				self.connect = Some(ConnectState {
					node_id: node.id.clone(),
					handle,
					cursor: self.screen_to_canvas(screen),
				});
				return;
			}
		}
		if let Some(node) = self.node_at(store.nodes(), screen) {
			self.drag = DragState {
				active: true,
				node_id: Some(node.id.clone()),
				start_x: screen.x,
				start_y: screen.y,
				node_start: node.position,
				moved: false,
			};
			return;
		}
		self.pan = PanState {
			active: true,
			start_x: screen.x,
			start_y: screen.y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
			moved: false,
			edge: self
				.edge_at(store.nodes(), store.edges(), screen)
				.map(|e| e.id.clone()),
		};
	}

	/// Track the pointer; returns the node moves produced by an active drag.
	pub fn pointer_move(&mut self, screen: Position) -> Vec<NodeChange> {
		let cursor = self.screen_to_canvas(screen);
		let tolerance = self.config.click_tolerance;
		if let Some(connect) = self.connect.as_mut() {
			connect.cursor = cursor;
			return Vec::new();
		}

		if self.drag.active {
			let (dx, dy) = (screen.x - self.drag.start_x, screen.y - self.drag.start_y);
			if (dx * dx + dy * dy).sqrt() > tolerance {
				self.drag.moved = true;
			}
			if !self.drag.moved || self.locked {
				return Vec::new();
			}
			let Some(id) = self.drag.node_id.clone() else {
				return Vec::new();
			};
			let k = self.transform.k;
			let position = Position::new(
				self.drag.node_start.x + dx / k,
				self.drag.node_start.y + dy / k,
			);
			return vec![NodeChange::Position {
				id,
				position: Some(position),
				dragging: true,
			}];
		}

		if self.pan.active {
			let (dx, dy) = (screen.x - self.pan.start_x, screen.y - self.pan.start_y);
			if (dx * dx + dy * dy).sqrt() > tolerance {
				self.pan.moved = true;
			}
			self.transform.x = self.pan.transform_start_x + dx;
			self.transform.y = self.pan.transform_start_y + dy;
		}
		Vec::new()
	}

	/// Finish the current gesture: connect, end a drag, or resolve a click.
	pub fn pointer_up(&mut self, shell: &mut EditorShell, screen: Position) {
		if let Some(connect) = self.connect.take() {
			let target = self
				.handle_at(shell.store().nodes(), screen)
				.filter(|&(_, handle)| handle != connect.handle)
				.map(|(node, _)| node.id.clone());
			if let Some(other) = target {
				let connection = match connect.handle {
					Handle::Source => Connection::new(connect.node_id, other),
					Handle::Target => Connection::new(other, connect.node_id),
				};
				shell.connect(connection);
			}
			return;
		}

		if self.drag.active {
			let drag = std::mem::take(&mut self.drag);
			if let Some(id) = drag.node_id {
				if drag.moved && !self.locked {
					shell.apply_node_changes(vec![NodeChange::Position {
						id,
						position: None,
						dragging: false,
					}]);
				} else if !drag.moved {
					select_node(shell, &id);
				}
			}
			return;
		}

		if self.pan.active {
			let pan = std::mem::take(&mut self.pan);
			if pan.moved {
				return;
			}
			match pan.edge {
				Some(edge) => select_edge(shell, &edge),
				None => {
					clear_surface_selection(shell);
					shell.on_pane_click();
				}
			}
		}
	}

	/// Pointer left the canvas mid-gesture.
	pub fn cancel(&mut self) {
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.connect = None;
	}

	/// Removal deltas for every surface-selected node and edge.
	pub fn deletion_changes(&self, shell: &EditorShell) -> (Vec<NodeChange>, Vec<EdgeChange>) {
		let store = shell.store();
		let nodes = store
			.nodes()
			.iter()
			.filter(|n| n.selected)
			.map(|n| NodeChange::Remove { id: n.id.clone() })
			.collect();
		let edges = store
			.edges()
			.iter()
			.filter(|e| e.selected)
			.map(|e| EdgeChange::Remove { id: e.id.clone() })
			.collect();
		(nodes, edges)
	}

	pub fn zoom_at(&mut self, screen: Position, factor: f64) {
		let (min, max) = (self.config.min_zoom, self.config.max_zoom);
		self.transform.zoom_at(screen, factor, min, max);
	}

	/// Zoom about the middle of the viewport.
	pub fn zoom_by(&mut self, factor: f64) {
		let center = Position::new(self.width / 2.0, self.height / 2.0);
		self.zoom_at(center, factor);
	}

	/// Centre every node in the viewport at the largest allowed zoom.
	pub fn fit_view(&mut self, nodes: &[SchemaNode]) {
		self.needs_fit = false;
		let Some(b) = self.layout.bounds(nodes) else {
			return;
		};
		let pad = 1.0 + self.config.fit_padding;
		let k = (self.width / (b.w * pad))
			.min(self.height / (b.h * pad))
			.clamp(self.config.min_zoom, self.config.max_zoom);
		self.transform = ViewTransform {
			x: self.width / 2.0 - (b.x + b.w / 2.0) * k,
			y: self.height / 2.0 - (b.y + b.h / 2.0) * k,
			k,
		};
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn select_node(shell: &mut EditorShell, id: &str) {
	let store = shell.store();
	let node_changes = store
		.nodes()
		.iter()
		.filter(|n| n.selected != (n.id == id))
		.map(|n| NodeChange::Select {
			id: n.id.clone(),
			selected: n.id == id,
		})
		.collect();
	let edge_changes = deselect_edges(store.edges(), None);
	shell.apply_node_changes(node_changes);
	shell.apply_edge_changes(edge_changes);
	shell.on_node_click(id);
}

fn select_edge(shell: &mut EditorShell, id: &str) {
	let store = shell.store();
	let node_changes = deselect_nodes(store.nodes());
	let mut edge_changes = deselect_edges(store.edges(), Some(id));
	if store.edges().iter().any(|e| e.id == id && !e.selected) {
		edge_changes.push(EdgeChange::Select {
			id: id.to_string(),
			selected: true,
		});
	}
	shell.apply_node_changes(node_changes);
	shell.apply_edge_changes(edge_changes);
}

fn clear_surface_selection(shell: &mut EditorShell) {
	let store = shell.store();
	let node_changes = deselect_nodes(store.nodes());
	let edge_changes = deselect_edges(store.edges(), None);
	shell.apply_node_changes(node_changes);
	shell.apply_edge_changes(edge_changes);
}

fn deselect_nodes(nodes: &[SchemaNode]) -> Vec<NodeChange> {
	nodes
		.iter()
		.filter(|n| n.selected)
		.map(|n| NodeChange::Select {
			id: n.id.clone(),
			selected: false,
		})
		.collect()
}

fn deselect_edges(edges: &[SchemaEdge], keep: Option<&str>) -> Vec<EdgeChange> {
	edges
		.iter()
		.filter(|e| e.selected && Some(e.id.as_str()) != keep)
		.map(|e| EdgeChange::Select {
			id: e.id.clone(),
			selected: false,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn surface() -> SchemaCanvasState {
		SchemaCanvasState::new(CanvasConfig::default(), 800.0, 600.0)
	}

	/// Seeded "Person" plus an empty node "2" placed below it.
	fn two_nodes() -> EditorShell {
		let mut shell = EditorShell::seeded();
		shell.apply_node_changes(vec![NodeChange::Add(SchemaNode::new(
			"2",
			Position::new(250.0, 400.0),
			NodeData::default(),
		))]);
		shell
	}

	fn click(state: &mut SchemaCanvasState, shell: &mut EditorShell, at: Position) {
		state.pointer_down(shell, at);
		state.pointer_up(shell, at);
	}

	#[test]
	fn screen_and_canvas_round_trip() {
		let t = ViewTransform {
			x: 40.0,
			y: -10.0,
			k: 2.0,
		};
		let p = Position::new(100.0, 100.0);
		assert_eq!(t.screen_to_canvas(p), Position::new(30.0, 55.0));
		assert_eq!(t.canvas_to_screen(t.screen_to_canvas(p)), p);
		assert_eq!(ViewTransform::default().screen_to_canvas(p), p);
	}

	#[test]
	fn zoom_keeps_point_under_cursor() {
		let mut t = ViewTransform::default();
		let cursor = Position::new(200.0, 150.0);
		let before = t.screen_to_canvas(cursor);
		t.zoom_at(cursor, 1.5, 0.5, 2.0);
		assert_eq!(t.k, 1.5);
		let after = t.screen_to_canvas(cursor);
		assert!((before.x - after.x).abs() < 1e-9);
		assert!((before.y - after.y).abs() < 1e-9);
		t.zoom_at(cursor, 10.0, 0.5, 2.0);
		assert_eq!(t.k, 2.0);
	}

	#[test]
	fn node_height_counts_fields_or_placeholder() {
		let shell = EditorShell::seeded();
		let person = &shell.store().nodes()[0].data;
		assert_eq!(node_height(person), HEADER_HEIGHT + 2.0 * BODY_PADDING + 3.0 * ROW_HEIGHT);
		assert_eq!(
			node_height(&NodeData::default()),
			HEADER_HEIGHT + 2.0 * BODY_PADDING + ROW_HEIGHT
		);
	}

	#[test]
	fn layout_cache_remeasures_only_changed_nodes() {
		let mut shell = two_nodes();
		let mut cache = LayoutCache::default();
		assert_eq!(cache.refresh(shell.store().nodes(), |_| 200.0), 2);
		assert_eq!(cache.refresh(shell.store().nodes(), |_| 200.0), 0);

		shell.on_node_click("1");
		shell.on_name_change("Customer");
		let mut seen = Vec::new();
		let measured = cache.refresh(shell.store().nodes(), |data| {
			seen.push(data.label.clone());
			90.0
		});
		assert_eq!(measured, 1);
		assert_eq!(seen, ["Customer"]);
		// narrower than the minimum
		assert_eq!(cache.node_box(&shell.store().nodes()[0]).w, NODE_MIN_WIDTH);
		assert_eq!(cache.node_box(&shell.store().nodes()[1]).w, 200.0);
	}

	#[test]
	fn fit_view_centres_content() {
		let shell = EditorShell::seeded();
		let mut state = surface();
		state.fit_view(shell.store().nodes());
		assert!(!state.needs_fit);
		assert_eq!(state.transform.k, 2.0);
		let b = state.layout.bounds(shell.store().nodes()).unwrap();
		let centre = state
			.transform
			.canvas_to_screen(Position::new(b.x + b.w / 2.0, b.y + b.h / 2.0));
		assert!((centre.x - 400.0).abs() < 1e-9);
		assert!((centre.y - 300.0).abs() < 1e-9);
	}

	#[test]
	fn click_on_node_selects_it() {
		let mut shell = two_nodes();
		let mut state = surface();
		click(&mut state, &mut shell, Position::new(300.0, 150.0));
		assert_eq!(shell.selection(), Some("1"));
		assert!(shell.store().node("1").unwrap().selected);
		assert!(!shell.store().node("2").unwrap().selected);

		click(&mut state, &mut shell, Position::new(300.0, 450.0));
		assert_eq!(shell.selection(), Some("2"));
		assert!(!shell.store().node("1").unwrap().selected);
	}

	#[test]
	fn pane_click_clears_selection() {
		let mut shell = two_nodes();
		let mut state = surface();
		click(&mut state, &mut shell, Position::new(300.0, 150.0));
		click(&mut state, &mut shell, Position::new(10.0, 10.0));
		assert_eq!(shell.selection(), None);
		assert!(shell.store().nodes().iter().all(|n| !n.selected));
	}

	#[test]
	fn dragging_moves_without_selecting() {
		let mut shell = two_nodes();
		let mut state = surface();
		state.pointer_down(&shell, Position::new(300.0, 150.0));
		let changes = state.pointer_move(Position::new(350.0, 170.0));
		assert_eq!(
			changes,
			vec![NodeChange::Position {
				id: "1".into(),
				position: Some(Position::new(300.0, 120.0)),
				dragging: true,
			}]
		);
		shell.apply_node_changes(changes);
		state.pointer_up(&mut shell, Position::new(350.0, 170.0));
		assert_eq!(shell.store().node("1").unwrap().position, Position::new(300.0, 120.0));
		assert_eq!(shell.selection(), None);
	}

	#[test]
	fn locked_surface_does_not_move_nodes() {
		let mut shell = two_nodes();
		let mut state = surface();
		state.locked = true;
		state.pointer_down(&shell, Position::new(300.0, 150.0));
		assert!(state.pointer_move(Position::new(400.0, 250.0)).is_empty());
		state.pointer_up(&mut shell, Position::new(400.0, 250.0));
		assert_eq!(shell.store().node("1").unwrap().position, Position::new(250.0, 100.0));
	}

	#[test]
	fn pan_moves_view_not_selection() {
		let mut shell = two_nodes();
		shell.on_node_click("1");
		let mut state = surface();
		state.pointer_down(&shell, Position::new(10.0, 10.0));
		state.pointer_move(Position::new(60.0, 30.0));
		state.pointer_up(&mut shell, Position::new(60.0, 30.0));
		assert_eq!(state.transform.x, 50.0);
		assert_eq!(state.transform.y, 20.0);
		assert_eq!(shell.selection(), Some("1"));
	}

	#[test]
	fn handle_drag_connects_source_to_target() {
		let mut shell = two_nodes();
		let mut state = surface();
		let bottom_of_person = Position::new(330.0, 206.0);
		let top_of_second = Position::new(331.0, 401.0);

		state.pointer_down(&shell, bottom_of_person);
		state.pointer_move(Position::new(330.0, 300.0));
		assert!(state.connect.is_some());
		state.pointer_up(&mut shell, top_of_second);

		// reverse direction is normalised
		state.pointer_down(&shell, top_of_second);
		state.pointer_up(&mut shell, bottom_of_person);

		let edges = shell.store().edges();
		assert_eq!(edges.len(), 2);
		for edge in edges {
			assert_eq!((edge.source.as_str(), edge.target.as_str()), ("1", "2"));
		}
	}

	#[test]
	fn connect_released_on_nothing_adds_no_edge() {
		let mut shell = two_nodes();
		let mut state = surface();
		state.pointer_down(&shell, Position::new(330.0, 206.0));
		state.pointer_up(&mut shell, Position::new(700.0, 300.0));
		assert!(shell.store().edges().is_empty());
		assert!(state.connect.is_none());
	}

	#[test]
	fn click_on_edge_selects_it_and_delete_removes_it() {
		let mut shell = two_nodes();
		shell.connect(Connection::new("1", "2"));
		let mut state = surface();

		click(&mut state, &mut shell, Position::new(330.0, 300.0));
		assert!(shell.store().edges()[0].selected);

		let (nodes, edges) = state.deletion_changes(&shell);
		assert!(nodes.is_empty());
		shell.apply_edge_changes(edges);
		assert!(shell.store().edges().is_empty());
	}

	#[test]
	fn deleting_selected_node_leaves_no_selection() {
		let mut shell = two_nodes();
		let mut state = surface();
		click(&mut state, &mut shell, Position::new(300.0, 150.0));
		let (nodes, edges) = state.deletion_changes(&shell);
		shell.apply_node_changes(nodes);
		shell.apply_edge_changes(edges);
		assert!(shell.store().node("1").is_none());
		assert!(shell.selected_node().is_none());
	}
}
