//! Event handlers that turn pointer and form input into store mutations.

use log::{debug, info};

use super::palette::{PaletteItem, TRANSFER_KEY};
use super::store::GraphStore;
use super::types::{Connection, EdgeChange, NodeChange, NodeData, Position, SchemaNode};

/// Platform drag-transfer channel (the browser `DataTransfer`, or a fake in tests).
pub trait TransferChannel {
	/// Stash `value` under `key`.
	fn set_payload(&self, key: &str, value: &str);
	/// Read the value stashed under `key`, if any.
	fn payload(&self, key: &str) -> Option<String>;
	/// Declare which effects the drag source allows.
	fn set_effect_allowed(&self, effect: &str);
	/// Declare the effect the drop target will perform.
	fn set_drop_effect(&self, effect: &str);
}

/// Screen-to-canvas coordinate transform exposed by the canvas surface.
pub trait ScreenToCanvas {
	/// Map a point relative to the canvas element into canvas space.
	fn screen_to_canvas(&self, screen: Position) -> Position;
}

/// Graph state plus the single-valued selection shown in the properties panel.
#[derive(Clone, Debug, Default)]
pub struct EditorShell {
	store: GraphStore,
	selection: Option<String>,
}

impl EditorShell {
	/// Wrap an existing store with nothing selected.
	pub fn new(store: GraphStore) -> Self {
		Self {
			store,
			selection: None,
		}
	}

	/// Shell over the starter diagram.
	pub fn seeded() -> Self {
		Self::new(GraphStore::seeded())
	}

	/// Read access to the graph.
	pub fn store(&self) -> &GraphStore {
		&self.store
	}

	/// Raw selected id. May name a node that has since been removed.
	pub fn selection(&self) -> Option<&str> {
		self.selection.as_deref()
	}

	/// The selected node, resolved against the current node sequence.
	pub fn selected_node(&self) -> Option<&SchemaNode> {
		self.selection.as_deref().and_then(|id| self.store.node(id))
	}

	/// Palette item picked up: stash its type for the drop target.
	pub fn on_drag_start(transfer: &impl TransferChannel, item: PaletteItem) {
		transfer.set_payload(TRANSFER_KEY, item.as_str());
		transfer.set_effect_allowed("move");
	}

	/// Drag hovering the canvas. The caller must also cancel the event's default action.
	pub fn on_drag_over(transfer: &impl TransferChannel) {
		transfer.set_drop_effect("move");
	}

	/// Palette item released over the canvas at `screen`. Returns the new node id.
	pub fn on_drop(
		&mut self,
		transfer: &impl TransferChannel,
		screen: Position,
		transform: &impl ScreenToCanvas,
	) -> Option<String> {
		let payload = transfer.payload(TRANSFER_KEY)?;
		let item = match payload.parse::<PaletteItem>() {
			Ok(item) => item,
			Err(err) => {
				debug!("ignoring drop: {err}");
				return None;
			}
		};

		let position = transform.screen_to_canvas(screen);
		let id = self.store.next_node_id();
		let node = SchemaNode::new(
			id.clone(),
			position,
			NodeData {
				label: item.default_label(),
				fields: Vec::new(),
			},
		);
		self.store.update_nodes(|nodes| {
			let mut next = nodes.to_vec();
			next.push(node);
			next
		});
		info!("created {item} node {id} at ({:.1}, {:.1})", position.x, position.y);
		self.select(Some(id.clone()));
		Some(id)
	}

	/// Node clicked: it becomes the selection, replacing any previous one.
	pub fn on_node_click(&mut self, id: &str) {
		self.select(Some(id.to_string()));
	}

	/// Empty canvas clicked.
	pub fn on_pane_click(&mut self) {
		self.select(None);
	}

	/// Label input changed. No-op while nothing (or a removed node) is selected.
	pub fn on_name_change(&mut self, value: &str) {
		let Some(id) = self.selection.as_deref() else {
			return;
		};
		self.store
			.patch_node_data(id, |data| data.label = value.to_string());
	}

	/// Connect gesture completed.
	pub fn connect(&mut self, connection: Connection) -> String {
		self.store.connect(connection)
	}

	/// Forward surface-produced node deltas.
	pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) {
		self.store.apply_node_changes(changes);
	}

	/// Forward surface-produced edge deltas.
	pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) {
		self.store.apply_edge_changes(changes);
	}

	fn select(&mut self, id: Option<String>) {
		if self.selection != id {
			debug!("selection {:?} -> {:?}", self.selection, id);
		}
		self.selection = id;
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use super::*;

	#[derive(Default)]
	struct FakeTransfer {
		data: RefCell<HashMap<String, String>>,
		effect_allowed: RefCell<String>,
		drop_effect: RefCell<String>,
	}

	impl TransferChannel for FakeTransfer {
		fn set_payload(&self, key: &str, value: &str) {
			self.data.borrow_mut().insert(key.into(), value.into());
		}

		fn payload(&self, key: &str) -> Option<String> {
			self.data.borrow().get(key).cloned()
		}

		fn set_effect_allowed(&self, effect: &str) {
			*self.effect_allowed.borrow_mut() = effect.into();
		}

		fn set_drop_effect(&self, effect: &str) {
			*self.drop_effect.borrow_mut() = effect.into();
		}
	}

	struct Offset(f64, f64);

	impl ScreenToCanvas for Offset {
		fn screen_to_canvas(&self, screen: Position) -> Position {
			Position::new(screen.x - self.0, screen.y - self.1)
		}
	}

	fn dragged(item: PaletteItem) -> FakeTransfer {
		let transfer = FakeTransfer::default();
		EditorShell::on_drag_start(&transfer, item);
		transfer
	}

	#[test]
	fn drag_start_and_over_set_move_effects() {
		let transfer = dragged(PaletteItem::Enum);
		EditorShell::on_drag_over(&transfer);
		assert_eq!(transfer.payload(TRANSFER_KEY).as_deref(), Some("Enum"));
		assert_eq!(*transfer.effect_allowed.borrow(), "move");
		assert_eq!(*transfer.drop_effect.borrow(), "move");
	}

	#[test]
	fn drop_creates_and_selects_node_in_canvas_space() {
		let mut shell = EditorShell::seeded();
		let id = shell
			.on_drop(
				&dragged(PaletteItem::Concept),
				Position::new(300.0, 200.0),
				&Offset(100.0, 50.0),
			)
			.unwrap();
		assert_eq!(id, "2");
		let node = shell.store().node(&id).unwrap();
		assert_eq!(node.position, Position::new(200.0, 150.0));
		assert_eq!(node.data.label, "New Concept");
		assert!(node.data.fields.is_empty());
		assert_eq!(shell.selection(), Some("2"));
	}

	#[test]
	fn drop_without_payload_is_a_no_op() {
		let mut shell = EditorShell::seeded();
		let created = shell.on_drop(
			&FakeTransfer::default(),
			Position::default(),
			&Offset(0.0, 0.0),
		);
		assert!(created.is_none());
		assert_eq!(shell.store().nodes().len(), 1);
		assert_eq!(shell.store().peek_node_id(), "2");
		assert_eq!(shell.selection(), None);
	}

	#[test]
	fn drop_with_foreign_payload_is_a_no_op() {
		let mut shell = EditorShell::seeded();
		let transfer = FakeTransfer::default();
		transfer.set_payload(TRANSFER_KEY, "");
		assert!(shell.on_drop(&transfer, Position::default(), &Offset(0.0, 0.0)).is_none());
		transfer.set_payload(TRANSFER_KEY, "Widget");
		assert!(shell.on_drop(&transfer, Position::default(), &Offset(0.0, 0.0)).is_none());
		assert_eq!(shell.store().nodes().len(), 1);
	}

	#[test]
	fn click_then_pane_click_toggles_selection() {
		let mut shell = EditorShell::seeded();
		shell.on_node_click("1");
		assert_eq!(shell.selection(), Some("1"));
		shell.on_node_click("1");
		assert_eq!(shell.selection(), Some("1"));
		shell.on_pane_click();
		assert_eq!(shell.selection(), None);
		shell.on_pane_click();
		assert_eq!(shell.selection(), None);
	}

	#[test]
	fn name_change_without_selection_does_nothing() {
		let mut shell = EditorShell::seeded();
		let revision = shell.store().revision();
		shell.on_name_change("Customer");
		assert_eq!(shell.store().node("1").unwrap().data.label, "Person");
		assert_eq!(shell.store().revision(), revision);
	}

	#[test]
	fn removed_selection_resolves_to_none() {
		let mut shell = EditorShell::seeded();
		shell.on_node_click("1");
		shell.apply_node_changes(vec![NodeChange::Remove { id: "1".into() }]);
		assert_eq!(shell.selection(), Some("1"));
		assert!(shell.selected_node().is_none());

		shell.on_name_change("Ghost");
		assert!(shell.store().nodes().is_empty());
	}
}
