//! Graph state and the editor handlers that mutate it.
//!
//! Nothing in here touches the browser: the canvas surface feeds events in
//! through [`EditorShell`] and reads the graph back out of [`GraphStore`].

mod palette;
mod shell;
mod store;
mod types;

pub use palette::{PaletteItem, TRANSFER_KEY, UnknownPaletteItem};
pub use shell::{EditorShell, ScreenToCanvas, TransferChannel};
pub use store::{GraphStore, IdAllocator};
pub use types::{
	Connection, EdgeChange, Field, NODE_KIND, NodeChange, NodeData, Position, SchemaEdge,
	SchemaNode,
};
