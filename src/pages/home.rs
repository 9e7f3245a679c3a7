use leptos::prelude::*;

use crate::components::palette::Palette;
use crate::components::properties::PropertiesPanel;
use crate::components::schema_canvas::{CanvasConfig, SchemaCanvas};
use crate::editor::EditorShell;

/// Editor page: palette, canvas and properties side by side.
#[component]
pub fn Home() -> impl IntoView {
	let shell = RwSignal::new(EditorShell::seeded());

	view! {
		<div class="editor-layout">
			<Palette />
			<main class="canvas-area">
				<SchemaCanvas shell=shell config=CanvasConfig::default() />
			</main>
			<PropertiesPanel shell=shell />
		</div>
	}
}
