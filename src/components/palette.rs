use leptos::prelude::*;
use web_sys::DragEvent;

use crate::editor::{EditorShell, PaletteItem};

/// Sidebar of draggable declaration templates.
#[component]
pub fn Palette() -> impl IntoView {
	view! {
		<aside class="sidebar">
			<h3>"Concerto Editor"</h3>
			<p class="hint">"Drag these to the canvas:"</p>
			{PaletteItem::ALL
				.into_iter()
				.map(|item| {
					let on_dragstart = move |ev: DragEvent| {
						if let Some(transfer) = ev.data_transfer() {
							EditorShell::on_drag_start(&transfer, item);
						}
					};
					view! {
						<div class="dndnode" draggable="true" on:dragstart=on_dragstart>
							{item.as_str()}
						</div>
					}
				})
				.collect_view()}
		</aside>
	}
}
