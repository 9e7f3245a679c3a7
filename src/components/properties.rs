use leptos::prelude::*;

use crate::editor::{EditorShell, Field};

/// Side panel editing the selected node's label.
#[component]
pub fn PropertiesPanel(shell: RwSignal<EditorShell>) -> impl IntoView {
	// Split so typing into the input does not rebuild (and unfocus) it.
	let selected_id = Memo::new(move |_| {
		shell.with(|s| s.selected_node().map(|n| n.id.clone()))
	});
	let label = Memo::new(move |_| {
		shell.with(|s| {
			s.selected_node()
				.map(|n| n.data.label.clone())
				.unwrap_or_default()
		})
	});
	let fields = Memo::new(move |_| {
		shell.with(|s| {
			s.selected_node()
				.map(|n| n.data.fields.clone())
				.unwrap_or_default()
		})
	});

	let on_input = move |ev: web_sys::Event| {
		let value = event_target_value(&ev);
		shell.update(|s| s.on_name_change(&value));
	};

	view! {
		<aside class="properties">
			<h3>"Properties"</h3>
			<Show
				when=move || selected_id.get().is_some()
				fallback=|| view! { <p class="placeholder">"Select a node to edit its properties"</p> }
			>
				<label class="field-label">
					"Name"
					<input type="text" prop:value=move || label.get() on:input=on_input />
				</label>
				<p class="node-id">"Id: " {move || selected_id.get().unwrap_or_default()}</p>
				<h4>"Fields"</h4>
				{move || {
					let fields: Vec<Field> = fields.get();
					if fields.is_empty() {
						view! { <p class="field-empty">"No properties"</p> }.into_any()
					} else {
						view! {
							<ul class="field-list">
								{fields
									.into_iter()
									.map(|f| view! {
										<li>
											<span class="field-type">{f.kind}</span>
											" "
											<span class="field-name">{f.name}</span>
										</li>
									})
									.collect_view()}
							</ul>
						}
						.into_any()
					}
				}}
			</Show>
		</aside>
	}
}
