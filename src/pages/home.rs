//! Live editor page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::graph_canvas::GraphEditorCanvas;
use crate::config::EditorConfig;

/// Builds the editor configuration from the page query string.
pub fn config_from_query() -> EditorConfig {
	let query = use_query_map();
	let pairs: Vec<(&str, String)> = query.with_untracked(|params| {
		EditorConfig::KEYS
			.iter()
			.filter_map(|&key| params.get(key).map(|value| (key, value)))
			.collect()
	});
	EditorConfig::default().with_params(pairs.iter().map(|(k, v)| (*k, v.as_str())))
}

/// Default Home Page: the live editor
#[component]
pub fn Home() -> impl IntoView {
	let config = config_from_query();
	let mode = config.edit_mode;

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphEditorCanvas config=config fullscreen=true />
				<div class="graph-overlay">
					<h1>"Interactive Graph Visualization for Ramsey Theory"</h1>
					<p class="subtitle">
						{format!("Edit mode: {}. ", mode)}
						<a href="/dashboard">"Dashboard"</a>
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
