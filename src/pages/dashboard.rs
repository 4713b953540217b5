//! Dashboard page: the same graph driven by buttons and an edge selector.
//!
//! State lives in session storage, not in the page. Every control issues one
//! [`DashboardAction`] through [`handle_request`] and re-renders from the
//! returned state.

use leptos::prelude::*;
use log::error;
use web_sys::HtmlCanvasElement;

use super::home::config_from_query;
use crate::components::graph_canvas::{Frame, ViewTransform, context_2d, info_lines, render};
use crate::config::{MAX_VERTICES, MIN_VERTICES};
use crate::session::{BrowserSessionStore, DashboardAction, DashboardState, handle_request};

const CANVAS_SIZE: u32 = 600;

fn graph_title(state: &DashboardState) -> &'static str {
	let n = state.model.vertex_count();
	if state.model.edge_count() == n * n.saturating_sub(1) / 2 {
		"Complete"
	} else {
		"Custom"
	}
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
	let config = StoredValue::new(config_from_query());
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (state, set_state) = signal(None::<DashboardState>);
	let (selected, set_selected) = signal(0usize);
	let (failure, set_failure) = signal(None::<String>);

	let dispatch = move |action: DashboardAction| {
		let result = config.with_value(|config| {
			BrowserSessionStore::open().and_then(|store| handle_request(&store, config, action))
		});
		match result {
			Ok(next) => {
				let edges = next.model.edge_count();
				if selected.get_untracked() >= edges {
					set_selected.set(0);
				}
				set_state.set(Some(next));
				set_failure.set(None);
			}
			Err(err) => {
				error!("Dashboard action {:?} failed: {}", action, err);
				set_failure.set(Some(err.to_string()));
			}
		}
	};

	Effect::new(move |_| dispatch(DashboardAction::Load));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		state.with(|current| {
			let Some(current) = current else {
				return;
			};
			let ctx = match context_2d(&canvas) {
				Ok(ctx) => ctx,
				Err(err) => {
					error!("{}", err);
					return;
				}
			};
			let (w, h) = (canvas.width() as f64, canvas.height() as f64);
			let transform = ViewTransform::fit(w, h);
			config.with_value(|config| {
				let frame = Frame {
					model: &current.model,
					palette: &config.palette,
					transform: &transform,
					width: w,
					height: h,
					focus: None,
					info: info_lines(&current.model, graph_title(current), &[]),
				};
				render(&frame, &ctx);
			});
		});
	});

	let vertex_count = move || {
		state.with(|s| {
			s.as_ref()
				.map(|s| s.vertex_count.get())
				.unwrap_or(MIN_VERTICES)
		})
	};
	let labels = move || {
		state.with(|s| s.as_ref().map(DashboardState::edge_labels).unwrap_or_default())
	};

	view! {
		<div class="dashboard-page">
			<h1>"Interactive Graph Visualization for Ramsey Theory"</h1>
			<div class="dashboard-content">
				<aside class="dashboard-sidebar">
					<h2>"Controls"</h2>
					<label>
						"Number of Vertices "
						<input
							type="range"
							min=MIN_VERTICES.to_string()
							max=MAX_VERTICES.to_string()
							step="1"
							prop:value=move || vertex_count().to_string()
							on:change=move |ev| {
								if let Ok(n) = event_target_value(&ev).parse::<usize>() {
									dispatch(DashboardAction::SetVertexCount(n));
								}
							}
						/>
						<span>{vertex_count}</span>
					</label>
					<div class="button-row">
						<button on:click=move |_| dispatch(DashboardAction::Generate)>
							"Generate Graph"
						</button>
						<button on:click=move |_| dispatch(DashboardAction::Clear)>"Clear"</button>
					</div>
					<h3>"Instructions:"</h3>
					<ul>
						<li>"Use the slider to set the number of vertices"</li>
						<li>"Generate a new graph configuration with random edge colors"</li>
						<li>"Select edges to change their color or toggle bold appearance"</li>
						<li>"Clear the graph to start fresh"</li>
					</ul>
					<p><a href="/">"Back to the editor"</a></p>
				</aside>
				<div class="graph-container">
					<canvas
						node_ref=canvas_ref
						width=CANVAS_SIZE.to_string()
						height=CANVAS_SIZE.to_string()
					/>
					<h2>"Edge Interactions"</h2>
					<Show
						when=move || !labels().is_empty()
						fallback=|| view! { <p>"No edges to modify."</p> }
					>
						<p>"Select an edge to modify:"</p>
						<select on:change=move |ev| {
							set_selected.set(event_target_value(&ev).parse().unwrap_or(0))
						}>
							{move || {
								labels()
									.into_iter()
									.enumerate()
									.map(|(i, label)| {
										view! {
											<option value=i.to_string() selected=move || selected.get() == i>
												{label}
											</option>
										}
									})
									.collect_view()
							}}
						</select>
						<div class="button-row">
							<button on:click=move |_| {
								dispatch(DashboardAction::ChangeColor(selected.get_untracked()))
							}>"Change Color"</button>
							<button on:click=move |_| {
								dispatch(DashboardAction::ToggleBold(selected.get_untracked()))
							}>"Toggle Bold"</button>
						</div>
					</Show>
					{move || failure.get().map(|msg| view! { <p class="error">{msg}</p> })}
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::graph_canvas::GraphModel;
	use crate::config::VertexCount;

	#[test]
	fn test_graph_title() {
		let mut model = GraphModel::default();
		model.reset_with_rng(4, &mut StdRng::seed_from_u64(3));
		let mut state = DashboardState {
			vertex_count: VertexCount::clamped(4),
			model,
		};
		assert_eq!(graph_title(&state), "Complete");
		state.model.remove_edge(0, 1);
		assert_eq!(graph_title(&state), "Custom");
	}
}
