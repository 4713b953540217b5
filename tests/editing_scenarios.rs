#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(unsafe_code)]

use ramsey_graph_canvas::components::graph_canvas::{
	EdgeStyle, EditMode, Gesture, GraphModel, InputEvent, InteractionController, InteractionState,
	Modifier, PointerButton, Position,
};
use ramsey_graph_canvas::config::EditorConfig;
use ramsey_graph_canvas::session::{DashboardAction, MemorySessionStore, handle_request};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run(
	controller: &InteractionController,
	model: &mut GraphModel,
	mut state: InteractionState,
	events: &[InputEvent],
) -> InteractionState {
	for &event in events {
		state = controller.handle(model, state, event).state;
	}
	state
}

fn click_vertex(model: &GraphModel, id: usize) -> InputEvent {
	InputEvent::PointerDown {
		button: PointerButton::Primary,
		at: model.position(id),
	}
}

#[test]
fn test_color_cycles_back_after_two_steps() {
	let mut model = GraphModel::default();
	model.reset_with_rng(5, &mut StdRng::seed_from_u64(11));
	let original = model.edge_style(0, 1);

	assert!(model.cycle_edge_color(0, 1));
	assert_ne!(model.edge_style(0, 1), original);
	assert!(model.cycle_edge_color(0, 1));
	assert_eq!(model.edge_style(0, 1), original);
}

#[test]
fn test_duplicate_edge_is_ignored() {
	let mut model = GraphModel::default();
	model.clear(4);
	assert!(model.add_edge(0, 1));
	assert!(!model.add_edge(0, 1));
	assert!(!model.add_edge(1, 0));
	assert_eq!(model.edge_count(), 1);
}

#[test]
fn test_chord_connect_twice_adds_one_edge() {
	let controller = InteractionController::default();
	let mut model = GraphModel::default();
	model.clear(5);
	let clicks = [click_vertex(&model, 2), click_vertex(&model, 4)];

	let mut state = run(
		&controller,
		&mut model,
		InteractionState::default(),
		&[InputEvent::KeyDown(Modifier::Connect)],
	);
	state = run(&controller, &mut model, state, &clicks);
	assert!(model.has_edge(2, 4));
	assert_eq!(
		model.edge_style(2, 4),
		EdgeStyle {
			color: Some(0),
			width: model.widths().normal,
		}
	);
	assert_eq!(state.gesture, Gesture::Idle);

	run(&controller, &mut model, state, &clicks);
	assert_eq!(model.edge_count(), 1);
}

#[test]
fn test_draw_mode_anchor_then_connect() {
	let controller = InteractionController {
		mode: EditMode::Draw,
		..InteractionController::default()
	};
	let mut model = GraphModel::default();
	model.clear(3);
	let events = [click_vertex(&model, 0), click_vertex(&model, 2)];
	let state = run(&controller, &mut model, InteractionState::default(), &events);
	assert!(model.has_edge(0, 2));
	assert_eq!(state.gesture, Gesture::Idle);
}

#[test]
fn test_controller_built_from_query_settings() {
	let config = EditorConfig::default().with_params([("mode", "direct"), ("n", "5")]);
	let controller = config.controller();
	let mut model = config.new_model();
	model.reset_with_rng(config.vertex_count.get(), &mut StdRng::seed_from_u64(2));
	assert_eq!(model.edge_count(), 10);

	// Shift-click on the middle of the side (0, 1).
	let events = [
		InputEvent::KeyDown(Modifier::Remove),
		InputEvent::PointerDown {
			button: PointerButton::Primary,
			at: model
				.position(0)
				.zip(model.position(1))
				.map(|(a, b)| Position::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)),
		},
	];
	let state = run(&controller, &mut model, InteractionState::default(), &events);
	assert!(state.modifiers.remove);
	assert!(!model.has_edge(0, 1));
	assert_eq!(model.edge_count(), 9);
}

#[test]
fn test_dashboard_round_trip() -> Result<(), String> {
	let store = MemorySessionStore::default();
	let config = EditorConfig::default();
	let first = handle_request(&store, &config, DashboardAction::SetVertexCount(4))
		.map_err(|e| e.to_string())?;
	assert_eq!(first.model.edge_count(), 6);

	handle_request(&store, &config, DashboardAction::Clear).map_err(|e| e.to_string())?;
	let cleared = handle_request(&store, &config, DashboardAction::Load).map_err(|e| e.to_string())?;
	assert_eq!(cleared.model.vertex_count(), 4);
	assert_eq!(cleared.model.edge_count(), 0);
	Ok(())
}
