//! Gesture interpretation: turns pointer and modifier-key events into
//! [`GraphModel`] mutations.
//!
//! The controller itself is stateless configuration. All gesture state lives
//! in an [`InteractionState`] value that the host passes into
//! [`InteractionController::handle`] and stores back from the returned
//! [`Transition`], so the state machine can be driven without a live UI.

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::hit::{edge_at, vertex_at};
use super::model::GraphModel;
use super::types::{EdgeKey, Position, VertexId};
use crate::error::EditorError;

/// Which gesture vocabulary the controller understands. Modes are mutually
/// exclusive; a host picks exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
	/// Two primary clicks on vertices draw an edge; secondary click adds a vertex.
	Draw,
	/// Clicks on edges recolor, toggle width or delete them.
	DirectEdit,
	/// Direct editing plus connect-chord edge creation and move-chord dragging.
	ModifierChord,
}

impl EditMode {
	/// Every mode, in settings order.
	pub const ALL: [EditMode; 3] = [Self::Draw, Self::DirectEdit, Self::ModifierChord];

	/// Name accepted by `FromStr`.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Draw => "draw",
			Self::DirectEdit => "direct",
			Self::ModifierChord => "chord",
		}
	}

	/// Gesture legend of the mode alone; see [`InteractionController::legend`].
	pub const fn legend(self) -> &'static [&'static str] {
		match self {
			Self::Draw => &[
				"Right-click: Add vertex",
				"Left-click vertices: Draw edge",
				"Clear: Reset graph",
			],
			Self::DirectEdit => &[
				"Left-click edge: Change color",
				"Right-click edge: Toggle bold",
				"Shift + Left-click edge: Remove edge",
			],
			Self::ModifierChord => &[
				"Left-click edge: Change color",
				"Right-click edge: Toggle bold",
				"Shift + Left-click: Remove edge",
				"Ctrl/Cmd + Click vertices: Add edge",
				"Alt/Option + Drag vertex: Move vertex",
			],
		}
	}
}

impl fmt::Display for EditMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EditMode {
	type Err = EditorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"draw" => Ok(Self::Draw),
			"direct" | "direct-edit" | "edit" => Ok(Self::DirectEdit),
			"chord" | "modifier-chord" | "full" => Ok(Self::ModifierChord),
			_ => Err(EditorError::InvalidMode(s.to_string())),
		}
	}
}

/// Mouse button of a pointer-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	/// Left button.
	Primary,
	/// Right button.
	Secondary,
	/// Anything else; never edits.
	Other,
}

/// Modifier keys with a meaning to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
	/// Ctrl / Cmd: select two vertices to connect them.
	Connect,
	/// Alt / Option: drag a vertex.
	Move,
	/// Shift: delete the clicked edge.
	Remove,
}

/// Latch of currently held modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
	/// Ctrl / Cmd held.
	pub connect: bool,
	/// Alt / Option held.
	pub move_vertex: bool,
	/// Shift held.
	pub remove: bool,
}

impl Modifiers {
	fn set(&mut self, modifier: Modifier, held: bool) {
		match modifier {
			Modifier::Connect => self.connect = held,
			Modifier::Move => self.move_vertex = held,
			Modifier::Remove => self.remove = held,
		}
	}

	/// Whether any modifier is held.
	pub const fn any(self) -> bool {
		self.connect || self.move_vertex || self.remove
	}
}

/// Gesture progress. `Idle` is initial and follows every finished or
/// canceled gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
	/// No gesture in progress.
	#[default]
	Idle,
	/// Draw mode: first endpoint chosen.
	EdgeAnchored(VertexId),
	/// Chord mode: first endpoint selected with the connect modifier.
	VertexSelected(VertexId),
	/// Chord mode: vertex follows the pointer.
	Dragging(VertexId),
}

impl Gesture {
	/// Vertex the renderer should highlight, if any.
	pub const fn focus(self) -> Option<VertexId> {
		match self {
			Self::Idle => None,
			Self::EdgeAnchored(v) | Self::VertexSelected(v) | Self::Dragging(v) => Some(v),
		}
	}
}

/// Gesture progress plus held modifiers, threaded through [`InteractionController::handle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	/// Gesture in progress.
	pub gesture: Gesture,
	/// Modifier latch.
	pub modifiers: Modifiers,
}

/// Input already mapped to world space. `at` is `None` when the pointer is
/// outside the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
	/// Button pressed.
	PointerDown {
		/// Which button.
		button: PointerButton,
		/// World point.
		at: Option<Position>,
	},
	/// Pointer moved.
	PointerMove {
		/// World point.
		at: Option<Position>,
	},
	/// Button released or pointer left the surface.
	PointerUp {
		/// World point.
		at: Option<Position>,
	},
	/// Modifier pressed.
	KeyDown(Modifier),
	/// Modifier released.
	KeyUp(Modifier),
}

/// What an event did to the model or the visible selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
	/// Nothing changed.
	None,
	/// New vertex.
	VertexAdded(VertexId),
	/// Dragged vertex.
	VertexMoved(VertexId),
	/// New edge.
	EdgeAdded(EdgeKey),
	/// Deleted edge.
	EdgeRemoved(EdgeKey),
	/// Edge moved to its next color.
	EdgeRecolored(EdgeKey),
	/// Edge switched width.
	EdgeWidthToggled(EdgeKey),
	/// Gesture state changed without touching the model.
	GestureChanged,
}

impl Effect {
	/// Whether the host should repaint.
	pub const fn needs_redraw(self) -> bool {
		!matches!(self, Self::None)
	}
}

/// Result of one [`InteractionController::handle`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
	/// State to pass with the next event.
	pub state: InteractionState,
	/// What the event did.
	pub effect: Effect,
}

impl Transition {
	const fn new(state: InteractionState, effect: Effect) -> Self {
		Self { state, effect }
	}
}

/// Maps events to graph mutations for one [`EditMode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionController {
	/// Gesture vocabulary.
	pub mode: EditMode,
	/// World distance under which a click hits a vertex.
	pub vertex_pick_radius: f64,
	/// World distance under which a click hits an edge.
	pub edge_pick_threshold: f64,
	/// Whether a plain click on empty space adds a vertex outside draw mode.
	pub create_vertex_on_empty: bool,
}

impl Default for InteractionController {
	fn default() -> Self {
		Self {
			mode: EditMode::ModifierChord,
			vertex_pick_radius: 0.15,
			edge_pick_threshold: 0.1,
			create_vertex_on_empty: true,
		}
	}
}

impl InteractionController {
	/// Control legend shown in the info panel.
	pub fn legend(&self) -> Vec<&'static str> {
		let mut lines = self.mode.legend().to_vec();
		if self.mode != EditMode::Draw && self.create_vertex_on_empty {
			lines.push("Left-click empty space: Add vertex");
		}
		lines
	}

	/// Processes one event to completion.
	pub fn handle(
		&self,
		model: &mut GraphModel,
		state: InteractionState,
		event: InputEvent,
	) -> Transition {
		match event {
			InputEvent::KeyDown(modifier) => {
				let mut next = state;
				next.modifiers.set(modifier, true);
				Transition::new(next, Effect::None)
			}
			InputEvent::KeyUp(modifier) => self.key_up(state, modifier),
			InputEvent::PointerDown { at: None, .. } => Transition::new(state, Effect::None),
			InputEvent::PointerDown {
				button,
				at: Some(point),
			} => match self.mode {
				EditMode::Draw => self.draw_click(model, state, button, point),
				EditMode::DirectEdit => self.edit_click(model, state, button, point),
				EditMode::ModifierChord => self
					.chord_click(model, state, button, point)
					.unwrap_or_else(|| self.edit_click(model, state, button, point)),
			},
			InputEvent::PointerMove { at } => match (state.gesture, at) {
				(Gesture::Dragging(v), Some(point)) if state.modifiers.move_vertex => {
					if model.move_vertex(v, point) {
						Transition::new(state, Effect::VertexMoved(v))
					} else {
						Transition::new(state, Effect::None)
					}
				}
				_ => Transition::new(state, Effect::None),
			},
			InputEvent::PointerUp { .. } => match state.gesture {
				Gesture::Dragging(_) => Transition::new(
					InteractionState {
						gesture: Gesture::Idle,
						..state
					},
					Effect::GestureChanged,
				),
				_ => Transition::new(state, Effect::None),
			},
		}
	}

	fn key_up(&self, state: InteractionState, modifier: Modifier) -> Transition {
		let mut next = state;
		next.modifiers.set(modifier, false);
		let ends_gesture = matches!(
			(modifier, state.gesture),
			(Modifier::Connect, Gesture::VertexSelected(_)) | (Modifier::Move, Gesture::Dragging(_))
		);
		if ends_gesture {
			next.gesture = Gesture::Idle;
			Transition::new(next, Effect::GestureChanged)
		} else {
			Transition::new(next, Effect::None)
		}
	}

	fn draw_click(
		&self,
		model: &mut GraphModel,
		state: InteractionState,
		// Which button.
		button: PointerButton,
		point: Position,
	) -> Transition {
		match button {
			PointerButton::Secondary => {
				let id = model.add_vertex(point);
				Transition::new(state, Effect::VertexAdded(id))
			}
			PointerButton::Primary => {
				let Some(hit) = vertex_at(model, point, self.vertex_pick_radius) else {
					return Transition::new(state, Effect::None);
				};
				let (gesture, effect) = match state.gesture {
					Gesture::EdgeAnchored(anchor) => {
						(Gesture::Idle, Self::connect(model, anchor, hit))
					}
					_ => (Gesture::EdgeAnchored(hit), Effect::GestureChanged),
				};
				Transition::new(InteractionState { gesture, ..state }, effect)
			}
			PointerButton::Other => Transition::new(state, Effect::None),
		}
	}

	/// Chord gestures. `None` lets the click fall through to edge editing.
	fn chord_click(
		&self,
		model: &mut GraphModel,
		state: InteractionState,
		// Which button.
		button: PointerButton,
		point: Position,
	) -> Option<Transition> {
		if button != PointerButton::Primary {
			return None;
		}
		let modifiers = state.modifiers;
		if !modifiers.move_vertex && !modifiers.connect {
			return None;
		}
		let hit = vertex_at(model, point, self.vertex_pick_radius)?;
		if modifiers.move_vertex {
			debug!("Dragging vertex {}", hit);
			return Some(Transition::new(
				InteractionState {
					gesture: Gesture::Dragging(hit),
					..state
				},
				Effect::GestureChanged,
			));
		}
		let (gesture, effect) = match state.gesture {
			Gesture::VertexSelected(selected) => {
				(Gesture::Idle, Self::connect(model, selected, hit))
			}
			_ => (Gesture::VertexSelected(hit), Effect::GestureChanged),
		};
		Some(Transition::new(InteractionState { gesture, ..state }, effect))
	}

	fn edit_click(
		&self,
		model: &mut GraphModel,
		state: InteractionState,
		// Which button.
		button: PointerButton,
		point: Position,
	) -> Transition {
		let modifiers = state.modifiers;
		if modifiers.connect || modifiers.move_vertex {
			return Transition::new(state, Effect::None);
		}
		if vertex_at(model, point, self.vertex_pick_radius).is_some() {
			return Transition::new(state, Effect::None);
		}
		if let Some(key) = edge_at(model, point, self.edge_pick_threshold) {
			let (u, v) = key.endpoints();
			let effect = match button {
				PointerButton::Primary if modifiers.remove => {
					model.remove_edge(u, v);
					Effect::EdgeRemoved(key)
				}
				PointerButton::Primary => {
					model.cycle_edge_color(u, v);
					Effect::EdgeRecolored(key)
				}
				PointerButton::Secondary => {
					model.toggle_edge_width(u, v);
					Effect::EdgeWidthToggled(key)
				}
				PointerButton::Other => Effect::None,
			};
			if effect.needs_redraw() {
				debug!("{:?}", effect);
			}
			return Transition::new(state, effect);
		}
		let creates_vertex = self.create_vertex_on_empty
			&& button == PointerButton::Primary
			&& !modifiers.any()
			&& state.gesture == Gesture::Idle;
		if creates_vertex {
			let id = model.add_vertex(point);
			Transition::new(state, Effect::VertexAdded(id))
		} else {
			Transition::new(state, Effect::None)
		}
	}

	/// Completes a two-vertex gesture. The same vertex twice cancels.
	fn connect(model: &mut GraphModel, from: VertexId, to: VertexId) -> Effect {
		if from == to {
			return Effect::GestureChanged;
		}
		match EdgeKey::new(from, to) {
			Some(key) if model.add_edge(from, to) => Effect::EdgeAdded(key),
			_ => Effect::GestureChanged,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn controller(mode: EditMode) -> InteractionController {
		InteractionController {
			mode,
			..InteractionController::default()
		}
	}

	fn square() -> GraphModel {
		// Vertices at (1,0), (0,1), (-1,0), (0,-1).
		let mut model = GraphModel::default();
		model.clear(4);
		model
	}

	fn click(button: PointerButton, x: f64, y: f64) -> InputEvent {
		InputEvent::PointerDown {
			button,
			at: Some(Position::new(x, y)),
		}
	}

	fn run(
		controller: &InteractionController,
		model: &mut GraphModel,
		events: &[InputEvent],
	) -> InteractionState {
		events.iter().fold(InteractionState::default(), |state, &event| {
			controller.handle(model, state, event).state
		})
	}

	// ========================================================================
	// Draw mode
	// ========================================================================

	#[test]
	fn test_draw_two_clicks_create_edge() {
		let ctl = controller(EditMode::Draw);
		let mut model = square();
		let state = run(
			&ctl,
			&mut model,
			&[
				click(PointerButton::Primary, 1.0, 0.0),
				click(PointerButton::Primary, -1.0, 0.05),
			],
		);
		assert_eq!(state.gesture, Gesture::Idle);
		assert!(model.has_edge(0, 2));
		assert_eq!(model.edge_style(0, 2).color, Some(0));
	}

	#[test]
	fn test_draw_first_click_anchors() {
		let ctl = controller(EditMode::Draw);
		let mut model = square();
		let t = ctl.handle(
			&mut model,
			InteractionState::default(),
			click(PointerButton::Primary, 0.0, 1.0),
		);
		assert_eq!(t.state.gesture, Gesture::EdgeAnchored(1));
		assert_eq!(t.effect, Effect::GestureChanged);
	}

	#[test]
	fn test_draw_same_vertex_twice_cancels() {
		let ctl = controller(EditMode::Draw);
		let mut model = square();
		let state = run(
			&ctl,
			&mut model,
			&[
				click(PointerButton::Primary, 0.0, 1.0),
				click(PointerButton::Primary, 0.0, 1.0),
			],
		);
		assert_eq!(state.gesture, Gesture::Idle);
		assert_eq!(model.edge_count(), 0);
	}

	#[test]
	fn test_draw_ignores_edge_clicks() {
		let ctl = controller(EditMode::Draw);
		let mut model = square();
		model.add_edge(0, 2);
		let t = ctl.handle(
			&mut model,
			InteractionState::default(),
			click(PointerButton::Primary, 0.0, 0.0),
		);
		assert_eq!(t.effect, Effect::None);
		assert_eq!(model.edge_style(0, 2).color, Some(0));
	}

	#[test]
	fn test_draw_secondary_click_adds_vertex() {
		let ctl = controller(EditMode::Draw);
		let mut model = square();
		let t = ctl.handle(
			&mut model,
			InteractionState::default(),
			click(PointerButton::Secondary, 0.3, 0.3),
		);
		assert_eq!(t.effect, Effect::VertexAdded(4));
		assert_eq!(model.position(4), Some(Position::new(0.3, 0.3)));
	}

	// ========================================================================
	// Direct-edit mode
	// ========================================================================

	#[test]
	fn test_edit_primary_recolors_and_secondary_toggles() {
		let ctl = controller(EditMode::DirectEdit);
		let mut model = square();
		model.add_edge(0, 2);
		run(
			&ctl,
			&mut model,
			&[
				click(PointerButton::Primary, 0.2, 0.02),
				click(PointerButton::Secondary, -0.2, -0.02),
			],
		);
		assert_eq!(model.edge_style(0, 2).color, Some(1));
		assert_eq!(model.edge_style(0, 2).width, 4.0);
	}

	#[test]
	fn test_edit_remove_modifier_wins_over_recolor() {
		let ctl = controller(EditMode::DirectEdit);
		let mut model = square();
		model.add_edge(0, 2);
		let state = run(
			&ctl,
			&mut model,
			&[
				InputEvent::KeyDown(Modifier::Remove),
				click(PointerButton::Primary, 0.2, 0.0),
			],
		);
		assert!(state.modifiers.remove);
		assert!(!model.has_edge(0, 2));
		assert_eq!(model.edge_count(), 0);
	}

	#[test]
	fn test_edit_vertex_click_is_not_an_edge_click() {
		let ctl = controller(EditMode::DirectEdit);
		let mut model = square();
		model.add_edge(0, 2);
		let t = ctl.handle(
			&mut model,
			InteractionState::default(),
			click(PointerButton::Primary, 0.95, 0.0),
		);
		assert_eq!(t.effect, Effect::None);
		assert_eq!(model.edge_style(0, 2).color, Some(0));
	}

	#[test]
	fn test_edit_empty_click_adds_vertex_only_without_modifiers() {
		let ctl = controller(EditMode::DirectEdit);
		let mut model = square();
		let t = ctl.handle(
			&mut model,
			InteractionState::default(),
			click(PointerButton::Primary, 0.5, 0.5),
		);
		assert_eq!(t.effect, Effect::VertexAdded(4));

		let held = InteractionState {
			modifiers: Modifiers {
				remove: true,
				..Modifiers::default()
			},
			..InteractionState::default()
		};
		let t = ctl.handle(&mut model, held, click(PointerButton::Primary, -0.5, 0.5));
		assert_eq!(t.effect, Effect::None);
		assert_eq!(model.vertex_count(), 5);
	}

	#[test]
	fn test_edit_empty_click_without_affordance_is_noop() {
		let ctl = InteractionController {
			create_vertex_on_empty: false,
			..controller(EditMode::DirectEdit)
		};
		let mut model = square();
		let t = ctl.handle(
			&mut model,
			InteractionState::default(),
			click(PointerButton::Primary, 0.5, 0.5),
		);
		assert_eq!(t.effect, Effect::None);
		assert_eq!(model.vertex_count(), 4);
	}

	#[test]
	fn test_click_outside_surface_is_ignored() {
		let ctl = controller(EditMode::DirectEdit);
		let mut model = square();
		let state = InteractionState {
			gesture: Gesture::VertexSelected(1),
			..InteractionState::default()
		};
		let t = ctl.handle(
			&mut model,
			state,
			InputEvent::PointerDown {
				button: PointerButton::Primary,
				at: None,
			},
		);
		assert_eq!(t, Transition::new(state, Effect::None));
		assert_eq!(model.vertex_count(), 4);
	}

	// ========================================================================
	// Modifier-chord mode
	// ========================================================================

	#[test]
	fn test_chord_connects_selected_vertices() {
		let ctl = controller(EditMode::ModifierChord);
		let mut model = square();
		let state = run(
			&ctl,
			&mut model,
			&[
				InputEvent::KeyDown(Modifier::Connect),
				click(PointerButton::Primary, 0.0, 1.0),
			],
		);
		assert_eq!(state.gesture, Gesture::VertexSelected(1));

		let t = ctl.handle(&mut model, state, click(PointerButton::Primary, 0.0, -1.0));
		assert_eq!(t.state.gesture, Gesture::Idle);
		assert_eq!(t.effect, Effect::EdgeAdded(EdgeKey::new(1, 3).unwrap()));
	}

	#[test]
	fn test_chord_release_clears_selection() {
		let ctl = controller(EditMode::ModifierChord);
		let mut model = square();
		let state = run(
			&ctl,
			&mut model,
			&[
				InputEvent::KeyDown(Modifier::Connect),
				click(PointerButton::Primary, 1.0, 0.0),
				InputEvent::KeyUp(Modifier::Connect),
			],
		);
		assert_eq!(state, InteractionState::default());
		assert_eq!(model.edge_count(), 0);
	}

	#[test]
	fn test_chord_drag_moves_vertex() {
		let ctl = controller(EditMode::ModifierChord);
		let mut model = square();
		let state = run(
			&ctl,
			&mut model,
			&[
				InputEvent::KeyDown(Modifier::Move),
				click(PointerButton::Primary, -1.0, 0.0),
				InputEvent::PointerMove {
					at: Some(Position::new(-0.5, 0.2)),
				},
				InputEvent::PointerMove {
					at: Some(Position::new(-0.4, 0.3)),
				},
				InputEvent::PointerUp { at: None },
				InputEvent::PointerMove {
					at: Some(Position::new(0.9, 0.9)),
				},
			],
		);
		assert_eq!(state.gesture, Gesture::Idle);
		assert!(state.modifiers.move_vertex);
		assert_eq!(model.position(2), Some(Position::new(-0.4, 0.3)));
	}

	#[test]
	fn test_chord_releasing_move_ends_drag() {
		let ctl = controller(EditMode::ModifierChord);
		let mut model = square();
		let before = model.position(3);
		let state = run(
			&ctl,
			&mut model,
			&[
				InputEvent::KeyDown(Modifier::Move),
				click(PointerButton::Primary, 0.0, -1.0),
				InputEvent::KeyUp(Modifier::Move),
			],
		);
		assert_eq!(state.gesture, Gesture::Idle);
		let t = ctl.handle(
			&mut model,
			state,
			InputEvent::PointerMove {
				at: Some(Position::new(0.0, 0.0)),
			},
		);
		assert_eq!(t.effect, Effect::None);
		assert_eq!(model.position(3), before);
	}

	#[test]
	fn test_chord_miss_falls_through_to_edge_edit() {
		let ctl = controller(EditMode::ModifierChord);
		let mut model = square();
		model.add_edge(1, 3);
		let state = run(&ctl, &mut model, &[click(PointerButton::Primary, 0.03, 0.4)]);
		assert_eq!(state.gesture, Gesture::Idle);
		assert_eq!(model.edge_style(1, 3).color, Some(1));
	}

	#[test]
	fn test_mode_parsing() {
		assert_eq!("draw".parse::<EditMode>().ok(), Some(EditMode::Draw));
		assert_eq!("Direct".parse::<EditMode>().ok(), Some(EditMode::DirectEdit));
		assert_eq!("chord".parse::<EditMode>().ok(), Some(EditMode::ModifierChord));
		assert!("lasso".parse::<EditMode>().is_err());
		for mode in EditMode::ALL {
			assert_eq!(mode.as_str().parse::<EditMode>().ok(), Some(mode));
		}
	}

	#[test]
	fn test_draw_edge_click_keeps_anchor() {
		let ctl = controller(EditMode::Draw);
		let mut model = square();
		model.add_edge(1, 3);
		let anchored = InteractionState {
			gesture: Gesture::EdgeAnchored(0),
			..InteractionState::default()
		};
		let t = ctl.handle(&mut model, anchored, click(PointerButton::Primary, 0.0, 0.0));
		assert_eq!(t, Transition::new(anchored, Effect::None));
		assert_eq!(model.edge_style(1, 3).color, Some(0));
		assert_eq!(model.edge_style(1, 3).width, 2.0);
	}

	#[test]
	fn test_draw_anchor_survives_connect_release() {
		let ctl = controller(EditMode::Draw);
		let mut model = square();
		let state = run(
			&ctl,
			&mut model,
			&[
				InputEvent::KeyDown(Modifier::Connect),
				click(PointerButton::Primary, -1.0, 0.0),
				InputEvent::KeyUp(Modifier::Connect),
			],
		);
		assert_eq!(state.gesture, Gesture::EdgeAnchored(2));
		assert!(!state.modifiers.connect);
	}

	#[test]
	fn test_chord_same_vertex_twice_clears_selection() {
		let ctl = controller(EditMode::ModifierChord);
		let mut model = square();
		let state = run(
			&ctl,
			&mut model,
			&[
				InputEvent::KeyDown(Modifier::Connect),
				click(PointerButton::Primary, 0.0, 1.0),
				click(PointerButton::Primary, 0.02, 0.98),
			],
		);
		assert_eq!(state.gesture, Gesture::Idle);
		assert!(state.modifiers.connect);
		assert_eq!(model.edge_count(), 0);
	}

	#[test]
	fn test_legend_follows_vertex_affordance() {
		let add_line = "Left-click empty space: Add vertex";
		assert!(controller(EditMode::DirectEdit).legend().contains(&add_line));
		assert!(controller(EditMode::ModifierChord).legend().contains(&add_line));
		assert!(!controller(EditMode::Draw).legend().contains(&add_line));

		let without = InteractionController {
			create_vertex_on_empty: false,
			..controller(EditMode::DirectEdit)
		};
		assert!(!without.legend().contains(&add_line));
		assert_eq!(without.legend(), EditMode::DirectEdit.legend());
	}
}
