//! Live editor state owned by the canvas component between DOM events.

use log::{debug, info};

use super::controller::{Effect, Gesture, InputEvent, InteractionController, InteractionState, Modifier};
use super::model::GraphModel;
use super::types::{Position, VertexId};
use crate::config::{EditorConfig, Palette};

/// Half-width of the visible world square; generated vertices sit on the
/// unit circle inside it.
pub const WORLD_EXTENT: f64 = 1.2;
/// Screen radius of a drawn vertex in pixels.
pub const VERTEX_RADIUS: f64 = 12.0;

/// World-to-screen mapping: `screen = (x + wx·k, y − wy·k)`, y pointing up in
/// world space.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	/// Screen x of the world origin.
	pub x: f64,
	/// Screen y of the world origin.
	pub y: f64,
	/// Pixels per world unit.
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
	/// Centers the world square in a `width × height` surface.
	pub fn fit(width: f64, height: f64) -> Self {
		Self {
			x: width / 2.0,
			y: height / 2.0,
			k: (width.min(height) / (2.0 * WORLD_EXTENT)).max(f64::EPSILON),
		}
	}

	/// Canvas pixel to world point.
	pub fn screen_to_world(&self, sx: f64, sy: f64) -> Position {
		Position::new((sx - self.x) / self.k, -(sy - self.y) / self.k)
	}

	/// World point to canvas pixel.
	pub fn world_to_screen(&self, p: Position) -> (f64, f64) {
		(self.x + p.x * self.k, self.y - p.y * self.k)
	}

	/// World point under the cursor, or `None` outside the drawing square.
	pub fn surface_point(&self, sx: f64, sy: f64) -> Option<Position> {
		let p = self.screen_to_world(sx, sy);
		(p.x.abs() <= WORLD_EXTENT && p.y.abs() <= WORLD_EXTENT).then_some(p)
	}
}

/// Everything the renderer needs for one paint.
pub struct Frame<'a> {
	/// Graph to draw.
	pub model: &'a GraphModel,
	/// Edge colors.
	pub palette: &'a Palette,
	/// World-to-screen mapping.
	pub transform: &'a ViewTransform,
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
	/// Vertex to highlight.
	pub focus: Option<VertexId>,
	/// Info panel lines.
	pub info: Vec<String>,
}

/// Text of the info panel.
pub fn info_lines(model: &GraphModel, title: &str, legend: &[&str]) -> Vec<String> {
	let mut lines = vec![
		format!("Graph Type: {}", title),
		format!("Vertices: {}", model.vertex_count()),
		format!("Edges: {}", model.edge_count()),
	];
	lines.extend(legend.iter().map(|l| l.to_string()));
	lines
}

/// Live editor state held by the canvas component between DOM events.
pub struct CanvasState {
	/// Edited graph.
	pub model: GraphModel,
	/// Gesture state between events.
	pub interaction: InteractionState,
	/// Event interpreter.
	pub controller: InteractionController,
	/// Edge colors.
	pub palette: Palette,
	/// Current fit of the world square.
	pub transform: ViewTransform,
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
	/// Set by every visible change, cleared by the next paint.
	pub dirty: bool,
	generated: bool,
}

impl CanvasState {
	/// Generates the initial complete graph for a `width × height` surface.
	pub fn new(config: &EditorConfig, width: f64, height: f64) -> Self {
		let mut model = config.new_model();
		model.reset(config.vertex_count.get());
		Self {
			model,
			interaction: InteractionState::default(),
			controller: config.controller(),
			palette: config.palette.clone(),
			transform: ViewTransform::fit(width, height),
			width,
			height,
			dirty: true,
			generated: true,
		}
	}

	/// Runs one event through the controller and stores the new gesture state.
	pub fn dispatch(&mut self, event: InputEvent) -> Effect {
		let transition = self.controller.handle(&mut self.model, self.interaction, event);
		self.interaction = transition.state;
		if transition.effect.needs_redraw() {
			if !matches!(
				transition.effect,
				Effect::GestureChanged | Effect::VertexMoved(_)
			) {
				self.generated = false;
			}
			self.dirty = true;
		}
		transition.effect
	}

	/// Brings the modifier latch in line with the flags carried by a mouse
	/// event, releasing or pressing whatever differs.
	pub fn sync_modifiers(&mut self, connect: bool, move_vertex: bool, remove: bool) {
		let held = self.interaction.modifiers;
		for (modifier, was, is) in [
			(Modifier::Connect, held.connect, connect),
			(Modifier::Move, held.move_vertex, move_vertex),
			(Modifier::Remove, held.remove, remove),
		] {
			if was != is {
				let event = if is {
					InputEvent::KeyDown(modifier)
				} else {
					InputEvent::KeyUp(modifier)
				};
				self.dispatch(event);
			}
		}
	}

	/// World point under a canvas pixel, if on the surface.
	pub fn pointer(&self, sx: f64, sy: f64) -> Option<Position> {
		self.transform.surface_point(sx, sy)
	}

	/// Replaces the graph with a freshly colored complete graph.
	pub fn generate(&mut self, vertex_count: usize) {
		info!("Generating complete graph on {} vertices", vertex_count);
		self.model.reset(vertex_count);
		self.after_rebuild(true);
	}

	/// Replaces the graph with bare vertices.
	pub fn clear(&mut self, vertex_count: usize) {
		debug!("Clearing graph to {} vertices", vertex_count);
		self.model.clear(vertex_count);
		self.after_rebuild(false);
	}

	fn after_rebuild(&mut self, generated: bool) {
		self.interaction.gesture = Gesture::Idle;
		self.generated = generated;
		self.dirty = true;
	}

	/// Refits the view to a new surface size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.transform = ViewTransform::fit(width, height);
		self.dirty = true;
	}

	/// Frame for the next paint.
	pub fn frame(&self) -> Frame<'_> {
		let title = if self.generated { "Complete" } else { "Custom" };
		Frame {
			model: &self.model,
			palette: &self.palette,
			transform: &self.transform,
			width: self.width,
			height: self.height,
			focus: self.interaction.gesture.focus(),
			info: info_lines(&self.model, title, &self.controller.legend()),
		}
	}
}
