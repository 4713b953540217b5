//! Interactive 2-coloring editor: graph model, hit-testing, gesture
//! controller and the canvas component hosting them.

mod component;
/// Gesture state machine.
pub mod controller;
/// Point picking.
pub mod hit;
/// Graph storage.
pub mod model;
mod render;
/// Host-side canvas state and view transform.
pub mod state;
/// Shared value types.
pub mod types;

pub use component::{GraphEditorCanvas, context_2d};
pub use controller::{
	EditMode, Effect, Gesture, InputEvent, InteractionController, InteractionState, Modifier,
	Modifiers, PointerButton, Transition,
};
pub use model::{GraphModel, GraphSnapshot};
pub use render::render;
pub use state::{CanvasState, Frame, ViewTransform, info_lines};
pub use types::{EdgeKey, EdgeStyle, Position, StyledEdge, VertexId, WidthPair, circle_layout};
