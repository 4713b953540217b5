//! Request-style hosting for the dashboard page.
//!
//! No editor state survives between actions in memory. Every action loads the
//! serialized graph from a [`SessionStore`], applies exactly one mutation and
//! writes it back, so multi-click gestures do not exist here: edge editing is
//! reduced to "pick an edge, press a button".

use std::cell::RefCell;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::components::graph_canvas::{GraphModel, GraphSnapshot};
use crate::config::{EditorConfig, VertexCount};
use crate::error::{EditorError, Result};

/// Storage key of the dashboard session.
pub const SESSION_KEY: &str = "ramsey-graph-canvas/session";

/// Persists one serialized session string.
pub trait SessionStore {
	/// Stored value, `None` when nothing was saved yet.
	fn load(&self) -> Result<Option<String>>;
	/// Replaces the stored value.
	fn save(&self, value: &str) -> Result<()>;
}

/// `window.sessionStorage`, scoped to the browser tab.
pub struct BrowserSessionStore {
	storage: web_sys::Storage,
}

impl BrowserSessionStore {
	/// Opens the current tab's session storage.
	pub fn open() -> Result<Self> {
		let window = web_sys::window().ok_or(EditorError::StorageUnavailable)?;
		let storage = window
			.session_storage()
			.map_err(|e| EditorError::Storage(format!("{:?}", e)))?
			.ok_or(EditorError::StorageUnavailable)?;
		Ok(Self { storage })
	}
}

impl SessionStore for BrowserSessionStore {
	fn load(&self) -> Result<Option<String>> {
		self.storage
			.get_item(SESSION_KEY)
			.map_err(|e| EditorError::Storage(format!("{:?}", e)))
	}

	fn save(&self, value: &str) -> Result<()> {
		self.storage
			.set_item(SESSION_KEY, value)
			.map_err(|e| EditorError::Storage(format!("{:?}", e)))
	}
}

/// In-process store, for tests and hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
	value: RefCell<Option<String>>,
}

impl SessionStore for MemorySessionStore {
	fn load(&self) -> Result<Option<String>> {
		Ok(self.value.borrow().clone())
	}

	fn save(&self, value: &str) -> Result<()> {
		*self.value.borrow_mut() = Some(value.to_string());
		Ok(())
	}
}

/// One dashboard request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardAction {
	/// Read the session, generating a graph if there is none yet.
	Load,
	/// Slider moved; a changed count regenerates the graph.
	SetVertexCount(usize),
	/// Regenerate a random complete graph at the current count.
	Generate,
	/// Drop every edge, keeping the vertices.
	Clear,
	/// Cycle the color of the edge at this index of the edge list.
	ChangeColor(usize),
	/// Toggle the width of the edge at this index of the edge list.
	ToggleBold(usize),
}

#[derive(Serialize, Deserialize)]
struct StoredSession {
	vertex_count: usize,
	graph: GraphSnapshot,
}

/// Decoded session handed to the page for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
	/// Count chosen with the slider.
	pub vertex_count: VertexCount,
	/// Graph to render.
	pub model: GraphModel,
}

impl DashboardState {
	fn generated(config: &EditorConfig, vertex_count: VertexCount) -> Self {
		let mut model = config.new_model();
		model.reset(vertex_count.get());
		Self {
			vertex_count,
			model,
		}
	}

	fn decode(raw: &str, config: &EditorConfig) -> Result<Self> {
		let stored: StoredSession = serde_json::from_str(raw)?;
		let vertex_count = VertexCount::new(stored.vertex_count)?;
		let vertices = stored.graph.positions.len();
		if vertices != vertex_count.get() {
			return Err(EditorError::SessionMismatch {
				count: vertex_count.get(),
				vertices,
			});
		}
		Ok(Self {
			vertex_count,
			model: GraphModel::from_snapshot(stored.graph, config.palette.len(), config.widths),
		})
	}

	fn encode(&self) -> Result<String> {
		let stored = StoredSession {
			vertex_count: self.vertex_count.get(),
			graph: self.model.snapshot(),
		};
		Ok(serde_json::to_string(&stored)?)
	}

	/// Selector entries, `Edge i: (u, v)` in edge-list order.
	pub fn edge_labels(&self) -> Vec<String> {
		self.model
			.edges()
			.enumerate()
			.map(|(i, e)| format!("Edge {}: ({}, {})", i, e.key.low(), e.key.high()))
			.collect()
	}
}

/// Runs one decode, mutate, encode cycle against `store`.
///
/// A missing or unreadable session starts over with a freshly generated graph.
pub fn handle_request<S: SessionStore + ?Sized>(
	store: &S,
	config: &EditorConfig,
	action: DashboardAction,
) -> Result<DashboardState> {
	let stored = match store.load()? {
		Some(raw) => match DashboardState::decode(&raw, config) {
			Ok(state) => Some(state),
			Err(err) => {
				warn!("Discarding unreadable dashboard session: {}", err);
				None
			}
		},
		None => None,
	};
	let mut state = match stored {
		Some(state) => state,
		None => {
			info!("Starting a new dashboard session");
			DashboardState::generated(config, config.vertex_count)
		}
	};

	match action {
		DashboardAction::Load => {}
		DashboardAction::SetVertexCount(n) => {
			let count = VertexCount::clamped(n);
			if count != state.vertex_count {
				state = DashboardState::generated(config, count);
			}
		}
		DashboardAction::Generate => {
			state = DashboardState::generated(config, state.vertex_count);
		}
		DashboardAction::Clear => state.model.clear(state.vertex_count.get()),
		DashboardAction::ChangeColor(index) => {
			if let Some((u, v)) = state.model.edge_at(index).map(|k| k.endpoints()) {
				state.model.cycle_edge_color(u, v);
			}
		}
		DashboardAction::ToggleBold(index) => {
			if let Some((u, v)) = state.model.edge_at(index).map(|k| k.endpoints()) {
				state.model.toggle_edge_width(u, v);
			}
		}
	}

	store.save(&state.encode()?)?;
	Ok(state)
}
