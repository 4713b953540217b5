//! The editable graph: vertices, edges and edge styles.

use std::collections::BTreeMap;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::{EdgeKey, EdgeStyle, Position, StyledEdge, VertexId, WidthPair, circle_layout};

/// Graph structure, vertex layout and per-edge style.
///
/// Every mutation is tolerant: a request naming an unknown vertex, a missing
/// edge, a self-loop or a duplicate edge changes nothing and returns `false`.
/// Callers never have to validate ids before forwarding a user gesture.
///
/// Style is stored alongside structure, keyed by the canonical pair, so a live
/// edge always has exactly one style entry and removing an edge drops it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphModel {
	positions: Vec<Position>,
	edges: BTreeMap<EdgeKey, EdgeStyle>,
	palette_size: usize,
	widths: WidthPair,
}

/// Serializable form of a [`GraphModel`], used by session-backed hosting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
	/// Vertex positions indexed by id.
	pub positions: Vec<Position>,
	/// Edges in canonical order.
	pub edges: Vec<(EdgeKey, EdgeStyle)>,
}

impl Default for GraphModel {
	fn default() -> Self {
		Self::new(2, WidthPair::default())
	}
}

impl GraphModel {
	/// Empty model. `palette_size` is raised to at least 1.
	pub fn new(palette_size: usize, widths: WidthPair) -> Self {
		Self {
			positions: Vec::new(),
			edges: BTreeMap::new(),
			palette_size: palette_size.max(1),
			widths,
		}
	}

	fn default_style(&self) -> EdgeStyle {
		EdgeStyle {
			color: Some(0),
			width: self.widths.normal,
		}
	}

	/// Complete graph on `vertex_count` circle-laid vertices with random colors.
	pub fn reset(&mut self, vertex_count: usize) {
		self.reset_with_rng(vertex_count, &mut rand::thread_rng());
	}

	/// [`GraphModel::reset`] drawing colors from `rng`.
	pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, vertex_count: usize, rng: &mut R) {
		self.clear(vertex_count);
		for u in 0..vertex_count {
			for v in (u + 1)..vertex_count {
				if let Some(key) = EdgeKey::new(u, v) {
					let style = EdgeStyle {
						color: Some(rng.gen_range(0..self.palette_size)),
						width: self.widths.normal,
					};
					self.edges.insert(key, style);
				}
			}
		}
		info!(
			"Generated K{} with {} randomly colored edges",
			vertex_count,
			self.edges.len()
		);
	}

	/// Vertices on the circle, no edges.
	pub fn clear(&mut self, vertex_count: usize) {
		self.positions = circle_layout(vertex_count);
		self.edges.clear();
	}

	/// Appends a vertex with the next free id and no edges.
	pub fn add_vertex(&mut self, position: Position) -> VertexId {
		let id = self.positions.len();
		self.positions.push(position);
		debug!("Added vertex {} at ({:.3}, {:.3})", id, position.x, position.y);
		id
	}

	fn live_key(&self, u: VertexId, v: VertexId) -> Option<EdgeKey> {
		EdgeKey::new(u, v).filter(|key| self.edges.contains_key(key))
	}

	/// Adds `(u, v)` with the first palette color and normal width.
	pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> bool {
		let Some(key) = EdgeKey::new(u, v) else {
			return false;
		};
		if key.high() >= self.positions.len() || self.edges.contains_key(&key) {
			return false;
		}
		let style = self.default_style();
		self.edges.insert(key, style);
		debug!("Added edge {:?}", key.endpoints());
		true
	}

	/// Removes the edge together with its style.
	pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
		let removed = EdgeKey::new(u, v).and_then(|key| self.edges.remove(&key));
		if removed.is_some() {
			debug!("Removed edge ({}, {})", u.min(v), u.max(v));
		}
		removed.is_some()
	}

	/// Advances the edge to the next palette color, wrapping around.
	pub fn cycle_edge_color(&mut self, u: VertexId, v: VertexId) -> bool {
		let palette_size = self.palette_size;
		let Some(style) = self.live_key(u, v).and_then(|key| self.edges.get_mut(&key)) else {
			return false;
		};
		style.color = Some(style.color.map_or(0, |c| (c + 1) % palette_size));
		true
	}

	/// Switches the edge between normal and bold width.
	pub fn toggle_edge_width(&mut self, u: VertexId, v: VertexId) -> bool {
		let widths = self.widths;
		let Some(style) = self.live_key(u, v).and_then(|key| self.edges.get_mut(&key)) else {
			return false;
		};
		style.width = widths.toggled(style.width);
		true
	}

	/// Coordinates are not validated.
	pub fn move_vertex(&mut self, id: VertexId, position: Position) -> bool {
		match self.positions.get_mut(id) {
			Some(slot) => {
				*slot = position;
				true
			}
			None => false,
		}
	}

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.positions.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Number of colors edges cycle through.
	pub fn palette_size(&self) -> usize {
		self.palette_size
	}

	/// Width pair edges toggle between.
	pub fn widths(&self) -> WidthPair {
		self.widths
	}

	/// Whether `(u, v)` is an edge, in either orientation.
	pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
		self.live_key(u, v).is_some()
	}

	/// Edges in ascending canonical order.
	pub fn edges(&self) -> impl Iterator<Item = StyledEdge> + '_ {
		self.edges
			.iter()
			.map(|(&key, &style)| StyledEdge { key, style })
	}

	/// Canonical key of the `index`-th edge in [`GraphModel::edges`] order.
	pub fn edge_at(&self, index: usize) -> Option<EdgeKey> {
		self.edges.keys().nth(index).copied()
	}

	/// Style of the edge `(u, v)`, or the unstyled default for a non-edge.
	pub fn edge_style(&self, u: VertexId, v: VertexId) -> EdgeStyle {
		EdgeKey::new(u, v)
			.and_then(|key| self.edges.get(&key).copied())
			.unwrap_or(EdgeStyle {
				color: None,
				width: self.widths.normal,
			})
	}

	/// Vertex positions indexed by id.
	pub fn positions(&self) -> &[Position] {
		&self.positions
	}

	/// Position of `id`, if it exists.
	pub fn position(&self, id: VertexId) -> Option<Position> {
		self.positions.get(id).copied()
	}

	/// Serializable copy of the vertices and styled edges.
	pub fn snapshot(&self) -> GraphSnapshot {
		GraphSnapshot {
			positions: self.positions.clone(),
			edges: self.edges.iter().map(|(&k, &s)| (k, s)).collect(),
		}
	}

	/// Rebuilds a model from a snapshot, dropping edges that name unknown
	/// vertices. Colors wrap into the palette and widths snap to the nearest
	/// of `widths`.
	pub fn from_snapshot(snapshot: GraphSnapshot, palette_size: usize, widths: WidthPair) -> Self {
		let mut model = Self::new(palette_size, widths);
		model.positions = snapshot.positions;
		for (key, style) in snapshot.edges {
			let (u, v) = key.endpoints();
			// Stored keys are re-canonicalized; a decoded key may be out of order.
			let Some(key) = EdgeKey::new(u, v) else {
				continue;
			};
			if model.add_edge(u, v) {
				let palette_size = model.palette_size;
				model.edges.insert(
					key,
					EdgeStyle {
						color: Some(style.color.unwrap_or(0) % palette_size),
						width: widths.snapped(style.width),
					},
				);
			}
		}
		model
	}
}
