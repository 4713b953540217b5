//! Plain value types shared by the model, controller and renderer.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Dense vertex identifier, `0..vertex_count`.
pub type VertexId = usize;

/// A point in world space. Generated layouts live on the unit circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, pointing up.
	pub y: f64,
}

impl Position {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance.
	pub fn distance(self, other: Position) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Canonical `(min, max)` key of an undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey(VertexId, VertexId);

impl EdgeKey {
	/// Orders the endpoints; `None` for a self-loop.
	pub fn new(u: VertexId, v: VertexId) -> Option<Self> {
		match u.cmp(&v) {
			std::cmp::Ordering::Less => Some(Self(u, v)),
			std::cmp::Ordering::Greater => Some(Self(v, u)),
			std::cmp::Ordering::Equal => None,
		}
	}

	/// Smaller endpoint.
	pub const fn low(self) -> VertexId {
		self.0
	}

	/// Larger endpoint.
	pub const fn high(self) -> VertexId {
		self.1
	}

	/// `(low, high)`.
	pub const fn endpoints(self) -> (VertexId, VertexId) {
		(self.0, self.1)
	}
}

/// The two stroke widths an edge toggles between.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidthPair {
	/// Width of a freshly created edge.
	pub normal: f64,
	/// Highlighted width, wider than `normal`.
	pub bold: f64,
}

impl Default for WidthPair {
	fn default() -> Self {
		Self {
			normal: 2.0,
			bold: 4.0,
		}
	}
}

impl WidthPair {
	/// Bold when at or below normal, otherwise back to normal.
	pub fn toggled(&self, current: f64) -> f64 {
		if current <= self.normal {
			self.bold
		} else {
			self.normal
		}
	}

	/// Nearest of the two widths; a width halfway between counts as normal.
	pub fn snapped(&self, width: f64) -> f64 {
		if width > (self.normal + self.bold) / 2.0 {
			self.bold
		} else {
			self.normal
		}
	}
}

/// Style of a single edge. `color` is a palette index; `None` renders with
/// the palette fallback and only appears for pairs that are not edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
	/// Palette index.
	pub color: Option<usize>,
	/// Stroke width in pixels.
	pub width: f64,
}

impl Default for EdgeStyle {
	fn default() -> Self {
		Self {
			color: None,
			width: WidthPair::default().normal,
		}
	}
}

/// An edge together with its style, as handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyledEdge {
	/// Canonical endpoints.
	pub key: EdgeKey,
	/// Color and width.
	pub style: EdgeStyle,
}

/// Positions of `n` vertices evenly spaced on the unit circle, vertex `i` at
/// angle `2πi/n`.
pub fn circle_layout(n: usize) -> Vec<Position> {
	(0..n)
		.map(|i| {
			let angle = 2.0 * PI * i as f64 / n as f64;
			Position::new(angle.cos(), angle.sin())
		})
		.collect()
}
