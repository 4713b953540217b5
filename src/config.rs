//! Editor configuration: vertex count, edit mode, pick distances, palette and
//! stroke widths, with overrides parsed from `key=value` pairs such as a page
//! query string.

use std::fmt;

use log::warn;

use crate::components::graph_canvas::{EditMode, GraphModel, InteractionController, WidthPair};
use crate::error::{EditorError, Result};

/// Smallest generated graph.
pub const MIN_VERTICES: usize = 3;
/// Largest generated graph.
pub const MAX_VERTICES: usize = 20;
/// Vertex count before any setting.
pub const DEFAULT_VERTICES: usize = 5;

/// Vertex count for generated graphs, always within
/// `MIN_VERTICES..=MAX_VERTICES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexCount(usize);

impl Default for VertexCount {
	fn default() -> Self {
		Self(DEFAULT_VERTICES)
	}
}

impl VertexCount {
	/// Rejects counts outside the range.
	pub fn new(value: usize) -> Result<Self> {
		if (MIN_VERTICES..=MAX_VERTICES).contains(&value) {
			Ok(Self(value))
		} else {
			Err(EditorError::InvalidVertexCount {
				value,
				min: MIN_VERTICES,
				max: MAX_VERTICES,
			})
		}
	}

	/// Clamps into the range.
	pub fn clamped(value: usize) -> Self {
		Self(value.clamp(MIN_VERTICES, MAX_VERTICES))
	}

	/// Raw count.
	pub const fn get(self) -> usize {
		self.0
	}
}

impl fmt::Display for VertexCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Ordered edge colors (CSS tokens) plus the color used for unstyled edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
	colors: Vec<String>,
	fallback: String,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			colors: vec!["red".into(), "blue".into()],
			fallback: "black".into(),
		}
	}
}

impl Palette {
	/// Needs at least two colors.
	pub fn new(colors: Vec<String>) -> Result<Self> {
		if colors.len() < 2 {
			return Err(EditorError::InvalidPalette(colors.len()));
		}
		Ok(Self {
			colors,
			fallback: "black".into(),
		})
	}

	/// Number of colors.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Always false for a constructed palette.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Color token for a palette index, falling back for `None` or out of range.
	pub fn token(&self, index: Option<usize>) -> &str {
		index
			.and_then(|i| self.colors.get(i))
			.unwrap_or(&self.fallback)
	}
}

/// Everything the host exposes to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Vertex count of generated graphs.
	pub vertex_count: VertexCount,
	/// Gesture vocabulary.
	pub edit_mode: EditMode,
	/// World distance for vertex hits.
	pub vertex_pick_radius: f64,
	/// World distance for edge hits.
	pub edge_pick_threshold: f64,
	/// Edge colors.
	pub palette: Palette,
	/// Normal and bold edge widths.
	pub widths: WidthPair,
	/// Whether a plain click on empty space adds a vertex in direct-edit
	/// and chord modes.
	pub create_vertex_on_empty: bool,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			vertex_count: VertexCount::default(),
			edit_mode: EditMode::ModifierChord,
			vertex_pick_radius: 0.15,
			edge_pick_threshold: 0.1,
			palette: Palette::default(),
			widths: WidthPair::default(),
			create_vertex_on_empty: true,
		}
	}
}

fn positive(key: &str, value: &str) -> Result<f64> {
	value
		.trim()
		.parse::<f64>()
		.ok()
		.filter(|v| v.is_finite() && *v > 0.0)
		.ok_or_else(|| EditorError::InvalidNumber {
			key: key.to_string(),
			value: value.to_string(),
		})
}

impl EditorConfig {
	/// Keys understood by [`EditorConfig::apply_param`].
	pub const KEYS: [&'static str; 7] = [
		"n",
		"mode",
		"pick_radius",
		"edge_threshold",
		"palette",
		"widths",
		"add_vertex",
	];

	/// Applies one `key=value` override. On error the config is unchanged.
	///
	/// Recognized keys: `n`, `mode`, `pick_radius`, `edge_threshold`,
	/// `palette` (comma separated), `widths` (`normal,bold`), `add_vertex`
	/// (`true`/`false`).
	pub fn apply_param(&mut self, key: &str, value: &str) -> Result<()> {
		match key {
			"n" => {
				let n = value.trim().parse::<usize>().map_err(|_| EditorError::InvalidNumber {
					key: key.to_string(),
					value: value.to_string(),
				})?;
				self.vertex_count = VertexCount::new(n)?;
			}
			"mode" => self.edit_mode = value.parse()?,
			"pick_radius" => self.vertex_pick_radius = positive(key, value)?,
			"edge_threshold" => self.edge_pick_threshold = positive(key, value)?,
			"palette" => {
				let colors = value
					.split(',')
					.map(str::trim)
					.filter(|c| !c.is_empty())
					.map(String::from)
					.collect();
				self.palette = Palette::new(colors)?;
			}
			"widths" => {
				let (normal, bold) = value
					.split_once(',')
					.ok_or_else(|| EditorError::InvalidWidths(value.to_string()))?;
				let (normal, bold) = (positive(key, normal)?, positive(key, bold)?);
				if bold <= normal {
					return Err(EditorError::InvalidWidths(value.to_string()));
				}
				self.widths = WidthPair { normal, bold };
			}
			"add_vertex" => {
				self.create_vertex_on_empty =
					value.trim().parse().map_err(|_| EditorError::InvalidNumber {
						key: key.to_string(),
						value: value.to_string(),
					})?;
			}
			_ => return Err(EditorError::UnknownSetting(key.to_string())),
		}
		Ok(())
	}

	/// Applies every pair, logging and skipping the ones that are rejected.
	pub fn with_params<'a>(mut self, params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
		for (key, value) in params {
			if let Err(err) = self.apply_param(key, value) {
				warn!("Ignoring setting {}={}: {}", key, value, err);
			}
		}
		self
	}

	/// Empty model using this palette and width pair.
	pub fn new_model(&self) -> GraphModel {
		GraphModel::new(self.palette.len(), self.widths)
	}

	/// Controller with these mode and pick settings.
	pub fn controller(&self) -> InteractionController {
		InteractionController {
			mode: self.edit_mode,
			vertex_pick_radius: self.vertex_pick_radius,
			edge_pick_threshold: self.edge_pick_threshold,
			create_vertex_on_empty: self.create_vertex_on_empty,
		}
	}
}
