//! Error types for configuration, session hosting and canvas setup.
//!
//! Graph mutations themselves never fail; see
//! [`GraphModel`](crate::components::graph_canvas::GraphModel).

use thiserror::Error;

/// Errors surfaced at the edges of the editor.
#[derive(Debug, Error)]
pub enum EditorError {
	/// Vertex count outside the supported range.
	#[error("vertex count {value} is outside {min}..={max}")]
	InvalidVertexCount {
		/// Requested count.
		value: usize,
		/// Smallest accepted count.
		min: usize,
		/// Largest accepted count.
		max: usize,
	},
	/// Unknown edit mode name.
	#[error("unknown edit mode '{0}' (expected draw, direct or chord)")]
	InvalidMode(String),
	/// A numeric setting that did not parse or is not positive.
	#[error("invalid value for '{key}': {value}")]
	InvalidNumber {
		/// Setting name.
		key: String,
		/// Rejected raw value.
		value: String,
	},
	/// Palette with fewer than two colors.
	#[error("palette needs at least 2 colors, got {0}")]
	InvalidPalette(usize),
	/// Width pair where bold is not wider than normal.
	#[error("invalid width pair: {0}")]
	InvalidWidths(String),
	/// Unrecognized configuration key.
	#[error("unknown setting '{0}'")]
	UnknownSetting(String),
	/// Browser session storage is not available.
	#[error("session storage is unavailable")]
	StorageUnavailable,
	/// Browser storage call failed.
	#[error("session storage error: {0}")]
	Storage(String),
	/// Stored session could not be encoded or decoded.
	#[error("session snapshot error: {0}")]
	Snapshot(#[from] serde_json::Error),
	/// Stored vertex count and stored layout disagree.
	#[error("session stores {vertices} vertices for a vertex count of {count}")]
	SessionMismatch {
		/// Stored vertex count.
		count: usize,
		/// Number of stored positions.
		vertices: usize,
	},
	/// Canvas element or 2D context could not be obtained.
	#[error("canvas error: {0}")]
	Canvas(String),
}

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let error = EditorError::InvalidVertexCount {
			value: 42,
			min: 3,
			max: 20,
		};
		assert_eq!(error.to_string(), "vertex count 42 is outside 3..=20");

		let error = EditorError::InvalidMode("lasso".to_string());
		assert!(error.to_string().contains("lasso"));

		let error = EditorError::InvalidPalette(1);
		assert_eq!(error.to_string(), "palette needs at least 2 colors, got 1");

		let error = EditorError::SessionMismatch {
			count: 5,
			vertices: 25,
		};
		assert_eq!(
			error.to_string(),
			"session stores 25 vertices for a vertex count of 5"
		);
	}

	#[test]
	fn test_snapshot_error_from_serde() {
		let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
		let error: EditorError = parse.map_err(EditorError::from).unwrap_err();
		assert!(matches!(error, EditorError::Snapshot(_)));
	}
}
