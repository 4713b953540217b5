//! Geometric hit-testing of world-space points against vertices and edges.
//!
//! Vertex picking takes the first vertex (ascending id) within the pick
//! radius, so overlapping vertices resolve to the lowest id. Edge picking
//! takes the closest edge within the threshold; ties keep the earlier edge
//! in canonical order.

use super::model::GraphModel;
use super::types::{EdgeKey, Position, VertexId};

/// Distance from `p` to the segment `a`–`b`.
///
/// The projection parameter is clamped to `[0, 1]`. A zero-length segment
/// measures the distance to its single point.
pub fn point_segment_distance(p: Position, a: Position, b: Position) -> f64 {
	let (abx, aby) = (b.x - a.x, b.y - a.y);
	let len_sq = abx * abx + aby * aby;
	if len_sq == 0.0 {
		return p.distance(a);
	}
	let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
	p.distance(Position::new(a.x + t * abx, a.y + t * aby))
}

/// Lowest vertex id within `pick_radius` of `point`.
pub fn vertex_at(model: &GraphModel, point: Position, pick_radius: f64) -> Option<VertexId> {
	model
		.positions()
		.iter()
		.position(|&v| point.distance(v) < pick_radius)
}

/// Closest edge within `threshold` of `point`.
pub fn edge_at(model: &GraphModel, point: Position, threshold: f64) -> Option<EdgeKey> {
	let positions = model.positions();
	let mut closest: Option<(EdgeKey, f64)> = None;
	for edge in model.edges() {
		let (u, v) = edge.key.endpoints();
		let (Some(&a), Some(&b)) = (positions.get(u), positions.get(v)) else {
			continue;
		};
		let distance = point_segment_distance(point, a, b);
		if distance >= threshold {
			continue;
		}
		if closest.is_none_or(|(_, best)| distance < best) {
			closest = Some((edge.key, distance));
		}
	}
	closest.map(|(key, _)| key)
}
