//! Canvas 2D drawing of a [`Frame`].

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{Frame, VERTEX_RADIUS};

const BACKGROUND: &str = "#ffffff";
const VERTEX_FILL: &str = "lightgray";
const VERTEX_STROKE: &str = "black";
const FOCUS_HALO: &str = "rgba(255, 255, 0, 0.5)";
const INFO_FONT_PX: f64 = 13.0;

/// Paints one full frame.
pub fn render(frame: &Frame<'_>, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, frame.width, frame.height);
	draw_edges(frame, ctx);
	draw_focus(frame, ctx);
	draw_vertices(frame, ctx);
	draw_info(frame, ctx);
}

fn draw_edges(frame: &Frame<'_>, ctx: &CanvasRenderingContext2d) {
	let positions = frame.model.positions();
	ctx.set_line_cap("round");
	for edge in frame.model.edges() {
		let (u, v) = edge.key.endpoints();
		let (Some(&a), Some(&b)) = (positions.get(u), positions.get(v)) else {
			continue;
		};
		let ((x1, y1), (x2, y2)) = (
			frame.transform.world_to_screen(a),
			frame.transform.world_to_screen(b),
		);
		ctx.set_stroke_style_str(frame.palette.token(edge.style.color));
		ctx.set_line_width(edge.style.width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_focus(frame: &Frame<'_>, ctx: &CanvasRenderingContext2d) {
	let Some(p) = frame.focus.and_then(|v| frame.model.position(v)) else {
		return;
	};
	let (x, y) = frame.transform.world_to_screen(p);
	ctx.begin_path();
	let _ = ctx.arc(x, y, VERTEX_RADIUS * 1.6, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(FOCUS_HALO);
	ctx.fill();

	// Dashed ring marks a pending gesture endpoint.
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0),
		&JsValue::from_f64(3.0),
	));
	ctx.set_stroke_style_str("green");
	ctx.set_line_width(1.5);
	ctx.begin_path();
	let _ = ctx.arc(x, y, VERTEX_RADIUS * 1.6, 0.0, 2.0 * PI);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_vertices(frame: &Frame<'_>, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(&format!("{}px sans-serif", VERTEX_RADIUS));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for (id, &p) in frame.model.positions().iter().enumerate() {
		let (x, y) = frame.transform.world_to_screen(p);
		ctx.begin_path();
		let _ = ctx.arc(x, y, VERTEX_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(VERTEX_FILL);
		ctx.fill();
		ctx.set_stroke_style_str(VERTEX_STROKE);
		ctx.set_line_width(1.0);
		ctx.stroke();

		ctx.set_fill_style_str("black");
		let _ = ctx.fill_text(&id.to_string(), x, y);
	}
}

fn draw_info(frame: &Frame<'_>, ctx: &CanvasRenderingContext2d) {
	if frame.info.is_empty() {
		return;
	}
	let line_height = INFO_FONT_PX * 1.35;
	ctx.set_font(&format!("{}px sans-serif", INFO_FONT_PX));
	ctx.set_text_align("left");
	ctx.set_text_baseline("top");

	let text_width = frame
		.info
		.iter()
		.filter_map(|line| ctx.measure_text(line).ok())
		.map(|m| m.width())
		.fold(0.0, f64::max);
	let (x, y, pad) = (10.0, 10.0, 6.0);
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.7)");
	ctx.fill_rect(
		x,
		y,
		text_width + 2.0 * pad,
		line_height * frame.info.len() as f64 + 2.0 * pad,
	);

	ctx.set_fill_style_str("black");
	for (i, line) in frame.info.iter().enumerate() {
		let _ = ctx.fill_text(line, x + pad, y + pad + line_height * i as f64);
	}
}
