use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::editor::{EditorShell, NodeData, Position, SchemaNode};

use super::state::{
	BODY_PADDING, HANDLE_RADIUS, HEADER_HEIGHT, Handle, NodeBox, ROW_HEIGHT, SchemaCanvasState,
	TEXT_PADDING, bezier_controls,
};

const HEADER_FONT: &str = "bold 13px sans-serif";
const FIELD_FONT: &str = "12px sans-serif";
const EMPTY_FONT: &str = "italic 12px sans-serif";
const FIELD_GAP: f64 = 6.0;

/// Widest text line of a node, padded on both sides.
pub fn measure_node(ctx: &CanvasRenderingContext2d, data: &NodeData) -> f64 {
	let width = |font: &str, text: &str| {
		ctx.set_font(font);
		ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
	};
	let header = width(HEADER_FONT, &data.label);
	let widest_field = data
		.fields
		.iter()
		.map(|f| width(FIELD_FONT, &format!("o {} {}", f.kind, f.name)) + 2.0 * FIELD_GAP)
		.fold(0.0, f64::max);
	header.max(widest_field) + 2.0 * TEXT_PADDING
}

pub fn render(state: &mut SchemaCanvasState, shell: &EditorShell, ctx: &CanvasRenderingContext2d) {
	let nodes = shell.store().nodes();
	state.layout.refresh(nodes, |data| measure_node(ctx, data));
	if state.needs_fit && state.width > 0.0 {
		state.fit_view(nodes);
	}

	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_grid(state, ctx);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, shell, ctx);
	draw_connection_line(state, shell, ctx);
	draw_nodes(state, shell, ctx);
	ctx.restore();
}

fn draw_grid(state: &SchemaCanvasState, ctx: &CanvasRenderingContext2d) {
	let t = &state.transform;
	let gap = state.config.grid_gap * t.k;
	if gap < 4.0 {
		return;
	}
	let origin = t.canvas_to_screen(Position::default());
	let (ox, oy) = (origin.x.rem_euclid(gap), origin.y.rem_euclid(gap));
	let radius = (0.5 * t.k).max(0.5);
	ctx.set_fill_style_str(&state.config.grid_color);
	let mut y = oy;
	while y < state.height {
		let mut x = ox;
		while x < state.width {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
			ctx.fill();
			x += gap;
		}
		y += gap;
	}
}

fn stroke_bezier(ctx: &CanvasRenderingContext2d, s: Position, t: Position) {
	let (c1, c2) = bezier_controls(s, t);
	ctx.begin_path();
	ctx.move_to(s.x, s.y);
	ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, t.x, t.y);
	ctx.stroke();
}

fn draw_edges(state: &SchemaCanvasState, shell: &EditorShell, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let nodes = shell.store().nodes();
	for edge in shell.store().edges() {
		let Some((s, t)) = state.layout.edge_endpoints(nodes, edge) else {
			continue;
		};
		let (color, width) = if edge.selected {
			("#555555", 2.0 / k)
		} else {
			("#b1b1b7", 1.0 / k)
		};
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width);
		stroke_bezier(ctx, s, t);
	}
}

fn draw_connection_line(
	state: &SchemaCanvasState,
	shell: &EditorShell,
	ctx: &CanvasRenderingContext2d,
) {
	let Some(connect) = &state.connect else {
		return;
	};
	let Some(node) = shell.store().node(&connect.node_id) else {
		return;
	};
	let anchor = state.layout.node_box(node).handle(connect.handle);
	let (s, t) = match connect.handle {
		Handle::Source => (anchor, connect.cursor),
		Handle::Target => (connect.cursor, anchor),
	};
	let k = state.transform.k;
	ctx.set_stroke_style_str("#b1b1b7");
	ctx.set_line_width(1.0 / k);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(5.0 / k),
		&JsValue::from_f64(5.0 / k),
	));
	stroke_bezier(ctx, s, t);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &SchemaCanvasState, shell: &EditorShell, ctx: &CanvasRenderingContext2d) {
	let focused = shell.selected_node().map(|n| n.id.as_str());
	for node in shell.store().nodes() {
		let b = state.layout.node_box(node);
		let highlighted = node.selected || focused == Some(node.id.as_str());
		draw_node(ctx, node, &b, highlighted, state.transform.k);
	}
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &SchemaNode,
	b: &NodeBox,
	highlighted: bool,
	k: f64,
) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(b.x, b.y, b.w, b.h);

	ctx.set_fill_style_str("#2d3748");
	ctx.fill_rect(b.x, b.y, b.w, HEADER_HEIGHT);
	ctx.set_fill_style_str("#ffffff");
	ctx.set_font(HEADER_FONT);
	let _ = ctx.fill_text(&node.data.label, b.x + TEXT_PADDING, b.y + HEADER_HEIGHT * 0.65);

	let mut y = b.y + HEADER_HEIGHT + BODY_PADDING + ROW_HEIGHT * 0.7;
	if node.data.fields.is_empty() {
		ctx.set_fill_style_str("#999999");
		ctx.set_font(EMPTY_FONT);
		let _ = ctx.fill_text("No properties", b.x + TEXT_PADDING, y);
	}
	for field in &node.data.fields {
		let mut x = b.x + TEXT_PADDING;
		for (text, color) in [
			("o", "#a0aec0"),
			(field.kind.as_str(), "#805ad5"),
			(field.name.as_str(), "#1a202c"),
		] {
			ctx.set_font(FIELD_FONT);
			ctx.set_fill_style_str(color);
			let _ = ctx.fill_text(text, x, y);
			x += ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0) + FIELD_GAP;
		}
		y += ROW_HEIGHT;
	}

	let (border, width) = if highlighted {
		("#3b82f6", 2.0 / k)
	} else {
		("#1a192b", 1.0 / k)
	};
	ctx.set_stroke_style_str(border);
	ctx.set_line_width(width);
	ctx.stroke_rect(b.x, b.y, b.w, b.h);

	for handle in [Handle::Target, Handle::Source] {
		let p = b.handle(handle);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, HANDLE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("#555555");
		ctx.fill();
		ctx.set_stroke_style_str("#ffffff");
		ctx.set_line_width(1.0 / k);
		ctx.stroke();
	}
}
