use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{
	CARD_RADIUS, CLOSE_SIZE, HANDLE_RADIUS, SceneNode, SceneState,
};
use crate::workflow::NodeStatus;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_pending_link(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap, arrow_size) = (1.5 / k, 8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.highlight_t);

	for edge in &state.edges {
		let (x1, y1) = state.nodes[edge.source].handle_out();
		let (x2, y2) = state.nodes[edge.target].handle_in();
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let is_highlighted = state.is_edge_highlighted(&edge.id);

		// t=0: all edges at base (0.6), t=1: highlighted at 0.9, others at 0.15
		let (edge_alpha, arrow_alpha, width) = if is_highlighted {
			(0.6 + 0.3 * t, 0.8 + 0.1 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(0.6 - 0.45 * t, 0.8 - 0.45 * t, line_width * (1.0 - 0.3 * t))
		};

		ctx.set_stroke_style_str(&format!("rgba(100, 180, 255, {})", edge_alpha));
		ctx.set_line_width(width);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2 - ux * arrow_size, y2 - uy * arrow_size);
		ctx.stroke();

		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(&format!("rgba(100, 180, 255, {})", arrow_alpha));
		let (back_x, back_y) = (x2 - ux * arrow_size, y2 - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(x2, y2);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_pending_link(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	if !state.link.active {
		return;
	}
	let Some(source) = state.link.source_idx.and_then(|idx| state.nodes.get(idx)) else {
		return;
	};
	let k = state.transform.k;
	let (x1, y1) = source.handle_out();
	let (x2, y2) = (state.link.to_x, state.link.to_y);

	ctx.set_stroke_style_str("rgba(100, 180, 255, 0.9)");
	ctx.set_line_width(1.5 / k);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0 / k),
		&JsValue::from_f64(4.0 / k),
	));
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	ctx.set_fill_style_str("rgba(100, 180, 255, 0.9)");
	ctx.begin_path();
	let _ = ctx.arc(x2, y2, 3.0 / k, 0.0, 2.0 * PI);
	ctx.fill();
}

fn draw_nodes(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t) = (state.has_active_highlight(), ease_out_cubic(state.highlight_t));

	for node in &state.nodes {
		if has_highlight && state.is_node_highlighted(&node.id) {
			continue;
		}
		let alpha = if has_highlight { 1.0 - 0.7 * t } else { 1.0 };
		ctx.set_global_alpha(alpha);
		draw_card(state, node, ctx);
		ctx.set_global_alpha(1.0);
	}

	if !has_highlight {
		return;
	}

	for node in &state.nodes {
		if !state.is_node_highlighted(&node.id) {
			continue;
		}
		let is_selected = state.is_selected(&node.id);

		if t > 0.01 {
			let (w, h) = (node.width(), node.height());
			let (cx, cy) = (node.x + w / 2.0, node.y + h / 2.0);
			let base = w.max(h) / 2.0;
			let glow_radius = if is_selected {
				base * (1.2 + 0.5 * t)
			} else {
				base * (1.1 + 0.3 * t)
			};
			let gradient = ctx
				.create_radial_gradient(cx, cy, base * 0.3, cx, cy, glow_radius)
				.unwrap();
			let alpha = if is_selected { 0.35 * t } else { 0.2 * t };
			gradient
				.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", alpha))
				.unwrap();
			gradient
				.add_color_stop(0.6, &format!("rgba(200, 220, 255, {})", alpha * 0.3))
				.unwrap();
			gradient
				.add_color_stop(1.0, "rgba(255, 255, 255, 0)")
				.unwrap();
			ctx.begin_path();
			let _ = ctx.arc(cx, cy, glow_radius, 0.0, 2.0 * PI);
			ctx.set_fill_style_canvas_gradient(&gradient);
			ctx.fill();
		}

		draw_card(state, node, ctx);

		if is_selected && t > 0.01 {
			let k = state.transform.k;
			rounded_rect(
				ctx,
				node.x - 3.0 / k,
				node.y - 3.0 / k,
				node.width() + 6.0 / k,
				node.height() + 6.0 / k,
				CARD_RADIUS + 3.0 / k,
			);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}
	}
}

fn draw_card(state: &SceneState, node: &SceneNode, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (node.width(), node.height());

	rounded_rect(ctx, node.x, node.y, w, h, CARD_RADIUS);
	if node.is_root() {
		ctx.set_fill_style_str("#007bff");
	} else {
		ctx.set_fill_style_str("#16213e");
	}
	ctx.fill();
	rounded_rect(ctx, node.x, node.y, w, h, CARD_RADIUS);
	ctx.set_stroke_style_str("rgba(100, 180, 255, 0.35)");
	ctx.set_line_width(1.0 / state.transform.k);
	ctx.stroke();

	if node.is_root() {
		ctx.set_text_align("center");
		ctx.set_fill_style_str("white");
		ctx.set_font("bold 16px sans-serif");
		let _ = ctx.fill_text(&node.label, node.x + w / 2.0, node.y + 30.0);
		ctx.set_font("13px sans-serif");
		let _ = ctx.fill_text(
			&format!("Amount: ${}", node.amount),
			node.x + w / 2.0,
			node.y + 52.0,
		);
		ctx.set_text_align("left");
	} else {
		ctx.set_fill_style_str("white");
		ctx.set_font("bold 14px sans-serif");
		let _ = ctx.fill_text(&node.label, node.x + 12.0, node.y + 22.0);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(
			&format!("Amount: ${}", node.amount),
			node.x + 12.0,
			node.y + 42.0,
		);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.55)");
		ctx.set_font("11px sans-serif");
		let _ = ctx.fill_text(&node.provider_type, node.x + 12.0, node.y + 59.0);

		let dot_color = match node.status {
			NodeStatus::Active => "#4ade80",
			NodeStatus::Inactive => "#f87171",
		};
		ctx.set_fill_style_str(dot_color);
		ctx.begin_path();
		let _ = ctx.arc(node.x + 16.0, node.y + 73.0, 4.0, 0.0, 2.0 * PI);
		ctx.fill();
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.55)");
		let _ = ctx.fill_text(node.status.as_str(), node.x + 26.0, node.y + 77.0);

		draw_close(node, ctx);
	}

	draw_handles(state, node, ctx);
}

fn draw_close(node: &SceneNode, ctx: &CanvasRenderingContext2d) {
	let (cx, cy) = node.close_center();
	let arm = CLOSE_SIZE * 0.22;
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.55)");
	ctx.set_line_width(1.5);
	ctx.begin_path();
	ctx.move_to(cx - arm, cy - arm);
	ctx.line_to(cx + arm, cy + arm);
	ctx.move_to(cx + arm, cy - arm);
	ctx.line_to(cx - arm, cy + arm);
	ctx.stroke();
}

fn draw_handles(state: &SceneState, node: &SceneNode, ctx: &CanvasRenderingContext2d) {
	for (x, y) in [node.handle_out(), node.handle_in()] {
		ctx.begin_path();
		let _ = ctx.arc(x, y, HANDLE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("rgba(100, 180, 255, 0.9)");
		ctx.fill();
		ctx.set_stroke_style_str("#1a1a2e");
		ctx.set_line_width(1.5 / state.transform.k);
		ctx.stroke();
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
