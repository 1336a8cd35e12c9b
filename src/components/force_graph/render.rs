use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NODE_RADIUS};

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	// tooltip is drawn in screen space so it stays readable at any zoom
	draw_tooltip(state, ctx);
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap) = (1.5 / k, 8.0 / k, 4.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	// interactions are undirected, so edges are plain lines without arrowheads
	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let is_highlighted = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());

		// t=0: all edges at base (0.6), t=1: highlighted at 0.9, others at 0.15
		let (edge_alpha, width) = if is_highlighted {
			(0.6 + 0.3 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(0.6 - 0.45 * t, line_width * (1.0 - 0.3 * t))
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
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	draw_edge_annotations(state, ctx, t);
}

/// While a node is hovered, its edges show the first tooltip line (type and
/// severity) at their midpoint.
fn draw_edge_annotations(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, t: f64) {
	if t < 0.01 {
		return;
	}
	let k = state.transform.k;

	let mut positions = std::collections::HashMap::new();
	state.graph.visit_nodes(|node| {
		positions.insert(node.index(), (node.x() as f64, node.y() as f64));
	});

	for edge in state.edges() {
		if !(state.is_hovered(edge.source) || state.is_hovered(edge.target)) {
			continue;
		}
		let summary = edge.tooltip.lines().next().unwrap_or("");
		if summary.is_empty() {
			continue;
		}
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&edge.source), positions.get(&edge.target))
		else {
			continue;
		};

		let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
		ctx.set_font(&format!("{}px sans-serif", 9.0 / k.max(0.5)));
		ctx.set_fill_style_str(&format!("rgba(255, 220, 150, {})", 0.9 * t));
		let _ = ctx.fill_text(summary, mx + 4.0 / k, my - 4.0 / k);
	}
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if has_highlight && state.is_highlighted(idx) {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64);
		let (alpha, radius) = (1.0 - 0.7 * t, NODE_RADIUS * (1.0 - 0.15 * t));

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.data.user_data.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha * 0.8));
		ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
		let _ = ctx.fill_text(&node.data.user_data.label, x + radius + 3.0, y + 3.0);
	});

	if !has_highlight {
		return;
	}

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if !state.is_highlighted(idx) {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64);
		let is_hovered = state.is_hovered(idx);
		let is_neighbor =
			state.hover.neighbors.contains(&idx) || state.hover.prev_neighbors.contains(&idx);

		let (radius, glow_radius) = if is_hovered {
			(
				NODE_RADIUS * (1.0 + 0.35 * t),
				NODE_RADIUS * (1.8 + 1.2 * t),
			)
		} else if is_neighbor {
			(NODE_RADIUS * (1.0 + 0.2 * t), NODE_RADIUS * (1.4 + 0.6 * t))
		} else {
			(NODE_RADIUS, 0.0)
		};

		if glow_radius > 0.0 && t > 0.01 {
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
				let alpha = if is_hovered { 0.35 * t } else { 0.2 * t };
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", alpha));
				let _ =
					gradient.add_color_stop(0.6, &format!("rgba(200, 220, 255, {})", alpha * 0.3));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.data.user_data.color);
		ctx.fill();

		if is_hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str("white");
		ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
		let _ = ctx.fill_text(&node.data.user_data.label, x + radius + 3.0, y + 3.0);
	});
}

/// Multi-line tooltip box next to the hovered node.
fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	if t < 0.05 {
		return;
	}
	let Some(idx) = state.hover.node.or(state.hover.prev_node) else {
		return;
	};

	let mut anchor = None;
	state.graph.visit_nodes(|node| {
		if node.index() == idx {
			anchor = Some((
				node.x() as f64,
				node.y() as f64,
				node.data.user_data.tooltip.clone(),
			));
		}
	});
	let Some((gx, gy, tooltip)) = anchor else {
		return;
	};
	if tooltip.is_empty() {
		return;
	}

	let lines: Vec<&str> = tooltip.lines().collect();
	let (font_size, line_height, padding) = (12.0, 16.0, 8.0);
	ctx.set_font(&format!("{font_size}px sans-serif"));

	let mut box_width: f64 = 0.0;
	for line in &lines {
		if let Ok(metrics) = ctx.measure_text(line) {
			box_width = box_width.max(metrics.width());
		}
	}
	box_width += padding * 2.0;
	let box_height = lines.len() as f64 * line_height + padding * 2.0;

	let (sx, sy) = state.graph_to_screen(gx, gy);
	let mut bx = sx + NODE_RADIUS * state.transform.k + 12.0;
	let mut by = sy - box_height / 2.0;
	// keep the box inside the canvas
	if bx + box_width > state.width {
		bx = sx - box_width - 12.0;
	}
	by = by.clamp(0.0, (state.height - box_height).max(0.0));

	ctx.set_global_alpha(t);
	ctx.set_fill_style_str("rgba(15, 18, 40, 0.92)");
	ctx.fill_rect(bx, by, box_width, box_height);
	ctx.set_stroke_style_str("rgba(100, 180, 255, 0.6)");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(bx, by, box_width, box_height);

	ctx.set_fill_style_str("#eef2ff");
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, bx + padding, by + padding + (i as f64 + 0.75) * line_height);
	}
	ctx.set_global_alpha(1.0);
}
