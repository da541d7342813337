//! Canvas rendering for the force graph.
//!
//! Rendering uses multiple passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Bout edges, with the selected bout last (world space)
//! 3. Dimmed fighters, then highlighted fighters and rings on top

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{EdgeInfo, ForceGraphState, NodeInfo};
use super::theme::{Color, Theme};

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	let positions = state.positions();
	draw_edges(state, ctx, &scale, theme, &positions);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = theme
		.background
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.ok()
		})
		.flatten();

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&theme.background.color.to_css()),
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let Ok(gradient) = ctx.create_radial_gradient(
		state.width / 2.0,
		state.height / 2.0,
		state.width.min(state.height) * 0.3,
		state.width / 2.0,
		state.height / 2.0,
		state.width.max(state.height) * 0.7,
	) else {
		return;
	};

	let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
	let _ = gradient.add_color_stop(
		1.0,
		&format!("rgba(0, 0, 0, {})", theme.background.vignette),
	);

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	positions: &HashMap<DefaultNodeIdx, (f64, f64)>,
) {
	let selected = state.selected_record();
	let max_t = smooth_step(state.highlight.max_intensity());

	for edge in state.edges().iter().filter(|e| Some(e.record) != selected) {
		let edge_t = smooth_step(state.highlight.edge_intensity(edge.source, edge.target));
		let (alpha, width) = if edge_t > 0.01 {
			(0.7 + 0.3 * edge_t, scale.edge_line_width * (1.0 + 0.4 * edge_t))
		} else if max_t > 0.01 {
			(0.7 - 0.5 * max_t, scale.edge_line_width * (1.0 - 0.3 * max_t))
		} else {
			(0.7, scale.edge_line_width)
		};
		let color = if edge.title {
			theme.edge.title_color
		} else {
			theme.edge.color
		};
		draw_edge(ctx, scale, edge, positions, color, alpha, width);
	}

	if let Some(edge) = state.edges().iter().find(|e| Some(e.record) == selected) {
		draw_edge(
			ctx,
			scale,
			edge,
			positions,
			theme.edge.selected_color,
			1.0,
			scale.selected_line_width,
		);
	}

	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

/// One bout line. Decided bouts end in an arrow at the winner; undecided
/// bouts are dashed with no arrow.
fn draw_edge(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	edge: &EdgeInfo,
	positions: &HashMap<DefaultNodeIdx, (f64, f64)>,
	color: Color,
	alpha: f64,
	width: f64,
) {
	let (Some(&(x1, y1)), Some(&(x2, y2))) =
		(positions.get(&edge.source), positions.get(&edge.target))
	else {
		return;
	};
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	let show_arrow = edge.decided && !scale.cull_arrows;
	let end_gap = if show_arrow {
		scale.node_radius + scale.arrow_size
	} else {
		scale.node_radius
	};

	ctx.set_stroke_style_str(&color.with_alpha(alpha * color.a).to_css());
	ctx.set_line_width(width);

	let effective_gap = scale.dash_pattern.1 * scale.dash_alpha;
	if !edge.decided && effective_gap > 0.1 {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(scale.dash_pattern.0),
			&JsValue::from_f64(effective_gap),
		));
	} else {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}

	ctx.begin_path();
	ctx.move_to(x1 + ux * scale.node_radius, y1 + uy * scale.node_radius);
	ctx.line_to(x2 - ux * end_gap, y2 - uy * end_gap);
	ctx.stroke();

	if show_arrow {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(
			&color
				.with_alpha(alpha * scale.arrow_alpha * color.a)
				.to_css(),
		);

		let (tip_x, tip_y) = (x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);
		let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
		let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);

		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let has_highlight = max_t > 0.01;
	let (dim_alpha, dim_radius) = if has_highlight {
		(1.0 - 0.7 * max_t, 1.0 - 0.15 * max_t)
	} else {
		(1.0, 1.0)
	};

	// Pass 1: non-highlighted nodes
	state.graph.visit_nodes(|node| {
		if state.highlight.node_intensity(node.index()) > 0.001 {
			return;
		}
		draw_node(ctx, node, scale, theme, dim_alpha, dim_radius, scale.show_labels);
	});

	// Pass 2: highlighted/transitioning nodes on top
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let node_t = state.highlight.node_intensity(idx);
		if node_t <= 0.001 {
			return;
		}

		let eased_t = smooth_step(node_t);
		let ring_t = smooth_step(state.highlight.ring_intensity(idx));
		let highlight_radius = 1.0 + 0.25 * eased_t + 0.15 * eased_t * ring_t;
		let alpha = dim_alpha + (1.0 - dim_alpha) * eased_t;
		let radius_mult = dim_radius + (highlight_radius - dim_radius) * eased_t;

		draw_node(ctx, node, scale, theme, alpha, radius_mult, true);

		if ring_t > 0.01 {
			let (x, y) = (node.x() as f64, node.y() as f64);
			let radius = scale.node_radius * radius_mult * node.data.user_data.size;
			let ring = theme.node.selected_ring;

			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&ring.with_alpha(ring.a * ring_t).to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();

			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset * 2.5, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&ring.with_alpha(ring.a * 0.35 * ring_t).to_css());
			ctx.set_line_width(scale.ring_width * 0.5);
			ctx.stroke();
		}
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
	alpha: f64,
	radius_mult: f64,
	show_label: bool,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let info = &node.data.user_data;
	let radius = scale.node_radius * radius_mult * info.size;

	ctx.set_global_alpha(alpha);

	let gradient = theme
		.node
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
				.ok()
		})
		.flatten();

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	match gradient {
		Some(gradient) => {
			let base_color = Color::parse(&info.color);
			let _ = gradient.add_color_stop(0.0, &base_color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &base_color.to_css());
			let _ = gradient.add_color_stop(1.0, &base_color.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&info.color),
	}
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	ctx.set_global_alpha(1.0);

	if let Some(label) = info.label.as_ref().filter(|_| show_label && alpha > 0.5) {
		ctx.set_global_alpha(alpha * 0.9);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		ctx.set_font(&scale.label_font);
		let _ = ctx.fill_text(label, x + radius + 4.0, y + 3.0);
		ctx.set_global_alpha(1.0);
	}
}
