//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-fighter metadata, the
//! bout list, view transforms for pan/zoom, the active layout and highlight
//! state for hover and selection.

use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::Theme;
use super::types::{GraphData, Selection};
use crate::layout::Layout;

/// Seconds a layout change takes to settle.
const TRANSITION_SECS: f64 = 0.6;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeInfo {
	/// Fighter name, the node id.
	pub(crate) id: String,
	pub(crate) label: Option<String>,
	pub(crate) color: String,
	/// Size multiplier (1.0 = normal, >1.0 = more bouts in view)
	pub(crate) size: f64,
}

/// One bout between two simulated nodes.
#[derive(Clone, Debug)]
pub(crate) struct EdgeInfo {
	pub(crate) source: DefaultNodeIdx,
	pub(crate) target: DefaultNodeIdx,
	/// Row position of the bout in the dataset.
	pub(crate) record: usize,
	pub(crate) decided: bool,
	pub(crate) title: bool,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub(crate) struct ViewTransform {
	pub(crate) x: f64,
	pub(crate) y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub(crate) k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub(crate) struct DragState {
	pub(crate) active: bool,
	pub(crate) node_idx: Option<DefaultNodeIdx>,
	pub(crate) start_x: f64,
	pub(crate) start_y: f64,
	pub(crate) node_start_x: f32,
	pub(crate) node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub(crate) struct PanState {
	pub(crate) active: bool,
	pub(crate) start_x: f64,
	pub(crate) start_y: f64,
	pub(crate) transform_start_x: f64,
	pub(crate) transform_start_y: f64,
}

/// Pointer travel (screen pixels) beyond which a press is a drag, not a click.
pub(crate) const CLICK_SLOP: f64 = 4.0;

/// Smooth highlight transitions with per-node intensity tracking.
///
/// The focus is the hovered fighter, or else the selected one. The focus and
/// its opponents fade in; everything else fades out.
#[derive(Clone, Debug, Default)]
pub(crate) struct HighlightState {
	pub(crate) hovered_node: Option<DefaultNodeIdx>,
	pinned_node: Option<DefaultNodeIdx>,
	target_set: HashSet<DefaultNodeIdx>,
	/// Per-node highlight intensity (0.0 = not highlighted, 1.0 = fully highlighted)
	node_intensity: HashMap<DefaultNodeIdx, f64>,
	/// Ring intensity around the focused node
	ring_intensity: HashMap<DefaultNodeIdx, f64>,
	cached_max: f64,
}

impl HighlightState {
	pub(crate) fn set_hover(&mut self, node: Option<DefaultNodeIdx>, edges: &[EdgeInfo]) {
		if self.hovered_node == node {
			return;
		}
		self.hovered_node = node;
		self.retarget(edges);
	}

	/// Keep `node` highlighted while nothing is hovered.
	pub(crate) fn pin(&mut self, node: Option<DefaultNodeIdx>, edges: &[EdgeInfo]) {
		self.pinned_node = node;
		self.retarget(edges);
	}

	pub(crate) fn focus(&self) -> Option<DefaultNodeIdx> {
		self.hovered_node.or(self.pinned_node)
	}

	fn retarget(&mut self, edges: &[EdgeInfo]) {
		self.target_set.clear();
		if let Some(idx) = self.focus() {
			self.target_set.insert(idx);
			for edge in edges {
				if edge.source == idx {
					self.target_set.insert(edge.target);
				} else if edge.target == idx {
					self.target_set.insert(edge.source);
				}
			}
		}
	}

	/// Exponential smoothing: value += (target - value) * (1 - e^(-speed * dt))
	pub(crate) fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 6.0;
		const FADE_OUT_SPEED: f64 = 4.0;

		let fade_in_factor = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out_decay = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target_set {
			let intensity = self.node_intensity.entry(idx).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade_in_factor;
		}

		let focus = self.focus();
		if let Some(idx) = focus {
			let intensity = self.ring_intensity.entry(idx).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade_in_factor;
		}

		let mut new_max: f64 = 0.0;
		self.node_intensity.retain(|idx, intensity| {
			if !self.target_set.contains(idx) {
				*intensity *= fade_out_decay;
			}
			new_max = new_max.max(*intensity);
			*intensity > 0.005
		});
		self.ring_intensity.retain(|idx, intensity| {
			if focus != Some(*idx) {
				*intensity *= fade_out_decay;
			}
			*intensity > 0.005
		});

		self.cached_max = new_max;
	}

	pub(crate) fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.node_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	pub(crate) fn ring_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.ring_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Geometric mean of the endpoint intensities.
	pub(crate) fn edge_intensity(&self, idx1: DefaultNodeIdx, idx2: DefaultNodeIdx) -> f64 {
		(self.node_intensity(idx1) * self.node_intensity(idx2)).sqrt()
	}

	/// Maximum intensity of any node, used to dim everything else.
	pub(crate) fn max_intensity(&self) -> f64 {
		self.cached_max
	}
}

/// Animated move of every node from its old position to its new layout slot.
#[derive(Clone, Debug)]
struct LayoutTransition {
	from: HashMap<DefaultNodeIdx, (f32, f32)>,
	to: HashMap<DefaultNodeIdx, (f32, f32)>,
	elapsed: f64,
}

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Distance from point `p` to the segment `a`-`b`.
pub(crate) fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
	let (dx, dy) = (b.0 - a.0, b.1 - a.1);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq < 1e-12 {
		0.0
	} else {
		(((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
	};
	let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
	((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// Core graph state combining physics simulation with interaction and highlight tracking.
///
/// Rebuilt whenever the filtered graph changes, then mutated each frame by
/// the animation loop.
pub(crate) struct ForceGraphState {
	pub(crate) graph: ForceGraph<NodeInfo, ()>,
	pub(crate) transform: ViewTransform,
	pub(crate) drag: DragState,
	pub(crate) pan: PanState,
	pub(crate) highlight: HighlightState,
	pub(crate) width: f64,
	pub(crate) height: f64,
	pub(crate) layout: Layout,
	selection: Option<Selection>,
	/// Simulation indices in input node order.
	nodes: Vec<DefaultNodeIdx>,
	edges: Vec<EdgeInfo>,
	transition: Option<LayoutTransition>,
}

impl ForceGraphState {
	pub(crate) fn new(data: &GraphData, width: f64, height: f64, theme: &Theme, layout: Layout) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut nodes = Vec::with_capacity(data.nodes.len());
		let mut edges = Vec::with_capacity(data.links.len());

		// Bouts per fighter in view, for node sizing
		let mut bout_counts: HashMap<&str, usize> = HashMap::new();
		for link in &data.links {
			*bout_counts.entry(&link.source).or_insert(0) += 1;
			*bout_counts.entry(&link.target).or_insert(0) += 1;
		}
		let max_bouts = bout_counts.values().copied().max().unwrap_or(1).max(1);

		for (i, node) in data.nodes.iter().enumerate() {
			let color = theme.class_color(node.group.as_deref(), i).to_css();
			let bouts = bout_counts.get(node.id.as_str()).copied().unwrap_or(0);
			let size = 0.8 + 0.8 * (bouts as f64 / max_bouts as f64).sqrt();

			let idx = graph.add_node(NodeData {
				x: 0.0,
				y: 0.0,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color,
					size,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
			nodes.push(idx);
		}

		for link in &data.links {
			if let (Some(&source), Some(&target)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				graph.add_edge(source, target, EdgeData::default());
				edges.push(EdgeInfo {
					source,
					target,
					record: link.record,
					decided: link.decided,
					title: link.title,
				});
			}
		}

		let mut state = Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			layout,
			selection: None,
			nodes,
			edges,
			transition: None,
		};
		state.apply_layout(layout, false);
		state
	}

	pub(crate) fn edges(&self) -> &[EdgeInfo] {
		&self.edges
	}

	pub(crate) fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Current world position of every node.
	pub(crate) fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::with_capacity(self.nodes.len());
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	/// Re-position nodes with `layout`, optionally animating the move.
	pub(crate) fn apply_layout(&mut self, layout: Layout, animate: bool) {
		self.layout = layout;
		let index_of: HashMap<DefaultNodeIdx, usize> =
			self.nodes.iter().enumerate().map(|(i, &idx)| (idx, i)).collect();
		let pairs: Vec<(usize, usize)> = self
			.edges
			.iter()
			.filter_map(|e| Some((*index_of.get(&e.source)?, *index_of.get(&e.target)?)))
			.collect();

		let to: HashMap<DefaultNodeIdx, (f32, f32)> = layout
			.positions(self.nodes.len(), &pairs)
			.into_iter()
			.zip(&self.nodes)
			.map(|((x, y), &idx)| (idx, (x as f32, y as f32)))
			.collect();

		self.graph.visit_nodes_mut(|node| node.data.is_anchor = false);
		self.fit_to(to.values().map(|&(x, y)| (x as f64, y as f64)));

		if animate && !to.is_empty() {
			let from = self
				.positions()
				.into_iter()
				.map(|(idx, (x, y))| (idx, (x as f32, y as f32)))
				.collect();
			self.transition = Some(LayoutTransition {
				from,
				to,
				elapsed: 0.0,
			});
		} else {
			self.transition = None;
			self.place(&to);
		}
	}

	fn place(&mut self, positions: &HashMap<DefaultNodeIdx, (f32, f32)>) {
		self.graph.visit_nodes_mut(|node| {
			if let Some(&(x, y)) = positions.get(&node.index()) {
				node.data.x = x;
				node.data.y = y;
			}
		});
	}

	/// Centre the view on `points` and zoom so they fit with a margin.
	fn fit_to(&mut self, points: impl Iterator<Item = (f64, f64)>) {
		let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
		let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
		for (x, y) in points {
			min_x = min_x.min(x);
			min_y = min_y.min(y);
			max_x = max_x.max(x);
			max_y = max_y.max(y);
		}
		if !min_x.is_finite() {
			self.transform = ViewTransform {
				x: self.width / 2.0,
				y: self.height / 2.0,
				k: 1.0,
			};
			return;
		}

		const MARGIN: f64 = 80.0;
		let span_x = (max_x - min_x).max(1.0) + 2.0 * MARGIN;
		let span_y = (max_y - min_y).max(1.0) + 2.0 * MARGIN;
		let k = (self.width / span_x).min(self.height / span_y).clamp(0.1, 1.5);
		let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	pub(crate) fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub(crate) fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let node_hit_radius = scale.hit_radius * node.data.user_data.size;
			if (dx * dx + dy * dy).sqrt() < node_hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Index into [`Self::edges`] of the bout nearest to a screen point,
	/// if within click tolerance.
	pub(crate) fn edge_at_position(&self, sx: f64, sy: f64, config: &ScaleConfig) -> Option<usize> {
		let point = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let positions = self.positions();
		self.edges
			.iter()
			.enumerate()
			.filter_map(|(i, edge)| {
				let a = *positions.get(&edge.source)?;
				let b = *positions.get(&edge.target)?;
				Some((i, segment_distance(point, a, b)))
			})
			.filter(|&(_, distance)| distance <= scale.edge_hit)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	pub(crate) fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	fn node_index(&self, id: &str) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				found = Some(node.index());
			}
		});
		found
	}

	/// Selected bout's row position, if a bout is selected.
	pub(crate) fn selected_record(&self) -> Option<usize> {
		match self.selection {
			Some(Selection::Bout(record)) => Some(record),
			_ => None,
		}
	}

	pub(crate) fn select(&mut self, selection: Option<Selection>) {
		let pinned = match &selection {
			Some(Selection::Fighter(id)) => self.node_index(id),
			_ => None,
		};
		self.highlight.pin(pinned, &self.edges);
		self.selection = selection;
	}

	pub(crate) fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.edges);
	}

	pub(crate) fn tick(&mut self, dt: f32) {
		self.highlight.tick(dt as f64);

		if let Some(transition) = &mut self.transition {
			transition.elapsed += dt as f64;
			let t = smooth_step((transition.elapsed / TRANSITION_SECS).min(1.0)) as f32;
			let done = transition.elapsed >= TRANSITION_SECS;
			let frame: HashMap<DefaultNodeIdx, (f32, f32)> = transition
				.to
				.iter()
				.map(|(idx, &(tx, ty))| {
					let (fx, fy) = transition.from.get(idx).copied().unwrap_or((tx, ty));
					(*idx, (fx + (tx - fx) * t, fy + (ty - fy) * t))
				})
				.collect();
			if done {
				self.transition = None;
			}
			self.place(&frame);
		} else if self.layout.is_physics() && !self.drag.active {
			self.graph.update(dt);
		}
	}

	pub(crate) fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}
