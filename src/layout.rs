//! Node placement algorithms.
//!
//! Every layout returns one world-space position per node, centred on the
//! origin. Only [`Layout::Cose`] keeps the physics simulation running after
//! placement; the others are static.

use std::collections::VecDeque;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// Spacing between neighbouring nodes in static layouts, in world units.
const SPACING: f64 = 60.0;

/// Available layout algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
	/// Rows and columns.
	#[default]
	Grid,
	/// Deterministic scatter.
	Random,
	/// Evenly spaced on one circle.
	Circle,
	/// Circle seed, then the force simulation.
	Cose,
	/// Rings by degree, best connected in the middle.
	Concentric,
	/// Tree rows by distance from each component's hub.
	Breadthfirst,
}

impl Layout {
	/// Every layout, in picker order.
	pub const ALL: [Layout; 6] = [
		Layout::Grid,
		Layout::Random,
		Layout::Circle,
		Layout::Cose,
		Layout::Concentric,
		Layout::Breadthfirst,
	];

	/// Lowercase name used in config and the picker.
	pub fn name(self) -> &'static str {
		match self {
			Layout::Grid => "grid",
			Layout::Random => "random",
			Layout::Circle => "circle",
			Layout::Cose => "cose",
			Layout::Concentric => "concentric",
			Layout::Breadthfirst => "breadthfirst",
		}
	}

	/// Capitalized name for the layout picker.
	pub fn label(self) -> String {
		let name = self.name();
		let mut chars = name.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		}
	}

	/// Whether the force simulation keeps running after placement.
	pub fn is_physics(self) -> bool {
		matches!(self, Layout::Cose)
	}

	/// Place `count` nodes connected by `edges` (pairs of node positions in
	/// `0..count`; out-of-range pairs are ignored).
	pub fn positions(self, count: usize, edges: &[(usize, usize)]) -> Vec<(f64, f64)> {
		if count == 0 {
			return Vec::new();
		}
		match self {
			Layout::Grid => grid(count),
			Layout::Random => random(count),
			Layout::Circle | Layout::Cose => circle(count),
			Layout::Concentric => concentric(count, edges),
			Layout::Breadthfirst => breadthfirst(count, edges),
		}
	}
}

impl fmt::Display for Layout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Error returned when parsing an unknown layout name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout `{0}`")]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
	type Err = UnknownLayout;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim().to_ascii_lowercase();
		Layout::ALL
			.into_iter()
			.find(|l| l.name() == wanted)
			.ok_or_else(|| UnknownLayout(s.to_string()))
	}
}

/// Deterministic pseudo-random value in `[0, 1)`.
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

fn grid(count: usize) -> Vec<(f64, f64)> {
	let cols = (count as f64).sqrt().ceil() as usize;
	let rows = count.div_ceil(cols);
	let (ox, oy) = (
		(cols - 1) as f64 * SPACING / 2.0,
		(rows - 1) as f64 * SPACING / 2.0,
	);
	(0..count)
		.map(|i| {
			(
				(i % cols) as f64 * SPACING - ox,
				(i / cols) as f64 * SPACING - oy,
			)
		})
		.collect()
}

fn random(count: usize) -> Vec<(f64, f64)> {
	let side = (count as f64).sqrt().max(1.0) * SPACING * 1.5;
	(0..count)
		.map(|i| {
			let seed = i as f64 + 1.0;
			(
				(pseudo_random(seed * 1.1) - 0.5) * side,
				(pseudo_random(seed * 2.3) - 0.5) * side,
			)
		})
		.collect()
}

fn circle_radius(count: usize) -> f64 {
	(count as f64 * SPACING / TAU).max(100.0)
}

fn circle(count: usize) -> Vec<(f64, f64)> {
	let radius = circle_radius(count);
	(0..count)
		.map(|i| {
			let angle = i as f64 * TAU / count as f64;
			(radius * angle.cos(), radius * angle.sin())
		})
		.collect()
}

fn degrees(count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
	let mut degree = vec![0; count];
	for &(a, b) in edges {
		if a < count && b < count {
			degree[a] += 1;
			degree[b] += 1;
		}
	}
	degree
}

/// Highest degree in the middle, lower degrees on successively wider rings.
fn concentric(count: usize, edges: &[(usize, usize)]) -> Vec<(f64, f64)> {
	let degree = degrees(count, edges);
	let mut order: Vec<usize> = (0..count).collect();
	order.sort_by(|&a, &b| degree[b].cmp(&degree[a]).then(a.cmp(&b)));

	let mut positions = vec![(0.0, 0.0); count];
	let mut placed = 0;
	let mut ring = 0usize;
	while placed < count {
		// Ring 0 holds a single node; ring r holds as many as fit its circumference.
		let capacity = if ring == 0 {
			1
		} else {
			(TAU * ring as f64).floor() as usize
		};
		let members = &order[placed..(placed + capacity).min(count)];
		let radius = ring as f64 * SPACING;
		for (slot, &node) in members.iter().enumerate() {
			let angle = slot as f64 * TAU / members.len() as f64;
			positions[node] = (radius * angle.cos(), radius * angle.sin());
		}
		placed += members.len();
		ring += 1;
	}
	positions
}

/// Per component, BFS from the best-connected node; depth becomes the row.
fn breadthfirst(count: usize, edges: &[(usize, usize)]) -> Vec<(f64, f64)> {
	let degree = degrees(count, edges);
	let mut adjacency = vec![Vec::new(); count];
	for &(a, b) in edges {
		if a < count && b < count && a != b {
			adjacency[a].push(b);
			adjacency[b].push(a);
		}
	}

	let mut roots: Vec<usize> = (0..count).collect();
	roots.sort_by(|&a, &b| degree[b].cmp(&degree[a]).then(a.cmp(&b)));

	let mut depth = vec![usize::MAX; count];
	// BFS levels per component
	let mut components: Vec<Vec<Vec<usize>>> = Vec::new();
	for root in roots {
		if depth[root] != usize::MAX {
			continue;
		}
		let mut levels: Vec<Vec<usize>> = Vec::new();
		let mut queue = VecDeque::from([root]);
		depth[root] = 0;
		while let Some(node) = queue.pop_front() {
			let d = depth[node];
			if levels.len() <= d {
				levels.push(Vec::new());
			}
			levels[d].push(node);
			for &next in &adjacency[node] {
				if depth[next] == usize::MAX {
					depth[next] = d + 1;
					queue.push_back(next);
				}
			}
		}
		components.push(levels);
	}

	let total_width: usize = components
		.iter()
		.map(|levels| levels.iter().map(Vec::len).max().unwrap_or(1))
		.sum();
	let max_depth = components.iter().map(Vec::len).max().unwrap_or(1);

	let mut positions = vec![(0.0, 0.0); count];
	let mut column = 0usize;
	for levels in &components {
		let width = levels.iter().map(Vec::len).max().unwrap_or(1);
		for (d, level) in levels.iter().enumerate() {
			// Centre each level within its component's column span.
			let offset = (width - level.len()) as f64 / 2.0;
			for (slot, &node) in level.iter().enumerate() {
				positions[node] = (
					(column as f64 + offset + slot as f64) * SPACING
						- (total_width - 1) as f64 * SPACING / 2.0,
					d as f64 * SPACING * 1.5 - (max_depth - 1) as f64 * SPACING * 0.75,
				);
			}
		}
		column += width;
	}
	positions
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edges() -> Vec<(usize, usize)> {
		vec![(1, 0), (2, 0), (0, 3), (4, 5), (6, 6)]
	}

	#[test]
	fn names_round_trip_through_parse() {
		for layout in Layout::ALL {
			assert_eq!(layout.name().parse::<Layout>(), Ok(layout));
		}
		assert_eq!(" Circle ".parse::<Layout>(), Ok(Layout::Circle));
		assert!("spiral".parse::<Layout>().is_err());
		assert_eq!(Layout::Breadthfirst.label(), "Breadthfirst");
	}

	#[test]
	fn only_cose_runs_physics() {
		let physics: Vec<Layout> = Layout::ALL.into_iter().filter(|l| l.is_physics()).collect();
		assert_eq!(physics, vec![Layout::Cose]);
	}

	#[test]
	fn every_layout_places_every_node() {
		for layout in Layout::ALL {
			for count in [0, 1, 2, 7, 30] {
				let edges: Vec<(usize, usize)> =
					edges().into_iter().filter(|&(a, b)| a < count && b < count).collect();
				let positions = layout.positions(count, &edges);
				assert_eq!(positions.len(), count, "{layout} with {count} nodes");
				assert!(
					positions.iter().all(|(x, y)| x.is_finite() && y.is_finite()),
					"{layout} produced non-finite positions"
				);
			}
		}
	}

	#[test]
	fn static_layouts_do_not_stack_nodes() {
		let edges = edges();
		for layout in [Layout::Grid, Layout::Circle, Layout::Concentric, Layout::Breadthfirst] {
			let positions = layout.positions(7, &edges);
			for i in 0..positions.len() {
				for j in (i + 1)..positions.len() {
					let (dx, dy) = (
						positions[i].0 - positions[j].0,
						positions[i].1 - positions[j].1,
					);
					assert!((dx * dx + dy * dy).sqrt() > 1.0, "{layout}: {i} and {j} overlap");
				}
			}
		}
	}

	#[test]
	fn concentric_puts_best_connected_node_in_the_middle() {
		let positions = Layout::Concentric.positions(7, &edges());
		assert_eq!(positions[0], (0.0, 0.0));
	}

	#[test]
	fn breadthfirst_rows_follow_depth() {
		let positions = Layout::Breadthfirst.positions(7, &edges());
		// Node 0 is the root of its component; 1, 2 and 3 sit one row below.
		for child in [1, 2, 3] {
			assert!(positions[child].1 > positions[0].1);
			assert_eq!(positions[child].1, positions[1].1);
		}
	}

	#[test]
	fn random_is_deterministic() {
		assert_eq!(Layout::Random.positions(12, &[]), Layout::Random.positions(12, &[]));
	}
}
