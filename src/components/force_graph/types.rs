//! Graph data structures for input to the force graph component.

/// A fighter in the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
	/// Display label drawn next to the node.
	pub label: Option<String>,
	/// Style class, the fighter's most frequent weight class. Picks the node
	/// color; without one the theme palette is used.
	pub group: Option<String>,
}

/// A directed bout edge from loser to winner.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Row position of the bout in the loaded dataset.
	pub record: usize,
	/// False for draws and no contests; the direction is then arbitrary.
	pub decided: bool,
	/// Championship bout.
	pub title: bool,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Fighters.
	pub nodes: Vec<GraphNode>,
	/// Bouts.
	pub links: Vec<GraphLink>,
}

/// What the user last clicked on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
	/// A fighter, by node id.
	Fighter(String),
	/// A bout, by dataset row position.
	Bout(usize),
}
