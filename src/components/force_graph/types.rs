//! Payload types crossing the app/renderer boundary.

/// Node handed to the canvas: id plus display label and hover tooltip.
#[derive(Clone, Debug)]
pub struct GraphNode {
	/// Stable node key, reported back on click.
	pub id: String,
	/// Text drawn next to the node.
	pub label: String,
	/// Multi-line text shown while the node is hovered.
	pub tooltip: String,
	/// Color-grouping bucket; nodes sharing a group share a palette color.
	pub group: Option<u32>,
}

/// Undirected link between two node ids, carrying its own hover text.
#[derive(Clone, Debug)]
pub struct GraphLink {
	/// One endpoint node id.
	pub source: String,
	/// Other endpoint node id.
	pub target: String,
	/// Hover text for the link.
	pub tooltip: String,
}

/// Complete graph payload for the canvas component.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	/// All nodes.
	pub nodes: Vec<GraphNode>,
	/// All links; endpoints must name node ids or the link is ignored.
	pub links: Vec<GraphLink>,
}
