use std::collections::HashMap;

use super::interaction::Selection;
use super::types::{Edge, Node};

/// Position and size of one node for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
	/// Node id.
	pub id: String,
	/// Centre.
	pub x: f64,
	/// Centre, vertical.
	pub y: f64,
	/// Node radius.
	pub radius: f64,
}

impl NodeView {
	/// CSS `left` of the node's bounding box.
	pub fn left(&self) -> f64 {
		self.x - self.radius
	}

	/// CSS `top` of the node's bounding box.
	pub fn top(&self) -> f64 {
		self.y - self.radius
	}

	/// Diameter.
	pub fn size(&self) -> f64 {
		self.radius * 2.0
	}
}

impl From<&Node> for NodeView {
	fn from(node: &Node) -> Self {
		Self {
			id: node.id.clone(),
			x: node.x,
			y: node.y,
			radius: node.radius,
		}
	}
}

/// One view per node, in node order.
pub fn node_views(nodes: &[Node]) -> Vec<NodeView> {
	nodes.iter().map(NodeView::from).collect()
}

/// A line between two node centres.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSegment {
	/// Source centre.
	pub x1: f64,
	/// Source centre, vertical.
	pub y1: f64,
	/// Target centre.
	pub x2: f64,
	/// Target centre, vertical.
	pub y2: f64,
	/// Touches the selected node.
	pub highlighted: bool,
}

impl EdgeSegment {
	/// Pixels.
	pub fn stroke_width(&self) -> f64 {
		if self.highlighted { 2.0 } else { 1.0 }
	}

	/// Between 0 and 1.
	pub fn stroke_opacity(&self) -> f64 {
		if self.highlighted { 0.8 } else { 0.3 }
	}

	/// CSS colour.
	pub fn stroke(&self) -> &'static str {
		if self.highlighted {
			"var(--primary)"
		} else {
			"var(--border)"
		}
	}
}

/// Segments for every edge whose endpoints are both on screen. Edges that
/// reference a missing node are left out.
pub fn edge_segments(views: &[NodeView], edges: &[Edge], selection: &Selection) -> Vec<EdgeSegment> {
	let by_id: HashMap<&str, &NodeView> = views.iter().map(|v| (v.id.as_str(), v)).collect();
	edges
		.iter()
		.filter_map(|edge| {
			let source = by_id.get(edge.source.as_str())?;
			let target = by_id.get(edge.target.as_str())?;
			Some(EdgeSegment {
				x1: source.x,
				y1: source.y,
				x2: target.x,
				y2: target.y,
				highlighted: selection
					.selected
					.as_deref()
					.is_some_and(|id| edge.touches(id)),
			})
		})
		.collect()
}

/// How strongly a node is drawn given the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
	/// The selected node itself.
	Selected,
	/// Linked to the selected node.
	Connected,
	/// Nothing is selected.
	Normal,
	/// Something else is selected and this node is not linked to it.
	Dimmed,
}

impl Emphasis {
	/// Emphasis of node `id`; `connected` is the selected node's neighbours.
	pub fn of(id: &str, selection: &Selection, connected: &[String]) -> Self {
		match selection.selected.as_deref() {
			None => Emphasis::Normal,
			Some(selected) if selected == id => Emphasis::Selected,
			Some(_) if connected.iter().any(|c| c == id) => Emphasis::Connected,
			Some(_) => Emphasis::Dimmed,
		}
	}

	/// Selected or connected.
	pub fn is_highlighted(&self) -> bool {
		matches!(self, Emphasis::Selected | Emphasis::Connected)
	}

	/// Between 0 and 1.
	pub fn opacity(&self) -> f64 {
		if matches!(self, Emphasis::Dimmed) { 0.4 } else { 1.0 }
	}

	/// CSS `border` shorthand.
	pub fn border(&self) -> &'static str {
		match self {
			Emphasis::Selected => "2px solid var(--primary)",
			Emphasis::Connected => "2px solid var(--primary-light)",
			Emphasis::Normal | Emphasis::Dimmed => "1px solid var(--border)",
		}
	}

	/// CSS background colour.
	pub fn background(&self) -> &'static str {
		if self.is_highlighted() {
			"var(--card)"
		} else {
			"var(--card-foreground-muted)"
		}
	}

	/// Stacking and shadow classes.
	pub fn z_class(&self) -> &'static str {
		match self {
			Emphasis::Selected => "z-20 shadow-lg",
			Emphasis::Connected => "z-10 shadow-lg",
			Emphasis::Normal | Emphasis::Dimmed => "z-0 shadow-md",
		}
	}
}
