use super::types::Edge;

/// Click and hover state of the network. Only used for emphasis when
/// rendering; it never touches the simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	/// Clicked node, drives emphasis and the detail panel.
	pub selected: Option<String>,
	/// Node under the pointer.
	pub hovered: Option<String>,
}

impl Selection {
	/// Selects `id`, or clears the selection when `id` is already selected.
	pub fn on_node_click(&mut self, id: &str) {
		if self.selected.as_deref() == Some(id) {
			self.selected = None;
		} else {
			self.selected = Some(id.to_owned());
		}
	}

	/// Marks `id` as hovered.
	pub fn on_node_hover_start(&mut self, id: &str) {
		self.hovered = Some(id.to_owned());
	}

	/// Clears the hover.
	pub fn on_node_hover_end(&mut self) {
		self.hovered = None;
	}

	/// Drops both selection and hover.
	pub fn clear(&mut self) {
		self.selected = None;
		self.hovered = None;
	}

	/// Whether `id` is the selected node.
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}

	/// Whether `id` is under the pointer.
	pub fn is_hovered(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id)
	}

	/// Ids linked to the selected node, empty when nothing is selected.
	pub fn connected(&self, edges: &[Edge]) -> Vec<String> {
		self.selected
			.as_deref()
			.map(|id| connected_ids(edges, id))
			.unwrap_or_default()
	}
}

/// Opposite endpoints of every edge touching `id`, in edge order. Multi-edges
/// yield the same id more than once.
pub fn connected_ids(edges: &[Edge], id: &str) -> Vec<String> {
	edges
		.iter()
		.filter_map(|edge| edge.other(id))
		.map(str::to_owned)
		.collect()
}
