//! Derived node/edge structure handed to the renderer.

use indexmap::IndexMap;
use log::debug;

use super::index::DrugIndex;
use super::model::{Drug, Interaction};

/// One renderable node, keyed by drug id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	/// Drug id.
	pub id: String,
	/// Display label (the drug name).
	pub label: String,
	/// Multi-line hover text.
	pub tooltip: String,
	/// Therapeutic class, used by the renderer for color grouping.
	pub class: String,
}

/// One renderable edge between two drug ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Endpoint id as written in the interaction row.
	pub source: String,
	/// Other endpoint id as written in the interaction row.
	pub target: String,
	/// Hover text composed from type, severity and notes.
	pub tooltip: String,
}

/// The derived graph: one node per drug, one edge per valid interaction,
/// collapsed to at most one edge per unordered endpoint pair.
///
/// Iteration order over nodes and edges is insertion order, so rendering is
/// deterministic for a given pair of source tables.
#[derive(Clone, Debug, Default)]
pub struct DrugGraph {
	nodes: IndexMap<String, Node>,
	edges: IndexMap<(String, String), Edge>,
}

fn edge_key(a: &str, b: &str) -> (String, String) {
	if a <= b {
		(a.to_string(), b.to_string())
	} else {
		(b.to_string(), a.to_string())
	}
}

impl DrugGraph {
	/// Fold both tables into a graph.
	///
	/// Interactions whose endpoints are not both present in the drugs table
	/// are skipped without error: interaction datasets routinely reference
	/// drugs outside the loaded table. A later interaction between an
	/// already-connected pair replaces that edge's attributes rather than
	/// adding a parallel edge.
	pub fn build(drugs: &[Drug], interactions: &[Interaction], index: &DrugIndex) -> Self {
		let mut nodes = IndexMap::with_capacity(drugs.len());
		for drug in drugs {
			nodes.insert(
				drug.id.clone(),
				Node {
					id: drug.id.clone(),
					label: drug.name.clone(),
					tooltip: format!(
						"{}\n{}\ntargets: {}",
						drug.name, drug.drug_class, drug.targets
					),
					class: drug.drug_class.clone(),
				},
			);
		}

		let mut edges: IndexMap<(String, String), Edge> = IndexMap::new();
		let mut skipped = 0usize;
		for interaction in interactions {
			if !index.contains(&interaction.source) || !index.contains(&interaction.target) {
				skipped += 1;
				continue;
			}
			edges.insert(
				edge_key(&interaction.source, &interaction.target),
				Edge {
					source: interaction.source.clone(),
					target: interaction.target.clone(),
					tooltip: format!(
						"{} ({})\n{}",
						interaction.kind, interaction.severity, interaction.notes
					),
				},
			);
		}
		if skipped > 0 {
			debug!("skipped {skipped} interactions with unknown endpoints");
		}

		Self { nodes, edges }
	}

	/// Nodes in drugs-table order.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.nodes.values()
	}

	/// Edges in first-seen interaction order.
	pub fn edges(&self) -> impl Iterator<Item = &Edge> {
		self.edges.values()
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of collapsed edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Whether an id is present as a node.
	pub fn has_node(&self, id: &str) -> bool {
		self.nodes.contains_key(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn drug(id: &str, name: &str, class: &str) -> Drug {
		Drug {
			id: id.into(),
			name: name.into(),
			drug_class: class.into(),
			..Drug::default()
		}
	}

	fn interaction(source: &str, target: &str, kind: &str, severity: &str, notes: &str) -> Interaction {
		Interaction {
			source: source.into(),
			target: target.into(),
			kind: kind.into(),
			severity: severity.into(),
			notes: notes.into(),
		}
	}

	fn aspirin_warfarin() -> (Vec<Drug>, Vec<Interaction>) {
		(
			vec![
				drug("A1", "Aspirin", "NSAID"),
				drug("W1", "Warfarin", "Anticoagulant"),
			],
			vec![interaction(
				"A1",
				"W1",
				"synergistic",
				"high",
				"bleeding risk",
			)],
		)
	}

	#[test]
	fn two_nodes_one_edge() {
		let (drugs, interactions) = aspirin_warfarin();
		let index = DrugIndex::build(&drugs);
		let graph = DrugGraph::build(&drugs, &interactions, &index);
		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.edge_count(), 1);
		let edge = graph.edges().next().unwrap();
		assert_eq!(edge.source, "A1");
		assert_eq!(edge.target, "W1");
		assert!(edge.tooltip.contains("synergistic (high)"));
	}

	#[test]
	fn unknown_endpoint_produces_no_edge() {
		let (drugs, mut interactions) = aspirin_warfarin();
		interactions.push(interaction("A1", "Z9", "unknown", "low", ""));
		interactions.push(interaction("Z9", "W1", "unknown", "low", ""));
		let index = DrugIndex::build(&drugs);
		let graph = DrugGraph::build(&drugs, &interactions, &index);
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn no_dangling_edges() {
		let (drugs, mut interactions) = aspirin_warfarin();
		interactions.push(interaction("Z9", "Z8", "ghost", "", ""));
		let index = DrugIndex::build(&drugs);
		let graph = DrugGraph::build(&drugs, &interactions, &index);
		for edge in graph.edges() {
			assert!(graph.has_node(&edge.source));
			assert!(graph.has_node(&edge.target));
		}
	}

	#[test]
	fn same_pair_collapses_to_last_attributes() {
		let (drugs, mut interactions) = aspirin_warfarin();
		// reversed orientation still hits the same unordered pair
		interactions.push(interaction("W1", "A1", "antagonistic", "low", "updated"));
		let index = DrugIndex::build(&drugs);
		let graph = DrugGraph::build(&drugs, &interactions, &index);
		assert_eq!(graph.edge_count(), 1);
		let edge = graph.edges().next().unwrap();
		assert_eq!(edge.source, "W1");
		assert!(edge.tooltip.contains("antagonistic (low)"));
	}

	#[test]
	fn node_tooltip_carries_name_and_class() {
		let (drugs, interactions) = aspirin_warfarin();
		let index = DrugIndex::build(&drugs);
		let graph = DrugGraph::build(&drugs, &interactions, &index);
		let node = graph.nodes().next().unwrap();
		assert!(node.tooltip.starts_with("Aspirin\nNSAID"));
	}
}
