//! One-shot load cache owning the tables and everything derived from them.

use super::graph::DrugGraph;
use super::index::DrugIndex;
use super::loader::{self, LoadError};
use super::model::{Drug, Interaction};
use super::query::{self, DrugDetail};

/// Loaded tables plus the derived index and graph.
///
/// Built once per pair of sources and then read-only, so every query in a
/// session reuses the same derived state instead of re-parsing the CSVs.
/// The UI owns one of these explicitly; there is no ambient global.
#[derive(Clone, Debug)]
pub struct DrugStore {
	drugs: Vec<Drug>,
	interactions: Vec<Interaction>,
	index: DrugIndex,
	graph: DrugGraph,
}

impl DrugStore {
	/// Run loader, index builder and graph builder once over both sources.
	pub fn load(drugs_csv: &str, interactions_csv: &str) -> Result<Self, LoadError> {
		let (drugs, interactions) = loader::load(drugs_csv.as_bytes(), interactions_csv.as_bytes())?;
		let index = DrugIndex::build(&drugs);
		let graph = DrugGraph::build(&drugs, &interactions, &index);
		Ok(Self {
			drugs,
			interactions,
			index,
			graph,
		})
	}

	/// The derived graph.
	pub fn graph(&self) -> &DrugGraph {
		&self.graph
	}

	/// Names matching a search query, in table order.
	pub fn search(&self, query: &str) -> Vec<String> {
		query::search_names(query, &self.drugs)
	}

	/// Detail view for a selected name; `None` when the name is unknown.
	pub fn describe(&self, selected_name: &str) -> Option<DrugDetail> {
		query::describe(selected_name, &self.index, &self.interactions)
	}

	/// Display name for a node id, used when a canvas click selects a node.
	pub fn name_of(&self, id: &str) -> Option<&str> {
		self.index.drug(id).map(|d| d.name.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DRUGS: &str = "\
id,name,drug_class,targets,side_effects,summary
A1,Aspirin,NSAID,COX-1,bleeding,pain relief
W1,Warfarin,Anticoagulant,VKORC1,bleeding,thrombosis prevention
";

	const INTERACTIONS: &str = "\
source,target,type,severity,notes
A1,W1,synergistic,high,bleeding risk
";

	#[test]
	fn end_to_end_scenario() {
		let store = DrugStore::load(DRUGS, INTERACTIONS).unwrap();
		assert_eq!(store.graph().node_count(), 2);
		assert_eq!(store.graph().edge_count(), 1);

		let detail = store.describe("Aspirin").unwrap();
		assert_eq!(detail.interactions.len(), 1);
		assert_eq!(detail.interactions[0].other_name, "Warfarin");
		assert_eq!(detail.interactions[0].severity, "high");

		assert!(store.describe("Heparin").is_none());
		assert_eq!(store.search("war"), ["Warfarin"]);
		assert_eq!(store.name_of("W1"), Some("Warfarin"));
	}

	#[test]
	fn load_failure_stops_everything() {
		assert!(DrugStore::load("nope\n", INTERACTIONS).is_err());
	}

	#[test]
	fn bundled_datasets_load() {
		let store = DrugStore::load(
			include_str!("../../assets/drugs.csv"),
			include_str!("../../assets/interactions.csv"),
		)
		.unwrap();
		assert!(store.graph().node_count() > 0);
		assert!(store.graph().edge_count() > 0);
	}
}
