//! Point and neighborhood queries over the loaded tables.

use super::index::DrugIndex;
use super::model::{Drug, Interaction};

/// One interaction row as seen from a selected drug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionEntry {
	/// Display name of the partner drug, or its raw id when the partner is
	/// not in the drugs table.
	pub other_name: String,
	/// Interaction mechanism.
	pub kind: String,
	/// Severity grade.
	pub severity: String,
	/// Clinical notes.
	pub notes: String,
}

/// Full detail view for a selected drug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrugDetail {
	/// The resolved drug record.
	pub drug: Drug,
	/// Every interaction row touching this drug, in source order,
	/// duplicates included.
	pub interactions: Vec<InteractionEntry>,
}

/// Case-insensitive substring filter over drug names, in table order.
///
/// An empty query is the no-filter state and returns every name.
pub fn search_names(query: &str, drugs: &[Drug]) -> Vec<String> {
	if query.is_empty() {
		return drugs.iter().map(|d| d.name.clone()).collect();
	}
	let needle = query.to_lowercase();
	drugs
		.iter()
		.filter(|d| d.name.to_lowercase().contains(&needle))
		.map(|d| d.name.clone())
		.collect()
}

/// Resolve a selected name and collect its interaction neighborhood.
///
/// `None` means the name is not in the index; the UI renders that as a
/// "select a drug" prompt, not as an error. Unlike the graph, the entry list
/// keeps duplicate rows for the same partner pair.
pub fn describe(
	selected_name: &str,
	index: &DrugIndex,
	interactions: &[Interaction],
) -> Option<DrugDetail> {
	let id = index.resolve_name(selected_name)?;
	let drug = index.drug(id)?.clone();

	let entries = interactions
		.iter()
		.filter(|row| row.source == id || row.target == id)
		.map(|row| {
			let other = if row.source == id { &row.target } else { &row.source };
			InteractionEntry {
				other_name: index
					.drug(other)
					.map(|d| d.name.clone())
					.unwrap_or_else(|| other.clone()),
				kind: row.kind.clone(),
				severity: row.severity.clone(),
				notes: row.notes.clone(),
			}
		})
		.collect();

	Some(DrugDetail {
		drug,
		interactions: entries,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn drug(id: &str, name: &str) -> Drug {
		Drug {
			id: id.into(),
			name: name.into(),
			..Drug::default()
		}
	}

	fn interaction(source: &str, target: &str, severity: &str) -> Interaction {
		Interaction {
			source: source.into(),
			target: target.into(),
			kind: "synergistic".into(),
			severity: severity.into(),
			notes: "bleeding risk".into(),
		}
	}

	fn table() -> Vec<Drug> {
		vec![
			drug("A1", "Aspirin"),
			drug("W1", "Warfarin"),
			drug("I1", "Ibuprofen"),
		]
	}

	#[test]
	fn empty_query_returns_all_in_order() {
		assert_eq!(search_names("", &table()), ["Aspirin", "Warfarin", "Ibuprofen"]);
	}

	#[test]
	fn filter_is_case_insensitive_and_idempotent() {
		let drugs = table();
		let first = search_names("RIN", &drugs);
		assert_eq!(first, ["Aspirin", "Warfarin"]);

		let refiltered: Vec<String> = first
			.iter()
			.filter(|n| n.to_lowercase().contains("rin"))
			.cloned()
			.collect();
		assert_eq!(refiltered, first);
	}

	#[test]
	fn unknown_name_is_not_found() {
		let drugs = table();
		let index = DrugIndex::build(&drugs);
		assert!(describe("Paracetamol", &index, &[]).is_none());
	}

	#[test]
	fn detail_lists_every_touching_row() {
		let drugs = table();
		let index = DrugIndex::build(&drugs);
		let interactions = vec![
			interaction("A1", "W1", "high"),
			interaction("I1", "A1", "moderate"),
			// duplicate pair stays a distinct entry, unlike graph edges
			interaction("A1", "W1", "low"),
		];

		let detail = describe("Aspirin", &index, &interactions).unwrap();
		assert_eq!(detail.drug.id, "A1");
		assert_eq!(detail.interactions.len(), 3);
		assert_eq!(detail.interactions[0].other_name, "Warfarin");
		assert_eq!(detail.interactions[0].severity, "high");
		assert_eq!(detail.interactions[1].other_name, "Ibuprofen");
		assert_eq!(detail.interactions[2].severity, "low");
	}

	#[test]
	fn unresolved_partner_falls_back_to_raw_id() {
		let drugs = table();
		let index = DrugIndex::build(&drugs);
		let interactions = vec![interaction("A1", "Z9", "high")];
		let detail = describe("aspirin", &index, &interactions).unwrap();
		assert_eq!(detail.interactions[0].other_name, "Z9");
	}

	#[test]
	fn dangling_rows_are_absent_from_graph_but_present_in_detail() {
		// an interaction with one unknown endpoint never becomes an edge,
		// yet still shows in the known endpoint's detail list
		use super::super::graph::DrugGraph;

		let drugs = table();
		let index = DrugIndex::build(&drugs);
		let interactions = vec![interaction("A1", "Z9", "high")];

		let graph = DrugGraph::build(&drugs, &interactions, &index);
		assert_eq!(graph.edge_count(), 0);

		let detail = describe("Aspirin", &index, &interactions).unwrap();
		assert_eq!(detail.interactions.len(), 1);
	}
}
