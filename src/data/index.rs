//! Point-lookup indexes over the drugs table.

use std::collections::HashMap;

use super::model::Drug;

/// O(1) lookups by id and by lowercased name.
///
/// Duplicate ids or duplicate case-insensitive names are resolved by
/// last-write-wins in table order. That is a documented policy of the source
/// data, not a validation failure, so building never errors.
#[derive(Clone, Debug, Default)]
pub struct DrugIndex {
	by_id: HashMap<String, Drug>,
	id_by_name: HashMap<String, String>,
}

impl DrugIndex {
	/// Build both indexes in one pass over the table.
	pub fn build(drugs: &[Drug]) -> Self {
		let mut by_id = HashMap::with_capacity(drugs.len());
		let mut id_by_name = HashMap::with_capacity(drugs.len());
		for drug in drugs {
			by_id.insert(drug.id.clone(), drug.clone());
			id_by_name.insert(drug.name.to_lowercase(), drug.id.clone());
		}
		Self { by_id, id_by_name }
	}

	/// Full record for an id, if the id exists.
	pub fn drug(&self, id: &str) -> Option<&Drug> {
		self.by_id.get(id)
	}

	/// Resolve a display name (any case) to its drug id.
	pub fn resolve_name(&self, name: &str) -> Option<&str> {
		self.id_by_name.get(&name.to_lowercase()).map(String::as_str)
	}

	/// Whether an id exists in the drugs table.
	pub fn contains(&self, id: &str) -> bool {
		self.by_id.contains_key(id)
	}
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

	#[test]
	fn lookups_hit_and_miss() {
		let index = DrugIndex::build(&[drug("A1", "Aspirin"), drug("W1", "Warfarin")]);
		assert_eq!(index.drug("A1").unwrap().name, "Aspirin");
		assert!(index.drug("Z9").is_none());
		assert_eq!(index.resolve_name("WARFARIN"), Some("W1"));
		assert_eq!(index.resolve_name("aspirin"), Some("A1"));
		assert_eq!(index.resolve_name("ibuprofen"), None);
	}

	#[test]
	fn duplicate_name_last_write_wins() {
		let index = DrugIndex::build(&[drug("A1", "Aspirin"), drug("A2", "Aspirin")]);
		assert_eq!(index.resolve_name("aspirin"), Some("A2"));
	}

	#[test]
	fn duplicate_id_last_write_wins() {
		let index = DrugIndex::build(&[drug("A1", "Aspirin"), drug("A1", "Acetylsalicylic acid")]);
		assert_eq!(index.drug("A1").unwrap().name, "Acetylsalicylic acid");
	}
}
