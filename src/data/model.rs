//! Row records for the two source tables.

use serde::Deserialize;

/// One medication row from the drugs table.
///
/// Every field is a plain string and defaults to `""` when the source cell is
/// missing, so downstream formatting never has to null-check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Drug {
	/// Unique key within the drugs table.
	#[serde(default)]
	pub id: String,
	/// Display name, also the key for case-insensitive selection.
	#[serde(default)]
	pub name: String,
	/// Therapeutic class, e.g. "NSAID".
	#[serde(default)]
	pub drug_class: String,
	/// Freeform molecular targets.
	#[serde(default)]
	pub targets: String,
	/// Freeform common side effects.
	#[serde(default)]
	pub side_effects: String,
	/// Freeform primary-use summary.
	#[serde(default)]
	pub summary: String,
}

/// One row from the interactions table, endpoints given as drug ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Interaction {
	/// Id of one endpoint drug.
	#[serde(default)]
	pub source: String,
	/// Id of the other endpoint drug.
	#[serde(default)]
	pub target: String,
	/// Interaction mechanism, e.g. "pharmacokinetic".
	#[serde(default, rename = "type")]
	pub kind: String,
	/// Freeform severity grade.
	#[serde(default)]
	pub severity: String,
	/// Freeform clinical notes.
	#[serde(default)]
	pub notes: String,
}
