//! Dataset loader: CSV sources in, ordered row vectors out.
//!
//! The wasm build feeds this from `include_str!`, so the loader reads any
//! `io::Read`; anything unreadable or malformed produces a [`LoadError`] and
//! nothing downstream runs.

use std::io;

use csv::ReaderBuilder;
use log::info;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{Drug, Interaction};

/// Fatal load failure; the only error the core ever surfaces to the UI.
#[derive(Error, Debug)]
pub enum LoadError {
	/// The source is unreadable or not parseable as CSV.
	#[error("failed to read {table} table: {reason}")]
	Parse {
		/// Which source table failed.
		table: &'static str,
		/// Underlying reader or parser message.
		reason: String,
	},
	/// The header row lacks a column the core relies on.
	#[error("{table} table is missing required column '{column}'")]
	MissingColumn {
		/// Which source table failed.
		table: &'static str,
		/// The absent column name.
		column: &'static str,
	},
}

fn parse_table<T: DeserializeOwned, R: io::Read>(
	source: R,
	table: &'static str,
	required: &[&'static str],
) -> Result<Vec<T>, LoadError> {
	let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);

	let headers = reader
		.headers()
		.map_err(|e| LoadError::Parse {
			table,
			reason: e.to_string(),
		})?
		.clone();
	for column in required {
		if !headers.iter().any(|h| h == *column) {
			return Err(LoadError::MissingColumn { table, column });
		}
	}

	let mut rows = Vec::new();
	for result in reader.records() {
		let mut record = result.map_err(|e| LoadError::Parse {
			table,
			reason: e.to_string(),
		})?;
		// pad short rows so a missing trailing cell becomes "" rather than a
		// deserialize failure; these datasets often leave trailing cells blank
		while record.len() < headers.len() {
			record.push_field("");
		}
		let row = record
			.deserialize(Some(&headers))
			.map_err(|e| LoadError::Parse {
				table,
				reason: e.to_string(),
			})?;
		rows.push(row);
	}
	Ok(rows)
}

/// Parse both source tables, preserving row order.
///
/// Drugs must carry `id` and `name` columns, interactions `source` and
/// `target`; every other column is optional and every missing cell becomes the
/// empty string.
pub fn load<D: io::Read, I: io::Read>(
	drugs_source: D,
	interactions_source: I,
) -> Result<(Vec<Drug>, Vec<Interaction>), LoadError> {
	let drugs = parse_table::<Drug, _>(drugs_source, "drugs", &["id", "name"])?;
	let interactions =
		parse_table::<Interaction, _>(interactions_source, "interactions", &["source", "target"])?;
	info!(
		"loaded {} drugs and {} interactions",
		drugs.len(),
		interactions.len()
	);
	Ok((drugs, interactions))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preserves_row_order() {
		let (drugs, _) = load(
			"id,name\nB1,Beta\nA1,Alpha\nC1,Gamma\n".as_bytes(),
			"source,target\n".as_bytes(),
		)
		.unwrap();
		let names: Vec<&str> = drugs.iter().map(|d| d.name.as_str()).collect();
		assert_eq!(names, ["Beta", "Alpha", "Gamma"]);
	}

	#[test]
	fn short_rows_normalize_to_empty_strings() {
		let (drugs, interactions) = load(
			"id,name,drug_class,targets,side_effects,summary\nA1,Aspirin\n".as_bytes(),
			"source,target,type,severity,notes\nA1,W1,synergistic\n".as_bytes(),
		)
		.unwrap();
		assert_eq!(drugs[0].name, "Aspirin");
		assert_eq!(drugs[0].drug_class, "");
		assert_eq!(drugs[0].summary, "");
		assert_eq!(interactions[0].kind, "synergistic");
		assert_eq!(interactions[0].severity, "");
		assert_eq!(interactions[0].notes, "");
	}

	#[test]
	fn missing_required_column_fails() {
		let err = load("name\nAspirin\n".as_bytes(), "source,target\n".as_bytes()).unwrap_err();
		assert!(matches!(
			err,
			LoadError::MissingColumn {
				table: "drugs",
				column: "id"
			}
		));

		let err = load("id,name\n".as_bytes(), "source,notes\n".as_bytes()).unwrap_err();
		assert!(matches!(
			err,
			LoadError::MissingColumn {
				table: "interactions",
				column: "target"
			}
		));
	}

	#[test]
	fn unreadable_source_fails() {
		// invalid UTF-8 in a record cell
		let err = load(
			&b"id,name\nA1,\xff\xfe\n"[..],
			"source,target\n".as_bytes(),
		)
		.unwrap_err();
		assert!(matches!(err, LoadError::Parse { table: "drugs", .. }));
	}

	#[test]
	fn extra_columns_are_ignored() {
		let (drugs, _) = load(
			"id,name,approved_year\nA1,Aspirin,1899\n".as_bytes(),
			"source,target\n".as_bytes(),
		)
		.unwrap();
		assert_eq!(drugs[0].name, "Aspirin");
	}
}
