//! Per-fighter style classification: the weight class a fighter competed in
//! most often.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;

use super::error::DataError;
use super::record::FightRecord;

#[derive(Debug, Deserialize)]
struct LookupRow {
	#[serde(default)]
	fighter: Option<String>,
	#[serde(default)]
	weight_class: Option<String>,
}

/// Maps a fighter name to their most frequent weight class.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightClassLookup {
	by_fighter: HashMap<String, String>,
}

impl WeightClassLookup {
	/// Parse a `fighter,weight_class` table. Rows with a blank column are dropped.
	pub fn from_csv(text: &str) -> Result<Self, DataError> {
		let mut reader = csv::ReaderBuilder::new()
			.trim(csv::Trim::All)
			.flexible(true)
			.from_reader(text.as_bytes());
		let headers = reader.headers().map_err(DataError::Header)?.clone();
		for column in ["fighter", "weight_class"] {
			if !headers.iter().any(|h| h == column) {
				return Err(DataError::MissingColumn(column));
			}
		}

		let mut by_fighter = HashMap::new();
		for (idx, row) in reader.deserialize::<LookupRow>().enumerate() {
			match row {
				Ok(LookupRow {
					fighter: Some(fighter),
					weight_class: Some(class),
				}) if !fighter.is_empty() && !class.is_empty() => {
					by_fighter.insert(fighter, class);
				}
				Ok(_) => {}
				Err(e) => warn!("ufc-graph: skipping lookup row {}: {}", idx + 1, e),
			}
		}
		Ok(Self { by_fighter })
	}

	/// Derive the lookup from the fight table itself. Ties go to the weight
	/// class of the most recent bout, then to the alphabetically first name.
	pub fn from_records(records: &[FightRecord]) -> Self {
		let mut tally: HashMap<&str, HashMap<&str, (usize, NaiveDate)>> = HashMap::new();
		for record in records {
			for fighter in [&record.red_fighter, &record.blue_fighter] {
				let entry = tally
					.entry(fighter.as_str())
					.or_default()
					.entry(record.weight_class.as_str())
					.or_insert((0, record.date));
				entry.0 += 1;
				entry.1 = entry.1.max(record.date);
			}
		}

		let by_fighter = tally
			.into_iter()
			.filter_map(|(fighter, classes)| {
				classes
					.into_iter()
					.max_by_key(|&(class, (count, latest))| (count, latest, Reverse(class)))
					.map(|(class, _)| (fighter.to_string(), class.to_string()))
			})
			.collect();
		Self { by_fighter }
	}

	/// Style class of `fighter`, if known.
	pub fn get(&self, fighter: &str) -> Option<&str> {
		self.by_fighter.get(fighter).map(String::as_str)
	}

	/// Number of classified fighters.
	pub fn len(&self) -> usize {
		self.by_fighter.len()
	}

	/// Whether no fighter is classified.
	pub fn is_empty(&self) -> bool {
		self.by_fighter.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::record::Corner;
	use crate::data::record::tests::bout;

	#[test]
	fn parses_lookup_table() {
		let lookup = WeightClassLookup::from_csv(
			"fighter,weight_class\nAlpha,Heavyweight\nBravo,Flyweight\nCharlie,\n",
		)
		.unwrap();
		assert_eq!(lookup.get("Alpha"), Some("Heavyweight"));
		assert_eq!(lookup.get("Bravo"), Some("Flyweight"));
		assert_eq!(lookup.get("Charlie"), None);
		assert_eq!(lookup.len(), 2);
	}

	#[test]
	fn rejects_table_without_columns() {
		let err = WeightClassLookup::from_csv("name,class\nAlpha,Heavyweight\n").unwrap_err();
		assert!(matches!(err, DataError::MissingColumn("fighter")));
	}

	#[test]
	fn derives_most_frequent_class() {
		let records = vec![
			bout("A", "B", Some(Corner::Red), "2018-01-01", "Heavyweight"),
			bout("A", "C", Some(Corner::Red), "2018-06-01", "Heavyweight"),
			bout("A", "D", Some(Corner::Red), "2019-01-01", "Light Heavyweight"),
		];
		let lookup = WeightClassLookup::from_records(&records);
		assert_eq!(lookup.get("A"), Some("Heavyweight"));
		assert_eq!(lookup.get("D"), Some("Light Heavyweight"));
		assert_eq!(lookup.len(), 4);
	}

	#[test]
	fn ties_prefer_most_recent_bout() {
		let records = vec![
			bout("A", "B", None, "2018-01-01", "Welterweight"),
			bout("A", "C", None, "2019-01-01", "Lightweight"),
		];
		let lookup = WeightClassLookup::from_records(&records);
		assert_eq!(lookup.get("A"), Some("Lightweight"));
	}
}
