//! Loads the fight table into an immutable in-memory [`Dataset`].

use log::{info, warn};

use super::error::{DataError, RowError};
use super::lookup::WeightClassLookup;
use super::record::{FightRecord, RawFightRow};

/// Columns a fight table must carry for any row to be usable.
const REQUIRED_COLUMNS: [&str; 4] = ["R_fighter", "B_fighter", "date", "weight_class"];

/// Read-only table of bouts plus the fighter style lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
	records: Vec<FightRecord>,
	lookup: WeightClassLookup,
	skipped: usize,
}

impl Dataset {
	/// Build a dataset from CSV text. Without a usable lookup table the
	/// style classification is derived from the fights themselves.
	pub fn from_csv(fights: &str, lookup: Option<&str>) -> Result<Self, DataError> {
		let (records, skipped) = parse_fights(&strip_indentation(fights))?;

		let lookup = match lookup.map(strip_indentation) {
			Some(text) if !text.is_empty() => match WeightClassLookup::from_csv(&text) {
				Ok(table) if !table.is_empty() => table,
				Ok(_) => {
					warn!("ufc-graph: weight class lookup is empty, deriving from fights");
					WeightClassLookup::from_records(&records)
				}
				Err(e) => {
					warn!("ufc-graph: weight class lookup unusable ({}), deriving from fights", e);
					WeightClassLookup::from_records(&records)
				}
			},
			_ => WeightClassLookup::from_records(&records),
		};

		info!(
			"ufc-graph: loaded {} fights ({} skipped), {} classified fighters",
			records.len(),
			skipped,
			lookup.len()
		);

		Ok(Self {
			records,
			lookup,
			skipped,
		})
	}

	/// All loaded bouts in table order.
	pub fn records(&self) -> &[FightRecord] {
		&self.records
	}

	/// Bout at the given row position.
	pub fn record(&self, index: usize) -> Option<&FightRecord> {
		self.records.get(index)
	}

	/// Fighter style lookup.
	pub fn lookup(&self) -> &WeightClassLookup {
		&self.lookup
	}

	/// Number of rows dropped as malformed while loading.
	pub fn skipped(&self) -> usize {
		self.skipped
	}

	/// Number of loaded bouts.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Whether no bouts loaded.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

/// Parse fight rows, skipping and logging malformed ones.
/// Returns the records and the number of rows skipped.
pub fn parse_fights(text: &str) -> Result<(Vec<FightRecord>, usize), DataError> {
	let mut reader = csv::ReaderBuilder::new()
		.trim(csv::Trim::All)
		.flexible(true)
		.from_reader(text.as_bytes());

	let headers = reader.headers().map_err(DataError::Header)?.clone();
	for column in REQUIRED_COLUMNS {
		if !headers.iter().any(|h| h == column) {
			return Err(DataError::MissingColumn(column));
		}
	}

	let mut records = Vec::new();
	let mut skipped = 0;
	for (idx, row) in reader.deserialize::<RawFightRow>().enumerate() {
		let parsed = row
			.map_err(|e| RowError::Malformed(e.to_string()))
			.and_then(FightRecord::try_from);
		match parsed {
			Ok(record) => records.push(record),
			Err(e) => {
				warn!("ufc-graph: skipping fight row {}: {}", idx + 1, e);
				skipped += 1;
			}
		}
	}

	Ok((records, skipped))
}

/// Tables embedded in the host page arrive indented and padded with blank
/// lines. Remove the indentation common to every non-blank line, so quoted
/// fields that span lines keep their own leading whitespace.
fn strip_indentation(text: &str) -> String {
	let leading = |line: &str| line.bytes().take_while(u8::is_ascii_whitespace).count();
	let indent = text
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(leading)
		.min()
		.unwrap_or(0);

	text.lines()
		.map(|line| {
			if line.trim().is_empty() {
				""
			} else {
				&line[indent.min(leading(line))..]
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
		.trim_matches('\n')
		.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::record::Corner;

	const FIGHTS: &str = "
		R_fighter,B_fighter,Referee,date,location,Winner,title_bout,weight_class,no_of_rounds,R_age,B_age,R_Height_cms,B_Height_cms,R_Reach_cms,B_Reach_cms,R_Weight_lbs,B_Weight_lbs,B_avg_KD
		Alpha,Bravo,Herb Dean,2018-07-07,\"Las Vegas, Nevada, USA\",Red,True,Heavyweight,5,31,29,193.04,190.5,203.2,,265,240,0.5
		Charlie,Alpha,Marc Goddard,2019-03-02,\"London, England, United Kingdom\",Blue,False,Heavyweight,3,28,32,,,,,250,262,1.0
		Delta,Echo,,2019-05-11,,Draw,False,Lightweight,3,,,,,,,155,155,0.0
	";

	#[test]
	fn loads_records_and_ignores_extra_columns() {
		let dataset = Dataset::from_csv(FIGHTS, None).unwrap();
		assert_eq!(dataset.len(), 3);
		assert_eq!(dataset.skipped(), 0);

		let first = dataset.record(0).unwrap();
		assert_eq!(first.red_fighter, "Alpha");
		assert_eq!(first.location.as_deref(), Some("Las Vegas, Nevada, USA"));
		assert_eq!(first.winner, Some(Corner::Red));
		assert!(first.title_bout);
		assert_eq!(first.rounds, Some(5));
		assert_eq!(first.red.reach_cm, Some(203.2));
		assert_eq!(first.blue.reach_cm, None);

		let draw = dataset.record(2).unwrap();
		assert_eq!(draw.winner, None);
		assert_eq!(draw.referee, None);
	}

	#[test]
	fn derives_lookup_when_absent() {
		let dataset = Dataset::from_csv(FIGHTS, None).unwrap();
		assert_eq!(dataset.lookup().get("Alpha"), Some("Heavyweight"));
		assert_eq!(dataset.lookup().get("Echo"), Some("Lightweight"));
	}

	#[test]
	fn prefers_supplied_lookup() {
		let lookup = "fighter,weight_class\nAlpha,Light Heavyweight\n";
		let dataset = Dataset::from_csv(FIGHTS, Some(lookup)).unwrap();
		assert_eq!(dataset.lookup().get("Alpha"), Some("Light Heavyweight"));
		assert_eq!(dataset.lookup().get("Bravo"), None);
	}

	#[test]
	fn falls_back_when_lookup_is_unusable() {
		let dataset = Dataset::from_csv(FIGHTS, Some("name\nAlpha\n")).unwrap();
		assert_eq!(dataset.lookup().get("Bravo"), Some("Heavyweight"));
	}

	#[test]
	fn skips_malformed_rows() {
		let text = "R_fighter,B_fighter,date,weight_class,no_of_rounds\n\
			Alpha,Bravo,2018-01-01,Heavyweight,3\n\
			,Bravo,2018-01-01,Heavyweight,3\n\
			Alpha,Bravo,not-a-date,Heavyweight,3\n\
			Alpha,Bravo,2018-02-01,,3\n\
			Alpha,Bravo,2018-03-01,Heavyweight,three\n";
		let (records, skipped) = parse_fights(text).unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(skipped, 3);
		assert_eq!(records[1].rounds, None);
	}

	#[test]
	fn missing_required_column_is_fatal() {
		let err = parse_fights("R_fighter,B_fighter,date\nA,B,2018-01-01\n").unwrap_err();
		assert!(matches!(err, DataError::MissingColumn("weight_class")));
	}

	#[test]
	fn quoted_multiline_fields_keep_their_indentation() {
		let text = "
			R_fighter,B_fighter,date,location,weight_class
			Alpha,Bravo,2018-07-07,\"Las Vegas,
			   Nevada\",Heavyweight

			Charlie,Delta,2018-08-04,,Flyweight
		";
		let stripped = strip_indentation(text);
		assert!(stripped.starts_with("R_fighter,"));
		assert!(stripped.contains("\"Las Vegas,\n   Nevada\""));

		let (records, skipped) = parse_fights(&stripped).unwrap();
		assert_eq!(skipped, 0);
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].location.as_deref(), Some("Las Vegas,\n   Nevada"));
	}

	#[test]
	fn empty_table_is_fatal() {
		assert!(Dataset::from_csv("", None).is_err());
	}
}
