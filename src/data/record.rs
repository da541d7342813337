//! Historical bout records as read from the fight table.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::error::RowError;

/// One of the two fighters in a bout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
	/// Red corner, the `R_` columns.
	Red,
	/// Blue corner, the `B_` columns.
	Blue,
}

impl Corner {
	/// Parse the `Winner` column. Anything but red/blue (draws, no contests,
	/// blanks) means no winner.
	pub fn parse_winner(raw: &str) -> Option<Self> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"red" => Some(Corner::Red),
			"blue" => Some(Corner::Blue),
			_ => None,
		}
	}

	/// Display name of the corner.
	pub fn label(self) -> &'static str {
		match self {
			Corner::Red => "Red",
			Corner::Blue => "Blue",
		}
	}
}

/// Per-fighter physical attributes at the time of a bout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Physique {
	/// Age in years.
	pub age: Option<f64>,
	/// Height in centimetres.
	pub height_cm: Option<f64>,
	/// Reach in centimetres.
	pub reach_cm: Option<f64>,
	/// Weight in pounds.
	pub weight_lbs: Option<f64>,
}

/// One historical bout. Identified by its position in the loaded table.
#[derive(Clone, Debug, PartialEq)]
pub struct FightRecord {
	/// Red-corner fighter name.
	pub red_fighter: String,
	/// Blue-corner fighter name.
	pub blue_fighter: String,
	/// Referee, if recorded.
	pub referee: Option<String>,
	/// Event date.
	pub date: NaiveDate,
	/// Event location, if recorded.
	pub location: Option<String>,
	/// Winning corner; `None` for draws, no contests and blanks.
	pub winner: Option<Corner>,
	/// Championship bout.
	pub title_bout: bool,
	/// Division the bout was fought in.
	pub weight_class: String,
	/// Scheduled number of rounds.
	pub rounds: Option<u32>,
	/// Red-corner attributes.
	pub red: Physique,
	/// Blue-corner attributes.
	pub blue: Physique,
}

impl FightRecord {
	/// Calendar year of the bout.
	pub fn year(&self) -> i32 {
		self.date.year()
	}

	/// Name of the fighter in `corner`.
	pub fn fighter(&self, corner: Corner) -> &str {
		match corner {
			Corner::Red => &self.red_fighter,
			Corner::Blue => &self.blue_fighter,
		}
	}

	/// Attributes of the fighter in `corner`.
	pub fn physique(&self, corner: Corner) -> &Physique {
		match corner {
			Corner::Red => &self.red,
			Corner::Blue => &self.blue,
		}
	}

	/// Which corner `name` fought from, if they fought in this bout.
	pub fn corner_of(&self, name: &str) -> Option<Corner> {
		if self.red_fighter == name {
			Some(Corner::Red)
		} else if self.blue_fighter == name {
			Some(Corner::Blue)
		} else {
			None
		}
	}

	/// Edge orientation as `(source, target)`: loser towards winner.
	/// Bouts without a winner point red to blue.
	pub fn oriented(&self) -> (&str, &str) {
		match self.winner {
			Some(Corner::Blue) => (&self.red_fighter, &self.blue_fighter),
			Some(Corner::Red) => (&self.blue_fighter, &self.red_fighter),
			None => (&self.red_fighter, &self.blue_fighter),
		}
	}
}

/// Raw CSV row. Only the consumed columns are named; serde skips the rest.
#[derive(Debug, Deserialize)]
pub(crate) struct RawFightRow {
	#[serde(rename = "R_fighter", default)]
	red_fighter: Option<String>,
	#[serde(rename = "B_fighter", default)]
	blue_fighter: Option<String>,
	#[serde(rename = "Referee", default)]
	referee: Option<String>,
	#[serde(default)]
	date: Option<String>,
	#[serde(default)]
	location: Option<String>,
	#[serde(rename = "Winner", default)]
	winner: Option<String>,
	#[serde(default)]
	title_bout: Option<String>,
	#[serde(default)]
	weight_class: Option<String>,
	#[serde(default, deserialize_with = "csv::invalid_option")]
	no_of_rounds: Option<u32>,
	#[serde(rename = "R_age", default, deserialize_with = "csv::invalid_option")]
	red_age: Option<f64>,
	#[serde(rename = "B_age", default, deserialize_with = "csv::invalid_option")]
	blue_age: Option<f64>,
	#[serde(rename = "R_Height_cms", default, deserialize_with = "csv::invalid_option")]
	red_height: Option<f64>,
	#[serde(rename = "B_Height_cms", default, deserialize_with = "csv::invalid_option")]
	blue_height: Option<f64>,
	#[serde(rename = "R_Reach_cms", default, deserialize_with = "csv::invalid_option")]
	red_reach: Option<f64>,
	#[serde(rename = "B_Reach_cms", default, deserialize_with = "csv::invalid_option")]
	blue_reach: Option<f64>,
	#[serde(rename = "R_Weight_lbs", default, deserialize_with = "csv::invalid_option")]
	red_weight: Option<f64>,
	#[serde(rename = "B_Weight_lbs", default, deserialize_with = "csv::invalid_option")]
	blue_weight: Option<f64>,
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|s| !s.trim().is_empty())
}

fn parse_flag(raw: &str) -> bool {
	matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

impl TryFrom<RawFightRow> for FightRecord {
	type Error = RowError;

	fn try_from(raw: RawFightRow) -> Result<Self, Self::Error> {
		let red_fighter = non_empty(raw.red_fighter).ok_or(RowError::MissingField("R_fighter"))?;
		let blue_fighter =
			non_empty(raw.blue_fighter).ok_or(RowError::MissingField("B_fighter"))?;
		let raw_date = non_empty(raw.date).ok_or(RowError::MissingField("date"))?;
		let date = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d")
			.map_err(|_| RowError::InvalidDate(raw_date.clone()))?;
		let weight_class =
			non_empty(raw.weight_class).ok_or(RowError::MissingField("weight_class"))?;

		Ok(Self {
			red_fighter,
			blue_fighter,
			referee: non_empty(raw.referee),
			date,
			location: non_empty(raw.location),
			winner: raw.winner.as_deref().and_then(Corner::parse_winner),
			title_bout: raw.title_bout.as_deref().is_some_and(parse_flag),
			weight_class,
			rounds: raw.no_of_rounds,
			red: Physique {
				age: raw.red_age,
				height_cm: raw.red_height,
				reach_cm: raw.red_reach,
				weight_lbs: raw.red_weight,
			},
			blue: Physique {
				age: raw.blue_age,
				height_cm: raw.blue_height,
				reach_cm: raw.blue_reach,
				weight_lbs: raw.blue_weight,
			},
		})
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	/// Minimal record for tests elsewhere in the crate.
	pub(crate) fn bout(
		red: &str,
		blue: &str,
		winner: Option<Corner>,
		date: &str,
		weight_class: &str,
	) -> FightRecord {
		FightRecord {
			red_fighter: red.to_string(),
			blue_fighter: blue.to_string(),
			referee: None,
			date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
			location: None,
			winner,
			title_bout: false,
			weight_class: weight_class.to_string(),
			rounds: Some(3),
			red: Physique::default(),
			blue: Physique::default(),
		}
	}

	#[test]
	fn winner_parsing_is_case_insensitive() {
		assert_eq!(Corner::parse_winner("Red"), Some(Corner::Red));
		assert_eq!(Corner::parse_winner(" BLUE "), Some(Corner::Blue));
		assert_eq!(Corner::parse_winner("Draw"), None);
		assert_eq!(Corner::parse_winner(""), None);
	}

	#[test]
	fn orientation_points_at_winner() {
		let red_wins = bout("A", "B", Some(Corner::Red), "2018-01-01", "Heavyweight");
		assert_eq!(red_wins.oriented(), ("B", "A"));

		let blue_wins = bout("A", "B", Some(Corner::Blue), "2018-01-01", "Heavyweight");
		assert_eq!(blue_wins.oriented(), ("A", "B"));
	}

	#[test]
	fn orientation_without_winner_is_red_to_blue() {
		let draw = bout("A", "B", None, "2018-01-01", "Heavyweight");
		assert_eq!(draw.oriented(), ("A", "B"));
	}

	#[test]
	fn corner_lookup() {
		let record = bout("A", "B", None, "2019-03-02", "Flyweight");
		assert_eq!(record.corner_of("A"), Some(Corner::Red));
		assert_eq!(record.corner_of("B"), Some(Corner::Blue));
		assert_eq!(record.corner_of("C"), None);
		assert_eq!(record.year(), 2019);
	}

	#[test]
	fn title_flag_accepts_common_spellings() {
		assert!(parse_flag("True"));
		assert!(parse_flag("1"));
		assert!(!parse_flag("False"));
		assert!(!parse_flag(""));
	}
}
