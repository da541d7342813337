//! Year and weight-class filtering of the fight table.
//!
//! The weight-class options always depend on the selected years: picking a
//! different set of years recomputes them and resets the weight-class
//! selection to the busiest class.

use std::collections::{BTreeSet, HashMap};

use crate::data::FightRecord;

/// Distinct years present in the table, newest first.
pub fn year_options(records: &[FightRecord]) -> Vec<i32> {
	let years: BTreeSet<i32> = records.iter().map(FightRecord::year).collect();
	years.into_iter().rev().collect()
}

/// Weight classes fought in the given years, busiest first (ties by name).
pub fn weight_class_options(records: &[FightRecord], years: &BTreeSet<i32>) -> Vec<String> {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	for record in records.iter().filter(|r| years.contains(&r.year())) {
		*counts.entry(record.weight_class.as_str()).or_insert(0) += 1;
	}

	let mut options: Vec<(&str, usize)> = counts.into_iter().collect();
	options.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
	options.into_iter().map(|(class, _)| class.to_string()).collect()
}

/// Bouts matching both selections, with their row positions.
pub fn filter_records<'a>(
	records: &'a [FightRecord],
	years: &'a BTreeSet<i32>,
	weight_classes: &'a BTreeSet<String>,
) -> impl Iterator<Item = (usize, &'a FightRecord)> + 'a {
	records
		.iter()
		.enumerate()
		.filter(move |(_, r)| years.contains(&r.year()) && weight_classes.contains(&r.weight_class))
}

/// Current state of the year and weight-class controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
	/// Selected years.
	pub years: BTreeSet<i32>,
	/// Selected weight classes, a subset of the options.
	pub weight_classes: BTreeSet<String>,
	/// Weight classes available for `years`, busiest first.
	pub weight_class_options: Vec<String>,
}

impl FilterState {
	/// Start from `preferred_years` that exist in the table, or else the newest year.
	pub fn initial(records: &[FightRecord], preferred_years: &[i32]) -> Self {
		let available = year_options(records);
		let mut years: BTreeSet<i32> = preferred_years
			.iter()
			.copied()
			.filter(|y| available.contains(y))
			.collect();
		if years.is_empty() {
			years.extend(available.first().copied());
		}

		let mut state = Self::default();
		state.select_years(records, years);
		state
	}

	/// Replace the year selection, recompute the weight-class options and
	/// default the weight-class selection to the busiest one.
	pub fn select_years(&mut self, records: &[FightRecord], years: BTreeSet<i32>) {
		self.weight_class_options = weight_class_options(records, &years);
		self.weight_classes = self.weight_class_options.first().cloned().into_iter().collect();
		self.years = years;
	}

	/// Add or remove `year`, then reselect as [`Self::select_years`] does.
	pub fn toggle_year(&mut self, records: &[FightRecord], year: i32) {
		let mut years = self.years.clone();
		if !years.remove(&year) {
			years.insert(year);
		}
		self.select_years(records, years);
	}

	/// Weight classes outside the current options are ignored.
	pub fn toggle_weight_class(&mut self, class: &str) {
		if !self.weight_class_options.iter().any(|c| c == class) {
			return;
		}
		if !self.weight_classes.remove(class) {
			self.weight_classes.insert(class.to_string());
		}
	}

	/// Bouts matching the current selection, with their row positions.
	pub fn matching<'a>(
		&'a self,
		records: &'a [FightRecord],
	) -> impl Iterator<Item = (usize, &'a FightRecord)> + 'a {
		filter_records(records, &self.years, &self.weight_classes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{Corner, bout};

	fn table() -> Vec<FightRecord> {
		vec![
			bout("A", "B", Some(Corner::Red), "2017-05-13", "Heavyweight"),
			bout("C", "D", Some(Corner::Red), "2018-01-20", "Heavyweight"),
			bout("E", "F", Some(Corner::Blue), "2018-03-03", "Flyweight"),
			bout("G", "H", None, "2018-07-07", "Flyweight"),
			bout("I", "J", Some(Corner::Red), "2018-09-08", "Flyweight"),
			bout("K", "L", Some(Corner::Red), "2019-02-02", "Bantamweight"),
			bout("C", "A", Some(Corner::Blue), "2019-11-02", "Heavyweight"),
		]
	}

	#[test]
	fn years_are_distinct_newest_first() {
		assert_eq!(year_options(&table()), vec![2019, 2018, 2017]);
		assert!(year_options(&[]).is_empty());
	}

	#[test]
	fn weight_classes_are_exactly_those_in_selected_years() {
		let records = table();
		let options = weight_class_options(&records, &BTreeSet::from([2018]));
		assert_eq!(options, vec!["Flyweight", "Heavyweight"]);

		let options = weight_class_options(&records, &BTreeSet::from([2017, 2019]));
		assert_eq!(options, vec!["Heavyweight", "Bantamweight"]);

		assert!(weight_class_options(&records, &BTreeSet::from([2005])).is_empty());
	}

	#[test]
	fn initial_state_uses_newest_year_and_busiest_class() {
		let records = table();
		let state = FilterState::initial(&records, &[]);
		assert_eq!(state.years, BTreeSet::from([2019]));
		assert_eq!(state.weight_class_options, vec!["Bantamweight", "Heavyweight"]);
		assert_eq!(state.weight_classes, BTreeSet::from(["Bantamweight".to_string()]));
	}

	#[test]
	fn initial_state_honours_preferred_years() {
		let records = table();
		let state = FilterState::initial(&records, &[2018, 1999]);
		assert_eq!(state.years, BTreeSet::from([2018]));
		assert_eq!(state.weight_classes, BTreeSet::from(["Flyweight".to_string()]));
	}

	#[test]
	fn changing_years_resets_weight_class_selection() {
		let records = table();
		let mut state = FilterState::initial(&records, &[2018]);
		state.toggle_weight_class("Heavyweight");
		assert_eq!(state.weight_classes.len(), 2);

		state.toggle_year(&records, 2017);
		assert_eq!(state.years, BTreeSet::from([2017, 2018]));
		assert_eq!(state.weight_class_options, vec!["Flyweight", "Heavyweight"]);
		assert_eq!(state.weight_classes, BTreeSet::from(["Flyweight".to_string()]));

		state.toggle_year(&records, 2018);
		assert_eq!(state.weight_class_options, vec!["Heavyweight"]);
	}

	#[test]
	fn unknown_weight_class_is_ignored() {
		let records = table();
		let mut state = FilterState::initial(&records, &[2019]);
		state.toggle_weight_class("Strawweight");
		assert_eq!(state.weight_classes, BTreeSet::from(["Bantamweight".to_string()]));
	}

	#[test]
	fn matching_keeps_row_positions() {
		let records = table();
		let mut state = FilterState::initial(&records, &[2018, 2019]);
		state.toggle_weight_class("Flyweight");
		state.toggle_weight_class("Heavyweight");
		let rows: Vec<usize> = state.matching(&records).map(|(i, _)| i).collect();
		assert_eq!(rows, vec![1, 6]);
	}

	#[test]
	fn deselecting_every_year_empties_the_graph() {
		let records = table();
		let mut state = FilterState::initial(&records, &[2019]);
		state.toggle_year(&records, 2019);
		assert!(state.years.is_empty());
		assert!(state.weight_class_options.is_empty());
		assert_eq!(state.matching(&records).count(), 0);
	}
}
