//! Per-fighter record over a set of bouts.

use crate::data::{FightRecord, Physique};

/// A fighter's record within the filtered bouts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FighterSummary {
	/// Fighter name.
	pub name: String,
	/// Bouts won.
	pub wins: usize,
	/// Bouts lost.
	pub losses: usize,
	/// Draws, no contests and bouts with no recorded winner.
	pub other: usize,
	/// Attributes from the most recent bout, if any.
	pub latest: Option<Physique>,
}

impl FighterSummary {
	/// Total bouts counted.
	pub fn bouts(&self) -> usize {
		self.wins + self.losses + self.other
	}
}

/// Tally `name`'s results across `bouts`. Bouts they did not fight in are ignored.
pub fn fighter_summary<'a>(
	name: &str,
	bouts: impl IntoIterator<Item = &'a FightRecord>,
) -> FighterSummary {
	let mut summary = FighterSummary {
		name: name.to_string(),
		..Default::default()
	};
	let mut latest: Option<&FightRecord> = None;

	for bout in bouts {
		let Some(corner) = bout.corner_of(name) else {
			continue;
		};
		match bout.winner {
			Some(winner) if winner == corner => summary.wins += 1,
			Some(_) => summary.losses += 1,
			None => summary.other += 1,
		}
		// later rows win date ties
		if latest.is_none_or(|l| bout.date >= l.date) {
			latest = Some(bout);
		}
	}

	summary.latest = latest.and_then(|bout| {
		bout.corner_of(name)
			.map(|corner| bout.physique(corner).clone())
	});
	summary
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{Corner, bout};

	#[test]
	fn tallies_wins_losses_and_draws() {
		let records = vec![
			bout("A", "B", Some(Corner::Red), "2018-01-01", "Heavyweight"),
			bout("C", "A", Some(Corner::Red), "2018-02-01", "Heavyweight"),
			bout("A", "D", None, "2018-03-01", "Heavyweight"),
			bout("E", "A", Some(Corner::Blue), "2018-04-01", "Heavyweight"),
			bout("B", "C", Some(Corner::Red), "2018-05-01", "Heavyweight"),
		];
		let summary = fighter_summary("A", &records);
		assert_eq!((summary.wins, summary.losses, summary.other), (2, 1, 1));
		assert_eq!(summary.bouts(), 4);
	}

	#[test]
	fn latest_physique_comes_from_most_recent_bout() {
		let mut early = bout("A", "B", Some(Corner::Red), "2017-01-01", "Heavyweight");
		early.red.weight_lbs = Some(240.0);
		let mut late = bout("C", "A", Some(Corner::Red), "2019-01-01", "Heavyweight");
		late.blue.weight_lbs = Some(255.0);
		late.blue.reach_cm = Some(211.0);

		let summary = fighter_summary("A", [&late, &early]);
		let latest = summary.latest.unwrap();
		assert_eq!(latest.weight_lbs, Some(255.0));
		assert_eq!(latest.reach_cm, Some(211.0));
	}

	#[test]
	fn unknown_fighter_has_empty_record() {
		let records = vec![bout("A", "B", Some(Corner::Red), "2018-01-01", "Heavyweight")];
		let summary = fighter_summary("Z", &records);
		assert_eq!(summary.bouts(), 0);
		assert!(summary.latest.is_none());
	}
}
