//! Reshapes filtered bouts into graph elements.
//!
//! Nodes are the union of both corners across the bouts, in first-appearance
//! order. Every bout becomes one link from loser to winner, so every link
//! endpoint is guaranteed to be in the node list built from the same input.

use indexmap::IndexSet;

use crate::components::force_graph::{GraphData, GraphLink, GraphNode};
use crate::data::{FightRecord, WeightClassLookup};

/// Build nodes and links from `(row position, bout)` pairs.
pub fn build_graph<'a, I>(bouts: I, lookup: &WeightClassLookup) -> GraphData
where
	I: IntoIterator<Item = (usize, &'a FightRecord)>,
{
	let mut fighters: IndexSet<&'a str> = IndexSet::new();
	let mut links = Vec::new();

	for (record, bout) in bouts {
		fighters.insert(&bout.red_fighter);
		fighters.insert(&bout.blue_fighter);

		let (source, target) = bout.oriented();
		links.push(GraphLink {
			source: source.to_string(),
			target: target.to_string(),
			record,
			decided: bout.winner.is_some(),
			title: bout.title_bout,
		});
	}

	let nodes = fighters
		.into_iter()
		.map(|name| GraphNode {
			id: name.to_string(),
			label: Some(name.to_string()),
			group: lookup.get(name).map(str::to_string),
		})
		.collect();

	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::data::{Corner, bout};

	fn ids(data: &GraphData) -> HashSet<&str> {
		data.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	#[test]
	fn empty_input_yields_empty_graph() {
		let data = build_graph(std::iter::empty(), &WeightClassLookup::default());
		assert!(data.nodes.is_empty());
		assert!(data.links.is_empty());
	}

	#[test]
	fn two_bout_example() {
		let records = vec![
			bout("A", "B", Some(Corner::Red), "2018-04-14", "Heavyweight"),
			bout("C", "A", Some(Corner::Red), "2019-02-17", "Heavyweight"),
		];
		let data = build_graph(records.iter().enumerate(), &WeightClassLookup::default());

		assert_eq!(ids(&data), HashSet::from(["A", "B", "C"]));
		let edges: Vec<(&str, &str, usize)> = data
			.links
			.iter()
			.map(|l| (l.source.as_str(), l.target.as_str(), l.record))
			.collect();
		assert_eq!(edges, vec![("B", "A", 0), ("A", "C", 1)]);
	}

	#[test]
	fn nodes_are_deduplicated_union_of_corners() {
		let records = vec![
			bout("A", "B", Some(Corner::Blue), "2018-01-01", "Flyweight"),
			bout("B", "A", Some(Corner::Red), "2018-06-01", "Flyweight"),
			bout("C", "D", None, "2018-09-01", "Flyweight"),
			bout("D", "A", Some(Corner::Blue), "2018-12-01", "Flyweight"),
		];
		let data = build_graph(records.iter().enumerate(), &WeightClassLookup::default());

		assert_eq!(data.nodes.len(), 4);
		let expected: HashSet<&str> = records
			.iter()
			.flat_map(|r| [r.red_fighter.as_str(), r.blue_fighter.as_str()])
			.collect();
		assert_eq!(ids(&data), expected);
		assert_eq!(data.links.len(), records.len());
	}

	#[test]
	fn every_link_endpoint_is_a_node() {
		let records = vec![
			bout("A", "B", Some(Corner::Red), "2018-01-01", "Heavyweight"),
			bout("C", "D", None, "2018-01-01", "Heavyweight"),
			bout("E", "A", Some(Corner::Blue), "2019-01-01", "Heavyweight"),
			bout("B", "E", Some(Corner::Red), "2019-01-01", "Heavyweight"),
		];
		// Any subset, keyed by original row position.
		for mask in 0u32..16 {
			let subset = records
				.iter()
				.enumerate()
				.filter(|(i, _)| mask & (1 << *i) != 0);
			let data = build_graph(subset, &WeightClassLookup::default());
			let nodes = ids(&data);
			for link in &data.links {
				assert!(nodes.contains(link.source.as_str()));
				assert!(nodes.contains(link.target.as_str()));
			}
		}
	}

	#[test]
	fn draws_point_red_to_blue() {
		let records = vec![bout("Red", "Blue", None, "2018-01-01", "Heavyweight")];
		let data = build_graph(records.iter().enumerate(), &WeightClassLookup::default());
		assert_eq!(data.links[0].source, "Red");
		assert_eq!(data.links[0].target, "Blue");
		assert!(!data.links[0].decided);
	}

	#[test]
	fn style_class_comes_from_lookup() {
		let records = vec![
			bout("A", "B", Some(Corner::Red), "2018-01-01", "Heavyweight"),
			bout("A", "C", Some(Corner::Red), "2018-01-01", "Heavyweight"),
			bout("C", "D", Some(Corner::Red), "2018-01-01", "Light Heavyweight"),
			bout("C", "E", Some(Corner::Red), "2018-01-01", "Light Heavyweight"),
		];
		let lookup = WeightClassLookup::from_records(&records);
		let data = build_graph(records.iter().take(1).enumerate(), &lookup);

		let a = data.nodes.iter().find(|n| n.id == "A").unwrap();
		assert_eq!(a.group.as_deref(), Some("Heavyweight"));
		assert_eq!(a.label.as_deref(), Some("A"));

		let missing = build_graph(records.iter().enumerate(), &WeightClassLookup::default());
		assert!(missing.nodes.iter().all(|n| n.group.is_none()));

		let c = build_graph(records.iter().enumerate(), &lookup);
		let c = c.nodes.iter().find(|n| n.id == "C").unwrap();
		assert_eq!(c.group.as_deref(), Some("Light Heavyweight"));
	}

	#[test]
	fn adding_a_year_can_leave_the_graph_unchanged() {
		use crate::filters::FilterState;

		let records = vec![
			bout("A", "B", Some(Corner::Red), "2018-01-20", "Heavyweight"),
			bout("C", "A", Some(Corner::Blue), "2018-07-07", "Heavyweight"),
			bout("B", "D", Some(Corner::Red), "2018-11-24", "Heavyweight"),
			bout("E", "F", Some(Corner::Blue), "2018-08-04", "Flyweight"),
			bout("G", "H", Some(Corner::Red), "2017-06-17", "Flyweight"),
		];
		let lookup = WeightClassLookup::from_records(&records);

		let mut filter = FilterState::initial(&records, &[2018]);
		let before = build_graph(filter.matching(&records), &lookup);
		let previous = filter.clone();
		filter.toggle_year(&records, 2017);
		let after = build_graph(filter.matching(&records), &lookup);

		// The filter moved but the graph did not, so nothing downstream of the
		// graph alone sees the change; selection has to be driven separately.
		assert_ne!(previous, filter);
		assert_eq!(filter.weight_classes, previous.weight_classes);
		assert_eq!(before, after);
	}
}
