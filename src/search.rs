//! Search-engine deep links for bouts.

use url::Url;

use crate::data::FightRecord;

/// Query text for a bout: `"<red> vs <blue> <year>"`.
pub fn bout_query(record: &FightRecord) -> String {
	format!(
		"{} vs {} {}",
		record.red_fighter,
		record.blue_fighter,
		record.year()
	)
}

/// `search_url` with the bout query attached as the `q` parameter.
pub fn bout_search_url(search_url: &str, record: &FightRecord) -> Result<Url, url::ParseError> {
	Url::parse_with_params(search_url, &[("q", bout_query(record))])
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{Corner, bout};

	#[test]
	fn query_names_both_corners_and_year() {
		let record = bout("Daniel Cormier", "Stipe Miocic", Some(Corner::Red), "2018-07-07", "Heavyweight");
		assert_eq!(bout_query(&record), "Daniel Cormier vs Stipe Miocic 2018");
	}

	#[test]
	fn query_is_encoded_as_single_parameter() {
		let record = bout("José Aldo", "Max & Co", None, "2019-05-11", "Featherweight");
		let url = bout_search_url("https://www.google.com/search", &record).unwrap();

		assert_eq!(url.host_str(), Some("www.google.com"));
		assert_eq!(url.path(), "/search");
		let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
		assert_eq!(
			pairs,
			vec![("q".to_string(), "José Aldo vs Max & Co 2019".to_string())]
		);
	}

	#[test]
	fn bad_base_url_is_an_error() {
		let record = bout("A", "B", None, "2019-05-11", "Featherweight");
		assert!(bout_search_url("not a url", &record).is_err());
	}
}
