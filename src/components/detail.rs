//! Side panel describing the selected fighter or bout.

use std::sync::Arc;

use leptos::prelude::*;
use log::warn;

use super::force_graph::Selection;
use crate::data::{Corner, Dataset, FightRecord, Physique};
use crate::filters::FilterState;
use crate::search::bout_search_url;
use crate::summary::fighter_summary;

fn measure(value: Option<f64>, unit: &str) -> String {
	match value {
		Some(v) => format!("{} {}", (v * 10.0).round() / 10.0, unit),
		None => "-".to_string(),
	}
}

fn physique_rows(physique: &Physique) -> impl IntoView + use<> {
	view! {
		<dt>"Age"</dt>
		<dd>{measure(physique.age, "yrs")}</dd>
		<dt>"Height"</dt>
		<dd>{measure(physique.height_cm, "cm")}</dd>
		<dt>"Reach"</dt>
		<dd>{measure(physique.reach_cm, "cm")}</dd>
		<dt>"Weight"</dt>
		<dd>{measure(physique.weight_lbs, "lbs")}</dd>
	}
}

fn result_text(record: &FightRecord) -> String {
	match record.winner {
		Some(corner) => format!("{} ({})", record.fighter(corner), corner.label()),
		None => "No winner recorded".to_string(),
	}
}

/// Details for the current selection, or a hint when nothing is selected.
///
/// Fighter records are counted within the filtered bouts only.
#[component]
pub fn DetailPanel(
	dataset: Arc<Dataset>,
	filter: RwSignal<FilterState>,
	#[prop(into)] selection: Signal<Option<Selection>>,
	search_url: String,
) -> impl IntoView {
	let body = move || match selection.get() {
		Some(Selection::Fighter(name)) => {
			let summary = filter.with(|f| {
				fighter_summary(&name, f.matching(dataset.records()).map(|(_, r)| r))
			});
			let style = dataset
				.lookup()
				.get(&name)
				.unwrap_or("Unclassified")
				.to_string();
			view! {
				<h2>{summary.name.clone()}</h2>
				<p class="detail-sub">{style}</p>
				<dl>
					<dt>"Wins"</dt>
					<dd>{summary.wins}</dd>
					<dt>"Losses"</dt>
					<dd>{summary.losses}</dd>
					<dt>"Draws / NC"</dt>
					<dd>{summary.other}</dd>
					{summary.latest.as_ref().map(physique_rows)}
				</dl>
			}
			.into_any()
		}
		Some(Selection::Bout(index)) => {
			let Some(record) = dataset.record(index) else {
				warn!("ufc-graph: selected bout {} is not in the dataset", index);
				return view! { <p class="detail-hint">"Bout not found."</p> }.into_any();
			};
			let link = match bout_search_url(&search_url, record) {
				Ok(url) => Some(url.to_string()),
				Err(e) => {
					warn!("ufc-graph: bad search url `{}`: {}", search_url, e);
					None
				}
			};
			let corner = |c: Corner| {
				view! {
					<h3>{format!("{}: {}", c.label(), record.fighter(c))}</h3>
					<dl>{physique_rows(record.physique(c))}</dl>
				}
			};
			view! {
				<h2>{format!("{} vs {}", record.red_fighter, record.blue_fighter)}</h2>
				<p class="detail-sub">{record.date.format("%Y-%m-%d").to_string()}</p>
				<dl>
					<dt>"Result"</dt>
					<dd>{result_text(record)}</dd>
					<dt>"Weight class"</dt>
					<dd>{record.weight_class.clone()}</dd>
					<dt>"Title bout"</dt>
					<dd>{if record.title_bout { "Yes" } else { "No" }}</dd>
					<dt>"Rounds"</dt>
					<dd>{record.rounds.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())}</dd>
					<dt>"Referee"</dt>
					<dd>{record.referee.clone().unwrap_or_else(|| "-".to_string())}</dd>
					<dt>"Location"</dt>
					<dd>{record.location.clone().unwrap_or_else(|| "-".to_string())}</dd>
				</dl>
				{corner(Corner::Red)}
				{corner(Corner::Blue)}
				{link.map(|href| {
					view! {
						<a class="search-link" href=href target="_blank" rel="noopener">
							"Search this bout"
						</a>
					}
				})}
			}
			.into_any()
		}
		None => view! {
			<p class="detail-hint">
				"Click a fighter for their record, or a bout line for its details."
			</p>
		}
		.into_any(),
	};

	view! { <aside class="detail-panel">{body}</aside> }
}
