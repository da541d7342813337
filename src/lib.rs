//! ufc-graph: Interactive graph of historical MMA bouts.
//!
//! This crate provides a WASM app that renders fighters as nodes and bouts as
//! loser-to-winner edges, filtered by year and weight class, with selectable
//! layouts and a detail panel for the selected fighter or bout.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;
pub mod config;
pub mod data;
pub mod filters;
pub mod graph;
pub mod layout;
pub mod search;
pub mod summary;

use components::controls::FilterControls;
use components::detail::DetailPanel;
pub use components::force_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode, Selection};
use config::AppConfig;
use data::{DataError, Dataset, FightRecord};
use filters::FilterState;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ufc-graph: logging initialized");
}

/// Text content of the `<script>` element with the given id.
fn script_text(id: &'static str) -> Result<String, DataError> {
	let element = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
		.ok_or(DataError::MissingElement(id))?;
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| DataError::MissingElement(id))?;
	script.text().map_err(|_| DataError::MissingElement(id))
}

/// Load the fight table from `#fight-data` and the optional style lookup
/// from `#weight-class-lookup`. Expected format: CSV with a header row.
fn load_dataset() -> Dataset {
	let lookup = script_text("weight-class-lookup").ok();
	match script_text("fight-data").and_then(|fights| Dataset::from_csv(&fights, lookup.as_deref())) {
		Ok(dataset) => dataset,
		Err(e) => {
			warn!("ufc-graph: failed to load fight data: {}", e);
			Dataset::default()
		}
	}
}

fn load_config() -> AppConfig {
	script_text("app-config")
		.map(|text| AppConfig::from_json(&text))
		.unwrap_or_default()
}

fn open_search(search_url: &str, record: &FightRecord) {
	let url = match search::bout_search_url(search_url, record) {
		Ok(url) => url,
		Err(e) => {
			warn!("ufc-graph: bad search url `{}`: {}", search_url, e);
			return;
		}
	};
	if let Some(window) = web_sys::window() {
		if let Err(e) = window.open_with_url_and_target(url.as_str(), "_blank") {
			warn!("ufc-graph: could not open search tab: {:?}", e);
		}
	}
}

/// Main application component.
/// Loads the fight table from the DOM and renders the filtered bout graph.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let dataset = Arc::new(load_dataset());
	let filter = RwSignal::new(FilterState::initial(dataset.records(), &config.default_years));
	let layout = RwSignal::new(config.layout());
	let selection = RwSignal::new(None::<Selection>);

	let graph_data = Memo::new({
		let dataset = dataset.clone();
		move |_| filter.with(|f| graph::build_graph(f.matching(dataset.records()), dataset.lookup()))
	});

	// Any filter change drops the selection, even when the graph stays equal.
	Effect::new(move |prev: Option<()>| {
		filter.track();
		if prev.is_some() {
			selection.set(None);
		}
	});

	let on_select = Callback::new({
		let dataset = dataset.clone();
		let search_url = config.search_url.clone();
		move |picked: Option<Selection>| {
			debug!("ufc-graph: selected {:?}", picked);
			if let Some(record) = picked.as_ref().and_then(|s| match s {
				Selection::Bout(index) => dataset.record(*index),
				Selection::Fighter(_) => None,
			}) {
				open_search(&search_url, record);
			}
			selection.set(picked);
		}
	});

	let status = {
		let dataset = dataset.clone();
		move || {
			let shown = graph_data.with(|g| {
				format!(
					"{} fighters, {} bouts shown of {} loaded",
					g.nodes.len(),
					g.links.len(),
					dataset.len()
				)
			});
			match dataset.skipped() {
				0 => shown,
				skipped => format!("{} ({} malformed rows skipped)", shown, skipped),
			}
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="UFC Fight Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<ForceGraphCanvas
				data=graph_data
				layout=layout
				theme=config.theme()
				on_select=on_select
				selection=selection
				fullscreen=true
			/>
			<div class="graph-overlay">
				<h1>"UFC Fight Graph"</h1>
				<p class="subtitle">{status}</p>
				<p class="subtitle">
					"Arrows point from loser to winner. Click a fighter or bout for details."
				</p>
				<FilterControls dataset=dataset.clone() filter=filter layout=layout />
			</div>
			<DetailPanel
				dataset=dataset
				filter=filter
				selection=selection
				search_url=config.search_url.clone()
			/>
		</div>
	}
}
