//! Year, weight-class and layout pickers.

use std::sync::Arc;

use leptos::prelude::*;
use log::{debug, warn};

use super::force_graph::theme::weight_class_color;
use crate::data::Dataset;
use crate::filters::{FilterState, year_options};
use crate::layout::Layout;

/// Filter and layout controls. Changing the years resets the weight-class
/// selection to the busiest class in those years.
#[component]
pub fn FilterControls(
	dataset: Arc<Dataset>,
	filter: RwSignal<FilterState>,
	layout: RwSignal<Layout>,
) -> impl IntoView {
	let year_boxes = year_options(dataset.records())
		.into_iter()
		.map(|year| {
			let dataset = dataset.clone();
			let on_change = move |_: leptos::ev::Event| {
				filter.update(|f| f.toggle_year(dataset.records(), year));
				filter.with_untracked(|f| {
					debug!(
						"ufc-graph: years {:?}, weight classes {:?}",
						f.years, f.weight_classes
					)
				});
			};
			view! {
				<label class="filter-option">
					<input
						type="checkbox"
						prop:checked=move || filter.with(|f| f.years.contains(&year))
						on:change=on_change
					/>
					{year}
				</label>
			}
		})
		.collect_view();

	let class_boxes = move || {
		let options = filter.with(|f| f.weight_class_options.clone());
		if options.is_empty() {
			return view! { <p class="filter-empty">"No bouts in the selected years."</p> }
				.into_any();
		}
		options
			.into_iter()
			.map(weight_class_option(filter))
			.collect_view()
			.into_any()
	};

	let on_layout = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<Layout>() {
		Ok(next) => layout.set(next),
		Err(e) => warn!("ufc-graph: {}", e),
	};

	view! {
		<div class="controls">
			<fieldset class="filter-group">
				<legend>"Year"</legend>
				{year_boxes}
			</fieldset>
			<fieldset class="filter-group">
				<legend>"Weight class"</legend>
				{class_boxes}
			</fieldset>
			<label class="layout-picker">
				"Layout "
				<select on:change=on_layout>
					{Layout::ALL
						.into_iter()
						.map(|l| {
							view! {
								<option value=l.name() selected=move || layout.get() == l>
									{l.label()}
								</option>
							}
						})
						.collect_view()}
				</select>
			</label>
		</div>
	}
}

fn weight_class_option(filter: RwSignal<FilterState>) -> impl Fn(String) -> AnyView {
	move |class| {
		let swatch = weight_class_color(&class)
			.map(|c| format!("background: {};", c.to_css()))
			.unwrap_or_default();
		let (checked, toggled) = (class.clone(), class.clone());
		view! {
			<label class="filter-option">
				<input
					type="checkbox"
					prop:checked=move || filter.with(|f| f.weight_classes.contains(&checked))
					on:change=move |ev| {
						let want = event_target_checked(&ev);
						filter.update(|f| {
							if f.weight_classes.contains(&toggled) != want {
								f.toggle_weight_class(&toggled);
							}
						});
					}
				/>
				<span class="swatch" style=swatch></span>
				{class}
			</label>
		}
		.into_any()
	}
}
