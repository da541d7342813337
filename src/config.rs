//! Page-level settings, read from an optional JSON `<script id="app-config">`.

use log::warn;
use serde::Deserialize;

use crate::components::force_graph::Theme;
use crate::layout::Layout;

/// Settings for the app. Missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Search endpoint for bout links; the query goes in `q`.
	pub search_url: String,
	/// Layout name used on first render.
	pub default_layout: String,
	/// Years selected on first render. Empty means the newest year.
	pub default_years: Vec<i32>,
	/// Theme name, see [`Theme::by_name`].
	pub theme: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			search_url: "https://www.google.com/search".to_string(),
			default_layout: Layout::default().name().to_string(),
			default_years: Vec::new(),
			theme: "default".to_string(),
		}
	}
}

impl AppConfig {
	/// Parse config JSON, falling back to defaults on error.
	pub fn from_json(text: &str) -> Self {
		if text.trim().is_empty() {
			return Self::default();
		}
		serde_json::from_str(text).unwrap_or_else(|e| {
			warn!("ufc-graph: ignoring malformed config: {}", e);
			Self::default()
		})
	}

	/// Configured initial layout, or the default if unknown.
	pub fn layout(&self) -> Layout {
		self.default_layout.parse().unwrap_or_else(|e| {
			warn!("ufc-graph: {}, using {}", e, Layout::default());
			Layout::default()
		})
	}

	/// Configured theme, or the default if unknown.
	pub fn theme(&self) -> Theme {
		Theme::by_name(&self.theme).unwrap_or_else(|| {
			warn!("ufc-graph: unknown theme `{}`, using default", self.theme);
			Theme::default()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_config_keeps_defaults() {
		let config = AppConfig::from_json(r#"{ "default_years": [2018, 2019] }"#);
		assert_eq!(config.default_years, vec![2018, 2019]);
		assert_eq!(config.search_url, AppConfig::default().search_url);
		assert_eq!(config.layout(), Layout::Grid);
	}

	#[test]
	fn malformed_config_falls_back() {
		assert_eq!(AppConfig::from_json("{ not json"), AppConfig::default());
		assert_eq!(AppConfig::from_json("   "), AppConfig::default());
	}

	#[test]
	fn layout_and_theme_resolve_by_name() {
		let config = AppConfig::from_json(
			r#"{ "default_layout": "concentric", "theme": "midnight", "search_url": "https://duckduckgo.com/" }"#,
		);
		assert_eq!(config.layout(), Layout::Concentric);
		assert_eq!(config.theme().name, "midnight");
		assert_eq!(config.search_url, "https://duckduckgo.com/");
	}

	#[test]
	fn unknown_names_fall_back() {
		let config = AppConfig::from_json(r#"{ "default_layout": "spiral", "theme": "neon" }"#);
		assert_eq!(config.layout(), Layout::Grid);
		assert_eq!(config.theme().name, "default");
	}
}
