//! Zoom-dependent scaling configuration for graph visuals.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: The coordinate system of the graph. Values in world-space
//!   scale proportionally with zoom (appear larger when zoomed in).
//! - **Screen-space**: Pixel coordinates on the canvas. Values in screen-space
//!   remain constant regardless of zoom level.
//!
//! Node and arrow sizes are world-space but clamped to screen-space bounds so
//! fighters stay clickable when zoomed far out.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// Compute the world-space value for a given base value and zoom level.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Defines how alpha/opacity scales with zoom level.
#[derive(Clone, Debug, PartialEq)]
pub enum AlphaBehavior {
	/// Alpha scales linearly with zoom, clamped to [0, 1].
	ScaleWithZoom,
	/// Fully visible at `full_alpha_k`, fades to zero at `zero_alpha_k`.
	Fade { zero_alpha_k: f64, full_alpha_k: f64 },
}

impl AlphaBehavior {
	/// Compute alpha multiplier for a given zoom level.
	pub fn apply(&self, k: f64) -> f64 {
		match self {
			AlphaBehavior::ScaleWithZoom => k.clamp(0.0, 1.0),
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				((k - zero_alpha_k) / (full_alpha_k - zero_alpha_k)).clamp(0.0, 1.0)
			}
		}
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units.
	pub radius: f64,
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Minimum zoom level for label font scaling.
	pub label_min_k: f64,
	/// Labels are hidden below this zoom unless highlighted.
	pub label_hide_k: f64,
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Base line width in screen pixels.
	pub line_width: f64,
	/// Width multiplier for the selected bout.
	pub selected_width: f64,
	/// Dash pattern (dash, gap) in world units, used for undecided bouts.
	pub dash_pattern: (f64, f64),
	/// When faded out, undecided bouts render solid.
	pub dash_alpha_behavior: AlphaBehavior,
	/// Click distance to an edge, in screen pixels.
	pub hit_tolerance: f64,
}

/// Configuration for arrow visual scaling.
#[derive(Clone, Debug)]
pub struct ArrowScaleConfig {
	/// Base arrow size in world units.
	pub size: f64,
	pub size_behavior: ScaleBehavior,
	pub alpha_behavior: AlphaBehavior,
	/// Minimum alpha to bother drawing.
	pub cull_alpha: f64,
}

/// Configuration for hover and selection rings.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width in screen pixels.
	pub width: f64,
	/// Offset from node edge in screen pixels.
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
	pub arrow: ArrowScaleConfig,
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 6.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 4.0,
					max_screen: f64::INFINITY,
				},
				hit_radius: 12.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				label_size: 11.0,
				label_min_k: 0.5,
				label_hide_k: 0.35,
			},
			edge: EdgeScaleConfig {
				line_width: 1.5,
				selected_width: 2.5,
				dash_pattern: (6.0, 4.0),
				dash_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.3,
					full_alpha_k: 0.7,
				},
				hit_tolerance: 5.0,
			},
			arrow: ArrowScaleConfig {
				size: 7.0,
				size_behavior: ScaleBehavior::Clamped {
					min_screen: 0.0,
					max_screen: 18.0,
				},
				alpha_behavior: AlphaBehavior::ScaleWithZoom,
				cull_alpha: 0.05,
			},
			ring: RingScaleConfig {
				width: 1.5,
				offset: 2.0,
			},
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame and pass it to rendering functions.
/// All sizes are in world-space (ready to use after canvas transform).
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Current zoom level.
	pub k: f64,
	pub node_radius: f64,
	pub hit_radius: f64,
	/// Edge click tolerance in world-space.
	pub edge_hit: f64,
	/// Label font string (e.g., "10px sans-serif").
	pub label_font: String,
	pub show_labels: bool,
	pub edge_line_width: f64,
	pub selected_line_width: f64,
	pub dash_pattern: (f64, f64),
	/// Dash pattern visibility [0, 1]. At 0, undecided bouts are solid lines.
	pub dash_alpha: f64,
	pub arrow_size: f64,
	pub arrow_alpha: f64,
	/// Whether to skip drawing arrows (alpha below threshold).
	pub cull_arrows: bool,
	pub ring_width: f64,
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Compute scaled values from configuration and current zoom level.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let arrow_alpha = config.arrow.alpha_behavior.apply(k);
		let edge_line_width = ScaleBehavior::Screen.apply(config.edge.line_width, k);

		Self {
			k,
			node_radius: config.node.radius_behavior.apply(config.node.radius, k),
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, k),
			edge_hit: ScaleBehavior::Screen.apply(config.edge.hit_tolerance, k),
			label_font: format!(
				"{}px sans-serif",
				config.node.label_size / k.max(config.node.label_min_k)
			),
			show_labels: k >= config.node.label_hide_k,
			edge_line_width,
			selected_line_width: edge_line_width * config.edge.selected_width,
			dash_pattern: config.edge.dash_pattern,
			dash_alpha: config.edge.dash_alpha_behavior.apply(k),
			arrow_size: config.arrow.size_behavior.apply(config.arrow.size, k),
			arrow_alpha,
			cull_arrows: arrow_alpha < config.arrow.cull_alpha,
			ring_width: ScaleBehavior::Screen.apply(config.ring.width, k),
			ring_offset: ScaleBehavior::Screen.apply(config.ring.offset, k),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamped_sizes_respect_screen_bounds() {
		let behavior = ScaleBehavior::Clamped {
			min_screen: 4.0,
			max_screen: 20.0,
		};
		assert_eq!(behavior.apply(6.0, 1.0), 6.0);
		// Zoomed out to 10%, 6 world units would be 0.6px; clamp to 4px.
		assert!((behavior.apply(6.0, 0.1) * 0.1 - 4.0).abs() < 1e-9);
		assert!((behavior.apply(6.0, 5.0) * 5.0 - 20.0).abs() < 1e-9);
	}

	#[test]
	fn fade_is_linear_between_thresholds() {
		let fade = AlphaBehavior::Fade {
			zero_alpha_k: 0.2,
			full_alpha_k: 0.6,
		};
		assert_eq!(fade.apply(0.1), 0.0);
		assert!((fade.apply(0.4) - 0.5).abs() < 1e-9);
		assert_eq!(fade.apply(2.0), 1.0);
	}

	#[test]
	fn labels_hide_when_zoomed_out() {
		let config = ScaleConfig::default();
		assert!(ScaledValues::new(&config, 1.0).show_labels);
		assert!(!ScaledValues::new(&config, 0.2).show_labels);
	}
}
