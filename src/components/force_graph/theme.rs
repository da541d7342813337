//! Visual theming for the force graph.
//!
//! Provides colors, per-weight-class node colors and the named themes.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS text: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string. Supports hex (`#RRGGBB`) and
	/// `rgb()`/`rgba()` functional notation; anything else is mid gray.
	pub fn parse(color_str: &str) -> Color {
		if color_str.starts_with('#') && color_str.len() == 7 {
			let channel = |range: std::ops::Range<usize>| {
				color_str
					.get(range)
					.and_then(|hex| u8::from_str_radix(hex, 16).ok())
					.unwrap_or(128)
			};
			Color::rgb(channel(1..3), channel(3..5), channel(5..7))
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.map(str::trim)
				.collect();
			let channel = |i: usize| nums.get(i).and_then(|s| s.parse().ok()).unwrap_or(128);
			let a = nums.get(3).and_then(|s| s.parse().ok()).unwrap_or(1.0);
			Color::rgba(channel(0), channel(1), channel(2), a)
		} else {
			Color::rgb(128, 128, 128)
		}
	}
}

/// Node color for a weight class, if it is one of the known divisions.
pub fn weight_class_color(class: &str) -> Option<Color> {
	let color = match class {
		"Women's Strawweight" => Color::rgb(240, 98, 146),
		"Women's Flyweight" => Color::rgb(186, 104, 200),
		"Women's Bantamweight" => Color::rgb(149, 117, 205),
		"Women's Featherweight" => Color::rgb(121, 134, 203),
		"Flyweight" => Color::rgb(79, 195, 247),
		"Bantamweight" => Color::rgb(77, 182, 172),
		"Featherweight" => Color::rgb(129, 199, 132),
		"Lightweight" => Color::rgb(174, 213, 129),
		"Welterweight" => Color::rgb(255, 213, 79),
		"Middleweight" => Color::rgb(255, 167, 38),
		"Light Heavyweight" => Color::rgb(255, 112, 67),
		"Heavyweight" => Color::rgb(229, 57, 53),
		"Catch Weight" => Color::rgb(161, 136, 127),
		"Open Weight" => Color::rgb(144, 164, 174),
		_ => return None,
	};
	Some(color)
}

/// Fallback colors for nodes without a known weight class.
#[derive(Clone, Debug)]
pub struct NodePalette {
	/// Colors, cycled by node index.
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted slate blues and teals
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),
				Color::rgb(129, 161, 193),
				Color::rgb(100, 148, 160),
				Color::rgb(136, 160, 175),
			],
		}
	}

	/// Cool teals and purples
	pub fn aurora() -> Self {
		Self {
			colors: vec![
				Color::rgb(100, 145, 135),
				Color::rgb(115, 135, 155),
				Color::rgb(130, 120, 150),
				Color::rgb(120, 130, 160),
			],
		}
	}

	/// Soft pastels for the flat theme
	pub fn pastel() -> Self {
		Self {
			colors: vec![
				Color::rgb(200, 180, 190),
				Color::rgb(180, 195, 205),
				Color::rgb(190, 200, 180),
				Color::rgb(205, 195, 180),
			],
		}
	}

	/// Color for `index`, wrapping around.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for the radial gradient centre
	pub color_secondary: Color,
	/// Whether to draw the radial gradient
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Base edge color
	pub color: Color,
	/// Color of the selected bout
	pub selected_color: Color,
	/// Color of title bouts
	pub title_color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	/// Border/stroke color
	pub border_color: Color,
	/// Ring drawn around the selected fighter
	pub selected_ring: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Name used by [`Theme::by_name`].
	pub name: &'static str,
	/// Canvas background.
	pub background: BackgroundStyle,
	/// Bout lines.
	pub edge: EdgeStyle,
	/// Fighter nodes.
	pub node: NodeStyle,
	/// Fallback node colors.
	pub palette: NodePalette,
}

impl Theme {
	/// Names accepted by [`Theme::by_name`].
	pub const NAMES: [&'static str; 3] = ["default", "midnight", "minimal"];

	/// Look up a theme by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default_theme()),
			"midnight" => Some(Self::midnight()),
			"minimal" => Some(Self::minimal()),
			_ => None,
		}
	}

	/// Dark theme with subtle gradients (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
				vignette: 0.15,
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.5),
				selected_color: Color::rgba(255, 255, 255, 0.95),
				title_color: Color::rgba(255, 202, 40, 0.7),
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				selected_ring: Color::rgba(255, 255, 255, 0.9),
			},
			palette: NodePalette::slate(),
		}
	}

	/// Darker background, cooler palette
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(18, 20, 28),
				color_secondary: Color::rgb(25, 28, 38),
				use_gradient: true,
				vignette: 0.2,
			},
			edge: EdgeStyle {
				color: Color::rgba(100, 120, 150, 0.45),
				selected_color: Color::rgba(220, 230, 255, 0.95),
				title_color: Color::rgba(230, 190, 90, 0.65),
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				selected_ring: Color::rgba(220, 230, 255, 0.9),
			},
			palette: NodePalette::aurora(),
		}
	}

	/// Flat fills, no gradients or vignette
	pub fn minimal() -> Self {
		Self {
			name: "minimal",
			background: BackgroundStyle {
				color: Color::rgb(25, 28, 35),
				color_secondary: Color::rgb(25, 28, 35),
				use_gradient: false,
				vignette: 0.0,
			},
			edge: EdgeStyle {
				color: Color::rgba(130, 145, 165, 0.4),
				selected_color: Color::rgba(255, 255, 255, 0.9),
				title_color: Color::rgba(255, 202, 40, 0.6),
			},
			node: NodeStyle {
				use_gradient: false,
				border_width: 1.0,
				border_color: Color::rgba(255, 255, 255, 0.3),
				selected_ring: Color::rgba(255, 255, 255, 0.9),
			},
			palette: NodePalette::pastel(),
		}
	}

	/// Node color for a style class, falling back to the palette.
	pub fn class_color(&self, class: Option<&str>, fallback_index: usize) -> Color {
		class
			.and_then(weight_class_color)
			.unwrap_or_else(|| self.palette.get(fallback_index))
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_and_functional_colors() {
		assert_eq!(Color::parse("#ff8000"), Color::rgb(255, 128, 0));
		assert_eq!(Color::parse("rgb(1, 2, 3)"), Color::rgb(1, 2, 3));
		assert_eq!(Color::parse("rgba(1, 2, 3, 0.5)"), Color::rgba(1, 2, 3, 0.5));
		assert_eq!(Color::parse("teal"), Color::rgb(128, 128, 128));
		assert_eq!(Color::parse("#zz0000"), Color::rgb(128, 0, 0));
	}

	#[test]
	fn css_output_drops_opaque_alpha() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
	}

	#[test]
	fn every_named_theme_resolves() {
		for name in Theme::NAMES {
			assert_eq!(Theme::by_name(name).map(|t| t.name), Some(name));
		}
		assert!(Theme::by_name("neon").is_none());
	}

	#[test]
	fn class_colors_fall_back_to_palette() {
		let theme = Theme::default();
		assert_eq!(
			theme.class_color(Some("Heavyweight"), 0),
			Color::rgb(229, 57, 53)
		);
		assert_eq!(theme.class_color(Some("Super Heavyweight"), 1), theme.palette.get(1));
		assert_eq!(theme.class_color(None, 5), theme.palette.get(5));
	}
}
