//! Canvas graph of fighters and the bouts between them.
//!
//! Renders an interactive graph on an HTML canvas with:
//! - Static layouts (grid, circle, rings, tree) and a force-directed one
//! - Animated transitions when the layout changes
//! - Pan, zoom, and node dragging interactions
//! - Click selection of fighters and bouts
//!
//! # Example
//!
//! ```ignore
//! use ufc_graph::components::force_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode};
//! use ufc_graph::layout::Layout;
//!
//! let data = GraphData {
//!     nodes: vec![
//!         GraphNode { id: "Jon Jones".into(), label: Some("Jon Jones".into()), group: None },
//!         GraphNode { id: "Daniel Cormier".into(), label: Some("Daniel Cormier".into()), group: None },
//!     ],
//!     links: vec![GraphLink {
//!         source: "Daniel Cormier".into(),
//!         target: "Jon Jones".into(),
//!         record: 0,
//!         decided: true,
//!         title: true,
//!     }],
//! };
//!
//! view! { <ForceGraphCanvas data=data layout=Layout::Circle fullscreen=true /> }
//! ```

mod component;
mod render;
mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode, Selection};
