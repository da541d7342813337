//! UI components: the graph canvas and the panels layered over it.

pub mod controls;
pub mod detail;
pub mod force_graph;
