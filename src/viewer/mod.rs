//! Egui-based interactive chart viewer (feature = "egui").
//!
//! Displays one assembled [`crate::chart::ChartScene`]: hover tooltips,
//! the legend's trace toggle, and double-click clipboard copy, on a
//! pannable/zoomable canvas.

#![cfg(feature = "egui")]

mod geometry;
mod state;
mod ui;

pub use geometry::{dist_sq_to_segment, near_polyline};
pub use state::ChartApp;
