//! JSON chart datasets rendered to SVG.
//!
//! This crate loads small JSON datasets (quarterly GDP samples, cyclist
//! climb records), maps them onto pixel coordinates, groups repeated
//! entities into connecting traces, and serializes the assembled scene as
//! a standalone SVG document.
//!
//! The binary `chartgen` renders dataset files from the command line.

pub mod chart;
pub mod group;
pub mod interact;
pub mod loader;
pub mod model;
pub mod scale;

// Optional GUI functionality lives behind the `egui` feature flag.
// This module provides an interactive viewer for assembled chart scenes
// and is used by the demo in demos/view_cyclists.rs.
#[cfg(feature = "egui")]
pub mod viewer;
