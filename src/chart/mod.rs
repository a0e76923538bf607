//! Chart scene assembly and serialization.
//!
//! Sub-modules split the chart layer into focused areas:
//!
//! - [`marks`] – per-record visual primitives (bars, dots)
//! - [`axis`] – tick generation and axis descriptions
//! - [`legend`] – category legend data
//! - [`scene`] – fixed-order assembly of a full [`ChartScene`]
//! - [`svg`] – standalone SVG serialization

pub mod axis;
pub mod legend;
pub mod marks;
pub mod scene;
pub mod svg;

pub use axis::{Axis, Orientation, Tick};
pub use legend::{Legend, LegendEntry};
pub use marks::{Mark, MarkClass, MarkShape};
pub use scene::{ChartScene, Viewport, cyclists_chart, gdp_chart, scene_for};
pub use svg::{SvgOptions, scene_to_svg};
