//! Fixed-order assembly of chart scenes.
//!
//! Every scene goes through the same stages: scales, marks, traces, axes,
//! legend. The stages never interleave and the scene is rebuilt from
//! scratch if the dataset changes.

use super::axis::{self, Axis, Orientation};
use super::legend::Legend;
use super::marks::{self, Mark};
use crate::group::{Trace, group_repeats};
use crate::model::{CyclistRecord, Dataset, GdpSample};
use crate::scale::{BandScale, LinearScale};
use anyhow::Result;

/// Pixel viewport of a chart: total size plus the margin reserved for the
/// axes on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Viewport {
    /// Default margin leaves room for axis ticks and labels.
    pub const DEFAULT_MARGIN: f32 = 63.0;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin: Self::DEFAULT_MARGIN,
        }
    }

    /// Horizontal pixel range of the plotting area (left → right).
    pub fn x_range(&self) -> (f32, f32) {
        (self.margin, self.width - self.margin)
    }

    /// Vertical pixel range of the plotting area (bottom → top).
    pub fn y_range(&self) -> (f32, f32) {
        (self.height - self.margin, self.margin)
    }

    /// Bottom edge of the plotting area (the bar baseline).
    pub fn baseline(&self) -> f32 {
        self.height - self.margin
    }

    /// True when a point lies inside the plotting area, margins inclusive.
    pub fn contains(&self, (x, y): (f32, f32)) -> bool {
        x >= self.margin
            && x <= self.width - self.margin
            && y >= self.margin
            && y <= self.height - self.margin
    }
}

/// A fully assembled chart, ready for SVG serialization or interactive
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub title: String,
    pub viewport: Viewport,
    pub marks: Vec<Mark>,
    pub traces: Vec<Trace>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

/// Assemble the quarterly GDP bar chart.
///
/// The y domain is anchored at zero so bar heights are comparable; the
/// x axis shows one tick per year divisible by 5.
pub fn gdp_chart(samples: &[GdpSample], viewport: Viewport) -> Result<ChartScene> {
    let x = BandScale::fit(samples.len(), viewport.x_range(), 0.3)?;
    let y = LinearScale::fit(samples.iter().map(|s| s.gdp), viewport.y_range())?.including(0.0);

    let marks = marks::bar_marks(samples, &x, &y, viewport.baseline());

    let first = samples.first().map(|s| s.date.year).unwrap_or_default();
    let last = samples.last().map(|s| s.date.year).unwrap_or_default();
    let x_axis = Axis {
        orientation: Orientation::Bottom,
        ticks: axis::quarter_year_ticks(samples, &x),
        label: format!("Year (Quarterly from {first} to {last})"),
    };
    let y_axis = Axis {
        orientation: Orientation::Left,
        ticks: axis::value_ticks(&y, 10),
        label: "Gross Domestic Product (billions of dollars)".to_string(),
    };

    Ok(ChartScene {
        title: "United States GDP".to_string(),
        viewport,
        marks,
        traces: Vec::new(),
        x_axis,
        y_axis,
        legend: Legend::none(),
    })
}

/// Assemble the cyclist climb-time scatterplot.
///
/// Both domains are padded by one unit of their natural granularity (one
/// year, one second) so extreme points sit inside the plotting area.
/// Riders appearing more than once get a connecting trace.
pub fn cyclists_chart(records: &[CyclistRecord], viewport: Viewport) -> Result<ChartScene> {
    let x = LinearScale::fit(records.iter().map(|r| r.year as f64), viewport.x_range())?
        .with_padding(1.0);
    let y = LinearScale::fit(
        records.iter().map(|r| r.time.seconds() as f64),
        viewport.y_range(),
    )?
    .with_padding(1.0);

    let marks = marks::dot_marks(records, &x, &y);
    let traces = group_repeats(
        records,
        |r| r.name.as_str(),
        |r| r.flagged(),
        |r| (x.map(r.year as f64), y.map(r.time.seconds() as f64)),
    );

    let x_axis = Axis {
        orientation: Orientation::Bottom,
        ticks: axis::year_ticks(&x, 2),
        label: "Year".to_string(),
    };
    let y_axis = Axis {
        orientation: Orientation::Left,
        ticks: axis::time_ticks(&y, 30),
        label: "Time to climb (minutes:seconds)".to_string(),
    };

    Ok(ChartScene {
        title: "Doping in Professional Bicycle Racing".to_string(),
        viewport,
        marks,
        traces,
        x_axis,
        y_axis,
        legend: Legend::for_cyclists(),
    })
}

/// Assemble the scene matching the dataset kind.
pub fn scene_for(dataset: &Dataset, viewport: Viewport) -> Result<ChartScene> {
    match dataset {
        Dataset::Gdp(samples) => gdp_chart(samples, viewport),
        Dataset::Cyclists(records) => cyclists_chart(records, viewport),
    }
}
