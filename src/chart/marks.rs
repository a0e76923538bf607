//! Per-record visual primitives.

use crate::model::{CyclistRecord, GdpSample};
use crate::scale::{BandScale, LinearScale};

/// Dot radius in pixels for scatterplot marks.
pub const DOT_RADIUS: f32 = 6.0;

/// Category of a mark, from the two-valued enumeration the datasets carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkClass {
    Flagged,
    Unflagged,
}

impl MarkClass {
    /// CSS class name used in SVG output.
    pub fn css_class(&self) -> &'static str {
        match self {
            MarkClass::Flagged => "flagged",
            MarkClass::Unflagged => "unflagged",
        }
    }
}

/// Geometry of one visual primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkShape {
    Bar { x: f32, y: f32, width: f32, height: f32 },
    Dot { cx: f32, cy: f32, radius: f32 },
}

/// One positioned mark plus the raw field values the interaction layer
/// needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub shape: MarkShape,
    pub class: MarkClass,
    /// `data-*` attribute pairs carrying the record's raw domain values.
    pub data: Vec<(&'static str, String)>,
    /// Index of the source record in the dataset.
    pub record: usize,
}

impl Mark {
    /// Anchor position used for tooltip placement: bar top center, or dot
    /// center.
    pub fn anchor(&self) -> (f32, f32) {
        match self.shape {
            MarkShape::Bar { x, y, width, .. } => (x + width * 0.5, y),
            MarkShape::Dot { cx, cy, .. } => (cx, cy),
        }
    }
}

/// Project GDP samples onto bars. Bars share the unflagged class; the GDP
/// dataset carries no category field.
pub fn bar_marks(
    samples: &[GdpSample],
    x: &BandScale,
    y: &LinearScale,
    baseline: f32,
) -> Vec<Mark> {
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let top = y.map(sample.gdp);
            Mark {
                shape: MarkShape::Bar {
                    x: x.position(i),
                    y: top,
                    width: x.bandwidth(),
                    height: baseline - top,
                },
                class: MarkClass::Unflagged,
                data: vec![
                    ("data-date", sample.raw_date.clone()),
                    ("data-gdp", sample.gdp.to_string()),
                ],
                record: i,
            }
        })
        .collect()
}

/// Project cyclist records onto dots, classed by their doping flag.
pub fn dot_marks(records: &[CyclistRecord], x: &LinearScale, y: &LinearScale) -> Vec<Mark> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| Mark {
            shape: MarkShape::Dot {
                cx: x.map(record.year as f64),
                cy: y.map(record.time.seconds() as f64),
                radius: DOT_RADIUS,
            },
            class: if record.flagged() {
                MarkClass::Flagged
            } else {
                MarkClass::Unflagged
            },
            data: vec![
                ("data-xvalue", record.year.to_string()),
                ("data-yvalue", record.time.to_string()),
            ],
            record: i,
        })
        .collect()
}
