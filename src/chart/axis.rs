//! Axis tick generation.
//!
//! Ticks are computed as pure data; serialization and the viewer draw
//! them. All builders read the scale's domain, which was fixed at fit time.

use crate::model::{ClimbTime, GdpSample};
use crate::scale::{BandScale, LinearScale};
use std::collections::BTreeSet;

/// Which side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// A single axis tick: pixel offset along the axis plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f32,
    pub label: String,
}

/// A fully computed axis: placed ticks plus a descriptive label.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub ticks: Vec<Tick>,
    pub label: String,
}

/// Ticks for the quarterly GDP x axis: one per year divisible by 5,
/// deduplicated across the four quarterly samples of that year.
pub fn quarter_year_ticks(samples: &[GdpSample], scale: &BandScale) -> Vec<Tick> {
    let mut seen: BTreeSet<i32> = BTreeSet::new();
    let mut ticks = Vec::new();
    for (i, sample) in samples.iter().enumerate() {
        let year = sample.date.year;
        if year % 5 == 0 && seen.insert(year) {
            ticks.push(Tick {
                offset: scale.position(i),
                label: year.to_string(),
            });
        }
    }
    ticks
}

/// Integer year ticks for a linear year scale, every `step` years.
pub fn year_ticks(scale: &LinearScale, step: i32) -> Vec<Tick> {
    debug_assert!(step > 0);
    let (d0, d1) = scale.domain();
    let mut year = d0.ceil() as i32;
    while year.rem_euclid(step) != 0 {
        year += 1;
    }
    let mut ticks = Vec::new();
    while (year as f64) <= d1 {
        ticks.push(Tick {
            offset: scale.map(year as f64),
            label: year.to_string(),
        });
        year += step;
    }
    ticks
}

/// Climb-time ticks every `step` seconds, labeled `m:ss`.
pub fn time_ticks(scale: &LinearScale, step: u32) -> Vec<Tick> {
    debug_assert!(step > 0);
    let (d0, d1) = scale.domain();
    let start = d0.max(0.0).ceil() as u32;
    let mut s = start.div_ceil(step) * step;
    let mut ticks = Vec::new();
    while (s as f64) <= d1 {
        ticks.push(Tick {
            offset: scale.map(s as f64),
            label: ClimbTime(s).to_string(),
        });
        s += step;
    }
    ticks
}

/// Linear value ticks on "nice" steps (1/2/5 × 10^k), at most `max_ticks`.
pub fn value_ticks(scale: &LinearScale, max_ticks: usize) -> Vec<Tick> {
    let (d0, d1) = scale.domain();
    let span = d1 - d0;
    if span <= 0.0 || max_ticks == 0 {
        return Vec::new();
    }
    let step = nice_step(span / max_ticks as f64);
    let first = (d0 / step).ceil() as i64;
    let last = (d1 / step).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            Tick {
                offset: scale.map(v),
                label: format_value(v),
            }
        })
        .collect()
}

/// Round `raw` up to the nearest 1/2/5 × 10^k step.
fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.abs().log10().floor());
    let norm = raw / mag;
    let factor = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * mag
}

fn format_value(v: f64) -> String {
    if v == v.trunc() {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
