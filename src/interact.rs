//! Interaction state and display-text formatting.
//!
//! Everything here is pure: the viewer (or any other shell) drives these
//! state machines with pointer events and renders the returned content.
//! There is no queueing anywhere; the last hover always wins.

use crate::group::Trace;
use crate::model::{CyclistRecord, Dataset, GdpSample};
use anyhow::Result;

// ────────────────────────────────────────────────────────────────────────────
// State machines
// ────────────────────────────────────────────────────────────────────────────

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    /// Hovering a mark (index into the scene's mark list).
    Mark(usize),
    /// Hovering a trace (index into the scene's trace list).
    Trace(usize),
}

impl TooltipState {
    /// Hover entered mark `i`.
    pub fn over_mark(&mut self, i: usize) {
        *self = TooltipState::Mark(i);
    }

    /// Hover entered trace `i`.
    pub fn over_trace(&mut self, i: usize) {
        *self = TooltipState::Trace(i);
    }

    /// Hover left whatever was hovered.
    pub fn leave(&mut self) {
        *self = TooltipState::Hidden;
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, TooltipState::Hidden)
    }
}

/// Visibility of the trace overlay: one shared flag for all traces,
/// initially hidden. The legend control is the only transition, in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceOverlay {
    visible: bool,
}

impl TraceOverlay {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tooltip content
// ────────────────────────────────────────────────────────────────────────────

/// Formatted tooltip content for one hovered element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<String>,
    /// External reference URL. Only present when the record carries one, so
    /// an empty URL never produces a dead link affordance.
    pub reference: Option<String>,
}

/// Tooltip for a hovered GDP bar: `"<year> Q<quarter>"` plus the value.
pub fn gdp_tooltip(sample: &GdpSample) -> TooltipContent {
    TooltipContent {
        title: format!("{} Q{}", sample.date.year, sample.date.quarter()),
        lines: vec![format!("{} billion", sample.gdp)],
        reference: None,
    }
}

/// Tooltip for a hovered scatterplot dot.
pub fn cyclist_tooltip(record: &CyclistRecord) -> TooltipContent {
    let mut lines = vec![format!("Year: {}, Time: {}", record.year, record.time)];
    if let Some(note) = &record.doping {
        lines.push(note.clone());
    }
    TooltipContent {
        title: format!("{} ({})", record.name, record.nationality),
        lines,
        reference: record.url.clone(),
    }
}

/// Tooltip for a hovered trace: the rider name only.
pub fn trace_tooltip(trace: &Trace) -> TooltipContent {
    TooltipContent {
        title: trace.key.clone(),
        lines: Vec::new(),
        reference: None,
    }
}

/// Tooltip for whichever record a mark points at.
pub fn record_tooltip(dataset: &Dataset, record: usize) -> Option<TooltipContent> {
    match dataset {
        Dataset::Gdp(samples) => samples.get(record).map(gdp_tooltip),
        Dataset::Cyclists(records) => records.get(record).map(cyclist_tooltip),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Clipboard
// ────────────────────────────────────────────────────────────────────────────

/// Clipboard line for a GDP bar.
pub fn gdp_clipboard_text(sample: &GdpSample) -> String {
    format!("Date: {}, GDP: ${} billion", sample.raw_date, sample.gdp)
}

/// Clipboard line for a scatterplot dot.
pub fn cyclist_clipboard_text(record: &CyclistRecord) -> String {
    format!(
        "Name: {}, Year: {}, Time: {}",
        record.name, record.year, record.time
    )
}

/// Clipboard text for whichever record a mark points at.
pub fn clipboard_text(dataset: &Dataset, record: usize) -> Option<String> {
    match dataset {
        Dataset::Gdp(samples) => samples.get(record).map(gdp_clipboard_text),
        Dataset::Cyclists(records) => records.get(record).map(cyclist_clipboard_text),
    }
}

/// Write-only clipboard side channel. Failure surfaces to the caller and is
/// never retried.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}
