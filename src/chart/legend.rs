//! Category legend data.

use super::marks::MarkClass;

/// One legend entry: a category swatch plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub class: MarkClass,
    pub label: String,
}

/// Chart legend.
///
/// `trace_toggle`, when present, names the control entry that flips the
/// trace overlay. The interactive viewer treats a click on it as the
/// toggle transition; SVG output draws it statically.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub trace_toggle: Option<String>,
}

impl Legend {
    /// The scatterplot legend: both categories plus the trace toggle.
    pub fn for_cyclists() -> Self {
        Self {
            entries: vec![
                LegendEntry {
                    class: MarkClass::Flagged,
                    label: "Riders with doping allegations".to_string(),
                },
                LegendEntry {
                    class: MarkClass::Unflagged,
                    label: "No doping allegations".to_string(),
                },
            ],
            trace_toggle: Some("Show career traces".to_string()),
        }
    }

    /// An empty legend (bar chart).
    pub fn none() -> Self {
        Self {
            entries: Vec::new(),
            trace_toggle: None,
        }
    }
}
