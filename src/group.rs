//! Grouping of repeated entities into connecting traces.

use indexmap::IndexMap;

/// A connecting path through the projected positions of one entity that
/// appears more than once in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Identity key shared by the grouped records (the rider name).
    pub key: String,
    /// Projected positions in input order; always at least two.
    pub points: Vec<(f32, f32)>,
    /// Category flag inherited from the first-seen record of this key.
    pub flagged: bool,
}

/// Group records by identity key and keep only the keys that occur more
/// than once.
///
/// One linear pass: positions accumulate per key in input order and traces
/// come out in first-seen key order. When records of one key disagree on
/// their flag, the first-seen record wins.
pub fn group_repeats<T>(
    items: &[T],
    key_of: impl Fn(&T) -> &str,
    flagged_of: impl Fn(&T) -> bool,
    position_of: impl Fn(&T) -> (f32, f32),
) -> Vec<Trace> {
    let mut groups: IndexMap<String, Trace> = IndexMap::new();
    for item in items {
        let key = key_of(item);
        let entry = groups.entry(key.to_string()).or_insert_with(|| Trace {
            key: key.to_string(),
            points: Vec::new(),
            flagged: flagged_of(item),
        });
        entry.points.push(position_of(item));
    }
    groups
        .into_values()
        .filter(|trace| trace.points.len() > 1)
        .collect()
}
