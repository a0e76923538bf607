//! Typed records for the supported chart datasets.
//!
//! Two dataset families are supported:
//!
//! - quarterly GDP samples (`["YYYY-MM-DD", value]` pairs), rendered as a
//!   bar chart
//! - cyclist climb records, rendered as a scatterplot with connecting
//!   traces for riders that appear more than once
//!
//! Records are immutable once loaded. Loading and shape detection live in
//! [`crate::loader`].

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// QuarterDate
// ────────────────────────────────────────────────────────────────────────────

/// Calendar date of a quarterly sample, parsed from `YYYY-MM-DD`.
///
/// Only year and month are retained; the day carries no meaning for
/// quarterly data beyond validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuarterDate {
    pub year: i32,
    pub month: u32,
}

impl QuarterDate {
    /// Parse a `YYYY-MM-DD` date string.
    pub fn parse(s: &str) -> Result<Self> {
        let mut it = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (it.next(), it.next(), it.next()) else {
            bail!("Invalid date {:?}: expected YYYY-MM-DD", s);
        };
        let year: i32 = y
            .parse()
            .with_context(|| format!("Invalid year in date {:?}", s))?;
        let month: u32 = m
            .parse()
            .with_context(|| format!("Invalid month in date {:?}", s))?;
        let day: u32 = d
            .parse()
            .with_context(|| format!("Invalid day in date {:?}", s))?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            bail!("Out-of-range date {:?}", s);
        }
        Ok(Self { year, month })
    }

    /// Quarter of the year (1–4) this date falls in.
    pub fn quarter(&self) -> u32 {
        (self.month - 1) / 3 + 1
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ClimbTime
// ────────────────────────────────────────────────────────────────────────────

/// A climb duration in whole seconds, parsed from `m:ss`.
///
/// Durations stay plain seconds end to end; they are never anchored to a
/// calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClimbTime(pub u32);

impl ClimbTime {
    /// Parse a `m:ss` / `mm:ss` duration string.
    pub fn parse(s: &str) -> Result<Self> {
        let (m, sec) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid time {:?}: expected m:ss", s))?;
        let minutes: u32 = m
            .parse()
            .with_context(|| format!("Invalid minutes in time {:?}", s))?;
        let seconds: u32 = sec
            .parse()
            .with_context(|| format!("Invalid seconds in time {:?}", s))?;
        if sec.len() != 2 || seconds >= 60 {
            bail!(
                "Invalid seconds in time {:?}: expected two digits below 60",
                s
            );
        }
        Ok(Self(minutes * 60 + seconds))
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClimbTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GDP samples
// ────────────────────────────────────────────────────────────────────────────

/// One quarterly GDP sample.
#[derive(Debug, Clone, PartialEq)]
pub struct GdpSample {
    pub date: QuarterDate,
    /// Raw date string as it appeared in the dataset, kept for display and
    /// clipboard output.
    pub raw_date: String,
    /// GDP in billions of dollars.
    pub gdp: f64,
}

impl GdpSample {
    /// Build a sample from one `[date, value]` dataset pair.
    pub fn from_pair(date: &str, value: f64) -> Result<Self> {
        Ok(Self {
            date: QuarterDate::parse(date)?,
            raw_date: date.to_string(),
            gdp: value,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cyclist records
// ────────────────────────────────────────────────────────────────────────────

/// Raw cyclist record as found in the dataset. Field names follow the
/// source JSON; extra fields (`Place`, `Seconds`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCyclist {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Nationality", default)]
    pub nationality: String,
    #[serde(rename = "Doping", default)]
    pub doping: String,
    #[serde(rename = "URL", default)]
    pub url: String,
}

/// One cyclist climb record.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclistRecord {
    pub name: String,
    pub year: i32,
    pub time: ClimbTime,
    pub nationality: String,
    /// Doping allegation text; `None` when the record is clean.
    pub doping: Option<String>,
    /// Reference URL for the allegation; `None` when the dataset carries an
    /// empty string.
    pub url: Option<String>,
}

impl CyclistRecord {
    /// True if this record carries a doping allegation.
    pub fn flagged(&self) -> bool {
        self.doping.is_some()
    }
}

impl TryFrom<RawCyclist> for CyclistRecord {
    type Error = anyhow::Error;

    fn try_from(raw: RawCyclist) -> Result<Self> {
        let time =
            ClimbTime::parse(&raw.time).with_context(|| format!("Record for {:?}", raw.name))?;
        Ok(Self {
            name: raw.name,
            year: raw.year,
            time,
            nationality: raw.nationality,
            doping: none_if_empty(raw.doping),
            url: none_if_empty(raw.url),
        })
    }
}

fn none_if_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

// ────────────────────────────────────────────────────────────────────────────
// Dataset
// ────────────────────────────────────────────────────────────────────────────

/// Kind of a chart dataset, as detected or requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Gdp,
    Cyclists,
}

/// A fully loaded dataset, ready for scene assembly.
#[derive(Debug, Clone)]
pub enum Dataset {
    Gdp(Vec<GdpSample>),
    Cyclists(Vec<CyclistRecord>),
}

impl Dataset {
    pub fn kind(&self) -> DatasetKind {
        match self {
            Dataset::Gdp(_) => DatasetKind::Gdp,
            Dataset::Cyclists(_) => DatasetKind::Cyclists,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Gdp(samples) => samples.len(),
            Dataset::Cyclists(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
