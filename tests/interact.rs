use chartgen::group::Trace;
use chartgen::interact::{
    ClipboardSink, TooltipState, TraceOverlay, clipboard_text, cyclist_clipboard_text,
    cyclist_tooltip, gdp_clipboard_text, gdp_tooltip, record_tooltip, trace_tooltip,
};
use chartgen::model::{ClimbTime, CyclistRecord, Dataset, GdpSample};

fn rider(url: Option<&str>, doping: Option<&str>) -> CyclistRecord {
    CyclistRecord {
        name: "Marco Pantani".to_string(),
        year: 1995,
        time: ClimbTime::parse("36:50").unwrap(),
        nationality: "ITA".to_string(),
        doping: doping.map(str::to_string),
        url: url.map(str::to_string),
    }
}

#[test]
fn overlay_starts_hidden_and_double_toggle_restores() {
    let mut overlay = TraceOverlay::default();
    assert!(!overlay.visible());
    overlay.toggle();
    assert!(overlay.visible());
    overlay.toggle();
    assert!(!overlay.visible(), "two toggles return to the initial state");
}

#[test]
fn last_hover_wins() {
    let mut state = TooltipState::default();
    assert!(state.is_hidden());
    state.over_mark(1);
    state.over_mark(5);
    assert_eq!(state, TooltipState::Mark(5));
    state.over_trace(0);
    assert_eq!(state, TooltipState::Trace(0));
    state.leave();
    assert!(state.is_hidden());
}

#[test]
fn gdp_tooltip_formats_year_and_quarter() {
    let sample = GdpSample::from_pair("1973-04-01", 4092.3).unwrap();
    let tip = gdp_tooltip(&sample);
    assert_eq!(tip.title, "1973 Q2");
    assert_eq!(tip.lines, vec!["4092.3 billion".to_string()]);
    assert!(tip.reference.is_none());
}

#[test]
fn cyclist_tooltip_reference_only_when_url_present() {
    let with_url = cyclist_tooltip(&rider(Some("https://example.org/case"), Some("Alleged")));
    assert_eq!(
        with_url.reference.as_deref(),
        Some("https://example.org/case")
    );

    let without = cyclist_tooltip(&rider(None, None));
    assert!(
        without.reference.is_none(),
        "no URL must mean no link affordance"
    );
}

#[test]
fn cyclist_tooltip_includes_doping_note_when_flagged() {
    let flagged = cyclist_tooltip(&rider(None, Some("Alleged drug use")));
    assert!(flagged.lines.iter().any(|l| l == "Alleged drug use"));
    assert_eq!(flagged.title, "Marco Pantani (ITA)");

    let clean = cyclist_tooltip(&rider(None, None));
    assert_eq!(clean.lines.len(), 1, "clean records show only year/time");
}

#[test]
fn trace_tooltip_is_just_the_name() {
    let trace = Trace {
        key: "Marco Pantani".to_string(),
        points: vec![(0.0, 0.0), (1.0, 1.0)],
        flagged: true,
    };
    let tip = trace_tooltip(&trace);
    assert_eq!(tip.title, "Marco Pantani");
    assert!(tip.lines.is_empty());
}

#[test]
fn clipboard_lines_match_the_documented_formats() {
    let sample = GdpSample::from_pair("1947-01-01", 243.1).unwrap();
    assert_eq!(
        gdp_clipboard_text(&sample),
        "Date: 1947-01-01, GDP: $243.1 billion"
    );
    assert_eq!(
        cyclist_clipboard_text(&rider(None, None)),
        "Name: Marco Pantani, Year: 1995, Time: 36:50"
    );
}

#[test]
fn record_lookups_are_index_safe() {
    let dataset = Dataset::Cyclists(vec![rider(None, None)]);
    assert!(record_tooltip(&dataset, 0).is_some());
    assert!(record_tooltip(&dataset, 7).is_none());
    assert!(clipboard_text(&dataset, 0).is_some());
    assert!(clipboard_text(&dataset, 7).is_none());
}

struct RecordingSink(Vec<String>);

impl ClipboardSink for RecordingSink {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        self.0.push(text.to_string());
        Ok(())
    }
}

struct FailingSink;

impl ClipboardSink for FailingSink {
    fn copy(&mut self, _text: &str) -> anyhow::Result<()> {
        anyhow::bail!("clipboard unavailable")
    }
}

#[test]
fn clipboard_sink_success_and_failure_surface() {
    let mut sink = RecordingSink(Vec::new());
    sink.copy("Date: 1947-01-01, GDP: $243.1 billion").unwrap();
    assert_eq!(sink.0.len(), 1);

    let mut failing = FailingSink;
    let err = failing.copy("anything").unwrap_err();
    assert!(err.to_string().contains("clipboard unavailable"));
}
