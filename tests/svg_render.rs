use chartgen::chart::{SvgOptions, Viewport, cyclists_chart, gdp_chart, scene_to_svg};
use chartgen::model::{ClimbTime, CyclistRecord, GdpSample};

fn rider(name: &str, year: i32, time: &str) -> CyclistRecord {
    CyclistRecord {
        name: name.to_string(),
        year,
        time: ClimbTime::parse(time).unwrap(),
        nationality: "ITA".to_string(),
        doping: None,
        url: None,
    }
}

fn cyclists_svg(records: &[CyclistRecord], options: &SvgOptions) -> String {
    let scene = cyclists_chart(records, Viewport::new(920.0, 630.0)).unwrap();
    scene_to_svg(&scene, options)
}

#[test]
fn document_shell_is_well_formed() {
    let samples = vec![GdpSample::from_pair("1947-01-01", 243.1).unwrap()];
    let scene = gdp_chart(&samples, Viewport::new(920.0, 630.0)).unwrap();
    let svg = scene_to_svg(&scene, &SvgOptions::default());
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains("<title>United States GDP</title>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn bars_carry_raw_data_attributes() {
    let samples = vec![
        GdpSample::from_pair("1947-01-01", 243.1).unwrap(),
        GdpSample::from_pair("1947-04-01", 246.3).unwrap(),
    ];
    let scene = gdp_chart(&samples, Viewport::new(920.0, 630.0)).unwrap();
    let svg = scene_to_svg(&scene, &SvgOptions::default());
    assert!(svg.contains(r#"data-date="1947-01-01""#));
    assert!(svg.contains(r#"data-gdp="243.1""#));
    assert!(svg.contains(r#"<rect class="bar unflagged""#));
}

#[test]
fn dots_carry_raw_data_attributes() {
    let svg = cyclists_svg(&[rider("A", 1995, "36:50")], &SvgOptions::default());
    assert!(svg.contains(r#"data-xvalue="1995""#));
    assert!(svg.contains(r#"data-yvalue="36:50""#));
    assert!(svg.contains(r#"<circle class="dot unflagged""#));
}

#[test]
fn traces_hidden_by_default_and_visible_on_request() {
    let records = vec![rider("A", 1994, "36:50"), rider("A", 1997, "36:55")];

    let hidden = cyclists_svg(&records, &SvgOptions::default());
    assert!(hidden.contains(r#"<g class="traces" display="none">"#));

    let shown = cyclists_svg(
        &records,
        &SvgOptions {
            show_traces: true,
            ..Default::default()
        },
    );
    assert!(shown.contains(r#"<g class="traces">"#));
    assert!(!shown.contains(r#"display="none""#));
    assert!(shown.contains(r#"<path class="trace""#));
}

#[test]
fn trace_names_are_escaped() {
    let records = vec![
        rider("Pantani & Co", 1994, "36:50"),
        rider("Pantani & Co", 1997, "36:55"),
    ];
    let svg = cyclists_svg(&records, &SvgOptions::default());
    assert!(svg.contains("Pantani &amp; Co"));
    assert!(!svg.contains(r#"data-name="Pantani & Co""#));
}

#[test]
fn style_block_can_be_disabled() {
    let records = vec![rider("A", 1994, "36:50")];
    let with_style = cyclists_svg(&records, &SvgOptions::default());
    assert!(with_style.contains("<style>"));
    let without = cyclists_svg(
        &records,
        &SvgOptions {
            embed_style: false,
            ..Default::default()
        },
    );
    assert!(!without.contains("<style>"));
}

#[test]
fn axes_and_legend_are_emitted() {
    let records = vec![rider("A", 1994, "36:50"), rider("B", 2001, "39:02")];
    let svg = cyclists_svg(&records, &SvgOptions::default());
    assert!(svg.contains(r#"<g class="axis x-axis">"#));
    assert!(svg.contains(r#"<g class="axis y-axis">"#));
    assert!(svg.contains(r#"<g class="legend""#));
    assert!(svg.contains("No doping allegations"));
    assert!(svg.contains("Time to climb (minutes:seconds)"));
}
