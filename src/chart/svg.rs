//! Standalone SVG serialization of assembled chart scenes.
//!
//! Pure string assembly with no I/O: [`scene_to_svg`] returns the complete
//! document. Marks carry `data-*` attributes with their raw domain values;
//! the trace overlay group is emitted hidden unless
//! [`SvgOptions::show_traces`] is set.

use super::axis::{Axis, Orientation};
use super::marks::MarkShape;
use super::scene::ChartScene;
use std::fmt::Write;

/// Options controlling SVG output.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Render the trace overlay visible instead of hidden.
    pub show_traces: bool,
    /// Emit the built-in `<style>` block. Disable when the embedding page
    /// supplies its own stylesheet.
    pub embed_style: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            show_traces: false,
            embed_style: true,
        }
    }
}

const STYLE: &str = "\
    .unflagged { fill: #3182bd; }\n\
    .flagged { fill: #de2d26; }\n\
    .trace { fill: none; stroke-width: 2; stroke: #3182bd; }\n\
    .trace.flagged { stroke: #de2d26; }\n\
    .axis line, .axis path { stroke: #444; }\n\
    .axis text { font: 11px sans-serif; fill: #444; }\n\
    .label { font: 13px sans-serif; fill: #222; }\n\
    .title { font: 18px sans-serif; fill: #111; }\n\
    .legend text { font: 12px sans-serif; fill: #222; }";

fn escape_text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

fn escape_attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

/// Serialize a scene into a standalone SVG document string.
pub fn scene_to_svg(scene: &ChartScene, options: &SvgOptions) -> String {
    let mut out = String::new();
    let vp = scene.viewport;
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = vp.width,
        h = vp.height,
    );
    let _ = writeln!(out, "  <title>{}</title>", escape_text(&scene.title));
    if options.embed_style {
        let _ = writeln!(out, "  <style>\n{STYLE}\n  </style>");
    }
    let _ = writeln!(
        out,
        r#"  <text class="title" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        vp.width * 0.5,
        vp.margin * 0.5,
        escape_text(&scene.title),
    );

    write_axis(&mut out, &scene.x_axis, &vp);
    write_axis(&mut out, &scene.y_axis, &vp);
    write_marks(&mut out, scene);
    write_traces(&mut out, scene, options.show_traces);
    write_legend(&mut out, scene);

    let _ = writeln!(out, "</svg>");
    out
}

fn write_axis(out: &mut String, axis: &Axis, vp: &super::scene::Viewport) {
    let tick_len = 6.0_f32;
    match axis.orientation {
        Orientation::Bottom => {
            let y = vp.baseline();
            let _ = writeln!(out, r#"  <g class="axis x-axis">"#);
            let _ = writeln!(
                out,
                r#"    <line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}"/>"#,
                vp.margin,
                vp.width - vp.margin,
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"    <line x1="{x:.1}" y1="{y:.1}" x2="{x:.1}" y2="{:.1}"/>"#,
                    y + tick_len,
                    x = tick.offset,
                );
                let _ = writeln!(
                    out,
                    r#"    <text x="{x:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
                    y + tick_len + 12.0,
                    escape_text(&tick.label),
                    x = tick.offset,
                );
            }
            let _ = writeln!(
                out,
                r#"    <text class="label" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
                vp.width * 0.5,
                y + 45.0,
                escape_text(&axis.label),
            );
            let _ = writeln!(out, "  </g>");
        }
        Orientation::Left => {
            let x = vp.margin;
            let _ = writeln!(out, r#"  <g class="axis y-axis">"#);
            let _ = writeln!(
                out,
                r#"    <line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}"/>"#,
                vp.margin,
                vp.baseline(),
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"    <line x1="{:.1}" y1="{y:.1}" x2="{x:.1}" y2="{y:.1}"/>"#,
                    x - tick_len,
                    y = tick.offset,
                );
                let _ = writeln!(
                    out,
                    r#"    <text x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
                    x - tick_len - 4.0,
                    tick.offset + 4.0,
                    escape_text(&tick.label),
                );
            }
            let _ = writeln!(
                out,
                r#"    <text class="label" transform="rotate(-90)" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
                -(vp.height * 0.5),
                x - 48.0,
                escape_text(&axis.label),
            );
            let _ = writeln!(out, "  </g>");
        }
    }
}

fn write_marks(out: &mut String, scene: &ChartScene) {
    let _ = writeln!(out, r#"  <g class="marks">"#);
    for mark in &scene.marks {
        let mut attrs = String::new();
        for (name, value) in &mark.data {
            let _ = write!(attrs, r#" {name}="{}""#, escape_attr(value));
        }
        match mark.shape {
            MarkShape::Bar { x, y, width, height } => {
                let _ = writeln!(
                    out,
                    r#"    <rect class="bar {}" x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{height:.1}"{attrs}/>"#,
                    mark.class.css_class(),
                );
            }
            MarkShape::Dot { cx, cy, radius } => {
                let _ = writeln!(
                    out,
                    r#"    <circle class="dot {}" cx="{cx:.1}" cy="{cy:.1}" r="{radius:.1}"{attrs}/>"#,
                    mark.class.css_class(),
                );
            }
        }
    }
    let _ = writeln!(out, "  </g>");
}

fn write_traces(out: &mut String, scene: &ChartScene, visible: bool) {
    if visible {
        let _ = writeln!(out, r#"  <g class="traces">"#);
    } else {
        let _ = writeln!(out, r#"  <g class="traces" display="none">"#);
    }
    for trace in &scene.traces {
        let mut d = String::new();
        for (i, (x, y)) in trace.points.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { "L" };
            if i > 0 {
                d.push(' ');
            }
            let _ = write!(d, "{cmd} {x:.1} {y:.1}");
        }
        let class = if trace.flagged {
            "trace flagged"
        } else {
            "trace"
        };
        let _ = writeln!(
            out,
            r#"    <path class="{class}" d="{d}" data-name="{}"/>"#,
            escape_attr(&trace.key),
        );
    }
    let _ = writeln!(out, "  </g>");
}

fn write_legend(out: &mut String, scene: &ChartScene) {
    let legend = &scene.legend;
    if legend.entries.is_empty() && legend.trace_toggle.is_none() {
        return;
    }
    let vp = scene.viewport;
    let x = vp.width - vp.margin - 10.0;
    let mut y = vp.margin + 14.0;
    let _ = writeln!(out, r#"  <g class="legend" id="legend">"#);
    for entry in &legend.entries {
        let _ = writeln!(
            out,
            r#"    <rect class="{}" x="{:.1}" y="{:.1}" width="12" height="12"/>"#,
            entry.class.css_class(),
            x,
            y - 10.0,
        );
        let _ = writeln!(
            out,
            r#"    <text x="{:.1}" y="{y:.1}" text-anchor="end">{}</text>"#,
            x - 6.0,
            escape_text(&entry.label),
        );
        y += 20.0;
    }
    if let Some(toggle) = &legend.trace_toggle {
        let _ = writeln!(
            out,
            r#"    <text id="trace-toggle" x="{:.1}" y="{y:.1}" text-anchor="end">{}</text>"#,
            x - 6.0,
            escape_text(toggle),
        );
    }
    let _ = writeln!(out, "  </g>");
}
