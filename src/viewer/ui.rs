#![cfg(feature = "egui")]

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::chart::{MarkClass, MarkShape, Orientation};
use crate::interact::{self, ClipboardSink, TooltipState};

use super::geometry::near_polyline;
use super::state::ChartApp;

/// Clipboard sink backed by the egui context.
struct ContextClipboard<'a>(&'a egui::Context);

impl ClipboardSink for ContextClipboard<'_> {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        self.0.copy_text(text.to_string());
        Ok(())
    }
}

/// What the pointer ended up over during this frame's pass.
enum Hover {
    Mark(usize),
    Trace(usize),
}

fn class_color(class: MarkClass) -> Color32 {
    match class {
        MarkClass::Flagged => Color32::from_rgb(222, 45, 38),
        MarkClass::Unflagged => Color32::from_rgb(49, 130, 189),
    }
}

pub(super) fn update(app: &mut ChartApp, ctx: &egui::Context, _frame: &mut eframe::Frame) {
    egui::TopBottomPanel::top("chart_title").show(ctx, |ui| {
        ui.heading(&app.scene.title);
    });
    egui::CentralPanel::default().show(ctx, |ui| {
        draw_chart(app, ui);
    });
    draw_toast(app, ctx);
}

fn draw_chart(app: &mut ChartApp, ui: &mut egui::Ui) {
    let avail = ui.available_rect_before_wrap();
    let vp = app.scene.viewport;

    // Fit the scene viewport into the available rect, then apply zoom/pan.
    let margin = 10.0_f32;
    let sx = (avail.width() - 2.0 * margin) / vp.width.max(1.0);
    let sy = (avail.height() - 2.0 * margin) / vp.height.max(1.0);
    let base_scale = sx.min(sy).max(0.05);

    if app.reset_view {
        app.zoom = 1.0;
        app.pan = Vec2::ZERO;
        app.reset_view = false;
    }

    let canvas_resp = ui.interact(avail, ui.id().with("canvas"), Sense::drag());
    if canvas_resp.dragged() {
        app.pan += canvas_resp.drag_delta();
    }
    let scroll_y = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_y.abs() > 0.0 && canvas_resp.hovered() {
        let factor = (1.0_f32 + scroll_y * 0.001_f32).max(0.1_f32);
        app.zoom = (app.zoom * factor).clamp(0.2, 10.0);
    }

    let s = base_scale * app.zoom;
    let origin = Pos2::new(avail.left() + margin + app.pan.x, avail.top() + margin + app.pan.y);
    let to_screen = |p: (f32, f32)| Pos2::new(origin.x + p.0 * s, origin.y + p.1 * s);

    draw_axes(app, ui, s, &to_screen);

    // Interaction results are staged and applied after the drawing pass so
    // the scene stays immutably borrowed while we iterate it.
    let mut hovered: Option<Hover> = None;
    let mut copy_request: Option<usize> = None;
    let mut toggle_overlay = false;

    for (i, mark) in app.scene.marks.iter().enumerate() {
        let (rect, color) = match mark.shape {
            MarkShape::Bar { x, y, width, height } => (
                Rect::from_min_size(to_screen((x, y)), Vec2::new(width * s, height * s)),
                class_color(mark.class),
            ),
            MarkShape::Dot { cx, cy, radius } => (
                Rect::from_center_size(to_screen((cx, cy)), Vec2::splat(radius * 2.0 * s)),
                class_color(mark.class),
            ),
        };
        match mark.shape {
            MarkShape::Bar { .. } => ui.painter().rect_filled(rect, 0.0, color),
            MarkShape::Dot { .. } => {
                ui.painter()
                    .circle_filled(rect.center(), rect.width() * 0.5, color)
            }
        }
        let resp = ui.allocate_rect(rect, Sense::click());
        if resp.hovered() {
            hovered = Some(Hover::Mark(i));
        }
        if resp.double_clicked() {
            copy_request = Some(mark.record);
        }
    }

    if app.overlay.visible() {
        for (ti, trace) in app.scene.traces.iter().enumerate() {
            let pts: Vec<Pos2> = trace.points.iter().map(|&p| to_screen(p)).collect();
            let color = if trace.flagged {
                class_color(MarkClass::Flagged)
            } else {
                class_color(MarkClass::Unflagged)
            };
            ui.painter()
                .add(egui::Shape::line(pts.clone(), Stroke::new(2.0, color)));
            if let Some(hp) = canvas_resp.hover_pos() {
                if near_polyline(hp, &pts, 6.0) {
                    hovered = Some(Hover::Trace(ti));
                }
            }
        }
    }

    toggle_overlay |= draw_legend(app, ui, avail);

    // Apply staged interaction: last hover wins, leave resets to hidden.
    match hovered {
        Some(Hover::Mark(i)) => app.tooltip.over_mark(i),
        Some(Hover::Trace(i)) => app.tooltip.over_trace(i),
        None => app.tooltip.leave(),
    }
    if toggle_overlay {
        app.overlay.toggle();
    }
    if let Some(record) = copy_request {
        if let Some(text) = interact::clipboard_text(&app.dataset, record) {
            let mut clipboard = ContextClipboard(ui.ctx());
            app.toast = Some(match clipboard.copy(&text) {
                Ok(()) => (format!("\"{text}\" copied to clipboard"), 180),
                Err(e) => (format!("Copy failed: {e}"), 180),
            });
        }
    }

    draw_tooltip(app, ui);
}

fn draw_axes(app: &ChartApp, ui: &egui::Ui, s: f32, to_screen: &dyn Fn((f32, f32)) -> Pos2) {
    let vp = app.scene.viewport;
    let axis_color = Color32::from_rgb(68, 68, 68);
    let stroke = Stroke::new(1.0, axis_color);
    let font = FontId::proportional((11.0 * s).clamp(8.0, 22.0));
    let label_font = FontId::proportional((13.0 * s).clamp(9.0, 26.0));
    let painter = ui.painter();
    let tick_len = 6.0 * s;

    for axis in [&app.scene.x_axis, &app.scene.y_axis] {
        match axis.orientation {
            Orientation::Bottom => {
                let y = vp.baseline();
                painter.line_segment(
                    [to_screen((vp.margin, y)), to_screen((vp.width - vp.margin, y))],
                    stroke,
                );
                for tick in &axis.ticks {
                    let top = to_screen((tick.offset, y));
                    painter.line_segment([top, top + Vec2::new(0.0, tick_len)], stroke);
                    painter.text(
                        top + Vec2::new(0.0, tick_len + 2.0),
                        Align2::CENTER_TOP,
                        &tick.label,
                        font.clone(),
                        axis_color,
                    );
                }
                painter.text(
                    to_screen((vp.width * 0.5, y)) + Vec2::new(0.0, 30.0 * s),
                    Align2::CENTER_TOP,
                    &axis.label,
                    label_font.clone(),
                    axis_color,
                );
            }
            Orientation::Left => {
                let x = vp.margin;
                painter.line_segment(
                    [to_screen((x, vp.margin)), to_screen((x, vp.baseline()))],
                    stroke,
                );
                for tick in &axis.ticks {
                    let end = to_screen((x, tick.offset));
                    painter.line_segment([end - Vec2::new(tick_len, 0.0), end], stroke);
                    painter.text(
                        end - Vec2::new(tick_len + 4.0, 0.0),
                        Align2::RIGHT_CENTER,
                        &tick.label,
                        font.clone(),
                        axis_color,
                    );
                }
                // Drawn horizontally above the axis; painter text does not
                // rotate without a galley, and legibility wins here anyway.
                painter.text(
                    to_screen((x, vp.margin)) - Vec2::new(0.0, 16.0 * s),
                    Align2::LEFT_BOTTOM,
                    &axis.label,
                    label_font.clone(),
                    axis_color,
                );
            }
        }
    }
}

/// Draw the legend; returns true when the trace-toggle entry was clicked.
fn draw_legend(app: &ChartApp, ui: &mut egui::Ui, avail: Rect) -> bool {
    let legend = &app.scene.legend;
    if legend.entries.is_empty() && legend.trace_toggle.is_none() {
        return false;
    }
    let mut toggled = false;
    let anchor = Pos2::new(avail.right() - 12.0, avail.top() + 12.0);
    egui::Area::new("chart_legend".into())
        .fixed_pos(anchor - Vec2::new(220.0, 0.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                for entry in &legend.entries {
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, class_color(entry.class));
                        ui.label(&entry.label);
                    });
                }
                if let Some(toggle) = &legend.trace_toggle {
                    let shown = app.overlay.visible();
                    let text = if shown {
                        format!("{toggle} ✔")
                    } else {
                        toggle.clone()
                    };
                    if ui.link(text).clicked() {
                        toggled = true;
                    }
                }
            });
        });
    toggled
}

fn draw_tooltip(app: &ChartApp, ui: &egui::Ui) {
    let content = match app.tooltip {
        TooltipState::Hidden => return,
        TooltipState::Mark(i) => app
            .scene
            .marks
            .get(i)
            .and_then(|m| interact::record_tooltip(&app.dataset, m.record)),
        TooltipState::Trace(i) => app.scene.traces.get(i).map(interact::trace_tooltip),
    };
    let Some(content) = content else { return };
    let Some(pointer) = ui.ctx().pointer_hover_pos() else {
        return;
    };
    egui::Area::new("chart_tooltip".into())
        .fixed_pos(pointer + Vec2::new(16.0, 12.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(&content.title).strong());
                for line in &content.lines {
                    ui.label(line);
                }
                if let Some(url) = &content.reference {
                    ui.hyperlink_to("Reference", url);
                }
            });
        });
}

fn draw_toast(app: &mut ChartApp, ctx: &egui::Context) {
    let Some((message, frames_left)) = app.toast.take() else {
        return;
    };
    egui::Area::new("copy_toast".into())
        .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -24.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(&message);
            });
        });
    if frames_left > 1 {
        app.toast = Some((message, frames_left - 1));
        ctx.request_repaint();
    }
}
