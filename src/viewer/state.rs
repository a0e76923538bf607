#![cfg(feature = "egui")]

use eframe::egui::{self, Vec2};

use crate::chart::ChartScene;
use crate::interact::{TooltipState, TraceOverlay};
use crate::model::Dataset;

/// Interactive application displaying one assembled chart scene.
///
/// All chart semantics live in the pure layers; this struct only carries
/// the scene plus the transient view state (tooltip, overlay, pan/zoom).
pub struct ChartApp {
    pub dataset: Dataset,
    pub scene: ChartScene,
    pub tooltip: TooltipState,
    pub overlay: TraceOverlay,
    /// Confirmation toast after a clipboard copy: message plus frames left.
    pub toast: Option<(String, u32)>,
    pub zoom: f32,
    pub pan: Vec2,
    pub reset_view: bool,
}

impl ChartApp {
    pub fn new(dataset: Dataset, scene: ChartScene) -> Self {
        Self {
            dataset,
            scene,
            tooltip: TooltipState::default(),
            overlay: TraceOverlay::default(),
            toast: None,
            zoom: 1.0,
            pan: Vec2::ZERO,
            reset_view: true,
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        super::ui::update(self, ctx, frame);
    }
}
