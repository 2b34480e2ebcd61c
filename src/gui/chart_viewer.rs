//! Chart Viewer Widget
//! Scrollable area holding the sales/price and quantity/price panels.

use crate::charts::{ChartPlotter, ChartSpec};
use crate::controller::ChartPair;
use crate::gui::layout::{SALES_PRICE_GRAPH_ID, SALES_QUANTITY_GRAPH_ID};
use egui::{Color32, ScrollArea};

const CHART_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 380.0;
const PANEL_MARGIN: f32 = 12.0;

/// Draws the two dashboard charts stacked vertically.
pub struct ChartViewer {
    pub chart_height: f32,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            chart_height: CHART_HEIGHT,
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, ui: &mut egui::Ui, charts: &ChartPair) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.draw_panel(ui, SALES_PRICE_GRAPH_ID, &charts.sales_price);
                ui.add_space(CHART_SPACING);
                self.draw_panel(ui, SALES_QUANTITY_GRAPH_ID, &charts.quantity_price);
            });
    }

    fn draw_panel(&self, ui: &mut egui::Ui, id: &str, spec: &ChartSpec) {
        let fill = spec
            .style
            .paper_background
            .map(Color32::from)
            .unwrap_or(Color32::TRANSPARENT);

        egui::Frame::none()
            .fill(fill)
            .inner_margin(PANEL_MARGIN)
            .show(ui, |ui| {
                ChartPlotter::draw_chart(ui, id, spec, self.chart_height);
            });
    }
}
