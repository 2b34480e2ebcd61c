//! Sales Dashboard Main Application
//! Single page: heading, region picker and the two linked charts.

use crate::charts::PAGE_BACKGROUND;
use crate::controller::DashboardController;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::{CentralPanel, Color32, Frame, Visuals};

const PAGE_MARGIN: f32 = 16.0;

/// Main application window.
pub struct DashboardApp {
    controller: DashboardController,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, controller: DashboardController) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());

        Self {
            controller,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        }
    }

    fn handle_region_changed(&mut self, selector: &str) {
        self.controller.select_region(selector);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let page = Frame::none()
            .fill(Color32::from(PAGE_BACKGROUND))
            .inner_margin(PAGE_MARGIN);

        CentralPanel::default().frame(page).show(ctx, |ui| {
            match self.control_panel.show(ui) {
                ControlPanelAction::RegionChanged(region) => {
                    self.handle_region_changed(region.as_str())
                }
                ControlPanelAction::None => {}
            }

            self.chart_viewer.show(ui, self.controller.charts());
        });
    }
}
