//! Control Panel Widget
//! Page heading and the region picker.

use crate::data::RegionFilter;
use crate::gui::layout::{
    region_options, HEADING, HEADING_BOTTOM_SPACE, HEADING_SIZE, PICKER_BOTTOM_SPACE,
    PICKER_OPTION_SPACING, REGION_PICKER_ID,
};
use egui::{Color32, RichText};

/// Heading plus the single-select region control.
pub struct ControlPanel {
    pub selected: RegionFilter,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            selected: RegionFilter::All,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(HEADING)
                    .size(HEADING_SIZE)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
        ui.add_space(HEADING_BOTTOM_SPACE);

        ui.push_id(REGION_PICKER_ID, |ui| {
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    for &region in region_options() {
                        let label = RichText::new(region.as_str()).color(Color32::WHITE);
                        if ui
                            .radio_value(&mut self.selected, region, label)
                            .changed()
                        {
                            action = ControlPanelAction::RegionChanged(region);
                        }
                        ui.add_space(PICKER_OPTION_SPACING);
                    }
                });
            });
        });
        ui.add_space(PICKER_BOTTOM_SPACE);

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    RegionChanged(RegionFilter),
}
