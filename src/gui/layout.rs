//! Page layout constants shared by the window and its tests.

use crate::data::RegionFilter;

pub const HEADING: &str = "Sales, Price, and Quantity Data Over Time";
pub const REGION_PICKER_ID: &str = "region-radio";
pub const SALES_PRICE_GRAPH_ID: &str = "sales-price-graph";
pub const SALES_QUANTITY_GRAPH_ID: &str = "sales-quantity-graph";

pub const HEADING_SIZE: f32 = 28.0;
pub const HEADING_BOTTOM_SPACE: f32 = 30.0;
pub const PICKER_BOTTOM_SPACE: f32 = 20.0;
pub const PICKER_OPTION_SPACING: f32 = 20.0;

/// Options shown by the region picker, in display order.
pub fn region_options() -> &'static [RegionFilter] {
    &RegionFilter::OPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_text() {
        assert_eq!(HEADING, "Sales, Price, and Quantity Data Over Time");
    }

    #[test]
    fn both_graphs_have_distinct_ids() {
        assert_ne!(SALES_PRICE_GRAPH_ID, SALES_QUANTITY_GRAPH_ID);
        assert_eq!(SALES_PRICE_GRAPH_ID, "sales-price-graph");
        assert_eq!(SALES_QUANTITY_GRAPH_ID, "sales-quantity-graph");
    }

    #[test]
    fn region_picker_has_options() {
        let options = region_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], RegionFilter::All);
        assert_eq!(REGION_PICKER_ID, "region-radio");
    }
}
