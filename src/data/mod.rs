//! Data module - sales CSV loading, region filtering and aggregation

mod loader;
mod processor;

pub use loader::{DataLoader, LoaderError, SalesRecord, SalesTable, REQUIRED_COLUMNS};
pub use processor::{
    aggregate_by_date, filter_by_region, AggregatedRow, RegionFilter, Selection, ALL_REGIONS,
};
