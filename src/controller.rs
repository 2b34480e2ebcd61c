//! Dashboard View Controller
//! Runs filter -> aggregate -> build -> theme whenever the region selection changes.

use crate::charts::{
    apply_dark_theme, build_quantity_price_chart, build_sales_price_chart, ChartSpec,
};
use crate::data::{aggregate_by_date, filter_by_region, SalesTable, Selection, ALL_REGIONS};
use log::{debug, log, Level};
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;

/// Rows echoed to the debug log after filtering.
const DEBUG_HEAD_ROWS: usize = 5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("No data found for region: {region}")]
    NoDataForRegion { region: String },
    #[error("Unexpected pipeline fault: {0}")]
    UnexpectedPipelineFault(String),
}

/// The two charts shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartPair {
    pub sales_price: ChartSpec,
    pub quantity_price: ChartSpec,
}

impl ChartPair {
    /// Placeholders shown after a failed render.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sales_price.is_empty() && self.quantity_price.is_empty()
    }
}

/// What the dashboard is currently displaying.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Last successful render.
    Idle(ChartPair),
    /// Last render failed; empty placeholders are shown.
    Error {
        reason: PipelineError,
        placeholders: ChartPair,
    },
}

impl ViewState {
    pub fn charts(&self) -> &ChartPair {
        match self {
            ViewState::Idle(charts) => charts,
            ViewState::Error { placeholders, .. } => placeholders,
        }
    }

    pub fn error(&self) -> Option<&PipelineError> {
        match self {
            ViewState::Idle(_) => None,
            ViewState::Error { reason, .. } => Some(reason),
        }
    }
}

/// Build both themed charts for a region selector.
pub fn render_charts(table: &SalesTable, selector: &str) -> Result<ChartPair, PipelineError> {
    let selection = filter_by_region(table, selector);
    if let Selection::Empty { region } = &selection {
        return Err(PipelineError::NoDataForRegion {
            region: region.clone(),
        });
    }

    debug!("Filtered {} rows for region {}", selection.len(), selector);
    for record in selection.iter().take(DEBUG_HEAD_ROWS) {
        debug!("  {:?}", record);
    }

    let aggregated = aggregate_by_date(selection.iter());

    let mut sales_price = build_sales_price_chart(&aggregated);
    let mut quantity_price = build_quantity_price_chart(&aggregated);
    for spec in [&mut sales_price, &mut quantity_price] {
        apply_dark_theme(spec);
    }

    Ok(ChartPair {
        sales_price,
        quantity_price,
    })
}

/// Binds the region selector to the chart pipeline.
///
/// The dataset handle is injected at construction and only ever read.
pub struct DashboardController {
    table: Arc<SalesTable>,
    selected: String,
    state: ViewState,
}

impl DashboardController {
    /// Create the controller and render the initial "All" selection.
    pub fn new(table: Arc<SalesTable>) -> Self {
        let mut controller = Self {
            table,
            selected: ALL_REGIONS.to_string(),
            state: ViewState::Idle(ChartPair::empty()),
        };
        controller.select_region(ALL_REGIONS);
        controller
    }

    /// Rerun the pipeline for a new selector value.
    ///
    /// Failures never escape: they switch the view to empty placeholders and
    /// are logged.
    pub fn select_region(&mut self, selector: &str) -> &ChartPair {
        self.run_pipeline(selector, render_charts)
    }

    pub(crate) fn run_pipeline<F>(&mut self, selector: &str, render: F) -> &ChartPair
    where
        F: FnOnce(&SalesTable, &str) -> Result<ChartPair, PipelineError>,
    {
        debug!("Selected region: {}", selector);
        self.selected = selector.to_string();

        let table = &self.table;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| render(table, selector)))
            .unwrap_or_else(|payload| {
                Err(PipelineError::UnexpectedPipelineFault(panic_message(
                    payload.as_ref(),
                )))
            });

        self.state = match outcome {
            Ok(charts) => {
                debug!("Rendered charts for region {}", selector);
                ViewState::Idle(charts)
            }
            Err(reason) => {
                log!(failure_level(&reason), "Error updating graphs: {}", reason);
                ViewState::Error {
                    reason,
                    placeholders: ChartPair::empty(),
                }
            }
        };

        self.state.charts()
    }

    pub fn charts(&self) -> &ChartPair {
        self.state.charts()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn table(&self) -> &SalesTable {
        &self.table
    }
}

/// Missing data is expected input; anything else is a bug.
fn failure_level(reason: &PipelineError) -> Level {
    match reason {
        PipelineError::NoDataForRegion { .. } => Level::Warn,
        PipelineError::UnexpectedPipelineFault(_) => Level::Error,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
