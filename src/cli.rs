//! Command-line entry point: launch the dashboard window or export charts headlessly.

use crate::charts::StaticChartRenderer;
use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::data::{DataLoader, RegionFilter};
use crate::gui::layout::{SALES_PRICE_GRAPH_ID, SALES_QUANTITY_GRAPH_ID};
use crate::gui::DashboardApp;
use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "sales-dashboard",
    version,
    about = "Sales, price and quantity over time, filterable by region"
)]
pub struct Cli {
    /// Sales CSV to load (overrides the config file).
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive dashboard window (default).
    View,
    /// Write both charts for one region as JSON and/or PNG.
    Export(ExportArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Region to render.
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = RegionFilter::All)]
    pub region: RegionFilter,

    /// Output directory.
    #[arg(short, long, default_value = "charts")]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = ExportFormat::Both)]
    pub format: ExportFormat,

    /// Open the output directory when done.
    #[arg(long)]
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Png,
    Both,
}

impl ExportFormat {
    fn json(&self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Both)
    }

    fn png(&self) -> bool {
        matches!(self, ExportFormat::Png | ExportFormat::Both)
    }
}

/// Load config and data, then dispatch the subcommand.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = DashboardConfig::load_or_default(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    let table = DataLoader::load_csv(&config.data_path).with_context(|| {
        format!(
            "failed to load sales data from {}",
            config.data_path.display()
        )
    })?;
    let controller = DashboardController::new(Arc::new(table));

    match cli.command.unwrap_or(Command::View) {
        Command::View => launch_viewer(&config, controller),
        Command::Export(args) => export(&config, controller, &args),
    }
}

fn launch_viewer(config: &DashboardConfig, controller: DashboardController) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, controller)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}

fn export(
    config: &DashboardConfig,
    mut controller: DashboardController,
    args: &ExportArgs,
) -> Result<()> {
    controller.select_region(args.region.as_str());
    if let Some(reason) = controller.state().error() {
        warn!("Exporting empty charts: {}", reason);
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    let charts = controller.charts();
    for (id, spec) in [
        (SALES_PRICE_GRAPH_ID, &charts.sales_price),
        (SALES_QUANTITY_GRAPH_ID, &charts.quantity_price),
    ] {
        if args.format.json() {
            let path = args.out.join(format!("{id}.json"));
            let json = serde_json::to_string_pretty(spec)?;
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        if args.format.png() {
            let path = args.out.join(format!("{id}.png"));
            StaticChartRenderer::render_png(
                spec,
                &path,
                config.export.width,
                config.export.height,
            )?;
            info!("Wrote {}", path.display());
        }
    }

    if args.open {
        open::that(&args.out)
            .with_context(|| format!("failed to open {}", args.out.display()))?;
    }

    Ok(())
}
