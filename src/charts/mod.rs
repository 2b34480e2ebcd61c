//! Charts module - chart specifications, builders and renderers

mod builder;
mod plotter;
mod renderer;
mod scale;
mod spec;
mod theme;

pub use builder::{
    build_quantity_price_chart, build_sales_price_chart, HIGHLIGHT_END, HIGHLIGHT_START,
    QUANTITY_PRICE_ANNOTATION, QUANTITY_PRICE_TITLE, SALES_PRICE_ANNOTATION, SALES_PRICE_TITLE,
};
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use scale::{date_label, date_to_x, AxisMapping};
pub use spec::{
    Annotation, AnnotationPosition, Axis, AxisRole, AxisSide, ChartSpec, ChartStyle, Color,
    HAnchor, HighlightBand, HoverMode, Layer, Legend, LineStyle, Margin, MarkerStyle, Series,
    SeriesKind, Title, VAnchor,
};
pub use theme::{apply_dark_theme, PAGE_BACKGROUND};
