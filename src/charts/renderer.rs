//! Static Chart Renderer
//! Renders a [`ChartSpec`] to a PNG file with plotters.
//!
//! Layout:
//! 1. Title caption
//! 2. Highlight bands behind the traces, annotation at the band's top corner
//! 3. Primary series on the left axis, secondary series on the right axis
//! 4. Legend in the upper-left corner

use crate::charts::scale::{date_label, date_to_x, padded_range};
use crate::charts::spec::{
    AnnotationPosition, AxisRole, ChartSpec, Color as ChartColor, HighlightBand, Layer,
};
use crate::charts::theme::PAGE_BACKGROUND;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;
use thiserror::Error;

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 24;
const LABEL_FONT_SIZE: u32 = 14;
const AXIS_AREA: u32 = 60;
const DEFAULT_MARGIN: u32 = 20;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

fn rgb(c: ChartColor) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

type BandElements = (
    Rectangle<(f64, f64)>,
    Option<Text<'static, (f64, f64), String>>,
);

/// Renders chart specifications to static images.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `spec` to a PNG at `path`.
    pub fn render_png(
        spec: &ChartSpec,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        Self::draw(spec, &root).map_err(|e| RenderError::Draw(e.to_string()))?;
        root.present()
            .map_err(|e| RenderError::Draw(e.to_string()))
    }

    /// Image background. Transparent chart paper sits on the page colour.
    pub fn background(spec: &ChartSpec) -> ChartColor {
        match spec.style.paper_background {
            Some(color) if !color.is_transparent() => color,
            _ if spec.style.dark => PAGE_BACKGROUND,
            _ => ChartColor::WHITE,
        }
    }

    fn draw(
        spec: &ChartSpec,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
    ) -> Result<(), Box<dyn Error>> {
        let background = rgb(Self::background(spec));
        root.fill(&background)?;

        let text = rgb(spec.text_color());
        let title_font = (FONT, TITLE_FONT_SIZE).into_font().color(&text);

        let Some((first, last)) = spec.x_range() else {
            if let Some(title) = &spec.title {
                root.titled(&title.text, title_font)?;
            }
            return Ok(());
        };

        let x_range = date_to_x(first) - 0.5..date_to_x(last) + 0.5;
        let (y0, y1) = padded_range(spec.y_range(AxisRole::Primary).unwrap_or((0.0, 1.0)));
        let (s0, s1) = spec
            .y_range(AxisRole::Secondary)
            .map(padded_range)
            .unwrap_or((y0, y1));

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(spec.margin.map(|m| m.t.min(m.l) / 4).unwrap_or(DEFAULT_MARGIN))
            .x_label_area_size(AXIS_AREA)
            .y_label_area_size(AXIS_AREA)
            .right_y_label_area_size(if spec.has_secondary() { AXIS_AREA } else { 0 });
        if let Some(title) = &spec.title {
            builder.caption(&title.text, title_font);
        }

        let mut chart = builder
            .build_cartesian_2d(x_range.clone(), y0..y1)?
            .set_secondary_coord(x_range, s0..s1);

        let axis_color = rgb(spec.y_axis.line_color.unwrap_or(spec.text_color()));
        let label_font = (FONT, LABEL_FONT_SIZE).into_font().color(&axis_color);

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(spec.x_axis.title.clone().unwrap_or_default())
            .y_desc(spec.y_axis.title.clone().unwrap_or_default())
            .x_label_formatter(&|x| date_label(*x))
            .axis_style(&axis_color)
            .label_style(label_font.clone())
            .axis_desc_style(label_font.clone())
            .draw()?;

        if let Some(axis) = spec.y2_axis.as_ref().filter(|_| spec.has_secondary()) {
            chart
                .configure_secondary_axes()
                .y_desc(axis.title.clone().unwrap_or_default())
                .axis_style(&text)
                .label_style(label_font.clone())
                .axis_desc_style(label_font.clone())
                .draw()?;
        }

        for band in spec.bands.iter().filter(|b| b.layer == Layer::Below) {
            let (rect, note) = Self::band_elements(band, (y0, y1), text);
            chart.draw_series(std::iter::once(rect))?;
            if let Some(note) = note {
                chart.draw_series(std::iter::once(note))?;
            }
        }

        for series in &spec.series {
            let color = rgb(series.line.color);
            let style = color.stroke_width(series.line.width.round() as u32);
            let radius = (series.marker.size / 2.0).round() as u32;
            let points: Vec<(f64, f64)> = series
                .points()
                .map(|(date, value)| (date_to_x(date), value))
                .collect();

            match series.axis {
                AxisRole::Primary => {
                    if series.kind.has_line() {
                        chart
                            .draw_series(LineSeries::new(points.iter().copied(), style))?
                            .label(series.name.as_str())
                            .legend(move |(x, y)| {
                                PathElement::new(vec![(x, y), (x + 20, y)], style)
                            });
                    }
                    if series.kind.has_markers() {
                        chart.draw_series(
                            points.iter().map(|p| Circle::new(*p, radius, color.filled())),
                        )?;
                    }
                }
                AxisRole::Secondary => {
                    if series.kind.has_line() {
                        chart
                            .draw_secondary_series(LineSeries::new(points.iter().copied(), style))?
                            .label(series.name.as_str())
                            .legend(move |(x, y)| {
                                PathElement::new(vec![(x, y), (x + 20, y)], style)
                            });
                    }
                    if series.kind.has_markers() {
                        chart.draw_secondary_series(
                            points.iter().map(|p| Circle::new(*p, radius, color.filled())),
                        )?;
                    }
                }
            }
        }

        for band in spec.bands.iter().filter(|b| b.layer == Layer::Above) {
            let (rect, note) = Self::band_elements(band, (y0, y1), text);
            chart.draw_series(std::iter::once(rect))?;
            if let Some(note) = note {
                chart.draw_series(std::iter::once(note))?;
            }
        }

        if !spec.is_empty() {
            let legend_color = rgb(spec.legend.font_color.unwrap_or(spec.text_color()));
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font((FONT, LABEL_FONT_SIZE).into_font().color(&legend_color))
                .background_style(&background.mix(0.6))
                .border_style(&legend_color)
                .draw()?;
        }

        Ok(())
    }

    fn band_elements(
        band: &HighlightBand,
        (y_lo, y_hi): (f64, f64),
        text: RGBColor,
    ) -> BandElements {
        let x0 = date_to_x(band.x0);
        let x1 = date_to_x(band.x1);
        let fill = rgb(band.fill).mix(band.opacity as f64);
        let rect = Rectangle::new([(x0, y_lo), (x1, y_hi)], fill.filled());

        let note = band.annotation.as_ref().map(|annotation| {
            let (x, h_pos) = match annotation.position {
                AnnotationPosition::TopRight => (x1, HPos::Right),
                AnnotationPosition::TopLeft => (x0, HPos::Left),
            };
            let font = (FONT, LABEL_FONT_SIZE)
                .into_font()
                .color(&text)
                .pos(Pos::new(h_pos, VPos::Top));
            Text::new(annotation.text.clone(), (x, y_hi), font)
        });

        (rect, note)
    }
}
