//! Chart Plotter Module
//! Draws a [`ChartSpec`] interactively using egui_plot.

use crate::charts::scale::{date_label, date_to_x, padded_range, AxisMapping};
use crate::charts::spec::{
    AnnotationPosition, AxisRole, ChartSpec, Color, HighlightBand, Layer, Series,
};
use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{
    AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoint, PlotPoints, PlotUi, Points,
    Polygon, Text,
};

const TITLE_SIZE: f32 = 18.0;
const LEGEND_TITLE_SIZE: f32 = 13.0;
const ANNOTATION_SIZE: f32 = 12.0;

impl From<Color> for Color32 {
    fn from(c: Color) -> Self {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

/// Renders chart specifications with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw title, legend title and plot for one chart.
    ///
    /// Empty specs still get an (empty) plot so the panel keeps its size.
    pub fn draw_chart(ui: &mut egui::Ui, id: &str, spec: &ChartSpec, height: f32) {
        let text_color = spec
            .style
            .font_color
            .map(Color32::from)
            .unwrap_or_else(|| ui.visuals().text_color());

        if let Some(title) = &spec.title {
            let text = RichText::new(&title.text)
                .size(TITLE_SIZE)
                .strong()
                .color(text_color);
            if title.is_centered() {
                ui.vertical_centered(|ui| ui.label(text));
            } else {
                ui.label(text);
            }
        }

        if let Some(legend_title) = &spec.legend.title {
            let color = spec
                .legend
                .font_color
                .map(Color32::from)
                .unwrap_or(text_color);
            ui.label(
                RichText::new(legend_title)
                    .size(LEGEND_TITLE_SIZE)
                    .color(color),
            );
        }

        let primary = padded_range(spec.y_range(AxisRole::Primary).unwrap_or((0.0, 1.0)));
        let mapping = spec
            .y_range(AxisRole::Secondary)
            .map(|secondary| AxisMapping::new(primary, secondary));

        let mut y_axes = vec![Self::axis_hints(spec.y_axis.title.as_deref())];
        if let (Some(axis), Some(mapping)) = (&spec.y2_axis, mapping) {
            y_axes.push(
                Self::axis_hints(axis.title.as_deref())
                    .placement(HPlacement::Right)
                    .formatter(move |mark, _range| {
                        format!("{:.2}", mapping.to_secondary(mark.value))
                    }),
            );
        }

        let mut plot = Plot::new(id)
            .height(height)
            .allow_scroll(false)
            .x_axis_formatter(|mark, _range| date_label(mark.value))
            .custom_y_axes(y_axes)
            .include_y(primary.0)
            .include_y(primary.1);

        if let Some(title) = &spec.x_axis.title {
            plot = plot.x_axis_label(title.clone());
        }
        if let Some((first, last)) = spec.x_range() {
            plot = plot.include_x(date_to_x(first)).include_x(date_to_x(last));
        }
        if !spec.is_empty() {
            plot = plot.legend(Legend::default().position(Corner::LeftTop));
        }

        plot.show(ui, |plot_ui| {
            for band in spec.bands.iter().filter(|b| b.layer == Layer::Below) {
                Self::draw_band(plot_ui, band, primary, text_color);
            }

            for series in &spec.series {
                Self::draw_series(plot_ui, series, mapping);
            }

            for band in spec.bands.iter().filter(|b| b.layer == Layer::Above) {
                Self::draw_band(plot_ui, band, primary, text_color);
            }
        });
    }

    fn axis_hints(title: Option<&str>) -> AxisHints<'static> {
        match title {
            Some(title) => AxisHints::new_y().label(title.to_string()),
            None => AxisHints::new_y(),
        }
    }

    fn draw_series(plot_ui: &mut PlotUi, series: &Series, mapping: Option<AxisMapping>) {
        let points: Vec<[f64; 2]> = series
            .points()
            .map(|(date, value)| {
                let y = match (series.axis, mapping) {
                    (AxisRole::Secondary, Some(mapping)) => mapping.to_primary(value),
                    _ => value,
                };
                [date_to_x(date), y]
            })
            .collect();

        let color = Color32::from(series.line.color);

        if series.kind.has_line() {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .color(color)
                    .width(series.line.width)
                    .name(&series.name),
            );
        }

        if series.kind.has_markers() {
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .radius(series.marker.size / 2.0)
                    .color(color)
                    .name(&series.name),
            );
        }
    }

    fn draw_band(
        plot_ui: &mut PlotUi,
        band: &HighlightBand,
        (y_lo, y_hi): (f64, f64),
        text_color: Color32,
    ) {
        let x0 = date_to_x(band.x0);
        let x1 = date_to_x(band.x1);
        let corners = vec![[x0, y_lo], [x1, y_lo], [x1, y_hi], [x0, y_hi]];

        let stroke = if band.line_width > 0.0 {
            Stroke::new(band.line_width, Color32::from(band.fill))
        } else {
            Stroke::NONE
        };

        plot_ui.polygon(
            Polygon::new(PlotPoints::from(corners))
                .fill_color(Color32::from(band.fill).gamma_multiply(band.opacity))
                .stroke(stroke),
        );

        if let Some(annotation) = &band.annotation {
            let (x, anchor) = match annotation.position {
                AnnotationPosition::TopRight => (x1, Align2::RIGHT_TOP),
                AnnotationPosition::TopLeft => (x0, Align2::LEFT_TOP),
            };
            plot_ui.text(
                Text::new(
                    PlotPoint::new(x, y_hi),
                    RichText::new(&annotation.text)
                        .size(ANNOTATION_SIZE)
                        .color(text_color),
                )
                .anchor(anchor),
            );
        }
    }
}
