//! Figure Builders
//! Turn aggregated daily rows into the two dashboard chart specifications.

use crate::charts::spec::{
    Annotation, AnnotationPosition, Axis, AxisRole, AxisSide, ChartSpec, Color, HAnchor,
    HighlightBand, HoverMode, Layer, Legend, LineStyle, Margin, MarkerStyle, Series, SeriesKind,
    Title, VAnchor,
};
use crate::data::AggregatedRow;
use chrono::NaiveDate;

/// Start of the highlighted window around the 15 Jan 2021 price change.
pub const HIGHLIGHT_START: NaiveDate = match NaiveDate::from_ymd_opt(2021, 1, 14) {
    Some(date) => date,
    None => panic!("invalid highlight start"),
};

/// End of the highlighted window.
pub const HIGHLIGHT_END: NaiveDate = match NaiveDate::from_ymd_opt(2021, 1, 16) {
    Some(date) => date,
    None => panic!("invalid highlight end"),
};

pub const SALES_PRICE_TITLE: &str = "Sales and Price Over Time Across All Regions";
pub const QUANTITY_PRICE_TITLE: &str = "Quantity and Price Over Time";
pub const SALES_PRICE_ANNOTATION: &str = "Price effect on 15 Jan 2021";
pub const QUANTITY_PRICE_ANNOTATION: &str = "Quantity vs. Price on 15 Jan 2021";

const LINE_WIDTH: f32 = 2.0;
const MARKER_SIZE: f32 = 6.0;
const BAND_OPACITY: f32 = 0.5;

fn lines_markers(
    name: &str,
    rows: &[AggregatedRow],
    axis: AxisRole,
    color: Color,
    value: impl Fn(&AggregatedRow) -> f64,
) -> Series {
    Series {
        name: name.to_string(),
        kind: SeriesKind::LinesMarkers,
        axis,
        x: rows.iter().map(|row| row.date).collect(),
        y: rows.iter().map(value).collect(),
        line: LineStyle {
            width: LINE_WIDTH,
            color,
        },
        marker: MarkerStyle { size: MARKER_SIZE },
    }
}

fn highlight_band(fill: Color, text: &str) -> HighlightBand {
    HighlightBand {
        x0: HIGHLIGHT_START,
        x1: HIGHLIGHT_END,
        fill,
        opacity: BAND_OPACITY,
        layer: Layer::Below,
        line_width: 0.0,
        annotation: Some(Annotation {
            text: text.to_string(),
            position: AnnotationPosition::TopRight,
        }),
    }
}

fn price_axis() -> Axis {
    Axis {
        overlays_primary: true,
        ..Axis::titled("Price", AxisSide::Right)
    }
}

/// Sales (left axis) and mean price (right axis) per day.
pub fn build_sales_price_chart(rows: &[AggregatedRow]) -> ChartSpec {
    ChartSpec {
        title: Some(Title::plain(SALES_PRICE_TITLE)),
        series: vec![
            lines_markers("Sales", rows, AxisRole::Primary, Color::BLUE, |r| {
                r.total_sales
            }),
            lines_markers("Price", rows, AxisRole::Secondary, Color::RED, |r| {
                r.avg_price
            }),
        ],
        x_axis: Axis::titled("Date", AxisSide::Bottom),
        y_axis: Axis::titled("Sales", AxisSide::Left),
        y2_axis: Some(price_axis()),
        bands: vec![highlight_band(Color::LIGHT_SALMON, SALES_PRICE_ANNOTATION)],
        legend: Legend::default(),
        margin: Some(Margin {
            l: 100,
            r: 100,
            t: 100,
            b: 50,
        }),
        hover_mode: Some(HoverMode::Closest),
        ..Default::default()
    }
}

/// Quantity (left axis) and mean price (right axis) per day.
pub fn build_quantity_price_chart(rows: &[AggregatedRow]) -> ChartSpec {
    ChartSpec {
        title: Some(Title {
            text: QUANTITY_PRICE_TITLE.to_string(),
            x: Some(0.5),
            y: Some(0.9),
            x_anchor: Some(HAnchor::Center),
            y_anchor: Some(VAnchor::Top),
        }),
        series: vec![
            lines_markers("Quantity", rows, AxisRole::Primary, Color::GREEN, |r| {
                r.total_quantity
            }),
            lines_markers("Price", rows, AxisRole::Secondary, Color::RED, |r| {
                r.avg_price
            }),
        ],
        x_axis: Axis::titled("Date", AxisSide::Bottom),
        y_axis: Axis::titled("Quantity", AxisSide::Left),
        y2_axis: Some(price_axis()),
        bands: vec![highlight_band(
            Color::LIGHT_GREEN,
            QUANTITY_PRICE_ANNOTATION,
        )],
        legend: Legend {
            title: Some("Legend Title".to_string()),
            font_color: None,
        },
        hover_mode: Some(HoverMode::Closest),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<AggregatedRow> {
        (10..=12)
            .map(|day| AggregatedRow {
                date: NaiveDate::from_ymd_opt(2021, 1, day).unwrap(),
                total_sales: day as f64 * 10.0,
                avg_price: day as f64 / 4.0,
                total_quantity: day as f64,
            })
            .collect()
    }

    #[test]
    fn sales_price_layout() {
        let spec = build_sales_price_chart(&rows());

        assert_eq!(spec.title.as_ref().unwrap().text, SALES_PRICE_TITLE);
        assert_eq!(spec.series.len(), 2);

        let sales = &spec.series[0];
        assert_eq!(sales.name, "Sales");
        assert_eq!(sales.axis, AxisRole::Primary);
        assert_eq!(sales.kind, SeriesKind::LinesMarkers);
        assert_eq!(sales.line.color, Color::BLUE);
        assert_eq!(sales.y, vec![100.0, 110.0, 120.0]);

        let price = &spec.series[1];
        assert_eq!(price.name, "Price");
        assert_eq!(price.axis, AxisRole::Secondary);
        assert_eq!(price.line.color, Color::RED);
        assert_eq!(price.y, vec![2.5, 2.75, 3.0]);

        let y2 = spec.y2_axis.as_ref().unwrap();
        assert_eq!(y2.title.as_deref(), Some("Price"));
        assert_eq!(y2.side, AxisSide::Right);
        assert!(y2.overlays_primary);
        assert_eq!(spec.y_axis.title.as_deref(), Some("Sales"));
        assert_eq!(spec.x_axis.title.as_deref(), Some("Date"));
        assert_eq!(spec.hover_mode, Some(HoverMode::Closest));
    }

    #[test]
    fn quantity_price_layout() {
        let spec = build_quantity_price_chart(&rows());

        let title = spec.title.as_ref().unwrap();
        assert_eq!(title.text, QUANTITY_PRICE_TITLE);
        assert!(title.is_centered());
        assert_eq!(spec.legend.title.as_deref(), Some("Legend Title"));
        assert_eq!(spec.y_axis.title.as_deref(), Some("Quantity"));
        assert_eq!(spec.series[0].name, "Quantity");
        assert_eq!(spec.series[0].line.color, Color::GREEN);
        assert_eq!(spec.series[0].y, vec![10.0, 11.0, 12.0]);
        assert_eq!(spec.series[1].axis, AxisRole::Secondary);
    }

    #[test]
    fn band_is_fixed_regardless_of_data() {
        let late: Vec<AggregatedRow> = rows()
            .into_iter()
            .map(|mut row| {
                row.date = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
                row
            })
            .collect();

        for data in [rows(), late, Vec::new()] {
            let sales = build_sales_price_chart(&data);
            let quantity = build_quantity_price_chart(&data);

            for (spec, fill, text) in [
                (&sales, Color::LIGHT_SALMON, SALES_PRICE_ANNOTATION),
                (&quantity, Color::LIGHT_GREEN, QUANTITY_PRICE_ANNOTATION),
            ] {
                assert_eq!(spec.bands.len(), 1);
                let band = &spec.bands[0];
                assert_eq!(band.x0, NaiveDate::from_ymd_opt(2021, 1, 14).unwrap());
                assert_eq!(band.x1, NaiveDate::from_ymd_opt(2021, 1, 16).unwrap());
                assert_eq!(band.fill, fill);
                assert_eq!(band.layer, Layer::Below);
                let note = band.annotation.as_ref().unwrap();
                assert_eq!(note.text, text);
                assert_eq!(note.position, AnnotationPosition::TopRight);
            }
        }
    }

    #[test]
    fn builders_are_deterministic() {
        let data = rows();
        assert_eq!(build_sales_price_chart(&data), build_sales_price_chart(&data));
        assert_eq!(
            build_quantity_price_chart(&data),
            build_quantity_price_chart(&data)
        );
    }
}
