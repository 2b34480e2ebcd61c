//! Chart Specification Module
//! Strongly typed, renderer-independent description of a time-series chart.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// RGBA colour, serialized as a CSS colour string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(204, 204, 204); // #CCCCCC
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const LIGHT_SALMON: Color = Color::rgb(255, 160, 122);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            let alpha = self.a as f32 / 255.0;
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, alpha)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Lines,
    Markers,
    LinesMarkers,
}

impl SeriesKind {
    pub fn has_line(&self) -> bool {
        matches!(self, SeriesKind::Lines | SeriesKind::LinesMarkers)
    }

    pub fn has_markers(&self) -> bool {
        matches!(self, SeriesKind::Markers | SeriesKind::LinesMarkers)
    }
}

/// Which Y axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisRole {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    #[default]
    Left,
    Right,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub size: f32,
}

/// A date-indexed series of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub axis: AxisRole,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub line: LineStyle,
    pub marker: MarkerStyle,
}

impl Series {
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    pub title: Option<String>,
    pub side: AxisSide,
    /// Drawn over the primary Y axis instead of taking its own strip.
    pub overlays_primary: bool,
    pub color: Option<Color>,
    pub line_color: Option<Color>,
}

impl Axis {
    pub fn titled(title: &str, side: AxisSide) -> Self {
        Self {
            title: Some(title.to_string()),
            side,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Below,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationPosition {
    TopLeft,
    TopRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub position: AnnotationPosition,
}

/// Vertical band spanning the full plot height between two dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightBand {
    pub x0: NaiveDate,
    pub x1: NaiveDate,
    pub fill: Color,
    pub opacity: f32,
    pub layer: Layer,
    pub line_width: f32,
    pub annotation: Option<Annotation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VAnchor {
    Top,
    Middle,
    Bottom,
}

/// Chart title. Position fields are paper fractions; `None` means renderer default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub x_anchor: Option<HAnchor>,
    pub y_anchor: Option<VAnchor>,
}

impl Title {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            x: None,
            y: None,
            x_anchor: None,
            y_anchor: None,
        }
    }

    pub fn is_centered(&self) -> bool {
        self.x_anchor == Some(HAnchor::Center)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Legend {
    pub title: Option<String>,
    pub font_color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverMode {
    Closest,
    X,
}

/// Colours applied to the whole figure.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartStyle {
    pub dark: bool,
    pub paper_background: Option<Color>,
    pub plot_background: Option<Color>,
    pub font_color: Option<Color>,
}

/// Everything a renderer needs to draw one chart.
///
/// `ChartSpec::default()` is the empty placeholder: no title, no series, no bands.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSpec {
    pub title: Option<Title>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y2_axis: Option<Axis>,
    pub bands: Vec<HighlightBand>,
    pub legend: Legend,
    pub margin: Option<Margin>,
    pub hover_mode: Option<HoverMode>,
    pub style: ChartStyle,
}

impl ChartSpec {
    /// Placeholder shown when the pipeline fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_on(&self, axis: AxisRole) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.axis == axis)
    }

    pub fn has_secondary(&self) -> bool {
        self.y2_axis.is_some() && self.series_on(AxisRole::Secondary).next().is_some()
    }

    /// Min and max of all Y values plotted against `axis`.
    pub fn y_range(&self, axis: AxisRole) -> Option<(f64, f64)> {
        self.series_on(axis)
            .flat_map(|s| s.y.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Date span covering every series point and every band.
    pub fn x_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let series_dates = self.series.iter().flat_map(|s| s.x.iter().copied());
        let band_dates = self.bands.iter().flat_map(|b| [b.x0, b.x1]);
        series_dates.chain(band_dates).fold(None, |range, d| match range {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }

    /// Effective text colour.
    pub fn text_color(&self) -> Color {
        self.style.font_color.unwrap_or(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn series(axis: AxisRole, days: &[u32], ys: &[f64]) -> Series {
        Series {
            name: "s".to_string(),
            kind: SeriesKind::LinesMarkers,
            axis,
            x: days.iter().map(|&d| date(d)).collect(),
            y: ys.to_vec(),
            line: LineStyle {
                width: 2.0,
                color: Color::BLUE,
            },
            marker: MarkerStyle { size: 6.0 },
        }
    }

    #[test]
    fn colors_render_as_css() {
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
        assert_eq!(Color::LIGHT_GRAY.to_string(), "#CCCCCC");
        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0,0,0,0)");
        assert_eq!(
            serde_json::to_string(&Color::LIGHT_SALMON).unwrap(),
            "\"#FFA07A\""
        );
    }

    #[test]
    fn empty_placeholder_has_no_content() {
        let spec = ChartSpec::empty();
        assert!(spec.is_empty());
        assert!(spec.title.is_none());
        assert!(spec.bands.is_empty());
        assert_eq!(spec.x_range(), None);
        assert_eq!(spec.y_range(AxisRole::Primary), None);
    }

    #[test]
    fn ranges_are_per_axis() {
        let spec = ChartSpec {
            series: vec![
                series(AxisRole::Primary, &[12, 13], &[5.0, -1.0]),
                series(AxisRole::Secondary, &[11, 12], &[100.0, 300.0]),
            ],
            y2_axis: Some(Axis::titled("Price", AxisSide::Right)),
            ..Default::default()
        };

        assert_eq!(spec.y_range(AxisRole::Primary), Some((-1.0, 5.0)));
        assert_eq!(spec.y_range(AxisRole::Secondary), Some((100.0, 300.0)));
        assert_eq!(spec.x_range(), Some((date(11), date(13))));
        assert!(spec.has_secondary());
    }

    #[test]
    fn x_range_includes_bands() {
        let spec = ChartSpec {
            series: vec![series(AxisRole::Primary, &[10], &[1.0])],
            bands: vec![HighlightBand {
                x0: date(14),
                x1: date(16),
                fill: Color::LIGHT_GREEN,
                opacity: 0.5,
                layer: Layer::Below,
                line_width: 0.0,
                annotation: None,
            }],
            ..Default::default()
        };
        assert_eq!(spec.x_range(), Some((date(10), date(16))));
    }
}
