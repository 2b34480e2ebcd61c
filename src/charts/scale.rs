//! Axis scale helpers shared by the interactive and static renderers.

use chrono::{Datelike, NaiveDate};

const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Fraction of the data span added above and below a value range.
pub const RANGE_PADDING: f64 = 0.08;

/// Plot X coordinate for a date (whole days).
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Axis label for an X coordinate. Fractional positions get no label.
pub fn date_label(x: f64) -> String {
    if (x - x.round()).abs() > 1e-6 {
        return String::new();
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|date| date.format(DATE_LABEL_FORMAT).to_string())
        .unwrap_or_default()
}

/// Widen a degenerate range so it has a non-zero span.
pub fn non_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    if (hi - lo).abs() > f64::EPSILON {
        (lo, hi)
    } else {
        let pad = lo.abs().max(1.0) * 0.5;
        (lo - pad, hi + pad)
    }
}

/// Range with [`RANGE_PADDING`] on both ends.
pub fn padded_range(range: (f64, f64)) -> (f64, f64) {
    let (lo, hi) = non_degenerate(range);
    let pad = (hi - lo) * RANGE_PADDING;
    (lo - pad, hi + pad)
}

/// Linear mapping between the primary and secondary Y ranges.
///
/// Renderers without native dual axes plot secondary values in primary
/// coordinates and label the right-hand axis through the inverse mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    primary: (f64, f64),
    secondary: (f64, f64),
}

impl AxisMapping {
    pub fn new(primary: (f64, f64), secondary: (f64, f64)) -> Self {
        Self {
            primary: non_degenerate(primary),
            secondary: padded_range(secondary),
        }
    }

    pub fn to_primary(&self, value: f64) -> f64 {
        let (p0, p1) = self.primary;
        let (s0, s1) = self.secondary;
        p0 + (value - s0) / (s1 - s0) * (p1 - p0)
    }

    pub fn to_secondary(&self, value: f64) -> f64 {
        let (p0, p1) = self.primary;
        let (s0, s1) = self.secondary;
        s0 + (value - p0) / (p1 - p0) * (s1 - s0)
    }
}
