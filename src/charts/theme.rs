//! Dark dashboard theme applied to every rendered chart.

use crate::charts::spec::{ChartSpec, Color};

/// Page background behind the transparent chart paper.
pub const PAGE_BACKGROUND: Color = Color::rgb(0x33, 0x33, 0x33);

/// Transparent backgrounds, white text and axes, light-gray legend text.
pub fn apply_dark_theme(spec: &mut ChartSpec) {
    spec.style.dark = true;
    spec.style.paper_background = Some(Color::TRANSPARENT);
    spec.style.plot_background = Some(Color::TRANSPARENT);
    spec.style.font_color = Some(Color::WHITE);

    for axis in [&mut spec.x_axis, &mut spec.y_axis] {
        axis.color = Some(Color::WHITE);
        axis.line_color = Some(Color::WHITE);
    }

    spec.legend.font_color = Some(Color::LIGHT_GRAY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::builder::{build_quantity_price_chart, build_sales_price_chart};

    #[test]
    fn theme_is_identical_for_both_builders() {
        let mut sales = build_sales_price_chart(&[]);
        let mut quantity = build_quantity_price_chart(&[]);
        apply_dark_theme(&mut sales);
        apply_dark_theme(&mut quantity);

        assert_eq!(sales.style, quantity.style);
        assert_eq!(sales.style.paper_background, Some(Color::TRANSPARENT));
        assert_eq!(sales.style.plot_background, Some(Color::TRANSPARENT));
        assert_eq!(sales.text_color(), Color::WHITE);
        assert_eq!(sales.legend.font_color, Some(Color::LIGHT_GRAY));
        assert_eq!(quantity.legend.font_color, Some(Color::LIGHT_GRAY));
        for spec in [&sales, &quantity] {
            assert_eq!(spec.x_axis.color, Some(Color::WHITE));
            assert_eq!(spec.y_axis.line_color, Some(Color::WHITE));
        }
    }

    #[test]
    fn theme_keeps_content() {
        let mut spec = build_sales_price_chart(&[]);
        let before = spec.clone();
        apply_dark_theme(&mut spec);
        assert_eq!(spec.title, before.title);
        assert_eq!(spec.bands, before.bands);
        assert_eq!(spec.y2_axis, before.y2_axis);
    }
}
