//! Sales Data Processor Module
//! Region filtering and per-date aggregation over the loaded sales table.

use crate::data::{SalesRecord, SalesTable};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Selector value that bypasses region filtering. Compared case-sensitively.
pub const ALL_REGIONS: &str = "All";

/// Region choices offered by the region picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
#[value(rename_all = "PascalCase")]
pub enum RegionFilter {
    #[default]
    All,
    North,
    East,
    South,
    West,
}

impl RegionFilter {
    /// Picker order.
    pub const OPTIONS: [RegionFilter; 5] = [
        RegionFilter::All,
        RegionFilter::North,
        RegionFilter::East,
        RegionFilter::South,
        RegionFilter::West,
    ];

    /// The selector string emitted by the picker for this option.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionFilter::All => ALL_REGIONS,
            RegionFilter::North => "North",
            RegionFilter::East => "East",
            RegionFilter::South => "South",
            RegionFilter::West => "West",
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of filtering the table by a region selector.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// The whole table, borrowed as-is.
    Whole(&'a [SalesRecord]),
    /// Rows whose region matched the selector.
    Subset(Vec<&'a SalesRecord>),
    /// Nothing matched; carries the requested selector.
    Empty { region: String },
}

impl<'a> Selection<'a> {
    pub fn len(&self) -> usize {
        match self {
            Selection::Whole(rows) => rows.len(),
            Selection::Subset(rows) => rows.len(),
            Selection::Empty { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a SalesRecord> + '_> {
        match self {
            Selection::Whole(rows) => {
                let rows: &'a [SalesRecord] = *rows;
                Box::new(rows.iter())
            }
            Selection::Subset(rows) => Box::new(rows.iter().copied()),
            Selection::Empty { .. } => Box::new(std::iter::empty()),
        }
    }
}

/// One aggregated point per distinct date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregatedRow {
    pub date: NaiveDate,
    pub total_sales: f64,
    pub avg_price: f64,
    pub total_quantity: f64,
}

#[derive(Default)]
struct DateAccumulator {
    sales: f64,
    price: f64,
    quantity: f64,
    count: usize,
}

/// Filter the table by region.
///
/// `"All"` (exact case) keeps every row. Any other selector is matched
/// case-insensitively against each record's region, so `"all"` is treated as
/// a region name and usually matches nothing.
pub fn filter_by_region<'a>(table: &'a SalesTable, selector: &str) -> Selection<'a> {
    let selection = if selector == ALL_REGIONS {
        Selection::Whole(table.records())
    } else {
        let wanted = selector.to_lowercase();
        Selection::Subset(
            table
                .records()
                .iter()
                .filter(|record| record.region.to_lowercase() == wanted)
                .collect(),
        )
    };

    if selection.is_empty() {
        Selection::Empty {
            region: selector.to_string(),
        }
    } else {
        selection
    }
}

/// Group rows by date: sum of sales, mean of price, sum of quantity.
///
/// Output is ordered by ascending date.
pub fn aggregate_by_date<'r, I>(rows: I) -> Vec<AggregatedRow>
where
    I: IntoIterator<Item = &'r SalesRecord>,
{
    let mut groups: BTreeMap<NaiveDate, DateAccumulator> = BTreeMap::new();

    for record in rows {
        let acc = groups.entry(record.date).or_default();
        acc.sales += record.sales;
        acc.price += record.price;
        acc.quantity += record.quantity;
        acc.count += 1;
    }

    groups
        .into_iter()
        .map(|(date, acc)| AggregatedRow {
            date,
            total_sales: acc.sales,
            avg_price: acc.price / acc.count as f64,
            total_quantity: acc.quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn record(day: u32, region: &str, sales: f64, price: f64, quantity: f64) -> SalesRecord {
        SalesRecord {
            date: date(day),
            region: region.to_string(),
            sales,
            price,
            quantity,
        }
    }

    fn table() -> SalesTable {
        SalesTable::from_records(vec![
            record(11, "North", 10.0, 2.0, 1.0),
            record(10, "south", 20.0, 3.0, 2.0),
            record(10, "NORTH", 30.0, 4.0, 3.0),
            record(11, "East", 40.0, 5.0, 4.0),
            record(10, "North", 50.0, 6.0, 5.0),
        ])
    }

    #[test]
    fn all_sentinel_keeps_every_row() {
        let table = table();
        let selection = filter_by_region(&table, "All");
        assert!(matches!(selection, Selection::Whole(_)));
        assert_eq!(selection.len(), table.len());
        assert!(selection.iter().eq(table.records().iter()));
    }

    #[test]
    fn region_match_ignores_case() {
        let table = table();
        for selector in ["North", "north", "NORTH", "nOrTh"] {
            let selection = filter_by_region(&table, selector);
            let sales: Vec<f64> = selection.iter().map(|r| r.sales).collect();
            assert_eq!(sales, vec![10.0, 30.0, 50.0], "selector {selector}");
        }

        let south = filter_by_region(&table, "South");
        assert_eq!(south.len(), 1);
        assert_eq!(south.iter().next().unwrap().region, "south");
    }

    #[test]
    fn unmatched_region_is_empty_with_selector() {
        let table = table();
        assert_eq!(
            filter_by_region(&table, "West"),
            Selection::Empty {
                region: "West".to_string()
            }
        );
    }

    // "All" is only the sentinel in its exact spelling; lowercase "all" is
    // looked up as a region name.
    #[test]
    fn lowercase_all_is_not_the_sentinel() {
        let table = table();
        assert_eq!(
            filter_by_region(&table, "all"),
            Selection::Empty {
                region: "all".to_string()
            }
        );

        let mut records = table.records().to_vec();
        records.push(record(12, "ALL", 1.0, 1.0, 1.0));
        let with_all_region = SalesTable::from_records(records);
        assert_eq!(filter_by_region(&with_all_region, "all").len(), 1);
        assert_eq!(filter_by_region(&with_all_region, "All").len(), 6);
    }

    #[test]
    fn all_over_empty_table_is_empty() {
        let table = SalesTable::default();
        assert!(matches!(
            filter_by_region(&table, "All"),
            Selection::Empty { .. }
        ));
    }

    #[test]
    fn aggregates_one_row_per_date_in_order() {
        let table = table();
        let rows = aggregate_by_date(table.records());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, date(10));
        assert_eq!(rows[0].total_sales, 100.0);
        assert_eq!(rows[0].avg_price, 13.0 / 3.0);
        assert_eq!(rows[0].total_quantity, 10.0);

        assert_eq!(rows[1].date, date(11));
        assert_eq!(rows[1].total_sales, 50.0);
        assert_eq!(rows[1].avg_price, 3.5);
        assert_eq!(rows[1].total_quantity, 5.0);
    }

    #[test]
    fn aggregates_filtered_subset() {
        let table = table();
        let north = filter_by_region(&table, "North");
        let rows = aggregate_by_date(north.iter());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_sales, 80.0);
        assert_eq!(rows[0].avg_price, 5.0);
        assert_eq!(rows[1].total_sales, 10.0);
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        assert!(aggregate_by_date(std::iter::empty()).is_empty());
    }

    #[test]
    fn picker_options_map_to_selectors() {
        let labels: Vec<&str> = RegionFilter::OPTIONS.iter().map(|r| r.as_str()).collect();
        assert_eq!(labels, ["All", "North", "East", "South", "West"]);
        assert_eq!(RegionFilter::default(), RegionFilter::All);
    }
}
