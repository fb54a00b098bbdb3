// Fixed demo reference data: products, regions and metric cards
use serde::Serialize;

use super::table::CellValue;

pub const PRODUCT_COLUMN: &str = "Product";
pub const SALES_COLUMN: &str = "Sales";
pub const REVENUE_COLUMN: &str = "Revenue";
pub const GROWTH_COLUMN: &str = "Growth";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    #[serde(rename = "Product")]
    pub product_name: String,
    #[serde(rename = "Sales")]
    pub units_sold: u64,
    #[serde(rename = "Revenue")]
    pub revenue: u64,
    #[serde(rename = "Growth")]
    pub growth_percent_label: String,
}

impl ProductRow {
    pub fn new(product_name: &str, units_sold: u64, revenue: u64, growth: &str) -> Self {
        Self {
            product_name: product_name.to_string(),
            units_sold,
            revenue,
            growth_percent_label: growth.to_string(),
        }
    }

    /// Cell under a table column id; `None` for ids this row does not carry.
    pub fn cell(&self, column_id: &str) -> Option<CellValue<'_>> {
        match column_id {
            PRODUCT_COLUMN => Some(CellValue::Text(&self.product_name)),
            SALES_COLUMN => Some(CellValue::Count(self.units_sold)),
            REVENUE_COLUMN => Some(CellValue::Count(self.revenue)),
            GROWTH_COLUMN => Some(CellValue::Text(&self.growth_percent_label)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRow {
    pub region_name: String,
    pub sales: u64,
    /// Illustrative only, the five values need not add up to 100.
    pub market_share_percent: u32,
}

impl RegionRow {
    pub fn new(region_name: &str, sales: u64, market_share_percent: u32) -> Self {
        Self {
            region_name: region_name.to_string(),
            sales,
            market_share_percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub change_label: String,
    pub icon_name: String,
    pub change_direction: ChangeDirection,
}

impl MetricCard {
    pub fn new(title: &str, value: &str, change_label: &str, icon_name: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            change_label: change_label.to_string(),
            icon_name: icon_name.to_string(),
            change_direction: Self::direction_of(change_label),
        }
    }

    // "+12.5%" reads as growth, anything without a plus sign as decline
    fn direction_of(change_label: &str) -> ChangeDirection {
        if change_label.contains('+') {
            ChangeDirection::Positive
        } else {
            ChangeDirection::Negative
        }
    }
}

pub fn products() -> [ProductRow; 5] {
    [
        ProductRow::new("iPhone 15", 1250, 1_249_000, "+12.5%"),
        ProductRow::new("MacBook Pro", 890, 1_780_000, "+8.9%"),
        ProductRow::new("iPad Air", 567, 340_000, "-2.1%"),
        ProductRow::new("AirPods Pro", 2100, 525_000, "+15.7%"),
        ProductRow::new("Apple Watch", 1450, 580_000, "+6.3%"),
    ]
}

pub fn regions() -> [RegionRow; 5] {
    [
        RegionRow::new("North America", 45_000, 28),
        RegionRow::new("Europe", 38_000, 23),
        RegionRow::new("Asia Pacific", 52_000, 32),
        RegionRow::new("Latin America", 15_000, 9),
        RegionRow::new("Middle East", 12_000, 8),
    ]
}

/// Display values are hard-coded and not derived from the generated series.
pub fn metric_cards() -> [MetricCard; 4] {
    [
        MetricCard::new("Total Sales", "156K", "+12.5%", "fa-chart-line"),
        MetricCard::new("Revenue", "$2.4M", "+8.9%", "fa-dollar-sign"),
        MetricCard::new("Orders", "3,247", "+15.7%", "fa-shopping-cart"),
        MetricCard::new("Conversion", "3.8%", "+2.1%", "fa-percentage"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_direction() {
        assert_eq!(
            MetricCard::new("Revenue", "$2.4M", "+8.9%", "fa-dollar-sign").change_direction,
            ChangeDirection::Positive
        );
        assert_eq!(
            MetricCard::new("Returns", "12", "-2.1%", "fa-undo").change_direction,
            ChangeDirection::Negative
        );
    }

    #[test]
    fn test_reference_data_is_stable() {
        assert_eq!(products(), products());
        assert_eq!(regions()[2].region_name, "Asia Pacific");
        assert_eq!(regions().iter().map(|r| r.sales).sum::<u64>(), 162_000);
    }

    #[test]
    fn test_cell_lookup_by_column_id() {
        let row = &products()[1];
        assert_eq!(row.cell(PRODUCT_COLUMN), Some(CellValue::Text("MacBook Pro")));
        assert_eq!(row.cell(REVENUE_COLUMN), Some(CellValue::Count(1_780_000)));
        assert_eq!(row.cell("Margin"), None);
    }

    #[test]
    fn test_product_row_serializes_with_column_keys() {
        let json = serde_json::to_value(&products()[0]).unwrap();
        assert_eq!(json["Product"], "iPhone 15");
        assert_eq!(json["Sales"], 1250);
        assert_eq!(json["Revenue"], 1_249_000);
        assert_eq!(json["Growth"], "+12.5%");
    }
}
