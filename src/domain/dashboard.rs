// Dashboard domain model
use serde::Serialize;

use super::chart::ChartDescriptor;
use super::reference::MetricCard;
use super::table::TableDescriptor;

pub const SALES_CHART_ID: &str = "sales-chart";
pub const REVENUE_CHART_ID: &str = "revenue-chart";
pub const PIE_CHART_ID: &str = "pie-chart";
pub const PRODUCTS_TABLE_ID: &str = "products-table";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

/// What a layout column holds. Charts and the table are referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Metric { index: usize },
    Chart { id: String },
    Table { id: String, heading: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Out of a 12-column grid.
    pub width: u8,
    pub widget: Widget,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub header: Header,
    pub rows: Vec<Row>,
}

impl Layout {
    pub fn chart_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|r| &r.columns)
            .filter_map(|c| match &c.widget {
                Widget::Chart { id } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        let column = |width, widget| Column { width, widget };
        let chart = |id: &str| Widget::Chart { id: id.to_string() };

        Self {
            header: Header {
                title: "Analytics Dashboard".to_string(),
                subtitle: "Real-time insights and performance metrics".to_string(),
            },
            rows: vec![
                Row {
                    columns: (0..4)
                        .map(|index| column(3, Widget::Metric { index }))
                        .collect(),
                },
                Row {
                    columns: vec![column(8, chart(SALES_CHART_ID)), column(4, chart(PIE_CHART_ID))],
                },
                Row {
                    columns: vec![column(12, chart(REVENUE_CHART_ID))],
                },
                Row {
                    columns: vec![column(
                        12,
                        Widget::Table {
                            id: PRODUCTS_TABLE_ID.to_string(),
                            heading: "Product Performance".to_string(),
                        },
                    )],
                },
            ],
        }
    }
}

/// Everything the page needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub charts: Vec<ChartDescriptor>,
    pub table: TableDescriptor,
    pub metrics: Vec<MetricCard>,
    pub layout: Layout,
}
