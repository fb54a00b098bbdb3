// Table builder - Product performance table descriptor
use crate::domain::dashboard::PRODUCTS_TABLE_ID;
use crate::domain::reference::{
    ProductRow, GROWTH_COLUMN, PRODUCT_COLUMN, REVENUE_COLUMN, SALES_COLUMN,
};
use crate::domain::table::{
    CellState, CellStyle, ColumnDef, NumberFormat, RowParity, RuleCondition, StyleRule,
    TableDescriptor,
};

const HIGHLIGHT_BACKGROUND: &str = "rgba(255, 255, 255, 0.9)";

pub fn build_table(products: &[ProductRow]) -> TableDescriptor {
    let mut table = TableDescriptor {
        id: PRODUCTS_TABLE_ID.to_string(),
        columns: vec![
            ColumnDef::text(PRODUCT_COLUMN),
            ColumnDef::numeric(SALES_COLUMN, NumberFormat::Thousands),
            ColumnDef::numeric(REVENUE_COLUMN, NumberFormat::CurrencyThousands),
            ColumnDef::text(GROWTH_COLUMN),
        ],
        rows: products.to_vec(),
        cell_style: CellStyle {
            background_color: Some("rgba(255, 255, 255, 0.1)".to_string()),
            color: Some("white".to_string()),
            border: Some("1px solid rgba(255, 255, 255, 0.2)".to_string()),
            text_align: Some("left".to_string()),
            padding: Some("12px".to_string()),
            font_family: Some("Inter, sans-serif".to_string()),
            font_weight: None,
        },
        header_style: CellStyle {
            background_color: Some("rgba(255, 255, 255, 0.2)".to_string()),
            font_weight: Some("bold".to_string()),
            border: Some("1px solid rgba(255, 255, 255, 0.3)".to_string()),
            ..Default::default()
        },
        conditional_styles: vec![
            StyleRule {
                condition: RuleCondition::RowIndex(RowParity::Odd),
                style: CellStyle {
                    background_color: Some("rgba(255, 255, 255, 0.05)".to_string()),
                    ..Default::default()
                },
            },
            highlight(CellState::Active),
            highlight(CellState::Selected),
        ],
        formatted_rows: Vec::new(),
        row_styles: Vec::new(),
    };
    table.formatted_rows = table.format_rows();
    table.row_styles = table.resting_row_styles();
    table
}

fn highlight(state: CellState) -> StyleRule {
    StyleRule {
        condition: RuleCondition::State(state),
        style: CellStyle {
            background_color: Some(HIGHLIGHT_BACKGROUND.to_string()),
            color: Some("black".to_string()),
            ..Default::default()
        },
    }
}
