// Table descriptor domain models
use serde::{Serialize, Serializer};

use super::reference::ProductRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Numeric,
}

/// d3-style format specifiers understood by the table widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// `,`: 1250 → "1,250"
    Thousands,
    /// `$,`: 1249000 → "$1,249,000"
    CurrencyThousands,
}

impl NumberFormat {
    pub fn specifier(&self) -> &'static str {
        match self {
            NumberFormat::Thousands => ",",
            NumberFormat::CurrencyThousands => "$,",
        }
    }

    pub fn format(&self, value: u64) -> String {
        let grouped = group_thousands(value);
        match self {
            NumberFormat::Thousands => grouped,
            NumberFormat::CurrencyThousands => format!("${}", grouped),
        }
    }
}

impl Serialize for NumberFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.specifier())
    }
}

/// Insert a comma every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// A single cell as stored, before any column format is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Count(u64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<NumberFormat>,
}

impl ColumnDef {
    pub fn text(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: name.to_string(),
            column_type: ColumnType::Text,
            format: None,
        }
    }

    pub fn numeric(name: &str, format: NumberFormat) -> Self {
        Self {
            name: name.to_string(),
            id: name.to_string(),
            column_type: ColumnType::Numeric,
            format: Some(format),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Active,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowParity {
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCondition {
    RowIndex(RowParity),
    State(CellState),
}

impl RuleCondition {
    pub fn matches(&self, row_index: usize, state: Option<CellState>) -> bool {
        match self {
            RuleCondition::RowIndex(RowParity::Odd) => row_index % 2 == 1,
            RuleCondition::State(wanted) => state == Some(*wanted),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

impl CellStyle {
    /// Fields set on `other` replace ours.
    pub fn overlay(&mut self, other: &CellStyle) {
        fn take(slot: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                slot.clone_from(value);
            }
        }

        take(&mut self.background_color, &other.background_color);
        take(&mut self.color, &other.color);
        take(&mut self.border, &other.border);
        take(&mut self.text_align, &other.text_align);
        take(&mut self.padding, &other.padding);
        take(&mut self.font_family, &other.font_family);
        take(&mut self.font_weight, &other.font_weight);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    #[serde(rename = "if")]
    pub condition: RuleCondition,
    #[serde(flatten)]
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDescriptor {
    pub id: String,
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<ProductRow>,
    pub cell_style: CellStyle,
    pub header_style: CellStyle,
    /// Applied in order; later rules win on conflicting fields.
    pub conditional_styles: Vec<StyleRule>,
    /// Display text per row in column order, for hosts that ignore format specifiers.
    pub formatted_rows: Vec<Vec<String>>,
    /// Resting style per row (no interaction state) with the rules already applied.
    pub row_styles: Vec<CellStyle>,
}

impl TableDescriptor {
    pub fn resting_row_styles(&self) -> Vec<CellStyle> {
        (0..self.rows.len())
            .map(|row_index| self.resolve_cell_style(row_index, None))
            .collect()
    }

    pub fn format_rows(&self) -> Vec<Vec<String>> {
        (0..self.rows.len())
            .map(|row_index| {
                self.columns
                    .iter()
                    .map(|c| self.formatted_cell(row_index, &c.id).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    pub fn resolve_cell_style(&self, row_index: usize, state: Option<CellState>) -> CellStyle {
        let mut style = self.cell_style.clone();
        for rule in &self.conditional_styles {
            if rule.condition.matches(row_index, state) {
                style.overlay(&rule.style);
            }
        }
        style
    }

    /// Display text for one cell, with the column's number format applied.
    pub fn formatted_cell(&self, row_index: usize, column_id: &str) -> Option<String> {
        let column = self.columns.iter().find(|c| c.id == column_id)?;
        let value = self.rows.get(row_index)?.cell(column_id)?;

        Some(match (column.format, value) {
            (Some(format), CellValue::Count(n)) => format.format(n),
            (None, CellValue::Count(n)) => n.to_string(),
            (_, CellValue::Text(s)) => s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formats() {
        assert_eq!(NumberFormat::Thousands.format(1250), "1,250");
        assert_eq!(NumberFormat::Thousands.format(567), "567");
        assert_eq!(NumberFormat::Thousands.format(0), "0");
        assert_eq!(NumberFormat::CurrencyThousands.format(1_249_000), "$1,249,000");
        assert_eq!(NumberFormat::Thousands.format(100_000), "100,000");
    }

    #[test]
    fn test_number_formats_cover_full_u64_range() {
        assert_eq!(
            NumberFormat::CurrencyThousands.format(u64::MAX),
            "$18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_rule_condition_matches() {
        let odd = RuleCondition::RowIndex(RowParity::Odd);
        assert!(odd.matches(1, None));
        assert!(!odd.matches(0, None));

        let active = RuleCondition::State(CellState::Active);
        assert!(active.matches(0, Some(CellState::Active)));
        assert!(!active.matches(0, Some(CellState::Selected)));
        assert!(!active.matches(0, None));
    }

    #[test]
    fn test_overlay_keeps_unset_fields() {
        let mut base = CellStyle {
            background_color: Some("blue".into()),
            padding: Some("12px".into()),
            ..Default::default()
        };
        base.overlay(&CellStyle {
            background_color: Some("red".into()),
            ..Default::default()
        });

        assert_eq!(base.background_color.as_deref(), Some("red"));
        assert_eq!(base.padding.as_deref(), Some("12px"));
    }

    #[test]
    fn test_style_rule_wire_shape() {
        let rule = StyleRule {
            condition: RuleCondition::RowIndex(RowParity::Odd),
            style: CellStyle {
                background_color: Some("rgba(255, 255, 255, 0.05)".into()),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["if"]["row_index"], "odd");
        assert_eq!(json["background_color"], "rgba(255, 255, 255, 0.05)");
    }
}
