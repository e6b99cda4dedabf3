use crate::table::{CategoryDefinition, ConversionTable};
use serde::Serialize;

/// Snapshot of the converter, ready to be drawn by any front end
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub category: String,
    pub header: String,
    pub options: Vec<UnitOption>,
    #[serde(rename = "fromUnit")]
    pub from_unit: Option<String>,
    #[serde(rename = "toUnit")]
    pub to_unit: Option<String>,
    pub input: String,
    pub output: String,
}

/// One entry of a unit choice list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitOption {
    pub value: String,
    pub label: String,
}

/// One entry of the category selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOption {
    pub key: String,
    pub title: String,
}

/// Unit choices for a category, in declaration order
pub fn unit_options(category: &CategoryDefinition) -> Vec<UnitOption> {
    category
        .units
        .iter()
        .map(|unit| UnitOption {
            value: unit.name.clone(),
            label: unit.label(),
        })
        .collect()
}

pub fn category_options(table: &ConversionTable) -> Vec<CategoryOption> {
    table
        .categories()
        .map(|c| CategoryOption {
            key: c.key.clone(),
            title: c.title.clone(),
        })
        .collect()
}
