use crate::config::{CategoryConfig, Config};
use crate::table::builtin::builtin_categories;
use crate::table::models::*;
use crate::table::validation::*;
use crate::table::ConversionTable;
use std::collections::HashSet;

/// Assembles a conversion table, rejecting categories that break the table invariants
pub struct TableBuilder {
    categories: Vec<CategoryDefinition>,
    validation: ValidationResult,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            validation: ValidationResult::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut builder = Self::new();
        for category in builtin_categories() {
            let location = format!("builtin.{}", category.key);
            builder.add_category(category, &location);
        }
        builder
    }

    /// Built-ins plus the custom categories declared in config
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::with_builtins();
        for (idx, custom) in config.categories.iter().enumerate() {
            builder.add_custom(custom, idx);
        }
        builder
    }

    /// Add a category if it is valid. Returns false (and records why) otherwise.
    pub fn add_category(&mut self, category: CategoryDefinition, location: &str) -> bool {
        let issues = validate_category(&self.categories, &category, location);
        let accepted = issues.is_valid();
        self.validation.merge(issues);

        if accepted {
            log::debug!(
                "registered category '{}' ({} units)",
                category.key,
                category.units.len()
            );
            self.categories.push(category);
        } else {
            log::warn!("dropping category '{}' from {}", category.key, location);
        }
        accepted
    }

    pub fn add_custom(&mut self, custom: &CategoryConfig, index: usize) -> bool {
        let location = format!("categories[{}]", index);
        let category = custom.units.iter().fold(
            CategoryDefinition::new(
                &custom.key,
                custom.title.as_deref().unwrap_or(&custom.key),
                &custom.base,
                CategoryKind::Linear,
            ),
            |category, unit| category.with_unit(UnitEntry::linear(&unit.name, unit.factor)),
        );
        let category = custom
            .aliases
            .iter()
            .fold(category, |category, alias| category.with_alias(alias));

        self.add_category(category, &location)
    }

    pub fn build(self) -> (ConversionTable, ValidationResult) {
        (ConversionTable::new(self.categories), self.validation)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_category(
    existing: &[CategoryDefinition],
    category: &CategoryDefinition,
    location: &str,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    if category.key.is_empty() {
        result.add_error(
            "Category key must not be empty".to_string(),
            Some(location.to_string()),
        );
    }

    for name in std::iter::once(&category.key).chain(category.aliases.iter()) {
        if existing.iter().any(|c| c.answers_to(name)) {
            result.add_error(
                format!("Category key '{}' is already defined", name),
                Some(location.to_string()),
            );
        }
    }

    if category.units.len() < 2 {
        result.add_error(
            format!(
                "Category '{}' needs at least 2 units, found {}",
                category.key,
                category.units.len()
            ),
            Some(format!("{}.units", location)),
        );
    }

    let mut seen = HashSet::new();
    for (idx, unit) in category.units.iter().enumerate() {
        let unit_location = Some(format!("{}.units[{}]", location, idx));

        if unit.name.is_empty() {
            result.add_error("Unit name must not be empty".to_string(), unit_location);
            continue;
        }
        if !seen.insert(unit.name.as_str()) {
            result.add_error(
                format!("Duplicate unit '{}' in category '{}'", unit.name, category.key),
                unit_location,
            );
            continue;
        }
        if unit.spec.kind() != category.kind {
            result.add_error(
                format!(
                    "Unit '{}' does not match the {:?} kind of category '{}'",
                    unit.name, category.kind, category.key
                ),
                unit_location,
            );
            continue;
        }
        if let Some(factor) = unit.spec.factor() {
            if !factor.is_finite() || factor <= 0.0 {
                result.add_error(
                    format!(
                        "Unit '{}' has factor {}, expected a finite positive number",
                        unit.name, factor
                    ),
                    unit_location,
                );
            }
        }
    }

    match category.unit(&category.base_unit) {
        None => result.add_error(
            format!(
                "Base unit '{}' is not one of the units of category '{}'",
                category.base_unit, category.key
            ),
            Some(format!("{}.base", location)),
        ),
        Some(spec) => {
            if let Some(factor) = spec.factor() {
                if factor != 1.0 {
                    result.add_error(
                        format!(
                            "Base unit '{}' must have factor 1, found {}",
                            category.base_unit, factor
                        ),
                        Some(format!("{}.base", location)),
                    );
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnitConfig;

    fn speed() -> CategoryConfig {
        CategoryConfig {
            key: "speed".to_string(),
            title: Some("Speed".to_string()),
            base: "meter-per-second".to_string(),
            aliases: vec![],
            units: vec![
                UnitConfig {
                    name: "meter-per-second".to_string(),
                    factor: 1.0,
                },
                UnitConfig {
                    name: "kilometer-per-hour".to_string(),
                    factor: 3.6,
                },
            ],
        }
    }

    #[test]
    fn test_builtins_are_valid() {
        let (table, validation) = TableBuilder::with_builtins().build();
        assert!(!validation.has_issues(), "{}", validation);
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_custom_category_appended() {
        let mut builder = TableBuilder::with_builtins();
        assert!(builder.add_custom(&speed(), 0));
        let (table, validation) = builder.build();

        assert!(validation.is_valid());
        let category = table.category("speed").expect("speed should be registered");
        assert_eq!(category.title, "Speed");
        assert_eq!(
            category.unit_names(),
            vec!["meter-per-second", "kilometer-per-hour"]
        );
        assert_eq!(table.keys().last(), Some(&"speed"));
    }

    #[test]
    fn test_title_defaults_to_key() {
        let mut custom = speed();
        custom.title = None;
        let mut builder = TableBuilder::new();
        builder.add_custom(&custom, 0);
        let (table, _) = builder.build();
        assert_eq!(table.category("speed").unwrap().title, "speed");
    }

    #[test]
    fn test_rejects_key_collision() {
        let mut custom = speed();
        custom.key = "temp".to_string();
        let mut builder = TableBuilder::with_builtins();
        assert!(!builder.add_custom(&custom, 3));

        let (table, validation) = builder.build();
        assert_eq!(table.len(), 6);
        assert_eq!(validation.errors.len(), 1);
        assert_eq!(validation.errors[0].location.as_deref(), Some("categories[3]"));
    }

    #[test]
    fn test_rejects_single_unit() {
        let mut custom = speed();
        custom.units.truncate(1);
        let mut builder = TableBuilder::new();
        assert!(!builder.add_custom(&custom, 0));
        let (table, validation) = builder.build();
        assert!(table.is_empty());
        assert!(validation.errors[0].message.contains("at least 2 units"));
    }

    #[test]
    fn test_rejects_bad_factors() {
        let mut custom = speed();
        custom.units[1].factor = 0.0;
        custom.units.push(UnitConfig {
            name: "knot".to_string(),
            factor: f64::INFINITY,
        });
        let mut builder = TableBuilder::new();
        assert!(!builder.add_custom(&custom, 0));
        let (_, validation) = builder.build();
        assert_eq!(validation.errors.len(), 2);
        assert_eq!(
            validation.errors[1].location.as_deref(),
            Some("categories[0].units[2]")
        );
    }

    #[test]
    fn test_rejects_duplicate_units() {
        let mut custom = speed();
        custom.units.push(UnitConfig {
            name: "kilometer-per-hour".to_string(),
            factor: 3.6,
        });
        let mut builder = TableBuilder::new();
        assert!(!builder.add_custom(&custom, 0));
    }

    #[test]
    fn test_rejects_base_without_unit_factor() {
        let mut custom = speed();
        custom.base = "kilometer-per-hour".to_string();
        let mut builder = TableBuilder::new();
        assert!(!builder.add_custom(&custom, 0));

        let mut custom = speed();
        custom.base = "furlong-per-fortnight".to_string();
        let mut builder = TableBuilder::new();
        assert!(!builder.add_custom(&custom, 0));
    }

    #[test]
    fn test_rejects_mixed_kinds() {
        let category = crate::table::builtin::length()
            .with_unit(UnitEntry::nonlinear("odd", |value, _| value));
        let mut builder = TableBuilder::new();
        assert!(!builder.add_category(category, "test"));
    }
}
