use crate::controller::view::{unit_options, View};
use crate::engine::{convert_text_with, ConversionError, DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::table::{CategoryDefinition, ConversionTable};

/// Explicit converter state. Every mutation recomputes `output` synchronously,
/// so the output always reflects the latest change.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    category: String,
    from_unit: Option<String>,
    to_unit: Option<String>,
    input: String,
    output: String,
    decimals: usize,
}

impl ConverterState {
    /// Start on `initial_category` with nothing selected and a blank output
    pub fn new(table: &ConversionTable, initial_category: &str) -> Result<Self, ConversionError> {
        let category = resolve_category(table, initial_category)?;
        Ok(Self {
            category: category.key.clone(),
            from_unit: None,
            to_unit: None,
            input: String::new(),
            output: String::new(),
            decimals: DEFAULT_DECIMALS,
        })
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals.min(MAX_DECIMALS);
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn from_unit(&self) -> Option<&str> {
        self.from_unit.as_deref()
    }

    pub fn to_unit(&self) -> Option<&str> {
        self.to_unit.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Switch category. Clears both selections, the input and the output.
    pub fn select_category(
        &mut self,
        table: &ConversionTable,
        key: &str,
    ) -> Result<(), ConversionError> {
        let category = resolve_category(table, key)?;
        log::debug!("category switched to '{}'", category.key);

        self.category = category.key.clone();
        self.from_unit = None;
        self.to_unit = None;
        self.input.clear();
        self.output.clear();
        Ok(())
    }

    /// Select the source unit; an empty name clears the selection
    pub fn set_from_unit(
        &mut self,
        table: &ConversionTable,
        name: &str,
    ) -> Result<(), ConversionError> {
        self.from_unit = self.checked_selection(table, name)?;
        self.recompute(table);
        Ok(())
    }

    /// Select the target unit; an empty name clears the selection
    pub fn set_to_unit(
        &mut self,
        table: &ConversionTable,
        name: &str,
    ) -> Result<(), ConversionError> {
        self.to_unit = self.checked_selection(table, name)?;
        self.recompute(table);
        Ok(())
    }

    pub fn set_input(&mut self, table: &ConversionTable, text: &str) {
        self.input = text.to_string();
        self.recompute(table);
    }

    pub fn render(&self, table: &ConversionTable) -> View {
        let (header, options) = match table.category(&self.category) {
            Some(category) => (category.title.clone(), unit_options(category)),
            None => (String::new(), Vec::new()),
        };

        View {
            category: self.category.clone(),
            header,
            options,
            from_unit: self.from_unit.clone(),
            to_unit: self.to_unit.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }

    fn checked_selection(
        &self,
        table: &ConversionTable,
        name: &str,
    ) -> Result<Option<String>, ConversionError> {
        if name.is_empty() {
            return Ok(None);
        }

        let category = resolve_category(table, &self.category)?;
        if !category.has_unit(name) {
            return Err(ConversionError::UnknownUnit {
                category: category.key.clone(),
                unit: name.to_string(),
            });
        }
        Ok(Some(name.to_string()))
    }

    fn recompute(&mut self, table: &ConversionTable) {
        self.output = match (&self.from_unit, &self.to_unit) {
            (Some(from), Some(to)) => {
                match convert_text_with(table, &self.category, from, to, &self.input, self.decimals)
                {
                    Ok(text) => text,
                    Err(e) => {
                        if !e.is_blank() {
                            log::warn!("conversion skipped: {}", e);
                        }
                        String::new()
                    }
                }
            }
            _ => String::new(),
        };
    }
}

fn resolve_category<'a>(
    table: &'a ConversionTable,
    key: &str,
) -> Result<&'a CategoryDefinition, ConversionError> {
    table
        .category(key)
        .ok_or_else(|| ConversionError::UnknownCategory(key.to_string()))
}
