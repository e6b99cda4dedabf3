use crate::engine::error::ConversionError;
use crate::engine::format::{format_fixed, round_to, DEFAULT_DECIMALS};
use crate::engine::input::parse_value;
use crate::table::{CategoryDefinition, CategoryKind, ConversionTable, UnitSpec};

/// Convert `value` from one unit of `category` to another, rounded to 4 decimals
pub fn convert(
    category: &CategoryDefinition,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    convert_raw(category, from_unit, to_unit, value).map(|v| round_to(v, DEFAULT_DECIMALS))
}

/// Same as [`convert`] without the final rounding
pub fn convert_raw(
    category: &CategoryDefinition,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value.to_string()));
    }

    let from = lookup_unit(category, from_unit)?;
    let to = lookup_unit(category, to_unit)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    let result = match category.kind {
        CategoryKind::Nonlinear => match from {
            UnitSpec::NonlinearTransform(transform) => transform(value, to_unit),
            UnitSpec::LinearFactor(_) => return Err(unknown_unit(category, from_unit)),
        },
        CategoryKind::Linear => {
            let from_factor = from
                .factor()
                .ok_or_else(|| unknown_unit(category, from_unit))?;
            let to_factor = to.factor().ok_or_else(|| unknown_unit(category, to_unit))?;

            // Factors are units per base unit: back to base, then out to the target
            let base_value = value / from_factor;
            base_value * to_factor
        }
    };

    // A finite input can still overflow through a large factor
    if !result.is_finite() {
        return Err(ConversionError::InvalidValue(value.to_string()));
    }

    log::trace!(
        "{}: {} {} -> {} {}",
        category.key,
        value,
        from_unit,
        result,
        to_unit
    );
    Ok(result)
}

/// Controller -> engine boundary: raw text in, formatted 4-decimal text out
pub fn convert_text(
    table: &ConversionTable,
    category_key: &str,
    from_unit: &str,
    to_unit: &str,
    raw_value: &str,
) -> Result<String, ConversionError> {
    convert_text_with(
        table,
        category_key,
        from_unit,
        to_unit,
        raw_value,
        DEFAULT_DECIMALS,
    )
}

pub fn convert_text_with(
    table: &ConversionTable,
    category_key: &str,
    from_unit: &str,
    to_unit: &str,
    raw_value: &str,
    decimals: usize,
) -> Result<String, ConversionError> {
    let category = table
        .category(category_key)
        .ok_or_else(|| ConversionError::UnknownCategory(category_key.to_string()))?;
    let value = parse_value(raw_value)?;
    let result = convert_raw(category, from_unit, to_unit, value)?;
    Ok(format_fixed(result, decimals))
}

fn lookup_unit<'a>(
    category: &'a CategoryDefinition,
    name: &str,
) -> Result<&'a UnitSpec, ConversionError> {
    category
        .unit(name)
        .ok_or_else(|| unknown_unit(category, name))
}

fn unknown_unit(category: &CategoryDefinition, unit: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        category: category.key.clone(),
        unit: unit.to_string(),
    }
}
