// Built-in conversion data. Factors are "units per one base unit".

use crate::table::models::*;

pub const CELSIUS: &str = "celsius";
pub const FAHRENHEIT: &str = "fahrenheit";
pub const KELVIN: &str = "kelvin";

const KELVIN_OFFSET: f64 = 273.15;

fn from_celsius(value: f64, to_unit: &str) -> f64 {
    match to_unit {
        FAHRENHEIT => value * 9.0 / 5.0 + 32.0,
        KELVIN => value + KELVIN_OFFSET,
        _ => value,
    }
}

fn from_fahrenheit(value: f64, to_unit: &str) -> f64 {
    match to_unit {
        CELSIUS => (value - 32.0) * 5.0 / 9.0,
        KELVIN => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        _ => value,
    }
}

fn from_kelvin(value: f64, to_unit: &str) -> f64 {
    match to_unit {
        CELSIUS => value - KELVIN_OFFSET,
        FAHRENHEIT => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

fn linear(key: &str, title: &str, units: &[(&str, f64)]) -> CategoryDefinition {
    // First entry is the base unit
    let base = units.first().map(|(name, _)| *name).unwrap_or_default();
    units.iter().fold(
        CategoryDefinition::new(key, title, base, CategoryKind::Linear),
        |category, (name, factor)| category.with_unit(UnitEntry::linear(name, *factor)),
    )
}

pub fn length() -> CategoryDefinition {
    linear(
        "length",
        "Length",
        &[
            ("meter", 1.0),
            ("kilometer", 0.001),
            ("centimeter", 100.0),
            ("millimeter", 1000.0),
            ("micrometer", 1e6),
            ("nanometer", 1e9),
            ("mile", 0.000621371),
            ("yard", 1.09361),
            ("foot", 3.28084),
            ("inch", 39.3701),
            ("light-year", 1.057e-16),
        ],
    )
}

pub fn temperature() -> CategoryDefinition {
    CategoryDefinition::new("temperature", "Temperature", CELSIUS, CategoryKind::Nonlinear)
        .with_alias("temp")
        .with_unit(UnitEntry::nonlinear(CELSIUS, from_celsius))
        .with_unit(UnitEntry::nonlinear(FAHRENHEIT, from_fahrenheit))
        .with_unit(UnitEntry::nonlinear(KELVIN, from_kelvin))
}

pub fn area() -> CategoryDefinition {
    linear(
        "area",
        "Area",
        &[
            ("square-meter", 1.0),
            ("square-kilometer", 1e-6),
            ("square-centimeter", 1e4),
            ("square-millimeter", 1e6),
            ("hectare", 1e-4),
            ("square-mile", 3.861e-7),
            ("square-foot", 10.7639),
            ("square-inch", 1550.0),
            ("acre", 0.000247105),
        ],
    )
}

pub fn volume() -> CategoryDefinition {
    linear(
        "volume",
        "Volume",
        &[
            ("cubic-meter", 1.0),
            ("cubic-kilometer", 1e-9),
            ("cubic-millimeter", 1e9),
            ("liter", 1000.0),
            ("milliliter", 1e6),
            ("us-gallon", 264.172),
            ("us-quart", 1056.69),
            ("us-pint", 2113.38),
            ("us-cup", 4226.75),
            ("us-fluid-ounce", 33814.0),
            ("us-tablespoon", 67628.0),
            ("imperial-gallon", 219.969),
            ("imperial-quart", 879.877),
            ("imperial-pint", 1759.75),
            ("imperial-fluid-ounce", 35195.1),
            ("imperial-tablespoon", 563121.0),
            ("imperial-teaspoon", 1689363.0),
            ("cubic-mile", 2.399e-10),
            ("cubic-yard", 1.308),
            ("cubic-foot", 35.3147),
            ("cubic-inch", 61023.7),
        ],
    )
}

pub fn weight() -> CategoryDefinition {
    linear(
        "weight",
        "Weight",
        &[
            ("kilogram", 1.0),
            ("gram", 1000.0),
            ("milligram", 1e6),
            ("metric-ton", 0.001),
            ("long-ton", 0.000984207),
            ("short-ton", 0.00110231),
            ("pound", 2.20462),
            ("ounce", 35.274),
            ("carat", 5000.0),
            ("atomic-mass-unit", 6.022e26),
        ],
    )
}

pub fn time() -> CategoryDefinition {
    linear(
        "time",
        "Time",
        &[
            ("seconds", 1.0),
            ("milliseconds", 1000.0),
            ("microseconds", 1e6),
            ("nanoseconds", 1e9),
            ("picoseconds", 1e12),
            ("minute", 0.0166667),
            ("hour", 0.000277778),
            ("day", 1.1574e-5),
            ("week", 1.6534e-6),
            ("month", 3.8027e-7),
            ("year", 3.171e-8),
        ],
    )
}

/// All built-in categories in display order
pub fn builtin_categories() -> Vec<CategoryDefinition> {
    vec![length(), temperature(), area(), volume(), weight(), time()]
}
