use super::*;
use crate::engine::ConversionError;
use crate::table::ConversionTable;

fn setup() -> (ConversionTable, ConverterState) {
    let table = ConversionTable::builtin();
    let state = ConverterState::new(&table, "length").unwrap();
    (table, state)
}

#[test]
fn test_initial_state_is_blank() {
    let (table, state) = setup();
    let view = state.render(&table);

    assert_eq!(view.category, "length");
    assert_eq!(view.header, "Length");
    assert_eq!(view.from_unit, None);
    assert_eq!(view.to_unit, None);
    assert_eq!(view.output, "");
    assert_eq!(view.options.len(), 11);
    assert_eq!(
        view.options.last(),
        Some(&UnitOption {
            value: "light-year".to_string(),
            label: "light year".to_string(),
        })
    );
}

#[test]
fn test_recomputes_on_every_change() {
    let (table, mut state) = setup();

    state.set_input(&table, "1000");
    assert_eq!(state.output(), "");

    state.set_from_unit(&table, "meter").unwrap();
    assert_eq!(state.output(), "");

    state.set_to_unit(&table, "kilometer").unwrap();
    assert_eq!(state.output(), "1.0000");

    state.set_input(&table, "2500");
    assert_eq!(state.output(), "2.5000");

    state.set_to_unit(&table, "centimeter").unwrap();
    assert_eq!(state.output(), "250000.0000");
}

#[test]
fn test_invalid_input_blanks_output() {
    let (table, mut state) = setup();
    state.set_from_unit(&table, "meter").unwrap();
    state.set_to_unit(&table, "kilometer").unwrap();
    state.set_input(&table, "5");
    assert_eq!(state.output(), "0.0050");

    state.set_input(&table, "");
    assert_eq!(state.output(), "");

    state.set_input(&table, "-");
    assert_eq!(state.output(), "");

    state.set_input(&table, "-5");
    assert_eq!(state.output(), "-0.0050");
}

#[test]
fn test_category_switch_resets() {
    let (table, mut state) = setup();
    state.set_from_unit(&table, "meter").unwrap();
    state.set_to_unit(&table, "foot").unwrap();
    state.set_input(&table, "1");
    assert!(!state.output().is_empty());

    state.select_category(&table, "temp").unwrap();
    assert_eq!(state.category(), "temperature");
    assert_eq!(state.from_unit(), None);
    assert_eq!(state.to_unit(), None);
    assert_eq!(state.input(), "");
    assert_eq!(state.output(), "");

    let view = state.render(&table);
    assert_eq!(view.header, "Temperature");
    let values: Vec<_> = view.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["celsius", "fahrenheit", "kelvin"]);

    state.set_from_unit(&table, "celsius").unwrap();
    state.set_to_unit(&table, "fahrenheit").unwrap();
    state.set_input(&table, "0");
    assert_eq!(state.output(), "32.0000");
}

#[test]
fn test_unknown_names_leave_state_untouched() {
    let (table, mut state) = setup();
    state.set_from_unit(&table, "meter").unwrap();
    let before = state.clone();

    assert_eq!(
        state.select_category(&table, "pressure"),
        Err(ConversionError::UnknownCategory("pressure".to_string()))
    );
    assert!(matches!(
        state.set_to_unit(&table, "celsius"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert_eq!(state, before);
}

#[test]
fn test_empty_name_clears_selection() {
    let (table, mut state) = setup();
    state.set_from_unit(&table, "meter").unwrap();
    state.set_to_unit(&table, "inch").unwrap();
    state.set_input(&table, "1");
    assert_eq!(state.output(), "39.3701");

    state.set_to_unit(&table, "").unwrap();
    assert_eq!(state.to_unit(), None);
    assert_eq!(state.output(), "");
}

#[test]
fn test_decimals() {
    let table = ConversionTable::builtin();
    let mut state = ConverterState::new(&table, "weight")
        .unwrap()
        .with_decimals(1);
    state.set_from_unit(&table, "kilogram").unwrap();
    state.set_to_unit(&table, "pound").unwrap();
    state.set_input(&table, "1");
    assert_eq!(state.output(), "2.2");
}

#[test]
fn test_unknown_initial_category() {
    let table = ConversionTable::builtin();
    assert!(ConverterState::new(&table, "pressure").is_err());
}

#[test]
fn test_view_serializes_for_js() {
    let (table, mut state) = setup();
    state.set_from_unit(&table, "meter").unwrap();
    let json = serde_json::to_value(state.render(&table)).unwrap();

    assert_eq!(json["fromUnit"], "meter");
    assert!(json["toUnit"].is_null());
    assert_eq!(json["options"][0]["label"], "meter");
}

#[test]
fn test_category_options() {
    let table = ConversionTable::builtin();
    let options = category_options(&table);
    assert_eq!(options.len(), 6);
    assert_eq!(
        options[1],
        CategoryOption {
            key: "temperature".to_string(),
            title: "Temperature".to_string(),
        }
    );
}
