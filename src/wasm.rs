// WebAssembly bindings for the converter widget
use crate::config::Config;
use crate::controller::{self, ConverterState};
use crate::engine;
use crate::table::ConversionTable;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConverterWasm {
    table: ConversionTable,
    state: ConverterState,
}

#[wasm_bindgen]
impl ConverterWasm {
    /// Build the table once from optional TOML config text
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<ConverterWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };

        let (table, validation) = ConversionTable::from_config(&config);
        if validation.has_issues() {
            console_warn(&validation.to_string());
        }

        let state = ConverterState::new(&table, config.initial_category(&table))
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .with_decimals(config.decimals());

        Ok(Self { table, state })
    }

    /// Category selector entries as a JSON array of {key, title}
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        serde_json::to_string(&controller::category_options(&self.table))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize categories: {}", e)))
    }

    /// Unit names of a category, in declaration order
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<js_sys::Array, JsValue> {
        let category = self
            .table
            .category(category)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown category: {}", category)))?;

        Ok(category
            .unit_names()
            .into_iter()
            .map(JsValue::from_str)
            .collect())
    }

    /// Stateless conversion; blank string when the value is not a number
    #[wasm_bindgen]
    pub fn convert(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        raw_value: &str,
    ) -> Result<String, JsValue> {
        match engine::convert_text(&self.table, category, from_unit, to_unit, raw_value) {
            Ok(text) => Ok(text),
            Err(e) if e.is_blank() => Ok(String::new()),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    #[wasm_bindgen]
    pub fn select_category(&mut self, key: &str) -> Result<(), JsValue> {
        self.state
            .select_category(&self.table, key)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn set_from_unit(&mut self, name: &str) -> Result<(), JsValue> {
        self.state
            .set_from_unit(&self.table, name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn set_to_unit(&mut self, name: &str) -> Result<(), JsValue> {
        self.state
            .set_to_unit(&self.table, name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) {
        self.state.set_input(&self.table, text);
    }

    /// Current output text (blank when there is nothing to show)
    #[wasm_bindgen]
    pub fn output(&self) -> String {
        self.state.output().to_string()
    }

    /// Rendered view as JSON
    #[wasm_bindgen]
    pub fn view(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.render(&self.table))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize view: {}", e)))
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(message: &str);
}
