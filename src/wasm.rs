// WebAssembly bindings for the BMI calculator
use crate::config::Config;
use crate::engine::{unit_options, BmiEngine, HeightUnit, Outcome, WeightUnit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct BmiWasm {
    engine: BmiEngine,
}

impl Default for BmiWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BmiWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: BmiEngine::default(),
        }
    }

    /// Build an engine from TOML config content (custom thresholds)
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<BmiWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;

        Ok(Self {
            engine: BmiEngine::new(&config),
        })
    }

    /// Compute BMI from raw field text and unit picker values
    /// Returns JSON: {"status":"success","value":..,"category":..,"indicator":..}
    /// or {"status":"failure","reason":..,"message":..}
    /// Unknown unit strings are thrown rather than reported as a failure payload
    #[wasm_bindgen]
    pub fn compute(
        &self,
        weight_text: &str,
        weight_unit: &str,
        height_text: &str,
        height_unit: &str,
    ) -> Result<String, JsValue> {
        let weight_unit: WeightUnit = weight_unit
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        let height_unit: HeightUnit = height_unit
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

        let outcome = Outcome::from(self.engine.compute(
            weight_text,
            weight_unit,
            height_text,
            height_unit,
        ));

        serde_json::to_string(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Category table for the configured thresholds
    /// Returns JSON array of {"category": .., "range": ..}
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        let rows: Vec<_> = self
            .engine
            .thresholds()
            .describe()
            .into_iter()
            .map(|(category, range)| {
                serde_json::json!({
                    "category": category,
                    "range": range,
                })
            })
            .collect();

        serde_json::to_string(&rows)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize categories: {}", e)))
    }

    /// Unit picker entries for "weight" or "height"
    /// Returns JSON array of {"value": .., "label": ..}
    #[wasm_bindgen]
    pub fn units(&self, field: &str) -> Result<String, JsValue> {
        let options = unit_options(field)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown field: {}", field)))?;

        serde_json::to_string(&options)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// Input placeholder text for a unit picker value
    #[wasm_bindgen]
    pub fn placeholder(&self, field: &str, unit: &str) -> Result<String, JsValue> {
        match field {
            "weight" => unit
                .parse::<WeightUnit>()
                .map(|u| u.placeholder())
                .map_err(|e| JsValue::from_str(&format!("{}", e))),
            "height" => unit
                .parse::<HeightUnit>()
                .map(|u| u.placeholder())
                .map_err(|e| JsValue::from_str(&format!("{}", e))),
            _ => Err(JsValue::from_str(&format!("Unknown field: {}", field))),
        }
    }
}
