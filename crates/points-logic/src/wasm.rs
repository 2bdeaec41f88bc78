//! WASM bindings for the browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{PointSource, PointsConfig, PointsGained, EXCHANGE_COSTS};

/// Install the panic hook so panics reach the browser console
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_source(source: &str) -> Result<PointSource, JsError> {
    source
        .parse::<PointSource>()
        .map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Points for a gameplay event
///
/// # Arguments
/// * `source` - One of `placement`, `soft-drop`, `hard-drop`, `achievement`, `rank-bonus`
/// * `base_amount` - Non-negative base amount
/// * `multiplier` - Defaults to 1 when omitted
///
/// # Returns
/// JS object shaped like `PointsGained`
#[wasm_bindgen(js_name = calculatePointsGained)]
pub fn calculate_points_gained(
    source: &str,
    base_amount: f64,
    multiplier: Option<f64>,
) -> Result<JsValue, JsError> {
    let source = parse_source(source)?;
    let gained = crate::try_calculate_points_gained(source, base_amount, multiplier.unwrap_or(1.0))
        .map_err(|e| JsError::new(&e.to_string()))?;

    to_js(&gained)
}

#[wasm_bindgen(js_name = getCurrentExchangeCost)]
pub fn get_current_exchange_cost(exchange_count: u32) -> u32 {
    crate::get_current_exchange_cost(exchange_count)
}

#[wasm_bindgen(js_name = getNextExchangeCost)]
pub fn get_next_exchange_cost(exchange_count: u32) -> u32 {
    crate::get_next_exchange_cost(exchange_count)
}

/// Exchange attempt; returns a JS object shaped like `ExchangeResult`.
///
/// Insufficient points is reported in the result, never thrown.
#[wasm_bindgen(js_name = attemptExchange)]
pub fn attempt_exchange(
    current_points: f64,
    exchange_count: u32,
    is_fever_mode: Option<bool>,
) -> Result<JsValue, JsError> {
    if !current_points.is_finite() {
        return Err(JsError::new("currentPoints must be a finite number"));
    }
    let result = crate::attempt_exchange(
        current_points as i64,
        exchange_count,
        is_fever_mode.unwrap_or(false),
    );

    to_js(&result)
}

#[wasm_bindgen(js_name = getHoldCost)]
pub fn get_hold_cost(is_fever_mode: Option<bool>) -> u32 {
    crate::get_hold_cost(is_fever_mode.unwrap_or(false))
}

#[wasm_bindgen(js_name = getLineDeleteCost)]
pub fn get_line_delete_cost(is_fever_mode: Option<bool>) -> u32 {
    crate::get_line_delete_cost(is_fever_mode.unwrap_or(false))
}

#[wasm_bindgen(js_name = resetExchangeCount)]
pub fn reset_exchange_count() -> u32 {
    crate::reset_exchange_count()
}

#[wasm_bindgen(js_name = canAfford)]
pub fn can_afford(current_points: f64, cost: u32) -> Result<bool, JsError> {
    if !current_points.is_finite() {
        return Err(JsError::new("currentPoints must be a finite number"));
    }
    Ok(crate::can_afford(current_points as i64, cost))
}

#[wasm_bindgen(js_name = createInitialPointsState)]
pub fn create_initial_points_state() -> Result<JsValue, JsError> {
    to_js(&crate::create_initial_points_state())
}

/// Format a history entry from a `PointsGained` JS object
#[wasm_bindgen(js_name = formatPointsGained)]
pub fn format_points_gained(points_gained: JsValue) -> Result<String, JsError> {
    let gained: PointsGained = serde_wasm_bindgen::from_value(points_gained)
        .map_err(|e| JsError::new(&format!("Invalid PointsGained: {}", e)))?;

    Ok(crate::format_points_gained(&gained))
}

#[wasm_bindgen(js_name = formatExchangeCosts)]
pub fn format_exchange_costs(current_count: u32) -> String {
    crate::format_exchange_costs(current_count)
}

/// The cost ladder as a typed array copy
#[wasm_bindgen(js_name = getExchangeCosts)]
pub fn get_exchange_costs() -> js_sys::Uint32Array {
    js_sys::Uint32Array::from(&EXCHANGE_COSTS[..])
}

/// All points tables as one JS object
#[wasm_bindgen(js_name = getPointsConfig)]
pub fn get_points_config() -> Result<JsValue, JsError> {
    to_js(&PointsConfig::standard())
}
