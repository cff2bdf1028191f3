//! WASM bindings for the circuit designer.
//!
//! This module exposes [`DesignerState`] to the web front-end. Structured
//! values cross the boundary as JSON strings.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitDesigner } from 'kairo_designer';
//!
//! await init();
//!
//! const designer = new WasmCircuitDesigner();
//! designer.add_element('resistor', '10', 'Ω');
//! designer.add_element('capacitor', '1', 'μF');
//! designer.set_source('AC', '5', '1');
//!
//! const result = JSON.parse(designer.generate());
//! ```

use wasm_bindgen::prelude::*;

use crate::auth::{OAuthGateway, Provider, SignIn};
use crate::circuit::{parse_value, CircuitElement, ElementKind, SourceKind};
use crate::designer::DesignerState;
use crate::error::{DesignerError, Result};
use crate::solver::SolverConfig;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: DesignerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| DesignerError::WasmError {
        message: e.to_string(),
    })
}

/// WASM-compatible circuit designer session.
#[wasm_bindgen]
pub struct WasmCircuitDesigner {
    state: DesignerState,
}

#[wasm_bindgen]
impl WasmCircuitDesigner {
    /// Create a new session using the 50 Hz reference frequency.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuitDesigner {
        WasmCircuitDesigner {
            state: DesignerState::new(),
        }
    }

    /// Create a new session with a custom AC frequency in Hz.
    #[wasm_bindgen]
    pub fn with_frequency(frequency_hz: f64) -> std::result::Result<WasmCircuitDesigner, JsValue> {
        let config = SolverConfig::new().with_frequency_hz(frequency_hz);
        config.validate().map_err(to_js)?;
        Ok(WasmCircuitDesigner {
            state: DesignerState::with_config(config),
        })
    }

    /// Add an element. `value` is the raw form text; an empty `unit` uses the
    /// kind's default unit.
    #[wasm_bindgen]
    pub fn add_element(
        &mut self,
        kind: &str,
        value: &str,
        unit: &str,
    ) -> std::result::Result<(), JsValue> {
        let kind: ElementKind = kind.parse().map_err(to_js)?;
        let value = parse_value(value).unwrap_or(f64::NAN);
        let element = if unit.trim().is_empty() {
            CircuitElement::new(kind, value)
        } else {
            CircuitElement::with_unit(kind, value, unit)
        };
        self.state.add_element(element).map_err(to_js)
    }

    /// Remove the element at `index`.
    #[wasm_bindgen]
    pub fn remove_element(&mut self, index: usize) -> std::result::Result<(), JsValue> {
        self.state.remove_element(index).map(|_| ()).map_err(to_js)
    }

    /// Update the source fields. Values are parsed when generating.
    #[wasm_bindgen]
    pub fn set_source(
        &mut self,
        kind: &str,
        voltage: &str,
        branch_count: &str,
    ) -> std::result::Result<(), JsValue> {
        let kind: SourceKind = kind.parse().map_err(to_js)?;
        self.state.set_source_kind(kind);
        self.state.set_voltage(voltage);
        self.state.set_branch_count(branch_count);
        Ok(())
    }

    /// Generate the circuit and return the result as JSON.
    #[wasm_bindgen]
    pub fn generate(&mut self) -> std::result::Result<String, JsValue> {
        let result = self.state.generate().map_err(to_js)?;
        to_json(&result).map_err(to_js)
    }

    /// The currently displayed result as JSON, or `undefined` before the
    /// first generation.
    #[wasm_bindgen]
    pub fn circuit(&self) -> std::result::Result<Option<String>, JsValue> {
        match self.state.circuit() {
            None => Ok(None),
            Some(result) => {
                let result = result.map_err(to_js)?;
                to_json(&result).map(Some).map_err(to_js)
            }
        }
    }

    /// The element list as JSON.
    #[wasm_bindgen]
    pub fn elements(&self) -> std::result::Result<String, JsValue> {
        to_json(self.state.elements()).map_err(to_js)
    }

    /// True while another element can be added.
    #[wasm_bindgen(getter)]
    pub fn can_add(&self) -> bool {
        self.state.can_add()
    }

    /// True once a circuit has been generated.
    #[wasm_bindgen(getter)]
    pub fn show_circuit(&self) -> bool {
        self.state.show_circuit()
    }

    /// The current error message, or `undefined`.
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.state.error().map(str::to_string)
    }
}

impl Default for WasmCircuitDesigner {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the sign-in redirect for `provider` (`"github"` or `"email"`).
#[wasm_bindgen]
pub fn sign_in_url(
    base_url: &str,
    provider: &str,
    email: Option<String>,
    callback_url: Option<String>,
) -> std::result::Result<String, JsValue> {
    let provider = match provider {
        "github" => Provider::GitHub,
        "email" => Provider::Email(email.unwrap_or_default()),
        other => return Err(to_js(DesignerError::invalid_value("provider", other))),
    };

    let mut gateway = OAuthGateway::new(base_url).map_err(to_js)?;
    if let Some(callback) = callback_url {
        gateway = gateway.with_callback(callback);
    }

    gateway
        .sign_in(&provider)
        .map(|redirect| redirect.location)
        .map_err(to_js)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default AC reference frequency in Hz.
#[wasm_bindgen]
pub fn reference_frequency_hz() -> f64 {
    crate::REFERENCE_FREQUENCY_HZ
}
