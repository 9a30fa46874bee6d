//! WASM bindings for Phasor Lab.
//!
//! This module provides JavaScript-friendly bindings for the browser
//! schematic editor. The editor keeps one [`WasmCircuitSession`] and calls
//! into it on every user action; rendering stays on the JavaScript side.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitSession, evaluate } from 'phasor_lab';
//!
//! await init();
//!
//! const session = new WasmCircuitSession();
//! const r = session.add_component("resistor");
//! const v = session.add_component("voltage_source_ac");
//! session.connect(v, 2, r, 1);
//!
//! const result = session.solve(60);
//! console.log(result.mesh_equation, result.active_power);
//!
//! const [re, im] = evaluate("divide", 3, 4, 2, -1);
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{CircuitSession, ComponentId, Terminal, TerminalNode, WireId};
use crate::complex::{to_polar as polar_of, Operation};
use crate::components::{ComponentKind, ReactanceMode};
use crate::solver::{CircuitResult, SolverConfig};

fn js_err(e: crate::error::PhasorError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Evaluate a calculator operation on `a + bi` and `c + di`.
///
/// # Returns
/// `[real, imag]`, or an error string for unknown operations and division by
/// zero.
#[wasm_bindgen]
pub fn evaluate(operation: &str, a: f64, b: f64, c: f64, d: f64) -> Result<Vec<f64>, JsValue> {
    let op: Operation = operation.parse().map_err(js_err)?;
    let z = op.evaluate(a, b, c, d).map_err(js_err)?;
    Ok(vec![z.real, z.imag])
}

/// Convert rectangular parts to `[magnitude, angle_degrees]`.
#[wasm_bindgen]
pub fn to_polar(real: f64, imag: f64) -> Vec<f64> {
    let p = polar_of(real, imag);
    vec![p.magnitude, p.angle_degrees]
}

/// Snapshot of a successful solve.
#[wasm_bindgen]
pub struct WasmCircuitResult {
    inner: CircuitResult,
}

#[wasm_bindgen]
impl WasmCircuitResult {
    #[wasm_bindgen(getter)]
    pub fn impedance_real(&self) -> f64 {
        self.inner.impedance.real
    }

    #[wasm_bindgen(getter)]
    pub fn impedance_imag(&self) -> f64 {
        self.inner.impedance.imag
    }

    #[wasm_bindgen(getter)]
    pub fn impedance_magnitude(&self) -> f64 {
        self.inner.impedance_magnitude
    }

    #[wasm_bindgen(getter)]
    pub fn current_real(&self) -> f64 {
        self.inner.current.real
    }

    #[wasm_bindgen(getter)]
    pub fn current_imag(&self) -> f64 {
        self.inner.current.imag
    }

    #[wasm_bindgen(getter)]
    pub fn current_magnitude(&self) -> f64 {
        self.inner.current_magnitude
    }

    #[wasm_bindgen(getter)]
    pub fn phase_degrees(&self) -> f64 {
        self.inner.phase_degrees
    }

    #[wasm_bindgen(getter)]
    pub fn current_phase_degrees(&self) -> f64 {
        self.inner.current_phase_degrees
    }

    #[wasm_bindgen(getter)]
    pub fn power_factor(&self) -> f64 {
        self.inner.power_factor
    }

    #[wasm_bindgen(getter)]
    pub fn apparent_power(&self) -> f64 {
        self.inner.apparent_power
    }

    #[wasm_bindgen(getter)]
    pub fn active_power(&self) -> f64 {
        self.inner.active_power
    }

    #[wasm_bindgen(getter)]
    pub fn reactive_power(&self) -> f64 {
        self.inner.reactive_power
    }

    #[wasm_bindgen(getter)]
    pub fn total_voltage(&self) -> f64 {
        self.inner.total_voltage
    }

    /// "Inductivo", "Capacitivo" or "Resistivo".
    #[wasm_bindgen(getter)]
    pub fn character(&self) -> String {
        self.inner.character().to_string()
    }

    /// The loop equation, e.g. `120V = I × (10.00 + 0.00j) Ω`.
    #[wasm_bindgen(getter)]
    pub fn mesh_equation(&self) -> String {
        self.inner.mesh_equation()
    }
}

/// Browser-side circuit editor state.
#[wasm_bindgen]
pub struct WasmCircuitSession {
    session: CircuitSession,
    reactance_mode: ReactanceMode,
}

#[wasm_bindgen]
impl WasmCircuitSession {
    /// Create an empty session using pre-computed reactances.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuitSession {
        WasmCircuitSession {
            session: CircuitSession::new(),
            reactance_mode: ReactanceMode::Coefficient,
        }
    }

    /// Read capacitor/inductor values as farads/henries (`true`) or as
    /// reactances in ohms (`false`).
    #[wasm_bindgen]
    pub fn set_physical_reactances(&mut self, physical: bool) {
        self.reactance_mode = if physical {
            ReactanceMode::FrequencyAware
        } else {
            ReactanceMode::Coefficient
        };
    }

    /// Place a component by kind name (e.g. `"resistor"`, `"ac_source"`).
    ///
    /// # Returns
    /// The new component's id.
    #[wasm_bindgen]
    pub fn add_component(&mut self, kind: &str) -> Result<u64, JsValue> {
        let kind: ComponentKind = kind.parse().map_err(js_err)?;
        Ok(self.session.add_component(kind).0)
    }

    /// Set a component's magnitude from the raw input text.
    #[wasm_bindgen]
    pub fn update_value(&mut self, id: u64, text: &str) -> Result<(), JsValue> {
        self.session
            .update_value_text(ComponentId(id), text)
            .map_err(js_err)
    }

    /// Set an AC source's phase from the raw input text.
    #[wasm_bindgen]
    pub fn update_phase(&mut self, id: u64, text: &str) -> Result<(), JsValue> {
        self.session
            .update_phase_text(ComponentId(id), text)
            .map_err(js_err)
    }

    /// Rotate a component by 90°.
    ///
    /// # Returns
    /// The new orientation in degrees.
    #[wasm_bindgen]
    pub fn rotate(&mut self, id: u64) -> Result<u16, JsValue> {
        let id = ComponentId(id);
        self.session.rotate(id).map_err(js_err)?;
        Ok(self
            .session
            .component(id)
            .map(|c| c.orientation.degrees())
            .unwrap_or_default())
    }

    /// Delete a component and its wires.
    #[wasm_bindgen]
    pub fn remove_component(&mut self, id: u64) -> Result<(), JsValue> {
        self.session
            .remove_component(ComponentId(id))
            .map(|_| ())
            .map_err(js_err)
    }

    /// Wire terminal `from_node` of one component to `to_node` of another.
    ///
    /// # Returns
    /// The new wire's id.
    #[wasm_bindgen]
    pub fn connect(
        &mut self,
        from_component: u64,
        from_node: u8,
        to_component: u64,
        to_node: u8,
    ) -> Result<u64, JsValue> {
        let from = Terminal::new(
            ComponentId(from_component),
            TerminalNode::try_from(from_node).map_err(js_err)?,
        );
        let to = Terminal::new(
            ComponentId(to_component),
            TerminalNode::try_from(to_node).map_err(js_err)?,
        );
        self.session.connect(from, to).map(|w| w.0).map_err(js_err)
    }

    /// Delete a wire.
    #[wasm_bindgen]
    pub fn disconnect(&mut self, wire: u64) -> Result<(), JsValue> {
        self.session
            .disconnect(WireId(wire))
            .map(|_| ())
            .map_err(js_err)
    }

    /// Solve at the given frequency.
    ///
    /// On error the previous result stays available through `last_result`.
    #[wasm_bindgen]
    pub fn solve(&mut self, frequency_hz: f64) -> Result<WasmCircuitResult, JsValue> {
        let config = SolverConfig::new()
            .with_frequency(frequency_hz)
            .with_reactance_mode(self.reactance_mode);
        let inner = self.session.solve(&config).map_err(js_err)?.clone();
        Ok(WasmCircuitResult { inner })
    }

    /// The latest successful result, or `undefined`.
    #[wasm_bindgen]
    pub fn last_result(&self) -> Option<WasmCircuitResult> {
        self.session
            .last_result()
            .cloned()
            .map(|inner| WasmCircuitResult { inner })
    }

    /// Clear the whole circuit.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Number of placed components.
    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> usize {
        self.session.components().len()
    }

    /// Number of wires.
    #[wasm_bindgen(getter)]
    pub fn wire_count(&self) -> usize {
        self.session.wires().len()
    }
}

impl Default for WasmCircuitSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default excitation frequency.
#[wasm_bindgen]
pub fn default_frequency() -> f64 {
    crate::DEFAULT_FREQUENCY_HZ
}
