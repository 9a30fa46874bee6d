//! Editable circuit session.

use std::collections::HashMap;

use tracing::debug;

use super::types::{ComponentId, Terminal, Wire, WireId};
use crate::components::{Component, ComponentKind};
use crate::dsl::{parse_value, CircuitAst, TerminalRef};
use crate::error::{PhasorError, Result};
use crate::solver::{self, CircuitResult, SolverConfig};

/// The state behind one schematic editor.
///
/// The session is the only writer of its components and wires. Solving reads
/// a snapshot of the components and stores the outcome as the latest result;
/// a failed solve leaves the previous result in place.
#[derive(Debug, Default)]
pub struct CircuitSession {
    /// Components in placement order
    components: Vec<Component>,
    /// Wires in drawing order
    wires: Vec<Wire>,
    /// Names given by a circuit description
    names: HashMap<String, ComponentId>,
    /// Next id handed out to a component or wire
    next_id: u64,
    /// Latest successful solve
    result: Option<CircuitResult>,
}

impl CircuitSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from a parsed circuit description.
    pub fn from_ast(ast: &CircuitAst) -> Result<Self> {
        let mut session = Self::new();

        for def in &ast.components {
            if session.names.contains_key(&def.name) {
                return Err(PhasorError::DuplicateComponent {
                    name: def.name.clone(),
                });
            }
            let id = session.add_component(def.kind);
            if let Some(value) = def.value {
                session.update_value(id, value)?;
            }
            if let Some(phase) = def.phase {
                session.update_phase(id, phase).map_err(|_| {
                    PhasorError::parse(
                        def.line,
                        format!("'{}' is a {} and takes no phase", def.name, def.kind),
                    )
                })?;
            }
            session.names.insert(def.name.clone(), id);
        }

        for def in &ast.wires {
            let from = session.resolve_terminal(&def.from, def.line)?;
            let to = session.resolve_terminal(&def.to, def.line)?;
            session.connect(from, to)?;
        }

        Ok(session)
    }

    fn resolve_terminal(&self, terminal: &TerminalRef, line: usize) -> Result<Terminal> {
        let component = self.find(&terminal.component).ok_or_else(|| {
            PhasorError::parse(
                line,
                format!("wire refers to unknown component '{}'", terminal.component),
            )
        })?;
        Ok(Terminal::new(component, terminal.node.try_into()?))
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn component_mut(&mut self, id: ComponentId) -> Result<&mut Component> {
        self.components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| PhasorError::component_not_found(id))
    }

    /// Place a new component with its kind's default value and phase.
    pub fn add_component(&mut self, kind: ComponentKind) -> ComponentId {
        let id = ComponentId(self.allocate_id());
        self.components.push(Component::new(id, kind));
        id
    }

    /// Set a component's magnitude.
    pub fn update_value(&mut self, id: ComponentId, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(PhasorError::invalid_input(format!("{} value", id), value.to_string()));
        }
        self.component_mut(id)?.value = value;
        Ok(())
    }

    /// Set a component's magnitude from user text (unit suffixes allowed).
    pub fn update_value_text(&mut self, id: ComponentId, text: &str) -> Result<()> {
        let value = parse_value(text)
            .ok_or_else(|| PhasorError::invalid_input(format!("{} value", id), text))?;
        self.update_value(id, value)
    }

    /// Set an AC source's phase in degrees.
    pub fn update_phase(&mut self, id: ComponentId, phase: f64) -> Result<()> {
        if !phase.is_finite() {
            return Err(PhasorError::invalid_input(format!("{} phase", id), phase.to_string()));
        }
        let component = self.component_mut(id)?;
        if !component.kind.has_phase() {
            return Err(PhasorError::invalid_parameter(
                id.to_string(),
                format!("a {} has no phase angle", component.kind),
            ));
        }
        component.phase = Some(phase);
        Ok(())
    }

    /// Set an AC source's phase from user text.
    pub fn update_phase_text(&mut self, id: ComponentId, text: &str) -> Result<()> {
        let phase = parse_value(text)
            .ok_or_else(|| PhasorError::invalid_input(format!("{} phase", id), text))?;
        self.update_phase(id, phase)
    }

    /// Turn a component 90° clockwise.
    pub fn rotate(&mut self, id: ComponentId) -> Result<()> {
        let component = self.component_mut(id)?;
        component.orientation = component.orientation.rotated();
        Ok(())
    }

    /// Delete a component and every wire attached to it.
    pub fn remove_component(&mut self, id: ComponentId) -> Result<Component> {
        let idx = self
            .components
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| PhasorError::component_not_found(id))?;
        self.wires.retain(|w| !w.touches(id));
        self.names.retain(|_, v| *v != id);
        Ok(self.components.remove(idx))
    }

    /// Draw a wire between two terminals.
    pub fn connect(&mut self, from: Terminal, to: Terminal) -> Result<WireId> {
        for end in [from, to] {
            if self.component(end.component).is_none() {
                return Err(PhasorError::component_not_found(end.component));
            }
        }
        if from == to {
            return Err(PhasorError::InvalidTopology {
                message: format!("cannot connect terminal {} to itself", from),
            });
        }
        let id = WireId(self.allocate_id());
        self.wires.push(Wire { id, from, to });
        Ok(id)
    }

    /// Delete a wire.
    pub fn disconnect(&mut self, id: WireId) -> Result<Wire> {
        let idx = self
            .wires
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| PhasorError::WireNotFound { id: id.to_string() })?;
        Ok(self.wires.remove(idx))
    }

    /// Solve the current components and keep the result.
    pub fn solve(&mut self, config: &SolverConfig) -> Result<&CircuitResult> {
        let unwired = self.unwired_components();
        if !unwired.is_empty() {
            debug!(count = unwired.len(), "solving with unwired components");
        }
        let result = solver::solve(&self.components, config)?;
        Ok(self.result.insert(result))
    }

    /// Clear components, wires and the stored result.
    pub fn reset(&mut self) {
        self.components.clear();
        self.wires.clear();
        self.names.clear();
        self.result = None;
    }

    /// The latest successful solve, if any.
    pub fn last_result(&self) -> Option<&CircuitResult> {
        self.result.as_ref()
    }

    /// All components in placement order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// All wires in drawing order.
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Look up a component by id.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Look up a component by its description name.
    pub fn find(&self, name: &str) -> Option<ComponentId> {
        self.names.get(name).copied()
    }

    /// The description name of a component, if it has one.
    pub fn name_of(&self, id: ComponentId) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }

    /// Components with no wire on either terminal.
    pub fn unwired_components(&self) -> Vec<ComponentId> {
        self.components
            .iter()
            .map(|c| c.id)
            .filter(|id| !self.wires.iter().any(|w| w.touches(*id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::TerminalNode;
    use crate::components::Orientation;

    fn terminal(id: ComponentId, n: u8) -> Terminal {
        Terminal::new(id, TerminalNode::try_from(n).unwrap())
    }

    #[test]
    fn test_add_and_update() {
        let mut s = CircuitSession::new();
        let r = s.add_component(ComponentKind::Resistor);
        assert_eq!(s.component(r).unwrap().value, 10.0);

        s.update_value(r, 47.0).unwrap();
        assert_eq!(s.component(r).unwrap().value, 47.0);

        s.update_value_text(r, "2.2k").unwrap();
        assert_eq!(s.component(r).unwrap().value, 2200.0);
    }

    #[test]
    fn test_text_input_rejected_not_coerced() {
        let mut s = CircuitSession::new();
        let r = s.add_component(ComponentKind::Resistor);
        let err = s.update_value_text(r, "ten").unwrap_err();
        assert!(matches!(err, PhasorError::InvalidInput { .. }));
        assert_eq!(s.component(r).unwrap().value, 10.0);
        assert!(s.update_value(r, f64::NAN).is_err());
    }

    #[test]
    fn test_phase_only_on_ac_sources() {
        let mut s = CircuitSession::new();
        let r = s.add_component(ComponentKind::Resistor);
        let v = s.add_component(ComponentKind::VoltageSourceAc);
        assert!(matches!(
            s.update_phase(r, 30.0),
            Err(PhasorError::InvalidParameter { .. })
        ));
        s.update_phase_text(v, "-45").unwrap();
        assert_eq!(s.component(v).unwrap().phase, Some(-45.0));
    }

    #[test]
    fn test_rotate() {
        let mut s = CircuitSession::new();
        let l = s.add_component(ComponentKind::Inductor);
        s.rotate(l).unwrap();
        s.rotate(l).unwrap();
        assert_eq!(s.component(l).unwrap().orientation, Orientation::Left);
        assert!(s.rotate(ComponentId(999)).is_err());
    }

    #[test]
    fn test_remove_cascades_to_wires() {
        let mut s = CircuitSession::new();
        let r = s.add_component(ComponentKind::Resistor);
        let c = s.add_component(ComponentKind::Capacitor);
        let v = s.add_component(ComponentKind::VoltageSourceAc);
        s.connect(terminal(v, 2), terminal(r, 1)).unwrap();
        s.connect(terminal(r, 2), terminal(c, 1)).unwrap();
        let keep = s.connect(terminal(c, 2), terminal(v, 1)).unwrap();

        s.remove_component(r).unwrap();
        assert_eq!(s.components().len(), 2);
        assert_eq!(s.wires().len(), 1);
        assert_eq!(s.wires()[0].id, keep);
    }

    #[test]
    fn test_connect_rules() {
        let mut s = CircuitSession::new();
        let r = s.add_component(ComponentKind::Resistor);
        assert!(matches!(
            s.connect(terminal(r, 1), terminal(r, 1)),
            Err(PhasorError::InvalidTopology { .. })
        ));
        assert!(matches!(
            s.connect(terminal(r, 1), terminal(ComponentId(42), 1)),
            Err(PhasorError::ComponentNotFound { .. })
        ));
        // Both terminals of one component is allowed
        let w = s.connect(terminal(r, 1), terminal(r, 2)).unwrap();
        s.disconnect(w).unwrap();
        assert!(s.disconnect(w).is_err());
    }

    #[test]
    fn test_failed_solve_keeps_previous_result() {
        let mut s = CircuitSession::new();
        let r = s.add_component(ComponentKind::Resistor);
        s.add_component(ComponentKind::VoltageSourceAc);
        let config = SolverConfig::default();

        let first = s.solve(&config).unwrap().clone();
        s.update_value(r, 0.0).unwrap();
        assert!(matches!(
            s.solve(&config),
            Err(PhasorError::SingularImpedance { .. })
        ));
        assert_eq!(s.last_result(), Some(&first));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut s = CircuitSession::new();
        s.add_component(ComponentKind::Resistor);
        s.add_component(ComponentKind::VoltageSourceDc);
        s.solve(&SolverConfig::default()).unwrap();
        s.reset();
        assert!(s.components().is_empty());
        assert!(s.last_result().is_none());
        assert!(matches!(
            s.solve(&SolverConfig::default()),
            Err(PhasorError::EmptyCircuit)
        ));
    }

    #[test]
    fn test_unwired_components() {
        let mut s = CircuitSession::new();
        let r = s.add_component(ComponentKind::Resistor);
        let v = s.add_component(ComponentKind::VoltageSourceDc);
        let l = s.add_component(ComponentKind::Inductor);
        s.connect(terminal(r, 1), terminal(v, 2)).unwrap();
        assert_eq!(s.unwired_components(), vec![l]);
    }
}
