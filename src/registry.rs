//! Id-keyed table of live simulations.
//!
//! Hosts that cannot hold Rust values directly (message-passing workers,
//! scripting bridges) address simulations by a numeric id instead. Ids start
//! at 1 and increase with every creation, so a stale id misses instead of
//! reaching a newer simulation.

use crate::error::{Result, ShatterError};
use crate::simulation::{ShatterSimulation, StepReport};
use std::collections::HashMap;
use std::fmt;

/// Handle for a simulation owned by a [`SimulationRegistry`].
///
/// Only the registry hands these out; a raw number cannot be turned back
/// into an id:
///
/// ```compile_fail
/// let id: shatter::SimulationId = 7u32.into();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimulationId(u32);

impl SimulationId {
    /// Raw id value, for hosts that pass ids across a boundary.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns every simulation created through it.
#[derive(Debug)]
pub struct SimulationRegistry {
    simulations: HashMap<SimulationId, ShatterSimulation>,
    next_id: u32,
}

impl Default for SimulationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationRegistry {
    pub fn new() -> Self {
        Self {
            simulations: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a simulation and return its id.
    pub fn create(&mut self, center_x: f32, center_y: f32, intensity: f32) -> SimulationId {
        self.insert(ShatterSimulation::new(center_x, center_y, intensity))
    }

    /// Take ownership of an existing simulation.
    pub fn insert(&mut self, simulation: ShatterSimulation) -> SimulationId {
        let id = SimulationId(self.next_id);
        // 0 is never handed out, even after wrapping
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.simulations.insert(id, simulation);
        log::debug!("Registered simulation {id} ({} live)", self.simulations.len());
        id
    }

    /// Set intensity and step the simulation once.
    pub fn update(&mut self, id: SimulationId, dt: f32, intensity: f32) -> Result<StepReport> {
        Ok(self.get_mut(id)?.update(dt, intensity))
    }

    /// JSON export of the simulation's current particles.
    pub fn export(&self, id: SimulationId) -> Result<String> {
        self.get(id)?.export_json()
    }

    /// Drop the simulation. Returns `false` if the id was not live.
    pub fn destroy(&mut self, id: SimulationId) -> bool {
        let removed = self.simulations.remove(&id).is_some();
        if removed {
            log::debug!("Destroyed simulation {id} ({} live)", self.simulations.len());
        }
        removed
    }

    pub fn get(&self, id: SimulationId) -> Result<&ShatterSimulation> {
        self.simulations.get(&id).ok_or(ShatterError::UnknownSimulation(id))
    }

    pub fn get_mut(&mut self, id: SimulationId) -> Result<&mut ShatterSimulation> {
        self.simulations.get_mut(&id).ok_or(ShatterError::UnknownSimulation(id))
    }

    pub fn contains(&self, id: SimulationId) -> bool {
        self.simulations.contains_key(&id)
    }

    /// Number of live simulations.
    pub fn len(&self) -> usize {
        self.simulations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simulations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut registry = SimulationRegistry::new();
        let a = registry.create(0.0, 0.0, 0.0);
        let b = registry.create(5.0, 5.0, 1.0);
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(b).unwrap().len(), 100);
    }

    #[test]
    fn test_destroyed_id_is_rejected() {
        let mut registry = SimulationRegistry::new();
        let id = registry.create(0.0, 0.0, 0.5);
        assert!(registry.destroy(id));
        assert!(!registry.destroy(id));
        assert!(!registry.contains(id));

        assert!(matches!(
            registry.update(id, 0.016, 0.5),
            Err(ShatterError::UnknownSimulation(missing)) if missing == id
        ));
        assert!(matches!(registry.export(id), Err(ShatterError::UnknownSimulation(_))));
    }

    #[test]
    fn test_ids_not_reused() {
        let mut registry = SimulationRegistry::new();
        let a = registry.create(0.0, 0.0, 0.0);
        registry.destroy(a);
        let b = registry.create(0.0, 0.0, 0.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_and_export() {
        let mut registry = SimulationRegistry::new();
        let id = registry.create(1.0, 2.0, 0.0);
        let report = registry.update(id, 0.01, 0.0).unwrap();
        assert_eq!(report.alive, registry.get(id).unwrap().len());
        let json = registry.export(id).unwrap();
        assert!(json.starts_with("[{"));
    }
}
