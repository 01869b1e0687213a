// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tunable limits of a search run.
//!
//! The defaults keep peak memory of the search window around 2 to 2.5 GB. If
//! more memory is available the depth ceilings can be raised; if less is
//! available they should be lowered, or a node budget set so that the run
//! stops cleanly with an allocation failure.

use crate::algebra::Qubits;

/// Default maximum number of gates read for one input circuit.
pub const DEFAULT_MAX_CIRCUIT_LENGTH: usize = 99;

/// Hard upper bound on the input circuit length.
pub const MAX_CIRCUIT_LENGTH_LIMIT: usize = 254;

/// Deepest breadth-first level searched, per qubit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimits {
    /// Ceiling for 2 to 5 qubits. Every element of GL(5, F2) has optimal length at most 12.
    pub up_to_five_qubits: u8,
    pub six_qubits: u8,
    pub seven_qubits: u8,
    pub eight_qubits: u8,
}

impl DepthLimits {
    /// The same ceiling for every qubit count.
    pub fn uniform(ceiling: u8) -> Self {
        Self {
            up_to_five_qubits: ceiling,
            six_qubits: ceiling,
            seven_qubits: ceiling,
            eight_qubits: ceiling,
        }
    }

    /// Ceiling that applies to `qubits`.
    pub fn ceiling(&self, qubits: Qubits) -> u8 {
        match qubits.get() {
            0..=5 => self.up_to_five_qubits,
            6 => self.six_qubits,
            7 => self.seven_qubits,
            _ => self.eight_qubits,
        }
    }
}

impl Default for DepthLimits {
    fn default() -> Self {
        Self {
            up_to_five_qubits: 12,
            six_qubits: 7,
            seven_qubits: 6,
            eight_qubits: 5,
        }
    }
}

/// Configuration of one optimisation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth_limits: DepthLimits,
    /// Maximum number of nodes held at once; None means limited only by memory.
    pub node_budget: Option<u64>,
    /// Maximum number of gates read for an input circuit.
    pub max_circuit_length: usize,
}

impl SearchConfig {
    pub fn with_depth_limits(mut self, depth_limits: DepthLimits) -> Self {
        self.depth_limits = depth_limits;
        self
    }

    pub fn with_node_budget(mut self, node_budget: u64) -> Self {
        self.node_budget = Some(node_budget);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limits: DepthLimits::default(),
            node_budget: None,
            max_circuit_length: DEFAULT_MAX_CIRCUIT_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceilings() {
        let limits = DepthLimits::default();
        let ceiling = |n| limits.ceiling(Qubits::try_new(n).unwrap());
        assert_eq!(ceiling(2), 12);
        assert_eq!(ceiling(5), 12);
        assert_eq!(ceiling(6), 7);
        assert_eq!(ceiling(7), 6);
        assert_eq!(ceiling(8), 5);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_depth_limits(DepthLimits::uniform(3))
            .with_node_budget(100);
        assert_eq!(config.depth_limits.ceiling(Qubits::try_new(8).unwrap()), 3);
        assert_eq!(config.node_budget, Some(100));
        assert_eq!(config.max_circuit_length, DEFAULT_MAX_CIRCUIT_LENGTH);
    }
}
