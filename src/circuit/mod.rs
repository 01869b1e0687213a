// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CNOT circuits as read from and shown to a user.
//!
//! - `parse`: gate parsing and the interactive circuit reader
//! - `display`: rendering of matrices, circuits and decompositions

pub mod display;
pub mod parse;

pub use display::{CircuitDisplay, DecompositionDisplay, MatrixDisplay};
pub use parse::{parse_gate, read_qubit_count, CircuitReader};

use crate::algebra::{Generator, Matrix, Qubits};
use crate::error::OptimizeError;

/// A sequence of CNOT gates on a fixed number of qubits, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    qubits: Qubits,
    gates: Vec<Generator>,
}

impl Circuit {
    /// The empty circuit.
    pub fn new(qubits: Qubits) -> Self {
        Self {
            qubits,
            gates: Vec::new(),
        }
    }

    /// Build a circuit from `(target, control)` pairs.
    pub fn from_pairs(qubits: Qubits, pairs: &[(usize, usize)]) -> Result<Self, OptimizeError> {
        let gates = pairs
            .iter()
            .map(|&(target, control)| {
                Generator::try_new(target, control, qubits).ok_or_else(|| {
                    OptimizeError::malformed(
                        &format!("{} {}", target, control),
                        "qubit indices must be distinct and below the qubit count",
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { qubits, gates })
    }

    pub fn push(&mut self, gate: Generator) {
        self.gates.push(gate);
    }

    pub fn qubits(&self) -> Qubits {
        self.qubits
    }

    pub fn gates(&self) -> &[Generator] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// The matrix of GL(n, F2) computed by this circuit.
    pub fn matrix(&self) -> Matrix {
        Matrix::compose(self.gates.iter().copied(), self.qubits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_rejects_bad_gate() {
        let q = Qubits::try_new(3).unwrap();
        assert!(Circuit::from_pairs(q, &[(0, 1), (2, 0)]).is_ok());
        assert!(matches!(
            Circuit::from_pairs(q, &[(0, 1), (1, 1)]),
            Err(OptimizeError::MalformedGateInput { .. })
        ));
        assert!(Circuit::from_pairs(q, &[(3, 0)]).is_err());
    }

    #[test]
    fn test_empty_circuit_is_identity() {
        let q = Qubits::try_new(6).unwrap();
        let circuit = Circuit::new(q);
        assert!(circuit.is_empty());
        assert_eq!(circuit.matrix(), Matrix::identity(q));
    }
}
