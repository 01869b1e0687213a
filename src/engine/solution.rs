// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The result of a successful search.

use crate::algebra::{Decomposition, Generator, Matrix, Qubits};

/// A minimal-length decomposition of the search target.
///
/// Applying the generators in order to the identity yields the target, so the
/// same sequence read as CNOT gates is an optimal equivalent circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    target: Matrix,
    decomposition: Decomposition,
}

impl Solution {
    pub(crate) fn new(target: Matrix, decomposition: Decomposition) -> Self {
        Self {
            target,
            decomposition,
        }
    }

    pub fn target(&self) -> Matrix {
        self.target
    }

    /// Optimal circuit length; 0 for the identity.
    pub fn length(&self) -> usize {
        self.decomposition.len()
    }

    pub fn generators(&self) -> &[Generator] {
        self.decomposition.generators()
    }

    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    pub fn into_decomposition(self) -> Decomposition {
        self.decomposition
    }

    /// Check that the decomposition evaluates to the target.
    pub fn is_consistent(&self, qubits: Qubits) -> bool {
        self.decomposition.matrix(qubits) == self.target
    }
}
