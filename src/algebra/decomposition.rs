// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decompositions: owned generator sequences.
//!
//! A decomposition lists generators in application order, so
//! `Matrix::compose(decomposition)` rebuilds the element it decomposes and the
//! same list read left to right is the equivalent CNOT circuit. Its length is
//! the element's distance from the identity; the empty decomposition is the
//! identity circuit.

use crate::algebra::{Generator, Matrix, Qubits};
use crate::error::OptimizeError;

/// An exclusively owned, exactly sized sequence of generators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Decomposition(Box<[Generator]>);

impl Decomposition {
    /// The empty decomposition (identity).
    pub fn identity() -> Self {
        Self::default()
    }

    /// A copy of this decomposition with `generator` appended.
    ///
    /// The new buffer is reserved fallibly, so running out of memory is
    /// reported as `AllocationFailure` rather than aborting.
    pub fn extended(&self, generator: Generator) -> Result<Self, OptimizeError> {
        let mut gates = Vec::new();
        gates
            .try_reserve_exact(self.0.len() + 1)
            .map_err(|_| OptimizeError::allocation("a decomposition buffer"))?;
        gates.extend_from_slice(&self.0);
        gates.push(generator);
        Ok(Self(gates.into_boxed_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn generators(&self) -> &[Generator] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Generator> + '_ {
        self.0.iter().copied()
    }

    /// The matrix this decomposition evaluates to.
    pub fn matrix(&self, qubits: Qubits) -> Matrix {
        Matrix::compose(self.iter(), qubits)
    }
}

impl From<Vec<Generator>> for Decomposition {
    fn from(gates: Vec<Generator>) -> Self {
        Self(gates.into_boxed_slice())
    }
}
