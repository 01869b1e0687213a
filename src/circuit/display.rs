// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::algebra::{Decomposition, Generator, Matrix, Qubits};
use crate::circuit::Circuit;
use std::fmt;

/// Shows a matrix as n lines of n bits, row 0 first.
pub struct MatrixDisplay {
    matrix: Matrix,
    qubits: Qubits,
}

impl MatrixDisplay {
    pub fn new(matrix: Matrix, qubits: Qubits) -> Self {
        Self { matrix, qubits }
    }
}

impl fmt::Display for MatrixDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.qubits.get();
        for i in 0..n {
            for j in 0..n {
                let bit = if self.matrix.bit(i, j, self.qubits) { '1' } else { '0' };
                write!(f, "{}", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Shows a circuit as `(target control)` pairs.
pub struct CircuitDisplay<'a>(pub &'a [Generator]);

impl<'a> From<&'a Circuit> for CircuitDisplay<'a> {
    fn from(circuit: &'a Circuit) -> Self {
        CircuitDisplay(circuit.gates())
    }
}

impl fmt::Display for CircuitDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "identity circuit");
        }
        for (i, gate) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({} {})", gate.target(), gate.control())?;
        }
        Ok(())
    }
}

/// Shows a decomposition as the concatenation of its `[t:c]` generators.
pub struct DecompositionDisplay<'a>(pub &'a Decomposition);

impl fmt::Display for DecompositionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "identity");
        }
        for gate in self.0.iter() {
            write!(f, "{}", gate)?;
        }
        Ok(())
    }
}
