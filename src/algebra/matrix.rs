// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matrix type: an element of GL(n, F2) packed into a u64.
//!
//! Row `i` occupies bits `[i*n, (i+1)*n)`, the first row in the least
//! significant bits. Within a row, column `j` is bit `n-1-j`, so
//!
//! ```text
//! [a b c]
//! [d e f]   is stored as   g h i d e f a b c
//! [g h i]
//! ```
//!
//! # Examples
//!
//! ```
//! use cnot_optimal::algebra::{Generator, Matrix, Qubits};
//!
//! let q = Qubits::try_new(2).unwrap();
//! let id = Matrix::identity(q);
//! assert_eq!(id.bits(), 0b01_10);
//!
//! // [0:1] adds row 1 to row 0
//! let m = id.apply(Generator::new(0, 1), q);
//! assert_eq!(m.bits(), 0b01_11);
//! assert_eq!(m.apply(Generator::new(0, 1), q), id);
//! ```

use crate::algebra::{Generator, Qubits};

/// A packed n×n matrix over F2.
///
/// The derived ordering is the ordering of the packed integers; the search
/// tree uses it as its key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Matrix(u64);

impl Matrix {
    /// Width of the encoding word.
    pub const BITS: u32 = u64::BITS;

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The n×n identity matrix.
    pub fn identity(qubits: Qubits) -> Self {
        let n = qubits.get();
        Self((0..n).fold(0, |acc, i| acc | (1u64 << (n - 1 - i)) << (i * n)))
    }

    /// Apply a generator: row `target` becomes row `target` XOR row `control`.
    ///
    /// The generator must be valid for `qubits`.
    #[inline]
    pub fn apply(self, generator: Generator, qubits: Qubits) -> Self {
        let n = qubits.get();
        let control_row = (self.0 >> (generator.control() * n)) & qubits.row_mask();
        Self(self.0 ^ (control_row << (generator.target() * n)))
    }

    /// Apply a sequence of generators in order, starting from the identity.
    pub fn compose<I>(generators: I, qubits: Qubits) -> Self
    where
        I: IntoIterator<Item = Generator>,
    {
        generators
            .into_iter()
            .fold(Self::identity(qubits), |m, g| m.apply(g, qubits))
    }

    /// Row `i` as an n-bit integer (column 0 is the most significant bit).
    pub fn row(self, i: usize, qubits: Qubits) -> u64 {
        (self.0 >> (i * qubits.get())) & qubits.row_mask()
    }

    /// Entry at (`row`, `column`).
    pub fn bit(self, row: usize, column: usize, qubits: Qubits) -> bool {
        (self.row(row, qubits) >> (qubits.get() - 1 - column)) & 1 == 1
    }

    /// The permutation matrix whose row `i` is the unit vector `e_sigma[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `sigma` does not have exactly n entries.
    pub fn permutation(sigma: &[usize], qubits: Qubits) -> Self {
        let n = qubits.get();
        assert_eq!(sigma.len(), n, "Permutation length must equal qubit count");
        Self(
            sigma
                .iter()
                .enumerate()
                .fold(0, |acc, (i, &s)| acc | (1u64 << (n - 1 - s)) << (i * n)),
        )
    }

    /// Read the matrix back as a permutation, if it is one.
    pub fn as_permutation(self, qubits: Qubits) -> Option<Vec<usize>> {
        let n = qubits.get();
        let mut sigma = Vec::with_capacity(n);
        let mut seen = 0u64;
        for i in 0..n {
            let row = self.row(i, qubits);
            if row.count_ones() != 1 || seen & row != 0 {
                return None;
            }
            seen |= row;
            sigma.push(n - 1 - row.trailing_zeros() as usize);
        }
        Some(sigma)
    }

    /// True if the matrix permutes the qubits as a single n-cycle.
    pub fn is_cyclic_permutation(self, qubits: Qubits) -> bool {
        match self.as_permutation(qubits) {
            Some(sigma) => {
                let mut position = sigma[0];
                let mut steps = 1;
                while position != 0 {
                    position = sigma[position];
                    steps += 1;
                }
                steps == sigma.len()
            }
            None => false,
        }
    }
}
