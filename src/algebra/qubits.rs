// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Qubit count, the dimension n of GL(n, F2).

use crate::algebra::{Generator, Matrix};
use crate::error::OptimizeError;
use std::fmt;

/// Smallest supported qubit count.
pub const MIN_QUBITS: u8 = 2;

/// Largest supported qubit count; n² must fit in the matrix word.
pub const MAX_QUBITS: u8 = 8;

/// A validated qubit count in `MIN_QUBITS..=MAX_QUBITS`.
///
/// Every algebra operation takes the qubit count explicitly, so matrices and
/// generators stay plain `Copy` words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Qubits(u8);

impl Qubits {
    /// Validate a qubit count.
    ///
    /// Fails with `InvalidQubitCount` outside `2..=8`, and with
    /// `UnsupportedWordWidth` if n² bits do not fit in a [`Matrix`].
    pub fn try_new(n: usize) -> Result<Self, OptimizeError> {
        if n < MIN_QUBITS as usize || n > MAX_QUBITS as usize {
            return Err(OptimizeError::InvalidQubitCount {
                given: n.to_string(),
                min: MIN_QUBITS,
                max: MAX_QUBITS,
            });
        }
        let required = (n * n) as u32;
        if required > Matrix::BITS {
            return Err(OptimizeError::UnsupportedWordWidth {
                qubits: n,
                required,
                available: Matrix::BITS,
            });
        }
        Ok(Self(n as u8))
    }

    /// Parse a qubit count typed by a user.
    pub fn parse(text: &str) -> Result<Self, OptimizeError> {
        let trimmed = text.trim();
        match trimmed.parse::<usize>() {
            Ok(n) => Self::try_new(n),
            Err(_) => Err(OptimizeError::InvalidQubitCount {
                given: trimmed.to_string(),
                min: MIN_QUBITS,
                max: MAX_QUBITS,
            }),
        }
    }

    /// The qubit count as a usize (for shifts and indexing).
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Mask selecting one row of a packed matrix.
    pub fn row_mask(self) -> u64 {
        (1u64 << self.0) - 1
    }

    /// Number of meaningful bits in a packed matrix.
    pub fn matrix_bits(self) -> u32 {
        (self.0 as u32) * (self.0 as u32)
    }

    /// Number of generators, n(n-1).
    pub fn generator_count(self) -> usize {
        self.get() * (self.get() - 1)
    }

    /// All generators in the fixed search order: target ascending, then control ascending.
    pub fn generators(self) -> impl Iterator<Item = Generator> {
        let n = self.0;
        (0..n).flat_map(move |target| {
            (0..n)
                .filter(move |&control| control != target)
                .map(move |control| Generator::new(target, control))
        })
    }
}

impl fmt::Display for Qubits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
