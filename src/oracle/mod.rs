// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive enumeration of GL(n, F2) for small n.
//!
//! For n ≤ 5 every n×n matrix fits an index of at most 25 bits, so the whole
//! Cayley graph can be explored breadth-first with two dense tables indexed by
//! the packed matrix: the distance from the identity, and the generator that
//! first reached it. The table answers any target directly and serves as an
//! independent check of the bounded-window search engine.

pub mod conjecture;

pub use conjecture::{cyclic_permutations, ConjectureReport};

use crate::algebra::{Decomposition, Generator, Matrix, Qubits};
use crate::error::OptimizeError;
use tracing::{debug, info};

/// Largest qubit count the dense table supports.
pub const MAX_ORACLE_QUBITS: usize = 5;

const UNREACHED: u8 = u8::MAX;

/// Order of GL(n, F2): 2^(n(n-1)/2) · ∏_{i=1..n} (2^i − 1).
pub fn group_order(qubits: Qubits) -> u64 {
    let n = qubits.get() as u32;
    (1..=n).fold(1u64 << (n * (n - 1) / 2), |order, i| {
        order * ((1u64 << i) - 1)
    })
}

/// Distances from the identity for every matrix of GL(n, F2).
#[derive(Debug)]
pub struct CayleyTable {
    qubits: Qubits,
    distance: Vec<u8>,
    last_gate: Vec<Generator>,
    level_sizes: Vec<u64>,
}

impl CayleyTable {
    /// Enumerate the whole group by breadth-first search from the identity.
    pub fn build(qubits: Qubits) -> Result<Self, OptimizeError> {
        if qubits.get() > MAX_ORACLE_QUBITS {
            return Err(OptimizeError::OracleTooLarge {
                qubits: qubits.get(),
                max: MAX_ORACLE_QUBITS,
            });
        }
        let size = 1usize << qubits.matrix_bits();
        let mut distance = Vec::new();
        distance
            .try_reserve_exact(size)
            .map_err(|_| OptimizeError::allocation(format!("a distance table of {} entries", size)))?;
        distance.resize(size, UNREACHED);
        let mut last_gate = Vec::new();
        last_gate
            .try_reserve_exact(size)
            .map_err(|_| OptimizeError::allocation(format!("a gate table of {} entries", size)))?;
        last_gate.resize(size, Generator::IDENTITY);

        let generators: Vec<Generator> = qubits.generators().collect();
        let identity = Matrix::identity(qubits);
        distance[identity.bits() as usize] = 0;
        let mut frontier = vec![identity];
        let mut level_sizes = vec![1u64];
        let mut depth = 0u8;
        loop {
            let mut next = Vec::new();
            for &m in &frontier {
                for &g in &generators {
                    let candidate = m.apply(g, qubits);
                    let index = candidate.bits() as usize;
                    if distance[index] == UNREACHED {
                        distance[index] = depth + 1;
                        last_gate[index] = g;
                        next.push(candidate);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            depth += 1;
            debug!(depth, size = next.len(), "level enumerated");
            level_sizes.push(next.len() as u64);
            frontier = next;
        }
        info!(
            qubits = qubits.get(),
            elements = level_sizes.iter().sum::<u64>(),
            max_length = depth,
            "group enumerated"
        );
        Ok(Self {
            qubits,
            distance,
            last_gate,
            level_sizes,
        })
    }

    pub fn qubits(&self) -> Qubits {
        self.qubits
    }

    /// Optimal circuit length of `matrix`, or None if it is singular.
    pub fn distance(&self, matrix: Matrix) -> Option<u8> {
        match self.distance.get(matrix.bits() as usize) {
            Some(&d) if d != UNREACHED => Some(d),
            _ => None,
        }
    }

    /// A minimal decomposition of `matrix`, or None if it is singular.
    pub fn decompose(&self, matrix: Matrix) -> Option<Decomposition> {
        let mut remaining = self.distance(matrix)?;
        let mut gates = Vec::with_capacity(remaining as usize);
        let mut m = matrix;
        while remaining > 0 {
            let g = self.last_gate[m.bits() as usize];
            gates.push(g);
            m = m.apply(g, self.qubits);
            remaining -= 1;
        }
        gates.reverse();
        Some(Decomposition::from(gates))
    }

    /// Number of elements at each distance from the identity.
    pub fn level_sizes(&self) -> &[u64] {
        &self.level_sizes
    }

    /// Number of elements in the group.
    pub fn len(&self) -> u64 {
        self.level_sizes.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.level_sizes.is_empty()
    }

    /// Longest optimal circuit length in the group.
    pub fn max_length(&self) -> u8 {
        (self.level_sizes.len() - 1) as u8
    }

    /// All matrices whose optimal circuit has exactly `length` gates.
    pub fn elements_at(&self, length: u8) -> impl Iterator<Item = Matrix> + '_ {
        self.distance
            .iter()
            .enumerate()
            .filter(move |&(_, &d)| d == length)
            .map(|(index, _)| Matrix::from_bits(index as u64))
    }
}
