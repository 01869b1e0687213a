// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The longest-element conjecture: the matrices of GL(n, F2) needing the most
//! CNOT gates are exactly the n-cycle permutations, each needing 3(n−1).

use crate::algebra::{Matrix, Qubits};
use crate::oracle::CayleyTable;

/// Outcome of checking the conjecture against a full enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjectureReport {
    pub qubits: Qubits,
    /// 3(n−1).
    pub bound: u8,
    pub max_length: u8,
    /// The elements at `max_length`, in increasing order.
    pub longest: Vec<Matrix>,
    /// The n-cycle permutation matrices, in increasing order.
    pub cycles: Vec<Matrix>,
}

impl ConjectureReport {
    pub fn holds(&self) -> bool {
        self.max_length == self.bound && self.longest == self.cycles
    }
}

/// Every permutation matrix of a single n-cycle, in increasing order.
pub fn cyclic_permutations(qubits: Qubits) -> Vec<Matrix> {
    let n = qubits.get();
    let mut result = Vec::new();
    let mut order: Vec<usize> = (1..n).collect();
    // Each cycle 0 -> a1 -> a2 -> ... -> 0 is one ordering of 1..n.
    loop {
        let mut sigma = vec![0; n];
        let mut from = 0;
        for &to in &order {
            sigma[from] = to;
            from = to;
        }
        sigma[from] = 0;
        result.push(Matrix::permutation(&sigma, qubits));
        if !next_permutation(&mut order) {
            break;
        }
    }
    result.sort();
    result
}

fn next_permutation(items: &mut [usize]) -> bool {
    let Some(i) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let j = items
        .iter()
        .rposition(|&x| x > items[i])
        .unwrap_or(i + 1);
    items.swap(i, j);
    items[i + 1..].reverse();
    true
}

impl CayleyTable {
    /// Compare the longest elements of the group with the n-cycles.
    pub fn check_cyclic_conjecture(&self) -> ConjectureReport {
        let qubits = self.qubits();
        let max_length = self.max_length();
        ConjectureReport {
            qubits,
            bound: 3 * (qubits.get() as u8 - 1),
            max_length,
            longest: self.elements_at(max_length).collect(),
            cycles: cyclic_permutations(qubits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_count() {
        let counts: Vec<usize> = (2..=5)
            .map(|n| cyclic_permutations(Qubits::try_new(n).unwrap()).len())
            .collect();
        assert_eq!(counts, vec![1, 2, 6, 24]);
        let q = Qubits::try_new(4).unwrap();
        assert!(cyclic_permutations(q)
            .iter()
            .all(|m| m.is_cyclic_permutation(q)));
    }

    #[test]
    fn test_conjecture_small() {
        for n in 2..=4 {
            let table = CayleyTable::build(Qubits::try_new(n).unwrap()).unwrap();
            let report = table.check_cyclic_conjecture();
            assert!(report.holds(), "{:?}", report);
        }
    }
}
