// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cross-check the bounded-window search against exhaustive enumeration.

mod common;

use cnot_optimal::algebra::{Matrix, Qubits};
use cnot_optimal::config::{DepthLimits, SearchConfig};
use cnot_optimal::error::OptimizeError;
use cnot_optimal::oracle::{cyclic_permutations, group_order, CayleyTable};
use common::{engine_census, matrix, qubits, search};

fn assert_engine_agrees(table: &CayleyTable, target: Matrix) {
    let n = table.qubits().get();
    let expected = table.distance(target).unwrap() as usize;
    let (result, statistics) = search(n, target, &SearchConfig::default());
    let gates = result.unwrap();
    assert_eq!(gates.len(), expected, "target {:#x}", target.bits());
    assert_eq!(Matrix::compose(gates, table.qubits()), target);
    assert_eq!(statistics.nodes_in_memory(), 0);
}

#[test]
fn test_engine_census_matches_oracle() {
    for n in 2..=4 {
        let table = CayleyTable::build(qubits(n)).unwrap();
        assert_eq!(engine_census(n), table.level_sizes(), "{} qubits", n);
        assert_eq!(table.len(), group_order(qubits(n)));
    }
}

#[test]
fn test_every_three_qubit_element() {
    let table = CayleyTable::build(qubits(3)).unwrap();
    for length in 0..=table.max_length() {
        for target in table.elements_at(length) {
            assert_engine_agrees(&table, target);
        }
    }
}

#[test]
fn test_four_qubit_samples() {
    let table = CayleyTable::build(qubits(4)).unwrap();
    for length in 0..=table.max_length() {
        for target in table.elements_at(length).step_by(97).take(5) {
            assert_engine_agrees(&table, target);
        }
    }
    for target in cyclic_permutations(qubits(4)) {
        assert_engine_agrees(&table, target);
    }
}

#[test]
fn test_oracle_decompositions_are_minimal() {
    let q = qubits(4);
    let table = CayleyTable::build(q).unwrap();
    for target in table.elements_at(7).step_by(211) {
        let decomposition = table.decompose(target).unwrap();
        assert_eq!(decomposition.len(), 7);
        assert_eq!(decomposition.matrix(q), target);
    }
}

/// Sizes of levels 0..=4 of GL(5, F2).
const FIVE_QUBIT_LOW_LEVELS: [u64; 5] = [1, 20, 260, 2570, 19680];

#[test]
fn test_five_qubit_low_levels() {
    let config = SearchConfig::default().with_depth_limits(DepthLimits::uniform(4));
    let (result, statistics) = search(5, Matrix::from_bits(0), &config);
    assert!(matches!(
        result,
        Err(OptimizeError::DepthCeilingExceeded { lower_bound: 5, .. })
    ));
    assert_eq!(statistics.level_sizes(), &FIVE_QUBIT_LOW_LEVELS);
    assert_eq!(statistics.nodes_in_memory(), 0);
}

#[test]
fn test_five_qubit_short_targets() {
    let cases: [(&[(usize, usize)], usize); 4] = [
        (&[(0, 1), (1, 2), (2, 3), (3, 4)], 4),
        (&[(4, 0), (0, 4), (4, 0)], 3),
        (&[(3, 4), (2, 3), (3, 4)], 2),
        (&[(0, 1), (1, 2), (0, 1), (1, 2)], 1),
    ];
    for (pairs, expected) in cases {
        let target = matrix(5, pairs);
        let (result, _) = search(5, target, &SearchConfig::default());
        let gates = result.unwrap();
        assert_eq!(gates.len(), expected, "{:?}", pairs);
        assert_eq!(Matrix::compose(gates, qubits(5)), target);
    }
}

#[test]
#[cfg_attr(debug_assertions, ignore = "enumerates ten million elements")]
fn test_five_qubits() {
    let q: Qubits = qubits(5);
    let table = CayleyTable::build(q).unwrap();
    assert_eq!(table.len(), group_order(q));
    assert_eq!(table.max_length(), 12);
    assert_eq!(&table.level_sizes()[..5], &FIVE_QUBIT_LOW_LEVELS);
    assert!(table.check_cyclic_conjecture().holds());
    for length in 0..=6 {
        for target in table.elements_at(length).step_by(4099).take(3) {
            assert_engine_agrees(&table, target);
        }
    }
}
