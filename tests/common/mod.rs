// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use cnot_optimal::algebra::{Generator, Matrix, Qubits};
use cnot_optimal::circuit::Circuit;
use cnot_optimal::config::SearchConfig;
use cnot_optimal::engine::SearchEngine;
use cnot_optimal::error::OptimizeError;
use cnot_optimal::state::Statistics;

pub fn qubits(n: usize) -> Qubits {
    Qubits::try_new(n).unwrap()
}

pub fn circuit(n: usize, pairs: &[(usize, usize)]) -> Circuit {
    Circuit::from_pairs(qubits(n), pairs).unwrap()
}

pub fn matrix(n: usize, pairs: &[(usize, usize)]) -> Matrix {
    circuit(n, pairs).matrix()
}

/// Run the engine once, returning its outcome and final statistics.
pub fn search(
    n: usize,
    target: Matrix,
    config: &SearchConfig,
) -> (Result<Vec<Generator>, OptimizeError>, Statistics) {
    let mut engine = SearchEngine::new(qubits(n), target, config);
    let result = engine
        .search()
        .map(|solution| solution.generators().to_vec());
    (result, engine.statistics().clone())
}

/// Level sizes of GL(n, F2) as counted by the search engine.
///
/// The all-zero matrix is singular, so the engine enumerates the whole group
/// before giving up.
pub fn engine_census(n: usize) -> Vec<u64> {
    let (result, statistics) = search(n, Matrix::from_bits(0), &SearchConfig::default());
    assert!(
        matches!(result, Err(OptimizeError::UnreachableTarget { .. })),
        "unexpected outcome {:?}",
        result
    );
    statistics.level_sizes().to_vec()
}
