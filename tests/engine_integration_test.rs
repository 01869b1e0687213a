// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for circuit optimisation and the search engine.
//!
//! These tests validate that:
//! - trivial circuits are answered without searching
//! - longer circuits are reduced to their optimal length
//! - invalid input is rejected before any search
//! - every level of the group is built exactly once
//! - every node is released on every exit path

mod common;

use cnot_optimal::algebra::{Generator, Matrix, Qubits};
use cnot_optimal::circuit::CircuitReader;
use cnot_optimal::config::{DepthLimits, SearchConfig};
use cnot_optimal::error::OptimizeError;
use cnot_optimal::optimizer::{optimize, Verdict};
use cnot_optimal::state::Counters;
use common::{circuit, engine_census, matrix, qubits, search};
use std::io::Cursor;

#[test]
fn test_single_gate_already_optimal() {
    let result = optimize(&circuit(2, &[(0, 1)]), &SearchConfig::default()).unwrap();
    assert_eq!(result.verdict, Verdict::AlreadyOptimal { length: 1 });
}

#[test]
fn test_repeated_gate_is_identity() {
    let result = optimize(&circuit(2, &[(0, 1), (0, 1)]), &SearchConfig::default()).unwrap();
    assert_eq!(result.verdict, Verdict::Identity);
    assert_eq!(result.matrix, Matrix::identity(qubits(2)));
}

#[test]
fn test_swap_is_already_optimal() {
    let swap = circuit(3, &[(0, 1), (1, 0), (0, 1)]);
    let result = optimize(&swap, &SearchConfig::default()).unwrap();
    assert_eq!(result.verdict, Verdict::AlreadyOptimal { length: 3 });
}

#[test]
fn test_three_cycle_reduces_to_six_gates() {
    // Two swaps make the 3-cycle; the trailing pair cancels.
    let long = circuit(
        3,
        &[
            (0, 1), (1, 0), (0, 1),
            (1, 2), (2, 1), (1, 2),
            (2, 0), (2, 0),
        ],
    );
    let result = optimize(&long, &SearchConfig::default()).unwrap();
    assert!(result.matrix.is_cyclic_permutation(qubits(3)));
    match result.verdict {
        Verdict::Reduced {
            circuit: optimal,
            input_length,
        } => {
            assert_eq!(input_length, 8);
            assert_eq!(optimal.len(), 6);
            assert_eq!(optimal.matrix(qubits(3)), result.matrix);
        }
        other => panic!("unexpected verdict {:?}", other),
    }
}

#[test]
fn test_nine_qubits_rejected() {
    assert!(matches!(
        Qubits::parse("9"),
        Err(OptimizeError::InvalidQubitCount { min: 2, max: 8, .. })
    ));
}

#[test]
fn test_malformed_gate_then_correction() {
    let input = Cursor::new("0 1\n2 2\n1 2\n");
    let mut reader = CircuitReader::new(input, std::io::sink(), qubits(3), 100);
    let c = reader.read_circuit().unwrap();
    assert_eq!(c.gates(), &[Generator::new(0, 1), Generator::new(1, 2)]);
    let result = optimize(&c, &SearchConfig::default()).unwrap();
    assert_eq!(result.verdict, Verdict::AlreadyOptimal { length: 2 });
}

#[test]
fn test_engine_census() {
    assert_eq!(engine_census(2), vec![1, 2, 2, 1]);
    assert_eq!(engine_census(3), vec![1, 6, 24, 51, 60, 24, 2]);
    assert_eq!(
        engine_census(4),
        vec![1, 12, 96, 542, 2058, 5316, 7530, 4058, 541, 6]
    );
}

#[test]
fn test_four_cycle_needs_nine_gates() {
    let target = Matrix::permutation(&[1, 2, 3, 0], qubits(4));
    let (result, statistics) = search(4, target, &SearchConfig::default());
    let gates = result.unwrap();
    assert_eq!(gates.len(), 9);
    assert_eq!(Matrix::compose(gates, qubits(4)), target);
    assert_eq!(statistics.nodes_in_memory(), 0);
}

#[test]
fn test_node_budget_stops_search() {
    let target = Matrix::permutation(&[1, 2, 3, 0], qubits(4));
    let config = SearchConfig::default().with_node_budget(50);
    let (result, statistics) = search(4, target, &config);
    assert!(matches!(result, Err(OptimizeError::AllocationFailure { .. })));
    assert_eq!(statistics.get(Counters::NodesCreated), 50);
    assert_eq!(statistics.get(Counters::NodesFreed), 50);
    assert_eq!(statistics.peak_nodes_in_memory(), 50);
}

#[test]
fn test_ceiling_reports_lower_bound() {
    let config = SearchConfig::default().with_depth_limits(DepthLimits::uniform(5));
    let c = circuit(3, &[(0, 1), (1, 0), (0, 1), (1, 2), (2, 1), (1, 2)]);
    let err = optimize(&c, &config).unwrap_err();
    assert!(matches!(
        err,
        OptimizeError::DepthCeilingExceeded {
            lower_bound: 6,
            ..
        }
    ));
    assert!(err.to_string().contains("at least 6"));
}

#[test]
fn test_same_input_same_circuit() {
    let target = matrix(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)]);
    let (first, _) = search(4, target, &SearchConfig::default());
    let (second, _) = search(4, target, &SearchConfig::default());
    assert_eq!(first.unwrap(), second.unwrap());
}
