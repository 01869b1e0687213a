// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circuit-level entry point: decide whether a circuit can be shortened.

use crate::algebra::{Decomposition, Matrix};
use crate::circuit::Circuit;
use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::error::OptimizeError;
use crate::state::Statistics;
use tracing::info;

/// What the optimiser concluded about an input circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The circuit computes the identity; the optimal circuit is empty.
    Identity,
    /// No shorter equivalent circuit exists.
    AlreadyOptimal { length: usize },
    /// A strictly shorter equivalent circuit.
    Reduced {
        circuit: Decomposition,
        input_length: usize,
    },
}

impl Verdict {
    /// Length of an optimal equivalent circuit.
    pub fn optimal_length(&self) -> usize {
        match self {
            Verdict::Identity => 0,
            Verdict::AlreadyOptimal { length } => *length,
            Verdict::Reduced { circuit, .. } => circuit.len(),
        }
    }
}

/// Verdict together with the circuit matrix and the search statistics.
#[derive(Debug, Clone)]
pub struct Optimization {
    pub matrix: Matrix,
    pub verdict: Verdict,
    /// None when no search was needed.
    pub statistics: Option<Statistics>,
}

/// Find an optimal circuit equivalent to `circuit`.
///
/// Identity circuits and single-gate circuits are answered without searching.
pub fn optimize(circuit: &Circuit, config: &SearchConfig) -> Result<Optimization, OptimizeError> {
    let qubits = circuit.qubits();
    let matrix = circuit.matrix();
    if matrix == Matrix::identity(qubits) {
        return Ok(Optimization {
            matrix,
            verdict: Verdict::Identity,
            statistics: None,
        });
    }
    if circuit.len() == 1 {
        return Ok(Optimization {
            matrix,
            verdict: Verdict::AlreadyOptimal { length: 1 },
            statistics: None,
        });
    }

    let mut engine = SearchEngine::new(qubits, matrix, config);
    let solution = engine.search()?;
    let statistics = engine.statistics().clone();
    info!(
        input_length = circuit.len(),
        optimal_length = solution.length(),
        peak_nodes = statistics.peak_nodes_in_memory(),
        "search complete"
    );
    let verdict = if solution.length() == circuit.len() {
        Verdict::AlreadyOptimal {
            length: solution.length(),
        }
    } else {
        Verdict::Reduced {
            circuit: solution.into_decomposition(),
            input_length: circuit.len(),
        }
    };
    Ok(Optimization {
        matrix,
        verdict,
        statistics: Some(statistics),
    })
}
