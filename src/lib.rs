// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Optimal CNOT circuits by breadth-first search over GL(n, F2).
//!
//! A circuit of CNOT gates on n qubits computes an invertible n×n matrix over
//! F2, and each gate is an elementary transvection. The shortest circuit for a
//! matrix is its distance from the identity in the Cayley graph generated by
//! the n(n−1) transvections. This crate finds that distance and a witness
//! circuit for 2 ≤ n ≤ 8.
//!
//! # Architecture
//!
//! ## Algebra
//!
//! Immutable value types ([`algebra`]):
//! - `Matrix` - an n×n matrix packed into a u64
//! - `Generator` - one CNOT gate, packed as 16·target + control
//! - `Decomposition` - a generator sequence owned by a search node
//!
//! ## Search state
//!
//! Mutable state that lives for one search:
//! - [`tree`] - arena-backed AVL trees keyed by matrix, walked without a stack
//! - [`engine::SlidingWindow`] - the three levels d−1, d and d+1 kept in memory
//! - [`state::Statistics`] - counters and per-level sizes
//!
//! # Search Algorithm
//!
//! 1. **Seed**: the identity at level 0, every generator at level 1
//! 2. **Expand**: each node of level d times each generator; unseen matrices
//!    form level d+1, and the first match with the target is optimal
//! 3. **Slide**: level d−1 is disposed once level d+1 is complete
//!
//! Memory is bounded by the three largest consecutive levels. Per-qubit depth
//! ceilings ([`config::DepthLimits`]) stop runs that would not fit.
//!
//! # Cross-checking
//!
//! For n ≤ 5 the [`oracle`] enumerates the whole group into a dense table and
//! checks the conjecture that the longest elements are the n-cycle permutations.

pub mod algebra;
pub mod circuit;
pub mod config;
pub mod engine;
pub mod error;
pub mod optimizer;
pub mod oracle;
pub mod state;
pub mod tree;

// Re-export commonly used types
pub use algebra::{Decomposition, Generator, Matrix, Qubits};
pub use circuit::Circuit;
pub use config::SearchConfig;
pub use engine::{SearchEngine, Solution};
pub use error::OptimizeError;
pub use optimizer::{optimize, Optimization, Verdict};
pub use oracle::CayleyTable;
