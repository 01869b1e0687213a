// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit-packed algebra of GL(n, F2).
//!
//! This module contains the type-safe primitives shared by the search tree,
//! the search engine and the oracle:
//! - Qubits: the dimension n, validated to 2..=8
//! - Matrix: an n×n invertible matrix packed into a u64
//! - Generator: a transvection (CNOT gate) packed into a byte
//! - Decomposition: an owned sequence of generators

pub mod decomposition;
pub mod generator;
pub mod matrix;
pub mod qubits;

pub use decomposition::Decomposition;
pub use generator::Generator;
pub use matrix::Matrix;
pub use qubits::{Qubits, MAX_QUBITS, MIN_QUBITS};
