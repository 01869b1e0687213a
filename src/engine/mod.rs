// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded-memory breadth-first search engine.
//!
//! This module finds a shortest generator sequence for a target matrix by
//! expanding the Cayley graph of GL(n, F2) level by level from the identity.
//!
//! # Architecture
//!
//! The engine is a small state machine:
//!
//! ```text
//! Init -> Seeded -> Expanding(2) -> Expanding(3) -> ... -> Found
//!                                                      \-> Exhausted
//! ```
//!
//! 1. **Init**: the depth ceiling for the qubit count is taken from the configuration
//! 2. **Seeded**: level 0 (the identity) and level 1 (every generator) are built;
//!    targets of length 0 or 1 are answered here
//! 3. **Expanding(d)**: every node of level `d-1` is combined with every
//!    generator; new matrices are inserted into the level-`d` tree
//! 4. **Found**: the first match is minimal, since all shorter levels are complete
//! 5. **Exhausted**: the ceiling was passed without a match
//!
//! Only three levels are alive at any time (see [`window`]). After a level is
//! complete the oldest tree is disposed and the window slides.
//!
//! # Determinism
//!
//! Levels are enumerated in post-order and generators in the fixed order of
//! [`Qubits::generators`]. When several minimal decompositions exist, the
//! engine always returns the first one met in this order.
//!
//! # Example
//!
//! ```
//! use cnot_optimal::algebra::{Generator, Matrix, Qubits};
//! use cnot_optimal::config::SearchConfig;
//! use cnot_optimal::engine::SearchEngine;
//!
//! let q = Qubits::try_new(3).unwrap();
//! let swap = Matrix::compose(
//!     [Generator::new(0, 1), Generator::new(1, 0), Generator::new(0, 1)],
//!     q,
//! );
//! let mut engine = SearchEngine::new(q, swap, &SearchConfig::default());
//! let solution = engine.search().unwrap();
//! assert_eq!(solution.length(), 3);
//! assert!(solution.is_consistent(q));
//! ```

pub mod solution;
pub mod window;

pub use solution::Solution;
pub use window::SlidingWindow;

use crate::algebra::{Decomposition, Generator, Matrix, Qubits};
use crate::config::SearchConfig;
use crate::error::OptimizeError;
use crate::state::{Counters, Statistics};
use crate::tree::Node;
use tracing::{debug, info};

/// Where the engine is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Init,
    Seeded,
    /// Building the level at this distance from the identity.
    Expanding(u8),
    Found,
    Exhausted,
}

/// Breadth-first search for one target matrix.
#[derive(Debug)]
pub struct SearchEngine {
    qubits: Qubits,
    target: Matrix,
    ceiling: u8,
    node_budget: Option<u64>,
    generators: Vec<Generator>,
    window: SlidingWindow,
    phase: SearchPhase,
    statistics: Statistics,
}

impl SearchEngine {
    /// Prepare a search for `target` (state Init).
    pub fn new(qubits: Qubits, target: Matrix, config: &SearchConfig) -> Self {
        Self {
            qubits,
            target,
            ceiling: config.depth_limits.ceiling(qubits),
            node_budget: config.node_budget,
            generators: qubits.generators().collect(),
            window: SlidingWindow::new(),
            phase: SearchPhase::Init,
            statistics: Statistics::new(),
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Deepest level this run may build.
    pub fn ceiling(&self) -> u8 {
        self.ceiling
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Run the search to completion.
    ///
    /// Returns the minimal decomposition, or:
    /// - `DepthCeilingExceeded` when the ceiling is passed without a match
    /// - `UnreachableTarget` when the whole group is enumerated without a match
    /// - `AllocationFailure` when a node cannot be allocated or the node budget is spent
    ///
    /// Every tree of the window is disposed before returning, whatever the outcome.
    ///
    /// # Panics
    ///
    /// Panics if called twice on the same engine.
    pub fn search(&mut self) -> Result<Solution, OptimizeError> {
        assert_eq!(self.phase, SearchPhase::Init, "search engine already ran");
        let result = self.run();
        let freed = self.window.dispose_all();
        self.statistics.add(Counters::NodesFreed, freed as u64);
        debug!(
            freed,
            peak = self.statistics.peak_nodes_in_memory(),
            "search window released"
        );
        match &result {
            Ok(_) => self.phase = SearchPhase::Found,
            Err(OptimizeError::DepthCeilingExceeded { .. }) => self.phase = SearchPhase::Exhausted,
            Err(_) => {}
        }
        result
    }

    fn run(&mut self) -> Result<Solution, OptimizeError> {
        if let Some(solution) = self.seed()? {
            return Ok(solution);
        }
        for depth in 2..=self.ceiling {
            self.phase = SearchPhase::Expanding(depth);
            info!(
                depth,
                nodes_in_memory = self.statistics.nodes_in_memory(),
                "searching circuits of optimal length {}",
                depth
            );
            if let Some(solution) = self.expand_level()? {
                info!(depth, "target found");
                return Ok(solution);
            }
            let level_size = self.window.next.len();
            if level_size == 0 {
                return Err(OptimizeError::UnreachableTarget {
                    max_length: depth - 1,
                });
            }
            info!(
                depth,
                level_size, "{} elements have optimal length {}", level_size, depth
            );
            self.statistics.record_level(level_size);
            let freed = self.window.slide();
            self.statistics.add(Counters::NodesFreed, freed as u64);
            debug!(freed, "released level {}", depth.saturating_sub(2));
        }
        Err(OptimizeError::DepthCeilingExceeded {
            qubits: self.qubits.get(),
            ceiling: self.ceiling,
            lower_bound: self.ceiling.saturating_add(1),
        })
    }

    /// Build levels 0 and 1, answering targets of length 0 or 1 directly.
    ///
    /// Afterwards level 0 is `previous` and level 1 is `current`.
    fn seed(&mut self) -> Result<Option<Solution>, OptimizeError> {
        let identity = Matrix::identity(self.qubits);
        if self.target == identity {
            return Ok(Some(Solution::new(identity, Decomposition::identity())));
        }
        if self.ceiling == 0 {
            return Ok(None);
        }
        self.admit()?;
        self.window
            .previous
            .insert(Node::new(identity, Decomposition::identity()))?;
        self.statistics.increment_counter(Counters::NodesCreated);
        self.statistics.record_level(1);

        for &generator in &self.generators {
            let matrix = identity.apply(generator, self.qubits);
            let decomposition = Decomposition::identity().extended(generator)?;
            if matrix == self.target {
                return Ok(Some(Solution::new(matrix, decomposition)));
            }
            self.admit()?;
            self.window.current.insert(Node::new(matrix, decomposition))?;
            self.statistics.increment_counter(Counters::NodesCreated);
        }
        self.statistics.record_level(self.window.current.len());
        self.phase = SearchPhase::Seeded;
        debug!(
            generators = self.generators.len(),
            "seeded levels 0 and 1"
        );
        Ok(None)
    }

    /// Expand `current` into `next`, stopping at the first match.
    fn expand_level(&mut self) -> Result<Option<Solution>, OptimizeError> {
        let Self {
            qubits,
            target,
            node_budget,
            generators,
            window,
            statistics,
            ..
        } = self;

        for id in window.current.post_order() {
            let node = &window.current[id];
            for &generator in generators.iter() {
                let candidate = node.matrix().apply(generator, *qubits);
                statistics.increment_counter(Counters::CandidatesExamined);
                if candidate == *target {
                    let decomposition = node.decomposition().extended(generator)?;
                    return Ok(Some(Solution::new(candidate, decomposition)));
                }
                if window.contains(candidate) {
                    statistics.increment_counter(Counters::DuplicatesSkipped);
                    continue;
                }
                check_budget(statistics, *node_budget)?;
                let decomposition = node.decomposition().extended(generator)?;
                window.next.insert(Node::new(candidate, decomposition))?;
                statistics.increment_counter(Counters::NodesCreated);
            }
        }
        Ok(None)
    }

    fn admit(&self) -> Result<(), OptimizeError> {
        check_budget(&self.statistics, self.node_budget)
    }
}

fn check_budget(statistics: &Statistics, node_budget: Option<u64>) -> Result<(), OptimizeError> {
    match node_budget {
        Some(budget) if statistics.nodes_in_memory() >= budget => Err(OptimizeError::allocation(
            format!("a tree node: the budget of {} nodes is spent", budget),
        )),
        _ => Ok(()),
    }
}
