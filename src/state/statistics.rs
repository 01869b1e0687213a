// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the engine and incremented as nodes are created,
//! candidates examined and levels completed.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Nodes allocated into any tree, seeds included.
    NodesCreated,
    /// Nodes released by disposing a tree.
    NodesFreed,
    /// Generator applications made while expanding levels.
    CandidatesExamined,
    /// Candidates already present in the search window.
    DuplicatesSkipped,
    /// Breadth-first levels fully built, seeds included.
    LevelsCompleted,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
    level_sizes: Vec<u64>,
    peak_nodes: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
        if counter == Counters::NodesCreated {
            self.peak_nodes = self.peak_nodes.max(self.nodes_in_memory());
        }
    }

    /// Record the size of a completed level.
    pub(crate) fn record_level(&mut self, size: usize) {
        self.level_sizes.push(size as u64);
        self.increment_counter(Counters::LevelsCompleted);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Nodes currently held by the search window.
    pub fn nodes_in_memory(&self) -> u64 {
        self.get(Counters::NodesCreated) - self.get(Counters::NodesFreed)
    }

    /// Largest number of nodes held at once.
    pub fn peak_nodes_in_memory(&self) -> u64 {
        self.peak_nodes
    }

    /// Number of elements at each optimal length, for every completed level.
    pub fn level_sizes(&self) -> &[u64] {
        &self.level_sizes
    }
}
