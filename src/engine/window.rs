// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Three-level sliding search window.
//!
//! While level `d` is expanded, the window holds the trees of distances
//! `d-1` (`previous`), `d` (`current`) and `d+1` (`next`, being built).
//! Every generator is its own inverse, so the Cayley graph is undirected and
//! every neighbour of a distance-`d` element lies at distance `d-1`, `d` or
//! `d+1`. Checking these three trees is therefore enough to recognise every
//! element seen before, and older levels can be released.
//!
//! This only holds for a self-inverse generating set. With generators that
//! are not involutions the window must be widened.

use crate::algebra::Matrix;
use crate::tree::AvlTree;
use std::mem;

#[derive(Debug, Default)]
pub struct SlidingWindow {
    pub previous: AvlTree,
    pub current: AvlTree,
    pub next: AvlTree,
}

impl SlidingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `matrix` is in any live level.
    pub fn contains(&self, matrix: Matrix) -> bool {
        self.previous.contains(matrix) || self.current.contains(matrix) || self.next.contains(matrix)
    }

    /// Nodes held by all three levels.
    pub fn resident(&self) -> usize {
        self.previous.len() + self.current.len() + self.next.len()
    }

    /// Release the oldest level and move every level one step back.
    ///
    /// The trees are moved, not copied. Returns the number of nodes freed.
    pub fn slide(&mut self) -> usize {
        let freed = self.previous.dispose();
        self.previous = mem::take(&mut self.current);
        self.current = mem::take(&mut self.next);
        freed
    }

    /// Release all three levels. Returns the number of nodes freed.
    pub fn dispose_all(&mut self) -> usize {
        self.previous.dispose() + self.current.dispose() + self.next.dispose()
    }
}
