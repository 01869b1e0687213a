// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tree nodes and their arena handles.

use crate::algebra::{Decomposition, Matrix};
use std::mem;

/// Index of a node inside its tree's arena.
///
/// Handles are only meaningful for the tree that issued them and are
/// invalidated when that tree is disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One discovered group element.
///
/// Children are owned by the tree arena; `parent` is a navigational back-link
/// used by rotations and by the stack-free traversal.
#[derive(Debug)]
pub struct Node {
    matrix: Matrix,
    decomposition: Decomposition,
    pub(super) height: u8,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
    pub(super) parent: Option<NodeId>,
}

impl Node {
    /// A detached leaf holding `matrix` and its decomposition.
    pub fn new(matrix: Matrix, decomposition: Decomposition) -> Self {
        Self {
            matrix,
            decomposition,
            height: 0,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// The search key.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    /// Distance of this element from the identity.
    pub fn length(&self) -> usize {
        self.decomposition.len()
    }

    /// Height of the subtree rooted here (0 for a leaf).
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Drop the decomposition buffer, keeping the links intact.
    pub(super) fn release(&mut self) -> Decomposition {
        mem::take(&mut self.decomposition)
    }

    /// Clear links so the node can be attached to a tree.
    pub(super) fn detach(&mut self) {
        self.height = 0;
        self.left = None;
        self.right = None;
        self.parent = None;
    }
}
