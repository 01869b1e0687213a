// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! AVL rotations.
//!
//! After an insertion, `Z` is the first unbalanced ancestor, `Y` its heavier
//! child and `X` the heavier child of `Y` (ties pick the right side). The
//! sides of `Y` and `X` select the rotation:
//!
//! ```text
//! Y left,  X left   right rotation around Z
//! Y right, X right  left rotation around Z
//! Y left,  X right  left rotation around Y, then right rotation around Z
//! Y right, X left   right rotation around Y, then left rotation around Z
//! ```

use super::{AvlTree, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl AvlTree {
    /// Restore balance at `z`, whose subtrees differ in height by two.
    pub(super) fn rotate(&mut self, z: NodeId) {
        let (side_y, y) = self.heavier_child(z);
        let (side_x, _) = self.heavier_child(y);
        match (side_y, side_x) {
            (Side::Left, Side::Left) => self.rotate_right(z),
            (Side::Right, Side::Right) => self.rotate_left(z),
            (Side::Left, Side::Right) => {
                self.rotate_left(y);
                self.rotate_right(z);
            }
            (Side::Right, Side::Left) => {
                self.rotate_right(y);
                self.rotate_left(z);
            }
        }
    }

    fn heavier_child(&self, id: NodeId) -> (Side, NodeId) {
        let node = &self[id];
        match (node.left, node.right) {
            (None, Some(right)) => (Side::Right, right),
            (Some(left), None) => (Side::Left, left),
            (Some(left), Some(right)) if self[left].height > self[right].height => {
                (Side::Left, left)
            }
            (_, Some(right)) => (Side::Right, right),
            (None, None) => unreachable!("rotation through a leaf"),
        }
    }

    /// Lift the left child of `z` into its place.
    fn rotate_right(&mut self, z: NodeId) {
        let y = self[z].left.expect("right rotation needs a left child");
        let inner = self[y].right;
        let parent = self[z].parent;

        self.replace_child(parent, z, y);
        self.node_mut(y).parent = parent;
        self.node_mut(y).right = Some(z);
        self.node_mut(z).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(z);
        }
        self.node_mut(z).parent = Some(y);

        self.node_mut(z).height = self.computed_height(z);
        self.node_mut(y).height = self.computed_height(y);
    }

    /// Lift the right child of `z` into its place.
    fn rotate_left(&mut self, z: NodeId) {
        let y = self[z].right.expect("left rotation needs a right child");
        let inner = self[y].left;
        let parent = self[z].parent;

        self.replace_child(parent, z, y);
        self.node_mut(y).parent = parent;
        self.node_mut(y).left = Some(z);
        self.node_mut(z).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(z);
        }
        self.node_mut(z).parent = Some(y);

        self.node_mut(z).height = self.computed_height(z);
        self.node_mut(y).height = self.computed_height(y);
    }

    /// Point `parent` (or the root) at `new` instead of `old`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => self.root = Some(new),
            Some(p) if self[p].left == Some(old) => self.node_mut(p).left = Some(new),
            Some(p) => self.node_mut(p).right = Some(new),
        }
    }
}
