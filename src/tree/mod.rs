// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Height-balanced search tree of discovered group elements.
//!
//! An [`AvlTree`] is both the membership index of one breadth-first level and
//! the store of each element's decomposition. Nodes live in an arena owned by
//! the tree and are linked by [`NodeId`] indices: left and right children plus
//! a parent back-link. The back-link serves two purposes:
//!
//! 1. Rebalancing walks upward from a new leaf without a path stack.
//! 2. Traversal and disposal (see [`traversal`]) need no recursion and no stack.
//!
//! # Insertion
//!
//! A new leaf is placed by BST descent. Cached heights are then updated walking
//! up the parent links, stopping as soon as a height does not change. At the
//! first ancestor whose subtrees differ in height by two, one single or double
//! rotation restores the AVL invariant for the whole ancestor chain, and the
//! walk stops.
//!
//! # Memory
//!
//! The arena grows with `try_reserve`, so exhaustion is reported as
//! `OptimizeError::AllocationFailure` and the caller can dispose its trees
//! cleanly.

pub mod node;
mod rotation;
pub mod traversal;

pub use node::{Node, NodeId};
pub use traversal::{PostOrder, Visit, Walk};

use crate::algebra::Matrix;
use crate::error::OptimizeError;
use std::cmp::Ordering;
use std::ops::Index;

/// An arena-backed AVL tree keyed by [`Matrix`].
#[derive(Debug, Default)]
pub struct AvlTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Height of the whole tree, None when empty.
    pub fn height(&self) -> Option<u8> {
        self.root.map(|root| self[root].height)
    }

    /// Check whether `matrix` is stored in this tree.
    pub fn contains(&self, matrix: Matrix) -> bool {
        self.find(matrix).is_some()
    }

    /// Look up the node storing `matrix`.
    pub fn get(&self, matrix: Matrix) -> Option<&Node> {
        self.find(matrix).map(|id| &self[id])
    }

    fn find(&self, matrix: Matrix) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self[id];
            current = match matrix.cmp(&node.matrix()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Insert a node and rebalance.
    ///
    /// The caller guarantees the key is not already present (the search
    /// engine checks `contains` on every live tree first).
    pub fn insert(&mut self, mut node: Node) -> Result<NodeId, OptimizeError> {
        if self.nodes.len() >= u32::MAX as usize {
            return Err(OptimizeError::allocation("a tree node: arena index space exhausted"));
        }
        self.nodes
            .try_reserve(1)
            .map_err(|_| OptimizeError::allocation("a tree node"))?;

        node.detach();
        let key = node.matrix();
        let id = NodeId::from_index(self.nodes.len());

        let Some(mut current) = self.root else {
            self.nodes.push(node);
            self.root = Some(id);
            return Ok(id);
        };
        loop {
            let parent = &self[current];
            debug_assert_ne!(key, parent.matrix(), "duplicate key inserted");
            let next = if key < parent.matrix() {
                parent.left
            } else {
                parent.right
            };
            match next {
                Some(child) => current = child,
                None => break,
            }
        }

        node.parent = Some(current);
        self.nodes.push(node);
        if key < self[current].matrix() {
            self.node_mut(current).left = Some(id);
        } else {
            self.node_mut(current).right = Some(id);
        }
        self.rebalance_from(current);
        Ok(id)
    }

    /// Update heights from `start` upwards, rotating at the first unbalanced node.
    fn rebalance_from(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let height = self.computed_height(id);
            if height == self[id].height {
                break;
            }
            self.node_mut(id).height = height;
            if self.balance_gap(id) >= 2 {
                self.rotate(id);
                break;
            }
            current = self[id].parent;
        }
    }

    /// Height of an optional subtree, -1 when absent.
    fn subtree_height(&self, child: Option<NodeId>) -> i16 {
        child.map_or(-1, |id| self[id].height as i16)
    }

    fn computed_height(&self, id: NodeId) -> u8 {
        let node = &self[id];
        let tallest = self
            .subtree_height(node.left)
            .max(self.subtree_height(node.right));
        (tallest + 1) as u8
    }

    fn balance_gap(&self, id: NodeId) -> i16 {
        let node = &self[id];
        (self.subtree_height(node.left) - self.subtree_height(node.right)).abs()
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Structural self-check: parent links, key order, cached heights and
    /// balance. Returns the number of reachable nodes.
    pub fn verify(&self) -> Result<usize, String> {
        let Some(root) = self.root else {
            return if self.nodes.is_empty() {
                Ok(0)
            } else {
                Err(format!("{} nodes but no root", self.nodes.len()))
            };
        };
        if self[root].parent.is_some() {
            return Err("root has a parent".to_string());
        }
        let mut reached = 0;
        let mut previous: Option<Matrix> = None;
        for (id, visit) in self.walk() {
            let node = &self[id];
            match visit {
                Visit::Pre => {
                    reached += 1;
                    for child in [node.left, node.right].into_iter().flatten() {
                        if self[child].parent != Some(id) {
                            return Err(format!("bad parent link below node {}", id.index()));
                        }
                    }
                }
                Visit::In => {
                    if previous.is_some_and(|p| p >= node.matrix()) {
                        return Err(format!("keys out of order at node {}", id.index()));
                    }
                    previous = Some(node.matrix());
                }
                Visit::Post => {
                    if node.height != self.computed_height(id) {
                        return Err(format!("stale height at node {}", id.index()));
                    }
                    if self.balance_gap(id) > 1 {
                        return Err(format!("unbalanced node {}", id.index()));
                    }
                }
            }
        }
        if reached != self.nodes.len() {
            return Err(format!("{} of {} nodes reachable", reached, self.nodes.len()));
        }
        Ok(reached)
    }
}

impl Index<NodeId> for AvlTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
