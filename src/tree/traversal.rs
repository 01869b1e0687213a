// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stack-free traversal and disposal.
//!
//! Every node is met three times during a depth-first walk driven only by the
//! left, right and parent links:
//!
//! - [`Visit::Pre`]: first encounter, on the way down
//! - [`Visit::In`]: after the left subtree is complete
//! - [`Visit::Post`]: after the right subtree is complete
//!
//! Each step is O(1) and needs no auxiliary memory. The post visits give the
//! order in which the search engine expands a level (children before parents),
//! which is also the order in which [`AvlTree::dispose`] releases nodes.

use super::{AvlTree, NodeId};

/// Which of the three encounters of a node a traversal step is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visit {
    Pre,
    In,
    Post,
}

impl AvlTree {
    /// The traversal event following `(id, visit)`, or None after the root's post visit.
    pub fn next_event(&self, id: NodeId, visit: Visit) -> Option<(NodeId, Visit)> {
        let node = &self[id];
        match visit {
            Visit::Pre => Some(match node.left {
                Some(left) => (left, Visit::Pre),
                None => (id, Visit::In),
            }),
            Visit::In => Some(match node.right {
                Some(right) => (right, Visit::Pre),
                None => (id, Visit::Post),
            }),
            Visit::Post => node.parent.map(|parent| {
                if self[parent].left == Some(id) {
                    (parent, Visit::In)
                } else {
                    (parent, Visit::Post)
                }
            }),
        }
    }

    /// Step from `(id, visit)` to the next post visit.
    fn next_post(&self, mut id: NodeId, mut visit: Visit) -> Option<NodeId> {
        loop {
            (id, visit) = self.next_event(id, visit)?;
            if visit == Visit::Post {
                return Some(id);
            }
        }
    }

    /// Every traversal event; each node appears exactly three times.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            next: self.root.map(|root| (root, Visit::Pre)),
        }
    }

    /// Nodes in post-order: every node once, children before parents.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder {
            tree: self,
            next: self.root.and_then(|root| self.next_post(root, Visit::Pre)),
        }
    }

    /// Nodes in key order.
    pub fn in_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.walk()
            .filter(|&(_, visit)| visit == Visit::In)
            .map(|(id, _)| id)
    }

    /// Release every node and its decomposition, children before parents.
    ///
    /// Returns the number of nodes freed; an empty tree yields 0. The tree is
    /// empty and reusable afterwards, and all previously issued ids are stale.
    pub fn dispose(&mut self) -> usize {
        let mut freed = 0;
        let mut cursor = self.root.and_then(|root| self.next_post(root, Visit::Pre));
        while let Some(id) = cursor {
            cursor = self.next_post(id, Visit::Post);
            drop(self.node_mut(id).release());
            freed += 1;
        }
        debug_assert_eq!(freed, self.nodes.len());
        self.nodes = Vec::new();
        self.root = None;
        freed
    }
}

/// Iterator over `(node, visit)` events. See [`AvlTree::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    tree: &'a AvlTree,
    next: Option<(NodeId, Visit)>,
}

impl Iterator for Walk<'_> {
    type Item = (NodeId, Visit);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.next_event(current.0, current.1);
        Some(current)
    }
}

/// Iterator over nodes in post-order. See [`AvlTree::post_order`].
#[derive(Debug)]
pub struct PostOrder<'a> {
    tree: &'a AvlTree,
    next: Option<NodeId>,
}

impl Iterator for PostOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.next_post(current, Visit::Post);
        Some(current)
    }
}
