//! Red-black tree with externally driven fixup.
//!
//! Insertion places a node by plain BST descent and colors it RED (BLACK for
//! the root). It never rebalances. A double-red left behind by an insertion is
//! repaired one corrective step at a time through [`RedBlackTree::apply_recolor`]
//! and [`RedBlackTree::apply_realign`], or all at once with
//! [`RedBlackTree::settle`].
//!
//! Nodes live in an append-only arena and are addressed by [`NodeId`]. Parent,
//! left and right links are arena indices, so upward traversal needs no
//! back-pointers. Node ids stay valid until [`RedBlackTree::clear`].

pub mod fixup;
pub mod integrity;
pub mod rotation;
pub mod snapshot;

use std::fmt;

use serde::{Deserialize, Serialize};

use arena_core::{ArenaError, ArenaResult, Color};

pub use fixup::{Correction, Diagnosis, Shape};
pub use integrity::InvariantReport;
pub use snapshot::{LayoutOptions, Role, TreeSnapshot};

/// Handle to a node in a [`RedBlackTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One arena slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Ordering key, unique within the tree.
    pub key: i64,
    /// Current color.
    pub color: Color,
    /// Left child.
    pub left: Option<NodeId>,
    /// Right child.
    pub right: Option<NodeId>,
    /// Parent, `None` for the root.
    pub parent: Option<NodeId>,
}

impl TreeNode {
    fn new(key: i64, color: Color, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color,
            left: None,
            right: None,
            parent,
        }
    }
}

/// What an insertion produced, with enough context for the caller to decide
/// whether a correction is needed and which one.
///
/// Absent relatives are reported as `None`; for fixup purposes an absent
/// uncle counts as BLACK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertReport {
    /// The new node.
    pub node: NodeId,
    /// Key that was inserted.
    pub key: i64,
    /// Color of the new node's parent.
    pub parent_color: Option<Color>,
    /// Color of the new node's grandparent.
    pub grandparent_color: Option<Color>,
    /// Color of the new node's uncle.
    pub uncle_color: Option<Color>,
    /// True when the new node and its parent are both RED.
    pub violation: bool,
}

/// Arena-backed red-black tree keyed by `i64`.
#[derive(Debug, Clone, Default)]
pub struct RedBlackTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl RedBlackTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every node. Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current root.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Node for a handle, or `TreeNodeNotFound`.
    pub fn node(&self, id: NodeId) -> ArenaResult<&TreeNode> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| ArenaError::tree_node_not_found(id.0))
    }

    // Unchecked accessors for ids already known to be live.

    pub(crate) fn at(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub(crate) fn at_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    /// Color of a possibly absent node. Absent nodes are BLACK.
    pub fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.at(id).color)
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.at_mut(id).color = color;
    }

    /// Parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Parent of the parent of `id`.
    pub fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).and_then(|p| self.parent(p))
    }

    /// Sibling of the parent of `id`.
    pub fn uncle(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let grandparent = self.parent(parent)?;
        let g = self.at(grandparent);
        if g.left == Some(parent) {
            g.right
        } else {
            g.left
        }
    }

    /// True when `id` is the left child of its parent.
    pub fn is_left_child(&self, id: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|p| self.at(p).left == Some(id))
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert `key` without rebalancing.
    ///
    /// The first node becomes a BLACK root. Every later node is RED and hangs
    /// from the leaf position found by descent (smaller keys go left).
    /// Duplicate keys are rejected and leave the tree untouched.
    pub fn insert(&mut self, key: i64) -> ArenaResult<InsertReport> {
        let Some(mut current) = self.root else {
            let id = self.push(TreeNode::new(key, Color::Black, None));
            self.root = Some(id);
            tracing::debug!(key, node = %id, "root planted");
            return Ok(self.report(id));
        };

        let (parent, go_left) = loop {
            let node = self.at(current);
            let next = if key < node.key {
                node.left
            } else if key > node.key {
                node.right
            } else {
                return Err(ArenaError::DuplicateKey { key });
            };
            match next {
                Some(child) => current = child,
                None => break (current, key < node.key),
            }
        };

        let id = self.push(TreeNode::new(key, Color::Red, Some(parent)));
        if go_left {
            self.at_mut(parent).left = Some(id);
        } else {
            self.at_mut(parent).right = Some(id);
        }

        let report = self.report(id);
        tracing::debug!(
            key,
            node = %id,
            violation = report.violation,
            "node inserted"
        );
        Ok(report)
    }

    /// Insert `key` and immediately run the full fixup.
    pub fn insert_settled(&mut self, key: i64) -> ArenaResult<NodeId> {
        let report = self.insert(key)?;
        self.settle(report.node)?;
        Ok(report.node)
    }

    fn push(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn report(&self, id: NodeId) -> InsertReport {
        let parent = self.parent(id);
        let node_color = self.at(id).color;
        let parent_color = parent.map(|p| self.at(p).color);
        InsertReport {
            node: id,
            key: self.at(id).key,
            parent_color,
            grandparent_color: self.grandparent(id).map(|g| self.at(g).color),
            uncle_color: self.uncle(id).map(|u| self.at(u).color),
            violation: node_color.is_red() && parent_color.is_some_and(Color::is_red),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Node holding `key`, if any.
    pub fn find(&self, key: i64) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.at(id);
            current = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
                std::cmp::Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// True when `key` is in the tree.
    pub fn contains(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Keys in ascending order.
    pub fn keys_in_order(&self) -> Vec<i64> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.at(id).left;
            }
            if let Some(id) = stack.pop() {
                keys.push(self.at(id).key);
                current = self.at(id).right;
            }
        }
        keys
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        fn walk(tree: &RedBlackTree, id: Option<NodeId>) -> usize {
            match id {
                None => 0,
                Some(id) => {
                    let n = tree.at(id);
                    1 + walk(tree, n.left).max(walk(tree, n.right))
                }
            }
        }
        walk(self, self.root)
    }

    /// BLACK nodes on the leftmost root-to-leaf path, root included.
    ///
    /// Equals the black height of every path only when the tree is valid;
    /// see [`RedBlackTree::check_invariants`].
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root;
        while let Some(id) = current {
            if self.at(id).color.is_black() {
                count += 1;
            }
            current = self.at(id).left;
        }
        count
    }
}
