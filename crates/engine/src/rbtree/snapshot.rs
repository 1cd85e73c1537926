//! Flattened, render-ready view of a tree.
//!
//! Layout halves the horizontal offset at each depth: the root sits at x = 0,
//! its children at ±spread, grandchildren a further ±spread/2, and so on.
//! Rows are `level_height` apart.

use serde::{Deserialize, Serialize};

use arena_core::Color;

use super::{NodeId, RedBlackTree};

/// Layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Horizontal offset between the root and each of its children.
    pub initial_spread: f64,
    /// Vertical distance between depths.
    pub level_height: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            initial_spread: 300.0,
            level_height: 80.0,
        }
    }
}

/// Game piece a node is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// RED node.
    Sorcerer,
    /// BLACK node.
    Knight,
}

impl From<Color> for Role {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => Role::Sorcerer,
            Color::Black => Role::Knight,
        }
    }
}

/// One positioned node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    /// Node handle.
    pub id: NodeId,
    /// Key.
    pub key: i64,
    /// Color.
    pub color: Color,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Distance from the root.
    pub depth: usize,
    /// Game piece.
    pub role: Role,
}

/// One parent-to-child link with both endpoint positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeView {
    /// Parent handle.
    pub parent_id: NodeId,
    /// Child handle.
    pub child_id: NodeId,
    /// Parent x.
    pub x1: f64,
    /// Parent y.
    pub y1: f64,
    /// Child x.
    pub x2: f64,
    /// Child y.
    pub y2: f64,
}

/// Nodes in pre-order (node, left subtree, right subtree) and the edges
/// between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Positioned nodes.
    pub nodes: Vec<NodeView>,
    /// Parent-child links.
    pub edges: Vec<EdgeView>,
}

impl TreeSnapshot {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// View of the node with `key`.
    pub fn by_key(&self, key: i64) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.key == key)
    }
}

impl RedBlackTree {
    /// Snapshot with the default layout.
    pub fn snapshot(&self) -> TreeSnapshot {
        self.snapshot_with(&LayoutOptions::default())
    }

    /// Snapshot with explicit layout constants. Read-only.
    pub fn snapshot_with(&self, layout: &LayoutOptions) -> TreeSnapshot {
        let mut snap = TreeSnapshot {
            nodes: Vec::with_capacity(self.len()),
            edges: Vec::with_capacity(self.len().saturating_sub(1)),
        };
        let Some(root) = self.root() else {
            return snap;
        };

        // (node, depth, x, spread)
        let mut stack = vec![(root, 0usize, 0.0f64, layout.initial_spread)];
        while let Some((id, depth, x, spread)) = stack.pop() {
            let node = self.at(id);
            let y = depth as f64 * layout.level_height;
            snap.nodes.push(NodeView {
                id,
                key: node.key,
                color: node.color,
                x,
                y,
                depth,
                role: node.color.into(),
            });

            let child_y = (depth + 1) as f64 * layout.level_height;
            let children = [(node.left, x - spread), (node.right, x + spread)];
            let present = children
                .into_iter()
                .filter_map(|(child, child_x)| child.map(|c| (c, child_x)));
            for (child, child_x) in present.clone() {
                snap.edges.push(EdgeView {
                    parent_id: id,
                    child_id: child,
                    x1: x,
                    y1: y,
                    x2: child_x,
                    y2: child_y,
                });
            }
            // right pushed first so the left subtree is emitted first
            for (child, child_x) in present.rev() {
                stack.push((child, depth + 1, child_x, spread / 2.0));
            }
        }
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[i64]) -> RedBlackTree {
        let mut tree = RedBlackTree::new();
        for &k in keys {
            tree.insert_settled(k).unwrap();
        }
        tree
    }

    #[test]
    fn empty_tree_empty_snapshot() {
        let snap = RedBlackTree::new().snapshot();
        assert_eq!(snap.node_count(), 0);
        assert_eq!(snap.edge_count(), 0);
    }

    #[test]
    fn layout_halves_spread() {
        let tree = tree_of(&[20, 10, 30, 5]);
        let snap = tree.snapshot();

        let root = snap.by_key(20).unwrap();
        assert_eq!((root.x, root.y, root.depth), (0.0, 0.0, 0));
        let left = snap.by_key(10).unwrap();
        assert_eq!((left.x, left.y), (-300.0, 80.0));
        let right = snap.by_key(30).unwrap();
        assert_eq!((right.x, right.y), (300.0, 80.0));
        let deep = snap.by_key(5).unwrap();
        assert_eq!((deep.x, deep.y, deep.depth), (-450.0, 160.0, 2));
    }

    #[test]
    fn nodes_in_pre_order() {
        let tree = tree_of(&[20, 10, 30, 5, 15]);
        let keys: Vec<i64> = tree.snapshot().nodes.iter().map(|n| n.key).collect();
        assert_eq!(keys, vec![20, 10, 5, 15, 30]);
    }

    #[test]
    fn edges_connect_positions() {
        let tree = tree_of(&[20, 10, 30]);
        let snap = tree.snapshot();
        assert_eq!(snap.edge_count(), 2);
        for edge in &snap.edges {
            let parent = snap.nodes.iter().find(|n| n.id == edge.parent_id).unwrap();
            let child = snap.nodes.iter().find(|n| n.id == edge.child_id).unwrap();
            assert_eq!((edge.x1, edge.y1), (parent.x, parent.y));
            assert_eq!((edge.x2, edge.y2), (child.x, child.y));
        }
    }

    #[test]
    fn missing_children_are_skipped() {
        let mut tree = RedBlackTree::new();
        tree.insert(10).unwrap();
        tree.insert(20).unwrap();
        tree.insert(15).unwrap();
        let snap = tree.snapshot();

        let keys: Vec<i64> = snap.nodes.iter().map(|n| n.key).collect();
        assert_eq!(keys, vec![10, 20, 15]);
        assert_eq!(snap.edge_count(), 2);
        assert_eq!(snap.by_key(20).unwrap().x, 300.0);
        assert_eq!(snap.by_key(15).unwrap().x, 150.0);
        assert_eq!(snap.by_key(15).unwrap().depth, 2);
    }

    #[test]
    fn roles_follow_color() {
        let tree = tree_of(&[20, 10, 30]);
        let snap = tree.snapshot();
        assert_eq!(snap.by_key(20).unwrap().role, Role::Knight);
        assert_eq!(snap.by_key(10).unwrap().role, Role::Sorcerer);
    }

    #[test]
    fn snapshot_is_idempotent() {
        let tree = tree_of(&[8, 3, 12, 1, 5, 9, 14]);
        assert_eq!(tree.snapshot(), tree.snapshot());
    }

    #[test]
    fn custom_layout() {
        let tree = tree_of(&[2, 1]);
        let layout = LayoutOptions {
            initial_spread: 10.0,
            level_height: 5.0,
        };
        let snap = tree.snapshot_with(&layout);
        let one = snap.by_key(1).unwrap();
        assert_eq!((one.x, one.y), (-10.0, 5.0));
    }

    #[test]
    fn snapshot_json_shape() {
        let tree = tree_of(&[2, 1]);
        let json = serde_json::to_value(tree.snapshot()).unwrap();
        assert_eq!(json["nodes"][0]["color"], "BLACK");
        assert_eq!(json["nodes"][1]["role"], "sorcerer");
        assert!(json["edges"][0].get("parentId").is_some());
    }
}
