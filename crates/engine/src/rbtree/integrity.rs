//! Red-black invariant checks.

use serde::{Deserialize, Serialize};

use super::{NodeId, RedBlackTree};

/// Result of a full invariant sweep. An empty tree is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvariantReport {
    /// Root is BLACK (or the tree is empty).
    pub root_black: bool,
    /// No RED node has a RED child.
    pub no_double_red: bool,
    /// Every root-to-leaf path crosses the same number of BLACK nodes.
    pub uniform_black_height: bool,
    /// In-order traversal is strictly increasing.
    pub ordered: bool,
    /// Every child's parent link points back at its parent.
    pub links_consistent: bool,
    /// First double-red found, if any.
    pub double_red_at: Option<NodeId>,
}

impl InvariantReport {
    /// All invariants hold.
    pub fn is_valid(&self) -> bool {
        self.root_black
            && self.no_double_red
            && self.uniform_black_height
            && self.ordered
            && self.links_consistent
    }
}

impl RedBlackTree {
    /// Check every red-black invariant.
    pub fn check_invariants(&self) -> InvariantReport {
        let double_red_at = self.find_double_red();
        let keys = self.keys_in_order();
        let report = InvariantReport {
            root_black: self.color_of(self.root()).is_black(),
            no_double_red: double_red_at.is_none(),
            uniform_black_height: self.uniform_black_height(self.root()).is_some(),
            ordered: keys.windows(2).all(|w| w[0] < w[1]),
            links_consistent: self.links_consistent(),
            double_red_at,
        };
        if !report.is_valid() {
            tracing::trace!(?report, "invariant check failed");
        }
        report
    }

    /// A RED node whose parent is also RED, searched top-down.
    pub fn find_double_red(&self) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.at(id);
            if node.color.is_red() && self.color_of(node.parent).is_red() {
                return Some(id);
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
        None
    }

    /// Black height of the subtree at `id`, counting absent leaves as zero,
    /// or `None` when two paths disagree.
    fn uniform_black_height(&self, id: Option<NodeId>) -> Option<usize> {
        let Some(id) = id else {
            return Some(0);
        };
        let node = self.at(id);
        let left = self.uniform_black_height(node.left)?;
        let right = self.uniform_black_height(node.right)?;
        if left != right {
            return None;
        }
        Some(left + usize::from(node.color.is_black()))
    }

    fn links_consistent(&self) -> bool {
        if let Some(root) = self.root() {
            if self.at(root).parent.is_some() {
                return false;
            }
        }
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();
        let mut seen = 0;
        while let Some(id) = stack.pop() {
            seen += 1;
            let node = self.at(id);
            for child in [node.left, node.right].into_iter().flatten() {
                if self.at(child).parent != Some(id) {
                    return false;
                }
                stack.push(child);
            }
        }
        seen == self.len()
    }
}
