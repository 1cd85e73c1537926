//! Left and right rotations.

use arena_core::ArenaResult;

use super::{NodeId, RedBlackTree};

impl RedBlackTree {
    /// Rotate left around `pivot`: its right child takes its place.
    ///
    /// Returns `Ok(false)` without touching the tree when `pivot` has no
    /// right child.
    pub fn rotate_left(&mut self, pivot: NodeId) -> ArenaResult<bool> {
        let Some(child) = self.node(pivot)?.right else {
            return Ok(false);
        };

        let inner = self.at(child).left;
        self.at_mut(pivot).right = inner;
        if let Some(inner) = inner {
            self.at_mut(inner).parent = Some(pivot);
        }

        self.replace_in_parent(pivot, child);

        self.at_mut(child).left = Some(pivot);
        self.at_mut(pivot).parent = Some(child);
        Ok(true)
    }

    /// Rotate right around `pivot`: its left child takes its place.
    ///
    /// Returns `Ok(false)` without touching the tree when `pivot` has no
    /// left child.
    pub fn rotate_right(&mut self, pivot: NodeId) -> ArenaResult<bool> {
        let Some(child) = self.node(pivot)?.left else {
            return Ok(false);
        };

        let inner = self.at(child).right;
        self.at_mut(pivot).left = inner;
        if let Some(inner) = inner {
            self.at_mut(inner).parent = Some(pivot);
        }

        self.replace_in_parent(pivot, child);

        self.at_mut(child).right = Some(pivot);
        self.at_mut(pivot).parent = Some(child);
        Ok(true)
    }

    /// Hang `replacement` where `old` hangs, updating the root if needed.
    fn replace_in_parent(&mut self, old: NodeId, replacement: NodeId) {
        let parent = self.at(old).parent;
        self.at_mut(replacement).parent = parent;
        match parent {
            None => self.root = Some(replacement),
            Some(p) => {
                if self.at(p).left == Some(old) {
                    self.at_mut(p).left = Some(replacement);
                } else {
                    self.at_mut(p).right = Some(replacement);
                }
            }
        }
    }
}
