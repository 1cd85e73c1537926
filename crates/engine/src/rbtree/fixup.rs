//! Double-red repair, one corrective step at a time.
//!
//! A RED node with a RED parent is resolved by one of two orders:
//! - Recolor, when the uncle is RED. Parent and uncle turn BLACK and the
//!   grandparent turns RED, which may push the violation two levels up.
//! - Realign, when the uncle is BLACK or absent. One or two rotations
//!   depending on the [`Shape`], then the node left on top turns BLACK and
//!   the old grandparent turns RED.
//!
//! The raw operations [`RedBlackTree::recolor`] and [`RedBlackTree::realign`]
//! do exactly that and nothing more. The checked variants first ask
//! [`RedBlackTree::diagnose`] and refuse an order that does not fit,
//! reporting why instead of mutating.

use serde::{Deserialize, Serialize};

use arena_core::{ArenaError, ArenaResult, Color};

use super::{NodeId, RedBlackTree};

/// Orientation of node, parent and grandparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Parent is a left child, node is a left child.
    LeftLeft,
    /// Parent is a left child, node is a right child.
    LeftRight,
    /// Parent is a right child, node is a left child.
    RightLeft,
    /// Parent is a right child, node is a right child.
    RightRight,
}

impl Shape {
    /// Line shapes need one rotation; triangles need two.
    pub fn is_line(self) -> bool {
        matches!(self, Shape::LeftLeft | Shape::RightRight)
    }
}

/// Which order repairs the violation at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "shape", rename_all = "snake_case")]
pub enum Diagnosis {
    /// No double-red at this node.
    Stable,
    /// The uncle is RED.
    Recolor,
    /// The uncle is BLACK or absent.
    Realign(Shape),
}

/// Outcome of a checked corrective order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    /// True when the order fit the violation and was applied.
    pub accepted: bool,
    /// Why the order was refused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Node still violating after this step. On refusal this is the node the
    /// order was aimed at; `None` means the insertion cycle is complete.
    pub next_violation: Option<NodeId>,
}

impl Correction {
    fn accepted(next_violation: Option<NodeId>) -> Self {
        Self {
            accepted: true,
            reason: None,
            next_violation,
        }
    }

    fn refused(node: Option<NodeId>, reason: impl Into<String>) -> Self {
        Self {
            accepted: false,
            reason: Some(reason.into()),
            next_violation: node,
        }
    }
}

impl RedBlackTree {
    // =========================================================================
    // Diagnosis
    // =========================================================================

    /// Decide which order repairs the violation at `node`.
    ///
    /// A RED parent without a grandparent is a RED root; completing the cycle
    /// repaints it, so it reports as `Stable`.
    pub fn diagnose(&self, node: NodeId) -> ArenaResult<Diagnosis> {
        if self.node(node)?.color.is_black() {
            return Ok(Diagnosis::Stable);
        }
        let Some(parent) = self.parent(node) else {
            return Ok(Diagnosis::Stable);
        };
        if self.at(parent).color.is_black() {
            return Ok(Diagnosis::Stable);
        }
        if self.parent(parent).is_none() {
            return Ok(Diagnosis::Stable);
        }

        if self.color_of(self.uncle(node)).is_red() {
            return Ok(Diagnosis::Recolor);
        }

        let shape = match (self.is_left_child(parent), self.is_left_child(node)) {
            (true, true) => Shape::LeftLeft,
            (true, false) => Shape::LeftRight,
            (false, true) => Shape::RightLeft,
            (false, false) => Shape::RightRight,
        };
        Ok(Diagnosis::Realign(shape))
    }

    // =========================================================================
    // Raw orders
    // =========================================================================

    /// Parent and uncle to BLACK, grandparent to RED.
    ///
    /// A grandparent that is the root is forced back to BLACK. Returns the
    /// grandparent when its own parent is RED, i.e. when the violation moved up.
    /// Does not check that the uncle was RED.
    pub fn recolor(&mut self, node: NodeId) -> ArenaResult<Option<NodeId>> {
        let (parent, grandparent) = self.lineage(node)?;
        let uncle = self.uncle(node);

        self.set_color(parent, Color::Black);
        if let Some(uncle) = uncle {
            self.set_color(uncle, Color::Black);
        }
        self.set_color(grandparent, Color::Red);

        match self.parent(grandparent) {
            None => {
                self.set_color(grandparent, Color::Black);
                Ok(None)
            }
            Some(above) if self.at(above).color.is_red() => Ok(Some(grandparent)),
            Some(_) => Ok(None),
        }
    }

    /// Rotate the node, parent and grandparent into a balanced triple.
    ///
    /// Line shapes rotate the grandparent once; triangle shapes rotate the
    /// parent first, then the grandparent. The new top of the triple turns
    /// BLACK and the old grandparent turns RED. Does not check the uncle.
    pub fn realign(&mut self, node: NodeId) -> ArenaResult<Shape> {
        let (parent, grandparent) = self.lineage(node)?;
        let shape = match (self.is_left_child(parent), self.is_left_child(node)) {
            (true, true) => Shape::LeftLeft,
            (true, false) => Shape::LeftRight,
            (false, true) => Shape::RightLeft,
            (false, false) => Shape::RightRight,
        };

        let top = match shape {
            Shape::LeftLeft => {
                self.rotate_right(grandparent)?;
                parent
            }
            Shape::RightRight => {
                self.rotate_left(grandparent)?;
                parent
            }
            Shape::LeftRight => {
                self.rotate_left(parent)?;
                self.rotate_right(grandparent)?;
                node
            }
            Shape::RightLeft => {
                self.rotate_right(parent)?;
                self.rotate_left(grandparent)?;
                node
            }
        };

        self.set_color(top, Color::Black);
        self.set_color(grandparent, Color::Red);
        Ok(shape)
    }

    fn lineage(&self, node: NodeId) -> ArenaResult<(NodeId, NodeId)> {
        self.node(node)?;
        let parent = self
            .parent(node)
            .ok_or_else(|| ArenaError::invalid_input(format!("Node {} has no parent", node)))?;
        let grandparent = self.parent(parent).ok_or_else(|| {
            ArenaError::invalid_input(format!("Node {} has no grandparent", node))
        })?;
        Ok((parent, grandparent))
    }

    // =========================================================================
    // Checked orders
    // =========================================================================

    /// Recolor at `node` if its uncle is RED; otherwise refuse.
    ///
    /// When the violation is resolved the root is forced BLACK.
    pub fn apply_recolor(&mut self, node: NodeId) -> ArenaResult<Correction> {
        match self.diagnose(node)? {
            Diagnosis::Recolor => {
                let next = self.recolor(node)?;
                if next.is_none() {
                    self.finish_cycle();
                }
                tracing::debug!(node = %node, cascaded = next.is_some(), "recolor applied");
                Ok(Correction::accepted(next))
            }
            Diagnosis::Realign(_) => {
                tracing::debug!(node = %node, "recolor refused, uncle is black");
                Ok(Correction::refused(
                    Some(node),
                    "The uncle is black. Recoloring would break the black height; realign instead.",
                ))
            }
            Diagnosis::Stable => Ok(Correction::refused(
                None,
                "There is no double-red violation here.",
            )),
        }
    }

    /// Realign at `node` if its uncle is BLACK or absent; otherwise refuse.
    ///
    /// A realign always ends the cycle, so the root is forced BLACK.
    pub fn apply_realign(&mut self, node: NodeId) -> ArenaResult<Correction> {
        match self.diagnose(node)? {
            Diagnosis::Realign(_) => {
                let shape = self.realign(node)?;
                self.finish_cycle();
                tracing::debug!(node = %node, ?shape, "realign applied");
                Ok(Correction::accepted(None))
            }
            Diagnosis::Recolor => {
                tracing::debug!(node = %node, "realign refused, uncle is red");
                Ok(Correction::refused(
                    Some(node),
                    "The uncle is red. Rotating here leaves a double red; recolor instead.",
                ))
            }
            Diagnosis::Stable => Ok(Correction::refused(
                None,
                "There is no double-red violation here.",
            )),
        }
    }

    /// Drive the fixup from `node` to completion. Returns the number of
    /// orders applied.
    pub fn settle(&mut self, node: NodeId) -> ArenaResult<usize> {
        let mut current = node;
        let mut steps = 0;
        loop {
            match self.diagnose(current)? {
                Diagnosis::Stable => break,
                Diagnosis::Recolor => {
                    steps += 1;
                    match self.recolor(current)? {
                        Some(up) => current = up,
                        None => break,
                    }
                }
                Diagnosis::Realign(_) => {
                    steps += 1;
                    self.realign(current)?;
                    break;
                }
            }
        }
        self.finish_cycle();
        Ok(steps)
    }

    /// Force the root BLACK. Ends every insertion cycle.
    pub fn finish_cycle(&mut self) {
        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}
