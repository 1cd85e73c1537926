//! Shared value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color of a red-black tree node.
///
/// Absent children (null leaves) count as BLACK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    /// Red node. Newly inserted nodes start red.
    Red,
    /// Black node. The root is always black once an insertion cycle completes.
    Black,
}

impl Color {
    /// True for [`Color::Red`].
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    /// True for [`Color::Black`].
    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}
