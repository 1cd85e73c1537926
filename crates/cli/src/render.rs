//! Plain-text rendering for terminal output.

use std::fmt::Write;

use arena_core::Color;
use arena_engine::graph::levels::LevelSummary;
use arena_engine::graph::route::RouteVerdict;
use arena_engine::rbtree::{Correction, Diagnosis, InsertReport, NodeId, TreeSnapshot};
use arena_executor::{CampaignStatus, Phase};

pub fn levels(levels: &[LevelSummary]) -> String {
    let mut out = String::new();
    for l in levels {
        let _ = writeln!(
            out,
            "{:>2}  {:<16} {} -> {}  ({} nodes, {} roads, unit {})",
            l.id, l.title, l.start, l.end, l.node_count, l.edge_count, l.unit
        );
    }
    out
}

pub fn verdict(v: &RouteVerdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "your route:    {}", v.walked_cost);
    let _ = writeln!(
        out,
        "optimal route: {} via {}",
        v.optimal_cost,
        v.optimal_path.join(" -> ")
    );
    let _ = writeln!(
        out,
        "{}",
        if v.beats_optimum {
            "Optimal! You found the cheapest route."
        } else {
            "Not optimal. There is a cheaper route."
        }
    );
    out
}

pub fn status(s: &CampaignStatus) -> String {
    let mut out = String::new();
    let phase = match s.phase {
        Phase::Menu => "MENU",
        Phase::Building => "BUILDING",
        Phase::Puzzle => "PUZZLE",
        Phase::Victory => "VICTORY",
        Phase::Completed => "COMPLETED",
        Phase::SiegeLost => "SIEGE LOST",
    };
    let _ = writeln!(
        out,
        "[{}] level {}/{}  honor {}  integrity {}%  towers {}",
        phase,
        s.level,
        s.levels,
        s.score,
        s.integrity.floor(),
        s.towers
    );
    if let Some(m) = &s.mission {
        let _ = writeln!(out, "mission: {} (construct tower {})", m.name, m.key);
    }
    let _ = writeln!(out, "{}", s.message);
    out
}

/// Indented drawing of the tree, one node per line, left subtree first.
pub fn tree(snap: &TreeSnapshot, active: Option<NodeId>) -> String {
    if snap.nodes.is_empty() {
        return "(no towers)\n".to_string();
    }
    let mut out = String::new();
    for node in &snap.nodes {
        let side = snap
            .edges
            .iter()
            .find(|e| e.child_id == node.id)
            .map(|e| if e.x2 < e.x1 { "L-" } else { "R-" })
            .unwrap_or("");
        let color = match node.color {
            Color::Red => "R",
            Color::Black => "B",
        };
        let marker = if Some(node.id) == active { "  <- violation" } else { "" };
        let _ = writeln!(
            out,
            "{}{}{} [{}]{}",
            "    ".repeat(node.depth),
            side,
            node.key,
            color,
            marker
        );
    }
    out
}

pub fn insert(r: &InsertReport) -> String {
    let show = |c: Option<Color>| c.map_or_else(|| "-".to_string(), |c| c.to_string());
    format!(
        "tower {} built as {}: parent {}, grandparent {}, uncle {}{}\n",
        r.key,
        r.node,
        show(r.parent_color),
        show(r.grandparent_color),
        show(r.uncle_color),
        if r.violation { "  DOUBLE RED" } else { "" }
    )
}

pub fn correction(c: &Correction) -> String {
    match (c.accepted, &c.reason, c.next_violation) {
        (true, _, Some(next)) => format!("applied; violation moved up to {}\n", next),
        (true, _, None) => "applied; tree is stable\n".to_string(),
        (false, Some(reason), _) => format!("refused: {}\n", reason),
        (false, None, _) => "refused\n".to_string(),
    }
}

pub fn hint(d: &Diagnosis) -> String {
    match d {
        Diagnosis::Stable => "Nothing to fix.\n".to_string(),
        Diagnosis::Recolor => "The uncle is red: recolor.\n".to_string(),
        Diagnosis::Realign(shape) => format!("The uncle is black: realign ({:?}).\n", shape),
    }
}
