//! Arena Property Test Suite
//!
//! Randomized checks of both engines against independent oracles.
//!
//! ## Test Groups
//!
//! - **Shortest path**: Dijkstra against brute-force enumeration on small graphs
//! - **Red-black tree**: invariants after settled inserts, refusal of wrong orders,
//!   read-only snapshots
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test arena_properties
//! ```

mod test_utils;

mod red_black;
mod shortest_path;
