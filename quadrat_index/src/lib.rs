// Copyright 2026 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrat Index: a rebuild-per-tick region quadtree for 2D AABB broad-phase.
//!
//! The tree accelerates proximity queries among many moving axis-aligned
//! boxes, replacing the naive all-pairs comparison. It is generic over the
//! scalar type `T` (`f32`, `f64`, `i64`) and carries an opaque payload per
//! item that it stores and returns but never interprets.
//!
//! The intended lifecycle, driven once per simulation tick by the caller
//! that owns entity state:
//!
//! 1. [`QuadTree::clear`] — drop all items and all subdivisions,
//! 2. [`QuadTree::insert`] — once per live item, after its position update,
//! 3. [`QuadTree::retrieve`] — once per item, yielding collision candidates.
//!
//! Retrieval returns a *candidate set*: a superset of the items whose rects
//! truly intersect the query, with no false negatives. Items stored at a
//! node crossed by the query path are always reported, so the caller
//! performs the exact intersection test on the result (and drops the
//! queried item itself if it was inserted).
//!
//! Rebuilding from scratch each tick is deliberate, not an accident to
//! optimize away: it removes all stale-node bookkeeping at an
//! O(n log n)-ish rebuild cost per tick. There is no incremental update
//! path.
//!
//! # Example
//!
//! ```rust
//! use quadrat_index::{Aabb, Config, QuadTree};
//!
//! let mut tree: QuadTree<f64, usize> = QuadTree::new(Config {
//!     width: 500.0,
//!     height: 500.0,
//!     max_depth: 5,
//!     max_objects: 3,
//! })?;
//!
//! // One tick: rebuild, then query.
//! tree.clear();
//! tree.insert(Aabb::from_xywh(0.0, 0.0, 10.0, 10.0), 0)?;
//! tree.insert(Aabb::from_xywh(30.0, 30.0, 10.0, 10.0), 1)?;
//! tree.insert(Aabb::from_xywh(400.0, 400.0, 10.0, 10.0), 2)?;
//!
//! // Candidates for a window, exact-filtered by the caller.
//! let query = Aabb::from_xywh(0.0, 0.0, 40.0, 40.0);
//! let hits: Vec<usize> = tree
//!     .retrieve(&query)
//!     .iter()
//!     .filter(|item| item.aabb.intersects(&query))
//!     .map(|item| item.payload)
//!     .collect();
//! assert_eq!(hits, [0, 1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Node boundaries can be inspected without touching the tree, root first
//! and then the four children in fixed quadrant order:
//!
//! ```rust
//! use quadrat_index::{Aabb, Config, NodeRef, QuadTree};
//!
//! fn walk(node: NodeRef<'_, f64, u32>, out: &mut Vec<Aabb<f64>>) {
//!     out.push(node.bounds());
//!     if let Some(children) = node.children() {
//!         for child in children {
//!             walk(child, out);
//!         }
//!     }
//! }
//!
//! let tree: QuadTree<f64, u32> = QuadTree::new(Config {
//!     width: 100.0,
//!     height: 100.0,
//!     max_depth: 3,
//!     max_objects: 4,
//! })?;
//! let mut boundaries = Vec::new();
//! walk(tree.root(), &mut boundaries);
//! assert_eq!(boundaries, [tree.bounds()]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` on [`Config`] and [`Aabb`], so
//!   drivers can load tree settings from configuration files.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous by design: one caller builds and queries
//! the tree within one tick. Independent trees share nothing and may be
//! used freely from different threads.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod tree;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, MalformedRect};
pub use tree::{Item, NodeRef, QuadTree};
pub use types::{Aabb, Quadrant, Scalar};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    // The reference scenario: a 500x500 world, depth 5, capacity 3.
    fn reference_tree() -> QuadTree<f64, usize> {
        QuadTree::new(Config {
            width: 500.0,
            height: 500.0,
            max_depth: 5,
            max_objects: 3,
        })
        .unwrap()
    }

    #[test]
    fn four_clustered_items_split_the_root_once() {
        let mut tree = reference_tree();
        for (i, (x, y)) in [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]
            .into_iter()
            .enumerate()
        {
            tree.insert(Aabb::from_xywh(x, y, 10.0, 10.0), i).unwrap();
        }
        assert_eq!(tree.node_count(), 5);
        let hits = tree.retrieve(&Aabb::from_xywh(0.0, 0.0, 10.0, 10.0));
        let mut payloads: Vec<usize> = hits.iter().map(|it| it.payload).collect();
        payloads.sort_unstable();
        assert_eq!(payloads, [0, 1, 2, 3]);
    }

    #[test]
    fn region_spanning_item_is_a_candidate_everywhere() {
        let mut tree = reference_tree();
        for i in 0..4 {
            tree.insert(Aabb::from_xywh(i as f64, i as f64, 10.0, 10.0), i)
                .unwrap();
        }
        tree.insert(Aabb::from_xywh(0.0, 0.0, 500.0, 500.0), 4)
            .unwrap();
        for (x, y) in [(0.0, 0.0), (490.0, 0.0), (0.0, 490.0), (245.0, 245.0)] {
            let hits = tree.retrieve(&Aabb::from_xywh(x, y, 10.0, 10.0));
            assert!(hits.iter().any(|it| it.payload == 4));
        }
    }
}
