// Copyright 2026 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The region quadtree: arena storage, insertion, retrieval, diagnostics.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::Config;
use crate::error::{ConfigError, MalformedRect};
use crate::types::{Aabb, Quadrant, Scalar};

const ROOT: usize = 0;

/// One stored rectangle plus its opaque payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Item<T, P> {
    /// The item's bounding rectangle.
    pub aabb: Aabb<T>,
    /// Caller-owned identifier (typically an index into the caller's entity
    /// collection). The tree stores and returns it, never interprets it.
    pub payload: P,
}

#[derive(Clone, Debug)]
struct Node<T, P> {
    bounds: Aabb<T>,
    depth: u16,
    items: Vec<Item<T, P>>,
    // Slot of the top-left child; the other three follow consecutively in
    // quadrant order. `None` marks a leaf.
    first_child: Option<u32>,
}

impl<T: Scalar, P: Copy + Debug> Node<T, P> {
    fn leaf(bounds: Aabb<T>, depth: u16) -> Self {
        Self {
            bounds,
            depth,
            items: Vec::new(),
            first_child: None,
        }
    }
}

/// Region quadtree over a bounded 2D world.
///
/// Each node either holds items directly (a leaf) or has exactly four
/// children partitioning its bounds into equal quadrants. An item that
/// straddles a quadrant boundary stays at the deepest node that fully
/// contains it.
///
/// The tree is rebuilt from scratch every simulation tick:
/// [`clear`](Self::clear), then [`insert`](Self::insert) each live item,
/// then any number of [`retrieve`](Self::retrieve) calls. There is no
/// incremental update path; the full rebuild avoids stale-node bookkeeping
/// at an O(n log n)-ish cost per tick.
pub struct QuadTree<T: Scalar, P: Copy + Debug> {
    // Arena of nodes; the root lives at slot 0 and children are allocated
    // as blocks of four. `clear` truncates back to the root.
    nodes: Vec<Node<T, P>>,
    max_depth: u16,
    max_objects: usize,
    len: usize,
}

impl<T: Scalar, P: Copy + Debug> Debug for QuadTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.nodes[ROOT].bounds)
            .field("nodes", &self.nodes.len())
            .field("items", &self.len)
            .field("max_depth", &self.max_depth)
            .field("max_objects", &self.max_objects)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, P: Copy + Debug> QuadTree<T, P> {
    /// Create an empty tree whose root covers `(0, 0)..(width, height)`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `width` or `height` is not strictly
    /// positive (or NaN), or if `max_objects` is zero.
    pub fn new(config: Config<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = Aabb::from_xywh(T::zero(), T::zero(), config.width, config.height);
        let mut nodes = Vec::with_capacity(1);
        nodes.push(Node::leaf(bounds, 0));
        Ok(Self {
            nodes,
            max_depth: config.max_depth,
            max_objects: config.max_objects,
            len: 0,
        })
    }

    /// The world rect covered by the root.
    pub fn bounds(&self) -> Aabb<T> {
        self.nodes[ROOT].bounds
    }

    /// Maximum node depth configured at construction.
    pub fn max_depth(&self) -> u16 {
        self.max_depth
    }

    /// Leaf capacity configured at construction.
    pub fn max_objects(&self) -> usize {
        self.max_objects
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no items are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total node count (1 for an unsubdivided tree).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Discard every item and all subdivisions, reverting to the
    /// just-constructed state. Idempotent; called once per tick before the
    /// rebuild.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[ROOT];
        root.items.clear();
        root.first_child = None;
        self.len = 0;
    }

    /// Insert one rectangle with its payload.
    ///
    /// Descends from the root into the single child whose bounds fully
    /// contain the rect; a rect straddling a quadrant boundary stays at the
    /// deepest node it fits in. When the append pushes a leaf past
    /// `max_objects` below `max_depth`, the leaf subdivides into four
    /// quadrant children and redistributes its items once by the same
    /// containment test.
    ///
    /// The rect is not required to lie inside the world bounds; one that
    /// does not fit any child simply stays at the root.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRect`] for inverted or NaN extents. The tree is
    /// unchanged in that case.
    pub fn insert(&mut self, aabb: Aabb<T>, payload: P) -> Result<(), MalformedRect> {
        if aabb.is_malformed() {
            return Err(MalformedRect);
        }
        let mut idx = ROOT;
        while let Some(child) = self.child_containing(idx, &aabb) {
            idx = child;
        }
        self.nodes[idx].items.push(Item { aabb, payload });
        self.len += 1;
        if self.nodes[idx].first_child.is_none()
            && self.nodes[idx].items.len() > self.max_objects
            && self.nodes[idx].depth < self.max_depth
        {
            self.subdivide(idx);
        }
        Ok(())
    }

    /// Candidate items for the query rectangle.
    ///
    /// The result is a superset of every stored item whose rect truly
    /// intersects `query`: items held at nodes on the descent path are
    /// always reported (their exact location is ambiguous at node
    /// granularity), so false positives are expected and the caller
    /// performs the precise overlap test. No false negatives occur.
    ///
    /// A malformed query yields no candidates.
    pub fn retrieve<'a>(&'a self, query: &Aabb<T>) -> Vec<&'a Item<T, P>> {
        let mut out = Vec::new();
        self.retrieve_into(query, &mut out);
        out
    }

    /// [`retrieve`](Self::retrieve) into a caller-owned buffer, reusing its
    /// allocation across the queries of one build cycle. The buffer is
    /// cleared first.
    pub fn retrieve_into<'a>(&'a self, query: &Aabb<T>, out: &mut Vec<&'a Item<T, P>>) {
        out.clear();
        if query.is_malformed() {
            return;
        }
        self.collect(ROOT, query, out);
    }

    /// Every stored item, walked over the whole tree.
    pub fn iter(&self) -> impl Iterator<Item = &Item<T, P>> {
        self.nodes.iter().flat_map(|n| n.items.iter())
    }

    /// Read-only cursor at the root, for diagnostic traversal of node
    /// boundaries. The cursor cannot mutate the tree.
    pub fn root(&self) -> NodeRef<'_, T, P> {
        NodeRef {
            tree: self,
            idx: ROOT,
        }
    }

    // Child of `idx` whose bounds fully contain `aabb`, if any. `None` for
    // leaves and for straddlers.
    fn child_containing(&self, idx: usize, aabb: &Aabb<T>) -> Option<usize> {
        let first = self.nodes[idx].first_child? as usize;
        (first..first + 4).find(|&c| self.nodes[c].bounds.contains(aabb))
    }

    // Leaf -> internal: allocate the four quadrant children one level down
    // and move every item that fully fits a child into it. Straddlers stay
    // here. Redistribution is one-shot: a child filled past capacity by it
    // subdivides on the next insert that lands there, not now.
    fn subdivide(&mut self, idx: usize) {
        debug_assert!(
            self.nodes[idx].first_child.is_none(),
            "only leaves subdivide"
        );
        let bounds = self.nodes[idx].bounds;
        let depth = self.nodes[idx].depth + 1;
        let first = self.nodes.len();
        for q in Quadrant::ALL {
            self.nodes.push(Node::leaf(bounds.quadrant(q), depth));
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "node slots are 32-bit by design"
        )]
        {
            self.nodes[idx].first_child = Some(first as u32);
        }
        let items = core::mem::take(&mut self.nodes[idx].items);
        for item in items {
            match (first..first + 4).find(|&c| self.nodes[c].bounds.contains(&item.aabb)) {
                Some(c) => self.nodes[c].items.push(item),
                None => self.nodes[idx].items.push(item),
            }
        }
    }

    // Items at a visited node are always candidates; children are descended
    // only when their bounds intersect the query. The skipped subtrees are
    // the entire performance benefit of the structure.
    fn collect<'a>(&'a self, idx: usize, query: &Aabb<T>, out: &mut Vec<&'a Item<T, P>>) {
        let node = &self.nodes[idx];
        out.extend(node.items.iter());
        if let Some(first) = node.first_child {
            for c in first as usize..first as usize + 4 {
                if self.nodes[c].bounds.intersects(query) {
                    self.collect(c, query, out);
                }
            }
        }
    }
}

/// Read-only cursor over one node, for diagnostic traversal (for example
/// drawing node boundaries). Walk the root, then each of the four children
/// in fixed quadrant order.
#[derive(Copy, Clone, Debug)]
pub struct NodeRef<'a, T: Scalar, P: Copy + Debug> {
    tree: &'a QuadTree<T, P>,
    idx: usize,
}

impl<'a, T: Scalar, P: Copy + Debug> NodeRef<'a, T, P> {
    /// This node's region. Fixed at creation, never mutated.
    pub fn bounds(&self) -> Aabb<T> {
        self.tree.nodes[self.idx].bounds
    }

    /// Distance from the root (the root is 0).
    pub fn depth(&self) -> u16 {
        self.tree.nodes[self.idx].depth
    }

    /// Items stored directly at this node.
    pub fn items(&self) -> &'a [Item<T, P>] {
        &self.tree.nodes[self.idx].items
    }

    /// True for a node without children.
    pub fn is_leaf(&self) -> bool {
        self.tree.nodes[self.idx].first_child.is_none()
    }

    /// The four children in fixed quadrant order, or `None` for a leaf.
    pub fn children(&self) -> Option<[Self; 4]> {
        let first = self.tree.nodes[self.idx].first_child? as usize;
        Some([0_usize, 1, 2, 3].map(|q| Self {
            tree: self.tree,
            idx: first + q,
        }))
    }
}
