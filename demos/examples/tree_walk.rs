// Copyright 2026 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic walk of node boundaries.
//!
//! Builds a small clustered tree and prints every node's rect — the root,
//! then each of the four children in fixed quadrant order. This is the
//! read-only traversal a debug overlay would draw; it never mutates the
//! tree.
//!
//! Run:
//! - `cargo run -p quadrat_demos --example tree_walk`

use quadrat_index::{Aabb, Config, NodeRef, QuadTree};

fn print_node(node: NodeRef<'_, f64, usize>) {
    let b = node.bounds();
    let indent = usize::from(node.depth()) * 2;
    println!(
        "{:indent$}[depth {}] ({}, {})..({}, {})  items: {}",
        "",
        node.depth(),
        b.min_x,
        b.min_y,
        b.max_x,
        b.max_y,
        node.items().len(),
    );
    if let Some(children) = node.children() {
        for child in children {
            print_node(child);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut tree: QuadTree<f64, usize> = QuadTree::new(Config {
        width: 500.0,
        height: 500.0,
        max_depth: 5,
        max_objects: 3,
    })?;

    // A cluster that forces subdivision, two loners, and one straddler
    // that stays at the root.
    let spots = [
        (0.0, 0.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (3.0, 3.0),
        (300.0, 80.0),
        (420.0, 430.0),
    ];
    for (i, (x, y)) in spots.into_iter().enumerate() {
        tree.insert(Aabb::from_xywh(x, y, 10.0, 10.0), i)?;
    }
    tree.insert(Aabb::from_xywh(0.0, 0.0, 500.0, 500.0), spots.len())?;

    println!("{} items across {} nodes", tree.len(), tree.node_count());
    print_node(tree.root());
    Ok(())
}
