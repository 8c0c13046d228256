// Copyright 2026 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless moving-boxes simulation driver.
//!
//! The driver owns entity positions and velocities and advances them each
//! tick; the tree only ever sees one `clear` / `insert`* / `retrieve`*
//! cycle per tick. Exact overlap filtering and self-exclusion happen here,
//! on the driver side, never inside the index.
//!
//! Run:
//! - `cargo run -p quadrat_demos --example moving_boxes [sim.toml]`
//! - `RUST_LOG=debug` for per-tick detail.

use anyhow::Context;
use quadrat_index::{Aabb, Config, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SimConfig {
    tree: Config<f64>,
    entities: usize,
    entity_size: f64,
    ticks: u64,
    seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tree: Config {
                width: 500.0,
                height: 500.0,
                max_depth: 5,
                max_objects: 3,
            },
            entities: 50,
            entity_size: 10.0,
            ticks: 300,
            seed: 0x0517,
        }
    }
}

struct Entity {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

impl Entity {
    /// Advance one tick: drift, occasionally pick a new axis velocity from
    /// {-1, 0, 1}, and clamp to the world border.
    fn step(&mut self, rng: &mut StdRng, max_x: f64, max_y: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if rng.random_range(0..6) == 0 {
            self.vx = random_velocity(rng);
        }
        if rng.random_range(0..6) == 0 {
            self.vy = random_velocity(rng);
        }
        self.x = self.x.clamp(0.0, max_x);
        self.y = self.y.clamp(0.0, max_y);
    }
}

fn random_velocity(rng: &mut StdRng) -> f64 {
    [0.0, 1.0, -1.0][rng.random_range(0..3)]
}

fn load_config() -> anyhow::Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig::default());
    };
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    toml::from_str(&raw).with_context(|| format!("parsing {path}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let size = config.entity_size;
    let max_x = config.tree.width - size;
    let max_y = config.tree.height - size;

    let mut tree: QuadTree<f64, usize> = QuadTree::new(config.tree)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut entities: Vec<Entity> = (0..config.entities)
        .map(|_| Entity {
            x: rng.random_range(0.0..=max_x),
            y: rng.random_range(0.0..=max_y),
            vx: random_velocity(&mut rng),
            vy: random_velocity(&mut rng),
        })
        .collect();
    info!(
        entities = config.entities,
        ticks = config.ticks,
        seed = config.seed,
        "simulation start"
    );

    for tick in 0..config.ticks {
        for e in &mut entities {
            e.step(&mut rng, max_x, max_y);
        }

        // Rebuild from scratch; the tree keeps nothing across ticks.
        tree.clear();
        for (i, e) in entities.iter().enumerate() {
            tree.insert(Aabb::from_xywh(e.x, e.y, size, size), i)?;
        }

        let mut candidates = Vec::new();
        let mut candidate_total = 0;
        let mut overlapping = 0;
        for (i, e) in entities.iter().enumerate() {
            let query = Aabb::from_xywh(e.x, e.y, size, size);
            tree.retrieve_into(&query, &mut candidates);
            candidate_total += candidates.len();
            // The candidate set is a superset: exact test and
            // self-exclusion are the driver's job.
            overlapping += candidates
                .iter()
                .filter(|it| it.payload != i && it.aabb.intersects(&query))
                .count();
        }
        let pairs = overlapping / 2;
        debug!(
            tick,
            nodes = tree.node_count(),
            candidates = candidate_total,
            pairs,
            "tick"
        );
        if tick % 60 == 0 {
            info!(tick, nodes = tree.node_count(), pairs, "progress");
        }
    }

    info!(ticks = config.ticks, "simulation finished");
    Ok(())
}
