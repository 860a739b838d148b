#![allow(dead_code)]

use adjgraph::{core::GraphConfig, Graph};
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    /// Generates pairs `(v, w)` with `w < v` following the G(n, p) model, so
    /// there are no self-loops and no parallel edges.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn adjgraph_random(
    config: GraphConfig,
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> Graph<usize, u32> {
    let mut graph = Graph::new(config);

    for vertex in 0..vertex_count {
        graph.add_vertex(vertex);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let _ = graph.add_edge(u, v, rng.u32(1..100));
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<usize, u32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for vertex in 0..vertex_count {
        graph.add_node(vertex);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.u32(1..100));
    }

    graph
}
