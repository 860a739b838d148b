mod common;

use adjgraph::{core::GraphConfig, Graph};
use common::{adjgraph_random, RandomEdges, RANDOM_SEED};
use fastrand::Rng;
use petgraph::prelude::*;

fn main() {
    divan::main();
}

fn add_remove(config: GraphConfig, n: usize, density: f32) -> Graph<usize, f32> {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = Graph::new(config);

    for vertex in 0..n {
        graph.add_vertex(vertex);
    }

    let mut edges = RandomEdges::new(n, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        let _ = graph.add_edge(u, v, rng.f32());
    }

    for _ in 0..(n / 4) {
        graph.remove_vertex(&rng.usize(..n));
    }

    let mut edges = RandomEdges::new(n / 4, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.remove_edge(&u, &v);
    }

    let mut edges = RandomEdges::new(n - (n / 4), density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        let _ = graph.add_edge(u, v, rng.f32());
    }

    graph
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn adjgraph_add_remove_directed<const N: usize>(density: f32) -> Graph<usize, f32> {
    add_remove(GraphConfig::new().directed(), N, density)
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn adjgraph_add_remove_undirected<const N: usize>(density: f32) -> Graph<usize, f32> {
    add_remove(GraphConfig::new(), N, density)
}

#[divan::bench(consts = [100, 1000], types = [petgraph::Directed, petgraph::Undirected], args = [0.05, 0.5, 0.95])]
fn petgraph_graph_add_remove<const N: usize, Ty: petgraph::EdgeType>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = petgraph::Graph::<_, _, Ty>::with_capacity(0, 0);

    for vertex in 0..N {
        graph.add_node(vertex);
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    for _ in 0..(N / 4) {
        let u = rng.usize(..graph.node_count());

        graph.remove_node(NodeIndex::new(u));
    }

    let mut edges = RandomEdges::new(N / 4, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        if let Some(e) = graph
            .edges_connecting(NodeIndex::new(u), NodeIndex::new(v))
            .next()
        {
            graph.remove_edge(e.id());
        }
    }
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn adjgraph_bfs<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = adjgraph_random(GraphConfig::new(), N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.bfs(&0).map(|bfs| bfs.count()));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn adjgraph_has_cycle<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = adjgraph_random(
        GraphConfig::new().directed(),
        N,
        density,
        &mut Rng::with_seed(RANDOM_SEED),
    );

    bencher.bench(|| graph.has_cycle());
}
