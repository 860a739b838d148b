use std::{cmp::Reverse, collections::BinaryHeap, hash::Hash};

use tracing::{debug, trace};

use crate::{
    core::{
        error::{Error, Requirement},
        id::VertexId,
        weight::{EdgeWeight, Weight, Weighted},
    },
    graph::Graph,
    visit::{VertexBitSet, VisitSet},
};

use super::ShortestPaths;

/// Computes the shortest paths from the source to all vertices of the graph.
///
/// The graph must be weighted and simple, and the source must exist.
/// Encountering a negative weight on an explored edge aborts the search with
/// [`Error::NegativeWeight`].
pub fn dijkstra<V, E>(graph: &Graph<V, E>, source: &V) -> Result<ShortestPaths<V, E::Weight>, Error>
where
    V: Eq + Hash + Clone,
    E: EdgeWeight,
{
    if !graph.config().is_weighted() {
        return Err(Error::Unsupported(Requirement::Weighted));
    }

    if !graph.config().is_simple() {
        return Err(Error::Unsupported(Requirement::SimpleGraph));
    }

    let start = graph.id(source)?;
    let storage = graph.storage();

    debug!(
        vertices = storage.vertex_count(),
        "searching for shortest paths"
    );

    let mut dist = vec![E::Weight::inf(); storage.vertex_count()];
    let mut pred = vec![None; storage.vertex_count()];
    let mut finalized = VertexBitSet::with_capacity(storage.vertex_count());
    let mut queue: BinaryHeap<Reverse<Weighted<VertexId, <E::Weight as Weight>::Ord>>> =
        BinaryHeap::new();

    dist[start.as_usize()] = E::Weight::zero();
    queue.push(Reverse(Weighted(start, E::Weight::zero().into())));

    while let Some(Reverse(Weighted(vertex, _))) = queue.pop() {
        // Relaxation pushes a vertex again instead of decreasing its key, so
        // stale entries are skipped here.
        if !finalized.visit(vertex) {
            continue;
        }

        let vertex_dist = dist[vertex.as_usize()].clone();

        for record in storage.edges(vertex) {
            let next = record.target();

            if finalized.is_visited(next) {
                continue;
            }

            let weight = record.attr().weight().ok_or(Error::MissingWeight)?;

            // The check for unsignedness eliminates the negativity check for
            // unsigned types, because `is_unsigned` is a constant in practice.
            if !E::Weight::is_unsigned() && weight < E::Weight::zero() {
                return Err(Error::NegativeWeight);
            }

            // A sum that does not fit into the weight type is never shorter
            // than the current distance.
            let next_dist = match vertex_dist.clone().checked_add(weight) {
                Some(next_dist) => next_dist,
                None => continue,
            };

            if next_dist < dist[next.as_usize()] {
                trace!(from = ?vertex, to = ?next, "relaxing edge");

                dist[next.as_usize()] = next_dist.clone();
                pred[next.as_usize()] = Some(vertex);
                queue.push(Reverse(Weighted(next, next_dist.into())));
            }
        }
    }

    let dist = storage
        .vertex_ids()
        .zip(dist)
        .map(|(id, d)| (storage.vertex(id).clone(), d))
        .collect();

    let pred = storage
        .vertex_ids()
        .zip(pred)
        .filter_map(|(id, p)| Some((storage.vertex(id).clone(), storage.vertex(p?).clone())))
        .collect();

    Ok(ShortestPaths::new(source.clone(), dist, pred))
}
