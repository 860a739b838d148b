use std::{
    fmt::Display,
    io::{self, Cursor, Write},
};

use crate::graph::Graph;

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exporter to the [DOT] language of Graphviz.
///
/// [DOT]: https://graphviz.org/doc/info/lang.html
pub struct Dot<V, E> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String>,
    get_edge_label: Box<dyn Fn(&E) -> String>,
}

impl<V, E> Dot<V, E> {
    pub fn new<FV, FE>(name: Option<String>, get_vertex_label: FV, get_edge_label: FE) -> Self
    where
        FV: Fn(&V) -> String + 'static,
        FE: Fn(&E) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            get_edge_label: Box::new(get_edge_label),
        }
    }

    pub fn to_string(&self, graph: &Graph<V, E>) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<V: Display, E: Display> Dot<V, E> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"), |e| format!("{e}"))
    }
}

impl<V, E> Export<Graph<V, E>> for Dot<V, E> {
    fn export<W: Write>(&self, graph: &Graph<V, E>, out: &mut W) -> io::Result<()> {
        let directed = graph.config().is_directed();
        let storage = graph.storage();

        if directed {
            out.write_all(b"digraph ")?;
        } else {
            out.write_all(b"graph ")?;
        }

        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for id in storage.vertex_ids() {
            writeln!(
                out,
                "    v{} [label={:?}];",
                id.as_usize(),
                (self.get_vertex_label)(storage.vertex(id))
            )?;
        }

        let line = if directed { "->" } else { "--" };

        for from in storage.vertex_ids() {
            for record in storage.edges(from) {
                let to = record.target();

                // Mirrored record of an undirected edge is written by the
                // other endpoint.
                if !directed && to < from {
                    continue;
                }

                writeln!(
                    out,
                    "    v{} {} v{} [label={:?}];",
                    from.as_usize(),
                    line,
                    to.as_usize(),
                    (self.get_edge_label)(record.attr())
                )?;
            }
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}
