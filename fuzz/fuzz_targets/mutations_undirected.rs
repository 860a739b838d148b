#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    core::{EdgeMode, GraphConfig},
    infra::{
        arbitrary::{MutOpResult, MutOpsSeq},
        testing::check_consistency,
    },
    Graph,
};

fuzz_target!(|input: (GraphConfig, MutOpsSeq<u8, Option<u8>>)| {
    let (config, ops) = input;
    let config = GraphConfig::from_parts(
        config.multiplicity(),
        EdgeMode::Undirected,
        config.self_loop_policy(),
        config.weighting(),
    );
    let mut graph = Graph::new(config);

    for op in ops {
        let vertex_count = graph.vertex_count();
        let edge_count = graph.edge_count();

        if let MutOpResult::AddEdge(Err(_)) = op.apply(&mut graph) {
            assert_eq!(graph.vertex_count(), vertex_count);
            assert_eq!(graph.edge_count(), edge_count);
        }

        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
