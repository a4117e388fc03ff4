mod common;
use common::*;
use cutgraph::prelude::*;

#[test]
fn trace_starts_at_seed_and_ends_at_the_repeat() {
    let (graph, vs, _) = build_graph(
        4,
        &[
            (0, 1, 1), // seed -> a
            (1, 2, 1), // a -> b
            (2, 1, 1), // b -> a closes the loop
            (1, 3, 1), // a -> tail, never part of it
        ],
    );
    let trace = report_loops(&graph, vs[0], follow_all);
    assert_eq!(trace.as_slice(), &[vs[0], vs[1], vs[2], vs[1]]);
}

#[test]
fn acyclic_region_reports_nothing() {
    let (graph, vs, _) = build_graph(4, &[(0, 1, 1), (1, 2, 1), (1, 3, 1), (2, 3, 1)]);
    let trace = report_loops(&graph, vs[0], follow_all);
    assert!(trace.is_empty());
}

#[test]
fn loop_not_reachable_from_seed_is_invisible() {
    let (graph, vs, _) = build_graph(4, &[(0, 1, 1), (2, 3, 1), (3, 2, 1)]);
    let trace = report_loops(&graph, vs[0], follow_all);
    assert!(trace.is_empty());
}

#[test]
fn predicate_limits_the_walk() {
    let (mut graph, vs, es) = build_graph(2, &[(0, 1, 1), (1, 0, 1)]);

    let trace = report_loops(&graph, vs[0], follow_all);
    assert_eq!(trace.as_slice(), &[vs[0], vs[1], vs[0]]);

    // Over non-cutable edges only, the same graph has no loop.
    graph.set_cutable(es[1], false);
    let trace = report_loops(&graph, vs[1], follow_not_cutable);
    assert!(trace.is_empty());
}

#[test]
fn self_loop_is_the_shortest_trace() {
    let mut graph = Graph::new();
    let v = graph.new_vertex();
    graph.new_edge(v, v, 1);
    let trace = report_loops(&graph, v, follow_all);
    assert_eq!(trace.as_slice(), &[v, v]);
}
