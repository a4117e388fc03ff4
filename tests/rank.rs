mod common;
use common::*;
use cutgraph::prelude::*;

#[test]
fn ranks_count_up_from_one_and_loops_are_recorded() {
    // Two 3- and 2-cycles plus one plain chain.
    let (graph, vs, _) = build_graph(
        7,
        &[
            (0, 1, 1), // v1 -> v2
            (1, 2, 1), // v2 -> v3
            (2, 0, 1), // v3 -> v1
            (3, 4, 1), // v4 -> v5
            (4, 3, 1), // v5 -> v4
            (5, 6, 1), // v6 -> v7
        ],
    );
    let (ranks, loops) = rank(&graph, follow_all);

    assert_eq!(ranks[vs[0]], 1);
    assert_eq!(ranks[vs[1]], 2);
    assert_eq!(ranks[vs[2]], 3);
    assert_eq!(ranks[vs[3]], 1);
    assert_eq!(ranks[vs[4]], 2);
    assert_eq!(ranks[vs[5]], 1);
    assert_eq!(ranks[vs[6]], 2);

    assert_eq!(loops.len(), 2);
    let trace = loops.get(vs[0]).expect("v1 enters a loop");
    assert_eq!(trace.as_slice(), &[vs[0], vs[1], vs[2], vs[0]]);
    let trace = loops.get(vs[3]).expect("v4 enters a loop");
    assert_eq!(trace.as_slice(), &[vs[3], vs[4], vs[3]]);
    assert!(loops.get(vs[5]).is_none());
}

#[test]
fn rank_takes_the_longest_path() {
    // A diamond with a shortcut: the long way wins.
    let (graph, vs, _) = build_graph(
        4,
        &[
            (0, 1, 1), // a -> b
            (1, 3, 1), // b -> d
            (0, 2, 1), // a -> c
            (2, 3, 1), // c -> d
            (0, 3, 1), // a -> d
        ],
    );
    let (ranks, loops) = rank(&graph, follow_all);
    assert!(loops.is_empty());
    assert_eq!(ranks[vs[0]], 1);
    assert_eq!(ranks[vs[1]], 2);
    assert_eq!(ranks[vs[2]], 2);
    assert_eq!(ranks[vs[3]], 3);
}

#[test]
fn rank_monotonic_along_followed_edges() {
    let (graph, _, es) = build_graph(
        6,
        &[
            (0, 1, 1),
            (0, 2, 1),
            (1, 3, 1),
            (2, 3, 1),
            (3, 4, 1),
            (2, 5, 1),
            (5, 4, 1),
        ],
    );
    let (ranks, loops) = rank(&graph, follow_all);
    assert!(loops.is_empty());
    for e in es {
        assert!(ranks[graph.to(e)] >= ranks[graph.from(e)] + 1);
    }
}

#[test]
fn adder_spreads_the_levels() {
    let (graph, vs, _) = build_graph(3, &[(0, 1, 1), (1, 2, 1)]);
    let (ranks, _) = rank_with_adder(&graph, follow_all, 10);
    assert_eq!(ranks[vs[0]], 1);
    assert_eq!(ranks[vs[1]], 11);
    assert_eq!(ranks[vs[2]], 21);
}

#[test]
fn dead_edges_do_not_rank() {
    let (graph, vs, _) = build_graph(2, &[(0, 1, 0)]);
    let (ranks, loops) = rank(&graph, follow_all);
    assert!(loops.is_empty());
    assert_eq!(ranks[vs[0]], 1);
    assert_eq!(ranks[vs[1]], 1);
}

#[test]
fn self_loop_is_recorded_against_its_vertex() {
    let mut graph = Graph::new();
    let v = graph.new_vertex();
    graph.new_edge(v, v, 1);
    let (ranks, loops) = rank(&graph, follow_all);
    assert_eq!(ranks[v], 1);
    let trace = loops.get(v).expect("self-loop is a loop");
    assert_eq!(trace.as_slice(), &[v, v]);
}
