use umbra::{Direction, GraphBuilder, ShortestPathDijkstra};

const A: u64 = 1;
const B: u64 = 2;
const C: u64 = 3;
const D: u64 = 4;
const E: u64 = 5;

fn weighted_graph() -> umbra::Graph {
    let mut builder = GraphBuilder::new(Direction::Outgoing).with_weights(1.0);
    builder.add_relationship_weighted(A, B, 1.0);
    builder.add_relationship_weighted(A, C, 2.0);
    builder.add_relationship_weighted(B, C, 3.0);
    builder.add_relationship_weighted(B, D, 4.0);
    builder.add_relationship_weighted(C, E, 5.0);
    builder.add_relationship_weighted(D, E, 6.0);
    builder.build()
}

#[test]
fn picks_the_cheaper_path() {
    let graph = weighted_graph();
    let path = ShortestPathDijkstra::new(&graph).compute(A, E).unwrap();
    assert_eq!(path.nodes, vec![A, C, E]);
    assert_eq!(path.cost, 7.0);
    assert!(path.reaches_from(A));
}

#[test]
fn start_equals_goal() {
    let graph = weighted_graph();
    let path = ShortestPathDijkstra::new(&graph).compute(B, B).unwrap();
    assert_eq!(path.nodes, vec![B]);
    assert_eq!(path.cost, 0.0);
}

#[test]
fn unreachable_goal_terminates_with_signal() {
    let mut builder = GraphBuilder::new(Direction::Outgoing).with_weights(1.0);
    builder.add_relationship_weighted(A, B, 1.0);
    builder.add_node(E);
    let graph = builder.build();

    let path = ShortestPathDijkstra::new(&graph).compute(A, E).unwrap();
    assert_eq!(path.nodes, vec![E]);
    assert!(!path.reaches_from(A));
    assert!(path.cost.is_infinite());
}

#[test]
fn relaxation_only_improves() {
    // Parallel edges with different weights; the cheaper one must win.
    let mut builder = GraphBuilder::new(Direction::Outgoing).with_weights(1.0);
    builder.add_relationship_weighted(A, B, 9.0);
    builder.add_relationship_weighted(A, B, 2.0);
    let graph = builder.build();

    let path = ShortestPathDijkstra::new(&graph).compute(A, B).unwrap();
    assert_eq!(path.nodes, vec![A, B]);
    assert_eq!(path.cost, 2.0);
}

#[test]
fn unknown_endpoints_are_rejected() {
    let graph = weighted_graph();
    assert!(matches!(
        ShortestPathDijkstra::new(&graph).compute(A, 99),
        Err(umbra::Error::NodeNotFound(99))
    ));
    assert!(matches!(
        ShortestPathDijkstra::new(&graph).compute(99, A),
        Err(umbra::Error::NodeNotFound(99))
    ));
}
