use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use umbra::{Direction, Error, Graph, GraphBuilder};

const NODES: u64 = 40;
const RELATIONSHIPS: usize = 200;

fn random_graph(direction: Direction, seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new(direction);
    for original in 0..NODES {
        builder.add_node(original);
    }
    for _ in 0..RELATIONSHIPS {
        let source = rng.gen_range(0..NODES);
        let target = rng.gen_range(0..NODES);
        builder.add_relationship(source, target);
    }
    builder.build()
}

fn assert_filtering(graph: &Graph, succeeding: &[Direction], failing: &[Direction]) {
    for node in graph.node_ids() {
        for &direction in succeeding {
            graph.degree(node, direction).unwrap();
            graph
                .for_each_relationship(node, direction, |_, _| true)
                .unwrap();
        }
        for &direction in failing {
            assert!(
                matches!(
                    graph.degree(node, direction),
                    Err(Error::DirectionNotLoaded(failed)) if failed == direction
                ),
                "degree for {direction} should have failed"
            );
            assert!(
                matches!(
                    graph.for_each_relationship(node, direction, |_, _| true),
                    Err(Error::DirectionNotLoaded(failed)) if failed == direction
                ),
                "relationship scan for {direction} should have failed"
            );
        }
    }
}

#[test]
fn loads_only_outgoing_relationships() {
    let graph = random_graph(Direction::Outgoing, 7);
    assert_filtering(
        &graph,
        &[Direction::Outgoing],
        &[Direction::Incoming, Direction::Both],
    );
}

#[test]
fn loads_only_incoming_relationships() {
    let graph = random_graph(Direction::Incoming, 8);
    assert_filtering(
        &graph,
        &[Direction::Incoming],
        &[Direction::Outgoing, Direction::Both],
    );
}

#[test]
fn loads_both_relationships() {
    let graph = random_graph(Direction::Both, 9);
    assert_filtering(
        &graph,
        &[Direction::Outgoing, Direction::Incoming, Direction::Both],
        &[],
    );
}

#[test]
fn no_edges_is_not_an_unloaded_direction() {
    let mut builder = GraphBuilder::new(Direction::Outgoing);
    builder.add_node(1);
    let graph = builder.build();
    assert_eq!(graph.degree(0, Direction::Outgoing).unwrap(), 0);
    assert!(matches!(
        graph.degree(0, Direction::Incoming),
        Err(Error::DirectionNotLoaded(Direction::Incoming))
    ));
}
