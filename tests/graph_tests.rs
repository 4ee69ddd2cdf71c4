use carekit::{Distance, Edge, Graph, GraphError, PriorityQueue};

fn abcd() -> Graph<char, u32> {
    let mut graph = Graph::new();
    for node in ['A', 'B', 'C', 'D'] {
        graph.add_node(node);
    }
    graph.add_edge(&'A', &'B', 1).unwrap();
    graph.add_edge(&'B', &'C', 2).unwrap();
    graph.add_edge(&'A', &'C', 4).unwrap();
    graph.add_edge(&'C', &'D', 1).unwrap();
    graph
}

#[test]
fn test_dijkstra_reference_graph() {
    let paths = abcd().dijkstra(&'A').unwrap();

    let distances: Vec<_> = ['A', 'B', 'C', 'D']
        .iter()
        .map(|n| paths.distance(n).and_then(Distance::finite))
        .collect();
    assert_eq!(distances, vec![Some(0), Some(1), Some(3), Some(4)]);

    assert_eq!(paths.predecessor(&'A'), None);
    assert_eq!(paths.predecessor(&'B'), Some(&'A'));
    assert_eq!(paths.predecessor(&'C'), Some(&'B'));
    assert_eq!(paths.predecessor(&'D'), Some(&'C'));
}

#[test]
fn test_isolated_node_is_infinite() {
    let mut graph = abcd();
    graph.add_node('E');
    let paths = graph.dijkstra(&'A').unwrap();

    assert_eq!(paths.distance(&'E'), Some(Distance::Infinite));
    assert_eq!(paths.predecessor(&'E'), None);
    assert_eq!(paths.predecessors().get(&'E'), Some(&None));
}

#[test]
fn test_dijkstra_from_isolated_node() {
    let mut graph = abcd();
    graph.add_node('E');
    let paths = graph.dijkstra(&'E').unwrap();

    assert_eq!(paths.distance(&'E'), Some(Distance::Finite(0)));
    for node in ['A', 'B', 'C', 'D'] {
        assert!(!paths.is_reachable(&node));
    }
}

#[test]
fn test_edge_symmetry() {
    let mut graph = abcd();
    graph.add_node('X');
    graph.add_node('Y');
    graph.add_edge(&'X', &'Y', 9).unwrap();

    assert!(graph.neighbors(&'X').unwrap().contains(&Edge { node: 'Y', weight: 9 }));
    assert!(graph.neighbors(&'Y').unwrap().contains(&Edge { node: 'X', weight: 9 }));
}

#[test]
fn test_missing_nodes_are_errors() {
    let mut graph = abcd();
    assert_eq!(
        graph.add_edge(&'A', &'Q', 1),
        Err(GraphError::MissingNode("'Q'".into()))
    );
    assert!(matches!(graph.dijkstra(&'Q'), Err(GraphError::MissingNode(_))));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_string_identifiers() {
    let mut graph: Graph<String, f64> = Graph::new();
    for name in ["ward", "lab", "pharmacy"] {
        graph.add_node(name.to_string());
    }
    graph.add_edge(&"ward".into(), &"lab".into(), 0.75).unwrap();
    graph.add_edge(&"lab".into(), &"pharmacy".into(), 1.25).unwrap();

    let paths = graph.dijkstra(&"ward".to_string()).unwrap();
    assert_eq!(paths.distance(&"pharmacy".into()), Some(Distance::Finite(2.0)));
    assert_eq!(
        paths.path_to(&"pharmacy".into()),
        Some(vec!["ward".to_string(), "lab".into(), "pharmacy".into()])
    );
}

#[test]
fn test_queue_size_invariant() {
    let mut queue = PriorityQueue::new();
    for k in 0..50u32 {
        queue.enqueue(k, (k * 37) % 11);
    }
    for j in 1..=20usize {
        assert!(queue.dequeue().is_some());
        assert_eq!(queue.len(), 50 - j);
        assert!(!queue.is_empty());
    }
    let rest = queue.into_sorted_vec();
    assert_eq!(rest.len(), 30);
}
