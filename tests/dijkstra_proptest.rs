use carekit::{Distance, Graph};
use petgraph::algo::dijkstra as petgraph_dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

type EdgeList = Vec<(usize, usize, u32)>;

fn arb_graph() -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..14).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n, 0u32..50), 0..40);
        (Just(n), edges)
    })
}

fn build(n: usize, edges: &EdgeList) -> Graph<usize, u32> {
    let mut graph = Graph::with_capacity(n);
    for node in 0..n {
        graph.add_node(node);
    }
    for &(a, b, w) in edges {
        graph.add_edge(&a, &b, w).unwrap();
    }
    graph
}

/// All-pairs shortest distances; `None` is infinity.
fn floyd_warshall(n: usize, edges: &EdgeList) -> Vec<Vec<Option<u32>>> {
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for &(a, b, w) in edges {
        for (u, v) in [(a, b), (b, a)] {
            if dist[u][v].map_or(true, |d| w < d) {
                dist[u][v] = Some(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| ik + kj < d) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn test_dijkstra_matches_floyd_warshall((n, edges) in arb_graph(), start in 0usize..14) {
        let start = start % n;
        let graph = build(n, &edges);
        let paths = graph.dijkstra(&start).unwrap();
        let reference = floyd_warshall(n, &edges);

        for node in 0..n {
            let expected = reference[start][node].map_or(Distance::Infinite, Distance::Finite);
            prop_assert_eq!(paths.distance(&node), Some(expected), "distance mismatch for node {}", node);
        }
    }

    #[test]
    fn test_dijkstra_matches_petgraph((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let paths = graph.dijkstra(&0).unwrap();

        let mut reference: UnGraph<(), u32> = UnGraph::default();
        let indices: Vec<NodeIndex> = (0..n).map(|_| reference.add_node(())).collect();
        for &(a, b, w) in &edges {
            reference.add_edge(indices[a], indices[b], w);
        }
        let expected = petgraph_dijkstra(&reference, indices[0], None, |e| *e.weight());

        for node in 0..n {
            let ours = paths.distance(&node).and_then(Distance::finite);
            prop_assert_eq!(ours, expected.get(&indices[node]).copied());
        }
    }

    #[test]
    fn test_predecessors_form_shortest_paths((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let paths = graph.dijkstra(&0).unwrap();

        for node in 0..n {
            let Some(path) = paths.path_to(&node) else {
                prop_assert!(!paths.is_reachable(&node));
                continue;
            };
            prop_assert_eq!(path.first(), Some(&0));
            prop_assert_eq!(path.last(), Some(&node));

            // Each hop must be an edge whose weight accounts for the distance step.
            for hop in path.windows(2) {
                let (u, v) = (hop[0], hop[1]);
                let du = paths.distance(&u).and_then(Distance::finite).unwrap();
                let dv = paths.distance(&v).and_then(Distance::finite).unwrap();
                let has_edge = graph
                    .neighbors(&u)
                    .unwrap()
                    .iter()
                    .any(|e| e.node == v && du + e.weight == dv);
                prop_assert!(has_edge, "hop {} -> {} is not tight", u, v);
            }
        }
    }
}
