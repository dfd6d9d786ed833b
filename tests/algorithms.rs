use std::collections::VecDeque;

use petgraph::graph::UnGraph;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use wavefront::algo::{bfs, connected_components, UNREACHED};
use wavefront::graph::Graph;

fn sequential_distances(n: usize, edges: &[(usize, usize)], source: usize) -> Vec<Option<usize>> {
    let mut adj = vec![Vec::new(); n];
    for &(u, v) in edges {
        adj[u].push(v);
        adj[v].push(u);
    }
    let mut dist = vec![None; n];
    dist[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        for &v in &adj[u] {
            if dist[v].is_none() {
                dist[v] = Some(dist[u].unwrap() + 1);
                queue.push_back(v);
            }
        }
    }
    dist
}

/// Random-ish but deterministic edge set, dense enough that a full BFS
/// crosses the direction threshold mid-run.
fn scrambled_edges(n: usize, per_vertex: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for v in 0..n {
        for j in 1..=per_vertex {
            edges.push((v, (v * 31 + j * 17 + 7) % n));
        }
    }
    edges.retain(|&(u, v)| u != v);
    edges
}

#[test]
fn bfs_parents_form_a_shortest_path_tree() {
    let n = 500;
    let edges = scrambled_edges(n, 4);
    let g = Graph::symmetric_from_edges(n, &edges).unwrap();
    let parents = bfs(&g, 0);
    let dist = sequential_distances(n, &edges, 0);

    for v in 0..n {
        match dist[v] {
            None => assert_eq!(parents[v], UNREACHED, "vertex {v} unreachable"),
            Some(0) => assert_eq!(parents[v], v, "source parents itself"),
            Some(d) => {
                let p = parents[v];
                assert!(g.out_neighbors(v).contains(&p), "parent of {v} must be a neighbor");
                assert_eq!(dist[p], Some(d - 1), "parent of {v} sits one level up");
            }
        }
    }
}

#[test]
fn components_agree_with_petgraph() {
    // Three islands of different shapes.
    let mut edges = scrambled_edges(60, 2);
    edges.retain(|&(u, v)| u / 20 == v / 20); // cut into 3 blocks of 20
    edges.push((0, 1)); // make sure no block is empty of edges
    edges.push((20, 21));
    edges.push((40, 41));
    let n = 60;
    let g = Graph::symmetric_from_edges(n, &edges).unwrap();
    let labels = connected_components(&g, None);

    let pg: UnGraph<(), ()> = UnGraph::from_edges(
        edges.iter().map(|&(u, v)| (u as u32, v as u32)),
    );
    let mut uf = UnionFind::new(n);
    for e in pg.edge_references() {
        uf.union(e.source().index(), e.target().index());
    }

    for u in 0..n {
        for v in 0..n {
            assert_eq!(
                labels[u] == labels[v],
                uf.find(u) == uf.find(v),
                "vertices {u} and {v} disagree on connectivity"
            );
        }
    }
}

#[test]
fn component_labels_are_component_minima() {
    let g = Graph::symmetric_from_edges(7, &[(1, 2), (2, 3), (5, 6)]).unwrap();
    let labels = connected_components(&g, None);
    assert_eq!(labels, vec![0, 1, 1, 1, 4, 5, 5]);
}
