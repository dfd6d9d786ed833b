use wavefront::algo::{maximal_independent_set, MisState};
use wavefront::graph::Graph;

/// The original correctness conditions: no two IN neighbors (independence),
/// and every non-IN vertex has an IN neighbor (maximality).
fn assert_valid_mis(g: &Graph, states: &[MisState]) {
    for v in 0..g.vertices() {
        let v_in = states[v] == MisState::In;
        let mut in_neighbors = 0usize;
        for &w in g.out_neighbors(v) {
            if states[w] == MisState::In {
                in_neighbors += 1;
            }
        }
        if v_in {
            assert_eq!(in_neighbors, 0, "vertex {v} is IN with an IN neighbor");
        } else {
            assert!(in_neighbors > 0, "vertex {v} is OUT with no IN neighbor");
        }
    }
}

#[test]
fn three_path_resolves_to_endpoints() {
    // 0 - 1 - 2, priority = vertex id (lower wins).
    let g = Graph::symmetric_from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let states = maximal_independent_set(&g, None);

    assert_eq!(states[0], MisState::In);
    assert_eq!(states[1], MisState::Out);
    assert_eq!(states[2], MisState::In);
    assert_valid_mis(&g, &states);
}

#[test]
fn cycle_yields_a_valid_maximal_set() {
    let n = 17;
    let edges: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    let g = Graph::symmetric_from_edges(n, &edges).unwrap();
    let states = maximal_independent_set(&g, None);
    assert_valid_mis(&g, &states);
    assert_eq!(states[0], MisState::In, "vertex 0 has top priority");
}

#[test]
fn grid_yields_a_valid_maximal_set() {
    // 8x8 grid
    let side = 8;
    let n = side * side;
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                edges.push((v, v + 1));
            }
            if r + 1 < side {
                edges.push((v, v + side));
            }
        }
    }
    let g = Graph::symmetric_from_edges(n, &edges).unwrap();
    let states = maximal_independent_set(&g, None);
    assert_valid_mis(&g, &states);
}

#[test]
fn round_cap_leaves_unresolved_vertices_in_play() {
    let n = 40;
    let edges: Vec<(usize, usize)> = (0..n - 1).map(|v| (v, v + 1)).collect();
    let g = Graph::symmetric_from_edges(n, &edges).unwrap();
    let states = maximal_independent_set(&g, Some(0));
    // Zero rounds: nothing ever committed.
    assert!(states.iter().all(|&s| s != MisState::In));
}
