use super::tour::EulerTour;
use super::*;
use crate::NaiveLca;
use rand::Rng;

/// Binary tree from the end-to-end scenario: root 0 with children 1 and 2, node 1
/// with children 3 and 4, node 2 with children 5 and 6.
fn binary_tree() -> Vec<Vec<usize>> {
    vec![
        vec![1, 2],
        vec![3, 4],
        vec![5, 6],
        vec![],
        vec![],
        vec![],
        vec![],
    ]
}

/// Builds a random tree on `len` nodes by drawing each node's parent uniformly from
/// the nodes before it.
fn random_tree(rng: &mut impl Rng, len: usize) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); len];
    for node in 1..len {
        let parent = rng.gen_range(0..node);
        adjacency[parent].push(node);
    }
    adjacency
}

#[test]
fn test_tour_of_binary_tree() {
    let tour = EulerTour::traverse(&binary_tree()).unwrap();

    // 7 nodes, so the tour has at most 13 entries, and exactly 13 since every
    // internal node is returned to once per child
    assert_eq!(tour.order.len(), 13);
    assert_eq!(tour.order[0], 0);
    assert_eq!(*tour.order.last().unwrap(), 0);

    assert_eq!(tour.depth, vec![0, 1, 1, 2, 2, 2, 2]);

    for node in 0..7 {
        assert_eq!(
            tour.order[tour.first[node]],
            node,
            "first occurrence of {} points at the wrong tour entry",
            node
        );
        assert!(
            !tour.order[..tour.first[node]].contains(&node),
            "node {} appears before its recorded first occurrence",
            node
        );
    }
}

#[test]
fn test_tour_length_bound() {
    let mut rng = rand::thread_rng();
    for len in [1, 2, 17, 100] {
        let tour = EulerTour::traverse(&random_tree(&mut rng, len)).unwrap();
        assert!(tour.order.len() <= 2 * len - 1, "tour too long for {} nodes", len);
    }
}

#[test]
fn test_tie_break_keeps_later_candidate() {
    let earlier = DepthMin { node: 1, depth: 4 };
    let later = DepthMin { node: 2, depth: 4 };
    assert_eq!(min_by_depth(earlier, later), later);
    assert_eq!(min_by_depth(later, earlier), earlier);

    let shallower = DepthMin { node: 3, depth: 3 };
    assert_eq!(min_by_depth(shallower, later), shallower);
    assert_eq!(min_by_depth(later, shallower), shallower);
}

#[test]
fn test_single_node() {
    let lca = EulerLca::from_adjacency(&[vec![]]).unwrap();
    assert_eq!(lca.lca(0, 0), 0);
    assert_eq!(lca.len(), 1);
    assert!(!lca.is_empty());
}

#[test]
fn test_binary_tree_queries() {
    let lca = EulerLca::from_adjacency(&binary_tree()).unwrap();

    for (a, b, expected) in [
        (0, 0, 0),
        (0, 6, 0),
        (1, 6, 0),
        (1, 2, 0),
        (3, 4, 1),
        (6, 5, 2),
        (5, 3, 0),
        (5, 1, 0),
    ] {
        assert_eq!(
            lca.lca(a, b),
            expected,
            "query ({}, {}) returned the wrong ancestor",
            a,
            b
        );
    }
}

#[test]
fn test_empty_tree_builds() {
    let lca = EulerLca::from_adjacency(&[]).unwrap();
    assert!(lca.is_empty());
    assert_eq!(lca.len(), 0);
}

#[test]
fn test_disconnected_graph_rejected() {
    // node 2 is unreachable from the root
    let adjacency = vec![vec![1], vec![], vec![3], vec![]];
    assert_eq!(EulerLca::from_adjacency(&adjacency).unwrap_err(), InvalidTreeError);
}

#[test]
fn test_multi_parent_graph_rejected() {
    // node 3 points back into the root's reachable set
    let adjacency = vec![vec![], vec![], vec![], vec![0, 1, 2]];
    assert_eq!(EulerLca::from_adjacency(&adjacency).unwrap_err(), InvalidTreeError);
}

#[test]
fn test_shared_child_rejected() {
    // nodes 1 and 2 both claim node 3
    let adjacency = vec![vec![1, 2], vec![3], vec![3], vec![]];
    assert_eq!(EulerLca::from_adjacency(&adjacency).unwrap_err(), InvalidTreeError);
}

#[test]
fn test_cycle_rejected() {
    let adjacency = vec![vec![1], vec![2], vec![0]];
    assert_eq!(EulerLca::from_adjacency(&adjacency).unwrap_err(), InvalidTreeError);
}

#[test]
fn test_chain_queries() {
    // a path long enough that queries span multiple tour blocks
    const LEN: usize = 200;
    let mut adjacency = vec![Vec::new(); LEN];
    for node in 0..LEN - 1 {
        adjacency[node].push(node + 1);
    }

    let lca = EulerLca::from_adjacency(&adjacency).unwrap();

    for a in (0..LEN).step_by(7) {
        for b in (0..LEN).step_by(13) {
            assert_eq!(
                lca.lca(a, b),
                a.min(b),
                "on a path the ancestor closer to the root wins, a = {}, b = {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_root_absorption_and_reflexivity() {
    let mut rng = rand::thread_rng();
    let lca = EulerLca::from_adjacency(&random_tree(&mut rng, 150)).unwrap();

    for node in 0..150 {
        assert_eq!(lca.lca(0, node), 0);
        assert_eq!(lca.lca(node, 0), 0);
        assert_eq!(lca.lca(node, node), node);
    }
}

#[test]
fn test_matches_naive_solver_exhaustively() {
    let mut rng = rand::thread_rng();
    let adjacency = random_tree(&mut rng, 60);

    let fast = EulerLca::from_adjacency(&adjacency).unwrap();
    let naive = NaiveLca::from_adjacency(&adjacency).unwrap();

    for a in 0..60 {
        for b in a..60 {
            let expected = naive.lca(a, b);
            assert_eq!(fast.lca(a, b), expected, "a = {}, b = {}", a, b);
            assert_eq!(fast.lca(b, a), expected, "a = {}, b = {}", b, a);
        }
    }
}

#[test]
fn test_matches_naive_solver_random_pairs() {
    let mut rng = rand::thread_rng();
    const LEN: usize = 1000;
    let adjacency = random_tree(&mut rng, LEN);

    let fast = EulerLca::from_adjacency(&adjacency).unwrap();
    let naive = NaiveLca::from_adjacency(&adjacency).unwrap();

    for _ in 0..10_000 {
        let a = rng.gen_range(0..LEN);
        let b = rng.gen_range(0..LEN);
        assert_eq!(fast.lca(a, b), naive.lca(a, b), "a = {}, b = {}", a, b);
    }
}

#[test]
fn test_depth_accessor() {
    let lca = EulerLca::from_adjacency(&binary_tree()).unwrap();
    assert_eq!(lca.depth(0), 0);
    assert_eq!(lca.depth(2), 1);
    assert_eq!(lca.depth(6), 2);
}

#[test]
fn test_heap_size() {
    let lca = EulerLca::from_adjacency(&binary_tree()).unwrap();
    // 13 tour entries, 7 first positions, 7 depths, and at least one block aggregate
    assert!(lca.heap_size() >= 13 * size_of::<usize>() + 7 * size_of::<usize>() + 7 * 8);
}
