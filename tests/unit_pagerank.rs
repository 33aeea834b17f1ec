// tests/unit_pagerank.rs
//! Power iteration behaviour.

use simplerank_core::error::RankError;
use simplerank_core::graph::rank::pagerank;
use simplerank_core::graph::RankGraph;

const EPS: f32 = 1e-5;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn rank(ranks: &simplerank_core::graph::RankVector, label: &str) -> f32 {
    ranks.get(label).unwrap_or(f32::NAN)
}

#[test]
fn test_single_iteration_is_uniform() {
    let g = RankGraph::from_edges([("A", "B"), ("B", "C"), ("D", "A")]);
    let ranks = g.compute_ranks(1).unwrap();

    assert_eq!(ranks.len(), 4);
    for (_, r) in ranks.iter() {
        assert_eq!(r, 1.0_f32 / 4.0);
    }
}

#[test]
fn test_zero_iterations_behaves_like_one() {
    let g = RankGraph::from_edges([("A", "B"), ("B", "C")]);
    assert_eq!(g.compute_ranks(0).unwrap(), g.compute_ranks(1).unwrap());
}

#[test]
fn test_passes_for_budget() {
    assert_eq!(pagerank::passes_for(0), 0);
    assert_eq!(pagerank::passes_for(1), 0);
    assert_eq!(pagerank::passes_for(2), 1);
    assert_eq!(pagerank::passes_for(10), 9);
}

#[test]
fn test_single_edge_scenario() {
    let g = RankGraph::from_edges([("A", "B")]);
    let ranks = g.compute_ranks(2).unwrap();

    assert_eq!(rank(&ranks, "A"), 0.0);
    assert!(close(rank(&ranks, "B"), 0.5));
}

#[test]
fn test_cycle_is_fixed_point() {
    let g = RankGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
    for iterations in 1..=6 {
        let ranks = g.compute_ranks(iterations).unwrap();
        for (label, r) in ranks.iter() {
            assert!(close(r, 1.0 / 3.0), "{label}={r} at {iterations}");
        }
    }
}

#[test]
fn test_larger_cycle_is_fixed_point() {
    let labels = ["n0", "n1", "n2", "n3", "n4"];
    let edges: Vec<(&str, &str)> = (0..labels.len())
        .map(|i| (labels[i], labels[(i + 1) % labels.len()]))
        .collect();
    let g = RankGraph::from_edges(edges);
    let ranks = g.compute_ranks(25).unwrap();
    for (_, r) in ranks.iter() {
        assert!(close(r, 0.2));
    }
}

#[test]
fn test_zero_in_degree_node_drops_to_zero() {
    let g = RankGraph::from_edges([("S", "A"), ("A", "B"), ("B", "A")]);
    for iterations in 2..=5 {
        let ranks = g.compute_ranks(iterations).unwrap();
        assert_eq!(rank(&ranks, "S"), 0.0, "at {iterations}");
    }
}

#[test]
fn test_mass_conserved_without_sinks() {
    // Every node has out-degree >= 1.
    let g = RankGraph::from_edges([("A", "B"), ("A", "C"), ("B", "C"), ("C", "A")]);
    let before = g.compute_ranks(1).unwrap().mass();

    for iterations in 2..=12 {
        let after = g.compute_ranks(iterations).unwrap().mass();
        assert!(close(before, after), "mass {after} at {iterations}");
    }
}

#[test]
fn test_known_values_after_one_pass() {
    let g = RankGraph::from_edges([("A", "B"), ("A", "C"), ("B", "C"), ("C", "A")]);
    let ranks = g.compute_ranks(2).unwrap();

    assert!(close(rank(&ranks, "A"), 1.0 / 3.0));
    assert!(close(rank(&ranks, "B"), 1.0 / 6.0));
    assert!(close(rank(&ranks, "C"), 0.5));
}

#[test]
fn test_sink_receives_but_does_not_propagate() {
    let g = RankGraph::from_edges([("A", "B"), ("B", "C")]);
    // C is a sink: mass reaching it is gone one pass later.
    let ranks = g.compute_ranks(3).unwrap();
    assert_eq!(rank(&ranks, "A"), 0.0);
    assert_eq!(rank(&ranks, "B"), 0.0);
    assert!(close(rank(&ranks, "C"), 1.0 / 3.0));

    let ranks = g.compute_ranks(4).unwrap();
    assert!(close(ranks.mass(), 0.0));
}

#[test]
fn test_parallel_edges_change_ranks() {
    let once = RankGraph::from_edges([("A", "B"), ("A", "C")]);
    let twice = RankGraph::from_edges([("A", "B"), ("A", "B"), ("A", "C")]);

    let r_once = once.compute_ranks(2).unwrap();
    let r_twice = twice.compute_ranks(2).unwrap();

    assert!(close(rank(&r_once, "B"), 1.0 / 6.0));
    assert!(close(rank(&r_twice, "B"), 2.0 / 9.0));
    assert!(close(rank(&r_twice, "C"), 1.0 / 9.0));
}

#[test]
fn test_self_loop_keeps_own_rank() {
    let g = RankGraph::from_edges([("A", "A"), ("B", "A")]);
    let ranks = g.compute_ranks(2).unwrap();
    // A: 0.5 from itself + 0.5 from B.
    assert!(close(rank(&ranks, "A"), 1.0));
    assert_eq!(rank(&ranks, "B"), 0.0);
}

#[test]
fn test_empty_graph_is_an_error() {
    let g = RankGraph::new();
    assert!(matches!(g.compute_ranks(3), Err(RankError::EmptyGraph)));
    assert!(matches!(
        pagerank::initialize_ranks(&g),
        Err(RankError::EmptyGraph)
    ));
}

#[test]
fn test_observer_sees_every_pass() {
    let g = RankGraph::from_edges([("A", "B"), ("B", "A")]);
    let mut seen = Vec::new();
    let ranks = pagerank::compute_with(&g, 5, |pass, ranks| seen.push((pass, ranks.mass())))
        .unwrap();

    assert_eq!(seen.iter().map(|(p, _)| *p).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert!(seen.iter().all(|(_, m)| close(*m, 1.0)));
    assert_eq!(ranks, g.compute_ranks(5).unwrap());
}

#[test]
fn test_observer_not_called_without_passes() {
    let g = RankGraph::from_edges([("A", "B")]);
    let mut calls = 0;
    pagerank::compute_with(&g, 1, |_, _| calls += 1).unwrap();
    assert_eq!(calls, 0);
}

#[test]
fn test_ranked_orders_by_score_then_label() {
    let g = RankGraph::from_edges([("A", "C"), ("B", "C"), ("C", "D"), ("C", "E")]);
    let ranks = g.compute_ranks(2).unwrap();
    let order: Vec<&str> = ranks.ranked().into_iter().map(|(l, _)| l).collect();
    // C gathers 0.4; D and E get 0.1 each; A and B drop to 0.
    assert_eq!(order, vec!["C", "D", "E", "A", "B"]);
}
