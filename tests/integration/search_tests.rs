use autograf::graph::{generators, AdjacencyGraph};
use autograf::{automorphisms, automorphisms_with_colors};

#[test]
fn complete_graph_has_the_full_symmetric_group() {
    let report = automorphisms(&generators::complete(4).unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 24.0);
    assert_eq!(report.stats.generators, 3);
    assert_eq!(report.stats.max_support, 2);
    assert_eq!(report.stats.levels, 4);
    assert_eq!(report.orbits.orbit_count(), 1);
}

#[test]
fn path_graph_admits_only_the_reversal() {
    let report = automorphisms(&generators::path(4).unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 2.0);
    assert_eq!(report.stats.generators, 1);
    assert_eq!(report.stats.max_support, 4);
    assert_eq!(report.orbits.ids(), &[0, 1, 1, 0]);
}

#[test]
fn star_fixes_the_hub_and_permutes_the_leaves() {
    let report = automorphisms(&generators::star(5).unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 24.0);
    assert_eq!(report.orbits.ids(), &[0, 1, 1, 1, 1]);
    assert_eq!(report.orbits.orbit_count(), 2);
}

#[test]
fn unbalanced_bipartite_parts_cannot_swap() {
    let report = automorphisms(&generators::complete_bipartite(2, 3).unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 12.0);
    assert_eq!(report.orbits.ids(), &[0, 0, 2, 2, 2]);
}

#[test]
fn balanced_bipartite_parts_swap() {
    let report = automorphisms(&generators::complete_bipartite(2, 2).unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 8.0);
    assert_eq!(report.orbits.orbit_count(), 1);
    assert_eq!(report.stats.max_support, 4);
}

#[test]
fn four_cycle_has_the_dihedral_group_of_order_eight() {
    let report = automorphisms(&generators::cycle(4).unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 8.0);
    assert_eq!(report.orbits.orbit_count(), 1);
}

#[test]
fn six_cycle_has_the_dihedral_group() {
    let report = automorphisms(&generators::cycle(6).unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 12.0);
    assert_eq!(report.orbits.orbit_count(), 1);
}

#[test]
fn petersen_graph_is_vertex_transitive_with_order_120() {
    let report = automorphisms(&generators::petersen().unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 120.0);
    assert_eq!(report.stats.levels, 10);
    assert_eq!(report.orbits.orbit_count(), 1);
}

#[test]
fn edgeless_graph_admits_every_permutation() {
    let report = automorphisms(&generators::empty(3).unwrap()).unwrap();
    assert_eq!(report.stats.group_size().round(), 6.0);
    assert_eq!(report.orbits.orbit_count(), 1);
}

#[test]
fn large_orders_split_into_base_and_exponent() {
    let report = automorphisms(&generators::complete(7).unwrap()).unwrap();
    assert_eq!(report.stats.group_size_exp, 3);
    assert!(report.stats.group_size_base >= 1.0 && report.stats.group_size_base < 10.0);
    assert_eq!(report.stats.group_size().round(), 5040.0);
}

#[test]
fn directed_cycle_keeps_only_the_rotations() {
    let g = AdjacencyGraph::directed(vec![vec![1], vec![2], vec![0]]).unwrap();
    let report = automorphisms(&g).unwrap();
    assert_eq!(report.stats.group_size().round(), 3.0);
    assert_eq!(report.stats.generators, 1);
    assert_eq!(report.stats.max_support, 3);
    assert_eq!(report.orbits.orbit_count(), 1);
}

#[test]
fn directed_path_is_rigid() {
    let g = AdjacencyGraph::directed(vec![vec![1], vec![2], vec![]]).unwrap();
    let report = automorphisms(&g).unwrap();
    assert_eq!(report.stats.group_size().round(), 1.0);
    assert_eq!(report.stats.generators, 0);
    assert_eq!(report.orbits.ids(), &[0, 1, 2]);
}

#[test]
fn colors_matching_the_reversal_keep_it() {
    let report =
        automorphisms_with_colors(&generators::path(3).unwrap(), &[0, 1, 0]).unwrap();
    assert_eq!(report.stats.group_size().round(), 2.0);
    assert!(report.orbits.same_orbit(0, 2));
}

#[test]
fn colors_breaking_the_reversal_leave_the_identity() {
    let report =
        automorphisms_with_colors(&generators::path(3).unwrap(), &[0, 1, 1]).unwrap();
    assert_eq!(report.stats.group_size().round(), 1.0);
    assert_eq!(report.orbits.ids(), &[0, 1, 2]);
}

#[test]
fn a_uniquely_colored_center_stays_a_singleton() {
    // Two leaves off one center; the leaves stay interchangeable, the
    // center keeps its own orbit.
    let report = automorphisms_with_colors(&generators::star(3).unwrap(), &[0, 1, 1]).unwrap();
    assert_eq!(report.stats.group_size().round(), 2.0);
    assert_eq!(report.orbits.ids(), &[0, 1, 1]);
}

#[test]
fn gapped_color_numbering_still_constrains_the_search() {
    // Colors 0 and 2, nothing colored 1. Valid, just not compact.
    let report =
        automorphisms_with_colors(&generators::path(3).unwrap(), &[0, 2, 2]).unwrap();
    assert_eq!(report.stats.group_size().round(), 1.0);
}

#[test]
fn parallel_edges_separate_the_pair_orbits() {
    // 0-1 doubled, 2-3 single: each pair swaps internally, but the pairs
    // cannot exchange across different edge multiplicities.
    let g = AdjacencyGraph::undirected(vec![vec![1, 1], vec![], vec![3], vec![]]).unwrap();
    let report = automorphisms(&g).unwrap();
    assert_eq!(report.stats.group_size().round(), 4.0);
    assert_eq!(report.stats.generators, 2);
    assert_eq!(report.orbits.ids(), &[0, 0, 2, 2]);
    assert!(!report.orbits.same_orbit(0, 2));
}

#[test]
fn matched_parallel_edges_let_the_pairs_exchange() {
    let g = AdjacencyGraph::undirected(vec![vec![1, 1], vec![], vec![3, 3], vec![]]).unwrap();
    let report = automorphisms(&g).unwrap();
    assert_eq!(report.stats.group_size().round(), 8.0);
    assert_eq!(report.orbits.orbit_count(), 1);
    assert_eq!(report.stats.max_support, 4);
}

#[test]
fn matching_self_loops_preserve_the_swap() {
    let g = AdjacencyGraph::undirected(vec![vec![0, 1], vec![1]]).unwrap();
    let report = automorphisms(&g).unwrap();
    assert_eq!(report.stats.group_size().round(), 2.0);
    assert_eq!(report.orbits.ids(), &[0, 0]);
}

#[test]
fn a_single_self_loop_breaks_the_swap() {
    let g = AdjacencyGraph::undirected(vec![vec![0, 1], vec![]]).unwrap();
    let report = automorphisms(&g).unwrap();
    assert_eq!(report.stats.group_size().round(), 1.0);
    assert_eq!(report.orbits.ids(), &[0, 1]);
}
