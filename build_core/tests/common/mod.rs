//! Shared helpers for integration tests

#![allow(dead_code)]

use build_core::{ForbiddenPairs, Item, ItemCatalog, Problem, SolveResult};
use std::path::Path;

/// Load the fixture catalog shipped with the tests
pub fn fixture_catalog() -> ItemCatalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/items.json");
    let content = std::fs::read_to_string(&path).expect("Failed to read fixture catalog");
    serde_json::from_str(&content).expect("Failed to parse fixture catalog")
}

/// Install a test subscriber once; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Best value over subsets of at most `max_items` items
pub fn brute_force_subsets(problem: &Problem) -> f64 {
    let n = problem.len();
    let mut best = 0.0_f64;
    for mask in 0_u32..(1 << n) {
        if mask.count_ones() as usize > problem.max_items() {
            continue;
        }
        let chosen = (0..n).filter(|i| mask & (1 << i) != 0);
        let (weight, value) = chosen.fold((0, 0.0), |(w, v), i| (w + problem.weight(i), v + problem.value(i)));
        if weight <= problem.capacity() && value > best {
            best = value;
        }
    }
    best
}

/// Best value over multisets of at most `max_items` items with no
/// forbidden pair between any two copies
pub fn brute_force_multisets(problem: &Problem, pairs: &ForbiddenPairs) -> f64 {
    fn search(
        problem: &Problem,
        pairs: &ForbiddenPairs,
        start: usize,
        chosen: &mut Vec<usize>,
        weight: usize,
        value: f64,
        best: &mut f64,
    ) {
        if value > *best {
            *best = value;
        }
        if chosen.len() == problem.max_items() {
            return;
        }
        for i in start..problem.len() {
            let next_weight = weight + problem.weight(i);
            if next_weight > problem.capacity() {
                continue;
            }
            if chosen.iter().any(|&j| pairs.contains(i, j)) {
                continue;
            }
            chosen.push(i);
            search(problem, pairs, i, chosen, next_weight, value + problem.value(i), best);
            chosen.pop();
        }
    }

    let mut best = 0.0;
    search(problem, pairs, 0, &mut Vec::new(), 0, 0.0, &mut best);
    best
}

/// Budget and item cap hold for a result
pub fn assert_feasible(problem: &Problem, result: &SolveResult) {
    assert!(
        result.total_weight(problem) <= problem.capacity(),
        "weight {} over capacity {}",
        result.total_weight(problem),
        problem.capacity()
    );
    assert!(
        result.len() <= problem.max_items(),
        "{} items over cap {}",
        result.len(),
        problem.max_items()
    );
    let sum: f64 = result.chosen_indices.iter().map(|&i| problem.value(i)).sum();
    assert!((sum - result.total_value).abs() < 1e-9);
}

/// No two entries of a result form a forbidden pair
pub fn assert_no_forbidden_pair(pairs: &ForbiddenPairs, indices: &[usize]) {
    for (pos, &j) in indices.iter().enumerate() {
        for &i in &indices[pos + 1..] {
            assert!(!pairs.contains(i, j), "forbidden pair ({}, {}) in {:?}", i, j, indices);
        }
    }
}

/// Names of catalog items, sorted
pub fn sorted_names<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<&'a str> {
    let mut names: Vec<&str> = items.into_iter().map(|i| i.name.as_str()).collect();
    names.sort_unstable();
    names
}
