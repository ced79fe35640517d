//! Walks the predecessor table backward from the finish.
//!
//! [`enumerate_optimal_paths`] materializes every optimal path and is
//! exponential in the number of ties, so it is only suitable for small grids.
//! [`optimal_cells`] and [`count_optimal_paths`] visit each state once and
//! are what the solver uses.

use super::grid::Cell;
use super::search::SearchOutcome;
use super::state::State;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Every minimum-cost path from the start state to `finish`, start first.
///
/// Uses an explicit worklist rather than recursion, so long corridors do not
/// grow the call stack. Returns nothing if `finish` was never reached.
///
/// # Panics
///
/// If a reached state other than the start has no predecessor.
pub fn enumerate_optimal_paths(outcome: &SearchOutcome, finish: State) -> Vec<Vec<State>> {
    if outcome.distance(&finish).is_none() {
        return Vec::new();
    }

    let start = outcome.start();
    let mut complete = Vec::new();
    // Partial paths are kept finish-first and reversed once they reach start
    let mut pending: Vec<(State, Vec<State>)> = vec![(finish, vec![finish])];

    while let Some((head, partial)) = pending.pop() {
        if head == start {
            complete.push(partial.into_iter().rev().collect());
            continue;
        }

        let mut predecessors = outcome.predecessors(&head).peekable();
        assert!(
            predecessors.peek().is_some(),
            "{head} was reached but has no predecessor"
        );
        for pred in predecessors {
            let mut extended = partial.clone();
            extended.push(pred);
            pending.push((pred, extended));
        }
    }

    complete
}

/// States lying on at least one optimal path to any best finish state
pub fn optimal_states(outcome: &SearchOutcome) -> HashSet<State> {
    let start = outcome.start();
    let mut seen: HashSet<State> = outcome.best_finish_states().into_iter().collect();
    let mut stack: Vec<State> = seen.iter().copied().collect();

    while let Some(state) = stack.pop() {
        let mut has_predecessor = false;
        for pred in outcome.predecessors(&state) {
            has_predecessor = true;
            if seen.insert(pred) {
                stack.push(pred);
            }
        }
        assert!(
            has_predecessor || state == start,
            "{state} was reached but has no predecessor"
        );
    }

    seen
}

/// Distinct tiles covered by the union of all optimal paths.
///
/// Empty when the finish is unreachable.
pub fn optimal_cells(outcome: &SearchOutcome) -> BTreeSet<Cell> {
    optimal_states(outcome)
        .into_iter()
        .map(|state| state.cell)
        .collect()
}

/// Number of distinct optimal paths, summed over every best finish heading.
///
/// Saturates at `u128::MAX`.
pub fn count_optimal_paths(outcome: &SearchOutcome) -> u128 {
    let start = outcome.start();
    let mut states: Vec<State> = optimal_states(outcome).into_iter().collect();
    // Predecessors are strictly closer, so ascending distance is a
    // topological order of the predecessor graph
    states.sort_by_key(|state| (outcome.distance(state), *state));

    let mut counts: HashMap<State, u128> = HashMap::with_capacity(states.len());
    for state in states {
        let count = if state == start {
            1
        } else {
            outcome
                .predecessors(&state)
                .map(|pred| counts.get(&pred).copied().unwrap_or(0))
                .fold(0u128, u128::saturating_add)
        };
        counts.insert(state, count);
    }

    outcome
        .best_finish_states()
        .iter()
        .map(|state| counts.get(state).copied().unwrap_or(0))
        .fold(0, u128::saturating_add)
}
