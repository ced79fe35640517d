//! Tie-preserving Dijkstra over `(cell, heading)` states.

use super::bucket_queue::{BucketQueue, DEFAULT_BUCKET_WIDTH};
use super::grid::{Cell, Grid};
use super::state::{Heading, State};
use log::{debug, info, trace};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Heading the reindeer faces on the start tile
pub const START_HEADING: Heading = Heading::East;

const PROGRESS_INTERVAL: usize = 1000;

/// Distance and predecessor tables left behind by [`search`].
///
/// States never reached have no distance. Predecessor sets hold every state
/// that reaches the key at its recorded distance, so all tied optimal paths
/// can be recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    start: State,
    finish: Cell,
    distances: HashMap<State, u64>,
    predecessors: HashMap<State, BTreeSet<State>>,
    visited: HashSet<State>,
}

impl SearchOutcome {
    pub fn start(&self) -> State {
        self.start
    }

    pub fn finish(&self) -> Cell {
        self.finish
    }

    pub fn distance(&self, state: &State) -> Option<u64> {
        self.distances.get(state).copied()
    }

    /// Every state with a recorded distance
    pub fn distances(&self) -> impl Iterator<Item = (State, u64)> + '_ {
        self.distances.iter().map(|(&state, &distance)| (state, distance))
    }

    /// Tied best predecessors of `state`, empty for the start state
    pub fn predecessors(&self, state: &State) -> impl Iterator<Item = State> + '_ {
        self.predecessors.get(state).into_iter().flatten().copied()
    }

    pub fn is_visited(&self, state: &State) -> bool {
        self.visited.contains(state)
    }

    /// Minimum cost to stand on the finish tile with any heading
    pub fn best_finish_distance(&self) -> Option<u64> {
        Heading::ALL
            .into_iter()
            .filter_map(|heading| self.distance(&State::new(self.finish, heading)))
            .min()
    }

    /// Finish states whose distance equals [`Self::best_finish_distance`]
    pub fn best_finish_states(&self) -> Vec<State> {
        let Some(best) = self.best_finish_distance() else {
            return Vec::new();
        };
        Heading::ALL
            .into_iter()
            .map(|heading| State::new(self.finish, heading))
            .filter(|state| self.distance(state) == Some(best))
            .collect()
    }
}

/// Run the search from the grid's start, facing east.
///
/// The loop stops once the queue's next priority exceeds the best finish
/// distance, after every state tied with that distance has been settled, or
/// when the queue runs dry. An unreachable finish is not an error: the
/// outcome simply has no finish distance.
pub fn search(grid: &Grid) -> SearchOutcome {
    search_with_observer(grid, |_, _| {})
}

/// [`search`], calling `on_distance(state, distance)` every time a state's
/// recorded distance is set, starting with the start state at 0.
pub fn search_with_observer<F>(grid: &Grid, mut on_distance: F) -> SearchOutcome
where
    F: FnMut(State, u64),
{
    let start = State::new(grid.start(), START_HEADING);
    let finish = grid.finish();

    let mut distances: HashMap<State, u64> = HashMap::from([(start, 0)]);
    on_distance(start, 0);
    let mut predecessors: HashMap<State, BTreeSet<State>> = HashMap::new();
    let mut visited: HashSet<State> = HashSet::new();
    let mut queue = BucketQueue::new(DEFAULT_BUCKET_WIDTH);
    queue.insert_or_update(start, 0);

    let total_states = grid.free_cell_count() * Heading::ALL.len();
    let mut best_finish: Option<u64> = None;

    while let Some((current, priority)) = queue.pop_min() {
        if best_finish.is_some_and(|best| priority > best) {
            debug!("all states tied with the best finish settled, stopping");
            break;
        }
        if !visited.insert(current) {
            continue;
        }

        if visited.len() % PROGRESS_INTERVAL == 0 {
            debug!(
                "{}% of map explored (visited={}/{}, queued={})",
                visited.len() * 100 / total_states.max(1),
                visited.len(),
                total_states,
                queue.len()
            );
            trace!("bucket occupancy: {:?}", queue.occupancy());
        }

        let Some(&distance) = distances.get(&current) else {
            unreachable!("popped {current} without a recorded distance");
        };
        debug_assert_eq!(distance, priority);

        if current.cell == finish && best_finish.is_none() {
            info!("Finish found, distance={}", distance);
            best_finish = Some(distance);
        }

        for (next, cost) in current.neighbors().edges() {
            if !grid.is_free(next.cell) {
                continue;
            }
            let tentative = distance + cost;
            match distances.get(&next) {
                Some(&known) if tentative > known => {}
                Some(&known) if tentative == known => {
                    predecessors.entry(next).or_default().insert(current);
                }
                _ => {
                    distances.insert(next, tentative);
                    on_distance(next, tentative);
                    predecessors.insert(next, BTreeSet::from([current]));
                    if !visited.contains(&next) {
                        queue.insert_or_update(next, tentative);
                    }
                }
            }
        }
    }

    if best_finish.is_none() {
        info!("finish {} is unreachable from {}", finish, start);
    }

    SearchOutcome {
        start,
        finish,
        distances,
        predecessors,
        visited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::year_2024::day_16::fixtures;
    use crate::my_solutions::year_2024::day_16::state::{FORWARD_COST, TURN_COST};

    fn run(input: &str) -> SearchOutcome {
        search(&Grid::parse(input).unwrap())
    }

    #[test]
    fn test_straight_corridor() {
        let outcome = run(fixtures::STRAIGHT);
        assert_eq!(outcome.best_finish_distance(), Some(2 * FORWARD_COST));
        assert_eq!(
            outcome.best_finish_states(),
            vec![State::new(Cell::new(3, 1), Heading::East)]
        );
    }

    #[test]
    fn test_single_turn() {
        let outcome = run(fixtures::SINGLE_TURN);
        assert_eq!(outcome.best_finish_distance(), Some(6 * FORWARD_COST + TURN_COST));
        assert_eq!(
            outcome.best_finish_states(),
            vec![State::new(Cell::new(4, 1), Heading::North)]
        );
    }

    #[test]
    fn test_unreachable_finish() {
        let outcome = run(fixtures::WALLED_OFF);
        assert_eq!(outcome.best_finish_distance(), None);
        assert!(outcome.best_finish_states().is_empty());
        assert!(outcome.is_visited(&outcome.start()));
    }

    #[test]
    fn test_start_state_has_no_predecessors() {
        let outcome = run(fixtures::STRAIGHT);
        let start = outcome.start();
        assert_eq!(start.heading, START_HEADING);
        assert_eq!(outcome.distance(&start), Some(0));
        assert_eq!(outcome.predecessors(&start).count(), 0);
    }

    #[test]
    fn test_symmetric_detour_records_both_arrivals() {
        let outcome = run(fixtures::SYMMETRIC_DETOUR);
        assert_eq!(outcome.best_finish_distance(), Some(3008));
        assert_eq!(
            outcome.best_finish_states(),
            vec![
                State::new(Cell::new(5, 3), Heading::North),
                State::new(Cell::new(5, 3), Heading::South),
            ]
        );
    }

    #[test]
    fn test_predecessor_edges_are_tight() {
        let outcome = run(fixtures::EXAMPLE_ONE);
        for (state, distance) in outcome.distances() {
            for pred in outcome.predecessors(&state) {
                let pred_distance = outcome.distance(&pred).unwrap();
                let cost = pred.edge_cost(state).unwrap();
                assert_eq!(pred_distance + cost, distance, "{pred} -> {state}");
            }
        }
    }

    #[test]
    fn test_recorded_distances_only_decrease() {
        let grid = Grid::parse(fixtures::EXAMPLE_ONE).unwrap();
        let mut latest: HashMap<State, u64> = HashMap::new();
        let outcome = search_with_observer(&grid, |state, distance| {
            if let Some(previous) = latest.insert(state, distance) {
                assert!(distance < previous, "{state}: {previous} -> {distance}");
            }
        });

        assert_eq!(latest.len(), outcome.distances().count());
        for (state, distance) in outcome.distances() {
            assert_eq!(latest.get(&state), Some(&distance), "{state}");
        }
    }

    #[test]
    fn test_deterministic() {
        let grid = Grid::parse(fixtures::EXAMPLE_TWO).unwrap();
        assert_eq!(search(&grid), search(&grid));
    }
}
