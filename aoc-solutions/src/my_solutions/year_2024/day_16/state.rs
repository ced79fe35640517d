use super::grid::Cell;
use std::fmt;

/// Cost of stepping one tile forward
pub const FORWARD_COST: u64 = 1;
/// Cost of rotating 90 degrees in place
pub const TURN_COST: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub const fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }

    pub const fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit displacement `(dx, dy)` with `y` growing south
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self {
            Heading::North => '^',
            Heading::East => '>',
            Heading::South => 'v',
            Heading::West => '<',
        };
        write!(f, "{}", arrow)
    }
}

/// A tile together with the direction the reindeer faces on it.
///
/// Ordering is by cell, then heading; the search uses it to break priority
/// ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub cell: Cell,
    pub heading: Heading,
}

/// Candidate moves out of a [`State`].
///
/// `forward` is only a candidate: the caller checks the target tile against
/// the grid. Turns stay on the current tile and are always traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub forward: Option<State>,
    pub turn_left: State,
    pub turn_right: State,
}

impl Neighbors {
    /// Each candidate paired with the cost of the edge leading to it
    pub fn edges(&self) -> impl Iterator<Item = (State, u64)> {
        self.forward
            .map(|state| (state, FORWARD_COST))
            .into_iter()
            .chain([(self.turn_left, TURN_COST), (self.turn_right, TURN_COST)])
    }
}

impl State {
    pub const fn new(cell: Cell, heading: Heading) -> Self {
        Self { cell, heading }
    }

    pub fn neighbors(self) -> Neighbors {
        let (dx, dy) = self.heading.delta();
        Neighbors {
            forward: self
                .cell
                .offset(dx, dy)
                .map(|cell| State::new(cell, self.heading)),
            turn_left: State::new(self.cell, self.heading.turn_left()),
            turn_right: State::new(self.cell, self.heading.turn_right()),
        }
    }

    /// Cost of the single edge `self -> next`, or `None` if `next` is not
    /// one move away.
    pub fn edge_cost(self, next: State) -> Option<u64> {
        self.neighbors()
            .edges()
            .find(|&(state, _)| state == next)
            .map(|(_, cost)| cost)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cell, self.heading)
    }
}
