use crate::{Coords, GridInt, GRID_SIZE, START_POS};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Integer encoding: 0 = North, 1 = East, 2 = South, 3 = West.
    pub fn index(self) -> u8 {
        match self {
            North => 0,
            East => 1,
            South => 2,
            West => 3,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (North, South) | (South, North) | (East, West) | (West, East)
        )
    }
}

impl Default for Direction {
    fn default() -> Self {
        North
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { old_tail: Coords },
    Collided,
}

/// The snake body, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Coords>,
}

impl Snake {
    pub fn new() -> Self {
        Snake { body: vec![START_POS] }
    }

    #[cfg(test)]
    /// Builds a snake from explicit segments, head first. Falls back to the
    /// default snake when `body` is empty.
    pub fn from_segments(body: Vec<Coords>) -> Self {
        if body.is_empty() {
            return Snake::new();
        }
        Snake { body }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn tail(&self) -> Coords {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Truncates the snake back to the single starting segment.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push(START_POS);
    }

    pub fn grow(&mut self, at: Coords) {
        self.body.push(at);
    }

    /// Moves every segment one step toward the head and the head one cell
    /// in `direction`. A segment already sitting on the head cell counts as
    /// a collision: the snake is reset and nothing moves.
    pub fn advance(&mut self, direction: Direction) -> MoveResult {
        let old_head = self.head();
        let old_tail = self.tail();

        if self.body[1..].contains(&old_head) {
            self.reset();
            return Collided;
        }

        let mut next = Vec::with_capacity(self.body.len());
        next.push(step(old_head, direction));
        next.extend_from_slice(&self.body[..self.body.len() - 1]);
        self.body = next;

        Moved { old_tail }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new()
    }
}

/// The neighbouring cell in `direction`, wrapping at the grid edges.
pub fn step(pos: Coords, direction: Direction) -> Coords {
    let (x, y) = pos;
    match direction {
        North => (x, wrap(y - 1)),
        East => (wrap(x + 1), y),
        South => (x, wrap(y + 1)),
        West => (wrap(x - 1), y),
    }
}

fn wrap(v: GridInt) -> GridInt {
    v.rem_euclid(GRID_SIZE)
}
