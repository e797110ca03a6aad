/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if self and other lie on different axes
    pub fn is_perpendicular(&self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Snapshot of the controls for one update.
///
/// Several directions may be held at once; they are considered in the
/// order up, down, left, right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Only honoured while the game is over or passed
    pub restart: bool,
}

impl InputState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Self::default()
        }
    }

    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    /// Held directions in evaluation order
    pub fn held_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .filter_map(|(held, dir)| held.then_some(dir))
    }
}

impl From<Direction> for InputState {
    fn from(direction: Direction) -> Self {
        let mut input = Self::default();
        input.press(direction);
        input
    }
}
