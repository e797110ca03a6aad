use std::time::Instant;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction of the last movement step
    pub direction: Direction,
    /// Direction the next movement step will take
    pub next_direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self {
            body,
            direction,
            next_direction: direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Queue a turn. Only turns onto the other axis than the last step's
    /// are accepted, so the head can never fold back onto the neck. The
    /// first accepted turn holds until the snake has moved.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_perpendicular(direction) && self.next_direction == self.direction {
            self.next_direction = direction;
            true
        } else {
            false
        }
    }

    /// Where the head lands on the next movement step
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.next_direction)
    }

    /// Move snake in the queued direction, growing if should_grow is true
    pub fn move_snake(&mut self, should_grow: bool) {
        let new_head = self.next_head();
        self.direction = self.next_direction;
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Snake hit an obstacle
    Obstacle,
}

/// What the game is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Playing,
    /// A life was lost; play resumes once the hold delay has passed
    LevelFailed { since: Instant },
    /// The level was cleared; the next one starts after the hold delay
    LevelPassed { since: Instant },
    GameOver,
    GamePassed,
}

impl Mode {
    /// Game over and game passed only end with a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::GameOver | Mode::GamePassed)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub obstacles: Vec<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub frame_count: u64,
    pub mode: Mode,
}

impl GameState {
    /// Create a new game state at level 1 with no obstacles
    pub fn new(
        snake: Snake,
        food: Position,
        grid_width: usize,
        grid_height: usize,
        lives: u32,
    ) -> Self {
        Self {
            snake,
            food,
            obstacles: Vec::new(),
            grid_width,
            grid_height,
            score: 0,
            level: 1,
            lives,
            frame_count: 0,
            mode: Mode::Playing,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// Check if food or an obstacle may not be placed at a position
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.is_occupied_by_snake(pos) || self.is_obstacle(pos)
    }

    pub fn is_playing(&self) -> bool {
        self.mode == Mode::Playing
    }

    /// Status line shown above the board
    pub fn hud_text(&self) -> String {
        format!(
            "Score: {} | Lives: {} | Level: {}",
            self.score, self.lives, self.level
        )
    }

    /// Banner for the current mode, if any
    pub fn status_text(&self) -> Option<&'static str> {
        match self.mode {
            Mode::Playing => None,
            Mode::GameOver => Some("GAME OVER! Press R to Restart"),
            Mode::GamePassed => Some("CONGRATULATIONS! You have passed all levels!"),
            Mode::LevelPassed { .. } => Some("LEVEL PASSED! Starting next level..."),
            Mode::LevelFailed { .. } => Some("LEVEL FAILED! Starting current level..."),
        }
    }
}
