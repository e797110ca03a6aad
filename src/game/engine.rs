use super::{
    action::{Direction, InputState},
    config::GameConfig,
    state::{CollisionType, GameState, Mode, Position, Snake},
};
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Instant;

/// What happened during one update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake advanced a cell this update
    pub moved: bool,
    /// Whether the snake ate food this update
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Level that was just cleared
    pub level_passed: Option<u32>,
    /// The hold ended and play resumed
    pub resumed: bool,
    pub game_over: bool,
    pub game_passed: bool,
    pub restarted: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration.
    ///
    /// The configuration must pass [`GameConfig::validate`]; a zero speed or
    /// an empty grid would make updates panic.
    pub fn new(config: GameConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid game config");
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food and obstacle rolls are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid game config");
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Cell the snake starts from and returns to after losing a life
    pub fn start_position(&self) -> Position {
        Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        )
    }

    fn start_snake(&self) -> Snake {
        Snake::new(self.start_position(), Direction::Right, 1)
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let snake = self.start_snake();
        let head = snake.head();
        let mut state = GameState::new(
            snake,
            head,
            self.config.grid_width,
            self.config.grid_height,
            self.config.initial_lives,
        );
        state.food = self.spawn_food(&state).unwrap_or(head);

        debug!("new game, food at {:?}", state.food);
        state
    }

    /// Advance the game by one update
    pub fn update(&mut self, state: &mut GameState, input: &InputState, now: Instant) -> StepInfo {
        match state.mode {
            Mode::GameOver | Mode::GamePassed => {
                if input.restart {
                    info!("restarting from {:?}", state.mode);
                    *state = self.reset();
                    return StepInfo {
                        restarted: true,
                        ..StepInfo::default()
                    };
                }
                StepInfo::default()
            }
            Mode::LevelFailed { since } | Mode::LevelPassed { since } => {
                if now.saturating_duration_since(since) > self.config.hold_delay {
                    self.start_level(state);
                    state.mode = Mode::Playing;
                    return StepInfo {
                        resumed: true,
                        ..StepInfo::default()
                    };
                }
                StepInfo::default()
            }
            Mode::Playing => self.tick(state, input, now),
        }
    }

    fn tick(&mut self, state: &mut GameState, input: &InputState, now: Instant) -> StepInfo {
        for direction in input.held_directions() {
            state.snake.steer(direction);
        }

        state.frame_count += 1;
        if state.frame_count % u64::from(self.config.speed) != 0 {
            return StepInfo::default();
        }

        let new_head = state.snake.next_head();

        if let Some(collision_type) = self.check_collision(state, new_head) {
            self.lose_life(state, now);
            return StepInfo {
                moved: false,
                collision_type: Some(collision_type),
                game_over: state.mode == Mode::GameOver,
                ..StepInfo::default()
            };
        }

        let ate_food = new_head == state.food;
        state.snake.move_snake(ate_food);

        let mut info = StepInfo {
            moved: true,
            ate_food,
            ..StepInfo::default()
        };

        if ate_food {
            state.score += 1;
            if let Some(food) = self.spawn_food(state) {
                state.food = food;
            }

            if state.score >= self.config.level_threshold(state.level) {
                info.level_passed = Some(state.level);
                state.level += 1;
                state.score = 0;

                if state.level > self.config.max_level {
                    state.level = self.config.max_level;
                    state.mode = Mode::GamePassed;
                    info.game_passed = true;
                    info!("all {} levels passed", self.config.max_level);
                } else {
                    state.mode = Mode::LevelPassed { since: now };
                    info!("level passed, next level {}", state.level);
                }
            }
        }

        info
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        // Check wall collision
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // Check self-collision
        if state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        if state.is_obstacle(pos) {
            return Some(CollisionType::Obstacle);
        }

        None
    }

    fn lose_life(&self, state: &mut GameState, now: Instant) {
        state.lives = state.lives.saturating_sub(1);
        state.score = 0;
        state.snake = self.start_snake();

        if state.lives == 0 {
            state.mode = Mode::GameOver;
            info!("game over on level {}", state.level);
        } else {
            state.mode = Mode::LevelFailed { since: now };
            info!("life lost, {} left", state.lives);
        }
    }

    /// Fresh obstacles and food for the current level
    fn start_level(&mut self, state: &mut GameState) {
        self.place_obstacles(state);
        if let Some(food) = self.spawn_food(state) {
            state.food = food;
        }
        debug!(
            "level {} starts with {} obstacles",
            state.level,
            state.obstacles.len()
        );
    }

    /// Roll the obstacles for the current level.
    ///
    /// Each candidate cell is tried once; candidates that land on the snake,
    /// the food, or an earlier obstacle are dropped, so a level has at most
    /// `base_obstacles + level` of them.
    pub fn place_obstacles(&mut self, state: &mut GameState) {
        state.obstacles.clear();

        for _ in 0..self.config.obstacle_candidates(state.level) {
            let pos = self.random_cell();
            if !state.is_occupied(pos) && pos != state.food {
                state.obstacles.push(pos);
            }
        }
    }

    /// Spawn food at a random empty position, or None when the board is full
    pub fn spawn_food(&mut self, state: &GameState) -> Option<Position> {
        for _ in 0..self.config.max_food_attempts {
            let pos = self.random_cell();
            if !state.is_occupied(pos) {
                return Some(pos);
            }
        }

        // Crowded board: pick among the cells that are actually free
        let free: Vec<Position> = (0..self.config.grid_height as i32)
            .flat_map(|y| (0..self.config.grid_width as i32).map(move |x| Position::new(x, y)))
            .filter(|pos| !state.is_occupied(*pos))
            .collect();

        if free.is_empty() {
            None
        } else {
            Some(free[self.rng.gen_range(0..free.len())])
        }
    }

    fn random_cell(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_width) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height) as i32;
        Position::new(x, y)
    }
}
