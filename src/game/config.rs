use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Lives at the start of a run
    pub initial_lives: u32,
    /// The snake moves once every `speed` updates
    pub speed: u32,
    /// Last playable level; passing it wins the game
    pub max_level: u32,
    /// Food needed per level number to pass a level
    pub points_per_level: u32,

    // Obstacles
    /// First level that has obstacles
    pub obstacle_start_level: u32,
    /// Obstacle candidates placed on top of the level number
    pub base_obstacles: u32,

    /// How long the level passed / failed banners hold the game
    pub hold_delay: Duration,
    /// Random attempts before food placement scans for free cells
    pub max_food_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 20,
            initial_lives: 3,
            speed: 6,
            max_level: 4,
            points_per_level: 1,
            obstacle_start_level: 3,
            base_obstacles: 5,
            hold_delay: Duration::from_secs(3),
            max_food_attempts: 1000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Food needed to pass `level`
    pub fn level_threshold(&self, level: u32) -> u32 {
        level * self.points_per_level
    }

    /// Number of obstacle candidates rolled for `level`
    pub fn obstacle_candidates(&self, level: u32) -> u32 {
        if level >= self.obstacle_start_level {
            self.base_obstacles + level
        } else {
            0
        }
    }

    /// Check that the configuration describes a playable game
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.grid_width > i32::MAX as usize || self.grid_height > i32::MAX as usize {
            return Err("grid dimensions must fit in i32".to_string());
        }

        if self.grid_width * self.grid_height < 2 {
            return Err("grid needs room for both the snake and the food".to_string());
        }

        if self.speed == 0 {
            return Err("speed must be at least 1".to_string());
        }

        if self.initial_lives == 0 {
            return Err("initial_lives must be at least 1".to_string());
        }

        if self.max_level == 0 {
            return Err("max_level must be at least 1".to_string());
        }

        if self.points_per_level == 0 {
            return Err("points_per_level must be at least 1".to_string());
        }

        Ok(())
    }
}
