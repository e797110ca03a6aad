use std::time::{Duration, Instant};

use crate::game::StepInfo;

/// Session statistics kept in memory for the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub food_eaten: u32,
    pub best_level: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            food_eaten: 0,
            best_level: 1,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Fold one engine update into the session totals
    pub fn record(&mut self, info: &StepInfo, level: u32) {
        if info.ate_food {
            self.food_eaten += 1;
        }
        if info.restarted {
            self.on_game_start();
        }
        if info.game_over || info.game_passed {
            self.games_played += 1;
        }
        self.best_level = self.best_level.max(level);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_records_food_and_levels() {
        let mut metrics = GameMetrics::new();

        let eat = StepInfo {
            moved: true,
            ate_food: true,
            ..StepInfo::default()
        };
        metrics.record(&eat, 1);
        assert_eq!(metrics.food_eaten, 1);
        assert_eq!(metrics.best_level, 1);

        let passed = StepInfo {
            level_passed: Some(2),
            ..eat.clone()
        };
        metrics.record(&passed, 3);
        assert_eq!(metrics.food_eaten, 2);
        assert_eq!(metrics.best_level, 3);

        // Level never goes down after a restart
        metrics.record(&StepInfo::default(), 1);
        assert_eq!(metrics.best_level, 3);
    }

    #[test]
    fn test_counts_finished_games() {
        let mut metrics = GameMetrics::new();

        let over = StepInfo {
            game_over: true,
            ..StepInfo::default()
        };
        metrics.record(&over, 2);
        assert_eq!(metrics.games_played, 1);

        let won = StepInfo {
            game_passed: true,
            level_passed: Some(4),
            ..StepInfo::default()
        };
        metrics.record(&won, 4);
        assert_eq!(metrics.games_played, 2);
        assert_eq!(metrics.best_level, 4);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        let restart = StepInfo {
            restarted: true,
            ..StepInfo::default()
        };
        metrics.record(&restart, 1);
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
