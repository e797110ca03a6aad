use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameState, StepInfo};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Updates per second; the snake moves every `speed`-th update
pub const UPDATE_RATE_HZ: u64 = 60;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    pub fn with_engine(mut engine: GameEngine) -> Self {
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "starting {}x{} game",
            self.engine.config().grid_width,
            self.engine.config().grid_height
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let update_interval = Duration::from_micros(1_000_000 / UPDATE_RATE_HZ);
        let mut update_timer = interval(update_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic update
                _ = update_timer.tick() => {
                    self.update_game(Instant::now());
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            "quitting after {} games, {} food eaten",
            self.metrics.games_played, self.metrics.food_eaten
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            if action == KeyAction::Quit {
                self.should_quit = true;
            }
            self.input_handler.record(&action);
        }
    }

    fn update_game(&mut self, now: Instant) -> StepInfo {
        let input = self.input_handler.take_snapshot();
        let info = self.engine.update(&mut self.state, &input, now);

        if info.collision_type.is_some() {
            debug!("collision: {:?}", info.collision_type);
        }
        self.metrics.record(&info, self.state.level);
        info
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Mode};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn quick_mode() -> HumanMode {
        let config = GameConfig {
            speed: 1,
            ..GameConfig::default()
        };
        HumanMode::with_engine(GameEngine::with_seed(config, 11))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert!(mode.state.is_playing());
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.lives, 3);
    }

    #[test]
    fn test_key_press_steers_next_update() {
        let mut mode = quick_mode();
        mode.state.food = crate::game::Position::new(0, 0);

        mode.handle_event(press(KeyCode::Up));
        let info = mode.update_game(Instant::now());

        assert!(info.moved);
        assert_eq!(mode.state.snake.direction, Direction::Up);

        // The press was consumed by that update
        mode.update_game(Instant::now());
        assert_eq!(mode.state.snake.direction, Direction::Up);
    }

    #[test]
    fn test_restart_key_after_game_over() {
        let mut mode = quick_mode();
        mode.state.mode = Mode::GameOver;
        mode.state.lives = 0;
        mode.state.level = 3;

        mode.handle_event(press(KeyCode::Char('r')));
        let info = mode.update_game(Instant::now());

        assert!(info.restarted);
        assert!(mode.state.is_playing());
        assert_eq!(mode.state.lives, 3);
        assert_eq!(mode.state.level, 1);
        assert_eq!(mode.metrics.best_level, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut mode = quick_mode();
        mode.handle_event(press(KeyCode::Esc));
        assert!(mode.should_quit);
    }
}
