use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameEngine, GameOutcome, Player, TurnEvent, COLS};
use crate::input::PlayerInput;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    engine: GameEngine,
    config: AppConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            engine: GameEngine::new().with_forfeit_token(config.game.forfeit_token.clone()),
            config,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '0'..='6') => {
                self.selected_column = c as usize - '0' as usize;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.submit(PlayerInput::Column(self.selected_column));
            }
            KeyCode::Char('f' | 'F') => {
                self.submit(PlayerInput::Forfeit);
            }
            KeyCode::Char('r' | 'R') => {
                // Reset game
                self.engine = GameEngine::new()
                    .with_forfeit_token(self.config.game.forfeit_token.clone());
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn name(&self, player: Player) -> &str {
        self.config.player_name(player)
    }

    fn outcome_message(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Winner(player) => format!("{} wins!", self.name(player)),
            GameOutcome::Draw => "It's a draw!".to_string(),
        }
    }

    /// Play one turn for whoever is to move
    fn submit(&mut self, input: PlayerInput) {
        match self.engine.play_turn(input) {
            Ok(TurnEvent::Placed { .. }) => {}
            Ok(TurnEvent::Forfeited { player, winner }) => {
                self.message = Some(format!(
                    "{} forfeits. {}",
                    self.name(player),
                    self.outcome_message(GameOutcome::Winner(winner))
                ));
            }
            Ok(TurnEvent::Won { player, .. }) => {
                self.message = Some(self.outcome_message(GameOutcome::Winner(player)));
            }
            Ok(TurnEvent::Drawn { .. }) => {
                self.message = Some(self.outcome_message(GameOutcome::Draw));
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                tracing::debug!(column = self.selected_column, "{err}");
                self.message = Some(format!("Invalid move: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            &self.config,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
