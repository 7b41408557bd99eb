use crate::config::AppConfig;
use crate::game::{GameEngine, MoveError, Outcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

pub struct App {
    engine: GameEngine,
    start_column: usize,
    poll_interval: Duration,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            engine: GameEngine::new().with_win_scan(config.game.win_scan),
            start_column: config.ui.start_column,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            selected_column: config.ui.start_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
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

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
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

        let last_column = self.engine.grid().width() - 1;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < last_column {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column as isize);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Columns are labelled from 1 on screen
                let col = c as isize - '1' as isize;
                if col as usize <= last_column {
                    self.selected_column = col as usize;
                }
                self.drop_piece(col);
            }
            KeyCode::Char('r') => {
                self.engine = GameEngine::new().with_win_scan(self.engine.win_scan());
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
                info!("new game");
            }
            _ => {}
        }
    }

    /// Drop a piece and turn the outcome into a status message
    fn drop_piece(&mut self, col: isize) {
        self.message = match self.engine.drop_piece(col) {
            Outcome::Continue(_) => None,
            Outcome::Win(player) => Some(format!("{player} won!")),
            Outcome::Tie => Some("This match is a tie".to_string()),
            Outcome::Rejected(MoveError::ColumnFull) => Some("Column is full!".to_string()),
            Outcome::Rejected(MoveError::InvalidColumn) => Some("Invalid column!".to_string()),
            Outcome::Rejected(MoveError::GameOver) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
