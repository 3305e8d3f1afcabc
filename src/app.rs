use anyhow::Result;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::commands::{executor, handlers};
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging;
use crate::models::{RandomIdSource, Roster};
use crate::state::AppState;
use crate::ui::screens::Screen;

pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        // Create log buffer before initializing logging
        let log_buffer = LogBuffer::new(2000);
        let _log_path = init_logging(log_buffer.clone())?;

        tracing::info!("tally starting");

        let mut terminal = self.init()?;

        let mut ids = RandomIdSource;
        let roster = Roster::demo(&mut ids);
        let mut ui_state = AppState::new(roster);

        tracing::info!("Entering main event loop");

        loop {
            // Keep the logs screen's entry count current before drawing
            if let Screen::Logs(logs_state) = ui_state.current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state, &log_buffer);
            })?;

            // Blocking read: nothing happens between user events
            if let Event::Key(key) = crossterm::event::read()? {
                if matches!(key.kind, KeyEventKind::Press) {
                    // Don't log when on logs screen to avoid a feedback loop
                    let on_logs_screen = matches!(ui_state.current_screen(), Screen::Logs(_));
                    if let Some(command) = handlers::handle_key_input(KeyEvent::from(key), &ui_state)
                    {
                        if !on_logs_screen {
                            tracing::debug!("Executing command: {:?}", command);
                        }
                        executor::execute_command(command, &mut ui_state, &mut ids);
                    }
                }
            }

            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
