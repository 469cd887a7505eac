use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;

/// Timeout for event polling - allows periodic refresh while lines stream in
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        let lines = self.config.viewport.scroll_lines;
        let columns = self.config.viewport.scroll_columns;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(0, lines),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(0, -lines),
            KeyCode::Char('l') | KeyCode::Right => self.scroll_by(columns, 0),
            KeyCode::Char('h') | KeyCode::Left => self.scroll_by(-columns, 0),

            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(0, self.page_height()),
            KeyCode::PageUp | KeyCode::Char('b') => self.scroll_by(0, -self.page_height()),

            KeyCode::Char('g') | KeyCode::Home => self.scroll_home(),
            KeyCode::Char('G') | KeyCode::End => self.scroll_end(),

            KeyCode::Char('a') => self.toggle_autoscroll(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
