//! Mouse event dispatcher
//!
//! The wheel scrolls the viewport wherever the pointer is.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let lines = app.config.viewport.mouse_scroll_lines;
    let columns = app.config.viewport.scroll_columns;

    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(0, lines),
        MouseEventKind::ScrollUp => app.scroll_by(0, -lines),
        MouseEventKind::ScrollRight => app.scroll_by(columns, 0),
        MouseEventKind::ScrollLeft => app.scroll_by(-columns, 0),
        _ => {}
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
