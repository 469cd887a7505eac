use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::app_state::App;
use super::status_render;
use crate::geometry::Size;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [status_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        let viewport_area = self.viewport_area(body_area);
        self.layout(Size::from(viewport_area));
        frame.render_widget(&self.viewport, viewport_area);

        status_render::render_line(self, frame, status_area);
    }

    /// Area given to the scroll area inside `body`
    ///
    /// An axis with a configured preferred size is capped to the scroll
    /// area's size hint; otherwise the viewport takes all of `body`.
    pub fn viewport_area(&self, body: Rect) -> Rect {
        let preferred = self.viewport.preferred_size();
        let hint = self.viewport.size_hint();
        let mut area = body;

        if preferred.width > 0 {
            area.width = area.width.min(clamp_u16(hint.width));
        }
        if preferred.height > 0 {
            area.height = area.height.min(clamp_u16(hint.height));
        }
        area
    }
}

fn clamp_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}
