use crate::config::{Config, ConfigResult};
use crate::element::Element;
use crate::geometry::Size;
use crate::input::{LineLoader, LoadingState};
use crate::widgets::{ScrollArea, TextView};

pub struct App {
    pub viewport: ScrollArea<TextView>,
    pub loader: LineLoader,
    pub config: Config,
    /// File name or `-` for stdin, shown in the status row
    pub source: String,
    pub follow: bool,
    pub config_warning: Option<String>,
    pub should_quit: bool,
    pub needs_render: bool,
    /// Set when content changed since the viewport was last resized
    pub needs_layout: bool,
}

impl App {
    pub fn new(
        loader: LineLoader,
        source: impl Into<String>,
        config_result: ConfigResult,
        follow: bool,
    ) -> Self {
        let ConfigResult { config, warning } = config_result;

        let text = TextView::with_max_lines(config.buffer.max_lines);
        let mut viewport = ScrollArea::new(text, config.viewport.preferred_size());
        viewport.set_autoscroll_to_bottom(config.viewport.autoscroll);

        Self {
            viewport,
            loader,
            config,
            source: source.into(),
            follow,
            config_warning: warning,
            should_quit: false,
            needs_render: true,
            needs_layout: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    /// Move newly read lines into the text view
    ///
    /// Returns true when anything visible changed (new lines or a loader
    /// state transition).
    pub fn poll_loader(&mut self) -> bool {
        let before = self.loader.state().clone();
        let lines = self.loader.poll();
        let changed = !lines.is_empty() || *self.loader.state() != before;

        if !lines.is_empty() {
            self.push_lines(lines);
        }
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub fn push_lines(&mut self, lines: Vec<String>) {
        let ansi = self.config.buffer.ansi_colors;
        let text = self.viewport.child_mut();
        for line in &lines {
            if ansi {
                text.push_ansi(line);
            } else {
                text.push_str(line);
            }
        }
        self.needs_layout = true;
        self.mark_dirty();
    }

    pub fn line_count(&self) -> usize {
        self.viewport.child().len()
    }

    pub fn loading_state(&self) -> &LoadingState {
        self.loader.state()
    }

    pub fn autoscroll(&self) -> bool {
        self.viewport.autoscroll_to_bottom()
    }

    /// Toggle pinning to the last line; takes effect on the next layout
    pub fn toggle_autoscroll(&mut self) {
        let enabled = !self.viewport.autoscroll_to_bottom();
        self.viewport.set_autoscroll_to_bottom(enabled);
        self.needs_layout = true;
        self.mark_dirty();
    }

    /// Scroll on behalf of the user, keeping the window over the content
    ///
    /// The scroll area itself never clamps; the viewer stops at the first
    /// and last line and column so paging cannot run off into empty space.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        let content = self.viewport.child().size_hint();
        let size = self.viewport.size();
        let offset = self.viewport.offset();

        let max_x = (content.width - size.width).max(0);
        let max_y = (content.height - size.height).max(0);
        let target_x = if dx == 0 {
            offset.x
        } else {
            (offset.x + dx).clamp(0, max_x)
        };
        let target_y = if dy == 0 {
            offset.y
        } else {
            (offset.y + dy).clamp(0, max_y)
        };

        if target_x != offset.x || target_y != offset.y {
            self.viewport.scroll(target_x - offset.x, target_y - offset.y);
            self.mark_dirty();
        }
    }

    /// First line, first column
    pub fn scroll_home(&mut self) {
        let x = self.viewport.offset().x;
        self.viewport.scroll(-x, 0);
        self.viewport.scroll_to_top();
        self.mark_dirty();
    }

    pub fn scroll_end(&mut self) {
        self.viewport.scroll_to_bottom();
        self.mark_dirty();
    }

    /// Height of one page, at least one line
    pub fn page_height(&self) -> i32 {
        self.viewport.size().height.max(1)
    }

    /// Resize the viewport when its area or content changed
    pub fn layout(&mut self, size: Size) {
        if self.needs_layout || self.viewport.size() != size {
            self.viewport.resize(size);
            self.needs_layout = false;
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
