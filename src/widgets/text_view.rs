//! Line-oriented text element with a scrollback limit
//!
//! Content size is the widest line by the number of lines, so a scroll area
//! around a `TextView` can pan over all of it. Drawing walks only the rows
//! inside the painter's visible bounds.

use std::collections::VecDeque;

use ansi_to_tui::IntoText;
use ratatui::text::{Line, Text};

use crate::element::Element;
use crate::geometry::{Point, Size};
use crate::painter::Painter;

const TAB: &str = "    ";

#[derive(Debug, Clone, Default)]
pub struct TextView {
    lines: VecDeque<Line<'static>>,
    /// 0 keeps every line
    max_lines: usize,
    /// Widest line currently held, kept in step with `lines`
    width: usize,
    size: Size,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            max_lines,
            ..Self::default()
        }
    }

    pub fn push_line(&mut self, line: Line<'static>) {
        self.width = self.width.max(line.width());
        self.lines.push_back(line);
        self.trim();
    }

    /// Append plain text, one line per `\n`
    pub fn push_str(&mut self, text: &str) {
        for part in text.split('\n') {
            let part = part.strip_suffix('\r').unwrap_or(part);
            self.push_line(Line::raw(part.replace('\t', TAB)));
        }
    }

    /// Append text containing ANSI colour sequences
    ///
    /// Undecodable input is kept as plain text rather than dropped.
    pub fn push_ansi(&mut self, text: &str) {
        let expanded = text.replace('\t', TAB);
        let decoded: Text<'static> = expanded
            .as_bytes()
            .into_text()
            .unwrap_or_else(|_| Text::raw(expanded.clone()));

        if decoded.lines.is_empty() {
            self.push_line(Line::default());
            return;
        }
        for line in decoded.lines {
            self.push_line(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.width = 0;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line<'static>> {
        self.lines.iter()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Size last assigned by the layout
    pub fn size(&self) -> Size {
        self.size
    }

    fn trim(&mut self) {
        if self.max_lines == 0 || self.lines.len() <= self.max_lines {
            return;
        }
        let excess = self.lines.len() - self.max_lines;
        let mut widest_dropped = 0;
        for line in self.lines.drain(..excess) {
            widest_dropped = widest_dropped.max(line.width());
        }
        if widest_dropped >= self.width {
            self.width = self.lines.iter().map(Line::width).max().unwrap_or(0);
        }
    }
}

impl Element for TextView {
    fn size_hint(&self) -> Size {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.lines.len()).unwrap_or(i32::MAX);
        Size::new(width, height)
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let visible = painter.visible_bounds();
        if visible.is_empty() {
            return;
        }
        let first = usize::try_from(visible.min.y).unwrap_or(0);
        let last = usize::try_from(visible.max.y)
            .unwrap_or(0)
            .min(self.lines.len());

        for row in first..last {
            painter.draw_line(Point::new(0, row as i32), &self.lines[row]);
        }
    }
}

#[cfg(test)]
#[path = "text_view_tests.rs"]
mod text_view_tests;
