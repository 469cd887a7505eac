//! Painting context over a ratatui buffer
//!
//! A `Painter` maps local coordinates to buffer cells through a stack of
//! translations and clips every write to the current mask. Both pieces of
//! state are scoped: `translated` returns a guard that pops the translation
//! when dropped, and `with_mask` restores the previous mask when its closure
//! returns or unwinds.
//!
//! Coordinates:
//! - *world*: relative to the top-left of the area the painter was created for
//! - *local*: world minus the current cumulative translation

use std::ops::{Deref, DerefMut};

use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::geometry::{Point, Rectangle, Size};

pub struct Painter<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    /// Cumulative offsets, innermost last
    transforms: Vec<Point>,
    /// World coordinates
    mask: Rectangle,
}

impl<'a> Painter<'a> {
    /// Create a painter drawing into `area` of `buf`
    ///
    /// The area is clamped to the buffer, and the initial mask covers it.
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buf.area);
        Self {
            buf,
            area,
            transforms: Vec::new(),
            mask: Rectangle::from(area),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Translate subsequent drawing by `(dx, dy)` until the matching `restore`
    pub fn translate(&mut self, dx: i32, dy: i32) {
        let next = self.offset() + Point::new(dx, dy);
        self.transforms.push(next);
    }

    /// Pop the innermost translation; no-op when none is pushed
    pub fn restore(&mut self) {
        self.transforms.pop();
    }

    /// Scoped `translate`: the translation is popped when the guard drops
    pub fn translated(&mut self, dx: i32, dy: i32) -> Translated<'_, 'a> {
        self.translate(dx, dy);
        Translated { painter: self }
    }

    /// Number of translations currently pushed
    pub fn depth(&self) -> usize {
        self.transforms.len()
    }

    /// Cumulative translation applied to local coordinates
    pub fn offset(&self) -> Point {
        self.transforms.last().copied().unwrap_or_default()
    }

    /// Current clip mask in world coordinates
    pub fn mask(&self) -> Rectangle {
        self.mask
    }

    /// Current clip mask in local coordinates
    ///
    /// Elements use this to skip content that cannot be seen.
    pub fn visible_bounds(&self) -> Rectangle {
        self.mask.translate(-self.offset())
    }

    /// Run `f` with drawing restricted to `rect` (local coordinates)
    ///
    /// The new mask is the intersection with the current one, so nested masks
    /// can only shrink. The previous mask is restored on every exit path.
    pub fn with_mask<R>(&mut self, rect: Rectangle, f: impl FnOnce(&mut Painter<'a>) -> R) -> R {
        let world = rect.translate(self.offset());
        let mut guard = MaskGuard {
            saved: self.mask,
            painter: self,
        };
        guard.painter.mask = guard.painter.mask.intersect(&world);
        f(&mut *guard.painter)
    }

    /// Draw a single grapheme at `at`
    ///
    /// Cells covered by a wide grapheme after the first are reset so the
    /// terminal does not render stale content under it. A wide grapheme that
    /// does not fit inside the mask is skipped.
    pub fn draw_symbol(&mut self, at: Point, symbol: &str, style: Style) {
        let world = at + self.offset();
        if !self.mask.contains(world) {
            return;
        }
        // A wide grapheme is all or nothing: its trailing half would spill
        // past the mask edge on the terminal
        let width = symbol.width().max(1) as i32;
        if !self.mask.contains(world + Point::new(width - 1, 0)) {
            return;
        }
        if let Some(cell) = self.cell_mut(world) {
            cell.set_symbol(symbol).set_style(style);
        }
        for dx in 1..width {
            let covered = world + Point::new(dx, 0);
            if self.mask.contains(covered)
                && let Some(cell) = self.cell_mut(covered)
            {
                cell.reset();
            }
        }
    }

    /// Draw a span starting at `at`, returning the columns advanced
    pub fn draw_span(&mut self, at: Point, span: &Span<'_>, base: Style) -> i32 {
        let mut x = at.x;
        for grapheme in span.styled_graphemes(base) {
            let width = grapheme.symbol.width() as i32;
            if width == 0 {
                continue;
            }
            self.draw_symbol(Point::new(x, at.y), grapheme.symbol, grapheme.style);
            x = x.wrapping_add(width);
        }
        x.wrapping_sub(at.x)
    }

    pub fn draw_str(&mut self, at: Point, text: &str, style: Style) -> i32 {
        self.draw_span(at, &Span::styled(text, style), Style::default())
    }

    /// Draw a line left-aligned at `at`, returning the columns advanced
    ///
    /// Rows outside the mask are skipped without walking the graphemes.
    pub fn draw_line(&mut self, at: Point, line: &Line<'_>) -> i32 {
        let row = at.y.wrapping_add(self.offset().y);
        if row < self.mask.min.y || row >= self.mask.max.y {
            return line.width() as i32;
        }
        let mut x = at.x;
        for span in &line.spans {
            x = x.wrapping_add(self.draw_span(Point::new(x, at.y), span, line.style));
        }
        x.wrapping_sub(at.x)
    }

    /// Fill `rect` (local coordinates) with `symbol`
    pub fn fill(&mut self, rect: Rectangle, symbol: &str, style: Style) {
        let visible = rect.intersect(&self.visible_bounds());
        for y in visible.min.y..visible.max.y {
            for x in visible.min.x..visible.max.x {
                self.draw_symbol(Point::new(x, y), symbol, style);
            }
        }
    }

    /// Size of the drawable area
    pub fn size(&self) -> Size {
        Size::from(self.area)
    }

    fn cell_mut(&mut self, world: Point) -> Option<&mut Cell> {
        let x = u16::try_from(world.x).ok()?.checked_add(self.area.x)?;
        let y = u16::try_from(world.y).ok()?.checked_add(self.area.y)?;
        self.buf.cell_mut(Position::new(x, y))
    }
}

/// Guard returned by [`Painter::translated`]
pub struct Translated<'p, 'a> {
    painter: &'p mut Painter<'a>,
}

impl<'a> Deref for Translated<'_, 'a> {
    type Target = Painter<'a>;

    fn deref(&self) -> &Painter<'a> {
        self.painter
    }
}

impl<'a> DerefMut for Translated<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Painter<'a> {
        self.painter
    }
}

impl Drop for Translated<'_, '_> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

struct MaskGuard<'p, 'a> {
    saved: Rectangle,
    painter: &'p mut Painter<'a>,
}

impl Drop for MaskGuard<'_, '_> {
    fn drop(&mut self) {
        self.painter.mask = self.saved;
    }
}

#[cfg(test)]
#[path = "painter_tests.rs"]
mod painter_tests;
