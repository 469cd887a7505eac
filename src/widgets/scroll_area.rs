//! Viewport onto a child element that may be larger than the widget itself
//!
//! The child always gets its full natural size; the scroll area only decides
//! which part of it is visible. Offsets are never clamped: a negative offset
//! or one past the end of the content is kept as-is and simply shows blank
//! space, so callers can detect overscroll from `offset()`.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

#[cfg(debug_assertions)]
use log::debug;

use crate::element::Element;
use crate::geometry::{Point, Rectangle, Size};
use crate::painter::Painter;

#[derive(Debug, Clone)]
pub struct ScrollArea<E> {
    child: E,
    /// Content coordinate shown at the top-left cell
    offset: Point,
    /// Zero components defer to the child's size hint
    preferred: Size,
    autoscroll: bool,
    /// Allocated by the layout through `resize`
    size: Size,
}

impl<E: Element> ScrollArea<E> {
    /// Wrap `child`; zero axes of `preferred` follow the child's hint
    pub fn new(child: E, preferred: Size) -> Self {
        Self {
            child,
            offset: Point::ZERO,
            preferred,
            autoscroll: false,
            size: Size::ZERO,
        }
    }

    /// A scroll area can always shrink to nothing and clip everything
    pub fn min_size_hint(&self) -> Size {
        Size::ZERO
    }

    /// Preferred size, falling back to the child's hint on zero axes
    pub fn size_hint(&self) -> Size {
        let mut hint = self.preferred;
        if hint.width == 0 || hint.height == 0 {
            let child = self.child.size_hint();
            if hint.width == 0 {
                hint.width = child.width;
            }
            if hint.height == 0 {
                hint.height = child.height;
            }
        }
        hint
    }

    /// Shift the visible window over the content
    ///
    /// Wraps at the `i32` limits rather than panicking.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.offset = self.offset + Point::new(dx, dy);
    }

    /// Align the last content row with the bottom of the viewport
    ///
    /// Negative when the content is shorter than the viewport.
    pub fn scroll_to_bottom(&mut self) {
        self.offset.y = self.child.size_hint().height.wrapping_sub(self.size.height);
    }

    /// Show the first content row; the horizontal offset is kept
    pub fn scroll_to_top(&mut self) {
        self.offset.y = 0;
    }

    /// Re-pin to the bottom on every subsequent `resize`
    pub fn set_autoscroll_to_bottom(&mut self, enabled: bool) {
        self.autoscroll = enabled;
    }

    /// Whether `resize` re-pins to the bottom
    pub fn autoscroll_to_bottom(&self) -> bool {
        self.autoscroll
    }

    /// Give the child its natural size, then take `size` for the viewport
    ///
    /// The child must be resized first: autoscroll reads the child's hint
    /// after its layout has settled.
    pub fn resize(&mut self, size: Size) {
        let hint = self.child.size_hint();
        self.child.resize(hint);
        self.size = size;

        if self.autoscroll {
            self.scroll_to_bottom();

            #[cfg(debug_assertions)]
            debug!(
                "scroll_area: autoscroll content_height={} viewport_height={} offset_y={}",
                self.child.size_hint().height,
                size.height,
                self.offset.y
            );
        }
    }

    /// Draw the visible part of the child
    ///
    /// Translation and mask are released by guards, so the painter is left
    /// as it was found even if the child panics.
    pub fn draw(&self, painter: &mut Painter<'_>) {
        let back = -self.offset;
        let mut painter = painter.translated(back.x, back.y);
        let visible = Rectangle::from_origin_size(self.offset, self.size);
        painter.with_mask(visible, |p| self.child.draw(p));
    }

    /// Content coordinate currently shown at the top-left cell
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Viewport size from the last `resize`
    pub fn size(&self) -> Size {
        self.size
    }

    /// Preferred size as given to `new`
    pub fn preferred_size(&self) -> Size {
        self.preferred
    }

    /// The scrolled content
    pub fn child(&self) -> &E {
        &self.child
    }

    /// Mutable access to the child; call `resize` afterwards if its size
    /// hint changed
    pub fn child_mut(&mut self) -> &mut E {
        &mut self.child
    }

    /// Give the child back, unchanged
    pub fn into_inner(self) -> E {
        self.child
    }
}

/// Scroll areas nest: an outer one sees the inner one's size hint
impl<E: Element> Element for ScrollArea<E> {
    fn size_hint(&self) -> Size {
        ScrollArea::size_hint(self)
    }

    fn resize(&mut self, size: Size) {
        ScrollArea::resize(self, size)
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        ScrollArea::draw(self, painter)
    }
}

/// Render through ratatui; the area should match the last `resize`
impl<E: Element> Widget for &ScrollArea<E> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut painter = Painter::new(buf, area);
        self.draw(&mut painter);
    }
}

#[cfg(test)]
#[path = "scroll_area_tests.rs"]
mod scroll_area_tests;
