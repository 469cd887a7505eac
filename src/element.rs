use crate::geometry::Size;
use crate::painter::Painter;

/// Capabilities a widget needs to be placed inside a scroll area
///
/// Any type that can report its natural size, accept a size, and draw itself
/// through a [`Painter`] can be scrolled.
pub trait Element {
    /// Natural size of the content, in content coordinates
    fn size_hint(&self) -> Size;

    /// Lay out the content for `size`
    fn resize(&mut self, size: Size);

    /// Draw into the coordinate space currently established by `painter`
    fn draw(&self, painter: &mut Painter<'_>);
}

/// Lets a scroll area borrow a child owned elsewhere
impl<E: Element + ?Sized> Element for &mut E {
    fn size_hint(&self) -> Size {
        (**self).size_hint()
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        (**self).draw(painter)
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn size_hint(&self) -> Size {
        (**self).size_hint()
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        (**self).draw(painter)
    }
}
