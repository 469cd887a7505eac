//! scrollarea library - Scrollable viewport widget for ratatui
//!
//! The core is [`ScrollArea`], a window onto a child [`Element`] that may be
//! larger than the space the layout gives it. The viewer application in
//! [`app`] uses it to page through and follow text streams.

pub mod app;
pub mod config;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod painter;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use element::Element;
pub use geometry::{Point, Rectangle, Size};
pub use painter::Painter;
pub use widgets::{ScrollArea, TextView};
