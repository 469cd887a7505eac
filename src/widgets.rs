pub mod scroll_area;
pub mod text_view;

pub use scroll_area::ScrollArea;
pub use text_view::TextView;
