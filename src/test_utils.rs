//! Shared test utilities for scrollarea
//!
//! This module provides test elements that record how a scroll area drives
//! them, plus helpers for reading rendered buffers.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;

    use ratatui::buffer::Buffer;
    use ratatui::style::Style;

    use crate::app::App;
    use crate::config::{Config, ConfigResult};
    use crate::element::Element;
    use crate::geometry::{Point, Rectangle, Size};
    use crate::input::LineLoader;
    use crate::painter::Painter;

    /// Painter state observed by a child while it was drawing
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DrawRecord {
        pub visible: Rectangle,
        pub depth: usize,
        pub offset: Point,
    }

    /// Element with a settable size hint that records every call
    #[derive(Debug, Default)]
    pub struct Probe {
        pub hint: Size,
        pub resized: Vec<Size>,
        pub draws: RefCell<Vec<DrawRecord>>,
        /// Symbol painted over the whole hinted area when drawn
        pub fill: Option<&'static str>,
    }

    impl Probe {
        pub fn new(width: i32, height: i32) -> Self {
            Self {
                hint: Size::new(width, height),
                ..Self::default()
            }
        }

        pub fn filled(width: i32, height: i32, symbol: &'static str) -> Self {
            Self {
                fill: Some(symbol),
                ..Self::new(width, height)
            }
        }

        pub fn last_draw(&self) -> Option<DrawRecord> {
            self.draws.borrow().last().copied()
        }
    }

    impl Element for Probe {
        fn size_hint(&self) -> Size {
            self.hint
        }

        fn resize(&mut self, size: Size) {
            self.resized.push(size);
        }

        fn draw(&self, painter: &mut Painter<'_>) {
            self.draws.borrow_mut().push(DrawRecord {
                visible: painter.visible_bounds(),
                depth: painter.depth(),
                offset: painter.offset(),
            });
            if let Some(symbol) = self.fill {
                let content = Rectangle::from_origin_size(Point::ZERO, self.hint);
                painter.fill(content, symbol, Style::default());
            }
        }
    }

    /// Element whose draw always panics
    pub struct Panicking;

    impl Element for Panicking {
        fn size_hint(&self) -> Size {
            Size::new(5, 5)
        }

        fn resize(&mut self, _size: Size) {}

        fn draw(&self, _painter: &mut Painter<'_>) {
            panic!("child draw failed");
        }
    }

    /// Symbols of one buffer row concatenated
    pub fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    /// Viewer reading from an empty source with the given lines already pushed
    pub fn test_app(lines: &[&str]) -> App {
        test_app_with_config(lines, Config::default())
    }

    pub fn test_app_with_config(lines: &[&str], config: Config) -> App {
        let loader = LineLoader::spawn_reader(std::io::empty());
        let config_result = ConfigResult {
            config,
            warning: None,
        };
        let mut app = App::new(loader, "test.log", config_result, false);
        app.push_lines(lines.iter().map(|line| line.to_string()).collect());
        app
    }

    /// `"line 0"`, `"line 1"`, ...
    pub fn numbered_lines(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("line {}", i)).collect()
    }

    /// Poll until the app's loader thread is done
    pub fn wait_for_loader(app: &mut App) {
        for _ in 0..200 {
            app.poll_loader();
            if !app.loader.is_loading() {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        panic!("loader did not finish");
    }
}
