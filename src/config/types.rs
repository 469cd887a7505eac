// Configuration type definitions

use serde::Deserialize;

use crate::geometry::Size;

/// Viewport behaviour section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViewportConfig {
    /// Pin the view to the last line whenever it is laid out again
    #[serde(default)]
    pub autoscroll: bool,
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: i32,
    #[serde(default = "default_scroll_columns")]
    pub scroll_columns: i32,
    #[serde(default = "default_mouse_scroll_lines")]
    pub mouse_scroll_lines: i32,
    /// Preferred size; 0 follows the content on that axis
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

fn default_scroll_lines() -> i32 {
    1
}

fn default_scroll_columns() -> i32 {
    4
}

fn default_mouse_scroll_lines() -> i32 {
    3
}

impl ViewportConfig {
    pub fn preferred_size(&self) -> Size {
        Size::new(self.width.max(0), self.height.max(0))
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig {
            autoscroll: false,
            scroll_lines: default_scroll_lines(),
            scroll_columns: default_scroll_columns(),
            mouse_scroll_lines: default_mouse_scroll_lines(),
            width: 0,
            height: 0,
        }
    }
}

/// Text buffer section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BufferConfig {
    /// Scrollback limit; 0 keeps everything
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    #[serde(default = "default_ansi_colors")]
    pub ansi_colors: bool,
}

fn default_max_lines() -> usize {
    10_000
}

fn default_ansi_colors() -> bool {
    true
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            max_lines: default_max_lines(),
            ansi_colors: default_ansi_colors(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub buffer: BufferConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
