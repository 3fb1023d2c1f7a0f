//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in emission order
//! - describe stroke styles shared by canvases

mod cmd;
mod list;

pub use cmd::{DrawCmd, FillPathCmd, ShaderRecord, StrokePathCmd};
pub use list::DrawList;

use crate::paint::Color;

/// Stroke drawn along an outline, centered on it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// A border with no width draws nothing.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}
