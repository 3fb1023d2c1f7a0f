use crate::paint::Paint;
use crate::path::Path;
use crate::render::Canvas;

use super::{Border, DrawCmd, FillPathCmd, ShaderRecord, StrokePathCmd};

/// Recorded draw stream for a frame.
///
/// A [`Canvas`] that stores every call instead of rasterizing it. Commands
/// are kept in emission order, which is also paint order (back-to-front).
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns commands in emission order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Canvas for DrawList {
    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    fn clear(&mut self) {
        self.items.clear();
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint<'_>) {
        self.items.push(DrawCmd::FillPath(FillPathCmd {
            path: path.clone(),
            shader: ShaderRecord::from(&paint.shader),
            anti_alias: paint.anti_alias,
        }));
    }

    fn stroke_path(&mut self, path: &Path, border: &Border) {
        self.items.push(DrawCmd::StrokePath(StrokePathCmd { path: path.clone(), border: *border }));
    }
}
