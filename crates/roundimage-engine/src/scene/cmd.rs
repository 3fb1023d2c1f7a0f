use crate::coords::Transform;
use crate::paint::{Color, FilterQuality, Shader, SpreadMode};
use crate::path::Path;

use super::Border;

/// Owned description of a [`Shader`].
///
/// Image shaders keep the bitmap's dimensions but not its pixels, so a
/// recorded stream never extends the lifetime of a bitmap.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderRecord {
    Solid(Color),
    Image {
        bitmap_size: (u32, u32),
        transform: Transform,
        spread: SpreadMode,
        quality: FilterQuality,
    },
}

impl From<&Shader<'_>> for ShaderRecord {
    fn from(shader: &Shader<'_>) -> Self {
        match shader {
            Shader::Solid(c) => ShaderRecord::Solid(*c),
            Shader::Image(p) => ShaderRecord::Image {
                bitmap_size: p.bitmap.size(),
                transform: p.transform,
                spread: p.spread,
                quality: p.quality,
            },
        }
    }
}

/// Path fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub shader: ShaderRecord,
    pub anti_alias: bool,
}

/// Path stroke payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub path: Path,
    pub border: Border,
}

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a payload struct in this module
/// - add a new variant here
/// - add the matching method to [`Canvas`](crate::render::Canvas) and every implementation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath(FillPathCmd),
    StrokePath(StrokePathCmd),
}
