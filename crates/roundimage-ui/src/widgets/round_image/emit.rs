use roundimage_engine::bitmap::Bitmap;
use roundimage_engine::paint::{ImagePattern, Paint};
use roundimage_engine::scene::Border;

use crate::painter::Painter;

use super::layout::ResolvedGeometry;

/// Draws the bitmap clipped to the outline, then the border on top.
///
/// Nothing is drawn without geometry or bitmap, or when the draw rect has
/// collapsed. The fill samples the bitmap through the resolved transform
/// with edge clamping; the stroke reuses the same outline so both line up.
pub fn emit(
    painter: &mut Painter,
    geometry: Option<&ResolvedGeometry>,
    bitmap: Option<&Bitmap>,
    border: Border,
) {
    let (Some(geometry), Some(bitmap)) = (geometry, bitmap) else {
        return;
    };
    if geometry.draw_rect.is_empty() {
        log::trace!("emit: draw rect {:?} is empty; nothing to paint", geometry.draw_rect);
        return;
    }

    let pattern = ImagePattern::new(bitmap, geometry.transform);
    painter.fill_path(&geometry.outline, &Paint::image(pattern));
    painter.stroke_path(&geometry.outline, border);
}
