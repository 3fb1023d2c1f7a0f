//! Roundimage UI: the `RoundImage` widget and the host loop that drives it.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use roundimage_ui::prelude::*;
//!
//! let mut image = RoundImage::new(
//!     RoundImageConfig::default()
//!         .radius(24.0)
//!         .border(2.0, Color::white()),
//! )
//! .with_source(bitmap);
//!
//! let mut scene = UiScene::new();
//! let mut canvas = RasterCanvas::new(96, 96)?;
//! scene.frame(&mut image, Constraints::tight(Vec2::new(96.0, 96.0)), &mut canvas);
//! canvas.save_png("avatar.png")?;
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type and hand it to
//! [`UiScene::frame`](scene::UiScene::frame). Drawing goes through the
//! [`Painter`](painter::Painter), which forwards to whatever canvas the host
//! supplied.

pub mod constraints;
pub mod dsl;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and host a `RoundImage`.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::round_image::{
        Drawable, ImageSource, ResolvedGeometry, RoundImage, RoundImageConfig, ScaleMode, ViewportSpec,
    };

    // Re-export the engine primitives everyone needs.
    pub use roundimage_engine::bitmap::Bitmap;
    pub use roundimage_engine::coords::{CornerRadii, Rect, Vec2};
    pub use roundimage_engine::paint::{Color, Paint};
    pub use roundimage_engine::path::Path;
    pub use roundimage_engine::render::{Canvas, RasterCanvas};
    pub use roundimage_engine::scene::{Border, DrawList};

    // DSL
    pub use crate::dsl::{BuildError, DslBindings, DslDocument, DslLoader, ParseError};
}
