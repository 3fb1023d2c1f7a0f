//! `.mkml` front end for [`RoundImage`](crate::widgets::round_image::RoundImage).
//!
//! ## Format
//!
//! ```mkml
//! // The inline string names a source bound by the application.
//! RoundImage "avatar" {
//!     radius: 16
//!     bottom_right_radius: 0
//!     border_width: 3
//!     border_color: #ffffffff
//!     scale_mode: crop_fill
//!     padding: 4
//! }
//! ```
//!
//! `source: #rrggbbaa` shows a solid color instead of a bound bitmap.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roundimage_ui::dsl::{DslBindings, DslLoader};
//!
//! let bindings = DslBindings::new().with_bitmap("avatar", avatar_bitmap);
//! let loader = DslLoader::new();
//! let doc = loader.parse(include_str!("../ui/avatar.mkml"))?;
//! let image = loader.build(&doc, &bindings)?;
//! ```

pub mod builder;

pub use builder::{BuildError, DslBindings, DslLoader};
pub use roundimage_mkml::{parse_str, DslDocument, ParseError};
