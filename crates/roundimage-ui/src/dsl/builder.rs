use std::collections::HashMap;
use std::fmt;

use roundimage_engine::bitmap::Bitmap;
use roundimage_engine::paint::Color;
use roundimage_mkml::ast::{DslDocument, Node, Prop, Value};
use roundimage_mkml::{parse_str, ParseError};

use crate::constraints::Edges;
use crate::widgets::round_image::{Drawable, ImageSource, RoundImage, RoundImageConfig, ScaleMode};

/// Element name every document root must use.
const ROOT_KIND: &str = "RoundImage";

// ── BuildError ────────────────────────────────────────────────────────────

/// A document that parsed but does not describe a valid `RoundImage`.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    Parse(ParseError),
    Invalid { message: String, line: Option<usize> },
}

impl BuildError {
    fn invalid(message: impl Into<String>, line: Option<usize>) -> Self {
        Self::Invalid { message: message.into(), line }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Invalid { message, line: Some(line) } => {
                write!(f, "mkml build error at line {line}: {message}")
            }
            Self::Invalid { message, line: None } => write!(f, "mkml build error: {message}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<ParseError> for BuildError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ── DslBindings ───────────────────────────────────────────────────────────

type DrawableFactory = Box<dyn Fn() -> Box<dyn Drawable>>;

enum Binding {
    Bitmap(Bitmap),
    Drawable(DrawableFactory),
}

/// Named sources supplied by the application when building a widget.
#[derive(Default)]
pub struct DslBindings {
    sources: HashMap<String, Binding>,
}

impl DslBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a bitmap. Each built widget gets its own copy.
    pub fn with_bitmap(mut self, name: impl Into<String>, bitmap: Bitmap) -> Self {
        self.sources.insert(name.into(), Binding::Bitmap(bitmap));
        self
    }

    /// Binds `name` to a drawable created fresh for each built widget.
    pub fn with_drawable<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Drawable> + 'static,
    {
        self.sources.insert(name.into(), Binding::Drawable(Box::new(factory)));
        self
    }

    fn source(&self, name: &str) -> Option<ImageSource> {
        match self.sources.get(name)? {
            Binding::Bitmap(bitmap) => Some(ImageSource::RawBitmap(bitmap.clone())),
            Binding::Drawable(factory) => Some(ImageSource::Generic(factory())),
        }
    }
}

impl fmt::Debug for DslBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("DslBindings").field("sources", &names).finish()
    }
}

// ── DslLoader ─────────────────────────────────────────────────────────────

/// Turns `.mkml` documents into configured [`RoundImage`] widgets.
#[derive(Debug, Default)]
pub struct DslLoader;

/// Where the widget's pixels come from, as written in the document.
enum SourceRef<'a> {
    Named(&'a str),
    Color([u8; 4]),
}

impl DslLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a `.mkml` source string into a [`DslDocument`].
    pub fn parse(&self, src: &str) -> Result<DslDocument, ParseError> {
        parse_str(src)
    }

    /// Parse and build in one step.
    pub fn load(&self, src: &str, bindings: &DslBindings) -> Result<RoundImage, BuildError> {
        let doc = parse_str(src)?;
        self.build(&doc, bindings)
    }

    /// Build a widget from a previously parsed document.
    ///
    /// A source name with no binding is logged and leaves the widget empty.
    pub fn build(&self, doc: &DslDocument, bindings: &DslBindings) -> Result<RoundImage, BuildError> {
        let config = self.config(doc)?;
        let source = match Self::source_ref(&doc.root)? {
            None => None,
            Some(SourceRef::Color([r, g, b, a])) => {
                Some(ImageSource::SolidColor(Color::from_srgb_u8(r, g, b, a)))
            }
            Some(SourceRef::Named(name)) => {
                let source = bindings.source(name);
                if source.is_none() {
                    log::warn!("mkml: no source bound to {name:?}; image stays empty");
                }
                source
            }
        };

        let mut image = RoundImage::new(config);
        if source.is_some() {
            image.set_source(source);
        }
        Ok(image)
    }

    /// Reads the appearance settings of a document, ignoring its source.
    pub fn config(&self, doc: &DslDocument) -> Result<RoundImageConfig, BuildError> {
        let root = &doc.root;
        if root.kind != ROOT_KIND {
            return Err(BuildError::invalid(
                format!("root element must be `{ROOT_KIND}`, found `{}`", root.kind),
                None,
            ));
        }

        // Applied in source order, so later keys override earlier ones.
        let mut config = RoundImageConfig::default();
        for prop in &root.props {
            match prop.key.as_str() {
                "radius"              => config.radius = number(prop)?,
                "top_left_radius"     => config.top_left_radius = Some(number(prop)?),
                "top_right_radius"    => config.top_right_radius = Some(number(prop)?),
                "bottom_right_radius" => config.bottom_right_radius = Some(number(prop)?),
                "bottom_left_radius"  => config.bottom_left_radius = Some(number(prop)?),
                "border_width"        => config.border_width = number(prop)?.max(0.0),
                "border_color"        => config.border_color = color(prop)?,
                "scale_mode"          => config.scale_mode = scale_mode(prop)?,
                "min_width"           => config.min_size.x = number(prop)?,
                "min_height"          => config.min_size.y = number(prop)?,
                "padding"             => config.padding = Edges::all(number(prop)?),
                "padding_left"        => config.padding.left = number(prop)?,
                "padding_top"         => config.padding.top = number(prop)?,
                "padding_right"       => config.padding.right = number(prop)?,
                "padding_bottom"      => config.padding.bottom = number(prop)?,
                "source"              => { Self::source_of(prop)?; }
                other => log::warn!("mkml: ignoring unknown key `{other}` on line {}", prop.line),
            }
        }
        Ok(config)
    }

    // ── helpers ───────────────────────────────────────────────────────────

    /// The `source:` key wins over the inline content string.
    fn source_ref(root: &Node) -> Result<Option<SourceRef<'_>>, BuildError> {
        match root.props.iter().rev().find(|p| p.key == "source") {
            Some(prop) => Self::source_of(prop).map(Some),
            None => Ok(root.content.as_deref().map(SourceRef::Named)),
        }
    }

    fn source_of(prop: &Prop) -> Result<SourceRef<'_>, BuildError> {
        match &prop.value {
            Value::Str(name) | Value::Ident(name) => Ok(SourceRef::Named(name)),
            Value::Color(c) => Ok(SourceRef::Color(*c)),
            other => Err(type_error(prop, "a source name or color", other)),
        }
    }
}

fn type_error(prop: &Prop, expected: &str, found: &Value) -> BuildError {
    BuildError::invalid(
        format!("`{}` expects {expected}, got {}", prop.key, found.kind()),
        Some(prop.line),
    )
}

fn number(prop: &Prop) -> Result<f32, BuildError> {
    match prop.value {
        Value::Number(v) => Ok(v),
        ref other => Err(type_error(prop, "a number", other)),
    }
}

fn color(prop: &Prop) -> Result<Color, BuildError> {
    match prop.value {
        Value::Color([r, g, b, a]) => Ok(Color::from_srgb_u8(r, g, b, a)),
        ref other => Err(type_error(prop, "a color", other)),
    }
}

fn scale_mode(prop: &Prop) -> Result<ScaleMode, BuildError> {
    match &prop.value {
        Value::Ident(name) | Value::Str(name) => ScaleMode::from_name(name).ok_or_else(|| {
            BuildError::invalid(
                format!("unknown scale_mode `{name}` (expected crop_fill or stretch_fit)"),
                Some(prop.line),
            )
        }),
        other => Err(type_error(prop, "crop_fill or stretch_fit", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundimage_engine::coords::{CornerRadii, Vec2};
    use roundimage_engine::render::Canvas;

    fn config(src: &str) -> Result<RoundImageConfig, BuildError> {
        let loader = DslLoader::new();
        loader.config(&loader.parse(src).unwrap())
    }

    struct Dot;

    impl Drawable for Dot {
        fn intrinsic_size(&self) -> (u32, u32) {
            (3, 5)
        }
        fn draw(&self, _canvas: &mut dyn Canvas, _size: Vec2) {}
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn full_document() {
        let c = config(
            r#"RoundImage "avatar" {
                radius: 16
                bottom_right_radius: 0
                border_width: 3
                border_color: #ff000080
                scale_mode: stretch_fit
                min_width: 60
                min_height: 70
            }"#,
        )
        .unwrap();
        assert_eq!(c.corner_radii(), CornerRadii::new(16.0, 16.0, 0.0, 16.0));
        assert_eq!(c.border_width, 3.0);
        assert_eq!(c.border_color, Color::from_srgb_u8(255, 0, 0, 128));
        assert_eq!(c.scale_mode, ScaleMode::StretchFit);
        assert_eq!(c.min_size, Vec2::new(60.0, 70.0));
    }

    #[test]
    fn empty_block_gives_defaults() {
        assert_eq!(config("RoundImage { }").unwrap(), RoundImageConfig::default());
    }

    #[test]
    fn padding_sides_override_uniform_in_order() {
        let c = config("RoundImage { padding: 4 padding_left: 10 }").unwrap();
        assert_eq!(c.padding, Edges { top: 4.0, right: 4.0, bottom: 4.0, left: 10.0 });

        let c = config("RoundImage { padding_left: 10 padding: 4 }").unwrap();
        assert_eq!(c.padding, Edges::all(4.0));
    }

    #[test]
    fn unknown_key_is_ignored() {
        assert_eq!(config("RoundImage { shadow: 3 }").unwrap(), RoundImageConfig::default());
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        let err = config("RoundImage {\n  radius: #ffffff\n}").unwrap_err();
        assert_eq!(
            err,
            BuildError::Invalid { message: "`radius` expects a number, got color".into(), line: Some(2) }
        );
        assert!(config("RoundImage { border_color: 3 }").is_err());
        assert!(config("RoundImage { source: 3 }").is_err());
    }

    #[test]
    fn unknown_scale_mode_is_an_error() {
        let err = config("RoundImage { scale_mode: fit }").unwrap_err();
        assert!(err.to_string().contains("unknown scale_mode `fit`"));
    }

    #[test]
    fn root_must_be_round_image() {
        let err = config("Image { }").unwrap_err();
        assert!(err.to_string().contains("root element must be `RoundImage`"));
    }

    // ── sources ───────────────────────────────────────────────────────────

    #[test]
    fn inline_name_uses_bound_bitmap() {
        let bindings = DslBindings::new().with_bitmap("avatar", Bitmap::filled(9, 4, Color::white()));
        let image = DslLoader::new().load(r#"RoundImage "avatar" { }"#, &bindings).unwrap();
        assert_eq!(image.bitmap().map(Bitmap::size), Some((9, 4)));
    }

    #[test]
    fn source_key_overrides_inline_name() {
        let bindings = DslBindings::new()
            .with_bitmap("a", Bitmap::filled(1, 1, Color::white()))
            .with_drawable("dot", || Box::new(Dot));
        let image = DslLoader::new().load(r#"RoundImage "a" { source: dot }"#, &bindings).unwrap();
        assert_eq!(image.bitmap().map(Bitmap::size), Some((3, 5)));
    }

    #[test]
    fn color_source_is_solid() {
        let image = DslLoader::new()
            .load("RoundImage { source: #00ff00 }", &DslBindings::new())
            .unwrap();
        let bm = image.bitmap().unwrap();
        assert_eq!(bm.size(), (2, 2));
        assert_eq!(bm.pixel(0, 0), Some([0, 255, 0, 255]));
    }

    #[test]
    fn unbound_name_leaves_image_empty() {
        let image = DslLoader::new()
            .load(r#"RoundImage "missing" { radius: 3 }"#, &DslBindings::new())
            .unwrap();
        assert!(image.bitmap().is_none());
        assert_eq!(image.config().radius, 3.0);
    }

    #[test]
    fn parse_errors_pass_through() {
        let err = DslLoader::new().load("RoundImage {", &DslBindings::new()).unwrap_err();
        assert!(matches!(err, BuildError::Parse(_)));
    }
}
