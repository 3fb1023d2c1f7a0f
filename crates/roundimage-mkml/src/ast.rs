// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"hello"`
    Str(String),
    /// Floating-point literal: `16.0` or `16`
    Number(f32),
    /// Color literal: `[r, g, b, a]` straight-alpha bytes from `#rrggbb` / `#rrggbbaa`
    Color([u8; 4]),
    /// Unquoted identifier: source names, enum variants
    Ident(String),
}

impl Value {
    /// Short type name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Ident(_) => "identifier",
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a node block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based source line of the key.
    pub line: usize,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A configured element.
///
/// ```mkml
/// RoundImage "avatar" {
///     radius: 12
///     border_color: #ffffffff
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Element type name: `"RoundImage"`.
    pub kind: String,
    /// Optional inline string content (e.g. the bound source name).
    pub content: Option<String>,
    /// Properties inside the block (`key: value` lines), in source order.
    pub props: Vec<Prop>,
}

impl Node {
    /// Look up a property value by key. The last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f32` if it is a `Number`.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get a property as straight-alpha RGBA bytes if it is a `Color`.
    pub fn prop_color(&self, key: &str) -> Option<[u8; 4]> {
        match self.prop(key)? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }
}

// ── DslDocument ───────────────────────────────────────────────────────────

/// The top-level parse result for a `.mkml` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DslDocument {
    pub root: Node,
}
