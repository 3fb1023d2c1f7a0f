//! Lexer, parser, and AST for the `.mkml` configuration markup.
//!
//! Has no dependencies, so config tooling can read documents without the
//! raster backend.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `DslDocument`, `Node`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use roundimage_mkml::parse_str;
//!
//! let src = r#"
//!     RoundImage "avatar" {
//!         radius: 12
//!         border_color: #ffffffff
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.kind, "RoundImage");
//! assert_eq!(doc.root.prop_f32("radius"), Some(12.0));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::DslDocument;
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;
    use crate::ast::Value;

    fn ok(src: &str) -> DslDocument { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn bare_node() { assert_eq!(ok("RoundImage").root.kind, "RoundImage"); }
    #[test] fn empty_block() { assert!(ok("RoundImage { }").root.props.is_empty()); }
    #[test] fn inline_content() {
        assert_eq!(ok(r#"RoundImage "avatar" { }"#).root.content.as_deref(), Some("avatar"));
    }
    #[test] fn block_comment() {
        ok("/* header */ RoundImage { /* body */ radius: 8 /* tail */ }");
    }
    #[test] fn line_comment() {
        ok("// top\nRoundImage {\n    // inside\n    radius: 8\n}");
    }
    #[test] fn all_value_kinds() {
        let doc = ok(r#"RoundImage {
            radius: 4.5
            border_color: #aabbcc
            scale_mode: stretch_fit
            source: "photo"
        }"#);
        let root = &doc.root;
        assert_eq!(root.prop_f32("radius"), Some(4.5));
        assert_eq!(root.prop_color("border_color"), Some([0xaa, 0xbb, 0xcc, 0xff]));
        assert_eq!(root.prop("scale_mode"), Some(&Value::Ident("stretch_fit".into())));
        assert_eq!(root.prop_str("source"), Some("photo"));
    }
    #[test] fn later_prop_wins() {
        assert_eq!(ok("RoundImage { radius: 1 radius: 2 }").root.prop_f32("radius"), Some(2.0));
    }
    #[test] fn prop_records_line() {
        let doc = ok("RoundImage {\n\n  radius: 3\n}");
        assert_eq!(doc.root.props[0].line, 3);
    }
    #[test] fn err_bad_color() { err("RoundImage { border_color: #xyz }"); }
    #[test] fn err_unclosed_string() { err(r#"RoundImage "oops { }"#); }
    #[test] fn err_double_colon() { err("RoundImage { radius: : 8 }"); }
    #[test] fn err_unclosed_block() {
        let e = err("RoundImage {\n radius: 2\n");
        assert!(e.message.contains("unclosed"));
    }
    #[test] fn err_trailing_node() { err("RoundImage { } RoundImage { }"); }
    #[test] fn err_nested_node() { err("RoundImage { Child { } }"); }
}
