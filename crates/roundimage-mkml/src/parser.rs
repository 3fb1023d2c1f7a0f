use crate::ast::{DslDocument, Node, Prop, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Look at the token `offset` positions ahead of current without consuming.
    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    /// Error positioned at the token that was just consumed.
    fn err_prev(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.tokens
            .get(self.pos.saturating_sub(1))
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1));
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.advance() {
            Token::Ident(s) => Ok(s),
            tok => Err(self.err_prev(format!("expected identifier, got {:?}", tok))),
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<DslDocument, ParseError> {
        let root = self.parse_node()?;
        match self.peek() {
            Token::Eof => Ok(DslDocument { root }),
            tok => Err(self.err(format!("unexpected {:?} after the root node", tok))),
        }
    }

    // ── Node ──────────────────────────────────────────────────────────────

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let kind = self.expect_ident()?;

        // Optional inline string content: `RoundImage "avatar"`
        let content = if let Token::Str(_) = self.peek() {
            if let Token::Str(s) = self.advance() { Some(s) } else { None }
        } else {
            None
        };

        // Optional block `{ ... }` with properties.
        let props = if self.peek() == &Token::LBrace {
            self.parse_block()?
        } else {
            Vec::new()
        };

        Ok(Node { kind, content, props })
    }

    // ── Block ─────────────────────────────────────────────────────────────

    /// Parse `{ prop* }` where each prop is `key: value`.
    fn parse_block(&mut self) -> Result<Vec<Prop>, ParseError> {
        self.advance(); // consume `{`
        let mut props = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => { self.advance(); break; }
                Token::Eof    => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) if self.peek_ahead(1) == &Token::Colon => {
                    props.push(self.parse_prop()?);
                }
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside block, expected a property (key: value)",
                        tok
                    )));
                }
            }
        }

        Ok(props)
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, _) = self.current_pos();
        let key = self.expect_ident()?;
        self.advance(); // consume `:`
        let value = self.parse_value()?;
        Ok(Prop { key, value, line })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.advance() {
            Token::Str(s)    => Ok(Value::Str(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::Color(c)  => Ok(Value::Color(c)),
            Token::Ident(s)  => Ok(Value::Ident(s)),
            tok => Err(self.err_prev(format!("expected a value, got {:?}", tok))),
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.mkml` source string into a [`DslDocument`].
pub fn parse_str(src: &str) -> Result<DslDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
