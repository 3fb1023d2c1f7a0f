use std::fmt;

/// Where `.mkml` parsing stopped, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in chars.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }

    /// The offending source line with a caret under the error column.
    ///
    /// Tabs before the column are copied so the caret lines up in a terminal.
    /// Returns `None` when `src` has no such line.
    pub fn excerpt(&self, src: &str) -> Option<String> {
        let text = src.lines().nth(self.line.checked_sub(1)?)?;
        let pad: String = text
            .chars()
            .take(self.col.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        Some(format!("{:>4} | {text}\n     | {pad}^", self.line))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mkml parse error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_points_at_column() {
        let src = "RoundImage {\n  radius: @\n}";
        let err = ParseError::new("unexpected '@'", 2, 11);
        assert_eq!(err.excerpt(src).unwrap(), "   2 |   radius: @\n     |           ^");
    }

    #[test]
    fn excerpt_keeps_tabs_aligned() {
        let err = ParseError::new("x", 1, 3);
        assert_eq!(err.excerpt("\tab").unwrap(), "   1 | \tab\n     | \t ^");
    }

    #[test]
    fn excerpt_out_of_range_line_is_none() {
        assert_eq!(ParseError::new("x", 5, 1).excerpt("one line"), None);
        assert_eq!(ParseError::new("x", 0, 1).excerpt("one line"), None);
    }
}
