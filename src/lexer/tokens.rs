use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("def");
        set.insert("return");
        set.insert("True");
        set.insert("False");
        set.insert("print");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Operator,
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    Indent,
    Dedent,
    EndOfFile,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    /// 0-based character offset of the token within its line
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{} (line {})", self.kind, self.line)
        } else {
            write!(f, "{} `{}` (line {})", self.kind, self.text, self.line)
        }
    }
}

impl Token {
    /// The text used to name this token in diagnostics.
    ///
    /// Indentation tokens carry no text, so their kind stands in for it.
    pub fn describe(&self) -> String {
        if self.text.is_empty() {
            self.kind.to_string()
        } else {
            self.text.clone()
        }
    }

    /// Returns true for an `Operator` token spelling exactly `text`.
    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}
