//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the matched text as a token

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's source text
/// * `$line` - The 1-based line the token starts on
/// * `$column` - The 0-based character column the token starts at
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), 1, 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            text: $text,
            line: $line,
            column: $column,
        }
    };
}

/// Creates a lexer handler that pushes the matched lexeme as a token of a fixed kind
/// and advances past it. The handler receives the byte length of the match.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[()\\[\\]{}:;,.]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Operator),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, len: usize| {
            let text = lexer.lexeme(len);
            let token = MK_TOKEN!($kind, text, lexer.line, lexer.column());
            lexer.push(token);
            lexer.advance_n(len);
        }
    };
}
