use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Handles a lexeme of the given byte length starting at the lexer's cursor.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored and matches at least one character; the first match wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[^\S\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^#[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\n").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"^"[^"]*"?"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^[-+*/%=!<>&|]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
        RegexPattern { regex: Regex::new(r"^[(\[{]").unwrap(), handler: open_bracket_handler },
        RegexPattern { regex: Regex::new(r"^[)\]}]").unwrap(), handler: close_bracket_handler },
        RegexPattern { regex: Regex::new(r"^[:;,.]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
    bracket_depth: usize,
    indentation_stack: Vec<usize>,
    previous_indentation: usize,
    at_line_start: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 0,
            bracket_depth: 0,
            indentation_stack: vec![],
            previous_indentation: 0,
            at_line_start: true,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.column += self.source[self.pos..self.pos + n].chars().count();
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn lexeme(&self, len: usize) -> String {
        String::from(&self.source[self.pos..self.pos + len])
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Character column of the cursor within the current line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Consumes the leading spaces of a logical line and emits the `Indent`/`Dedent`
    /// tokens the change in width calls for.
    fn measure_indentation(&mut self) {
        self.at_line_start = false;

        let width = self.remainder().bytes().take_while(|b| *b == b' ').count();
        self.advance_n(width);

        // Lines continued inside brackets carry no indentation
        if self.bracket_depth > 0 {
            return;
        }

        // Blank and comment-only lines leave the indentation untouched
        let content = self
            .remainder()
            .split('\n')
            .next()
            .unwrap_or_default()
            .trim_start();
        if content.is_empty() || content.starts_with('#') {
            return;
        }

        if width > self.previous_indentation {
            trace!("line {}: indent to {}", self.line, width);
            self.indentation_stack.push(width);
            self.push(MK_TOKEN!(TokenKind::Indent, String::new(), self.line, width));
        } else if width < self.previous_indentation {
            while let Some(&top) = self.indentation_stack.last() {
                if top <= width {
                    break;
                }

                trace!("line {}: dedent from {}", self.line, top);
                self.indentation_stack.pop();
                self.push(MK_TOKEN!(TokenKind::Dedent, String::new(), self.line, width));
            }
        }

        self.previous_indentation = width;
    }

    fn flush_indentation(&mut self) {
        let column = self.column();
        while self.indentation_stack.pop().is_some() {
            self.push(MK_TOKEN!(TokenKind::Dedent, String::new(), self.line, column));
        }
    }

    /// Emits a character no pattern recognises as a one-character operator.
    fn unrecognised_handler(&mut self) {
        if let Some(ch) = self.remainder().chars().next() {
            trace!("line {}: unrecognised character {:?}", self.line, ch);
            let column = self.column();
            self.push(MK_TOKEN!(TokenKind::Operator, ch.to_string(), self.line, column));
            self.advance_n(ch.len_utf8());
        }
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
}

fn newline_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
    lexer.line += 1;
    lexer.column = 0;
    lexer.at_line_start = true;
}

fn open_bracket_handler(lexer: &mut Lexer, len: usize) {
    lexer.bracket_depth += 1;
    let handler: RegexHandler = MK_DEFAULT_HANDLER!(TokenKind::Operator);
    handler(lexer, len);
}

fn close_bracket_handler(lexer: &mut Lexer, len: usize) {
    lexer.bracket_depth = lexer.bracket_depth.saturating_sub(1);
    let handler: RegexHandler = MK_DEFAULT_HANDLER!(TokenKind::Operator);
    handler(lexer, len);
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let value = lexer.lexeme(len);

    let kind = if RESERVED_LOOKUP.contains(value.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    let column = lexer.column();
    lexer.push(MK_TOKEN!(kind, value, lexer.line, column));
    lexer.advance_n(len);
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    let value = lexer.lexeme(len);

    let kind = if value.contains('.') {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntegerLiteral
    };

    let column = lexer.column();
    lexer.push(MK_TOKEN!(kind, value, lexer.line, column));
    lexer.advance_n(len);
}

fn string_handler(lexer: &mut Lexer, len: usize) {
    let value = lexer.lexeme(len);
    let newlines = value.matches('\n').count();
    let last_line_width = value.rfind('\n').map(|offset| value[offset + 1..].chars().count());

    let column = lexer.column();
    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, value, lexer.line, column));
    lexer.advance_n(len);
    lexer.line += newlines;
    if let Some(width) = last_line_width {
        lexer.column = width;
    }
}

/// Splits source text into tokens.
///
/// This never fails: characters that fit no token class come out as one-character
/// `Operator` tokens and are left for the parser to reject. The result always ends
/// with a single `EndOfFile` token, preceded by a `Dedent` for every indentation
/// level still open.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        if lex.at_line_start {
            lex.measure_indentation();
            continue;
        }

        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|matched| (pattern.handler, matched.end()))
        });

        match found {
            Some((handler, len)) => handler(&mut lex, len),
            None => lex.unrecognised_handler(),
        }
    }

    lex.flush_indentation();
    let line = lex.line;
    let column = lex.column();
    lex.push(MK_TOKEN!(TokenKind::EndOfFile, String::from("EOF"), line, column));

    debug!("tokenized {} tokens over {} lines", lex.tokens.len(), lex.line);
    lex.tokens
}
