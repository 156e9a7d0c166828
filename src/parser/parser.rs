//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, which owns the token stream
//! and a cursor into it, and the two entry points: `parse` for a single
//! statement and `parse_program` for a whole source file.

use log::debug;

use crate::{
    ast::ast::{Node, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::expr::parse_statement;

/// The main parser structure that maintains parsing state.
///
/// The end-of-file token is never handed out: once the cursor reaches it (or
/// runs off the end of a stream that lacks one) the parser reports no current
/// token.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Line of the most recently consumed token
    last_line: Option<usize>,
    /// Number of enclosing parentheses
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            last_line: None,
            depth: 0,
        }
    }

    /// Returns the current token without advancing, or `None` at end of input.
    pub fn current_token(&self) -> Option<&Token> {
        self.peek_token(0)
    }

    /// Returns the token `offset` places past the cursor, or `None` if that is
    /// at or past the end of input.
    pub fn peek_token(&self, offset: usize) -> Option<&Token> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .take_while(|token| token.kind != TokenKind::EndOfFile)
            .nth(offset)
    }

    /// Advances to the next token and returns the one moved past.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.current_token().cloned();
        if let Some(token) = &token {
            self.last_line = Some(token.line);
            self.pos += 1;
        }
        token
    }

    /// Returns true if `token` sits on the line of the last consumed token.
    ///
    /// Inside parentheses every token counts as continuing the line.
    pub fn continues_line(&self, token: &Token) -> bool {
        self.depth > 0 || self.last_line.map_or(true, |line| token.line <= line)
    }

    /// Expects an operator token spelling `text`, with optional custom error.
    ///
    /// Without a custom error a mismatch is `UnexpectedToken` and running out of
    /// input is `UnexpectedEndOfInput`.
    pub fn expect_operator_error(
        &mut self,
        text: &str,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if let Some(token) = self
            .current_token()
            .filter(|token| token.is_operator(text))
            .cloned()
        {
            self.last_line = Some(token.line);
            self.pos += 1;
            return Ok(token);
        }

        match error {
            Some(error) => Err(error),
            None => Err(match self.current_token() {
                Some(token) => self.unexpected_token(token),
                None => self.end_of_input(&format!("`{}`", text)),
            }),
        }
    }

    /// Returns the line of the current token, or of the end of input.
    pub fn get_position(&self) -> Position {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|token| Position(token.line))
            .unwrap_or(Position(1))
    }

    pub fn unexpected_token(&self, token: &Token) -> Error {
        Error::at_token(
            ErrorImpl::UnexpectedToken {
                token: token.describe(),
            },
            token,
        )
    }

    pub fn end_of_input(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected),
            },
            self.get_position(),
        )
    }
}

/// Parses a token stream holding exactly one statement.
///
/// The statement is an assignment when the stream starts with a variable name
/// followed by `=`, otherwise an expression. Anything left over after the
/// statement is an `UnexpectedToken` error.
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);

    let node = parse_statement(&mut parser)?;

    if let Some(token) = parser.current_token() {
        return Err(parser.unexpected_token(token));
    }

    Ok(node)
}

/// Parses every statement in a token stream, stopping at the first error.
///
/// An empty stream (or one holding only `EndOfFile`) is an empty program.
pub fn parse_program(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);

    let mut body = vec![];

    while let Some(token) = parser.current_token() {
        // Statements end at a line break
        if !body.is_empty() && parser.continues_line(token) {
            return Err(parser.unexpected_token(token));
        }

        body.push(parse_statement(&mut parser)?);
    }

    debug!("parsed {} statements", body.len());
    Ok(Program { body })
}
