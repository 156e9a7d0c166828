use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    column: Option<usize>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            column: None,
        }
    }

    /// Creates an error located at the start of `token`.
    pub fn at_token(error_impl: ErrorImpl, token: &Token) -> Self {
        Error {
            internal_error: error_impl,
            position: Position(token.line),
            column: Some(token.column),
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// The 0-based character column the error points at, when known.
    pub fn get_column(&self) -> Option<usize> {
        self.column
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The text of the token the error was reported at, if there was one.
    pub fn get_token(&self) -> Option<&str> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token }
            | ErrorImpl::UnexpectedTokenDetailed { token, .. }
            | ErrorImpl::UnmatchedParenthesis { token }
            | ErrorImpl::MalformedAssignmentTarget { token }
            | ErrorImpl::InvalidNumericLiteral { token } => Some(token.as_str()),
            ErrorImpl::UnexpectedEndOfInput { .. } => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnmatchedParenthesis { .. } => "UnmatchedParenthesis",
            ErrorImpl::MalformedAssignmentTarget { .. } => "MalformedAssignmentTarget",
            ErrorImpl::InvalidNumericLiteral { .. } => "InvalidNumericLiteral",
        }
    }

    pub fn get_tip(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => format!("Unexpected token: `{}`", token),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                format!("Unexpected token: `{}`, {}", token, message)
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                format!("Unexpected end of input, expected {}", expected)
            }
            ErrorImpl::UnmatchedParenthesis { .. } => {
                String::from("This `(` is never closed, add a `)`")
            }
            ErrorImpl::MalformedAssignmentTarget { token } => format!(
                "Cannot assign to `{}`, only a variable name may appear left of `=`",
                token
            ),
            ErrorImpl::InvalidNumericLiteral { token } => format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            ),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] {}", self.position.0, self.internal_error)
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unmatched parenthesis: {token:?}")]
    UnmatchedParenthesis { token: String },
    #[error("malformed assignment target: {token:?}")]
    MalformedAssignmentTarget { token: String },
    #[error("invalid numeric literal: {token:?}")]
    InvalidNumericLiteral { token: String },
}
