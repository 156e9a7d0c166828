//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Significant indentation, emitted as `Indent`/`Dedent` tokens
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
