//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive-descent parser with
//! one function per grammar rule:
//!
//! ```text
//! statement  := assignment | expression
//! assignment := IDENT '=' expression
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := INTEGER | IDENT | '(' expression ')'
//! ```
//!
//! Precedence comes from the call chain (expression calls term calls
//! factor), and each level folds to the left, so `a - b - c` groups as
//! `(a - b) - c`. The first error aborts the parse.

pub mod expr;
pub mod parser;
