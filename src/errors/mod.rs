//! Error types and error handling for the parser.
//!
//! This module defines the errors returned when a token stream does not
//! form a valid program. It includes:
//!
//! - Error structures carrying the line of the offending token
//! - Specific error variants for each way a parse can fail
//! - Helpful error messages and suggestions

pub mod errors;
