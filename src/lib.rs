#![allow(clippy::module_inception)]

use crate::errors::errors::Error;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line number in the source being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    if position.0 == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(position.0 - 1)
        .map(|line| line.trim_end_matches('\r'))
}


/// Renders a parse error against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `$`)
/// -> main.py
///   |
/// 2 | y = 2 $ 3
///   |       ^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Error: {} ({})\n",
        error.get_error_name(),
        error.get_tip()
    ));
    output.push_str(&format!("-> {}\n", file));

    let position = *error.get_position();
    let Some(line_text) = get_line_at_position(source, position) else {
        return output;
    };

    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed) = remove_starting_whitespace(line_text);
    let line_text_removed = line_text_removed.trim_end();
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed));

    // Without a token (end of input) the caret sits just past the line.
    let column = match (error.get_column(), error.get_token()) {
        (Some(column), _) => Some(column.saturating_sub(removed)),
        (None, None) => Some(line_text_removed.chars().count()),
        (None, Some(_)) => None,
    };

    if let Some(column) = column {
        let arrows = column + 1;
        output.push_str(&format!("{:>padding$} {:>arrows$}\n", "|", "^"));
    }

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
