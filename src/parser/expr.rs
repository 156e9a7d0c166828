use log::trace;

use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryOperator, Variable},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

const OPERAND: &str = "an integer, a variable or `(`";

/// Deepest parenthesis nesting accepted before the parse is abandoned.
pub const MAX_NESTING: usize = 256;

/// statement := assignment | expression
///
/// Two tokens of lookahead pick the production: a variable name followed by
/// `=` on the same line starts an assignment.
pub fn parse_statement(parser: &mut Parser) -> Result<Node, Error> {
    let Some(start) = parser.current_token().cloned() else {
        return Err(parser.end_of_input(OPERAND));
    };

    let starts_assignment = start.kind == TokenKind::Identifier
        && matches!(
            parser.peek_token(1),
            Some(token) if token.is_operator("=") && token.line == start.line
        );

    if starts_assignment {
        trace!("line {}: assignment", start.line);
        return parse_assignment(parser);
    }

    let expr = parse_expression(parser)?;

    if let Some(token) = parser.current_token() {
        if token.is_operator("=") && parser.continues_line(token) {
            return Err(Error::at_token(
                ErrorImpl::MalformedAssignmentTarget {
                    token: expr.to_string(),
                },
                &start,
            ));
        }
    }

    Ok(expr)
}

/// assignment := IDENT '=' expression
pub fn parse_assignment(parser: &mut Parser) -> Result<Node, Error> {
    let target = match parser.current_token() {
        Some(token) if token.kind == TokenKind::Identifier => Variable::new(token.text.clone()),
        Some(token) => {
            return Err(Error::at_token(
                ErrorImpl::MalformedAssignmentTarget {
                    token: token.describe(),
                },
                token,
            ))
        }
        None => return Err(parser.end_of_input("a variable name")),
    };
    parser.advance();

    let Some(token) = parser.current_token() else {
        return Err(parser.end_of_input("`=` after variable name"));
    };
    let error = Error::at_token(
        ErrorImpl::UnexpectedTokenDetailed {
            token: token.describe(),
            message: String::from("expected `=` after variable name"),
        },
        token,
    );
    parser.expect_operator_error("=", Some(error))?;

    let value = parse_expression(parser)?;

    Ok(Node::assignment(target, value))
}

/// expression := term (('+' | '-') term)*
pub fn parse_expression(parser: &mut Parser) -> Result<Node, Error> {
    let mut left = parse_term(parser)?;

    while let Some(op) = operator_at(parser, BinaryOperator::additive) {
        parser.advance();
        let right = parse_term(parser)?;
        left = Node::binary(op, left, right);
    }

    Ok(left)
}

/// term := factor (('*' | '/') factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Node, Error> {
    let mut left = parse_factor(parser)?;

    while let Some(op) = operator_at(parser, BinaryOperator::multiplicative) {
        parser.advance();
        let right = parse_factor(parser)?;
        left = Node::binary(op, left, right);
    }

    Ok(left)
}

/// factor := INTEGER | IDENT | '(' expression ')'
pub fn parse_factor(parser: &mut Parser) -> Result<Node, Error> {
    let Some(token) = parser.current_token().cloned() else {
        return Err(parser.end_of_input(OPERAND));
    };

    match token.kind {
        TokenKind::IntegerLiteral => {
            let value = token.text.parse::<i64>().map_err(|_| {
                Error::at_token(
                    ErrorImpl::InvalidNumericLiteral {
                        token: token.text.clone(),
                    },
                    &token,
                )
            })?;
            parser.advance();
            Ok(Node::integer(value))
        }
        TokenKind::Identifier => {
            parser.advance();
            Ok(Node::variable(token.text))
        }
        TokenKind::Operator if token.text == "(" => parse_grouping_expr(parser, token),
        _ => Err(parser.unexpected_token(&token)),
    }
}

/// Parses `'(' expression ')'`, reporting a missing `)` at the opening paren.
///
/// Line breaks inside the parentheses do not end the statement.
fn parse_grouping_expr(parser: &mut Parser, open: Token) -> Result<Node, Error> {
    if parser.depth >= MAX_NESTING {
        return Err(Error::at_token(
            ErrorImpl::UnexpectedTokenDetailed {
                token: open.text.clone(),
                message: format!("parentheses nest deeper than {} levels", MAX_NESTING),
            },
            &open,
        ));
    }

    parser.advance();
    parser.depth += 1;
    let expr = parse_expression(parser)?;
    parser.depth -= 1;

    let unmatched = Error::at_token(
        ErrorImpl::UnmatchedParenthesis {
            token: open.text.clone(),
        },
        &open,
    );
    parser.expect_operator_error(")", Some(unmatched))?;

    Ok(expr)
}

fn operator_at(
    parser: &Parser,
    lookup: fn(&str) -> Option<BinaryOperator>,
) -> Option<BinaryOperator> {
    parser
        .current_token()
        .filter(|token| token.kind == TokenKind::Operator && parser.continues_line(token))
        .and_then(|token| lookup(&token.text))
}
