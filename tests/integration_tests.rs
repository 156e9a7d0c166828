//! Integration tests for the end-to-end pipeline.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, and run the command-line driver against files on disk.

use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
    thread,
    time::{SystemTime, UNIX_EPOCH},
};

use pyexpr::{
    ast::ast::Node,
    display_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::{parse, parse_program},
};

fn write_temp_source(name: &str, contents: &[u8]) -> PathBuf {
    let base = std::env::temp_dir().join("pyexpr_cli_tests");
    fs::create_dir_all(&base).unwrap();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = base.join(format!("{}_{}.py", name, now));
    fs::write(&path, contents).unwrap();
    path
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pyexpr"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_pipeline_tree_output() {
    let program = parse_program(tokenize("x = 5\ny = x * (2 + 3)\n")).unwrap();

    assert_eq!(
        program.to_tree_string(),
        "Assignment Node\n  Variable Node: x\n  Integer Node: 5\n\
         Assignment Node\n  Variable Node: y\n  Multiplication Node\n    Variable Node: x\n    Addition Node\n      Integer Node: 2\n      Integer Node: 3\n"
    );
}

#[test]
fn test_pipeline_error_rendering() {
    let source = "total = 1\nrest = (total - 2\n";
    let error = parse_program(tokenize(source)).unwrap_err();

    let rendered = display_error(&error, source, "main.py");
    assert_eq!(
        rendered,
        "Error: UnmatchedParenthesis (This `(` is never closed, add a `)`)\n\
         -> main.py\n  |\n2 | rest = (total - 2\n  |        ^\n"
    );
}

#[test]
fn test_pipeline_end_of_input_rendering() {
    let source = "x = 1 +";
    let error = parse(tokenize(source)).unwrap_err();

    let rendered = display_error(&error, source, "main.py");
    assert!(rendered.ends_with("1 | x = 1 +\n  |        ^\n"), "{}", rendered);
}

#[test]
fn test_pipeline_is_thread_independent() {
    let sources = ["a = 1 + 2 * 3", "b = (4 - 5) / 6", "c = 7 - 8 - 9", "d = e"];

    let handles = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            thread::spawn(move || parse(tokenize(&source)).map(|node| node.to_string()))
        })
        .collect::<Vec<_>>();

    let results = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(
        results,
        vec![
            "a = (1 + (2 * 3))",
            "b = ((4 - 5) / 6)",
            "c = ((7 - 8) - 9)",
            "d = e",
        ]
    );
}

#[test]
fn test_pipeline_indented_block_tokens() {
    let source = "while x:\n    x = x - 1\nprint\n";
    let tokens = tokenize(source);

    let structural = tokens
        .iter()
        .filter(|token| matches!(token.kind, TokenKind::Indent | TokenKind::Dedent))
        .map(|token| (token.kind, token.line))
        .collect::<Vec<_>>();

    assert_eq!(
        structural,
        vec![(TokenKind::Indent, 2), (TokenKind::Dedent, 3)]
    );
}

#[test]
fn test_pipeline_rejects_indented_statement() {
    let error = parse_program(tokenize("x = 1\n    y = 2\n")).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_pipeline_single_statement() {
    assert_eq!(
        parse(tokenize("answer = 6 * 7")).unwrap(),
        Node::assign(
            Node::variable("answer"),
            Node::binary(
                pyexpr::ast::expressions::BinaryOperator::Mul,
                Node::integer(6),
                Node::integer(7)
            )
        )
    );
}

#[test]
fn test_cli_prints_tree() {
    let path = write_temp_source("ok", b"x = 1 + 2\n");
    let output = run_cli(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Assignment Node\n  Variable Node: x\n  Addition Node\n    Integer Node: 1\n    Integer Node: 2\n"
    );
}

#[test]
fn test_cli_usage_error() {
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));

    let output = run_cli(&["a.py", "b.py"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_cli_missing_file() {
    let output = run_cli(&["/definitely/not/here.py"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unable to open file"));
}

#[test]
fn test_cli_parse_error() {
    let path = write_temp_source("bad", b"x = (1 + 2\n");
    let output = run_cli(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("UnmatchedParenthesis"));
}

#[test]
fn test_cli_invalid_utf8_is_a_parse_error() {
    let path = write_temp_source("bytes", &[b'x', b' ', b'=', b' ', 0xff, b'\n']);
    let output = run_cli(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("UnexpectedToken"));
}
