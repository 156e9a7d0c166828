use std::{env, fs, process::ExitCode, time::Instant};

use log::{debug, info};
use pyexpr::{display_error, lexer::lexer::tokenize, parser::parser::parse_program};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("pyexpr");
        eprintln!("Usage: {} <file.py>", program);
        return ExitCode::from(1);
    }

    let file_path: &str = &args[1];

    let bytes = match fs::read(file_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Error: Unable to open file {}: {}", file_path, err);
            return ExitCode::from(1);
        }
    };
    let file_contents = String::from_utf8_lossy(&bytes);

    let start = Instant::now();

    let tokens = tokenize(&file_contents);

    info!("Tokenized in {:?}", start.elapsed());
    for token in &tokens {
        debug!("{}", token);
    }

    let parse_start = Instant::now();
    let parsed = parse_program(tokens);

    info!("Parsed in {:?}", parse_start.elapsed());

    match parsed {
        Ok(program) => {
            print!("{}", program.to_tree_string());
            info!("Total time: {:?}", start.elapsed());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprint!("{}", display_error(&error, &file_contents, file_path));
            ExitCode::from(1)
        }
    }
}
