use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use infix_eval::{Calculator, token::format_tokens, util::num::format_number};
use log::LevelFilter;

/// infix-eval evaluates calculator-style arithmetic such as `2(3+4)−1÷2`.
///
/// Use `−` to subtract, `×` to multiply, `÷` to divide, `^` for powers and
/// `-` to negate.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infix-eval to read expressions from a file, one per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the validated token stream instead of the result.
    #[arg(short, long)]
    tokens: bool,

    /// Logs every evaluation stage.
    #[arg(short, long)]
    verbose: bool,

    /// An expression, or a path with `--file`. Without it, expressions are
    /// read from standard input.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let lines: Vec<Result<String, String>> = match (&args.contents, args.file) {
        (Some(path), true) => match fs::read_to_string(path) {
            Ok(text) => text.lines().map(|l| Ok(l.to_owned())).collect(),
            Err(_) => {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        },
        (Some(expression), false) => vec![Ok(expression.clone())],
        (None, _) => match read_stdin_lines() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                return ExitCode::FAILURE;
            },
        },
    };

    let calculator = Calculator::new();
    let mut failed = false;

    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(message) => {
                failed = true;
                eprintln!("{message}");
                continue;
            },
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let outcome = if args.tokens {
            calculator.validate(line).map(|tokens| format_tokens(&tokens))
        } else {
            calculator.evaluate(line).map(format_number)
        };
        match outcome {
            Ok(text) => println!("{text}"),
            Err(e) => {
                failed = true;
                println!("{}", e.kind());
                eprintln!("{e}");
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Reads standard input to the end and splits it into lines.
///
/// A line that is not valid UTF-8 becomes an `Err` naming its line number,
/// so the lines after it are still evaluated.
fn read_stdin_lines() -> io::Result<Vec<Result<String, String>>> {
    let mut bytes = Vec::new();
    io::stdin().lock().read_to_end(&mut bytes)?;

    Ok(bytes.split(|&b| b == b'\n')
            .enumerate()
            .map(|(i, line)| {
                String::from_utf8(line.to_vec()).map_err(|_| {
                    format!("Line {} of standard input is not valid UTF-8.", i + 1)
                })
            })
            .collect())
}
