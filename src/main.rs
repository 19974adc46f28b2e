use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use deskcalc::{
    config::{Config, parse_definition},
    run,
};

/// deskcalc is an interactive desk calculator with variables.
///
/// Statements end with `;`. Declare variables with `let x = 1;`, assign them
/// with `x = 2;` and quit with `q`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads statements from a file instead of standard input.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Quiet mode does not print the `> ` prompt, which is handy when
    /// piping statements in.
    #[arg(short, long)]
    quiet: bool,

    /// Declares an extra variable before the session starts. May be given
    /// more than once.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    definitions: Vec<(String, f64)>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = Config { prompt:      !args.quiet,
                          definitions: args.definitions, };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diagnostics = stderr.lock();

    let result = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => run(BufReader::new(file), &mut out, &mut diagnostics, &config),
            Err(e) => {
                eprintln!("Failed to open the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        None => run(io::stdin().lock(), &mut out, &mut diagnostics, &config),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
