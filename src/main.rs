use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use eucalyptus::{
    interpreter::{evaluator::core::Interpreter, parser::parse, reserved::ReservedNames},
    run,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// eucalyptus is a small scripting language where every statement is a
/// function call.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells eucalyptus to treat CONTENTS as the path of a script file.
    #[arg(short, long)]
    file: bool,

    /// Newline-delimited file of extra names programs may not define.
    #[arg(short, long, value_name = "PATH")]
    reserved: Option<PathBuf>,

    /// Pipe mode prints the last value a top-level call produced.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Logs statements and function calls to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The script to run. Starts an interactive prompt when omitted.
    contents: Option<String>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(false))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let reserved = match &args.reserved {
        Some(path) => match ReservedNames::from_file(path) {
            Ok(reserved) => reserved,
            Err(e) => {
                eprintln!("Failed to read the reserved names file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        None => ReservedNames::default(),
    };
    tracing::debug!(count = reserved.len(), "loaded reserved names");

    let Some(contents) = args.contents else {
        return repl(reserved);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match run(&script, reserved) {
        Ok(result) => {
            if args.pipe_mode
               && let Some(value) = result
            {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Reads programs line by line and runs them against one interpreter, so
/// definitions carry over between lines. Stops at `exit` or end of input.
fn repl(reserved: ReservedNames) -> ExitCode {
    let mut interpreter = Interpreter::new(reserved);
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }

        let source = line.trim();
        if source == "exit" {
            return ExitCode::SUCCESS;
        }
        if source.is_empty() {
            continue;
        }

        let outcome = parse(source).map_err(eucalyptus::error::Error::from)
                                   .and_then(|program| Ok(interpreter.interpret(&program)?));
        match outcome {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}
