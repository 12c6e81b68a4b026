use clap::Parser;
use lox_scanner::{Error, Reporter, Result, Scanner, Token};
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// sysexits.h
const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_IOERR: i32 = 74;

/// Scan Lox source and print one token per line.
#[derive(Debug, Parser)]
#[command(name = "rlox", version)]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,
}

/// Prints diagnostics to stderr and remembers whether any were reported.
struct ConsoleReporter {
    had_error: bool,
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        eprintln!("{}", Error::lexical(line, message));
        self.had_error = true;
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(EX_USAGE);
        },
        Err(e) => e.exit(),
    };

    let result = match cli.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    };

    match result {
        Ok(false) => (),
        Ok(true) => process::exit(EX_DATAERR),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(EX_IOERR);
        },
    }
}

/// Returns whether the file had lexical errors.
fn run_file(path: &Path) -> Result<bool> {
    info!(path = %path.display(), "scanning file");
    let contents = std::fs::read_to_string(path)?;
    let mut reporter = ConsoleReporter { had_error: false };
    run(&contents, &mut reporter)?;
    Ok(reporter.had_error)
}

fn run_prompt() -> Result<bool> {
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();

        let num_bytes = stdin.lock().read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        // errors on one line don't carry over to the next
        let mut reporter = ConsoleReporter { had_error: false };
        run(&buffer, &mut reporter)?;
    }

    Ok(false)
}

fn run(source: &str, reporter: &mut ConsoleReporter) -> Result<()> {
    let tokens = Scanner::new(source).scan_all(reporter);
    print_tokens(&tokens, &mut io::stdout().lock())
}

fn print_tokens(tokens: &[Token], out: &mut impl Write) -> Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}
