use std::io::{self, BufRead, Write};

use clap::Parser;
use fcalc::evaluate_formula;

/// fcalc is an interactive calculator for arithmetic formulas whose tokens
/// are separated by single spaces.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single formula and exits instead of starting the prompt.
    #[arg(short, long)]
    eval: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Some(formula) = args.eval {
        match evaluate_formula(&formula) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = repl() {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

/// Runs the interactive prompt until the quit word or end of input.
///
/// Every line is one formula. Results and diagnostics both go to standard
/// output, so a captured session reads in the order it happened. The exact
/// line `bye` ends the session with a farewell; end of input ends it
/// silently.
fn repl() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let formula = line.trim_end_matches(['\r', '\n']);

        if formula == "bye" {
            writeln!(stdout, "BYE")?;
            return Ok(());
        }

        match evaluate_formula(formula) {
            Ok(result) => writeln!(stdout, "{result}")?,
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }
}
