use std::{
    fs,
    io::{self, Read},
    process,
};

use clap::Parser;
use xmas::{TraceEvent, TraceSink, run, run_traced};

/// xmas is a small scripting language for grid-shaped puzzle input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the program to run. The program is read from stdin when
    /// omitted.
    script: Option<String>,

    /// Text file exposed to the program as the `input` grid.
    #[arg(short, long, value_name = "PATH")]
    input: Option<String>,

    /// Prints every assignment, operator, condition and loop iteration to
    /// stderr while the program runs.
    #[arg(short, long)]
    debug: bool,

    /// Treats the positional argument as program text instead of a path.
    #[arg(short, long, requires = "script")]
    eval: bool,
}

/// Writes trace events to stderr as they happen.
struct StderrSink;

impl TraceSink for StderrSink {
    fn record(&mut self, event: TraceEvent) {
        eprintln!("DEBUG: {event}");
    }
}

fn read_file(path: &str, what: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| {
                                eprintln!("Failed to read the {what} file '{path}'. Perhaps this file does not exist?");
                                process::exit(1);
                            })
}

fn main() {
    let args = Args::parse();

    let source = match (&args.script, args.eval) {
        (Some(text), true) => text.clone(),
        (Some(path), false) => read_file(path, "script"),
        (None, _) => {
            let mut text = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut text) {
                eprintln!("Failed to read the program from stdin: {e}");
                process::exit(1);
            }
            text
        },
    };

    let input = args.input.as_deref().map(|path| read_file(path, "input"));

    let result = if args.debug {
        run_traced(&source, input.as_deref(), &mut StderrSink)
    } else {
        run(&source, input.as_deref())
    };

    match result {
        Ok(value) if value.is_nothing() => {},
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
