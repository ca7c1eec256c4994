//! Command-line interface for Punycode label and domain conversion.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

/// Labelcode - Punycode conversion for internationalized domain names
#[derive(Parser, Debug)]
#[command(name = "labelcode")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Punycode-encode label strings (reads stdin if none given)
    Encode { text: Vec<String> },
    /// Decode Punycode label strings (reads stdin if none given)
    Decode { text: Vec<String> },
    /// Convert Unicode domain names to their xn-- form
    ToAscii { domains: Vec<String> },
    /// Convert xn-- domain names back to Unicode
    ToUnicode { domains: Vec<String> },
}

fn main() {
    let args = Args::parse();

    let (inputs, convert): (Vec<String>, fn(&str) -> labelcode::Result<String>) =
        match args.command {
            Command::Encode { text } => (text, labelcode::encode),
            Command::Decode { text } => (text, labelcode::decode),
            Command::ToAscii { domains } => (domains, labelcode::unicode_to_punycode),
            Command::ToUnicode { domains } => (domains, labelcode::punycode_to_unicode),
        };

    if inputs.is_empty() {
        run_stdin(convert);
    } else {
        for input in &inputs {
            emit(input, convert(input));
        }
    }
}

/// Convert stdin line by line, writing results to stdout.
fn run_stdin(convert: fn(&str) -> labelcode::Result<String>) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for line in stdin.lock().lines() {
        match line {
            Ok(s) => match convert(&s) {
                Ok(converted) => {
                    let _ = writeln!(stdout, "{}", converted);
                }
                Err(e) => {
                    eprintln!("Error converting '{}': {}", s, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn emit(input: &str, result: labelcode::Result<String>) {
    match result {
        Ok(converted) => println!("{}", converted),
        Err(e) => {
            eprintln!("Error converting '{}': {}", input, e);
            std::process::exit(1);
        }
    }
}
