// lexisplit-tokenize: Tokenize text from stdin.
//
// Reads text from stdin and prints each word token with its character span.
//
// Usage:
//   lexisplit-tokenize [OPTIONS]
//
// Options:
//   -h, --help              Print help

use std::io::{self, Read, Write};

fn main() {
    lexisplit_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexisplit_cli::wants_help(&args) {
        println!("lexisplit-tokenize: Split text into lowercase word tokens.");
        println!();
        println!("Usage: lexisplit-tokenize < TEXT");
        println!();
        println!("Reads text from stdin and prints one token per line:");
        println!("  [ POS.. END]: token");
        println!();
        println!("Only the letters a-z (in either case) form words; everything");
        println!("else, including accented letters, separates tokens.");
        println!();
        println!("Options:");
        println!("  -h, --help              Print this help");
        return;
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| lexisplit_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in lexisplit_en::tokenizer::tokens(&input) {
        let _ = writeln!(out, "[{:>4}..{:>4}]: {}", token.pos, token.end(), token.text);
    }
}
