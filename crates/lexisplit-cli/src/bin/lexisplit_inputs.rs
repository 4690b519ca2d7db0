// lexisplit-inputs: List saved submissions.
//
// Prints every record in the input log as a JSON array.
//
// Usage:
//   lexisplit-inputs [-s STORE_PATH]
//
// Options:
//   -s, --store PATH       Input log location (default: storage/inputs.txt)
//   -h, --help              Print help

use std::io::{self, Write};

use lexisplit_cli::store::InputLog;

fn main() {
    lexisplit_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (store, args) = lexisplit_cli::parse_store_path(&args);

    if lexisplit_cli::wants_help(&args) {
        println!("lexisplit-inputs: List saved submissions as JSON.");
        println!();
        println!("Usage: lexisplit-inputs [-s STORE_PATH]");
        println!();
        println!("Options:");
        println!("  -s, --store PATH       Input log location (default: storage/inputs.txt)");
        println!("  -h, --help              Print this help");
        return;
    }

    let path = lexisplit_cli::store_path(store.as_deref());
    let records = InputLog::open(&path)
        .and_then(|log| log.read_all())
        .unwrap_or_else(|e| lexisplit_cli::fatal(&format!("{}: {e}", path.display())));

    let json = serde_json::to_string_pretty(&records)
        .unwrap_or_else(|e| lexisplit_cli::fatal(&format!("failed to encode records: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = writeln!(out, "{json}");
}
