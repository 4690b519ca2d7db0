// lexisplit-analyze: Tokenize text and decompose every token.
//
// Reads text from stdin, prints the decomposition trees as a JSON array,
// and optionally appends the submission to the input log.
//
// Usage:
//   lexisplit-analyze [-d DICT_PATH] [--save] [-s STORE_PATH] [--labels]
//
// Options:
//   -d, --dict-path PATH   Dictionary file or directory containing words.json
//   --save                 Append the text and its trees to the input log
//   -s, --store PATH       Input log location (default: storage/inputs.txt)
//   --labels               Print noun/unknown labels instead of trees
//   -h, --help              Print help

use std::io::{self, Read, Write};

use lexisplit_cli::store::InputLog;

fn main() {
    lexisplit_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexisplit_cli::parse_dict_path(&args);
    let (store, args) = lexisplit_cli::parse_store_path(&args);

    if lexisplit_cli::wants_help(&args) {
        println!("lexisplit-analyze: Tokenize text and decompose every token.");
        println!();
        println!("Usage: lexisplit-analyze [-d DICT_PATH] [--save] [-s STORE_PATH] [--labels]");
        println!();
        println!("Reads text from stdin and prints a JSON array of decomposition trees.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file or directory containing words.json");
        println!("  --save                 Append the text and its trees to the input log");
        println!("  -s, --store PATH       Input log location (default: storage/inputs.txt)");
        println!("  --labels               Print noun/unknown labels instead of trees");
        println!("  -h, --help              Print this help");
        return;
    }

    let save = lexisplit_cli::has_flag(&args, "--save");
    let labels = lexisplit_cli::has_flag(&args, "--labels");

    let handle = lexisplit_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| lexisplit_cli::fatal(&e));

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| lexisplit_cli::fatal(&format!("failed to read stdin: {e}")));
    let text = input.trim();
    if text.is_empty() {
        lexisplit_cli::fatal("no input");
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let analysis = lexisplit_cli::analyze_text(&handle, text, labels, save)
        .unwrap_or_else(|e| lexisplit_cli::fatal(&format!("failed to encode result: {e}")));
    let _ = writeln!(out, "{}", analysis.json);

    if save {
        let path = lexisplit_cli::store_path(store.as_deref());
        let trees = analysis.trees.unwrap_or_default();
        let result = InputLog::open(&path).and_then(|log| log.append(text, trees));
        match result {
            Ok(_) => {
                let _ = writeln!(out, "saved to {}", path.display());
            }
            Err(e) => lexisplit_cli::fatal(&format!("failed to save: {e}")),
        }
    }
}
