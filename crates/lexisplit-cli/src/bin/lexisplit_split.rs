// lexisplit-split: Decompose words into morphological parts.
//
// Reads words from the command line, or from stdin (one per line), and
// prints the decomposition of each.
//
// Usage:
//   lexisplit-split [-d DICT_PATH] [--json] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file or directory containing words.json
//   --json                 Print decomposition trees as JSON lines
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use lexisplit_core::tree::DecompositionTree;
use lexisplit_en::handle::LexHandle;

fn main() {
    lexisplit_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexisplit_cli::parse_dict_path(&args);

    if lexisplit_cli::wants_help(&args) {
        println!("lexisplit-split: Decompose words into morphological parts.");
        println!();
        println!("Usage: lexisplit-split [-d DICT_PATH] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, decomposes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file or directory containing words.json");
        println!("  --json                 Print decomposition trees as JSON lines");
        println!("  -h, --help              Print this help");
        return;
    }

    let json = lexisplit_cli::has_flag(&args, "--json");
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let handle = lexisplit_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| lexisplit_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let split = |word: &str, handle: &LexHandle, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        // Lowercased but not tokenized: "well-known" stays one word.
        let tree = handle.split_word(&word.to_ascii_lowercase());
        if json {
            match serde_json::to_string(&tree) {
                Ok(line) => {
                    let _ = writeln!(out, "{line}");
                }
                Err(e) => lexisplit_cli::fatal(&format!("failed to encode tree: {e}")),
            }
        } else {
            write_tree(out, &tree);
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            split(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            split(word, &handle, &mut out);
        }
    }
}

fn write_tree(out: &mut impl Write, tree: &DecompositionTree) {
    if !tree.success() {
        let _ = writeln!(out, "{}: (no decomposition)", tree.original());
        return;
    }
    let parts: Vec<String> = tree
        .parts()
        .iter()
        .map(|p| format!("{}[{}]", p.value(), p.kind()))
        .collect();
    let _ = writeln!(out, "{}: {}", tree.original(), parts.join(" + "));
}
