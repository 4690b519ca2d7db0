// lexisplit-cli: shared utilities for CLI tools.

pub mod store;

use std::path::{Path, PathBuf};
use std::process;

use lexisplit_core::tree::DecompositionTree;
use lexisplit_en::handle::LexHandle;
use tracing_subscriber::EnvFilter;

/// Dictionary file name looked up inside search directories.
const DICT_FILE: &str = "words.json";

/// Default location of the submitted-input log.
pub const DEFAULT_STORE_PATH: &str = "storage/inputs.txt";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LEXISPLIT_LOG";

/// Install a stderr log subscriber filtered by `LEXISPLIT_LOG`.
///
/// Defaults to `warn` when the variable is unset or invalid. Records emitted
/// by the engine through the `log` facade are forwarded as well.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Rendered output of `lexisplit-analyze`.
#[derive(Debug)]
pub struct Analysis {
    /// Pretty JSON: trees, or noun/unknown labels.
    pub json: String,
    /// The trees, when they were printed or requested for saving.
    pub trees: Option<Vec<DecompositionTree>>,
}

/// Tokenize `text` once and render it as trees or labels.
///
/// Trees are only decomposed when printed or when `keep_trees` is set.
pub fn analyze_text(
    handle: &LexHandle,
    text: &str,
    labels: bool,
    keep_trees: bool,
) -> Result<Analysis, serde_json::Error> {
    let tokens = handle.tokenize(text);
    let trees = (!labels || keep_trees).then(|| handle.classify(&tokens));
    let json = match &trees {
        Some(trees) if !labels => serde_json::to_string_pretty(trees)?,
        _ => serde_json::to_string_pretty(&handle.label(&tokens))?,
    };
    Ok(Analysis { json, trees })
}

/// Search for the dictionary and create a LexHandle.
///
/// Search order:
/// 1. `dict_path` argument (a file, or a directory containing `words.json`)
/// 2. `LEXISPLIT_DICT_PATH` environment variable (file or directory)
/// 3. `~/.lexisplit/words.json`
/// 4. `/usr/share/lexisplit/words.json`
/// 5. `./data/words.json`, then `./words.json`
pub fn load_handle(dict_path: Option<&str>) -> Result<LexHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let Some(file) = resolve_dict_file(candidate) else {
            continue;
        };
        let data = std::fs::read(&file)
            .map_err(|e| format!("failed to read {}: {}", file.display(), e))?;
        let handle = LexHandle::from_json(&data)
            .map_err(|e| format!("{}: {e}", file.display()))?;
        tracing::info!(
            path = %file.display(),
            nouns = handle.dictionary().noun_count(),
            "loaded dictionary"
        );
        return Ok(handle);
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// A path is usable if it is a file, or a directory holding `words.json`.
fn resolve_dict_file(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let inner = path.join(DICT_FILE);
    inner.is_file().then_some(inner)
}

/// Build the list of locations to search for the dictionary.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("LEXISPLIT_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".lexisplit").join(DICT_FILE));
    }

    paths.push(PathBuf::from("/usr/share/lexisplit").join(DICT_FILE));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("data").join(DICT_FILE));
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Resolve the input-log path: explicit argument, then `LEXISPLIT_STORE`,
/// then [`DEFAULT_STORE_PATH`].
pub fn store_path(store: Option<&str>) -> PathBuf {
    store
        .map(PathBuf::from)
        .or_else(|| std::env::var("LEXISPLIT_STORE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
}

/// Extract a `--long=VALUE`, `--long VALUE` or `-s VALUE` option.
///
/// Returns `(value, remaining_args)`. The last occurrence wins. Fails when
/// the option is given without a value.
pub fn parse_option(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let long_eq = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "--dict-path", "-d").unwrap_or_else(|e| fatal(&e))
}

/// Parse a `--store=PATH` or `-s PATH` argument.
pub fn parse_store_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "--store", "-s").unwrap_or_else(|e| fatal(&e))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if a bare flag such as `--json` is in the args.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_option_with_equals() {
        let (val, rest) =
            parse_option(&args(&["--dict-path=/tmp/w.json", "cats"]), "--dict-path", "-d").unwrap();
        assert_eq!(val.as_deref(), Some("/tmp/w.json"));
        assert_eq!(rest, args(&["cats"]));
    }

    #[test]
    fn parse_option_with_separate_value() {
        let (val, rest) =
            parse_option(&args(&["cats", "-d", "dir", "dogs"]), "--dict-path", "-d").unwrap();
        assert_eq!(val.as_deref(), Some("dir"));
        assert_eq!(rest, args(&["cats", "dogs"]));
    }

    #[test]
    fn parse_option_missing_value() {
        let err = parse_option(&args(&["--store"]), "--store", "-s").unwrap_err();
        assert_eq!(err, "--store requires a value");
    }

    #[test]
    fn parse_option_absent() {
        let (val, rest) = parse_option(&args(&["--json"]), "--store", "-s").unwrap();
        assert_eq!(val, None);
        assert_eq!(rest, args(&["--json"]));
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/opt/dict"));
        assert_eq!(paths[0], PathBuf::from("/opt/dict"));
    }

    #[test]
    fn explicit_store_path_wins() {
        assert_eq!(store_path(Some("x/y.txt")), PathBuf::from("x/y.txt"));
    }

    #[test]
    fn resolve_accepts_file_or_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_dict_file(dir.path()), None);

        let file = dir.path().join(DICT_FILE);
        std::fs::write(&file, "{}").unwrap();
        assert_eq!(resolve_dict_file(dir.path()), Some(file.clone()));
        assert_eq!(resolve_dict_file(&file), Some(file));
    }

    #[test]
    fn load_handle_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.json");
        std::fs::write(&file, r#"{ "nouns": { "c": ["cat"] } }"#).unwrap();
        let handle = load_handle(file.to_str()).unwrap();
        assert!(handle.split_word("cats").success());
    }

    #[test]
    fn load_handle_reports_bad_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(DICT_FILE);
        std::fs::write(&file, r#"{ "nouns": ["dog"] }"#).unwrap();
        let err = load_handle(dir.path().to_str()).unwrap_err();
        assert!(err.contains("malformed dictionary JSON"), "{err}");
    }

    fn handle() -> LexHandle {
        LexHandle::from_json(br#"{ "nouns": { "c": ["cat"], "h": ["house", "boat"] } }"#).unwrap()
    }

    #[test]
    fn analyze_text_prints_trees() {
        let analysis = analyze_text(&handle(), "Cats and houseboats", false, false).unwrap();
        let trees = analysis.trees.unwrap();
        assert_eq!(trees.len(), 3);
        assert!(trees[0].success());
        assert!(!trees[1].success());
        let printed: Vec<DecompositionTree> = serde_json::from_str(&analysis.json).unwrap();
        assert_eq!(printed, trees);
    }

    #[test]
    fn analyze_text_labels_skip_trees() {
        let analysis = analyze_text(&handle(), "cat dog", true, false).unwrap();
        assert!(analysis.trees.is_none());
        let printed: serde_json::Value = serde_json::from_str(&analysis.json).unwrap();
        assert_eq!(
            printed,
            serde_json::json!([
                { "token": "cat", "type": "noun" },
                { "token": "dog", "type": "unknown" }
            ])
        );
    }

    #[test]
    fn analyze_text_labels_keep_trees_for_saving() {
        let analysis = analyze_text(&handle(), "cat dog", true, true).unwrap();
        assert_eq!(analysis.trees.map(|t| t.len()), Some(2));
        assert!(analysis.json.contains("\"type\": \"noun\""));
    }

    #[test]
    fn flags() {
        let a = args(&["--json", "-h"]);
        assert!(has_flag(&a, "--json"));
        assert!(wants_help(&a));
        assert!(!has_flag(&a, "--save"));
    }
}
