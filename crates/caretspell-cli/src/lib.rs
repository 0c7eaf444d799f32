// caretspell-cli: shared utilities for CLI tools.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use caretspell_engine::matcher::{MatchResult, Suggestions};
use caretspell_engine::{Dictionary, DictionaryError, SessionOptions, SpellChecker};
use clap::Args;
use log::LevelFilter;

/// Environment variable naming a dictionary file or directory.
pub const DICT_PATH_ENV: &str = "CARETSPELL_DICT_PATH";

/// Per-user dictionary directory under `$HOME`.
const USER_DICT_DIR: &str = ".caretspell";

/// Dictionary file names looked up inside a directory, in order.
const DICT_FILES: &[&str] = &["words.json", "words.txt"];

/// Error type for CLI setup failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file is not valid session options JSON.
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The dictionary was found but could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// No dictionary file exists in any search location.
    #[error("could not find a dictionary in any of the search paths:\n{}", format_paths(.searched))]
    DictionaryNotFound { searched: Vec<PathBuf> },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Shared arguments
// ---------------------------------------------------------------------------

/// Options every caretspell tool accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Dictionary file (.json array or one word per line) or a directory
    /// containing words.json / words.txt
    #[arg(short, long, value_name = "PATH", env = DICT_PATH_ENV)]
    pub dict: Option<PathBuf>,

    /// Session options as JSON, e.g. {"debounceMs": 500, "boundaryKeys": [" ", ","]}
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging, then load the checker and session options,
    /// exiting on failure.
    pub fn setup(&self) -> (SpellChecker, SessionOptions) {
        init_logging(self.verbose);
        let checker = load_checker(self.dict.as_deref()).unwrap_or_else(|e| fatal(&e.to_string()));
        let options =
            load_options(self.config.as_deref()).unwrap_or_else(|e| fatal(&e.to_string()));
        (checker, options)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Map a `-v` count to a log level filter.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger on stderr. `RUST_LOG`, when set, overrides the
/// level chosen by `verbose`.
pub fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

/// Search for a dictionary file and build a checker from it.
///
/// Search order:
/// 1. `dict_path` argument (if provided; also filled from `CARETSPELL_DICT_PATH`)
/// 2. `CARETSPELL_DICT_PATH` environment variable
/// 3. `~/.caretspell/words.json`, `~/.caretspell/words.txt`
/// 4. Current working directory
///
/// A directory entry is expanded to its `words.json` and `words.txt`.
pub fn load_checker(dict_path: Option<&Path>) -> Result<SpellChecker, ConfigError> {
    let env_path = std::env::var_os(DICT_PATH_ENV).map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let cwd = std::env::current_dir().ok();
    let candidates = build_search_paths(dict_path, env_path.as_deref(), home.as_deref(), cwd.as_deref());

    for path in &candidates {
        if path.is_file() {
            log::info!("using dictionary {}", path.display());
            return Ok(SpellChecker::new(Dictionary::load(path)?));
        }
    }
    Err(ConfigError::DictionaryNotFound {
        searched: candidates,
    })
}

/// Build the ordered list of candidate dictionary files.
fn build_search_paths(
    dict_path: Option<&Path>,
    env_path: Option<&Path>,
    home: Option<&Path>,
    cwd: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        push_candidates(&mut paths, p);
    }

    // 2. CARETSPELL_DICT_PATH environment variable
    if let Some(p) = env_path {
        push_candidates(&mut paths, p);
    }

    // 3. Home directory
    if let Some(home) = home {
        push_candidates(&mut paths, &home.join(USER_DICT_DIR));
    }

    // 4. Current directory
    if let Some(cwd) = cwd {
        push_candidates(&mut paths, cwd);
    }

    paths.dedup();
    paths
}

/// A path with a file extension names a file; anything else is treated
/// as a directory holding one of `DICT_FILES`.
fn push_candidates(paths: &mut Vec<PathBuf>, path: &Path) {
    if path.extension().is_some() || path.is_file() {
        paths.push(path.to_path_buf());
    } else {
        paths.extend(DICT_FILES.iter().map(|name| path.join(name)));
    }
}

// ---------------------------------------------------------------------------
// Session options
// ---------------------------------------------------------------------------

/// Read session options from a JSON file, or the defaults when no file is
/// given. Missing fields keep their defaults.
pub fn load_options(config: Option<&Path>) -> Result<SessionOptions, ConfigError> {
    let Some(path) = config else {
        return Ok(SessionOptions::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("session options from {}: {options:?}", path.display());
    Ok(options)
}

fn parse_options(text: &str) -> Result<SessionOptions, serde_json::Error> {
    serde_json::from_str(text)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Human-readable rendering of one lookup.
pub fn format_result(word: &str, result: &MatchResult) -> String {
    match &result.suggestions {
        Suggestions::NoSuggestionNeeded => format!("{word} (correct)"),
        Suggestions::Candidates(list) if list.is_empty() => format!("{word}: (no suggestions)"),
        Suggestions::Candidates(list) => {
            let mut out = format!("{word}:");
            for candidate in list {
                out.push_str("\n  ");
                out.push_str(candidate);
            }
            out
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn search_order() {
        let paths = build_search_paths(
            Some(Path::new("/data/custom.txt")),
            Some(Path::new("/env/dicts")),
            Some(Path::new("/home/u")),
            Some(Path::new("/work")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/data/custom.txt"),
                PathBuf::from("/env/dicts/words.json"),
                PathBuf::from("/env/dicts/words.txt"),
                PathBuf::from("/home/u/.caretspell/words.json"),
                PathBuf::from("/home/u/.caretspell/words.txt"),
                PathBuf::from("/work/words.json"),
                PathBuf::from("/work/words.txt"),
            ]
        );
    }

    #[test]
    fn search_without_sources() {
        assert!(build_search_paths(None, None, None, None).is_empty());
    }

    #[test]
    fn missing_dictionary_lists_searched_paths() {
        let err = ConfigError::DictionaryNotFound {
            searched: build_search_paths(None, None, Some(Path::new("/home/u")), None),
        };
        assert_eq!(
            err.to_string(),
            "could not find a dictionary in any of the search paths:\n  \
             - /home/u/.caretspell/words.json\n  - /home/u/.caretspell/words.txt"
        );
    }

    #[test]
    fn options_default_without_file() {
        let options = load_options(None).unwrap();
        assert_eq!(options.debounce, Duration::from_millis(1000));
        assert_eq!(options.boundary_keys, vec![' ']);
    }

    #[test]
    fn options_from_json() {
        let options = parse_options(r#"{"debounceMs": 250, "boundaryKeys": [" ", ","]}"#).unwrap();
        assert_eq!(options.debounce, Duration::from_millis(250));
        assert_eq!(options.boundary_keys, vec![' ', ',']);
    }

    #[test]
    fn options_reject_bad_json() {
        assert!(parse_options("{debounceMs: }").is_err());
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = load_options(Some(Path::new("/nonexistent/caretspell.json")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn format_results() {
        let exact = MatchResult::exact(vec!["world".to_string()]);
        assert_eq!(format_result("world", &exact), "world (correct)");

        let none = MatchResult::candidates(Vec::new());
        assert_eq!(format_result("xyzzy", &none), "xyzzy: (no suggestions)");

        let two = MatchResult::candidates(vec!["hello".to_string(), "help".to_string()]);
        assert_eq!(format_result("helo", &two), "helo:\n  hello\n  help");
    }
}
