// caretspell-suggest: Look words up in the dictionary.
//
// Prints each word's exact match or nearest suggestions. Reads words from
// stdin (one per line) when none are given on the command line.
//
// Usage:
//   caretspell-suggest [-d DICT] [--json] [WORD...]

use std::io::{self, BufRead, Write};

use caretspell_cli::{CommonArgs, fatal, format_result};
use caretspell_engine::SpellChecker;
use clap::Parser;

/// Print exact matches or spelling suggestions for words.
#[derive(Parser, Debug)]
#[command(name = "caretspell-suggest", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print one JSON object per word: {"word", "exact", "suggestions"}
    #[arg(long)]
    json: bool,

    /// Words to look up; stdin is read when empty
    words: Vec<String>,
}

fn suggest_word(
    word: &str,
    checker: &SpellChecker,
    json: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let result = checker.find_suggestions(word);
    if json {
        let line = serde_json::json!({
            "word": word,
            "exact": result.exact,
            "suggestions": result.suggestions,
        });
        writeln!(out, "{line}")
    } else {
        writeln!(out, "{}", format_result(word, &result))
    }
}

fn write_failed(e: io::Error) -> ! {
    fatal(&format!("failed to write output: {e}"))
}

fn main() {
    let cli = Cli::parse();
    let (checker, _options) = cli.common.setup();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
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
            suggest_word(word, &checker, cli.json, &mut out).unwrap_or_else(|e| write_failed(e));
        }
    } else {
        for word in &cli.words {
            suggest_word(word, &checker, cli.json, &mut out).unwrap_or_else(|e| write_failed(e));
        }
    }
    out.flush().unwrap_or_else(|e| write_failed(e));
}
