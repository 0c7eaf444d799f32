// caretspell-advise: Show the advisory a caret position would produce.
//
// Runs the caret-move path once on TEXT with the caret at --caret (default:
// end of text) and prints the proposed replacement. With --apply the
// advisory is activated and the corrected text is printed instead.
//
// Usage:
//   caretspell-advise [-d DICT] [--caret N] [--apply] TEXT

use std::rc::Rc;
use std::time::Duration;

use caretspell_cli::{CommonArgs, fatal};
use caretspell_engine::session::{EditingSession, MemoryRegistry, TextBuffer};
use clap::Parser;

/// Surface id used for the single in-memory buffer.
const SURFACE_ID: &str = "text";

/// Print the advisory for the word at a caret offset.
#[derive(Parser, Debug)]
#[command(name = "caretspell-advise", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Caret offset in chars (default: end of text)
    #[arg(long, value_name = "N")]
    caret: Option<usize>,

    /// Apply the advisory and print the corrected text
    #[arg(long)]
    apply: bool,

    /// Print the advisory as JSON
    #[arg(long)]
    json: bool,

    /// The text to check
    text: String,
}

fn main() {
    let cli = Cli::parse();
    let (checker, options) = cli.common.setup();

    let char_len = cli.text.chars().count();
    let caret = cli.caret.unwrap_or(char_len);
    if caret > char_len {
        fatal(&format!("caret {caret} is past the end of the text ({char_len} chars)"));
    }

    let mut registry = MemoryRegistry::new();
    let buffer = registry.insert(SURFACE_ID, TextBuffer::with_caret(cli.text.as_str(), caret));
    let mut session = EditingSession::attach(&registry, SURFACE_ID, Rc::new(checker), options)
        .unwrap_or_else(|e| fatal(&e.to_string()));

    // Simulate one caret move followed by the quiet period.
    let delay = session.options().debounce;
    session.caret_moved(Duration::ZERO);
    let Some(advisory) = session.tick(delay).cloned() else {
        if cli.apply {
            println!("{}", cli.text);
        } else {
            println!("(no advisory)");
        }
        return;
    };

    if cli.apply {
        session.activate_advisory(advisory.id);
        println!("{}", buffer.borrow().as_str());
    } else if cli.json {
        match serde_json::to_string(&advisory) {
            Ok(json) => println!("{json}"),
            Err(e) => fatal(&format!("failed to encode advisory: {e}")),
        }
    } else {
        println!("{} -> {}", advisory.original_word, advisory.replacement);
    }
}
