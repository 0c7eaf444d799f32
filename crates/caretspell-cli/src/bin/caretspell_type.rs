// caretspell-type: Replay typed text through an editing session.
//
// Each stdin line is typed one keystroke at a time into an in-memory
// surface. Boundary keys (space by default) correct the word just
// finished, exactly as they would in an editor. The corrected line is
// printed.
//
// Usage:
//   caretspell-type [-d DICT] [-c CONFIG] [--report] < input.txt

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use caretspell_cli::{CommonArgs, fatal};
use caretspell_engine::matcher::MatchResult;
use caretspell_engine::session::{EditingSession, InputSurface, TextBuffer};
use clap::Parser;

/// Type stdin lines through an editing session and print the result.
#[derive(Parser, Debug)]
#[command(name = "caretspell-type", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// After each line, print every lookup result as JSON
    #[arg(long)]
    report: bool,
}

/// Print a corrected line, followed by its lookup results when `report`
/// is set.
fn print_line(
    out: &mut impl Write,
    text: &str,
    results: &[MatchResult],
    report: bool,
) -> io::Result<()> {
    writeln!(out, "{text}")?;
    if report {
        for result in results {
            writeln!(out, "  {}", serde_json::to_string(result)?)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let (checker, options) = cli.common.setup();
    let checker = Rc::new(checker);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let stdin = io::stdin();
    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        let mut session = EditingSession::new(
            format!("line-{}", line_no + 1),
            TextBuffer::new(""),
            Rc::clone(&checker),
            options.clone(),
        );
        let results = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&results);
        session.set_result_callback(move |r| sink.borrow_mut().push(r.clone()));

        for c in line.chars() {
            session.surface_mut().insert(c);
            if let Some(outcome) = session.key_typed(c) {
                if let Some(replacement) = &outcome.replacement {
                    log::info!("{:?} -> {:?}", outcome.word, replacement);
                }
            }
        }

        print_line(&mut out, &session.surface().text(), &results.borrow(), cli.report)
            .unwrap_or_else(|e| fatal(&format!("failed to write output: {e}")));
    }
    out.flush()
        .unwrap_or_else(|e| fatal(&format!("failed to write output: {e}")));
}
