mod highlighter;
mod lexer;
mod prompt;

use bumpalo::Bump;
use clap::Parser;
use lispy::{render_diagnostic, render_error};
use lispy_core::{api::ParseOptions, evaluator::Evaluator, parser, values};
use miette::{IntoDiagnostic, Result};
use reedline::{
    EditCommand, Emacs, FileBackedHistory, KeyCode, KeyModifiers, Keybindings, Reedline,
    ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;

use crate::highlighter::{Highlighter, ParenValidator};
use crate::prompt::LispyPrompt;

const HISTORY_CAPACITY: usize = 1000;

/// Lispy - a prefix-notation integer calculator
#[derive(Parser, Debug)]
#[command(name = "lispy", version)]
#[command(about = "Evaluate prefix arithmetic expressions", long_about = None)]
struct Args {
    /// Print the parsed AST (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Point at the subexpression that produced an error value
    #[arg(long)]
    explain: bool,

    /// Maximum nesting depth of parenthesized expressions
    #[arg(long, default_value_t = lispy_core::api::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not read or write the REPL history file
    #[arg(long)]
    no_history: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("lispy").join("history.txt"))
}

fn setup_reedline(use_history: bool) -> Result<(Reedline, LispyPrompt)> {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(ParenValidator))
        .with_edit_mode(edit_mode);

    if use_history {
        if let Some(path) = history_path() {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).into_diagnostic()?;
            }
            let history = FileBackedHistory::with_file(HISTORY_CAPACITY, path).into_diagnostic()?;
            line_editor = line_editor.with_history(Box::new(history));
        } else {
            tracing::warn!("no data directory; history is kept in memory only");
        }
    }

    Ok((line_editor, LispyPrompt))
}

/// Parse, evaluate and print one input line.
///
/// The arena holding the syntax tree is dropped on every path out of here.
fn interpret_input(input: &str, args: &Args) {
    let arena = Bump::new();
    let options = ParseOptions {
        max_depth: args.max_depth,
    };

    let parsed = match parser::parse_with_options(&arena, input, &options) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(kind = ?e.kind, "rejected input");
            render_error(&e.into());
            return;
        }
    };

    if args.debug_parse {
        println!("=== Parsed AST ===");
        println!("{:#?}", parsed.expr);
        println!();
    }

    let mut evaluator = Evaluator::new(&parsed);
    let value = evaluator.eval();
    println!("{}", values::format(value));

    if args.explain {
        if let Some(diagnostic) = evaluator.diagnostic(value) {
            render_diagnostic(input, &diagnostic);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(expr, &args);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline(!args.no_history)?;

        println!("Lispy Version 0.0.1");
        println!("Press Ctrl+c to exit\n");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    if buffer.trim().is_empty() {
                        continue;
                    }
                    interpret_input(&buffer, &args);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            if line.trim().is_empty() {
                continue;
            }
            interpret_input(&line, &args);
        }
    }

    Ok(())
}
