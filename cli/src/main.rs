mod commands;
mod highlighter;
mod lexer;
mod shell;

use clap::Parser;
use decicalc::{CalculatorOptions, DEFAULT_SCALE, MAX_SCALE, Notation};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, EditCommand, Emacs,
    FileBackedHistory, IdeMenu, KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;

use crate::commands::COMMAND_NAMES;
use crate::highlighter::{BracketValidator, Highlighter};
use crate::shell::{Outcome, Shell};

const HISTORY_SIZE: usize = 1000;

/// Decicalc - an arbitrary-precision decimal calculator
#[derive(Parser, Debug)]
#[command(name = "decicalc")]
#[command(about = "Evaluate infix or postfix decimal arithmetic", long_about = None)]
struct Args {
    /// Number of fractional digits a division rounds to
    #[arg(
        long,
        default_value_t = DEFAULT_SCALE,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_SCALE))
    )]
    scale: u32,

    /// Notation to read: infix or postfix
    #[arg(long, default_value_t = Notation::Postfix)]
    mode: Notation,

    /// Expression to evaluate (if not provided, starts a shell or reads stdin)
    expression: Option<String>,
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline() -> Reedline {
    let commands: Vec<String> = COMMAND_NAMES.iter().map(|name| name.to_string()).collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&[':']);
        completions.insert(commands);
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(BracketValidator))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    // History is best effort: without a data directory the shell still works.
    if let Some(dir) = dirs::data_dir().map(|dir| dir.join("decicalc")) {
        let history = std::fs::create_dir_all(&dir)
            .ok()
            .and_then(|_| FileBackedHistory::with_file(HISTORY_SIZE, dir.join("history.txt")).ok());
        match history {
            Some(history) => line_editor = line_editor.with_history(Box::new(history)),
            None => tracing::debug!(dir = %dir.display(), "history disabled"),
        }
    }

    line_editor
}

fn prompt_for(notation: Notation) -> DefaultPrompt {
    DefaultPrompt::new(
        DefaultPromptSegment::Basic(notation.to_string()),
        DefaultPromptSegment::Empty,
    )
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

    let options = CalculatorOptions::with_scale(args.scale);
    let is_interactive = atty::is(atty::Stream::Stdin);
    let mut shell = Shell::new(args.mode, options, atty::is(atty::Stream::Stdout));

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        shell
            .handle_line(&expr, &mut stdout, &mut stderr)
            .into_diagnostic()?;
        return Ok(());
    }

    if is_interactive {
        // Interactive REPL mode
        let mut line_editor = setup_reedline();
        shell.banner(&mut stdout).into_diagnostic()?;

        loop {
            let prompt = prompt_for(shell.notation());
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    let outcome = shell
                        .handle_line(&buffer, &mut stdout, &mut stderr)
                        .into_diagnostic()?;
                    if outcome == Outcome::Quit {
                        return Ok(());
                    }
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
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            let outcome = shell
                .handle_line(&line, &mut stdout, &mut stderr)
                .into_diagnostic()?;
            if outcome == Outcome::Quit {
                break;
            }
        }
    }

    Ok(())
}
