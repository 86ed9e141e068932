//! SSQL tokenizer CLI support.
//!
//! Argument parsing, input loading and token rendering for the `ssql`
//! binary. Kept in a library so the pieces can be tested without spawning
//! a process.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Once;

use ssql_lexer::{EscapePolicy, LexerConfig, Session};

/// Query tokenized when no input is given.
pub const DEMO_QUERY: &str = "\
-- List players victories and scores.
SELECT
    player.id AS \"Player ID\",
    player.nick_name AS \"Nickname\",
    AGE(CURRENT_TIMESTAMP, player.created_at) AS \"Account age\",
    SUM(match.score) AS \"Total Score\",
    COUNT(CASE WHEN match.state = 'won' THEN 1 END) AS \"Victories\"
FROM game.player
LEFT JOIN game.player_match match
    ON match.player_id = player.id
WHERE player.status != 'inactive'
    AND player.rank >= 2000
    /*AND player.rank BETWEEN 2000 AND 3000*/
    AND player.deleted_at IS NULL
GROUP BY player.id
";

pub const USAGE: &str = "\
Usage: ssql [options] [<file> | -]

Tokenizes <file>, standard input (`-`), or a built-in demo query.

Options:
  --collapse-text-escapes        Store '' inside text literals as '
  --preserve-identifier-escapes  Store \"\" inside quoted identifiers verbatim
  -h, --help                     Show this help

Set RUST_LOG (e.g. RUST_LOG=ssql_lexer=trace) for tokenizer logs.
";

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Where the query text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    Demo,
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Demo => f.write_str("<demo>"),
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub input: Input,
    pub config: LexerConfig,
    pub help: bool,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut input = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--collapse-text-escapes" => {
                options.config = options
                    .config
                    .with_text_literal_escapes(EscapePolicy::Collapse);
            }
            "--preserve-identifier-escapes" => {
                options.config = options
                    .config
                    .with_quoted_identifier_escapes(EscapePolicy::Preserve);
            }
            "-" => set_input(&mut input, Input::Stdin)?,
            flag if flag.starts_with('-') => return Err(format!("unknown option `{flag}`")),
            path => set_input(&mut input, Input::File(PathBuf::from(path)))?,
        }
    }

    options.input = input.unwrap_or_default();
    Ok(options)
}

fn set_input(slot: &mut Option<Input>, next: Input) -> Result<(), String> {
    if let Some(existing) = slot {
        return Err(format!("multiple inputs given: {existing} and {next}"));
    }
    *slot = Some(next);
    Ok(())
}

/// Load the query text.
pub fn read_input(input: &Input) -> io::Result<String> {
    match input {
        Input::Demo => Ok(DEMO_QUERY.to_owned()),
        Input::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Input::File(path) => std::fs::read_to_string(path),
    }
}

/// Print the token count and one line per token.
pub fn write_tokens(out: &mut impl Write, session: &Session<'_>) -> io::Result<()> {
    let tokens = session.tokens();
    writeln!(out, "Tokens generated: x{}", tokens.len())?;
    for (i, token) in tokens.iter().enumerate() {
        writeln!(out, "Token #{i}: {}", session.display(token))?;
    }
    Ok(())
}
