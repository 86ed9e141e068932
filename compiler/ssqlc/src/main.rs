//! SSQL tokenizer CLI
//!
//! Tokenizes a query and prints one line per token.

use ssql_lexer::Session;
use ssqlc::{init_tracing, parse_args, read_input, write_tokens, USAGE};
use tracing::debug;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(1);
        }
    };

    if options.help {
        print!("{USAGE}");
        return;
    }

    let source = match read_input(&options.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", options.input);
            std::process::exit(1);
        }
    };
    debug!(input = %options.input, bytes = source.len(), "read input");

    let mut session = Session::with_config(&source, options.config);
    if let Err(err) = session.tokenize() {
        eprintln!("Failed to tokenize: {} at {}", err.kind, err.pos);
        eprintln!("  hint: {}", err.kind.hint());
        std::process::exit(1);
    }

    let mut out = std::io::stdout().lock();
    if let Err(err) = write_tokens(&mut out, &session) {
        eprintln!("error: cannot write output: {err}");
        std::process::exit(1);
    }
}
