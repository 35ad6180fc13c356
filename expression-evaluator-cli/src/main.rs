mod render;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_evaluator::interpreter::{lexer, tokens_to_string};
use log::info;
use std::io;
use std::io::{BufRead, Write};

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to evaluate. Read line by line from stdin when omitted
    expressions: Vec<String>,

    /// Print the normalized tokens of each expression instead of its value
    #[clap(short, long)]
    tokens: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if args.expressions.is_empty() {
        info!("Reading expressions from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read expression from stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            respond(&mut output, &line, args.tokens)?;
        }
    } else {
        for expression in &args.expressions {
            respond(&mut output, expression, args.tokens)?;
        }
    }

    Ok(())
}

fn respond(output: &mut impl Write, expression: &str, show_tokens: bool) -> Result<()> {
    let response = if show_tokens {
        match lexer::tokenize(expression) {
            Ok(tokens) => tokens_to_string(&tokens)?,
            Err(error) => render::render_error(&error),
        }
    } else {
        render::render(expression)
    };
    writeln!(output, "{}", response).context("Failed to write response")
}
