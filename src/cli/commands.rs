//! CLI command implementations.

use std::fs;
use std::io::{self, Read, Write};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::fts::connection::Connection;
use crate::fts::extension::{self, BUILTIN_NAMES};

/// Execute a CLI command, writing results to stdout.
pub fn execute_command(args: FtsTokenizeArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, writing results to `out`.
pub fn execute_command_to(args: &FtsTokenizeArgs, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, args, out),
        Command::List(list_args) => list_tokenizers(list_args, args, out),
    }
}

/// Tokenize one input with a built-in tokenizer.
fn tokenize(args: &TokenizeArgs, cli_args: &FtsTokenizeArgs, out: &mut dyn Write) -> Result<()> {
    let input = read_input(args)?;
    log::info!("tokenizing {} byte(s) with '{}'", input.len(), args.tokenizer);

    let mut conn = Connection::open();
    extension::register_named_tokenizer(&mut conn, &args.tokenizer)?;
    let module = conn.registry().lookup(&args.tokenizer)?;
    let instance = module.create(&args.args)?;

    let mut cursor = instance.open(&input)?;
    let tokens = cursor.collect_tokens()?;
    cursor.close();

    let result = TokenizeResult {
        tokenizer: args.tokenizer.clone(),
        args: args.args.clone(),
        input_bytes: input.len(),
        tokens,
    };
    output_tokens(&result, cli_args, out)
}

fn read_input(args: &TokenizeArgs) -> Result<Vec<u8>> {
    if let Some(text) = &args.text {
        return Ok(text.as_bytes().to_vec());
    }
    match &args.input {
        Some(path) if !args.reads_stdin() => Ok(fs::read(path)?),
        _ => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// List the built-in tokenizers.
fn list_tokenizers(args: &ListArgs, cli_args: &FtsTokenizeArgs, out: &mut dyn Write) -> Result<()> {
    let tokenizers: Vec<TokenizerInfo> = BUILTIN_NAMES
        .iter()
        .filter_map(|&name| {
            extension::builtin_module(name).map(|module| TokenizerInfo {
                name: name.to_string(),
                kind: module.kind(),
                version: module.version(),
            })
        })
        .collect();
    output_tokenizers(&tokenizers, args.long, cli_args, out)
}
