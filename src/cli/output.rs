//! Output formatting for CLI results.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{FtsTokenizeArgs, OutputFormat};
use crate::error::Result;
use crate::fts::module::TokenizerKind;

/// Result of tokenizing one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub tokenizer: String,
    pub args: Vec<String>,
    pub input_bytes: usize,
    pub tokens: Vec<Token>,
}

/// One built-in tokenizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerInfo {
    pub name: String,
    pub kind: TokenizerKind,
    pub version: u32,
}

/// Output tokens in the selected format.
///
/// JSON output is one token per line, or the whole result as one document
/// with `--pretty`.
pub fn output_tokens(
    result: &TokenizeResult,
    args: &FtsTokenizeArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(
                    out,
                    "{} {:?}: {} token(s) from {} byte(s)",
                    result.tokenizer,
                    result.args,
                    result.tokens.len(),
                    result.input_bytes
                )?;
            }
            for token in &result.tokens {
                writeln!(out, "{}", format_token(token))?;
            }
            Ok(())
        }
        OutputFormat::Json if args.pretty => output_json(result, args, out),
        OutputFormat::Json => {
            for token in &result.tokens {
                serde_json::to_writer(&mut *out, token)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Output the tokenizer list in the selected format.
pub fn output_tokenizers(
    tokenizers: &[TokenizerInfo],
    long: bool,
    args: &FtsTokenizeArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for info in tokenizers {
                if long {
                    writeln!(out, "{:<16}{:<18}v{}", info.name, info.kind.to_string(), info.version)?;
                } else {
                    writeln!(out, "{}", info.name)?;
                }
            }
            Ok(())
        }
        OutputFormat::Json if args.pretty => output_json(&tokenizers, args, out),
        OutputFormat::Json => {
            for info in tokenizers {
                serde_json::to_writer(&mut *out, info)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FtsTokenizeArgs, out: &mut dyn Write) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}

/// One token per line: position, byte span and text.
fn format_token(token: &Token) -> String {
    format!(
        "{:>4}  {:>6}..{:<6}  {}",
        token.position,
        token.start_offset,
        token.end_offset,
        token.text.escape_debug()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token() {
        let token = Token::with_offsets("hello", 0, 3, 8);
        assert_eq!(format_token(&token), "   0       3..8       hello");
    }

    #[test]
    fn test_format_token_escapes_control_characters() {
        let token = Token::with_offsets("a\tb", 1, 0, 3);
        assert!(format_token(&token).ends_with("a\\tb"));
    }
}
