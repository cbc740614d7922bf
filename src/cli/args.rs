//! Command line argument parsing for the `fts-tokenize` CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::fts::extension::UNICODESN_TOKENIZER_NAME;

/// fts-tokenize - run the full-text search tokenizers over text
#[derive(Parser, Debug, Clone)]
#[command(name = "fts-tokenize")]
#[command(about = "Tokenize text with the built-in full-text search tokenizers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FtsTokenizeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FtsTokenizeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize a file, stdin or a literal text
    Tokenize(TokenizeArgs),

    /// List the built-in tokenizers
    List(ListArgs),
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Input file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Tokenize this text instead of reading input
    #[arg(long)]
    pub text: Option<String>,

    /// Tokenizer name (HTMLTokenizer, character, unicodesn)
    #[arg(short, long, default_value = UNICODESN_TOKENIZER_NAME, env = "FTS_TOKENIZER")]
    pub tokenizer: String,

    /// Tokenizer argument, e.g. `stemmer=english` (repeatable)
    #[arg(short = 'a', long = "arg", value_name = "ARG")]
    pub args: Vec<String>,
}

impl TokenizeArgs {
    /// Whether input comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.text.is_none()
            && self
                .input
                .as_ref()
                .is_none_or(|path| path.as_os_str() == "-")
    }
}

/// Arguments for listing tokenizers
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Show module kind and version
    #[arg(short, long)]
    pub long: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON lines
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_command() {
        let args = FtsTokenizeArgs::try_parse_from([
            "fts-tokenize",
            "tokenize",
            "doc.html",
            "--tokenizer",
            "HTMLTokenizer",
            "-a",
            "stemmer=english",
            "--arg",
            "casefold=0",
        ])
        .unwrap();

        if let Command::Tokenize(tokenize) = args.command {
            assert_eq!(tokenize.input, Some(PathBuf::from("doc.html")));
            assert_eq!(tokenize.tokenizer, "HTMLTokenizer");
            assert_eq!(tokenize.args, vec!["stemmer=english", "casefold=0"]);
            assert!(!tokenize.reads_stdin());
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_tokenize_defaults_to_stdin() {
        let args = FtsTokenizeArgs::try_parse_from(["fts-tokenize", "tokenize"]).unwrap();
        let Command::Tokenize(tokenize) = args.command else {
            panic!("Expected Tokenize command");
        };
        assert!(tokenize.reads_stdin());
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_text_conflicts_with_input() {
        let result = FtsTokenizeArgs::try_parse_from([
            "fts-tokenize",
            "tokenize",
            "file.txt",
            "--text",
            "hello",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            FtsTokenizeArgs::try_parse_from(["fts-tokenize", "list", "-f", "json", "-vv"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 2);
        assert!(matches!(args.command, Command::List(_)));
    }

    #[test]
    fn test_verbosity() {
        let args = FtsTokenizeArgs::try_parse_from(["fts-tokenize", "-q", "-v", "list"]).unwrap();
        assert_eq!(args.verbosity(), 0);
        let args = FtsTokenizeArgs::try_parse_from(["fts-tokenize", "list"]).unwrap();
        assert_eq!(args.verbosity(), 1);
    }
}
