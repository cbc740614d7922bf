//! Connection model: a tokenizer registry plus the FTS tables that use it.
//!
//! Registrations live only as long as the connection. A reopened connection
//! starts empty, so extensions must register their tokenizers again.
//!
//! Tables are declared the way FTS tables are in SQL:
//!
//! ```text
//! CREATE VIRTUAL TABLE notes USING fts4(title, body, tokenize=unicodesn stemmer=english)
//! ```
//!
//! Only the table name, the columns and the `tokenize=` clause are
//! interpreted. Creating a table looks the tokenizer up and creates its
//! instance before the table is recorded, so a failure leaves nothing behind.

use std::fmt;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::{FtsError, Result};
use crate::fts::instance::TokenizerInstance;
use crate::fts::module::TokenizerModule;
use crate::fts::registry::TokenizerRegistry;

type Pattern = LazyLock<std::result::Result<Regex, regex::Error>>;

static CREATE_VIRTUAL_TABLE: Pattern = LazyLock::new(|| {
    Regex::new(
        r#"(?is)^\s*CREATE\s+VIRTUAL\s+TABLE\s+(IF\s+NOT\s+EXISTS\s+)?(?:["`\[]?([A-Za-z_][A-Za-z0-9_]*)["`\]]?)\s+USING\s+(fts3|fts4|fts5)\s*\((.*)\)\s*;?\s*$"#,
    )
});

static TOKENIZE_OPTION: Pattern =
    LazyLock::new(|| Regex::new(r"(?is)^tokenize(?:\s*=\s*|\s+)(.*)$"));

fn compiled(pattern: &'static Pattern) -> Result<&'static Regex> {
    pattern
        .as_ref()
        .map_err(|e| FtsError::invalid_state(format!("declaration pattern failed to compile: {e}")))
}

/// The FTS module a table is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FtsVersion {
    Fts3,
    Fts4,
    Fts5,
}

impl FtsVersion {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fts3" => Some(FtsVersion::Fts3),
            "fts4" => Some(FtsVersion::Fts4),
            "fts5" => Some(FtsVersion::Fts5),
            _ => None,
        }
    }
}

impl fmt::Display for FtsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FtsVersion::Fts3 => "fts3",
            FtsVersion::Fts4 => "fts4",
            FtsVersion::Fts5 => "fts5",
        };
        f.write_str(s)
    }
}

/// A parsed `tokenize=name arg1 arg2 ...` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeClause {
    pub name: String,
    pub args: Vec<String>,
}

impl TokenizeClause {
    /// Parse the value of a `tokenize` option: a tokenizer name followed by
    /// whitespace-separated arguments. The whole value, the name and each
    /// argument may be quoted.
    pub fn parse(value: &str) -> Result<Self> {
        let value = dequote(value.trim());
        let mut words = split_words(value).into_iter();
        let name = words
            .next()
            .ok_or_else(|| FtsError::invalid_argument("tokenize clause names no tokenizer"))?;
        Ok(TokenizeClause {
            name,
            args: words.collect(),
        })
    }
}

impl fmt::Display for TokenizeClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tokenize={}", self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// A parsed `CREATE VIRTUAL TABLE` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtsTableDecl {
    pub name: String,
    pub version: FtsVersion,
    pub if_not_exists: bool,
    pub columns: Vec<String>,
    pub tokenize: TokenizeClause,
}

impl FtsTableDecl {
    /// Parse a declaration. A `tokenize` clause is required.
    pub fn parse(sql: &str) -> Result<Self> {
        let tokenize_option = compiled(&TOKENIZE_OPTION)?;
        let caps = compiled(&CREATE_VIRTUAL_TABLE)?.captures(sql).ok_or_else(|| {
            FtsError::invalid_argument(format!("not an FTS table declaration: {sql}"))
        })?;

        let name = caps[2].to_string();
        let version = FtsVersion::parse(&caps[3])
            .ok_or_else(|| FtsError::invalid_argument(format!("unknown FTS module {}", &caps[3])))?;

        let mut columns = Vec::new();
        let mut tokenize = None;
        for item in split_top_level(&caps[4]) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            if let Some(option) = tokenize_option.captures(item) {
                tokenize = Some(TokenizeClause::parse(&option[1])?);
            } else if !item.contains('=') {
                let column = item.split_whitespace().next().unwrap_or(item);
                columns.push(dequote(column).to_string());
            }
        }

        let tokenize = tokenize.ok_or_else(|| {
            FtsError::invalid_argument(format!("table '{name}' declares no tokenize clause"))
        })?;

        Ok(FtsTableDecl {
            name,
            version,
            if_not_exists: caps.get(1).is_some(),
            columns,
            tokenize,
        })
    }
}

/// Split on commas that are not inside quotes or parentheses.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"' | '`') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                items.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&body[start..]);
    items
}

/// Split on whitespace outside quotes, removing the quotes.
fn split_words(value: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for c in value.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' || c == '`' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

fn dequote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        let quoted = matches!((first, last), (b'\'', b'\'') | (b'"', b'"') | (b'`', b'`') | (b'[', b']'));
        if quoted {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// An FTS table with its own tokenizer instance.
#[derive(Debug)]
pub struct FtsTable {
    decl: FtsTableDecl,
    instance: TokenizerInstance,
}

impl FtsTable {
    pub fn name(&self) -> &str {
        &self.decl.name
    }

    pub fn decl(&self) -> &FtsTableDecl {
        &self.decl
    }

    pub fn instance(&self) -> &TokenizerInstance {
        &self.instance
    }

    /// Tokenize one document with this table's tokenizer.
    pub fn tokenize(&self, document: &[u8]) -> Result<Vec<Token>> {
        let mut cursor = self.instance.open(document)?;
        let tokens = cursor.collect_tokens();
        cursor.close();
        tokens
    }

    /// Whether every term of `query`, tokenized the same way as documents,
    /// occurs in `document`.
    pub fn matches(&self, document: &[u8], query: &str) -> Result<bool> {
        let terms = self.tokenize(query.as_bytes())?;
        if terms.is_empty() {
            return Ok(false);
        }
        let document = self.tokenize(document)?;
        Ok(terms
            .iter()
            .all(|term| document.iter().any(|token| token.text == term.text)))
    }
}

/// A database connection as far as tokenizers are concerned.
#[derive(Debug)]
pub struct Connection {
    registry: TokenizerRegistry,
    tables: AHashMap<String, FtsTable>,
    open: bool,
}

impl Connection {
    /// Open a connection with an empty registry.
    pub fn open() -> Self {
        Connection {
            registry: TokenizerRegistry::new(),
            tables: AHashMap::new(),
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(FtsError::invalid_state("connection is closed"))
        }
    }

    /// Close the connection, destroying every table's tokenizer instance and
    /// forgetting all registrations.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        for (_, mut table) in self.tables.drain() {
            if let Err(err) = table.instance.destroy() {
                log::warn!("table '{}': {err}", table.decl.name);
            }
        }
        self.registry = TokenizerRegistry::new();
        self.open = false;
        log::debug!("connection closed");
    }

    pub fn registry(&self) -> &TokenizerRegistry {
        &self.registry
    }

    /// Register a tokenizer module under `name` for this connection.
    pub fn register_tokenizer(&mut self, name: &str, module: Arc<TokenizerModule>) -> Result<()> {
        self.register_tokenizer_with_args(name, module, Vec::new())
    }

    /// Register a tokenizer module with default arguments. Tables declared
    /// with `name` are created with `default_args` followed by their own
    /// `tokenize=` arguments.
    pub fn register_tokenizer_with_args(
        &mut self,
        name: &str,
        module: Arc<TokenizerModule>,
        default_args: Vec<String>,
    ) -> Result<()> {
        self.ensure_open()?;
        self.registry.register_with_args(name, module, default_args);
        Ok(())
    }

    /// Execute a `CREATE VIRTUAL TABLE` declaration.
    pub fn create_virtual_table(&mut self, sql: &str) -> Result<&FtsTable> {
        self.ensure_open()?;
        let decl = FtsTableDecl::parse(sql)?;
        let key = decl.name.to_ascii_lowercase();

        if self.tables.contains_key(&key) {
            if decl.if_not_exists {
                return self
                    .tables
                    .get(&key)
                    .ok_or_else(|| FtsError::invalid_state("table vanished"));
            }
            return Err(FtsError::invalid_argument(format!(
                "table '{}' already exists",
                decl.name
            )));
        }

        let module = self.registry.lookup(&decl.tokenize.name)?;
        let args: Vec<&str> = self
            .registry
            .default_args(&decl.tokenize.name)?
            .iter()
            .chain(&decl.tokenize.args)
            .map(String::as_str)
            .collect();
        let instance = module.create(&args)?;
        log::debug!(
            "created {} table '{}' with {}",
            decl.version,
            decl.name,
            decl.tokenize
        );

        Ok(self
            .tables
            .entry(key)
            .or_insert(FtsTable { decl, instance }))
    }

    pub fn table(&self, name: &str) -> Option<&FtsTable> {
        self.tables.get(&name.to_ascii_lowercase())
    }

    /// Names of all tables, sorted.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.values().map(|t| t.decl.name.clone()).collect();
        names.sort();
        names
    }

    /// Drop a table, destroying its tokenizer instance.
    pub fn drop_table(&mut self, name: &str) -> Result<()> {
        self.ensure_open()?;
        let mut table = self
            .tables
            .remove(&name.to_ascii_lowercase())
            .ok_or_else(|| FtsError::invalid_argument(format!("no such table: {name}")))?;
        table.instance.destroy()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}
