//! Per-connection tokenizer registry.
//!
//! Names are matched case-insensitively, as FTS tokenizer names are in the
//! table declarations that reference them. Registering a name again replaces
//! the previous module.
//!
//! A registration may carry default tokenizer arguments. Tables declared with
//! that name get the defaults in front of their own `tokenize=` arguments, so
//! the declaration's arguments override them.

use std::sync::Arc;

use ahash::AHashMap;

use crate::error::{FtsError, Result};
use crate::fts::module::TokenizerModule;

#[derive(Debug, Clone)]
struct Entry {
    /// The name as it was registered.
    name: String,
    module: Arc<TokenizerModule>,
    default_args: Vec<String>,
    /// Registration order, for listing.
    seq: u64,
}

/// Maps tokenizer names to module descriptors.
#[derive(Debug, Clone, Default)]
pub struct TokenizerRegistry {
    entries: AHashMap<String, Entry>,
    next_seq: u64,
}

impl TokenizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        name.to_ascii_lowercase()
    }

    /// Register `module` under `name`, returning the module it replaced.
    pub fn register<S: Into<String>>(
        &mut self,
        name: S,
        module: Arc<TokenizerModule>,
    ) -> Option<Arc<TokenizerModule>> {
        self.register_with_args(name, module, Vec::new())
    }

    /// Register `module` under `name` with default tokenizer arguments.
    pub fn register_with_args<S: Into<String>>(
        &mut self,
        name: S,
        module: Arc<TokenizerModule>,
        default_args: Vec<String>,
    ) -> Option<Arc<TokenizerModule>> {
        let name = name.into();
        log::debug!(
            "registering tokenizer '{name}' ({} v{}) with defaults {default_args:?}",
            module.kind(),
            module.version()
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        let entry = Entry {
            name,
            module,
            default_args,
            seq,
        };
        self.entries
            .insert(Self::key(&entry.name), entry)
            .map(|previous| previous.module)
    }

    /// Look up a module by name.
    pub fn lookup(&self, name: &str) -> Result<Arc<TokenizerModule>> {
        match self.entries.get(&Self::key(name)) {
            Some(entry) => Ok(Arc::clone(&entry.module)),
            None => {
                log::debug!("tokenizer lookup miss: '{name}'");
                Err(FtsError::unknown_tokenizer(name))
            }
        }
    }

    /// Default arguments registered with `name`.
    pub fn default_args(&self, name: &str) -> Result<&[String]> {
        self.entries
            .get(&Self::key(name))
            .map(|entry| entry.default_args.as_slice())
            .ok_or_else(|| FtsError::unknown_tokenizer(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Self::key(name))
    }

    /// Remove a registration, returning its module.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<TokenizerModule>> {
        self.entries.remove(&Self::key(name)).map(|entry| entry.module)
    }

    /// Registered names, in registration order. A replaced registration
    /// moves to the end under its most recent spelling.
    pub fn names(&self) -> Vec<String> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries.into_iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
