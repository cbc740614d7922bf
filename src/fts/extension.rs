//! Extension entry points for the built-in tokenizers.
//!
//! Each tokenizer variant has a fixed well-known name and an entry point that
//! registers it with a connection. Entry points follow the loader convention:
//! `0` on success, nonzero on failure with a message written to the error
//! slot. Each entry point stands alone, so one failing never keeps the
//! others from loading.

use std::sync::{Arc, LazyLock};

use crate::error::{FtsError, Result};
use crate::fts::connection::Connection;
use crate::fts::module::TokenizerModule;

/// Well-known name of the HTML tokenizer.
pub const HTML_TOKENIZER_NAME: &str = "HTMLTokenizer";

/// Well-known name of the character tokenizer.
pub const CHARACTER_TOKENIZER_NAME: &str = "character";

/// Well-known name of the unicode stemming tokenizer.
pub const UNICODESN_TOKENIZER_NAME: &str = "unicodesn";

/// Every well-known name, in load order.
pub const BUILTIN_NAMES: [&str; 3] = [
    HTML_TOKENIZER_NAME,
    CHARACTER_TOKENIZER_NAME,
    UNICODESN_TOKENIZER_NAME,
];

/// Entry point return code for success.
pub const EXTENSION_OK: i32 = 0;

/// Entry point return code for failure.
pub const EXTENSION_ERROR: i32 = 1;

static HTML_MODULE: LazyLock<Arc<TokenizerModule>> =
    LazyLock::new(|| Arc::new(TokenizerModule::html()));
static CHARACTER_MODULE: LazyLock<Arc<TokenizerModule>> =
    LazyLock::new(|| Arc::new(TokenizerModule::character()));
static UNICODESN_MODULE: LazyLock<Arc<TokenizerModule>> =
    LazyLock::new(|| Arc::new(TokenizerModule::unicode_stemming()));

/// The shared built-in module behind a well-known name. Names match
/// case-insensitively.
pub fn builtin_module(name: &str) -> Option<Arc<TokenizerModule>> {
    let module = if name.eq_ignore_ascii_case(HTML_TOKENIZER_NAME) {
        &HTML_MODULE
    } else if name.eq_ignore_ascii_case(CHARACTER_TOKENIZER_NAME) {
        &CHARACTER_MODULE
    } else if name.eq_ignore_ascii_case(UNICODESN_TOKENIZER_NAME) {
        &UNICODESN_MODULE
    } else {
        return None;
    };
    Some(Arc::clone(module))
}

/// Register the built-in module for `name` with `conn`.
///
/// A name without a built-in module is [`FtsError::UnknownTokenizer`]. A
/// connection that refuses the registration is [`FtsError::Registration`].
pub fn register_named_tokenizer(conn: &mut Connection, name: &str) -> Result<()> {
    register_named_tokenizer_with_args::<&str>(conn, name, &[])
}

/// Register the built-in module for `name` with default tokenizer arguments,
/// such as a language tag. Tables declared with `name` get `default_args`
/// ahead of their own arguments.
pub fn register_named_tokenizer_with_args<S: AsRef<str>>(
    conn: &mut Connection,
    name: &str,
    default_args: &[S],
) -> Result<()> {
    let module = builtin_module(name).ok_or_else(|| FtsError::unknown_tokenizer(name))?;
    let default_args: Vec<String> = default_args
        .iter()
        .map(|arg| arg.as_ref().to_string())
        .collect();
    conn.register_tokenizer_with_args(name, module, default_args)
        .map_err(|err| FtsError::registration(name, err.to_string()))?;
    log::debug!("registered built-in tokenizer '{name}'");
    Ok(())
}

fn init_extension(conn: &mut Connection, name: &str, err_msg: &mut Option<String>) -> i32 {
    match register_named_tokenizer(conn, name) {
        Ok(()) => EXTENSION_OK,
        Err(err) => {
            log::error!("loading tokenizer extension '{name}' failed: {err}");
            *err_msg = Some(err.to_string());
            EXTENSION_ERROR
        }
    }
}

/// Entry point registering the HTML tokenizer.
pub fn extension_init_html(conn: &mut Connection, err_msg: &mut Option<String>) -> i32 {
    init_extension(conn, HTML_TOKENIZER_NAME, err_msg)
}

/// Entry point registering the character tokenizer.
pub fn extension_init_character(conn: &mut Connection, err_msg: &mut Option<String>) -> i32 {
    init_extension(conn, CHARACTER_TOKENIZER_NAME, err_msg)
}

/// Entry point registering the unicode stemming tokenizer.
pub fn extension_init_unicodesn(conn: &mut Connection, err_msg: &mut Option<String>) -> i32 {
    init_extension(conn, UNICODESN_TOKENIZER_NAME, err_msg)
}

/// Register every built-in tokenizer, each independently. Returns one result
/// per well-known name.
pub fn load_builtin_extensions(conn: &mut Connection) -> Vec<(&'static str, Result<()>)> {
    BUILTIN_NAMES
        .iter()
        .map(|&name| (name, register_named_tokenizer(conn, name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fts::module::TokenizerKind;

    #[test]
    fn test_builtin_modules_are_shared() {
        let a = builtin_module("HTMLTokenizer").unwrap();
        let b = builtin_module("htmltokenizer").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.kind(), TokenizerKind::Html);
        assert_eq!(
            builtin_module(CHARACTER_TOKENIZER_NAME).unwrap().kind(),
            TokenizerKind::Character
        );
        assert!(builtin_module("porter").is_none());
    }

    #[test]
    fn test_entry_points_register_well_known_names() {
        let mut conn = Connection::open();
        let mut err = None;
        assert_eq!(extension_init_html(&mut conn, &mut err), EXTENSION_OK);
        assert_eq!(extension_init_character(&mut conn, &mut err), EXTENSION_OK);
        assert_eq!(extension_init_unicodesn(&mut conn, &mut err), EXTENSION_OK);
        assert!(err.is_none());
        assert_eq!(
            conn.registry().names(),
            vec!["HTMLTokenizer", "character", "unicodesn"]
        );
    }

    #[test]
    fn test_entry_point_failure_on_closed_connection() {
        let mut conn = Connection::open();
        conn.close();
        let mut err = None;
        assert_eq!(extension_init_html(&mut conn, &mut err), EXTENSION_ERROR);
        assert!(err.unwrap().contains("HTMLTokenizer"));
    }

    #[test]
    fn test_register_unknown_name() {
        let mut conn = Connection::open();
        let err = register_named_tokenizer(&mut conn, "icu").unwrap_err();
        assert!(matches!(err, FtsError::UnknownTokenizer(_)));
    }

    #[test]
    fn test_registration_failure_propagates() {
        let mut conn = Connection::open();
        conn.close();
        let err = register_named_tokenizer(&mut conn, UNICODESN_TOKENIZER_NAME).unwrap_err();
        assert!(matches!(err, FtsError::Registration { ref name, .. } if name == "unicodesn"));
    }

    #[test]
    fn test_register_with_default_language() {
        let mut conn = Connection::open();
        register_named_tokenizer_with_args(&mut conn, HTML_TOKENIZER_NAME, &["eng"]).unwrap();
        assert_eq!(conn.registry().default_args(HTML_TOKENIZER_NAME).unwrap(), ["eng"]);

        let err = register_named_tokenizer_with_args(&mut conn, "icu", &["eng"]).unwrap_err();
        assert!(matches!(err, FtsError::UnknownTokenizer(_)));
    }

    #[test]
    fn test_load_builtin_extensions() {
        let mut conn = Connection::open();
        let results = load_builtin_extensions(&mut conn);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|(_, result)| result.is_ok()));
        assert_eq!(conn.registry().len(), 3);
    }
}
