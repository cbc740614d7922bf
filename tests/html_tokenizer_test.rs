//! HTML-aware tokenization through the module contract.

use fts_tokenizers::fts::TokenizerModule;
use fts_tokenizers::prelude::*;

fn tokens(args: &[&str], html: &str) -> Result<Vec<Token>> {
    let instance = TokenizerModule::html().create(args)?;
    let mut cursor = instance.open(html.as_bytes())?;
    let tokens = cursor.collect_tokens()?;
    cursor.close();
    Ok(tokens)
}

fn source<'a>(html: &'a str, token: &Token) -> &'a str {
    &html[token.start_offset..token.end_offset]
}

#[test]
fn test_markup_is_never_tokenized() -> Result<()> {
    let html = r#"<div class="note" data-title="secret"><span>Visible</span> text</div>"#;
    let texts: Vec<String> = tokens(&[], html)?.into_iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["visible", "text"]);
    Ok(())
}

#[test]
fn test_offsets_refer_to_the_original_markup() -> Result<()> {
    let html = "<p>Hello <em>World</em></p>";
    let tokens = tokens(&[], html)?;
    assert_eq!(tokens.len(), 2);
    assert_eq!(source(html, &tokens[0]), "Hello");
    assert_eq!(source(html, &tokens[1]), "World");
    Ok(())
}

#[test]
fn test_script_and_style_content_is_skipped() -> Result<()> {
    let html = "<style>p { color: red }</style><script>alert('x')</script><p>body</p>";
    let texts: Vec<String> = tokens(&[], html)?.into_iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["body"]);
    Ok(())
}

#[test]
fn test_comments_are_skipped() -> Result<()> {
    let texts: Vec<String> = tokens(&[], "before<!-- hidden words -->after")?
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, vec!["before", "after"]);
    Ok(())
}

#[test]
fn test_entities_decode_and_span_their_source() -> Result<()> {
    let html = "caf&eacute; menu";
    let tokens = tokens(&[], html)?;
    assert_eq!(tokens[0].text, "cafe");
    assert_eq!(source(html, &tokens[0]), "caf&eacute;");
    assert_eq!(tokens[1].text, "menu");
    Ok(())
}

#[test]
fn test_stemming_arguments_reach_the_word_tokenizer() -> Result<()> {
    let texts: Vec<String> = tokens(&["stemmer=english"], "<li>Unites</li><li>united</li>")?
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, vec!["unit", "unit"]);
    Ok(())
}

#[test]
fn test_plain_text_passes_through() -> Result<()> {
    let html = "no markup at all";
    let tokens = tokens(&[], html)?;
    assert_eq!(tokens.len(), 4);
    assert_eq!(source(html, &tokens[3]), "all");
    Ok(())
}

#[test]
fn test_bad_arguments_fail_creation() {
    let err = TokenizerModule::html().create(&["colour=blue"]).unwrap_err();
    assert!(matches!(err, FtsError::InvalidArgument(_)));
}
