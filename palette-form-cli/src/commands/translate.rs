use anyhow::Result;
use palette_form::TRANSLATIONS;

/// Print the text `key` resolves to in `language`
pub fn run(key: &str, language: &str) -> Result<()> {
    if !TRANSLATIONS.has_language(language) {
        log::warn!(
            "No '{}' pack, falling back to '{}'",
            language,
            TRANSLATIONS.default_language()
        );
    }

    println!("{}", TRANSLATIONS.lookup(key, language));
    Ok(())
}
