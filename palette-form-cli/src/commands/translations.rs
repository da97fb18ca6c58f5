use anyhow::{bail, Result};
use clap::Subcommand;
use palette_form::{Translations, TRANSLATIONS};

#[derive(Subcommand, Debug)]
pub enum TranslationsCommand {
    /// Check for keys a language pack does not translate
    Check {
        /// Language to check (every non-default pack if omitted)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Show translation statistics
    Stats,
}

pub fn execute(cmd: &TranslationsCommand) -> Result<()> {
    match cmd {
        TranslationsCommand::Check { lang } => check(&TRANSLATIONS, lang.as_deref()),
        TranslationsCommand::Stats => {
            stats(&TRANSLATIONS);
            Ok(())
        }
    }
}

fn check(translations: &Translations, lang: Option<&str>) -> Result<()> {
    let languages: Vec<&str> = match lang {
        Some(lang) => vec![lang],
        None => translations
            .languages()
            .into_iter()
            .filter(|code| *code != translations.default_language())
            .collect(),
    };

    let mut incomplete = 0;
    for language in languages {
        if !translations.has_language(language) {
            println!("{}: no language pack", language);
            incomplete += 1;
            continue;
        }

        let missing = translations.missing_keys(language);
        if missing.is_empty() {
            println!("{}: complete", language);
        } else {
            println!("{}: {} missing", language, missing.len());
            for key in missing {
                println!("  - {}", key);
            }
            incomplete += 1;
        }
    }

    if incomplete > 0 {
        bail!("{} language pack(s) incomplete", incomplete);
    }
    Ok(())
}

fn stats(translations: &Translations) {
    let total = translations.default_pack().map_or(0, |pack| pack.len());
    for language in translations.languages() {
        let translated = total - translations.missing_keys(language).len();
        let marker = if language == translations.default_language() {
            " (default)"
        } else {
            ""
        };
        println!("{}{}: {}/{} keys", language, marker, translated, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_packs_pass_check() {
        assert!(check(&TRANSLATIONS, None).is_ok());
        assert!(check(&TRANSLATIONS, Some("it")).is_ok());
    }

    #[test]
    fn test_partial_pack_fails_check() {
        let translations = Translations::builder("en")
            .with_builtin()
            .pack_from_json("fr", &json!({"button.submit": "Découvrir ma palette"}))
            .unwrap()
            .build()
            .unwrap();

        assert!(check(&translations, Some("fr")).is_err());
        assert!(check(&translations, None).is_err());
        assert!(check(&translations, Some("de")).is_err());
    }
}
