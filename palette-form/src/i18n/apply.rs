use super::Translations;
use crate::document::{Document, Marker};

/// Key of the submit button's idle label
pub const SUBMIT_LABEL: &str = "button.submit";

/// What a relabelling pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub texts: usize,
    pub placeholders: usize,
    pub submit_relabelled: bool,
}

/// Relabel every translatable element of `document` in `language`
///
/// A disabled submit button is left alone: it is showing the busy label of an
/// in-flight submission.
pub fn apply_language(
    document: &dyn Document,
    translations: &Translations,
    language: &str,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for (element, key) in document.marked_elements(Marker::Text) {
        document.set_text(element, translations.lookup(&key, language));
        report.texts += 1;
    }

    for (element, key) in document.marked_elements(Marker::Placeholder) {
        document.set_placeholder(element, translations.lookup(&key, language));
        report.placeholders += 1;
    }

    if let Some(button) = document.submit_button() {
        if !document.is_disabled(button) {
            document.set_text(button, translations.lookup(SUBMIT_LABEL, language));
            report.submit_relabelled = true;
        }
    }

    log::debug!(
        "Applied language '{}': {} [{}], {} [{}], submit relabelled: {}",
        language,
        report.texts,
        Marker::Text.attribute(),
        report.placeholders,
        Marker::Placeholder.attribute(),
        report.submit_relabelled
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn test_apply_language_relabels_marked_elements() {
        let translations = Translations::builtin();
        let document = MemoryDocument::new();
        let title = document.add_text("header.title", "Palette Analysis");
        let email = document.add_placeholder("label.email", "Email Address");
        let plain = document.add_plain("Maison Guida");
        let missing = document.add_text("label.shoeSize", "Shoe size");
        let button = document.add_submit_button("Discover My Palette");

        let report = apply_language(&document, &translations, "it");

        assert_eq!(
            report,
            ApplyReport {
                texts: 2,
                placeholders: 1,
                submit_relabelled: true
            }
        );
        assert_eq!(
            document.text(title).as_deref(),
            Some("Analisi della Palette")
        );
        assert_eq!(
            document.placeholder(email).as_deref(),
            Some("Indirizzo Email")
        );
        assert_eq!(document.text(plain).as_deref(), Some("Maison Guida"));
        assert_eq!(document.text(missing).as_deref(), Some("label.shoeSize"));
        assert_eq!(
            document.text(button).as_deref(),
            Some("Scopri la Mia Palette")
        );
    }

    #[test]
    fn test_disabled_submit_button_keeps_its_label() {
        let translations = Translations::builtin();
        let document = MemoryDocument::new();
        let button = document.add_submit_button("Analyzing...");
        document.set_disabled(button, true);

        let report = apply_language(&document, &translations, "it");

        assert!(!report.submit_relabelled);
        assert_eq!(document.text(button).as_deref(), Some("Analyzing..."));
    }

    #[test]
    fn test_page_without_submit_button() {
        let translations = Translations::builtin();
        let document = MemoryDocument::new();
        document.add_text("section.style", "Your Style");

        let report = apply_language(&document, &translations, "en");
        assert_eq!(report.texts, 1);
        assert!(!report.submit_relabelled);
    }
}
