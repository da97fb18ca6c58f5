//! Document abstraction over the questionnaire markup
//!
//! The translation and submission code never touch a real DOM. They talk to
//! a [`Document`], which exposes only what the page contract needs: elements
//! tagged with translation markers, the submit button, and the form fields.

use crate::form::FormData;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Opaque handle to an element inside a [`Document`]
pub type ElementId = usize;

/// Declarative translation markers carried by elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `data-i18n`: the key supplies the element's text
    Text,
    /// `data-i18n-placeholder`: the key supplies the placeholder attribute
    Placeholder,
}

impl Marker {
    pub fn attribute(&self) -> &'static str {
        match self {
            Marker::Text => "data-i18n",
            Marker::Placeholder => "data-i18n-placeholder",
        }
    }
}

/// Element id of the language selection control
pub const LANGUAGE_CONTROL: &str = "language";

/// View of the page the questionnaire lives in
///
/// Implementations use interior mutability: a language change may relabel the
/// page while a submission is awaiting the network.
pub trait Document: Send + Sync {
    /// Elements tagged with `marker`, in document order, with their keys
    fn marked_elements(&self, marker: Marker) -> Vec<(ElementId, String)>;

    fn text(&self, element: ElementId) -> Option<String>;

    fn set_text(&self, element: ElementId, text: &str);

    fn placeholder(&self, element: ElementId) -> Option<String>;

    fn set_placeholder(&self, element: ElementId, text: &str);

    /// The form's `type="submit"` button, if any
    fn submit_button(&self) -> Option<ElementId>;

    fn is_disabled(&self, element: ElementId) -> bool;

    fn set_disabled(&self, element: ElementId, disabled: bool);

    /// Snapshot of the named form fields, like `new FormData(form)`
    fn form_data(&self) -> FormData;

    /// Current value of the language selection control, `None` when unset
    fn selected_language(&self) -> Option<String> {
        self.form_data()
            .get(LANGUAGE_CONTROL)
            .filter(|language| !language.is_empty())
            .map(str::to_string)
    }

    /// Point the language selection control at `language`
    fn set_selected_language(&self, language: &str);
}

#[derive(Debug, Clone, Default)]
struct Element {
    text: String,
    placeholder: Option<String>,
    text_key: Option<String>,
    placeholder_key: Option<String>,
    submit: bool,
    disabled: bool,
}

#[derive(Debug, Default)]
struct DocumentState {
    elements: Vec<Element>,
    form: FormData,
}

/// In-memory [`Document`] used by tests and the headless CLI
#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Arc<RwLock<DocumentState>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with a form pre-filled from `form`
    pub fn with_form(form: FormData) -> Self {
        let document = Self::new();
        document.write().form = form;
        document
    }

    fn read(&self) -> RwLockReadGuard<'_, DocumentState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DocumentState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, element: Element) -> ElementId {
        let mut state = self.write();
        state.elements.push(element);
        state.elements.len() - 1
    }

    /// Add an element whose text comes from `key`
    pub fn add_text(&self, key: &str, text: &str) -> ElementId {
        self.push(Element {
            text: text.to_string(),
            text_key: Some(key.to_string()),
            ..Element::default()
        })
    }

    /// Add an input whose placeholder comes from `key`
    pub fn add_placeholder(&self, key: &str, placeholder: &str) -> ElementId {
        self.push(Element {
            placeholder: Some(placeholder.to_string()),
            placeholder_key: Some(key.to_string()),
            ..Element::default()
        })
    }

    /// Add an untagged element, which translation must leave alone
    pub fn add_plain(&self, text: &str) -> ElementId {
        self.push(Element {
            text: text.to_string(),
            ..Element::default()
        })
    }

    pub fn add_submit_button(&self, label: &str) -> ElementId {
        self.push(Element {
            text: label.to_string(),
            submit: true,
            ..Element::default()
        })
    }

    /// Replace every value of a form field
    pub fn set_field(&self, name: &str, value: &str) {
        self.write().form.set(name, value);
    }

    /// Add one more value to a form field (checkbox groups, multi-selects)
    pub fn append_field(&self, name: &str, value: &str) {
        self.write().form.append(name, value);
    }

    /// Drop a field, like unchecking a checkbox
    pub fn clear_field(&self, name: &str) {
        self.write().form.delete(name);
    }
}

impl Document for MemoryDocument {
    fn marked_elements(&self, marker: Marker) -> Vec<(ElementId, String)> {
        self.read()
            .elements
            .iter()
            .enumerate()
            .filter_map(|(id, element)| {
                let key = match marker {
                    Marker::Text => element.text_key.as_ref(),
                    Marker::Placeholder => element.placeholder_key.as_ref(),
                };
                key.map(|key| (id, key.clone()))
            })
            .collect()
    }

    fn text(&self, element: ElementId) -> Option<String> {
        self.read().elements.get(element).map(|e| e.text.clone())
    }

    fn set_text(&self, element: ElementId, text: &str) {
        match self.write().elements.get_mut(element) {
            Some(e) => e.text = text.to_string(),
            None => log::debug!("set_text on unknown element {}", element),
        }
    }

    fn placeholder(&self, element: ElementId) -> Option<String> {
        self.read()
            .elements
            .get(element)
            .and_then(|e| e.placeholder.clone())
    }

    fn set_placeholder(&self, element: ElementId, text: &str) {
        match self.write().elements.get_mut(element) {
            Some(e) => e.placeholder = Some(text.to_string()),
            None => log::debug!("set_placeholder on unknown element {}", element),
        }
    }

    fn submit_button(&self) -> Option<ElementId> {
        self.read().elements.iter().position(|e| e.submit)
    }

    fn is_disabled(&self, element: ElementId) -> bool {
        self.read()
            .elements
            .get(element)
            .map(|e| e.disabled)
            .unwrap_or(false)
    }

    fn set_disabled(&self, element: ElementId, disabled: bool) {
        match self.write().elements.get_mut(element) {
            Some(e) => e.disabled = disabled,
            None => log::debug!("set_disabled on unknown element {}", element),
        }
    }

    fn form_data(&self) -> FormData {
        self.read().form.clone()
    }

    fn set_selected_language(&self, language: &str) {
        self.set_field(LANGUAGE_CONTROL, language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_elements_in_document_order() {
        let document = MemoryDocument::new();
        let title = document.add_text("header.title", "Palette Analysis");
        document.add_plain("©");
        let email = document.add_placeholder("label.email", "Email Address");
        let intro = document.add_text("header.intro1", "Discover");

        assert_eq!(
            document.marked_elements(Marker::Text),
            vec![
                (title, "header.title".to_string()),
                (intro, "header.intro1".to_string())
            ]
        );
        assert_eq!(
            document.marked_elements(Marker::Placeholder),
            vec![(email, "label.email".to_string())]
        );
    }

    #[test]
    fn test_submit_button_state() {
        let document = MemoryDocument::new();
        assert_eq!(document.submit_button(), None);

        let button = document.add_submit_button("Discover My Palette");
        assert_eq!(document.submit_button(), Some(button));
        assert!(!document.is_disabled(button));

        document.set_disabled(button, true);
        document.set_text(button, "Analyzing...");
        assert!(document.is_disabled(button));
        assert_eq!(document.text(button).as_deref(), Some("Analyzing..."));
    }

    #[test]
    fn test_form_fields_and_language() {
        let document = MemoryDocument::new();
        document.set_selected_language("it");
        document.append_field("colors_worn", "earth");
        document.append_field("colors_worn", "muted");
        document.set_field("privacy_consent", "on");
        document.clear_field("privacy_consent");

        let form = document.form_data();
        assert_eq!(document.selected_language().as_deref(), Some("it"));
        assert_eq!(form.get_all("colors_worn"), vec!["earth", "muted"]);
        assert!(!form.has("privacy_consent"));

        document.set_selected_language("");
        assert_eq!(document.selected_language(), None);
    }

    #[test]
    fn test_unknown_element_is_ignored() {
        let document = MemoryDocument::new();
        document.set_text(42, "nothing");
        assert_eq!(document.text(42), None);
        assert!(!document.is_disabled(42));
        assert_eq!(Marker::Placeholder.attribute(), "data-i18n-placeholder");
    }
}
