//! The questionnaire page: wires DOM-style events to the translation table and
//! the submission handler

use crate::config::AppConfig;
use crate::document::Document;
use crate::i18n::{apply_language, ApplyReport, Translations};
use crate::storage::SessionStorage;
use crate::submit::{SubmissionHandler, SubmitOutcome, SubmitState};
use crate::transport::Transport;
use crate::view::View;
use std::sync::Arc;

/// Events the page listens for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// `change` on the language select, carrying the new value
    LanguageChanged(String),
    /// `submit` on the questionnaire form
    Submit,
}

#[derive(Debug)]
pub enum EventOutcome {
    Relabelled(ApplyReport),
    Submission(SubmitOutcome),
}

pub struct QuestionnairePage {
    translations: Arc<Translations>,
    document: Arc<dyn Document>,
    handler: SubmissionHandler,
}

impl QuestionnairePage {
    /// Page using the builtin English and Italian packs
    pub fn new(
        config: &AppConfig,
        document: Arc<dyn Document>,
        storage: Arc<dyn SessionStorage>,
        view: Arc<dyn View>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self::with_translations(
            config,
            Arc::new(Translations::builtin()),
            document,
            storage,
            view,
            transport,
        )
    }

    pub fn with_translations(
        config: &AppConfig,
        translations: Arc<Translations>,
        document: Arc<dyn Document>,
        storage: Arc<dyn SessionStorage>,
        view: Arc<dyn View>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let handler = SubmissionHandler::new(
            config,
            Arc::clone(&translations),
            Arc::clone(&document),
            storage,
            view,
            transport,
        );

        Self {
            translations,
            document,
            handler,
        }
    }

    pub async fn dispatch(&self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::LanguageChanged(language) => {
                EventOutcome::Relabelled(self.change_language(&language))
            }
            PageEvent::Submit => EventOutcome::Submission(self.submit().await),
        }
    }

    /// Switch the page to `language`: the selection control follows, then
    /// every translatable element is relabelled
    pub fn change_language(&self, language: &str) -> ApplyReport {
        if !self.translations.has_language(language) {
            log::debug!(
                "No '{}' pack, labels fall back to '{}'",
                language,
                self.translations.default_language()
            );
        }
        self.document.set_selected_language(language);
        apply_language(self.document.as_ref(), &self.translations, language)
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.handler.submit().await
    }

    pub fn submit_state(&self) -> Option<SubmitState> {
        self.handler.state()
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }
}
