//! Questionnaire submission handler
//!
//! The submit button doubles as the handler's state: enabled means
//! [`SubmitState::Ready`], disabled means [`SubmitState::Submitting`]. The
//! switch to `Submitting` happens before the first await, so a second submit
//! fired while a request is in flight sees the disabled button and is skipped.

use crate::config::{AppConfig, ClientConfig};
use crate::document::{Document, ElementId};
use crate::error::{Error, ErrorChain, ErrorContext, OptionExt, Result};
use crate::form::{FormData, SubmissionPayload};
use crate::i18n::{Translations, SUBMIT_LABEL};
use crate::storage::SessionStorage;
use crate::transport::{Transport, TransportResponse};
use crate::view::View;
use serde_json::Value;
use std::sync::Arc;

pub const ANALYZING_LABEL: &str = "button.analyzing";
pub const FAILURE_MESSAGE: &str = "alert.submitFailed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Ready,
    Submitting,
}

/// Result of one submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The endpoint answered; the result is stored and the page navigated away
    Submitted { result: Value },
    /// The attempt failed and the form is ready for another try
    Failed(Error),
    /// A submission was already in flight
    Skipped,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }
}

pub struct SubmissionHandler {
    client: ClientConfig,
    default_language: String,
    translations: Arc<Translations>,
    document: Arc<dyn Document>,
    storage: Arc<dyn SessionStorage>,
    view: Arc<dyn View>,
    transport: Arc<dyn Transport>,
}

impl SubmissionHandler {
    pub fn new(
        config: &AppConfig,
        translations: Arc<Translations>,
        document: Arc<dyn Document>,
        storage: Arc<dyn SessionStorage>,
        view: Arc<dyn View>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            client: config.client.clone(),
            default_language: config.i18n.default_language.clone(),
            translations,
            document,
            storage,
            view,
            transport,
        }
    }

    /// Current state of the submit control, `None` when the page has none
    pub fn state(&self) -> Option<SubmitState> {
        self.document.submit_button().map(|button| {
            if self.document.is_disabled(button) {
                SubmitState::Submitting
            } else {
                SubmitState::Ready
            }
        })
    }

    /// Submit the questionnaire once
    ///
    /// Failures are handled here: the user gets an alert and the button is
    /// restored. The error is returned in [`SubmitOutcome::Failed`] for the
    /// caller's diagnostics.
    pub async fn submit(&self) -> SubmitOutcome {
        let button = match self.document.submit_button().or_missing("submit button") {
            Ok(button) => button,
            Err(err) => {
                log::error!("Cannot submit questionnaire: {}", ErrorChain::new(&err));
                return SubmitOutcome::Failed(err);
            }
        };

        if self.document.is_disabled(button) {
            log::warn!("Submission already in progress, ignoring submit");
            return SubmitOutcome::Skipped;
        }

        let form = self.document.form_data();
        let language = self.current_language();
        self.set_state(button, SubmitState::Submitting, &language);

        match self.dispatch(&form).await {
            Ok(result) => {
                log::info!(
                    "Questionnaire submitted, navigating to {}",
                    self.client.thank_you_route
                );
                self.view.navigate(&self.client.thank_you_route);
                SubmitOutcome::Submitted { result }
            }
            Err(err) => {
                let chain = ErrorChain::new(&err);
                if err.is_transport() {
                    log::error!(
                        "Questionnaire submission to {} failed: {}",
                        self.client.submit_path,
                        chain
                    );
                } else {
                    log::error!("Questionnaire submission failed: {}", chain);
                }

                // The language may have changed while the request was in flight
                let language = self.current_language();
                self.view
                    .alert(self.translations.lookup(FAILURE_MESSAGE, &language));
                self.set_state(button, SubmitState::Ready, &language);
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn current_language(&self) -> String {
        self.document
            .selected_language()
            .unwrap_or_else(|| self.default_language.clone())
    }

    fn set_state(&self, button: ElementId, state: SubmitState, language: &str) {
        let (disabled, label) = match state {
            SubmitState::Ready => (false, SUBMIT_LABEL),
            SubmitState::Submitting => (true, ANALYZING_LABEL),
        };
        self.document.set_disabled(button, disabled);
        self.document
            .set_text(button, self.translations.lookup(label, language));
    }

    async fn dispatch(&self, form: &FormData) -> Result<Value> {
        let payload = SubmissionPayload::from_form(form);
        log::debug!(
            "Built payload: {} colors worn, {} avoided, privacy consent: {}",
            payload.colors_worn.len(),
            payload.colors_avoided.len(),
            payload.privacy_consent
        );
        let body = payload.to_json().context("Serializing questionnaire")?;

        let response = self.post(body).await.context("Posting questionnaire")?;
        if !response.is_success() {
            return Err(Error::status(response.status, &self.client.submit_path));
        }

        let result: Value = serde_json::from_slice::<Value>(&response.body)
            .map_err(Error::from)
            .context("Parsing palette result")?;

        let text = serde_json::to_string(&result)?;
        self.storage
            .set_item(&self.client.result_storage_key, &text)
            .await
            .with_context(|| {
                format!(
                    "Storing palette result in {} storage",
                    self.storage.backend_name()
                )
            })?;

        Ok(result)
    }

    async fn post(&self, body: Vec<u8>) -> Result<TransportResponse> {
        let path = &self.client.submit_path;
        let request = self.transport.post_json(path, body);

        match self.client.timeout() {
            Some(limit) => tokio::time::timeout(limit, request).await.map_err(|_| {
                Error::timeout(format!(
                    "no response from {} after {}s",
                    path,
                    limit.as_secs()
                ))
            })?,
            None => request.await,
        }
    }
}
