//! Shared fakes for the questionnaire integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use palette_form::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Transport answering every POST with a canned response after a delay
#[derive(Clone)]
pub struct FakeTransport {
    status: u16,
    body: String,
    delay: Duration,
    refuse: bool,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl FakeTransport {
    pub fn respond(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
            refuse: false,
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Transport whose connection attempt always fails
    pub fn unreachable() -> Self {
        Self {
            refuse: true,
            ..Self::respond(0, "")
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Path and decoded payload of the last request
    pub fn last_request(&self) -> Option<(String, SubmissionPayload)> {
        let requests = self.requests.lock().unwrap();
        requests
            .last()
            .map(|(path, body)| (path.clone(), serde_json::from_slice(body).unwrap()))
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), body));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.refuse {
            return Err(Error::network("connection refused"));
        }
        Ok(TransportResponse::new(self.status, self.body.clone()))
    }
}

/// Questionnaire page markup with every field filled in
pub fn questionnaire(language: &str) -> MemoryDocument {
    let document = MemoryDocument::new();
    document.add_text("header.title", "Palette Analysis");
    document.add_text("section.info", "Your Information");
    document.add_text("label.colorsWorn", "What colors do you wear most often? (Select up to 5)");
    document.add_placeholder("label.email", "Email Address");
    document.add_submit_button("Discover My Palette");

    document.set_field("first_name", "Giulia");
    document.set_field("last_name", "Rossi");
    document.set_field("email", "giulia@example.com");
    document.set_selected_language(language);
    document.set_field("privacy_consent", "on");
    document.set_field("hair_color", "dark_brown");
    document.set_field("skin_tone", "medium_olive");
    document.set_field("eye_color", "hazel");
    document.set_field("vein_color", "green");
    document.set_field("jewelry_preference", "gold");
    document.append_field("colors_worn", "earth");
    document.append_field("colors_worn", "brown_beige");
    document.append_field("colors_avoided", "pastels");
    document.set_field("color_feedback", "vibrant");
    document
}

pub struct Harness {
    pub page: QuestionnairePage,
    pub document: MemoryDocument,
    pub storage: MemoryStorage,
    pub view: RecordingView,
    pub transport: FakeTransport,
}

impl Harness {
    pub fn new(document: MemoryDocument, transport: FakeTransport) -> Self {
        Self::with_config(&AppConfig::default(), document, transport)
    }

    pub fn with_config(
        config: &AppConfig,
        document: MemoryDocument,
        transport: FakeTransport,
    ) -> Self {
        let storage = MemoryStorage::new();
        let view = RecordingView::new();
        let page = QuestionnairePage::new(
            config,
            Arc::new(document.clone()),
            Arc::new(storage.clone()),
            Arc::new(view.clone()),
            Arc::new(transport.clone()),
        );

        Self {
            page,
            document,
            storage,
            view,
            transport,
        }
    }

    pub fn button_label(&self) -> String {
        let button = self.document.submit_button().unwrap();
        self.document.text(button).unwrap()
    }

    pub fn button_disabled(&self) -> bool {
        let button = self.document.submit_button().unwrap();
        self.document.is_disabled(button)
    }
}
