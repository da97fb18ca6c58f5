//! palette-form - the palette questionnaire page, minus the browser
//!
//! palette-form provides:
//! - an English/Italian translation table with key fallback
//! - relabelling of a document's translatable elements
//! - the questionnaire submission handler and its payload
//!
//! The document, session storage, window and HTTP client are traits, so the
//! same code runs against in-memory fakes, the headless CLI, or a real host.

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod config;
pub mod document;
pub mod error;
pub mod form;
pub mod i18n;
pub mod page;
pub mod storage;
pub mod submit;
pub mod transport;
pub mod view;

// Re-export main types for public API
pub use config::AppConfig;
pub use document::{Document, ElementId, Marker, MemoryDocument};
pub use error::{Error, Result};
pub use form::{FormData, SubmissionPayload};
pub use i18n::{apply_language, lookup, ApplyReport, LanguagePack, Translations, TRANSLATIONS};
pub use page::{EventOutcome, PageEvent, QuestionnairePage};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use submit::{SubmissionHandler, SubmitOutcome, SubmitState};
pub use transport::{HyperTransport, Transport, TransportResponse};
pub use view::{ConsoleView, RecordingView, View};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::*;
    pub use std::sync::Arc;
}
