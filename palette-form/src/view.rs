//! Window-level side effects: blocking alerts and page navigation

use std::sync::{Arc, Mutex};

pub trait View: Send + Sync {
    /// Show a blocking notification to the user
    fn alert(&self, message: &str);

    /// Leave the current page for `route`
    fn navigate(&self, route: &str);
}

/// View that records what happened, for tests and embedding hosts
#[derive(Clone, Default)]
pub struct RecordingView {
    alerts: Arc<Mutex<Vec<String>>>,
    location: Arc<Mutex<Option<String>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .map(|alerts| alerts.clone())
            .unwrap_or_default()
    }

    /// Route of the last navigation, if any
    pub fn location(&self) -> Option<String> {
        self.location.lock().ok().and_then(|location| location.clone())
    }
}

impl View for RecordingView {
    fn alert(&self, message: &str) {
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }

    fn navigate(&self, route: &str) {
        if let Ok(mut location) = self.location.lock() {
            *location = Some(route.to_string());
        }
    }
}

/// View for the headless CLI: alerts go to stderr, navigation to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleView;

impl View for ConsoleView {
    fn alert(&self, message: &str) {
        log::warn!("Alert shown to user: {}", message);
        eprintln!("{}", message);
    }

    fn navigate(&self, route: &str) {
        log::info!("Navigating to {}", route);
        println!("-> {}", route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_view() {
        let view = RecordingView::new();
        let handle = view.clone();
        assert_eq!(view.location(), None);

        view.alert("first");
        view.alert("second");
        view.navigate("/thank-you");

        assert_eq!(handle.alerts(), vec!["first", "second"]);
        assert_eq!(handle.location().as_deref(), Some("/thank-you"));
    }
}
