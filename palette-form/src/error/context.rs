//! Error context and chaining utilities
//!
//! Submission failures are logged as a single line built from the whole
//! context chain, e.g. `Submitting questionnaire -> Timeout error: 30s`.

use super::Error;
use std::fmt;

/// Trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to the error
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Into<String>;

    /// Add context with lazy evaluation
    fn with_context<C, F>(self, f: F) -> Result<T, Error>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ErrorContext<T> for Result<T, Error> {
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Into<String>,
    {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, Error>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

/// Flattened view of a `WithContext` chain
pub struct ErrorChain<'a> {
    error: &'a Error,
    chain: Vec<String>,
}

impl<'a> ErrorChain<'a> {
    pub fn new(error: &'a Error) -> Self {
        let mut chain = Vec::new();
        let mut current = error;
        loop {
            chain.push(current.to_string());
            match current {
                Error::WithContext { source, .. } => current = source,
                _ => break,
            }
        }
        Self { error, chain }
    }

    /// Messages from the outermost context down to the root cause
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Get the root cause of the error
    pub fn root_cause(&self) -> &Error {
        let mut current = self.error;
        while let Error::WithContext { source, .. } = current {
            current = source;
        }
        current
    }

    /// Format the error chain for logging
    pub fn format_for_log(&self) -> String {
        self.chain.join(" -> ")
    }
}

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error.error_code(), self.format_for_log())
    }
}

/// Extension trait for Option types
pub trait OptionExt<T> {
    /// Convert None to a document error, used for missing elements
    fn or_missing<C>(self, what: C) -> Result<T, Error>
    where
        C: Into<String>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_missing<C>(self, what: C) -> Result<T, Error>
    where
        C: Into<String>,
    {
        self.ok_or_else(|| Error::document(format!("missing {}", what.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_chain_formatting() {
        let error = Error::network("connection refused")
            .with_context("Posting payload")
            .with_context("Submitting questionnaire");

        let chain = ErrorChain::new(&error);

        assert_eq!(chain.chain().len(), 3);
        assert_eq!(
            chain.format_for_log(),
            "Submitting questionnaire -> Posting payload -> Network error: connection refused"
        );
        assert!(matches!(chain.root_cause(), Error::Network(_)));
        assert!(chain.to_string().starts_with("[E_NETWORK]"));
    }

    #[test]
    fn test_option_missing() {
        let none_value: Option<i32> = None;
        let err = none_value.or_missing("submit button").unwrap_err();
        assert!(matches!(err, Error::Document(_)));
        assert_eq!(err.to_string(), "Document error: missing submit button");
    }

    #[test]
    fn test_result_context() {
        let result: Result<(), Error> = Err(Error::storage("quota exceeded"));
        let err = result.context("Storing palette result").unwrap_err();

        assert!(matches!(err, Error::WithContext { .. }));
        assert_eq!(ErrorChain::new(&err).chain().len(), 2);
    }
}
