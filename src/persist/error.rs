use thiserror::Error;

/// Structured data that cannot be rebuilt into a domain value because
/// required fields are absent or ill-typed.
#[derive(Debug, Clone, Error)]
#[error("malformed data: {reason}")]
pub struct InvalidDataError {
    reason: String,
}

impl InvalidDataError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
