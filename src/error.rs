use thiserror::Error;

/// Failure kinds surfaced by the engine's public services.
///
/// Not-found is deliberately absent: lookups return `Ok(None)` and
/// row-targeting mutations report whether a row was affected, so callers
/// handle absence explicitly instead of catching an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input rejected before any storage call; fully recoverable.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Storage/backend failure. The attempted mutation was not applied
    /// and the engine performs no automatic retry.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl EngineError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
