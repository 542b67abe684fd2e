use super::validation::Notification;
use thiserror::Error;

/// Failures surfaced by the catalog use cases.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The input was rejected; carries every reason found.
    #[error("{0}")]
    Validation(Notification),

    #[error("{0}")]
    NotFound(String),

    /// Unexpected gateway failure. The message is safe to show; the source is not.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl CatalogError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{entity} with ID {id} was not found"))
    }

    pub fn internal(message: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Internal {
            message: message.into(),
            source,
        }
    }

    /// Messages an end user may see. Internal causes are never included.
    pub fn client_messages(&self) -> Vec<String> {
        match self {
            Self::Validation(notification) => notification.messages(),
            Self::NotFound(message) => vec![message.clone()],
            Self::Internal { message, .. } => vec![message.clone()],
        }
    }

    pub fn client_message(&self) -> String {
        self.client_messages().join("; ")
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
