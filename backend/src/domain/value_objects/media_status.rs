use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl MediaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaStatus::Pending => "PENDING",
            MediaStatus::Processing => "PROCESSING",
            MediaStatus::Completed => "COMPLETED",
            MediaStatus::Error => "ERROR",
        }
    }
}
