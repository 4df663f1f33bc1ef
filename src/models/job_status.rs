use serde::{Deserialize, Serialize};

/// Lifecycle of a server-side analysis job.
///
/// Transitions are driven entirely by server responses; the client never
/// derives a status on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Importing,
    Succeeded,
    Error,
}
