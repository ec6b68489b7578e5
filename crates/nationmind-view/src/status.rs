use std::fmt;

use nationmind_api::{HealthFailure, HealthPayload};

const CHECKING: &str = "checking...";
const CONNECTED_PREFIX: &str = "✅ Backend conectado: ";
const UNAVAILABLE: &str = "❌ Backend no disponible";

/// What the status line shows.
///
/// A probe starts in `Checking` and moves to one of the other two variants
/// exactly once. Both settled variants are final for that mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusMessage {
    #[default]
    Checking,
    Connected { status: String },
    Unavailable { detail: Option<String> },
}

impl StatusMessage {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Checking)
    }
}

impl From<Result<HealthPayload, HealthFailure>> for StatusMessage {
    fn from(outcome: Result<HealthPayload, HealthFailure>) -> Self {
        match outcome {
            Ok(payload) => Self::Connected {
                status: payload.status,
            },
            Err(failure) => Self::Unavailable {
                detail: failure.message.filter(|m| !m.is_empty()),
            },
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => f.write_str(CHECKING),
            Self::Connected { status } => write!(f, "{CONNECTED_PREFIX}{status}"),
            Self::Unavailable { detail } => match detail.as_deref() {
                Some(detail) if !detail.is_empty() => write!(f, "{UNAVAILABLE}: {detail}"),
                _ => f.write_str(UNAVAILABLE),
            },
        }
    }
}
