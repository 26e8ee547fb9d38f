//! The uniform operation-result envelope.
//!
//! On the wire every backend response is `{success, data?, message,
//! error?}`. [`ApiResponse`] is the typed view of that shape: exactly one
//! of `data`/`error` is present and `message` always is. It is the sole
//! channel between the request engine, the facades, and consumers.

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Result of one logical API operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The backend completed the operation and returned a payload.
    Success { data: T, message: String },
    /// The backend refused the operation, or transport failed after the
    /// attempt budget was exhausted.
    Failure { error: String, message: String },
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data,
            message: message.into(),
        }
    }

    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Payload reference, if the operation succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Machine-oriented error code, if the operation failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// Human-readable message; present on both variants.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    /// Consume the envelope, yielding the payload or the error/message pair.
    pub fn into_result(self) -> Result<T, (String, String)> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { error, message } => Err((error, message)),
        }
    }
}

/// Raw wire shape. The backend is trusted to emit it; the degenerate
/// combinations (success without data) are normalized in `from_wire`.
#[derive(Deserialize)]
struct WireEnvelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    #[serde(default)]
    message: String,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn from_wire(wire: WireEnvelope<T>) -> Self {
        if wire.success {
            match wire.data {
                Some(data) => Self::Success {
                    data,
                    message: wire.message,
                },
                None => Self::failure(
                    "Malformed response",
                    "The server reported success without a payload.",
                ),
            }
        } else {
            Self::Failure {
                error: wire.error.unwrap_or_else(|| "Unknown error".to_string()),
                message: wire.message,
            }
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireEnvelope::<T>::deserialize(deserializer)?;
        Ok(Self::from_wire(wire))
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Success { data, message } => {
                let mut s = serializer.serialize_struct("ApiResponse", 3)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("data", data)?;
                s.serialize_field("message", message)?;
                s.end()
            }
            Self::Failure { error, message } => {
                let mut s = serializer.serialize_struct("ApiResponse", 3)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("error", error)?;
                s.serialize_field("message", message)?;
                s.end()
            }
        }
    }
}
