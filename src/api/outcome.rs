use serde::Serialize;

use crate::error::{ErrorKind, Result};

/// Plain result handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl<T> Outcome<T> {
    pub fn success(message: &str, payload: Option<T>) -> Self {
        Self {
            ok: true,
            message: message.to_string(),
            payload,
            error: None,
        }
    }

    /// Convert a store result, attaching `message` on success
    pub fn from_result(result: Result<T>, message: &str) -> Self {
        match result {
            Ok(payload) => Self::success(message, Some(payload)),
            Err(err) => Self {
                ok: false,
                message: err.user_message(),
                payload: None,
                error: Some(err.kind()),
            },
        }
    }

    /// Same outcome without the payload
    pub fn discard_payload(self) -> Outcome<()> {
        Outcome {
            ok: self.ok,
            message: self.message,
            payload: None,
            error: self.error,
        }
    }
}
