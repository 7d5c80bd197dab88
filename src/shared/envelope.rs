/**
 * Response Envelope
 *
 * Every endpoint answers with the same JSON shape:
 *
 * ```text
 * {
 *   "meta": { "message": "...", "code": 200, "status": "success" },
 *   "data": { ... } | null
 * }
 * ```
 *
 * `meta.code` mirrors the HTTP status of the response, `meta.status` is
 * either `"success"` or `"error"`.
 */
use serde::{Deserialize, Serialize};

/// Outcome tag carried in `meta.status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The request did what it was asked to do
    Success,
    /// The request failed; `data` may carry details
    Error,
}

/// Status metadata of an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Human-readable summary of the outcome
    pub message: String,
    /// Numeric HTTP status code
    pub code: u16,
    /// Success or error tag
    pub status: Status,
}

/// Uniform response wrapper
///
/// `T` is the payload type of the endpoint. Error paths that have nothing to
/// report use `data: None`, which serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Status metadata
    pub meta: Meta,
    /// Endpoint payload
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Build an envelope from its parts
    pub fn new(message: impl Into<String>, code: u16, status: Status, data: Option<T>) -> Self {
        Self {
            meta: Meta {
                message: message.into(),
                code,
                status,
            },
            data,
        }
    }

    /// 200 envelope with a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::new(message, 200, Status::Success, Some(data))
    }

    /// Error envelope with the given status code
    pub fn error(message: impl Into<String>, code: u16, data: Option<T>) -> Self {
        Self::new(message, code, Status::Error, data)
    }

    /// Whether `meta.status` is `success`
    pub fn is_success(&self) -> bool {
        self.meta.status == Status::Success
    }
}
