//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`], [`AppResult<T>`] and the [`ErrorBody`] wire shape.

use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Numeric code carried by every failure that reached a service operation
pub const CODE_OPERATION_FAILED: u32 = 201;

/// Numeric code for requests rejected before reaching a service operation
pub const CODE_MALFORMED_REQUEST: u32 = 400;

/// Unified application error
///
/// ## Fields
/// * `kind` - classification, mapped to an HTTP status by the transport
/// * `code` - numeric code reported in the response body
/// * `message` - human-readable message, safe to show to clients
/// * `source` - underlying error, kept for logs only
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "no such session 3");
/// assert_eq!(err.code(), 201);
/// assert_eq!(err.status_code(), 404);
///
/// let err = AppError::bad_request("invalid path");
/// assert_eq!(err.code(), 400);
/// ```
pub struct AppError {
    kind: ErrorKind,
    code: u32,
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

/// Response body shared by every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: u32,
    pub message: String,
}

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an "operation failed" error of the given kind
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: CODE_OPERATION_FAILED,
            message: message.into(),
            source: None,
        }
    }

    /// 400, rejected before any service operation ran
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message).with_code(CODE_MALFORMED_REQUEST)
    }

    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    #[inline]
    pub fn unprocessable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message)
    }

    #[inline]
    pub fn service_unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Override the numeric body code
    #[inline]
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = code;
        self
    }

    /// Attach the underlying error (debugging only, never serialized)
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Wire representation of this error
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code,
            message: self.message.to_string(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code);
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
