use std::fmt;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Typed failure returned by every gateway-backed operation.
///
/// The first three variants map onto HTTP status classes the transport
/// normalizes for us; `Validation` is produced caller-side before any
/// request is issued; `Network` covers transport-level failures with no
/// response at all.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    Unauthorized,
    Forbidden,
    NotFound,
    Validation(Vec<FieldError>),
    Network(String),
    Unknown {
        status: Option<u16>,
        message: String,
    },
}

impl GatewayError {
    /// The HTTP status class this error corresponds to, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GatewayError::Unauthorized => Some(401),
            GatewayError::Forbidden => Some(403),
            GatewayError::NotFound => Some(404),
            GatewayError::Validation(_) | GatewayError::Network(_) => None,
            GatewayError::Unknown { status, .. } => *status,
        }
    }

    /// Shorthand for a single-field validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        GatewayError::Validation(vec![FieldError::new(field, message)])
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Unauthorized => write!(f, "unauthorized (401)"),
            GatewayError::Forbidden => write!(f, "forbidden (403)"),
            GatewayError::NotFound => write!(f, "not found (404)"),
            GatewayError::Validation(errors) => {
                write!(f, "validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            GatewayError::Network(message) => write!(f, "network error: {}", message),
            GatewayError::Unknown { status, message } => match status {
                Some(code) => write!(f, "request failed ({}): {}", code, message),
                None => write!(f, "request failed: {}", message),
            },
        }
    }
}

impl std::error::Error for GatewayError {}

/// Error raised by the store itself, independent of any gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StoreError> for GatewayError {
    fn from(err: StoreError) -> Self {
        GatewayError::Unknown {
            status: None,
            message: err.to_string(),
        }
    }
}
