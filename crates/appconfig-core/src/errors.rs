use thiserror::Error;

/// Result type alias using AppConfigError
pub type Result<T> = std::result::Result<T, AppConfigError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// log assertions and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A wire payload (envelope or embedded snapshot) could not be decoded
    Decode,
    /// Caller-supplied input was rejected (e.g. an invalid filter pattern)
    InvalidInput,
    /// An envelope file could not be read or a report could not be written
    Io,
    /// A result could not be rendered
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Decode => "ERR_DECODE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used in structured logs plus enough context
/// (operation, host identity) to trace a failure back to its envelope.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    easi_node: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            easi_node: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add host identity context (`easi:node`)
    pub fn with_easi_node(mut self, easi_node: impl Into<String>) -> Self {
        self.easi_node = Some(easi_node.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn easi_node(&self) -> Option<&str> {
        self.easi_node.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(easi_node) = &self.easi_node {
            write!(f, " (easi_node: {})", easi_node)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised at the decode boundary
///
/// Queries, filters and application-domain derivation never fail, so this
/// enum only describes payloads that could not be turned into typed values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppConfigError {
    /// Malformed or type-mismatched JSON
    #[error("Failed to decode {target}: {message}")]
    Decode { target: String, message: String },
}

impl AppConfigError {
    /// Build a decode error for the named payload (`"envelope"`, `"snapshot"`)
    pub fn decode(target: &str, err: serde_json::Error) -> Self {
        AppConfigError::Decode {
            target: target.to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from AppConfigError to ExError
impl From<AppConfigError> for ExError {
    fn from(err: AppConfigError) -> Self {
        match err {
            AppConfigError::Decode { ref target, .. } => ExError::new(ExErrorKind::Decode)
                .with_op(format!("decode_{}", target))
                .with_message(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        ExError::new(ExErrorKind::Io).with_message(err.to_string())
    }
}

impl From<regex::Error> for ExError {
    fn from(err: regex::Error) -> Self {
        ExError::new(ExErrorKind::InvalidInput).with_message(err.to_string())
    }
}
