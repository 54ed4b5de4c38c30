//! Error type shared by the engine, settings loader and bindings.

/// Errors surfaced synchronously to the caller. None are retryable.
#[derive(Debug)]
pub enum EngineError {
    /// An input outside its allowed set (unknown name, degenerate size)
    InvalidArgument { name: &'static str, value: String },
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings JSON could not be parsed
    Settings(serde_json::Error),
}

impl EngineError {
    pub fn invalid(name: &'static str, value: impl ToString) -> Self {
        EngineError::InvalidArgument {
            name,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidArgument { name, value } => {
                write!(f, "invalid argument: {} = {:?}", name, value)
            }
            EngineError::Io(e) => write!(f, "IO error: {}", e),
            EngineError::Settings(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidArgument { .. } => None,
            EngineError::Io(e) => Some(e),
            EngineError::Settings(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Settings(err)
    }
}
