/// DER signature codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("invalid argument: empty integer input")]
    InvalidArgument,
    #[error("decode: input truncated")]
    TruncatedInput,
    #[error("decode: malformed der encoding")]
    MalformedEncoding,
    #[error("decode: trailing data after signature")]
    TrailingData,
}

/// Timing harness errors.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("unknown curve: {0}")]
    UnknownCurve(String),
    #[error("unknown hash type: {0}")]
    UnknownHash(String),
    #[error("signing failed: {0}")]
    SignFailed(String),
    #[error("clock unavailable: {0}")]
    ClockFailed(String),
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

impl HarnessError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HarnessError::UnknownHash(_) => 2,
            HarnessError::UnknownCurve(_) => 3,
            _ => 1,
        }
    }
}
