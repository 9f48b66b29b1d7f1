//! Error taxonomy (spec.md §7).
//!
//! `OK` is represented by `Result::Ok` and has no variant here. Every public
//! operation returns `SxbpResult<T>`.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SxbpError {
    /// Memory acquisition refused. Rust's global allocator aborts the process
    /// on allocation failure rather than unwinding, so this variant is never
    /// actually returned today; it is kept so the taxonomy stays closed and
    /// so a future fallible-allocation path (`try_reserve`) has somewhere to
    /// report into.
    Oom,
    /// Input would produce more segments than the implementation accepts.
    CapacityExceeded { segments: usize, max: usize },
    /// Required input was missing (e.g. an empty slice where one was needed).
    NullArgument { what: &'static str },
    /// An operation's precondition did not hold (e.g. refining an empty figure).
    PreconditionFailed { reason: String },
    /// The progress callback asked refinement to stop.
    Cancelled,
    /// The requested refinement method has no implementation yet.
    Unimplemented { method: &'static str },
    /// Serialised buffer is shorter than its own header claims.
    BadHeaderSize { expected: usize, got: usize },
    /// Magic bytes did not read `SXBP`.
    BadMagic { got: [u8; 4] },
    /// Major version does not match this implementation's.
    BadVersion { major: u8, minor: u8, patch: u8 },
    /// Buffer length does not match `header size + segment_count * 4`.
    BadDataSize { expected: usize, got: usize },
}

impl fmt::Display for SxbpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SxbpError::Oom => write!(f, "memory acquisition refused"),
            SxbpError::CapacityExceeded { segments, max } => write!(
                f,
                "figure would need {segments} segments, exceeding the limit of {max}"
            ),
            SxbpError::NullArgument { what } => write!(f, "missing required argument: {what}"),
            SxbpError::PreconditionFailed { reason } => {
                write!(f, "precondition failed: {reason}")
            }
            SxbpError::Cancelled => write!(f, "refinement cancelled by progress callback"),
            SxbpError::Unimplemented { method } => {
                write!(f, "refinement method not implemented: {method}")
            }
            SxbpError::BadHeaderSize { expected, got } => write!(
                f,
                "buffer too short for header: need at least {expected} bytes, got {got}"
            ),
            SxbpError::BadMagic { got } => write!(f, "bad magic bytes: {got:?}"),
            SxbpError::BadVersion { major, minor, patch } => write!(
                f,
                "unsupported format version {major}.{minor}.{patch}"
            ),
            SxbpError::BadDataSize { expected, got } => write!(
                f,
                "buffer size mismatch: expected {expected} bytes, got {got}"
            ),
        }
    }
}

impl std::error::Error for SxbpError {}

pub type SxbpResult<T> = Result<T, SxbpError>;
