//! Error types for snmp-inspect.
//!
//! This module provides:
//!
//! - [`Error`] - The main error type for all operations
//! - [`ProtocolValueError`] - A varbind carried an exception marker instead of a value
//! - [`ErrorStatus`] - SNMP protocol errors returned by agents (RFC 3416)
//! - Helper kinds for OID parsing and walk aborts
//!
//! All public enums are `#[non_exhaustive]` where new variants are plausible.
//!
//! # Per-item versus whole-operation errors
//!
//! A [`ProtocolValueError`] is a valid protocol answer ("this instance does not
//! exist"), so GET, SET and TABLE results report it per item inside the result
//! instead of failing the operation. Transport failures and malformed walks fail
//! the whole operation.
//!
//! ```
//! use snmp_inspect::{Error, ExceptionKind, ProtocolValueError};
//!
//! fn describe(error: &Error) -> &'static str {
//!     match error {
//!         Error::ProtocolValue(ProtocolValueError { kind: ExceptionKind::EndOfMibView, .. }) => {
//!             "ran past the end of the MIB"
//!         }
//!         Error::Walk { .. } => "walk failed",
//!         e if e.is_transport() => "transport failure",
//!         _ => "other",
//!     }
//! }
//! ```

use std::time::Duration;

use crate::oid::Oid;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The three SNMPv2 exception markers a varbind may carry instead of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExceptionKind {
    /// The object is not known to the agent.
    NoSuchObject,
    /// The object is known but this instance does not exist.
    NoSuchInstance,
    /// No lexicographic successor exists (GETNEXT/GETBULK ran off the tree).
    EndOfMibView,
}

impl ExceptionKind {
    /// The wire tag of this exception marker.
    pub fn tag(self) -> u8 {
        use crate::tag::context;
        match self {
            Self::NoSuchObject => context::NO_SUCH_OBJECT,
            Self::NoSuchInstance => context::NO_SUCH_INSTANCE,
            Self::EndOfMibView => context::END_OF_MIB_VIEW,
        }
    }
}

impl std::fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchObject => write!(f, "noSuchObject"),
            Self::NoSuchInstance => write!(f, "noSuchInstance"),
            Self::EndOfMibView => write!(f, "endOfMibView"),
        }
    }
}

/// A varbind's payload was an exception marker rather than a usable value.
///
/// The `oid` is present when the varbind itself was normalized and absent when
/// a bare value was.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolValueError {
    /// Which exception marker was received.
    pub kind: ExceptionKind,
    /// The OID the marker was bound to, if known.
    pub oid: Option<Oid>,
}

impl ProtocolValueError {
    pub fn new(kind: ExceptionKind) -> Self {
        Self { kind, oid: None }
    }

    pub fn with_oid(kind: ExceptionKind, oid: Oid) -> Self {
        Self {
            kind,
            oid: Some(oid),
        }
    }
}

impl std::fmt::Display for ProtocolValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.oid {
            Some(oid) => write!(f, "{} = {}", oid, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ProtocolValueError {}

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Empty OID string.
    Empty,
    /// Arc is not a decimal number or overflows u32.
    InvalidArc,
    /// OID has too many arcs (exceeds MAX_OID_LEN).
    TooManyArcs { count: usize, max: usize },
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::TooManyArcs { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
        }
    }
}

/// Reason a walk was judged malformed and aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkAbortReason {
    /// The session delivered a batch with no varbinds without signalling completion.
    EmptyBatch,
    /// A varbind fell outside the subtree being walked.
    OutsideSubtree { oid: Oid },
    /// A varbind's OID did not increase over the previous one.
    NonIncreasing { previous: Oid, current: Oid },
}

impl std::fmt::Display for WalkAbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "empty batch before end of subtree"),
            Self::OutsideSubtree { oid } => write!(f, "OID {} outside walked subtree", oid),
            Self::NonIncreasing { previous, current } => {
                write!(f, "non-increasing OID: {} >= {}", previous, current)
            }
        }
    }
}

/// SNMP protocol error status codes (RFC 3416).
///
/// Reported by the agent in the error-status field of a response, typically
/// for a SET that could not be applied.
///
/// ```
/// use snmp_inspect::ErrorStatus;
///
/// let status = ErrorStatus::from_i32(17);
/// assert_eq!(status, ErrorStatus::NotWritable);
/// assert_eq!(status.to_string(), "notWritable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorStatus {
    NoError,
    TooBig,
    NoSuchName,
    BadValue,
    ReadOnly,
    GenErr,
    NoAccess,
    WrongType,
    WrongLength,
    WrongEncoding,
    WrongValue,
    NoCreation,
    InconsistentValue,
    ResourceUnavailable,
    CommitFailed,
    UndoFailed,
    AuthorizationError,
    NotWritable,
    InconsistentName,
    /// Unknown or future error status code.
    Unknown(i32),
}

impl ErrorStatus {
    /// Create from raw status code.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::NoError,
            1 => Self::TooBig,
            2 => Self::NoSuchName,
            3 => Self::BadValue,
            4 => Self::ReadOnly,
            5 => Self::GenErr,
            6 => Self::NoAccess,
            7 => Self::WrongType,
            8 => Self::WrongLength,
            9 => Self::WrongEncoding,
            10 => Self::WrongValue,
            11 => Self::NoCreation,
            12 => Self::InconsistentValue,
            13 => Self::ResourceUnavailable,
            14 => Self::CommitFailed,
            15 => Self::UndoFailed,
            16 => Self::AuthorizationError,
            17 => Self::NotWritable,
            18 => Self::InconsistentName,
            other => Self::Unknown(other),
        }
    }

    /// Convert to raw status code.
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::TooBig => 1,
            Self::NoSuchName => 2,
            Self::BadValue => 3,
            Self::ReadOnly => 4,
            Self::GenErr => 5,
            Self::NoAccess => 6,
            Self::WrongType => 7,
            Self::WrongLength => 8,
            Self::WrongEncoding => 9,
            Self::WrongValue => 10,
            Self::NoCreation => 11,
            Self::InconsistentValue => 12,
            Self::ResourceUnavailable => 13,
            Self::CommitFailed => 14,
            Self::UndoFailed => 15,
            Self::AuthorizationError => 16,
            Self::NotWritable => 17,
            Self::InconsistentName => 18,
            Self::Unknown(code) => *code,
        }
    }
}

impl std::fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoError => write!(f, "noError"),
            Self::TooBig => write!(f, "tooBig"),
            Self::NoSuchName => write!(f, "noSuchName"),
            Self::BadValue => write!(f, "badValue"),
            Self::ReadOnly => write!(f, "readOnly"),
            Self::GenErr => write!(f, "genErr"),
            Self::NoAccess => write!(f, "noAccess"),
            Self::WrongType => write!(f, "wrongType"),
            Self::WrongLength => write!(f, "wrongLength"),
            Self::WrongEncoding => write!(f, "wrongEncoding"),
            Self::WrongValue => write!(f, "wrongValue"),
            Self::NoCreation => write!(f, "noCreation"),
            Self::InconsistentValue => write!(f, "inconsistentValue"),
            Self::ResourceUnavailable => write!(f, "resourceUnavailable"),
            Self::CommitFailed => write!(f, "commitFailed"),
            Self::UndoFailed => write!(f, "undoFailed"),
            Self::AuthorizationError => write!(f, "authorizationError"),
            Self::NotWritable => write!(f, "notWritable"),
            Self::InconsistentName => write!(f, "inconsistentName"),
            Self::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}

/// The main error type for all snmp-inspect operations.
///
/// # Common Patterns
///
/// ```
/// use snmp_inspect::Error;
///
/// fn log_error(error: &Error) {
///     if let Some(target) = error.target() {
///         println!("error from {}: {}", target, error);
///     } else {
///         println!("error: {}", error);
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A varbind carried an exception marker instead of a value.
    #[error("protocol value error: {0}")]
    ProtocolValue(#[from] ProtocolValueError),

    /// I/O error reported by the SNMP engine.
    #[error("I/O error{}: {source}", target.as_ref().map(|t| format!(" communicating with {}", t)).unwrap_or_default())]
    Io {
        target: Option<String>,
        #[source]
        source: std::io::Error,
    },

    /// Request timed out inside the SNMP engine.
    #[error("timeout after {elapsed:?}{}", target.as_ref().map(|t| format!(" waiting for {}", t)).unwrap_or_default())]
    Timeout {
        target: Option<String>,
        elapsed: Duration,
    },

    /// Credentials were rejected (bad community, unknown user, digest mismatch).
    #[error("authentication failed{}: {reason}", target.as_ref().map(|t| format!(" for {}", t)).unwrap_or_default())]
    AuthenticationFailed {
        target: Option<String>,
        reason: String,
    },

    /// The session or receiver was closed while a request was pending.
    #[error("session closed{}", target.as_ref().map(|t| format!(" ({})", t)).unwrap_or_default())]
    SessionClosed { target: Option<String> },

    /// SNMP protocol error status returned by the agent.
    #[error("SNMP error{}: {status} at index {index}", target.as_ref().map(|t| format!(" from {}", t)).unwrap_or_default())]
    Snmp {
        target: Option<String>,
        status: ErrorStatus,
        index: u32,
        oid: Option<Oid>,
    },

    /// A subtree walk failed; everything collected so far was discarded.
    #[error("walk of {root} failed after {discarded} entries: {source}")]
    Walk {
        root: Oid,
        discarded: usize,
        #[source]
        source: Box<Error>,
    },

    /// A walk batch was empty or inconsistent.
    #[error("malformed walk state: {reason}")]
    MalformedWalk { reason: WalkAbortReason },

    /// Invalid OID format.
    #[error("invalid OID{}: {kind}", input.as_ref().map(|i| format!(" '{}'", i)).unwrap_or_default())]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>,
    },

    /// A value supplied for SET could not be coerced to the object's type.
    #[error("invalid value for {oid}: {reason}")]
    InvalidValue { oid: Oid, reason: String },

    /// The operation was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Wrap a failure that ended a walk of `root`.
    pub fn walk(root: Oid, discarded: usize, source: Error) -> Self {
        Self::Walk {
            root,
            discarded,
            source: Box::new(source),
        }
    }

    /// Whether this error came from the SNMP engine's transport.
    ///
    /// Transport failures are never retried by this crate.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Io { .. }
            | Self::Timeout { .. }
            | Self::AuthenticationFailed { .. }
            | Self::SessionClosed { .. }
            | Self::Snmp { .. } => true,
            Self::Walk { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// Get the target address if this error has one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Io { target, .. }
            | Self::Timeout { target, .. }
            | Self::AuthenticationFailed { target, .. }
            | Self::SessionClosed { target }
            | Self::Snmp { target, .. } => target.as_deref(),
            Self::Walk { source, .. } => source.target(),
            _ => None,
        }
    }
}
