//! # Error Types Module
//!
//! This module defines the error and status types returned by every buffer
//! operation.
//!
//! ## Plain English Explanation
//!
//! A ring buffer can refuse a request for a handful of reasons, and the
//! caller needs to tell them apart:
//!
//! - "InvalidParam: you handed me nothing"
//! - "Corrupted: my bookkeeping is broken, someone scribbled on me"
//! - "Empty: there is nothing to read"
//! - "Full: there is no free slot"
//!
//! Overflow is NOT in this list. Pushing into a full buffer still succeeds,
//! it just throws away the oldest element, so it is reported as a status
//! on the success path (see [`PushStatus`]).

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// STATUS CODES
// Numeric values shared with the C surface
// ============================================

/// Operation completed
pub const STATUS_OK: i32 = 0;
/// A required argument was absent or out of range
pub const STATUS_INVALID_PARAM: i32 = -1;
/// The buffer failed its invariant check
pub const STATUS_CORRUPTED: i32 = -2;
/// Push succeeded but evicted the oldest element
pub const STATUS_OVERFLOW: i32 = -3;
/// No elements to read
pub const STATUS_EMPTY: i32 = -4;
/// Every slot is occupied
pub const STATUS_FULL: i32 = -5;
/// Anything else
pub const STATUS_GENERAL: i32 = -127;

// ============================================
// MAIN ERROR
// ============================================

/// Everything that can make a buffer operation fail.
///
/// ## Plain English
///
/// `InvalidParam` and `Corrupted` mean a bug somewhere: retrying won't help.
/// `Empty` and `Full` are normal conditions that callers branch on while
/// the program runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// A required argument was absent or out of range
    ///
    /// ## Examples
    /// - Null buffer pointer handed to the C surface
    /// - Capacity of zero, or larger than the backing array
    #[error("Invalid parameter: {0}")]
    InvalidParam(&'static str),

    /// The buffer's bookkeeping violates its invariants
    ///
    /// ## What This Means
    /// `head` or `len` point outside the configured capacity. Something
    /// outside the buffer wrote to its fields. Not locally recoverable.
    #[error("Buffer corrupted: head={head}, len={len}, capacity={capacity}")]
    Corrupted {
        head: usize,
        len: usize,
        capacity: usize,
    },

    /// Nothing to peek or pop
    #[error("Buffer is empty")]
    Empty,

    /// All slots are occupied
    #[error("Buffer is full")]
    Full,

    /// Something unexpected happened
    #[error("General error: {0}")]
    General(String),
}

impl RingError {
    /// Returns the numeric status code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidParam(_) => STATUS_INVALID_PARAM,
            Self::Corrupted { .. } => STATUS_CORRUPTED,
            Self::Empty => STATUS_EMPTY,
            Self::Full => STATUS_FULL,
            Self::General(_) => STATUS_GENERAL,
        }
    }

    /// Returns true for conditions a caller is expected to handle in
    /// normal operation (`Empty`, `Full`).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Empty | Self::Full)
    }
}

// A rejected configuration is a bad argument to `init`
impl From<ConfigError> for RingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ZeroCapacity => Self::InvalidParam("capacity must be at least 1"),
            ConfigError::CapacityExceedsStorage { .. } => {
                Self::InvalidParam("capacity exceeds backing storage")
            }
        }
    }
}

// ============================================
// PUSH STATUS
// ============================================

/// Outcome of a successful push.
///
/// ## Plain English
///
/// The buffer never refuses a write. When it is full, the new value takes
/// the place of the oldest one and you get that oldest value back in
/// `Overflow`, so losing data is never silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an Overflow means the oldest element was discarded"]
pub enum PushStatus<T> {
    /// Stored in a free slot
    Stored,

    /// Stored by overwriting the oldest element
    Overflow {
        /// The element that was discarded
        evicted: T,
    },
}

impl<T> PushStatus<T> {
    /// Returns true if the push discarded an element.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns the numeric status code for this outcome.
    pub fn code(&self) -> i32 {
        match self {
            Self::Stored => STATUS_OK,
            Self::Overflow { .. } => STATUS_OVERFLOW,
        }
    }
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses RingError
///
/// ## Plain English
///
/// This is a shorthand. Instead of writing:
/// ```text
/// fn pop(&mut self) -> Result<T, RingError>
/// ```
/// We can write:
/// ```text
/// fn pop(&mut self) -> RingResult<T>
/// ```
pub type RingResult<T> = Result<T, RingError>;

// ============================================
// TESTS
// ============================================
