//! # Static Ring
//!
//! A fixed-capacity circular buffer for places where the heap is off limits.
//! Storage is an inline array, every operation is O(1) and non-blocking,
//! and nothing fails silently: pushing into a full buffer reports which
//! element it overwrote, reading an empty one is an error.
//!
//! ## Architecture Overview
//!
//! - `buffer`: the ring buffer itself and its occupancy states
//! - `config`: capacity and read-order settings
//! - `error`: error types and numeric status codes
//! - `ffi`: C-callable functions over a `#[repr(C)]` buffer
//!
//! ## Quick Start
//!
//! ```
//! use static_ring::{PushStatus, RingBuffer};
//!
//! let mut samples: RingBuffer<i32, 3> = RingBuffer::new().unwrap();
//! for value in [10, 20, 30] {
//!     assert_eq!(samples.push(value), Ok(PushStatus::Stored));
//! }
//!
//! // Full: the oldest sample makes room
//! assert_eq!(samples.push(40), Ok(PushStatus::Overflow { evicted: 10 }));
//! assert_eq!(samples.pop(), Ok(40));
//! ```
//!
//! A buffer is not synchronized. Wrap it in a lock to share it between
//! threads.

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod error;
pub mod ffi;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{Iter, Occupancy, RingBuffer};
pub use config::{BufferConfig, ConfigError, ReadOrder};
pub use error::{PushStatus, RingError, RingResult};

// ============================================
// LOGGING
// ============================================

/// Initialize logging for the host.
///
/// Safe to call more than once; only the first call installs the logger.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}

// ============================================
// TESTS
// ============================================
