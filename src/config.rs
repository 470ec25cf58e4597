//! # Configuration Module
//!
//! Construction-time settings for a ring buffer.
//!
//! ## Plain English Explanation
//!
//! Two things are fixed when you compile: the element type and how many
//! slots the backing array has (`N`). Two more are chosen when you build a
//! buffer:
//!
//! - How many of those slots to actually use (the capacity)
//! - Which end `peek`/`pop` read from (newest or oldest)

// ============================================
// READ ORDER
// ============================================

/// Which element `peek` and `pop` observe.
///
/// ## Plain English
///
/// Think of a stack of plates versus a queue at a counter.
/// With `Newest` you always take the plate you put down last.
/// With `Oldest` the person who arrived first is served first.
///
/// Overflow behaves the same either way: when the buffer is full the
/// OLDEST element makes room for the new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadOrder {
    /// Last in, first out
    #[default]
    Newest,

    /// First in, first out
    Oldest,
}

// ============================================
// MAIN CONFIGURATION
// ============================================

/// Settings applied when a buffer is initialized
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferConfig {
    /// How many slots to use
    ///
    /// ## Limits
    /// - Minimum: 1
    /// - Maximum: the physical array length `N`
    /// - Default: `None`, meaning all of `N`
    pub capacity: Option<usize>,

    /// Which end reads observe
    pub read_order: ReadOrder,
}

impl BufferConfig {
    /// Newest-first reads over the whole backing array
    pub fn stack() -> Self {
        Self {
            read_order: ReadOrder::Newest,
            ..Self::default()
        }
    }

    /// Oldest-first reads over the whole backing array
    pub fn queue() -> Self {
        Self {
            read_order: ReadOrder::Oldest,
            ..Self::default()
        }
    }

    /// Uses only the first `capacity` slots.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Resolves the capacity for a backing array of `physical_len` slots.
    pub fn effective_capacity(&self, physical_len: usize) -> usize {
        self.capacity.unwrap_or(physical_len)
    }

    /// Validates the configuration against the backing array length.
    ///
    /// ## Plain English
    /// Makes sure the capacity fits the array it will live in.
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self, physical_len: usize) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let capacity = self.effective_capacity(physical_len);

        if capacity == 0 {
            errors.push(ConfigError::ZeroCapacity);
        }
        if capacity > physical_len {
            errors.push(ConfigError::CapacityExceedsStorage {
                capacity,
                physical_len,
            });
        }

        errors
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A buffer needs at least one slot
    #[error("Capacity must be at least 1")]
    ZeroCapacity,

    /// Requested more slots than the backing array has
    #[error("Capacity {capacity} exceeds backing storage of {physical_len} slots")]
    CapacityExceedsStorage { capacity: usize, physical_len: usize },
}

// ============================================
// TESTS
// ============================================
