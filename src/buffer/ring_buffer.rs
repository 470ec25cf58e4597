//! # Ring Buffer Implementation
//!
//! A fixed-size circular buffer that overwrites old elements when full.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots.
//! When all spots are full and a new car arrives,
//! the oldest car is towed away to make room.
//!
//! The spots are a plain array living inside the struct, so creating a
//! buffer never touches the heap.

use super::cursor::Cursor;
use super::{Iter, Occupancy};
use crate::config::{BufferConfig, ReadOrder};
use crate::error::{PushStatus, RingError, RingResult};

/// A fixed-capacity ring buffer over an inline array of `N` slots.
///
/// ## Properties
/// - Fixed capacity, at most `N` (doesn't grow)
/// - O(1) push, peek and pop
/// - Never refuses a push: when full, the oldest element is overwritten
///   and reported through [`PushStatus::Overflow`]
/// - Every operation re-checks the bookkeeping before touching anything
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    /// Backing storage; only the logical window holds live values
    storage: [T; N],

    /// head / len / capacity
    cursor: Cursor,

    /// Which end `peek` and `pop` read
    order: ReadOrder,
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    /// Creates an empty buffer using all `N` slots, newest-first reads.
    ///
    /// ## Example
    /// ```
    /// # use static_ring::RingBuffer;
    /// let buffer: RingBuffer<i32, 8> = RingBuffer::new().unwrap();
    /// assert_eq!(buffer.capacity(), Ok(8));
    /// ```
    pub fn new() -> RingResult<Self> {
        Self::with_config(&BufferConfig::default())
    }

    /// Creates an empty buffer that uses only `capacity` of the `N` slots.
    ///
    /// Fails with `InvalidParam` if `capacity` is 0 or larger than `N`.
    pub fn with_capacity(capacity: usize) -> RingResult<Self> {
        Self::with_config(&BufferConfig::default().with_capacity(capacity))
    }

    /// Creates an empty buffer from a full configuration.
    pub fn with_config(config: &BufferConfig) -> RingResult<Self> {
        if let Some(problem) = config.validate(N).into_iter().next() {
            log::warn!("Rejected ring buffer configuration: {}", problem);
            return Err(problem.into());
        }

        let capacity = config.effective_capacity(N);
        log::debug!(
            "Creating ring buffer: {} of {} slots, {:?} reads",
            capacity,
            N,
            config.read_order
        );

        Ok(Self {
            storage: [T::default(); N],
            cursor: Cursor::empty(capacity),
            order: config.read_order,
        })
    }
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    /// Rebuilds a buffer from raw parts, e.g. a copy taken from a C struct.
    ///
    /// The parts are validated like any other operation; out-of-range
    /// `head`/`len`/`capacity` yield `Corrupted`.
    pub fn from_parts(
        storage: [T; N],
        head: usize,
        len: usize,
        capacity: usize,
        order: ReadOrder,
    ) -> RingResult<Self> {
        let cursor = Cursor {
            head,
            len,
            capacity,
        };
        cursor.check(N)?;

        Ok(Self {
            storage,
            cursor,
            order,
        })
    }

    /// Checks the buffer's invariants.
    ///
    /// Called on entry by every other operation.
    pub fn validate(&self) -> RingResult<()> {
        self.cursor.check(N)
    }

    /// Adds an item to the buffer.
    ///
    /// If the buffer is full, the oldest item is overwritten and returned
    /// in `PushStatus::Overflow`.
    pub fn push(&mut self, item: T) -> RingResult<PushStatus<T>> {
        self.validate()?;
        Ok(self.cursor.push(&mut self.storage, item))
    }

    /// Returns the next item `pop` would remove, without removing it.
    ///
    /// Newest item for [`ReadOrder::Newest`], oldest for [`ReadOrder::Oldest`].
    pub fn peek(&self) -> RingResult<T> {
        self.validate()?;
        self.cursor.peek(&self.storage, self.order)
    }

    /// Removes and returns one item, chosen by the read order.
    ///
    /// The vacated slot keeps its stale value until the next push reuses it.
    pub fn pop(&mut self) -> RingResult<T> {
        self.validate()?;
        self.cursor.pop(&self.storage, self.order)
    }

    /// Returns the oldest item without removing it.
    pub fn peek_oldest(&self) -> RingResult<T> {
        self.validate()?;
        self.cursor.peek(&self.storage, ReadOrder::Oldest)
    }

    /// Returns the newest item without removing it.
    pub fn peek_newest(&self) -> RingResult<T> {
        self.validate()?;
        self.cursor.peek(&self.storage, ReadOrder::Newest)
    }

    /// Returns the item at logical position `index` (0 = oldest).
    pub fn get(&self, index: usize) -> RingResult<T> {
        self.validate()?;
        if index >= self.cursor.len {
            return Err(RingError::InvalidParam("index out of range"));
        }
        Ok(self.storage[self.cursor.slot(index)])
    }

    /// Returns the number of items currently stored.
    pub fn len(&self) -> RingResult<usize> {
        self.validate()?;
        Ok(self.cursor.len)
    }

    /// Returns the maximum number of items.
    pub fn capacity(&self) -> RingResult<usize> {
        self.validate()?;
        Ok(self.cursor.capacity)
    }

    /// Returns the length of the backing array.
    pub const fn physical_len(&self) -> usize {
        N
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> RingResult<bool> {
        self.validate()?;
        Ok(self.cursor.len == 0)
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> RingResult<bool> {
        self.validate()?;
        Ok(self.cursor.is_full())
    }

    /// Returns which of the three states the buffer is in.
    pub fn occupancy(&self) -> RingResult<Occupancy> {
        self.validate()?;
        Ok(Occupancy::of(self.cursor.len, self.cursor.capacity))
    }

    /// Returns how full the buffer is (0.0 = empty, 1.0 = full).
    pub fn fill_ratio(&self) -> RingResult<f32> {
        self.validate()?;
        Ok(self.cursor.len as f32 / self.cursor.capacity as f32)
    }

    /// Returns the configured read order.
    pub fn read_order(&self) -> ReadOrder {
        self.order
    }

    /// Clears all items from the buffer. Capacity and read order are kept.
    pub fn clear(&mut self) -> RingResult<()> {
        self.validate()?;
        log::debug!("Clearing ring buffer ({} items)", self.cursor.len);
        self.cursor = Cursor::empty(self.cursor.capacity);
        Ok(())
    }

    /// Releases the buffer after a final invariant check.
    ///
    /// Storage is inline, so there is nothing else to free.
    pub fn deinit(self) -> RingResult<()> {
        self.validate()
    }

    /// Returns an iterator over all items (oldest to newest).
    pub fn iter(&self) -> RingResult<Iter<'_, T>> {
        self.validate()?;
        Ok(Iter::new(&self.storage, self.cursor))
    }

    /// Returns copies of all items (oldest first).
    pub fn snapshot(&self) -> RingResult<Vec<T>> {
        Ok(self.iter()?.collect())
    }
}

// ============================================
// TESTS
// ============================================
