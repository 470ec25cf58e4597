//! # Ring Cursor
//!
//! The (head, len, capacity) bookkeeping of a ring, kept apart from the
//! storage it indexes so the safe buffer and the C surface share one copy of
//! the arithmetic.
//!
//! ## Plain English
//!
//! Picture a clock face with `capacity` hours. `head` is where the oldest
//! item sits, and the items follow clockwise for `len` hours. The next free
//! hour is `head + len`, wrapping past midnight back to 0.

use crate::config::ReadOrder;
use crate::error::{PushStatus, RingError, RingResult};

/// Logical position of a ring inside its backing storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cursor {
    /// Physical slot of the oldest element
    pub head: usize,
    /// Number of valid elements
    pub len: usize,
    /// Number of slots in use
    pub capacity: usize,
}

impl Cursor {
    /// An empty ring over `capacity` slots.
    pub fn empty(capacity: usize) -> Self {
        Self {
            head: 0,
            len: 0,
            capacity,
        }
    }

    /// Checks the invariants against a backing array of `physical_len` slots.
    ///
    /// `0 < capacity <= physical_len`, `head < capacity`, `len <= capacity`.
    pub fn check(&self, physical_len: usize) -> RingResult<()> {
        let valid = self.capacity > 0
            && self.capacity <= physical_len
            && self.head < self.capacity
            && self.len <= self.capacity;

        if !valid {
            log::error!(
                "Ring invariant violated: head={}, len={}, capacity={}, storage={}",
                self.head,
                self.len,
                self.capacity,
                physical_len
            );
            return Err(RingError::Corrupted {
                head: self.head,
                len: self.len,
                capacity: self.capacity,
            });
        }

        Ok(())
    }

    /// Physical slot of the `offset`-th element counted from the oldest.
    pub fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Physical slot that `peek`/`pop` read for the given order.
    fn read_slot(&self, order: ReadOrder) -> RingResult<usize> {
        if self.len == 0 {
            return Err(RingError::Empty);
        }

        Ok(match order {
            ReadOrder::Newest => self.slot(self.len - 1),
            ReadOrder::Oldest => self.head,
        })
    }

    /// Writes `value` into the push slot.
    ///
    /// When full, the push slot IS the head, so the oldest element is
    /// overwritten and the head moves forward one slot.
    pub fn push<T: Copy>(&mut self, storage: &mut [T], value: T) -> PushStatus<T> {
        let slot = self.slot(self.len);

        if self.is_full() {
            let evicted = storage[slot];
            storage[slot] = value;
            self.head = (self.head + 1) % self.capacity;
            log::trace!("Ring overflow: evicted slot {}", slot);
            PushStatus::Overflow { evicted }
        } else {
            storage[slot] = value;
            self.len += 1;
            PushStatus::Stored
        }
    }

    pub fn peek<T: Copy>(&self, storage: &[T], order: ReadOrder) -> RingResult<T> {
        self.read_slot(order).map(|slot| storage[slot])
    }

    /// Reads and retires one element. The vacated slot is not cleared.
    pub fn pop<T: Copy>(&mut self, storage: &[T], order: ReadOrder) -> RingResult<T> {
        let slot = self.read_slot(order)?;

        if order == ReadOrder::Oldest {
            self.head = (self.head + 1) % self.capacity;
        }
        self.len -= 1;

        Ok(storage[slot])
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_valid() {
        assert!(Cursor::empty(4).check(4).is_ok());
        assert!(Cursor { head: 3, len: 4, capacity: 4 }.check(8).is_ok());
    }

    #[test]
    fn test_check_rejects_out_of_range() {
        let cases = [
            Cursor { head: 4, len: 0, capacity: 4 },
            Cursor { head: 0, len: 5, capacity: 4 },
            Cursor { head: 0, len: 0, capacity: 0 },
            Cursor { head: 0, len: 0, capacity: 9 },
        ];

        for cursor in cases {
            assert!(matches!(
                cursor.check(8),
                Err(RingError::Corrupted { .. })
            ));
        }
    }

    #[test]
    fn test_slot_wraps() {
        let cursor = Cursor { head: 2, len: 3, capacity: 4 };
        assert_eq!(cursor.slot(0), 2);
        assert_eq!(cursor.slot(1), 3);
        assert_eq!(cursor.slot(2), 0);
    }

    #[test]
    fn test_push_uses_only_capacity_slots() {
        // Capacity smaller than the array: slot 3 must never be written
        let mut storage = [0i32; 4];
        let mut cursor = Cursor::empty(3);

        for value in 1..=5 {
            let _ = cursor.push(&mut storage, value);
        }

        assert_eq!(storage, [4, 5, 3, 0]);
        assert_eq!(cursor, Cursor { head: 2, len: 3, capacity: 3 });
    }

    #[test]
    fn test_pop_oldest_advances_head() {
        let mut storage = [0i32; 3];
        let mut cursor = Cursor::empty(3);
        let _ = cursor.push(&mut storage, 1);
        let _ = cursor.push(&mut storage, 2);

        assert_eq!(cursor.pop(&storage, ReadOrder::Oldest), Ok(1));
        assert_eq!(cursor.head, 1);
        assert_eq!(cursor.len, 1);
    }
}
