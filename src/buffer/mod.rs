//! # Ring Buffer Module
//!
//! This module provides the fixed-capacity circular (ring) buffer.
//!
//! ## Plain English Explanation
//!
//! Imagine a circular conveyor belt at a sushi restaurant with a fixed
//! number of spots. Every time a new plate comes out of the kitchen:
//! 1. It goes on the belt at the next empty spot
//! 2. If the belt is full, the oldest plate is taken off to make room
//! 3. Customers can take a plate from the end they are configured for
//!
//! The belt is always the same length, so it never needs more memory.

mod cursor;
mod ring_buffer;

pub(crate) use cursor::Cursor;
pub use ring_buffer::RingBuffer;

use std::iter::FusedIterator;

// ============================================
// OCCUPANCY
// The three states a buffer moves between
// ============================================

/// How full a buffer is.
///
/// ```text
///        push            push (len == capacity)
///  Empty ─────► Partial ─────► Full ──┐
///    ▲            │  ▲          │     │ push: Overflow,
///    └────────────┘  └──────────┘     │ head advances
///        pop             pop     ◄────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    /// `len == 0`
    Empty,
    /// `0 < len < capacity`
    Partial,
    /// `len == capacity`
    Full,
}

impl Occupancy {
    pub(crate) fn of(len: usize, capacity: usize) -> Self {
        if len == 0 {
            Self::Empty
        } else if len >= capacity {
            Self::Full
        } else {
            Self::Partial
        }
    }
}

// ============================================
// ITERATOR
// ============================================

/// Iterator over a buffer's items, oldest to newest.
///
/// Created by [`RingBuffer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    storage: &'a [T],
    cursor: Cursor,
    /// Next logical offset from the front
    front: usize,
    /// One past the next logical offset from the back
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(storage: &'a [T], cursor: Cursor) -> Self {
        Self {
            storage,
            cursor,
            front: 0,
            back: cursor.len,
        }
    }
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = self.storage[self.cursor.slot(self.front)];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.storage[self.cursor.slot(self.back)])
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

impl<T: Copy> FusedIterator for Iter<'_, T> {}

// ============================================
// TESTS
// ============================================
