//! # C Interface
//!
//! Status-code API over a plain `#[repr(C)]` struct, for firmware written in C.
//!
//! ## Plain English
//!
//! C code can't hold a `RingBuffer<T, N>`, so it gets a struct with public
//! fields and a set of functions that return numeric status codes. Because
//! C callers may pass null pointers or poke at the fields directly, every
//! function checks both before doing anything. A rejected call never
//! changes the buffer.
//!
//! Reads are newest-first, like the default Rust buffer.
//!
//! ```text
//! RawRing ring = ring_zeroed();
//! ring_init(&ring);
//! int32_t v = 53;
//! ring_push(&ring, &v);   // STATUS_OK
//! ring_pop(&ring, &v);    // STATUS_OK, v == 53
//! ring_pop(&ring, &v);    // STATUS_EMPTY
//! ```

use crate::buffer::Cursor;
use crate::config::{BufferConfig, ReadOrder};
use crate::error::{RingError, RingResult, STATUS_OK};

// ============================================
// CONFIGURATION
// ============================================

/// Element type stored by [`RawRing`]
pub type RawValue = i32;

/// Physical slot count of [`RawRing`]
pub const RAW_MAX_LEN: usize = 32;

// ============================================
// RAW BUFFER
// ============================================

/// C-layout ring buffer.
///
/// Fields are public so C code can embed and inspect it. Writing them
/// directly is allowed; the next call reports `STATUS_CORRUPTED` if the
/// result is out of range.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawRing {
    /// Physical slot of the oldest element
    pub head: usize,
    /// Number of valid elements
    pub len: usize,
    /// Number of slots in use
    pub capacity: usize,
    /// Backing storage
    pub buf: [RawValue; RAW_MAX_LEN],
}

impl RawRing {
    /// All-zero struct, ready for [`ring_init`].
    pub const fn zeroed() -> Self {
        Self {
            head: 0,
            len: 0,
            capacity: 0,
            buf: [0; RAW_MAX_LEN],
        }
    }

    fn cursor(&self) -> Cursor {
        Cursor {
            head: self.head,
            len: self.len,
            capacity: self.capacity,
        }
    }

    fn checked_cursor(&self) -> RingResult<Cursor> {
        let cursor = self.cursor();
        cursor.check(RAW_MAX_LEN)?;
        Ok(cursor)
    }

    fn store(&mut self, cursor: Cursor) {
        self.head = cursor.head;
        self.len = cursor.len;
        self.capacity = cursor.capacity;
    }
}

impl Default for RawRing {
    fn default() -> Self {
        Self::zeroed()
    }
}

// ============================================
// HELPERS
// ============================================

fn status(result: RingResult<i32>) -> i32 {
    result.unwrap_or_else(|err| err.code())
}

/// # Safety
/// `p_ring` must be null or valid for reads.
unsafe fn ring_ref<'a>(p_ring: *const RawRing) -> RingResult<&'a RawRing> {
    p_ring
        .as_ref()
        .ok_or(RingError::InvalidParam("null buffer pointer"))
}

/// # Safety
/// `p_ring` must be null or valid for reads and writes.
unsafe fn ring_mut<'a>(p_ring: *mut RawRing) -> RingResult<&'a mut RawRing> {
    p_ring
        .as_mut()
        .ok_or(RingError::InvalidParam("null buffer pointer"))
}

/// # Safety
/// `p_out` must be null or valid for writes.
unsafe fn out_mut<'a>(p_out: *mut RawValue) -> RingResult<&'a mut RawValue> {
    p_out
        .as_mut()
        .ok_or(RingError::InvalidParam("null output pointer"))
}

// ============================================
// EXPORTED FUNCTIONS
// ============================================

/// Returns an all-zero buffer by value.
#[no_mangle]
pub extern "C" fn ring_zeroed() -> RawRing {
    RawRing::zeroed()
}

/// Checks pointer and invariants without touching anything.
///
/// # Safety
/// `p_ring` must be null or point to a readable `RawRing`.
#[no_mangle]
pub unsafe extern "C" fn ring_check(p_ring: *const RawRing) -> i32 {
    status(ring_ref(p_ring).and_then(|ring| ring.checked_cursor().map(|_| STATUS_OK)))
}

/// Resets the buffer to empty over all [`RAW_MAX_LEN`] slots.
///
/// # Safety
/// `p_ring` must be null or point to a writable `RawRing`.
#[no_mangle]
pub unsafe extern "C" fn ring_init(p_ring: *mut RawRing) -> i32 {
    ring_init_with_capacity(p_ring, RAW_MAX_LEN)
}

/// Resets the buffer to empty over `capacity` slots.
///
/// # Safety
/// `p_ring` must be null or point to a writable `RawRing`.
#[no_mangle]
pub unsafe extern "C" fn ring_init_with_capacity(p_ring: *mut RawRing, capacity: usize) -> i32 {
    status(ring_mut(p_ring).and_then(|ring| {
        let config = BufferConfig::default().with_capacity(capacity);
        if let Some(problem) = config.validate(RAW_MAX_LEN).into_iter().next() {
            log::warn!("Rejected raw ring capacity: {}", problem);
            return Err(problem.into());
        }

        ring.store(Cursor::empty(capacity));
        Ok(STATUS_OK)
    }))
}

/// Final check before the caller releases the storage.
///
/// # Safety
/// `p_ring` must be null or point to a readable `RawRing`.
#[no_mangle]
pub unsafe extern "C" fn ring_deinit(p_ring: *mut RawRing) -> i32 {
    ring_check(p_ring)
}

/// Pushes `*p_val`. Returns `STATUS_OVERFLOW` if the oldest element was
/// overwritten; the value is stored either way.
///
/// # Safety
/// `p_ring` must be null or point to a writable `RawRing`;
/// `p_val` must be null or point to a readable value.
#[no_mangle]
pub unsafe extern "C" fn ring_push(p_ring: *mut RawRing, p_val: *const RawValue) -> i32 {
    status(ring_mut(p_ring).and_then(|ring| {
        let mut cursor = ring.checked_cursor()?;
        let value = *p_val
            .as_ref()
            .ok_or(RingError::InvalidParam("null value pointer"))?;

        let outcome = cursor.push(&mut ring.buf, value);
        ring.store(cursor);
        Ok(outcome.code())
    }))
}

/// Copies the newest element into `*p_val` without removing it.
///
/// # Safety
/// `p_ring` must be null or point to a readable `RawRing`;
/// `p_val` must be null or point to writable storage.
#[no_mangle]
pub unsafe extern "C" fn ring_peek(p_ring: *const RawRing, p_val: *mut RawValue) -> i32 {
    status(ring_ref(p_ring).and_then(|ring| {
        let cursor = ring.checked_cursor()?;
        let out = out_mut(p_val)?;

        *out = cursor.peek(&ring.buf, ReadOrder::Newest)?;
        Ok(STATUS_OK)
    }))
}

/// Moves the newest element into `*p_val`.
///
/// # Safety
/// `p_ring` must be null or point to a writable `RawRing`;
/// `p_val` must be null or point to writable storage.
#[no_mangle]
pub unsafe extern "C" fn ring_pop(p_ring: *mut RawRing, p_val: *mut RawValue) -> i32 {
    status(ring_mut(p_ring).and_then(|ring| {
        let mut cursor = ring.checked_cursor()?;
        let out = out_mut(p_val)?;

        *out = cursor.pop(&ring.buf, ReadOrder::Newest)?;
        ring.store(cursor);
        Ok(STATUS_OK)
    }))
}

/// Number of stored elements, or a negative status code.
///
/// # Safety
/// `p_ring` must be null or point to a readable `RawRing`.
#[no_mangle]
pub unsafe extern "C" fn ring_len(p_ring: *const RawRing) -> i64 {
    match ring_ref(p_ring).and_then(RawRing::checked_cursor) {
        Ok(cursor) => cursor.len as i64,
        Err(err) => i64::from(err.code()),
    }
}

/// Configured capacity, or a negative status code.
///
/// # Safety
/// `p_ring` must be null or point to a readable `RawRing`.
#[no_mangle]
pub unsafe extern "C" fn ring_capacity(p_ring: *const RawRing) -> i64 {
    match ring_ref(p_ring).and_then(RawRing::checked_cursor) {
        Ok(cursor) => cursor.capacity as i64,
        Err(err) => i64::from(err.code()),
    }
}

/// `STATUS_EMPTY` if there are no elements, else `STATUS_OK`.
///
/// # Safety
/// `p_ring` must be null or point to a readable `RawRing`.
#[no_mangle]
pub unsafe extern "C" fn ring_is_empty(p_ring: *const RawRing) -> i32 {
    status(ring_ref(p_ring).and_then(|ring| {
        let cursor = ring.checked_cursor()?;
        if cursor.len == 0 {
            Err(RingError::Empty)
        } else {
            Ok(STATUS_OK)
        }
    }))
}

/// `STATUS_FULL` if every slot is in use, else `STATUS_OK`.
///
/// # Safety
/// `p_ring` must be null or point to a readable `RawRing`.
#[no_mangle]
pub unsafe extern "C" fn ring_is_full(p_ring: *const RawRing) -> i32 {
    status(ring_ref(p_ring).and_then(|ring| {
        let cursor = ring.checked_cursor()?;
        if cursor.is_full() {
            Err(RingError::Full)
        } else {
            Ok(STATUS_OK)
        }
    }))
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{
        STATUS_CORRUPTED, STATUS_EMPTY, STATUS_FULL, STATUS_INVALID_PARAM, STATUS_OVERFLOW,
    };
    use std::ptr;

    fn initialized(capacity: usize) -> RawRing {
        let mut ring = RawRing::zeroed();
        assert_eq!(
            unsafe { ring_init_with_capacity(&mut ring, capacity) },
            STATUS_OK
        );
        ring
    }

    fn push(ring: &mut RawRing, value: RawValue) -> i32 {
        unsafe { ring_push(ring, &value) }
    }

    #[test]
    fn test_check() {
        let mut ring = RawRing::zeroed();
        unsafe {
            assert_eq!(ring_check(ptr::null()), STATUS_INVALID_PARAM);

            // Zeroed, not initialized: capacity 0
            assert_eq!(ring_check(&ring), STATUS_CORRUPTED);

            ring.head = RAW_MAX_LEN;
            ring.capacity = RAW_MAX_LEN;
            assert_eq!(ring_check(&ring), STATUS_CORRUPTED);

            ring.head = 0;
            assert_eq!(ring_check(&ring), STATUS_OK);
        }
    }

    #[test]
    fn test_init() {
        let mut ring = RawRing::zeroed();
        unsafe {
            assert_eq!(ring_init(ptr::null_mut()), STATUS_INVALID_PARAM);
            assert_eq!(ring_init(&mut ring), STATUS_OK);
            assert_eq!(ring_capacity(&ring), RAW_MAX_LEN as i64);
            assert_eq!(ring_len(&ring), 0);

            assert_eq!(ring_init_with_capacity(&mut ring, 0), STATUS_INVALID_PARAM);
            assert_eq!(
                ring_init_with_capacity(&mut ring, RAW_MAX_LEN + 1),
                STATUS_INVALID_PARAM
            );
            // Rejected init left the previous state alone
            assert_eq!(ring_capacity(&ring), RAW_MAX_LEN as i64);
        }
    }

    #[test]
    fn test_deinit() {
        let mut ring = initialized(4);
        unsafe {
            assert_eq!(ring_deinit(ptr::null_mut()), STATUS_INVALID_PARAM);
            assert_eq!(ring_deinit(&mut ring), STATUS_OK);
        }
    }

    #[test]
    fn test_push() {
        let mut ring = initialized(RAW_MAX_LEN);
        let val: RawValue = 53;

        unsafe {
            assert_eq!(ring_push(ptr::null_mut(), &val), STATUS_INVALID_PARAM);
            assert_eq!(ring_push(&mut ring, ptr::null()), STATUS_INVALID_PARAM);
            assert_eq!(
                ring_push(ptr::null_mut(), ptr::null()),
                STATUS_INVALID_PARAM
            );
        }
        assert_eq!(ring.len, 0);

        assert_eq!(push(&mut ring, 53), STATUS_OK);
        assert_eq!((ring.head, ring.len), (0, 1));
        assert_eq!(ring.buf[0], 53);

        assert_eq!(push(&mut ring, 77), STATUS_OK);
        assert_eq!(push(&mut ring, 88), STATUS_OK);
        assert_eq!((ring.head, ring.len), (0, 3));
        assert_eq!(&ring.buf[..3], &[53, 77, 88]);
    }

    #[test]
    fn test_overflow() {
        let mut ring = initialized(3);

        for value in 1..=3 {
            assert_eq!(push(&mut ring, value), STATUS_OK);
        }
        assert_eq!(unsafe { ring_is_full(&ring) }, STATUS_FULL);

        assert_eq!(push(&mut ring, 4), STATUS_OVERFLOW);
        assert_eq!(ring.len, 3);
        assert_eq!(ring.head, 1);
        assert_eq!(&ring.buf[..3], &[4, 2, 3]);
    }

    #[test]
    fn test_peek_and_pop() {
        let mut ring = initialized(4);
        let mut out: RawValue = -1;

        unsafe {
            assert_eq!(ring_peek(&ring, &mut out), STATUS_EMPTY);
            assert_eq!(ring_pop(&mut ring, &mut out), STATUS_EMPTY);
            assert_eq!(out, -1);
        }

        for value in [10, 20, 30] {
            push(&mut ring, value);
        }

        unsafe {
            assert_eq!(ring_peek(&ring, ptr::null_mut()), STATUS_INVALID_PARAM);
            assert_eq!(ring_pop(ptr::null_mut(), &mut out), STATUS_INVALID_PARAM);

            assert_eq!(ring_peek(&ring, &mut out), STATUS_OK);
            assert_eq!(out, 30);
            assert_eq!(ring_pop(&mut ring, &mut out), STATUS_OK);
            assert_eq!(out, 30);
            assert_eq!(ring_len(&ring), 2);
            assert_eq!(ring_peek(&ring, &mut out), STATUS_OK);
            assert_eq!(out, 20);
        }
    }

    #[test]
    fn test_empty_and_full_status() {
        let mut ring = initialized(2);
        unsafe {
            assert_eq!(ring_is_empty(ptr::null()), STATUS_INVALID_PARAM);
            assert_eq!(ring_is_empty(&ring), STATUS_EMPTY);
            assert_eq!(ring_is_full(&ring), STATUS_OK);
        }

        push(&mut ring, 1);
        unsafe {
            assert_eq!(ring_is_empty(&ring), STATUS_OK);
            assert_eq!(ring_is_full(&ring), STATUS_OK);
        }
    }

    #[test]
    fn test_corrupted_fields_block_mutation() {
        let mut ring = initialized(4);
        push(&mut ring, 1);
        ring.len = 5;
        let before = ring;
        let mut out: RawValue = 0;

        assert_eq!(push(&mut ring, 2), STATUS_CORRUPTED);
        unsafe {
            assert_eq!(ring_pop(&mut ring, &mut out), STATUS_CORRUPTED);
            assert_eq!(ring_len(&ring), i64::from(STATUS_CORRUPTED));
            assert_eq!(ring_capacity(&ring), i64::from(STATUS_CORRUPTED));
        }
        assert_eq!(ring, before);
    }

    #[test]
    fn test_len_null_sentinel() {
        unsafe {
            assert_eq!(ring_len(ptr::null()), i64::from(STATUS_INVALID_PARAM));
            assert_eq!(ring_capacity(ptr::null()), i64::from(STATUS_INVALID_PARAM));
        }
    }
}
