//! Random number generation backed by a pooled /dev/urandom reader.
//!
//! The pool is a small mlock'd buffer refilled synchronously from
//! /dev/urandom whenever it runs dry, and zeroized on shutdown.

use std::fs::File;
use std::io::Read;
use std::sync::Mutex;
use std::sync::atomic::{AtomicPtr, Ordering};

use zeroize::Zeroize;

const POOL_SIZE: usize = 4096;

static POOL: Mutex<Option<Pool>> = Mutex::new(None);

// Raw view of the live pool buffer, for async-signal-safe zeroing only.
static POOL_PTR: AtomicPtr<u8> = AtomicPtr::new(std::ptr::null_mut());

pub fn source_name() -> &'static str {
    "/dev/urandom"
}

/// Draw 64 random bits.
pub fn next_u64() -> u64 {
    let mut guard = POOL.lock().expect("rand: pool lock poisoned");
    let pool = guard
        .get_or_insert_with(|| Pool::open().expect("rand: failed to open /dev/urandom"));
    pool.next_u64()
}

/// Zeroize and release the pool. Safe to call more than once.
pub fn zeroize_state() {
    if let Ok(mut guard) = POOL.lock() {
        *guard = None;
    }
}

/// Emergency zero for crash handlers - minimal, async-signal-safe.
/// Skips the lock entirely and writes through the raw buffer pointer.
#[inline(never)]
pub unsafe fn emergency_zero() {
    let ptr = POOL_PTR.load(Ordering::Acquire);
    if !ptr.is_null() {
        for i in 0..POOL_SIZE {
            unsafe { std::ptr::write_volatile(ptr.add(i), 0) };
        }
    }
}

struct Pool {
    source: File,
    buf: Box<[u8; POOL_SIZE]>,
    pos: usize,
}

impl Pool {
    fn open() -> std::io::Result<Self> {
        let source = File::open("/dev/urandom")?;
        let buf = Box::new([0u8; POOL_SIZE]);

        // Best effort: keep the pool out of swap.
        unsafe { libc::mlock(buf.as_ptr() as *const libc::c_void, POOL_SIZE) };
        POOL_PTR.store(buf.as_ptr() as *mut u8, Ordering::Release);

        let mut pool = Self {
            source,
            buf,
            pos: POOL_SIZE,
        };
        pool.refill()?;
        Ok(pool)
    }

    fn refill(&mut self) -> std::io::Result<()> {
        self.source.read_exact(&mut self.buf[..])?;
        self.pos = 0;
        Ok(())
    }

    fn next_u64(&mut self) -> u64 {
        if self.pos + 8 > POOL_SIZE {
            self.refill().expect("rand: failed to read /dev/urandom");
        }
        let bytes: [u8; 8] = self.buf[self.pos..self.pos + 8]
            .try_into()
            .expect("rand: pool slice is 8 bytes");
        self.pos += 8;
        u64::from_le_bytes(bytes)
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        POOL_PTR.store(std::ptr::null_mut(), Ordering::Release);
        self.buf.zeroize();
        unsafe { libc::munlock(self.buf.as_ptr() as *const libc::c_void, POOL_SIZE) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_not_constant() {
        // 64 equal draws in a row would mean a dead source.
        let first = next_u64();
        assert!((0..64).map(|_| next_u64()).any(|v| v != first));
    }

    #[test]
    fn pool_survives_exhaustion() {
        for _ in 0..(POOL_SIZE / 8) * 3 {
            next_u64();
        }
    }
}
