//! Pooled scratch lists.
//!
//! File and resource collection builds short-lived lists on every emission. A [`BufferPool`]
//! keeps the backing allocations around between uses; [`PooledVec`] hands one out and puts it
//! back when dropped, whether the list was converted, left empty, or abandoned by a panic.

use std::{
    ops::{Deref, DerefMut},
    sync::{Arc, Mutex},
};

/// Most buffers a pool keeps; further released buffers are freed.
const MAX_POOLED: usize = 32;

/// A pool of reusable `Vec<T>` allocations.
#[derive(Debug)]
pub struct BufferPool<T> {
    free: Mutex<Vec<Vec<T>>>,
    capacity: usize,
}

impl<T> BufferPool<T> {
    /// Creates an empty pool whose fresh buffers start with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        BufferPool {
            free: Mutex::new(Vec::new()),
            capacity,
        }
    }

    /// Takes a cleared buffer from the pool, or allocates one.
    pub fn acquire(&self) -> PooledVec<'_, T> {
        let items = self
            .free
            .lock()
            .ok()
            .and_then(|mut free| free.pop())
            .unwrap_or_else(|| Vec::with_capacity(self.capacity));

        PooledVec { pool: self, items }
    }

    /// Number of buffers currently waiting in the pool.
    pub fn pooled(&self) -> usize {
        self.free.lock().map(|free| free.len()).unwrap_or(0)
    }

    fn release(&self, mut items: Vec<T>) {
        items.clear();
        if let Ok(mut free) = self.free.lock() {
            if free.len() < MAX_POOLED {
                free.push(items);
            }
        }
    }
}

/// A scratch list borrowed from a [`BufferPool`].
///
/// Dereferences to `Vec<T>`. The storage goes back to the pool on drop.
pub struct PooledVec<'a, T> {
    pool: &'a BufferPool<T>,
    items: Vec<T>,
}

impl<T: Clone> PooledVec<'_, T> {
    /// Copies the contents into an exact-size shared slice and releases the buffer.
    #[must_use]
    pub fn to_immutable(self) -> Arc<[T]> {
        Arc::from(self.items.as_slice())
    }

    /// Copies the contents into a new `Vec` and releases the buffer.
    #[must_use]
    pub fn to_vec(self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Deref for PooledVec<'_, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.items
    }
}

impl<T> DerefMut for PooledVec<'_, T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

impl<T> Drop for PooledVec<'_, T> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.items));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn converted_buffer_is_returned() {
        let pool = BufferPool::new(4);
        assert_eq!(pool.pooled(), 0);

        let mut scratch = pool.acquire();
        scratch.extend([1, 2, 3]);
        let frozen = scratch.to_immutable();

        assert_eq!(&*frozen, &[1, 2, 3]);
        assert_eq!(pool.pooled(), 1);

        let reused = pool.acquire();
        assert!(reused.is_empty());
        assert!(reused.capacity() >= 3);
        assert_eq!(pool.pooled(), 0);
    }

    #[test]
    fn empty_buffer_is_returned() {
        let pool: BufferPool<u32> = BufferPool::new(4);
        {
            let scratch = pool.acquire();
            assert_eq!(scratch.to_vec(), Vec::<u32>::new());
        }
        assert_eq!(pool.pooled(), 1);
    }

    #[test]
    fn buffer_is_returned_on_panic() {
        let pool: BufferPool<String> = BufferPool::new(4);

        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut scratch = pool.acquire();
            scratch.push("partial".to_string());
            panic!("emission failed");
        }));

        assert!(result.is_err());
        assert_eq!(pool.pooled(), 1);
        assert!(pool.acquire().is_empty());
    }

    #[test]
    fn pool_is_bounded() {
        let pool: BufferPool<u8> = BufferPool::new(1);
        let buffers: Vec<_> = (0..MAX_POOLED + 5).map(|_| pool.acquire()).collect();
        drop(buffers);
        assert_eq!(pool.pooled(), MAX_POOLED);
    }
}
