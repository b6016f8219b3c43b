//
// Copyright (c) 2024 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   ZettaScale Zenoh Team, <zenoh@zettascale.tech>
//
use std::{
    fmt,
    ops::{Deref, DerefMut, Drop},
    sync::{Arc, Weak},
};

use super::LifoQueue;

type Reset<T> = Box<dyn Fn(&mut T) + Send + Sync>;

struct Shared<T> {
    queue: LifoQueue<T>,
    reset: Option<Reset<T>>,
}

impl<T> Shared<T> {
    fn recycle(&self, mut obj: T) {
        if let Some(reset) = self.reset.as_ref() {
            (reset)(&mut obj);
        }
        // A full pool drops the object.
        let _ = self.queue.try_push(obj);
    }
}

/// Provides a pool of pre-allocated objects that are automatically reinserted into
/// the pool when dropped.
///
/// The pool never blocks: [`RecyclingObjectPool::take`] allocates a fresh object
/// when the pool is empty, and objects returning to a full pool are dropped.
pub struct RecyclingObjectPool<T, F>
where
    F: Fn() -> T,
{
    inner: Arc<Shared<T>>,
    f: F,
}

impl<T, F: Fn() -> T> RecyclingObjectPool<T, F> {
    pub fn new(num: usize, f: F) -> RecyclingObjectPool<T, F> {
        Self::build(num, f, None)
    }

    /// Like [`RecyclingObjectPool::new`], with `reset` applied to every object on
    /// its way back into the pool.
    pub fn with_reset<R>(num: usize, f: F, reset: R) -> RecyclingObjectPool<T, F>
    where
        R: Fn(&mut T) + Send + Sync + 'static,
    {
        Self::build(num, f, Some(Box::new(reset)))
    }

    fn build(num: usize, f: F, reset: Option<Reset<T>>) -> RecyclingObjectPool<T, F> {
        let queue = LifoQueue::new(num);
        for _ in 0..num {
            queue.try_push((f)());
        }
        RecyclingObjectPool {
            inner: Arc::new(Shared { queue, reset }),
            f,
        }
    }

    /// Allocates an object that is not returned to the pool when dropped.
    pub fn alloc(&self) -> RecyclingObject<T> {
        RecyclingObject::new((self.f)(), Weak::new())
    }

    pub fn try_take(&self) -> Option<RecyclingObject<T>> {
        self.inner
            .queue
            .try_pull()
            .map(|obj| RecyclingObject::new(obj, Arc::downgrade(&self.inner)))
    }

    pub fn take(&self) -> RecyclingObject<T> {
        match self.inner.queue.try_pull() {
            Some(obj) => RecyclingObject::new(obj, Arc::downgrade(&self.inner)),
            None => {
                tracing::trace!("Object pool is empty: allocating");
                RecyclingObject::new((self.f)(), Arc::downgrade(&self.inner))
            }
        }
    }

    /// Number of objects currently idle in the pool.
    pub fn available(&self) -> usize {
        self.inner.queue.len()
    }
}

impl<T, F: Fn() -> T> fmt::Debug for RecyclingObjectPool<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclingObjectPool")
            .field("capacity", &self.inner.queue.capacity())
            .field("available", &self.inner.queue.len())
            .finish()
    }
}

pub struct RecyclingObject<T> {
    pool: Weak<Shared<T>>,
    object: Option<T>,
}

impl<T> RecyclingObject<T> {
    fn new(obj: T, pool: Weak<Shared<T>>) -> RecyclingObject<T> {
        RecyclingObject {
            pool,
            object: Some(obj),
        }
    }

    pub fn recycle(mut self) {
        if let Some(pool) = self.pool.upgrade() {
            if let Some(obj) = self.object.take() {
                pool.recycle(obj);
            }
        }
    }

    /// Detaches the object from its pool.
    pub fn into_inner(mut self) -> T {
        self.pool = Weak::new();
        self.object.take().unwrap()
    }
}

impl<T: PartialEq> Eq for RecyclingObject<T> {}

impl<T: PartialEq> PartialEq for RecyclingObject<T> {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl<T> Deref for RecyclingObject<T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &Self::Target {
        self.object.as_ref().unwrap()
    }
}

impl<T> DerefMut for RecyclingObject<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.object.as_mut().unwrap()
    }
}

impl<T> From<T> for RecyclingObject<T> {
    fn from(obj: T) -> RecyclingObject<T> {
        RecyclingObject::new(obj, Weak::new())
    }
}

impl<T> Drop for RecyclingObject<T> {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.upgrade() {
            if let Some(obj) = self.object.take() {
                pool.recycle(obj);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RecyclingObject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("").field("inner", &self.object).finish()
    }
}

// Buffer impl
impl AsRef<[u8]> for RecyclingObject<Vec<u8>> {
    fn as_ref(&self) -> &[u8] {
        self.deref()
    }
}

impl AsMut<[u8]> for RecyclingObject<Vec<u8>> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.deref_mut()
    }
}
