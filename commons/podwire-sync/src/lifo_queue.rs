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
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A bounded last-in-first-out queue that never waits for room or for elements.
pub struct LifoQueue<T> {
    capacity: usize,
    buffer: Mutex<Vec<T>>,
}

impl<T> LifoQueue<T> {
    pub fn new(capacity: usize) -> LifoQueue<T> {
        LifoQueue {
            capacity,
            buffer: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the element back when the queue is full.
    pub fn try_push(&self, x: T) -> Option<T> {
        let mut guard = self.lock();
        if guard.len() < self.capacity {
            guard.push(x);
            return None;
        }
        Some(x)
    }

    pub fn try_pull(&self) -> Option<T> {
        self.lock().pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let q = LifoQueue::new(3);
        assert!(q.is_empty());
        assert_eq!(q.try_push(1), None);
        assert_eq!(q.try_push(2), None);
        assert_eq!(q.try_push(3), None);
        assert_eq!(q.try_push(4), Some(4));
        assert_eq!(q.len(), 3);

        assert_eq!(q.try_pull(), Some(3));
        assert_eq!(q.try_pull(), Some(2));
        assert_eq!(q.try_pull(), Some(1));
        assert_eq!(q.try_pull(), None);
    }

    #[test]
    fn lifo_zero_capacity() {
        let q = LifoQueue::new(0);
        assert_eq!(q.try_push("a"), Some("a"));
        assert_eq!(q.try_pull(), None);
        assert_eq!(q.capacity(), 0);
    }
}
