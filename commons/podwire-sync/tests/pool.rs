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
use std::{sync::Arc, thread};

use podwire_sync::*;

#[test]
fn pool_recycles_on_drop() {
    let pool = RecyclingObjectPool::new(2, || Vec::<u8>::with_capacity(64));
    assert_eq!(pool.available(), 2);

    let mut a = pool.take();
    a.extend_from_slice(b"hello");
    assert_eq!(pool.available(), 1);
    drop(a);
    assert_eq!(pool.available(), 2);

    // The returned buffer keeps its content and capacity until reused
    let a = pool.try_take().unwrap();
    let b = pool.try_take().unwrap();
    assert!(pool.try_take().is_none());
    assert!(a.as_slice() == b"hello" || b.as_slice() == b"hello");
}

#[test]
fn pool_take_never_blocks() {
    let pool = RecyclingObjectPool::new(1, Vec::<u8>::new);
    let a = pool.take();
    let b = pool.take();
    assert_eq!(pool.available(), 0);

    // Both go back, but only one fits
    drop(a);
    drop(b);
    assert_eq!(pool.available(), 1);
}

#[test]
fn pool_alloc_and_into_inner_detach() {
    let pool = RecyclingObjectPool::new(1, || vec![1u8, 2, 3]);

    drop(pool.alloc());
    assert_eq!(pool.available(), 1);

    let v = pool.take().into_inner();
    assert_eq!(v, [1, 2, 3]);
    assert_eq!(pool.available(), 0);

    let detached: RecyclingObject<Vec<u8>> = vec![9].into();
    assert_eq!(&detached[..], &[9]);
}

#[test]
fn pool_outlived_by_objects() {
    let pool = RecyclingObjectPool::new(1, Vec::<u8>::new);
    let a = pool.take();
    drop(pool);
    assert!(a.is_empty());
    drop(a);
}

#[test]
fn pool_shared_across_threads() {
    let pool = Arc::new(RecyclingObjectPool::new(4, || Vec::<u8>::with_capacity(16)));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let pool = pool.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let mut b = pool.take();
                    b.clear();
                    b.push(i);
                    assert_eq!(b.len(), 1);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert!(pool.available() <= 4);
}

#[test]
fn pool_reset_on_return() {
    let pool = RecyclingObjectPool::with_reset(
        1,
        || Vec::<u8>::with_capacity(64),
        |b: &mut Vec<u8>| {
            b.clear();
            b.shrink_to(64);
        },
    );

    let mut a = pool.take();
    a.resize(1 << 20, 0xaa);
    drop(a);
    assert_eq!(pool.available(), 1);

    let a = pool.take();
    assert!(a.is_empty());
    assert!(a.capacity() < 1 << 20);

    // Detached objects skip the reset
    let mut b = pool.take();
    b.push(1);
    assert_eq!(b.into_inner(), [1]);

    // Explicit recycling goes through the reset as well
    let mut c = pool.alloc();
    c.push(1);
    drop(c);
    drop(a);
    let mut d = pool.take();
    d.push(2);
    d.recycle();
    assert!(pool.take().is_empty());
}
