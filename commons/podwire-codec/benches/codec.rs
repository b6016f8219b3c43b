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
#[macro_use]
extern crate criterion;

use criterion::Criterion;
use podwire_buffers::{reader::HasReader, writer::HasWriter};
use podwire_codec::*;
use podwire_protocol::pod::Pod;

fn criterion_benchmark(c: &mut Criterion) {
    // u64 Vec<u8>
    let mut buff = vec![];
    let codec = Proto2::new();
    c.bench_function("u64 Vec<u8>", |b| {
        b.iter(|| {
            buff.clear();
            let mut writer = buff.writer();
            codec.write(&mut writer, u64::MAX).unwrap();
            let mut reader = buff.reader();
            let _: u64 = codec.read(&mut reader).unwrap();
        })
    });

    let mut pod = Pod::new();
    pod.set_uid("2d2a1c6e-5f0b-4a7e-9d1f-3c2b1a0f9e8d");
    pod.set_name("web-frontend-7c9d8b5f4-x2k9q");
    pod.set_namespace("production");

    // Pod Vec<u8> Write
    let mut buff = Vec::with_capacity(codec.w_len(&pod));
    c.bench_function("Pod Vec<u8> Write", |b| {
        b.iter(|| {
            buff.clear();
            let mut writer = buff.writer();
            codec.write(&mut writer, &pod).unwrap();
        })
    });

    // Pod &mut [u8] Write
    let mut buff = vec![0u8; codec.w_len(&pod)];
    c.bench_function("Pod &mut [u8] Write", |b| {
        b.iter(|| {
            let mut writer = &mut buff[..];
            codec.write(&mut writer, &pod).unwrap();
        })
    });

    // Pod Read
    let mut buff = vec![];
    codec.write(&mut buff.writer(), &pod).unwrap();
    c.bench_function("Pod Read", |b| {
        b.iter(|| {
            let mut reader = buff.reader();
            let _: Pod = codec.read(&mut reader).unwrap();
        })
    });

    // Pod Read with unknown fields
    let mut buff = vec![];
    codec.write(&mut buff.writer(), &pod).unwrap();
    for n in 4..16u8 {
        buff.extend_from_slice(&[n << 3, 0x2a]);
    }
    c.bench_function("Pod Read unknown", |b| {
        b.iter(|| {
            let mut reader = buff.reader();
            let _: Pod = codec.read(&mut reader).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
