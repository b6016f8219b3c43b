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
use podwire_buffers::{reader::*, writer::*};

const BYTES: usize = 18;

macro_rules! run_write {
    ($writer:expr) => {
        println!(">>> Write");
        let mut writer = $writer;

        writer.write_u8(0).unwrap();
        writer.write_u8(1).unwrap();

        let wbs1: [u8; 4] = [2, 3, 4, 5];
        let w = writer.write(&wbs1).unwrap();
        assert_eq!(4, w.get());

        let wbs2: [u8; 4] = [6, 7, 8, 9];
        writer.write_exact(&wbs2).unwrap();

        let wbs3: [u8; 4] = [10, 11, 12, 13];
        writer
            .with_slot(8, |buffer| {
                buffer[..4].copy_from_slice(&wbs3);
                4
            })
            .unwrap();

        let wbs4: [u8; 4] = [14, 15, 16, 17];
        writer.write_exact(&wbs4).unwrap();

        // Empty writes succeed for write_exact but not for write
        writer.write_exact(&[]).unwrap();
        assert!(writer.write(&[]).is_err());
    };
}

macro_rules! run_read {
    ($buffer:expr) => {
        println!(">>> Read");
        let mut reader = $buffer.reader();

        let b = reader.read_u8().unwrap();
        assert_eq!(0, b);
        assert_eq!(BYTES - 1, reader.remaining());
        let b = reader.read_u8().unwrap();
        assert_eq!(1, b);
        assert_eq!(BYTES - 2, reader.remaining());

        let mut rbs: [u8; 4] = [0, 0, 0, 0];
        let r = reader.read(&mut rbs).unwrap();
        assert_eq!(4, r.get());
        assert_eq!(BYTES - 6, reader.remaining());
        assert_eq!([2, 3, 4, 5], rbs);

        reader.read_exact(&mut rbs).unwrap();
        assert_eq!(BYTES - 10, reader.remaining());
        assert_eq!([6, 7, 8, 9], rbs);

        reader.read_exact(&mut rbs).unwrap();
        assert_eq!([10, 11, 12, 13], rbs);

        reader.read_exact(&mut rbs).unwrap();
        assert_eq!([14, 15, 16, 17], rbs);

        assert!(!reader.can_read());
        assert!(reader.read_u8().is_err());
        assert!(reader.read_exact(&mut rbs).is_err());
    };
}

#[test]
fn buffer_vec() {
    println!("Buffer Vec");
    let mut vbuf: Vec<u8> = vec![];
    run_write!(vbuf.writer());
    assert_eq!(BYTES, vbuf.len());
    run_read!(&vbuf);
}

#[test]
fn buffer_slice() {
    println!("Buffer Slice");
    let mut sbuf = [0u8; BYTES];
    run_write!((&mut sbuf[..]).writer());
    run_read!(&sbuf[..]);
}

#[test]
fn buffer_slice_full() {
    let mut sbuf = [0u8; 2];
    let mut writer = (&mut sbuf[..]).writer();
    assert!(writer.write_exact(&[1, 2, 3]).is_err());
    assert_eq!(2, writer.remaining());
    assert_eq!(2, writer.write(&[1, 2, 3]).unwrap().get());
    assert!(!writer.can_write());
    assert!(writer.write_u8(4).is_err());
    assert!(writer.with_slot(1, |_| 1).is_err());
    assert_eq!([1, 2], sbuf);
}

#[test]
fn buffer_vec_rewind() {
    let mut vbuf: Vec<u8> = vec![];
    let mut writer = vbuf.writer();
    writer.write_exact(&[1, 2]).unwrap();
    let mark = writer.mark();
    writer.write_exact(&[u8::MAX; 4]).unwrap();
    assert!(writer.rewind(mark));
    writer.write_u8(3).unwrap();
    assert_eq!(vec![1, 2, 3], vbuf);
}

#[test]
fn buffer_vec_slot_overflow() {
    let mut vbuf: Vec<u8> = vec![7];
    let mut writer = vbuf.writer();
    assert!(writer.with_slot(2, |_| 3).is_err());
    assert!(writer.with_slot(2, |_| 0).is_err());
    assert_eq!(vec![7], vbuf);
}
