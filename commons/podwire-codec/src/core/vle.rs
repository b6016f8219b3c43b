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
use crate::{LCodec, Proto2, RCodec, WCodec};
use podwire_buffers::{
    reader::{DidntRead, Reader},
    writer::{DidntWrite, Writer},
};

pub(crate) const VLE_LEN: usize = 10;

/// Decodes a varint pulling one byte at a time from `next`.
/// The 10th byte may only carry the most significant bit of a u64.
pub(crate) fn read_vle<F>(mut next: F) -> Result<u64, DidntRead>
where
    F: FnMut() -> Result<u8, DidntRead>,
{
    let mut v: u64 = 0;
    for i in 0..VLE_LEN {
        let b = next()?;
        if i == VLE_LEN - 1 && b > 1 {
            return Err(DidntRead);
        }
        v |= ((b & 0x7f) as u64) << (7 * i);
        if b & 0x80 == 0 {
            return Ok(v);
        }
    }
    Err(DidntRead)
}

// u64
impl LCodec<u64> for Proto2 {
    fn w_len(self, x: u64) -> usize {
        let bits = u64::BITS - (x | 1).leading_zeros();
        ((bits + 6) / 7) as usize
    }
}

impl<W> WCodec<u64, &mut W> for Proto2
where
    W: Writer,
{
    type Output = Result<(), DidntWrite>;

    fn write(self, writer: &mut W, mut x: u64) -> Self::Output {
        writer.with_slot(self.w_len(x), move |buffer| {
            let mut len = 0;
            let mut b = x as u8;
            while x > 0x7f {
                buffer[len] = b | 0x80;
                len += 1;
                x >>= 7;
                b = x as u8;
            }
            buffer[len] = b;
            len + 1
        })?;
        Ok(())
    }
}

impl<R> RCodec<u64, &mut R> for Proto2
where
    R: Reader,
{
    type Error = DidntRead;

    fn read(self, reader: &mut R) -> Result<u64, Self::Error> {
        read_vle(|| reader.read_u8())
    }
}

// usize
impl LCodec<usize> for Proto2 {
    fn w_len(self, x: usize) -> usize {
        self.w_len(x as u64)
    }
}

impl<W> WCodec<usize, &mut W> for Proto2
where
    W: Writer,
{
    type Output = Result<(), DidntWrite>;

    fn write(self, writer: &mut W, x: usize) -> Self::Output {
        let x = u64::try_from(x).map_err(|_| DidntWrite)?;
        self.write(writer, x)
    }
}

impl<R> RCodec<usize, &mut R> for Proto2
where
    R: Reader,
{
    type Error = DidntRead;

    fn read(self, reader: &mut R) -> Result<usize, Self::Error> {
        let x: u64 = self.read(reader)?;
        usize::try_from(x).map_err(|_| DidntRead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use podwire_buffers::{reader::HasReader, writer::HasWriter};

    #[test]
    fn vle_len() {
        let codec = Proto2::new();
        for (x, len) in [
            (0u64, 1),
            (0x7f, 1),
            (0x80, 2),
            (0x3fff, 2),
            (0x4000, 3),
            (u32::MAX as u64, 5),
            (u64::MAX >> 1, 9),
            (u64::MAX, 10),
        ] {
            let mut buff = Vec::new();
            codec.write(&mut buff.writer(), x).unwrap();
            assert_eq!(buff.len(), len, "{x:#x}");
            assert_eq!(codec.w_len(x), len, "{x:#x}");

            let mut reader = buff.reader();
            let y: u64 = codec.read(&mut reader).unwrap();
            assert_eq!(x, y);
            assert!(!reader.can_read());
        }
    }

    #[test]
    fn vle_known_bytes() {
        let codec = Proto2::new();
        let mut buff = Vec::new();
        codec.write(&mut buff.writer(), 300u64).unwrap();
        assert_eq!(buff, [0xac, 0x02]);
    }

    #[test]
    fn vle_reject() {
        let codec = Proto2::new();

        // Truncated
        let mut reader: &[u8] = &[0x80];
        assert!(RCodec::<u64, _>::read(codec, &mut reader).is_err());

        // Empty
        let mut reader: &[u8] = &[];
        assert!(RCodec::<u64, _>::read(codec, &mut reader).is_err());

        // Overflowing the 10th byte
        let mut reader: &[u8] = &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02];
        assert!(RCodec::<u64, _>::read(codec, &mut reader).is_err());

        // Longer than 10 bytes
        let mut reader: &[u8] = &[0x80; 11];
        assert!(RCodec::<u64, _>::read(codec, &mut reader).is_err());
    }

    #[test]
    fn vle_slot_exact() {
        // A single-byte varint fits the last byte of a slice.
        let codec = Proto2::new();
        let mut buff = [0u8; 1];
        let mut writer = &mut buff[..];
        codec.write(&mut writer, 1u64).unwrap();
        assert!(codec.write(&mut writer, 1u64).is_err());
        assert_eq!(buff, [1]);
    }
}
