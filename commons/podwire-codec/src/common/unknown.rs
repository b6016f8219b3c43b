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
use crate::{LCodec, Proto2, Proto2Header, RCodec, WCodec, MAX_GROUP_DEPTH};
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use podwire_buffers::{
    reader::{DidntRead, Reader},
    writer::{DidntWrite, Writer},
};
use podwire_protocol::common::{Tag, UnknownField, WireType};

/// A reader that keeps a copy of every byte it hands out.
pub(crate) struct Recorder<'a, R> {
    reader: &'a mut R,
    record: Vec<u8>,
}

impl<'a, R: Reader> Recorder<'a, R> {
    pub(crate) fn new(reader: &'a mut R, record: Vec<u8>) -> Self {
        Self { reader, record }
    }

    /// Moves `len` bytes from the reader straight into the record.
    pub(crate) fn skip(&mut self, len: usize) -> Result<(), DidntRead> {
        if len > self.reader.remaining() {
            return Err(DidntRead);
        }
        let start = self.record.len();
        self.record.resize(start + len, 0);
        self.reader.read_exact(&mut self.record[start..])
    }

    pub(crate) fn into_record(self) -> Vec<u8> {
        self.record
    }
}

impl<R: Reader> Reader for Recorder<'_, R> {
    fn read(&mut self, into: &mut [u8]) -> Result<NonZeroUsize, DidntRead> {
        let len = self.reader.read(into)?;
        self.record.extend_from_slice(&into[..len.get()]);
        Ok(len)
    }

    fn read_exact(&mut self, into: &mut [u8]) -> Result<(), DidntRead> {
        self.reader.read_exact(into)?;
        self.record.extend_from_slice(into);
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, DidntRead> {
        let b = self.reader.read_u8()?;
        self.record.push(b);
        Ok(b)
    }

    fn remaining(&self) -> usize {
        self.reader.remaining()
    }
}

/// Consumes the payload of a record tagged `tag` without interpreting it.
fn skip<R: Reader>(
    codec: Proto2,
    reader: &mut Recorder<'_, R>,
    tag: Tag,
    depth: usize,
) -> Result<(), DidntRead> {
    match tag.wire_type {
        WireType::Varint => {
            let _: u64 = codec.read(&mut *reader)?;
        }
        WireType::Fixed64 => reader.skip(8)?,
        WireType::Fixed32 => reader.skip(4)?,
        WireType::LengthDelimited => {
            let len: usize = codec.read(&mut *reader)?;
            reader.skip(len)?;
        }
        WireType::StartGroup => {
            if depth >= MAX_GROUP_DEPTH {
                return Err(DidntRead);
            }
            loop {
                let inner: Tag = codec.read(&mut *reader)?;
                if inner.wire_type == WireType::EndGroup {
                    if inner.number != tag.number {
                        return Err(DidntRead);
                    }
                    break;
                }
                skip(codec, reader, inner, depth + 1)?;
            }
        }
        // An end-group is only valid as the terminator of its start-group.
        WireType::EndGroup => return Err(DidntRead),
    }
    Ok(())
}

// UnknownField
impl LCodec<&UnknownField> for Proto2 {
    fn w_len(self, x: &UnknownField) -> usize {
        x.len()
    }
}

impl<W> WCodec<&UnknownField, &mut W> for Proto2
where
    W: Writer,
{
    type Output = Result<(), DidntWrite>;

    fn write(self, writer: &mut W, x: &UnknownField) -> Self::Output {
        writer.write_exact(x.record())
    }
}

impl<R> RCodec<UnknownField, &mut R> for Proto2
where
    R: Reader,
{
    type Error = DidntRead;

    fn read(self, reader: &mut R) -> Result<UnknownField, Self::Error> {
        let codec = Proto2Header::new(self.read(&mut *reader)?);
        codec.read(reader)
    }
}

impl<R> RCodec<UnknownField, &mut R> for Proto2Header
where
    R: Reader,
{
    type Error = DidntRead;

    fn read(self, reader: &mut R) -> Result<UnknownField, Self::Error> {
        let tag = self.header.tag;
        let mut recorder = Recorder::new(reader, self.header.as_slice().to_vec());
        skip(self.codec, &mut recorder, tag, 0)?;
        Ok(UnknownField::new(tag, recorder.into_record()))
    }
}
