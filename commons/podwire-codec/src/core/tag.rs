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
use super::vle::{read_vle, VLE_LEN};
use crate::{LCodec, Proto2, RCodec, WCodec};
use core::fmt;
use podwire_buffers::{
    reader::{DidntRead, Reader},
    writer::{DidntWrite, Writer},
};
use podwire_protocol::common::Tag;

/// A tag together with the exact bytes it was read from.
///
/// Unknown records are forwarded verbatim, so the tag bytes are kept as they appeared on the
/// wire, including any non-minimal encoding.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TagRecord {
    pub tag: Tag,
    raw: [u8; VLE_LEN],
    len: u8,
}

impl TagRecord {
    pub fn as_slice(&self) -> &[u8] {
        &self.raw[..self.len as usize]
    }
}

impl fmt::Debug for TagRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:02x?}", self.tag, self.as_slice())
    }
}

// Tag
impl LCodec<Tag> for Proto2 {
    fn w_len(self, x: Tag) -> usize {
        self.w_len(x.to_u64())
    }
}

impl<W> WCodec<Tag, &mut W> for Proto2
where
    W: Writer,
{
    type Output = Result<(), DidntWrite>;

    fn write(self, writer: &mut W, x: Tag) -> Self::Output {
        self.write(writer, x.to_u64())
    }
}

impl<R> RCodec<Tag, &mut R> for Proto2
where
    R: Reader,
{
    type Error = DidntRead;

    fn read(self, reader: &mut R) -> Result<Tag, Self::Error> {
        let record: TagRecord = self.read(reader)?;
        Ok(record.tag)
    }
}

// TagRecord
impl<R> RCodec<TagRecord, &mut R> for Proto2
where
    R: Reader,
{
    type Error = DidntRead;

    fn read(self, reader: &mut R) -> Result<TagRecord, Self::Error> {
        let mut raw = [0u8; VLE_LEN];
        let mut len = 0;
        let value = read_vle(|| {
            let b = reader.read_u8()?;
            raw[len] = b;
            len += 1;
            Ok(b)
        })?;
        let tag = Tag::from_u64(value).ok_or(DidntRead)?;
        Ok(TagRecord {
            tag,
            raw,
            len: len as u8,
        })
    }
}
