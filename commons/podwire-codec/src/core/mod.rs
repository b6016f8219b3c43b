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
pub(crate) mod tag;
pub(crate) mod vle;

use crate::{LCodec, Proto2, RCodec, WCodec};
use alloc::vec::Vec;
use podwire_buffers::{
    reader::{DidntRead, Reader},
    writer::{DidntWrite, Writer},
};

// &[u8] / Vec<u8>
impl LCodec<&[u8]> for Proto2 {
    fn w_len(self, x: &[u8]) -> usize {
        self.w_len(x.len()) + x.len()
    }
}

impl<W> WCodec<&[u8], &mut W> for Proto2
where
    W: Writer,
{
    type Output = Result<(), DidntWrite>;

    fn write(self, writer: &mut W, x: &[u8]) -> Self::Output {
        self.write(&mut *writer, x.len())?;
        writer.write_exact(x)
    }
}

impl<R> RCodec<Vec<u8>, &mut R> for Proto2
where
    R: Reader,
{
    type Error = DidntRead;

    fn read(self, reader: &mut R) -> Result<Vec<u8>, Self::Error> {
        let len: usize = self.read(&mut *reader)?;
        // Check before allocating: the length prefix comes from the wire.
        if len > reader.remaining() {
            return Err(DidntRead);
        }
        let mut buff = alloc::vec![0u8; len];
        reader.read_exact(&mut buff[..])?;
        Ok(buff)
    }
}
