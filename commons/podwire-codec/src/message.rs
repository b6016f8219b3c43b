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
use crate::{LCodec, Proto2, Proto2Header, RCodec, WCodec};
use alloc::vec::Vec;
use podwire_buffers::{
    reader::{DidntRead, Reader},
    writer::{DidntWrite, Writer},
};
use podwire_protocol::{
    common::{UnknownField, WireType},
    message::FlatMessage,
    pod::Pod,
};

fn w_len_message<M: FlatMessage>(codec: Proto2, x: &M) -> usize {
    let fields: usize = M::FIELDS
        .iter()
        .filter_map(|f| f.value(x).map(|v| codec.w_len(f.tag()) + codec.w_len(v)))
        .sum();
    let unknown: usize = x.unknown_fields().iter().map(|u| codec.w_len(u)).sum();
    fields + unknown
}

fn write_message<M: FlatMessage, W: Writer>(
    codec: Proto2,
    writer: &mut W,
    x: &M,
) -> Result<(), DidntWrite> {
    for f in M::FIELDS {
        if let Some(v) = f.value(x) {
            codec.write(&mut *writer, f.tag())?;
            codec.write(&mut *writer, v)?;
        }
    }
    for u in x.unknown_fields() {
        codec.write(&mut *writer, u)?;
    }
    Ok(())
}

fn read_message<M: FlatMessage + Default, R: Reader>(
    codec: Proto2,
    reader: &mut R,
) -> Result<M, DidntRead> {
    let mut msg = M::default();
    while reader.can_read() {
        let header = Proto2Header::new(codec.read(&mut *reader)?);
        let tag = header.header.tag;
        match M::field(tag.number) {
            Some(f) if tag.wire_type == WireType::LengthDelimited => {
                let value: Vec<u8> = codec.read(&mut *reader)?;
                f.set(&mut msg, value);
            }
            _ => {
                let u: UnknownField = header.read(&mut *reader)?;
                msg.unknown_fields_mut().push(u);
            }
        }
    }
    Ok(msg)
}

// Pod
impl LCodec<&Pod> for Proto2 {
    fn w_len(self, x: &Pod) -> usize {
        w_len_message(self, x)
    }
}

impl<W> WCodec<&Pod, &mut W> for Proto2
where
    W: Writer,
{
    type Output = Result<(), DidntWrite>;

    fn write(self, writer: &mut W, x: &Pod) -> Self::Output {
        write_message(self, writer, x)
    }
}

impl<R> RCodec<Pod, &mut R> for Proto2
where
    R: Reader,
{
    type Error = DidntRead;

    fn read(self, reader: &mut R) -> Result<Pod, Self::Error> {
        read_message(self, reader)
    }
}
