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
use super::Tag;
use alloc::vec::Vec;

/// # Unknown fields
///
/// A field record whose number is not part of the message schema, or whose wire type does not
/// match the one the schema expects, is not interpreted. Its bytes are kept verbatim so that
/// re-encoding the message forwards them untouched to the next reader, which in turn may be
/// able to understand them.
///
/// `record` holds the whole record as read from the wire: the tag varint immediately followed
/// by the payload (including its length prefix, if any).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownField {
    tag: Tag,
    record: Vec<u8>,
}

impl UnknownField {
    pub fn new(tag: Tag, record: Vec<u8>) -> Self {
        Self { tag, record }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn record(&self) -> &[u8] {
        &self.record
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    #[cfg(feature = "test")]
    pub fn rand() -> Self {
        use super::WireType;
        use rand::Rng;

        let mut rng = rand::thread_rng();
        // Field numbers below 16 keep the tag on a single byte.
        let number = rng.gen_range(4..16);
        if rng.gen_bool(0.5) {
            let tag = Tag::new(number, WireType::Varint);
            let record = alloc::vec![tag.to_u64() as u8, rng.gen_range(0..0x80)];
            Self::new(tag, record)
        } else {
            let tag = Tag::new(number, WireType::LengthDelimited);
            let len = rng.gen_range(0..0x80);
            let mut record = Vec::with_capacity(2 + len);
            record.push(tag.to_u64() as u8);
            record.push(len as u8);
            record.extend((0..len).map(|_| rng.gen::<u8>()));
            Self::new(tag, record)
        }
    }
}
