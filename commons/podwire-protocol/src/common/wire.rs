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
use core::{convert::TryFrom, fmt};

pub type FieldNumber = u32;

/// The encoding of a field record payload, carried in the low 3 bits of its tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    pub const BITS: u8 = 3;
    pub const MASK: u64 = !(u64::MAX << Self::BITS);
}

impl TryFrom<u8> for WireType {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::Fixed32),
            unknown => Err(unknown),
        }
    }
}

/// The key of a field record: a field number and the wire type of its payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub number: FieldNumber,
    pub wire_type: WireType,
}

impl Tag {
    pub const MIN_NUMBER: FieldNumber = 1;
    pub const MAX_NUMBER: FieldNumber = (1 << 29) - 1;

    pub const fn new(number: FieldNumber, wire_type: WireType) -> Self {
        Self { number, wire_type }
    }

    pub const fn to_u64(self) -> u64 {
        ((self.number as u64) << WireType::BITS) | self.wire_type as u64
    }

    /// Splits a raw tag. Returns `None` for field number 0, numbers beyond
    /// [`Tag::MAX_NUMBER`] and the reserved wire types 6 and 7.
    pub fn from_u64(raw: u64) -> Option<Self> {
        let wire_type = WireType::try_from((raw & WireType::MASK) as u8).ok()?;
        let number = raw >> WireType::BITS;
        if number < Self::MIN_NUMBER as u64 || number > Self::MAX_NUMBER as u64 {
            return None;
        }
        Some(Self {
            number: number as FieldNumber,
            wire_type,
        })
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.number, self.wire_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_split() {
        let tag = Tag::new(3, WireType::LengthDelimited);
        assert_eq!(tag.to_u64(), 0x1a);
        assert_eq!(Tag::from_u64(0x1a), Some(tag));

        let tag = Tag::new(Tag::MAX_NUMBER, WireType::Fixed32);
        assert_eq!(Tag::from_u64(tag.to_u64()), Some(tag));
    }

    #[test]
    fn tag_reject() {
        // Field number 0
        assert_eq!(Tag::from_u64(0x02), None);
        // Reserved wire types
        assert_eq!(Tag::from_u64((1 << 3) | 6), None);
        assert_eq!(Tag::from_u64((1 << 3) | 7), None);
        // Beyond the largest field number
        assert_eq!(Tag::from_u64(((Tag::MAX_NUMBER as u64) + 1) << 3), None);
    }
}
