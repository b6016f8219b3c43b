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

//! ⚠️ WARNING ⚠️
//!
//! This crate is intended for podwire's internal use.
//!
//! Serialization of podwire messages into their length-delimited wire format, and back.
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod common;
mod core;
mod message;

pub use crate::core::tag::TagRecord;

pub trait WCodec<Message, Buffer> {
    type Output;
    fn write(self, buffer: Buffer, message: Message) -> Self::Output;
}

pub trait RCodec<Message, Buffer> {
    type Error;
    fn read(self, buffer: Buffer) -> Result<Message, Self::Error>;
}

// Calculate the length of the value once serialized
pub trait LCodec<Message> {
    fn w_len(self, message: Message) -> usize;
}

/// Nested groups deeper than this are rejected while skipping unknown fields.
pub const MAX_GROUP_DEPTH: usize = 100;

#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct Proto2;

impl Proto2 {
    pub const fn new() -> Self {
        Self
    }
}

/// Reads the body of a field record whose tag has already been consumed.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct Proto2Header {
    pub header: TagRecord,
    pub codec: Proto2,
}

impl Proto2Header {
    pub const fn new(header: TagRecord) -> Self {
        Self {
            header,
            codec: Proto2::new(),
        }
    }
}
