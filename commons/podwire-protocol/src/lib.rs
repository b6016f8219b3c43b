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
//! Message definitions: the [`pod::Pod`] field store, the [`message::FlatMessage`] field-descriptor
//! abstraction it is built on, and the wire-level vocabulary shared with the codec.
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod common;
pub mod message;
pub mod pod;

// Podwire messages use the following conventions for their wire representation.
//
//
// # Varint
//
// An unsigned integer encoded in base-128, least significant group first. The most significant
// bit of every byte tells whether another byte follows. A u64 takes at most 10 bytes.
//
// ```text
//  7 6 5 4 3 2 1 0
// +-+-+-+-+-+-+-+-+
// |1|   bits 0-6  |
// +-+-+-+-+-+-+-+-+
// |0|  bits 7-13  |
// +-+-------------+
// ```
//
//
// # Field record
//
// A message is a plain sequence of field records, terminated by the end of the input.
// The tag carries the field number and the wire type: `(number << 3) | wire_type`.
//
// ```text
//  7 6 5 4 3 2 1 0
// +-+-+-+-+-+-+-+-+
// %      tag      %  -- varint
// +---------------+
// %    length     %  -- varint, only if wire_type == 2
// +---------------+
// ~    [u8]       ~  -- `length` bytes
// +---------------+
// ```
//
// Field numbers are part of the wire contract: once assigned they are never reused.
