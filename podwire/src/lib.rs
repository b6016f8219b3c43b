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
//! Presence-tracked [`Pod`] messages and their length-delimited binary encoding.
//!
//! ```
//! let mut pod = podwire::Pod::new();
//! pod.set_uid("8c1e");
//! pod.set_name("frontend");
//! pod.set_namespace("default");
//!
//! let bytes = podwire::encode(&pod).unwrap();
//! assert_eq!(podwire::encoded_size(&pod), bytes.len());
//! assert_eq!(podwire::decode(&bytes).unwrap(), pod);
//! ```
//!
//! Encoding and decoding are permissive by default: a message missing required
//! fields is written and read as it is. Use [`PodCodec::encode_checked`] and
//! [`PodCodec::decode_checked`], or set `codec.require_initialized` in the
//! [`Config`], to refuse incomplete messages.
mod codec;

pub use codec::PodCodec;
pub use podwire_config::Config;
pub use podwire_protocol::{
    common::{FieldNumber, Tag, UnknownField, WireType},
    message::{FieldDescriptor, FlatMessage},
    pod::{field, Pod, PodField},
};
pub use podwire_result::{ErrKind, Error, ErrorKind, PError, PResult};
pub use podwire_sync::RecyclingObject;
pub use podwire_util::{init_log_from_env_or, try_init_log_from_env};

/// Number of bytes [`encode`] produces for `pod`.
pub fn encoded_size(pod: &Pod) -> usize {
    PodCodec::default().encoded_size(pod)
}

/// Encodes `pod` with the default configuration.
pub fn encode(pod: &Pod) -> PResult<Vec<u8>> {
    PodCodec::default().encode(pod)
}

/// Decodes a [`Pod`] with the default configuration.
pub fn decode(bytes: &[u8]) -> PResult<Pod> {
    PodCodec::default().decode(bytes)
}

/// Decodes `bytes` and merges the result into `pod`.
///
/// On failure `pod` is left untouched.
pub fn decode_into(bytes: &[u8], pod: &mut Pod) -> PResult<()> {
    PodCodec::default().decode_into(bytes, pod)
}
