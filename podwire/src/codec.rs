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
use std::io::{Read, Write};

use podwire_buffers::{
    reader::{HasReader, Reader},
    writer::{BacktrackableWriter, HasWriter},
};
use podwire_codec::{LCodec, Proto2, RCodec, WCodec};
use podwire_config::Config;
use podwire_protocol::{message::FlatMessage, pod::Pod};
use podwire_result::{bail, perror, ErrorKind, PResult};
use podwire_sync::{RecyclingObject, RecyclingObjectPool};

type BufferPool = RecyclingObjectPool<Vec<u8>, Box<dyn Fn() -> Vec<u8> + Send + Sync>>;

/// Encodes and decodes [`Pod`] messages according to a [`Config`].
///
/// A `PodCodec` holds no per-call state and can be shared between threads.
#[derive(Debug)]
pub struct PodCodec {
    config: Config,
    pool: Option<BufferPool>,
    codec: Proto2,
}

impl Default for PodCodec {
    fn default() -> Self {
        Self {
            config: Config::default(),
            pool: None,
            codec: Proto2::new(),
        }
    }
}

impl PodCodec {
    pub fn new(config: Config) -> PResult<Self> {
        config.validate()?;
        let pool = if config.pool.enabled {
            let capacity = config.pool.buffer_capacity;
            let f: Box<dyn Fn() -> Vec<u8> + Send + Sync> =
                Box::new(move || Vec::with_capacity(capacity));
            tracing::debug!(
                "Creating a pool of {} buffers of {} bytes",
                config.pool.size,
                capacity
            );
            // Buffers grown by a large message go back to the configured capacity.
            let reset = move |buff: &mut Vec<u8>| {
                buff.clear();
                buff.shrink_to(capacity);
            };
            Some(RecyclingObjectPool::with_reset(config.pool.size, f, reset))
        } else {
            None
        };
        Ok(Self {
            config,
            pool,
            codec: Proto2::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn encoded_size(&self, pod: &Pod) -> usize {
        self.codec.w_len(pod)
    }

    /// Encodes `pod`. Missing required fields are refused only when
    /// `codec.require_initialized` is set.
    pub fn encode(&self, pod: &Pod) -> PResult<Vec<u8>> {
        let mut buff = Vec::new();
        self.encode_inner(pod, self.config.codec.require_initialized, &mut buff)?;
        Ok(buff)
    }

    /// Encodes `pod`, refusing it if a required field is missing.
    pub fn encode_checked(&self, pod: &Pod) -> PResult<Vec<u8>> {
        let mut buff = Vec::new();
        self.encode_inner(pod, true, &mut buff)?;
        Ok(buff)
    }

    /// Appends the encoding of `pod` to `buff`.
    ///
    /// On failure `buff` is restored to its previous length.
    pub fn encode_into_vec(&self, pod: &Pod, buff: &mut Vec<u8>) -> PResult<usize> {
        self.encode_inner(pod, self.config.codec.require_initialized, buff)
    }

    /// Encodes `pod` into a buffer taken from the pool, if one is configured.
    ///
    /// The buffer goes back to the pool once dropped.
    pub fn encode_pooled(&self, pod: &Pod) -> PResult<RecyclingObject<Vec<u8>>> {
        let mut buff = self.buffer(self.encoded_size(pod));
        self.encode_inner(pod, self.config.codec.require_initialized, &mut buff)?;
        Ok(buff)
    }

    /// Writes the encoding of `pod` to `writer` and returns the number of bytes written.
    pub fn write_to<W: Write>(&self, pod: &Pod, mut writer: W) -> PResult<usize> {
        let buff = self.encode_pooled(pod)?;
        writer
            .write_all(buff.as_slice())
            .map_err(|e| perror!((ErrorKind::Io) e => "Failed to write {} bytes", buff.len()))?;
        Ok(buff.len())
    }

    /// Reads `reader` to its end and decodes the bytes as a single [`Pod`].
    pub fn read_from<R: Read>(&self, reader: R) -> PResult<Pod> {
        let max = self.config.codec.max_message_size;
        let mut buff = self.buffer(0);
        // One byte more than allowed tells an oversized stream apart.
        let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
        reader
            .take(limit)
            .read_to_end(&mut buff)
            .map_err(|e| perror!((ErrorKind::Io) e => "Failed to read a Pod"))?;
        self.decode(buff.as_slice())
    }

    /// Decodes a [`Pod`]. Missing required fields are refused only when
    /// `codec.require_initialized` is set.
    pub fn decode(&self, bytes: &[u8]) -> PResult<Pod> {
        self.decode_inner(bytes, self.config.codec.require_initialized)
    }

    /// Decodes a [`Pod`], refusing it if a required field is missing.
    pub fn decode_checked(&self, bytes: &[u8]) -> PResult<Pod> {
        self.decode_inner(bytes, true)
    }

    /// Decodes `bytes` and merges the result into `pod`: fields present in
    /// `bytes` overwrite those of `pod`, unknown fields are appended.
    ///
    /// On failure `pod` is left untouched.
    pub fn decode_into(&self, bytes: &[u8], pod: &mut Pod) -> PResult<()> {
        let decoded = self.decode_inner(bytes, false)?;
        if self.config.codec.require_initialized {
            let missing: Vec<&str> = Pod::FIELDS
                .iter()
                .filter(|f| !f.has(pod) && !f.has(&decoded))
                .map(|f| f.name)
                .collect();
            if !missing.is_empty() {
                bail!((ErrorKind::Uninitialized) "Pod is missing required fields: {}", missing.join(", "));
            }
        }
        pod.merge(decoded);
        Ok(())
    }

    fn buffer(&self, capacity: usize) -> RecyclingObject<Vec<u8>> {
        match self.pool.as_ref() {
            Some(pool) => pool.take(),
            None => Vec::with_capacity(capacity).into(),
        }
    }

    fn check_size(&self, len: usize) -> PResult<()> {
        let max = self.config.codec.max_message_size;
        if len > max {
            bail!((ErrorKind::Capacity) "Pod of {} bytes exceeds the maximum message size of {} bytes", len, max);
        }
        Ok(())
    }

    fn check_initialized(pod: &Pod) -> PResult<()> {
        if !pod.is_initialized() {
            bail!((ErrorKind::Uninitialized) "Pod is missing required fields: {}", pod.missing_fields().join(", "));
        }
        Ok(())
    }

    fn encode_inner(&self, pod: &Pod, strict: bool, buff: &mut Vec<u8>) -> PResult<usize> {
        if strict {
            Self::check_initialized(pod)?;
        }
        let len = self.encoded_size(pod);
        self.check_size(len)?;

        buff.reserve(len);
        let mut writer = buff.writer();
        let mark = writer.mark();
        if self.codec.write(&mut writer, pod).is_err() {
            writer.rewind(mark);
            bail!((ErrorKind::Capacity) "Encoding error: buffer refused a Pod of {} bytes", len);
        }
        tracing::trace!("Encoded a Pod of {} bytes", len);
        Ok(len)
    }

    fn decode_inner(&self, bytes: &[u8], strict: bool) -> PResult<Pod> {
        self.check_size(bytes.len())?;

        let mut reader = bytes.reader();
        let pod: Pod = match self.codec.read(&mut reader) {
            Ok(pod) => pod,
            Err(_) => {
                tracing::debug!("Invalid Pod: decoding error on {} bytes", bytes.len());
                bail!((ErrorKind::Malformed) "Invalid Pod: decoding error on {} bytes", bytes.len());
            }
        };
        debug_assert!(!reader.can_read());

        if strict {
            Self::check_initialized(&pod)?;
        }
        if !pod.unknown_fields().is_empty() {
            tracing::trace!("Decoded a Pod with {} unknown fields", pod.unknown_fields().len());
        }
        Ok(pod)
    }
}
