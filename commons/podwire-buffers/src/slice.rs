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
use crate::{
    reader::{DidntRead, HasReader, Reader},
    writer::{DidntWrite, HasWriter, Writer},
};
use core::{mem, num::NonZeroUsize};

// Writer
impl HasWriter for &mut [u8] {
    type Writer = Self;

    fn writer(self) -> Self::Writer {
        self
    }
}

impl<'s> Writer for &'s mut [u8] {
    fn write(&mut self, bytes: &[u8]) -> Result<NonZeroUsize, DidntWrite> {
        let len = NonZeroUsize::new(bytes.len().min(self.len())).ok_or(DidntWrite)?;
        let (head, tail) = mem::take(self).split_at_mut(len.get());
        head.copy_from_slice(&bytes[..len.get()]);
        *self = tail;
        Ok(len)
    }

    fn write_exact(&mut self, bytes: &[u8]) -> Result<(), DidntWrite> {
        let len = bytes.len();
        if self.len() < len {
            return Err(DidntWrite);
        }
        let (head, tail) = mem::take(self).split_at_mut(len);
        head.copy_from_slice(bytes);
        *self = tail;
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.len()
    }

    fn with_slot<F>(&mut self, len: usize, f: F) -> Result<NonZeroUsize, DidntWrite>
    where
        F: FnOnce(&mut [u8]) -> usize,
    {
        if len > self.len() {
            return Err(DidntWrite);
        }
        let written = f(&mut self[..len]);
        if written > len {
            return Err(DidntWrite);
        }
        let (_, tail) = mem::take(self).split_at_mut(written);
        *self = tail;
        NonZeroUsize::new(written).ok_or(DidntWrite)
    }
}

// Reader
impl<'a> HasReader for &'a [u8] {
    type Reader = Self;

    fn reader(self) -> Self::Reader {
        self
    }
}

impl Reader for &[u8] {
    fn read(&mut self, into: &mut [u8]) -> Result<NonZeroUsize, DidntRead> {
        let len = self.len().min(into.len());
        into[..len].copy_from_slice(&self[..len]);
        *self = &self[len..];
        NonZeroUsize::new(len).ok_or(DidntRead)
    }

    fn read_exact(&mut self, into: &mut [u8]) -> Result<(), DidntRead> {
        let len = into.len();
        if self.len() < len {
            return Err(DidntRead);
        }
        into.copy_from_slice(&self[..len]);
        *self = &self[len..];
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, DidntRead> {
        let (&ret, rest) = self.split_first().ok_or(DidntRead)?;
        *self = rest;
        Ok(ret)
    }

    fn remaining(&self) -> usize {
        self.len()
    }

    fn can_read(&self) -> bool {
        !self.is_empty()
    }
}
