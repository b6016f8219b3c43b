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
use crate::common::{FieldNumber, Tag, UnknownField, WireType};
use alloc::vec::Vec;
use core::mem;

/// Describes one required bytes field of a [`FlatMessage`]: its wire number, its name and where
/// its value lives inside the message.
///
/// A field is stored as an `Option<Vec<u8>>`: `Some` means the field has been explicitly
/// assigned, even if it holds an empty value.
pub struct FieldDescriptor<M> {
    pub number: FieldNumber,
    pub name: &'static str,
    slot: fn(&M) -> &Option<Vec<u8>>,
    slot_mut: fn(&mut M) -> &mut Option<Vec<u8>>,
}

impl<M> FieldDescriptor<M> {
    pub const fn new(
        number: FieldNumber,
        name: &'static str,
        slot: fn(&M) -> &Option<Vec<u8>>,
        slot_mut: fn(&mut M) -> &mut Option<Vec<u8>>,
    ) -> Self {
        Self {
            number,
            name,
            slot,
            slot_mut,
        }
    }

    pub const fn tag(&self) -> Tag {
        Tag::new(self.number, WireType::LengthDelimited)
    }

    pub fn has(&self, m: &M) -> bool {
        (self.slot)(m).is_some()
    }

    /// Returns the stored value, or an empty slice if the field is not set.
    pub fn get<'a>(&self, m: &'a M) -> &'a [u8] {
        self.value(m).unwrap_or_default()
    }

    pub fn value<'a>(&self, m: &'a M) -> Option<&'a [u8]> {
        (self.slot)(m).as_deref()
    }

    pub fn set(&self, m: &mut M, value: Vec<u8>) {
        *(self.slot_mut)(m) = Some(value);
    }

    pub fn clear(&self, m: &mut M) {
        *(self.slot_mut)(m) = None;
    }

    /// Marks the field as set and returns its value for in-place editing.
    pub fn mutable<'a>(&self, m: &'a mut M) -> &'a mut Vec<u8> {
        (self.slot_mut)(m).get_or_insert_with(Vec::new)
    }

    /// Moves the value out and clears the field. The flag tells whether the field was set.
    pub fn take(&self, m: &mut M) -> (Vec<u8>, bool) {
        match (self.slot_mut)(m).take() {
            Some(v) => (v, true),
            None => (Vec::new(), false),
        }
    }

    /// Sets the field if `value` is `Some`, clears it otherwise.
    pub fn assign(&self, m: &mut M, value: Option<Vec<u8>>) {
        *(self.slot_mut)(m) = value;
    }
}

impl<M> core::fmt::Debug for FieldDescriptor<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("number", &self.number)
            .field("name", &self.name)
            .finish()
    }
}

/// A message made only of required bytes fields, described by a static table of
/// [`FieldDescriptor`]s sorted by field number.
///
/// All the whole-message operations are expressed once over the table, so a new message shape
/// only has to provide its descriptors and its unknown-field storage.
pub trait FlatMessage: Sized + 'static {
    const NAME: &'static str;
    const FIELDS: &'static [FieldDescriptor<Self>];

    fn unknown_fields(&self) -> &[UnknownField];
    fn unknown_fields_mut(&mut self) -> &mut Vec<UnknownField>;

    fn field(number: FieldNumber) -> Option<&'static FieldDescriptor<Self>> {
        Self::FIELDS.iter().find(|f| f.number == number)
    }

    /// True iff every required field is set. Field content is not inspected.
    fn is_initialized(&self) -> bool {
        Self::FIELDS.iter().all(|f| f.has(self))
    }

    /// Names of the required fields that are not set, in field number order.
    fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|f| !f.has(self))
            .map(|f| f.name)
            .collect()
    }

    fn clear_all(&mut self) {
        for f in Self::FIELDS {
            f.clear(self);
        }
        self.unknown_fields_mut().clear();
    }

    /// Replaces the whole state of `self` with a deep copy of `other`.
    fn copy_from(&mut self, other: &Self) {
        for f in Self::FIELDS {
            f.assign(self, f.value(other).map(<[u8]>::to_vec));
        }
        let unknown = self.unknown_fields_mut();
        unknown.clear();
        unknown.extend_from_slice(other.unknown_fields());
    }

    /// Overwrites the fields that are set in `other`, leaving the others untouched.
    /// Unknown fields of `other` are appended after the ones of `self`.
    fn merge_from(&mut self, other: &Self) {
        for f in Self::FIELDS {
            if let Some(v) = f.value(other) {
                f.set(self, v.to_vec());
            }
        }
        self.unknown_fields_mut()
            .extend_from_slice(other.unknown_fields());
    }

    /// Same as [`FlatMessage::merge_from`], moving the buffers out of `other`.
    fn merge(&mut self, mut other: Self) {
        for f in Self::FIELDS {
            let (v, had) = f.take(&mut other);
            if had {
                f.set(self, v);
            }
        }
        let unknown = mem::take(other.unknown_fields_mut());
        self.unknown_fields_mut().extend(unknown);
    }
}
