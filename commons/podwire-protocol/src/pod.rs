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
    common::{FieldNumber, UnknownField},
    message::{FieldDescriptor, FlatMessage},
};
use alloc::vec::Vec;
use core::{fmt, mem};

/// # Pod message
///
/// ```text
/// message Pod {
///     required bytes uid = 1;
///     required bytes name = 2;
///     required bytes namespace = 3;
/// }
/// ```
///
/// Each field is tracked for presence: a field explicitly set to an empty value is distinct from
/// a field never set, although both read back as an empty slice. The message is initialized
/// once all three fields are set. Records with any other field number are kept as
/// [`UnknownField`]s, in the order they were read.
pub mod field {
    use crate::common::FieldNumber;

    pub const UID: FieldNumber = 1;
    pub const NAME: FieldNumber = 2;
    pub const NAMESPACE: FieldNumber = 3;
}

/// Selects one of the fields of a [`Pod`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PodField {
    Uid,
    Name,
    Namespace,
}

impl PodField {
    pub const ALL: [PodField; 3] = [PodField::Uid, PodField::Name, PodField::Namespace];

    pub const fn number(self) -> FieldNumber {
        match self {
            PodField::Uid => field::UID,
            PodField::Name => field::NAME,
            PodField::Namespace => field::NAMESPACE,
        }
    }

    pub fn descriptor(self) -> &'static FieldDescriptor<Pod> {
        &Pod::FIELDS[self as usize]
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Pod {
    uid: Option<Vec<u8>>,
    name: Option<Vec<u8>>,
    namespace: Option<Vec<u8>>,
    unknown: Vec<UnknownField>,
}

impl FlatMessage for Pod {
    const NAME: &'static str = "Pod";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::<Pod>::new(field::UID, "uid", |m| &m.uid, |m| &mut m.uid),
        FieldDescriptor::<Pod>::new(field::NAME, "name", |m| &m.name, |m| &mut m.name),
        FieldDescriptor::<Pod>::new(
            field::NAMESPACE,
            "namespace",
            |m| &m.namespace,
            |m| &mut m.namespace,
        ),
    ];

    fn unknown_fields(&self) -> &[UnknownField] {
        &self.unknown
    }

    fn unknown_fields_mut(&mut self) -> &mut Vec<UnknownField> {
        &mut self.unknown
    }
}

macro_rules! bytes_field {
    (
        $sel:expr,
        $get:ident,
        $has:ident,
        $set:ident,
        $clear:ident,
        $mutable:ident,
        $take:ident,
        $assign:ident
    ) => {
        pub fn $get(&self) -> &[u8] {
            self.get($sel)
        }

        pub fn $has(&self) -> bool {
            self.has($sel)
        }

        pub fn $set<T: Into<Vec<u8>>>(&mut self, value: T) {
            self.set($sel, value)
        }

        pub fn $clear(&mut self) {
            self.clear($sel)
        }

        pub fn $mutable(&mut self) -> &mut Vec<u8> {
            self.mutable_handle($sel)
        }

        pub fn $take(&mut self) -> (Vec<u8>, bool) {
            self.take($sel)
        }

        pub fn $assign(&mut self, value: Option<Vec<u8>>) {
            self.assign_owned($sel, value)
        }
    };
}

impl Pod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, field: PodField) -> bool {
        field.descriptor().has(self)
    }

    pub fn get(&self, field: PodField) -> &[u8] {
        field.descriptor().get(self)
    }

    pub fn set<T: Into<Vec<u8>>>(&mut self, field: PodField, value: T) {
        field.descriptor().set(self, value.into())
    }

    pub fn clear(&mut self, field: PodField) {
        field.descriptor().clear(self)
    }

    /// Marks `field` as set, even if nothing is written through the returned handle.
    pub fn mutable_handle(&mut self, field: PodField) -> &mut Vec<u8> {
        field.descriptor().mutable(self)
    }

    pub fn take(&mut self, field: PodField) -> (Vec<u8>, bool) {
        field.descriptor().take(self)
    }

    pub fn assign_owned(&mut self, field: PodField, value: Option<Vec<u8>>) {
        field.descriptor().assign(self, value)
    }

    bytes_field!(
        PodField::Uid,
        uid,
        has_uid,
        set_uid,
        clear_uid,
        uid_mut,
        take_uid,
        assign_uid
    );
    bytes_field!(
        PodField::Name,
        name,
        has_name,
        set_name,
        clear_name,
        name_mut,
        take_name,
        assign_name
    );
    bytes_field!(
        PodField::Namespace,
        namespace,
        has_namespace,
        set_namespace,
        clear_namespace,
        namespace_mut,
        take_namespace,
        assign_namespace
    );

    pub fn is_initialized(&self) -> bool {
        FlatMessage::is_initialized(self)
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        FlatMessage::missing_fields(self)
    }

    pub fn clear_all(&mut self) {
        FlatMessage::clear_all(self)
    }

    pub fn copy_from(&mut self, other: &Pod) {
        FlatMessage::copy_from(self, other)
    }

    pub fn merge_from(&mut self, other: &Pod) {
        FlatMessage::merge_from(self, other)
    }

    pub fn merge(&mut self, other: Pod) {
        FlatMessage::merge(self, other)
    }

    pub fn swap(&mut self, other: &mut Pod) {
        mem::swap(self, other)
    }

    pub fn unknown_fields(&self) -> &[UnknownField] {
        &self.unknown
    }

    pub fn unknown_fields_mut(&mut self) -> &mut Vec<UnknownField> {
        &mut self.unknown
    }

    #[cfg(feature = "test")]
    pub fn rand() -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();

        let mut pod = Pod::new();
        for field in PodField::ALL {
            if rng.gen_bool(0.8) {
                let len = rng.gen_range(0..64);
                pod.set(field, (0..len).map(|_| rng.gen::<u8>()).collect::<Vec<u8>>());
            }
        }
        let n = rng.gen_range(0..4);
        pod.unknown.extend((0..n).map(|_| UnknownField::rand()));
        pod
    }
}

struct Bytes<'a>(Option<&'a [u8]>);

impl fmt::Debug for Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(bytes) => {
                f.write_str("\"")?;
                for b in bytes {
                    fmt::Display::fmt(&core::ascii::escape_default(*b), f)?;
                }
                f.write_str("\"")
            }
            None => f.write_str("<unset>"),
        }
    }
}

impl fmt::Debug for Pod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(<Self as FlatMessage>::NAME);
        for d in Self::FIELDS {
            s.field(d.name, &Bytes(d.value(self)));
        }
        s.field("unknown", &self.unknown).finish()
    }
}
