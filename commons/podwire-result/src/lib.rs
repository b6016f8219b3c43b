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
//! Error and result types shared by the podwire crates.
use core::fmt;

use anyhow::Error as AnyError;

// +-------+
// | ERROR |
// +-------+

pub use std::error::Error as IError;

pub type Error = Box<dyn IError + Send + Sync + 'static>;

// +---------+
// | PRESULT |
// +---------+

pub type PResult<T> = core::result::Result<T, Error>;

// +--------+
// | PERROR |
// +--------+

/// The class of failure carried by a [`PError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ErrorKind {
    /// A message lacks one or more required fields.
    Uninitialized,
    /// The wire data could not be parsed.
    Malformed,
    /// A buffer exceeded its allowed size or refused further bytes.
    Capacity,
    /// The configuration could not be loaded or is invalid.
    Config,
    /// A byte stream could not be read or written.
    Io,
    #[default]
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Uninitialized => "uninitialized message",
            ErrorKind::Malformed => "malformed wire data",
            ErrorKind::Capacity => "capacity exceeded",
            ErrorKind::Config => "invalid configuration",
            ErrorKind::Io => "i/o failure",
            ErrorKind::Other => "error",
        };
        f.write_str(s)
    }
}

pub struct PError {
    error: AnyError,
    file: &'static str,
    line: u32,
    kind: ErrorKind,
    source: Option<Error>,
}

impl PError {
    pub fn new<E: Into<AnyError>>(
        error: E,
        file: &'static str,
        line: u32,
        kind: ErrorKind,
    ) -> PError {
        PError {
            error: error.into(),
            file,
            line,
            kind,
            source: None,
        }
    }

    pub fn set_source<S: Into<Error>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::error::Error for PError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl fmt::Debug for PError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl fmt::Display for PError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}.", self.error, self.file, self.line)?;
        if let Some(s) = &self.source {
            write!(f, " - Caused by {}", *s)?;
        }
        Ok(())
    }
}

// +---------+
// | ERRKIND |
// +---------+

pub trait ErrKind {
    fn kind(&self) -> ErrorKind;
}

impl ErrKind for PError {
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl ErrKind for dyn std::error::Error {
    fn kind(&self) -> ErrorKind {
        match self.downcast_ref::<PError>() {
            Some(e) => e.kind(),
            None => ErrorKind::Other,
        }
    }
}

impl ErrKind for dyn std::error::Error + Send {
    fn kind(&self) -> ErrorKind {
        match self.downcast_ref::<PError>() {
            Some(e) => e.kind(),
            None => ErrorKind::Other,
        }
    }
}

impl ErrKind for dyn std::error::Error + Send + Sync {
    fn kind(&self) -> ErrorKind {
        match self.downcast_ref::<PError>() {
            Some(e) => e.kind(),
            None => ErrorKind::Other,
        }
    }
}

// +--------+
// | MACROS |
// +--------+

pub use anyhow::anyhow;
#[macro_export]
macro_rules! perror {
    (($kind:expr) $source: expr => $($t: tt)*) => {
        $crate::PError::new($crate::anyhow!($($t)*), file!(), line!(), $kind).set_source($source)
    };
    (($kind:expr) $t: literal) => {
        $crate::PError::new($crate::anyhow!($t), file!(), line!(), $kind)
    };
    (($kind:expr) $t: expr) => {
        $crate::PError::new($t, file!(), line!(), $kind)
    };
    (($kind:expr) $($t: tt)*) => {
        $crate::PError::new($crate::anyhow!($($t)*), file!(), line!(), $kind)
    };
    ($source: expr => $($t: tt)*) => {
        $crate::PError::new($crate::anyhow!($($t)*), file!(), line!(), $crate::ErrorKind::Other).set_source($source)
    };
    ($t: literal) => {
        $crate::PError::new($crate::anyhow!($t), file!(), line!(), $crate::ErrorKind::Other)
    };
    ($t: expr) => {
        $crate::PError::new($t, file!(), line!(), $crate::ErrorKind::Other)
    };
    ($($t: tt)*) => {
        $crate::PError::new($crate::anyhow!($($t)*), file!(), line!(), $crate::ErrorKind::Other)
    };
}

// This macro is a shorthand for returning a PError
#[macro_export]
macro_rules! bail{
    ($($t: tt)*) => {
        return Err($crate::perror!($($t)*).into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail(kind: ErrorKind) -> PResult<()> {
        bail!((kind) "failed with {}", kind)
    }

    #[test]
    fn error_kind_survives_boxing() {
        let e = fail(ErrorKind::Malformed).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Malformed);
        assert!(e.to_string().starts_with("failed with malformed wire data at "));
    }

    #[test]
    fn error_without_kind_is_other() {
        let e: Error = perror!("plain").into();
        assert_eq!(e.kind(), ErrorKind::Other);

        let e: Error = std::io::Error::new(std::io::ErrorKind::Other, "io").into();
        assert_eq!(e.kind(), ErrorKind::Other);
    }

    #[test]
    fn error_source_is_reported() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let e = perror!((ErrorKind::Io) io => "cannot read");
        assert_eq!(e.kind(), ErrorKind::Io);
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().contains("Caused by eof"));
    }
}
