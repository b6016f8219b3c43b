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
//! Configuration of the podwire codec.
pub mod defaults;

use std::{fmt, path::Path};

use podwire_result::{bail, perror, ErrorKind, PResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub codec: CodecConf,
    pub pool: PoolConf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConf {
    /// Largest message, in bytes, accepted when encoding or decoding.
    pub max_message_size: usize,
    /// Refuse to encode or decode messages missing a required field.
    pub require_initialized: bool,
}

impl Default for CodecConf {
    fn default() -> Self {
        Self {
            max_message_size: defaults::codec::max_message_size,
            require_initialized: defaults::codec::require_initialized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConf {
    /// Hand out encode buffers from a recycling pool.
    pub enabled: bool,
    /// Number of buffers kept by the pool.
    pub size: usize,
    /// Initial capacity of each pooled buffer.
    pub buffer_capacity: usize,
}

impl Default for PoolConf {
    fn default() -> Self {
        Self {
            enabled: defaults::pool::enabled,
            size: defaults::pool::size,
            buffer_capacity: defaults::pool::buffer_capacity,
        }
    }
}

impl Config {
    pub fn from_env() -> PResult<Self> {
        let path = std::env::var(defaults::ENV).map_err(|e| {
            perror!((ErrorKind::Config) "Invalid ENV variable ({}): {}", defaults::ENV, e)
        })?;
        Self::from_file(path.as_str())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> PResult<Self> {
        let path = path.as_ref();
        Self::_from_file(path)
    }

    fn _from_file(path: &Path) -> PResult<Config> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                bail!((ErrorKind::Config) e => "Cannot read configuration file {}", path.display())
            }
        };
        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("json") | Some("json5") => Self::from_json5(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            Some(other) => bail!(
                (ErrorKind::Config) "Unsupported file type '.{}' (.json, .json5, .yaml and .yml are supported)",
                other
            ),
            None => bail!(
                (ErrorKind::Config) "Unsupported file type. Configuration files must have an extension (.json, .json5, .yaml and .yml supported)"
            ),
        };
        tracing::debug!("Loaded configuration from {}: {}", path.display(), config);
        Ok(config)
    }

    pub fn from_json5(s: &str) -> PResult<Self> {
        let config: Config = json5::from_str(s)
            .map_err(|e| perror!((ErrorKind::Config) "JSON error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(s: &str) -> PResult<Self> {
        let config: Config = serde_yaml::from_str(s)
            .map_err(|e| perror!((ErrorKind::Config) "YAML error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PResult<()> {
        if self.codec.max_message_size == 0 {
            bail!((ErrorKind::Config) "Invalid configuration: codec.max_message_size must be greater than 0");
        }
        if self.pool.enabled {
            if self.pool.size == 0 {
                bail!((ErrorKind::Config) "Invalid configuration: pool.size must be greater than 0 when the pool is enabled");
            }
            if self.pool.buffer_capacity == 0 {
                bail!((ErrorKind::Config) "Invalid configuration: pool.buffer_capacity must be greater than 0 when the pool is enabled");
            }
            if self.pool.buffer_capacity > self.codec.max_message_size {
                tracing::warn!(
                    "pool.buffer_capacity ({}) exceeds codec.max_message_size ({})",
                    self.pool.buffer_capacity,
                    self.codec.max_message_size
                );
            }
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match json5::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => fmt::Debug::fmt(self, f),
        }
    }
}
