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
//! Logging setup for applications embedding podwire.
//!
//! podwire reports through [`tracing`]; nothing is printed until a subscriber is
//! installed, for instance with one of the functions below. Events by target:
//!
//! - `podwire`: `TRACE` for every encoded message and for decoded messages
//!   carrying unknown fields, `DEBUG` for rejected wire data and buffer pool
//!   creation.
//! - `podwire_config`: `DEBUG` when a configuration file is loaded, `WARN` when
//!   pooled buffers are larger than the maximum message size.
//! - `podwire_sync`: `TRACE` when an empty pool has to allocate.
use std::{fmt, thread};

use tracing::{
    field::{Field, Visit},
    Event, Level, Metadata, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    EnvFilter,
};

/// Installs a formatting subscriber filtered by `RUST_LOG`, e.g.
/// `RUST_LOG=podwire=trace`.
///
/// Does nothing when `RUST_LOG` is unset or when a global subscriber is
/// already installed.
pub fn try_init_log_from_env() {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        install_fmt(filter);
    }
}

/// Installs a formatting subscriber filtered by `RUST_LOG`, or by the
/// `fallback` directives (e.g. `"podwire=debug"`) when `RUST_LOG` is unset.
pub fn init_log_from_env_or<S>(fallback: S)
where
    S: AsRef<str>,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    install_fmt(filter);
}

fn install_fmt(filter: EnvFilter) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .with_target(true)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// An event delivered to the callback of [`init_log_with_callback`].
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub target: String,
    pub level: Level,
    pub location: Option<(&'static str, u32)>,
    pub thread_name: Option<String>,
    pub message: Option<String>,
    pub fields: Vec<(&'static str, String)>,
}

impl LogRecord {
    fn new(metadata: &Metadata<'static>) -> Self {
        LogRecord {
            target: metadata.target().into(),
            level: *metadata.level(),
            location: metadata.file().zip(metadata.line()),
            thread_name: thread::current().name().map(Into::into),
            message: None,
            fields: vec![],
        }
    }

    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name(), value));
        }
    }
}

impl Visit for LogRecord {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}

struct CallbackLayer<E, C> {
    enabled: E,
    callback: C,
}

impl<S, E, C> tracing_subscriber::Layer<S> for CallbackLayer<E, C>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    E: Fn(&Metadata) -> bool + 'static,
    C: Fn(LogRecord) + 'static,
{
    fn enabled(&self, metadata: &Metadata<'_>, _: Context<'_, S>) -> bool {
        (self.enabled)(metadata)
    }

    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        let mut record = LogRecord::new(event.metadata());
        event.record(&mut record);
        (self.callback)(record);
    }
}

/// Hands every event accepted by `enabled` to `callback` instead of printing it.
///
/// Does nothing when a global subscriber is already installed.
pub fn init_log_with_callback(
    enabled: impl Fn(&Metadata) -> bool + Send + Sync + 'static,
    callback: impl Fn(LogRecord) + Send + Sync + 'static,
) {
    let subscriber = tracing_subscriber::registry().with(CallbackLayer { enabled, callback });
    let _ = tracing::subscriber::set_global_default(subscriber);
}
