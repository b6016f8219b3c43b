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
use podwire_config::*;
use podwire_result::{ErrKind, ErrorKind};

#[test]
fn config_default() {
    let config = Config::default();
    assert_eq!(config.codec.max_message_size, 64 * 1024 * 1024);
    assert!(!config.codec.require_initialized);
    assert!(!config.pool.enabled);
    assert_eq!(config.pool.size, 16);
    assert_eq!(config.pool.buffer_capacity, 1024);
    config.validate().unwrap();

    assert_eq!(Config::from_json5("{}").unwrap(), config);
}

#[test]
fn config_from_json5() {
    let config = Config::from_json5(
        r#"{
            // comments and trailing commas are fine
            codec: { max_message_size: 4096, require_initialized: true, },
            pool: { enabled: true, size: 4 },
        }"#,
    )
    .unwrap();
    assert_eq!(config.codec.max_message_size, 4096);
    assert!(config.codec.require_initialized);
    assert!(config.pool.enabled);
    assert_eq!(config.pool.size, 4);
    assert_eq!(config.pool.buffer_capacity, 1024);
}

#[test]
fn config_from_yaml() {
    let config = Config::from_yaml(
        "codec:\n  require_initialized: true\npool:\n  enabled: true\n  buffer_capacity: 256\n",
    )
    .unwrap();
    assert!(config.codec.require_initialized);
    assert_eq!(config.codec.max_message_size, 64 * 1024 * 1024);
    assert!(config.pool.enabled);
    assert_eq!(config.pool.buffer_capacity, 256);
}

#[test]
fn config_rejects_unknown_fields() {
    let e = Config::from_json5("{ codec: { max_size: 1 } }").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Config);

    let e = Config::from_yaml("transport: {}\n").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Config);
}

#[test]
fn config_rejects_zero_sizes() {
    let e = Config::from_json5("{ codec: { max_message_size: 0 } }").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Config);

    let e = Config::from_json5("{ pool: { enabled: true, size: 0 } }").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Config);

    let e = Config::from_json5("{ pool: { enabled: true, buffer_capacity: 0 } }").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Config);

    // A disabled pool is not checked
    Config::from_json5("{ pool: { enabled: false, size: 0 } }").unwrap();
}

#[test]
fn config_from_file() {
    let dir = std::env::temp_dir().join(format!("podwire-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let json5 = dir.join("podwire.json5");
    std::fs::write(&json5, "{ codec: { max_message_size: 128 } }").unwrap();
    assert_eq!(
        Config::from_file(&json5).unwrap().codec.max_message_size,
        128
    );

    let yaml = dir.join("podwire.yml");
    std::fs::write(&yaml, "pool:\n  size: 2\n").unwrap();
    assert_eq!(Config::from_file(&yaml).unwrap().pool.size, 2);

    let toml = dir.join("podwire.toml");
    std::fs::write(&toml, "").unwrap();
    let e = Config::from_file(&toml).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Config);

    let e = Config::from_file(dir.join("missing.json5")).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Config);

    std::env::set_var(defaults::ENV, &json5);
    assert_eq!(Config::from_env().unwrap().codec.max_message_size, 128);
    std::env::remove_var(defaults::ENV);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn config_display_round_trip() {
    let config = Config::from_json5("{ pool: { enabled: true } }").unwrap();
    let s = config.to_string();
    assert_eq!(Config::from_json5(&s).unwrap(), config);
}
