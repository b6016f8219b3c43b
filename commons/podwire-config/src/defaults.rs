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
/// Environment variable holding the path of the configuration file.
pub const ENV: &str = "PODWIRE_CONFIG";

#[allow(non_upper_case_globals)]
#[allow(dead_code)]
pub mod codec {
    pub const max_message_size: usize = 64 * 1024 * 1024;
    pub const require_initialized: bool = false;
}

#[allow(non_upper_case_globals)]
#[allow(dead_code)]
pub mod pool {
    pub const enabled: bool = false;
    pub const size: usize = 16;
    pub const buffer_capacity: usize = 1024;
}
