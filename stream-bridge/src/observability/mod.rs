/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Structured-logging vocabulary shared across the crate.
//!
//! Library code emits `tracing` events with these canonical names and
//! field-value helpers and never initializes a global subscriber; binaries
//! own one-time `tracing_subscriber` setup at the process boundary.

pub mod events;
pub mod fields;
