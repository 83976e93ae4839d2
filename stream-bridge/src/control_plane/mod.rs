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

//! Control-plane layer.
//!
//! Owns the idempotent setup phase that runs once at startup: tearing down and
//! recreating the source durable consumer, and resetting the target stream to
//! a known clean state. Setup-phase query failures are absorbed here and
//! converted into the creation branch rather than aborting startup; the goal
//! is self-healing setup, not fail-fast setup.

pub(crate) mod consumer_reconciler;
pub(crate) mod stream_reset;
