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

//! Canonical structured event names used across `stream-bridge`.

// Consumer reconciliation events.
pub const CONSUMER_STALE_FOUND: &str = "consumer_stale_found";
pub const CONSUMER_STALE_DELETE_OK: &str = "consumer_stale_delete_ok";
pub const CONSUMER_STALE_DELETE_FAILED: &str = "consumer_stale_delete_failed";
pub const CONSUMER_LOOKUP_ABSENT: &str = "consumer_lookup_absent";
pub const CONSUMER_LOOKUP_TIMEOUT: &str = "consumer_lookup_timeout";
pub const CONSUMER_LOOKUP_FAILED: &str = "consumer_lookup_failed";
pub const CONSUMER_CREATE_OK: &str = "consumer_create_ok";

// Target stream reset events.
pub const STREAM_PURGE_START: &str = "stream_purge_start";
pub const STREAM_PURGE_OK: &str = "stream_purge_ok";
pub const STREAM_LOOKUP_ABSENT: &str = "stream_lookup_absent";
pub const STREAM_LOOKUP_FAILED: &str = "stream_lookup_failed";
pub const STREAM_CREATE_OK: &str = "stream_create_ok";
pub const STREAM_CREATE_RACED: &str = "stream_create_raced";

// Replication pump events.
pub const PUMP_RECEIVE: &str = "pump_receive";
pub const PUMP_FORWARD_OK: &str = "pump_forward_ok";
pub const PUMP_FORWARD_FAILED: &str = "pump_forward_failed";
pub const PUMP_ACK_OK: &str = "pump_ack_ok";
pub const PUMP_ACK_FAILED: &str = "pump_ack_failed";
pub const PUMP_FEED_CLOSED: &str = "pump_feed_closed";

// Bridge lifecycle events.
pub const SETUP_START: &str = "setup_start";
pub const SETUP_OK: &str = "setup_ok";
pub const BRIDGE_RUN_START: &str = "bridge_run_start";
pub const BRIDGE_SHUTDOWN: &str = "bridge_shutdown";
pub const SESSION_CLOSE_FAILED: &str = "session_close_failed";
