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

use serde::{Deserialize, Serialize};
use stream_bridge::BridgeConfig;

fn default_message_queue_size() -> usize {
    16
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) source: ClusterConfig,
    pub(crate) target: ClusterConfig,
    pub(crate) replication: ReplicationConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
    pub(crate) name: String,
    pub(crate) url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ReplicationConfig {
    pub(crate) stream: String,
    pub(crate) durable_name: String,
    pub(crate) deliver_subject: String,
    #[serde(default = "default_message_queue_size")]
    pub(crate) message_queue_size: usize,
}

impl Config {
    pub(crate) fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig {
            source_url: self.source.url.clone(),
            target_url: self.target.url.clone(),
            stream: self.replication.stream.clone(),
            durable_name: self.replication.durable_name.clone(),
            deliver_subject: self.replication.deliver_subject.clone(),
            message_queue_size: self.replication.message_queue_size,
        }
    }
}
