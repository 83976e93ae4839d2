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

//! Bridge configuration and the subject addresses derived from it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

fn default_message_queue_size() -> usize {
    16
}

/// Startup parameters for one replication bridge.
///
/// All inputs are plain strings; the only schema is non-empty validation.
/// The stream name is identical on both clusters by design contract.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    pub source_url: String,
    pub target_url: String,
    pub stream: String,
    pub durable_name: String,
    pub deliver_subject: String,
    /// Depth of the bounded feed queue between the source subscription and
    /// the replication pump.
    #[serde(default = "default_message_queue_size")]
    pub message_queue_size: usize,
}

impl BridgeConfig {
    /// Rejects configurations with empty inputs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("source_url", &self.source_url),
            ("target_url", &self.target_url),
            ("stream", &self.stream),
            ("durable_name", &self.durable_name),
            ("deliver_subject", &self.deliver_subject),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }

        if self.message_queue_size == 0 {
            return Err(ConfigError::ZeroQueueSize);
        }

        Ok(())
    }

    /// Wildcard the target stream is bound to; covers every subject the pump
    /// publishes under.
    pub fn subject_filter(&self) -> String {
        format!("{}.>", self.stream)
    }

    /// Fixed subject the pump republishes under on the target cluster.
    pub fn target_subject(&self) -> String {
        format!("{}.replica", self.stream)
    }
}

/// Rejected bridge configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptyField(&'static str),
    ZeroQueueSize,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyField(field) => {
                write!(f, "configuration field `{field}` must not be empty")
            }
            ConfigError::ZeroQueueSize => {
                write!(f, "message_queue_size must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {}
