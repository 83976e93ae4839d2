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

//! API facade tying the setup phase and the pump together.

use crate::cluster::ClusterError;
use crate::config::{BridgeConfig, ConfigError};
use crate::control_plane::consumer_reconciler::ConsumerReconciler;
use crate::control_plane::stream_reset::StreamResetCoordinator;
use crate::data_plane::pump::{PumpCounters, PumpStats, ReplicationPump};
use crate::endpoint::ClusterEndpoint;
use crate::observability::events;
use std::sync::Arc;
use tracing::{info, warn};

const COMPONENT: &str = "stream_bridge";

/// Replicates one named stream from a source cluster to a target cluster.
///
/// Construction validates the configuration; [`run`](StreamBridge::run)
/// performs the idempotent setup phase and then pumps messages until the
/// source feed closes. The bridge keeps no local state: everything it needs
/// to resume after a restart lives in the two clusters.
pub struct StreamBridge {
    config: BridgeConfig,
    source: ClusterEndpoint,
    target: ClusterEndpoint,
    stats: Arc<PumpStats>,
}

impl StreamBridge {
    pub fn new(
        config: BridgeConfig,
        source: ClusterEndpoint,
        target: ClusterEndpoint,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            source,
            target,
            stats: Arc::new(PumpStats::default()),
        })
    }

    /// Current pump progress counters.
    pub fn stats(&self) -> PumpCounters {
        self.stats.snapshot()
    }

    /// Runs the idempotent setup phase on both clusters.
    ///
    /// Resets the target stream first, then reconciles the source consumer,
    /// so the full replay triggered by consumer recreation lands on an empty
    /// target. Running this twice in a row leaves the same observable end
    /// state as running it once. Returns the delivery subject to subscribe
    /// on.
    pub async fn prepare(&self) -> Result<String, ClusterError> {
        info!(
            event = events::SETUP_START,
            component = COMPONENT,
            stream = self.config.stream.as_str(),
            durable = self.config.durable_name.as_str(),
            source = self.source.name(),
            target = self.target.name(),
            "starting setup phase"
        );

        StreamResetCoordinator::new(&self.target.client)
            .reset(&self.config.stream, &self.config.subject_filter())
            .await?;

        let deliver_subject = ConsumerReconciler::new(&self.source.client)
            .reconcile(
                &self.config.stream,
                &self.config.durable_name,
                &self.config.deliver_subject,
            )
            .await?;

        info!(
            event = events::SETUP_OK,
            component = COMPONENT,
            stream = self.config.stream.as_str(),
            deliver_subject = deliver_subject.as_str(),
            "setup phase complete"
        );

        Ok(deliver_subject)
    }

    /// Performs setup, subscribes on the delivery subject, and pumps until
    /// the feed closes.
    pub async fn run(&self) -> Result<(), ClusterError> {
        let deliver_subject = self.prepare().await?;

        let feed = self
            .source
            .client
            .subscribe(&deliver_subject, self.config.message_queue_size)
            .await?;

        info!(
            event = events::BRIDGE_RUN_START,
            component = COMPONENT,
            stream = self.config.stream.as_str(),
            deliver_subject = deliver_subject.as_str(),
            target_subject = self.config.target_subject().as_str(),
            "replication running"
        );

        ReplicationPump::new(
            self.source.client.clone(),
            self.target.client.clone(),
            &self.config.target_subject(),
            self.stats.clone(),
        )
        .run(feed)
        .await;

        Ok(())
    }

    /// Releases both cluster sessions.
    ///
    /// Safe to call after any outcome of [`run`](StreamBridge::run),
    /// including setup failures; neither session is leaked on error paths.
    pub async fn shutdown(&self) {
        for endpoint in [&self.source, &self.target] {
            if let Err(err) = endpoint.client.close().await {
                warn!(
                    event = events::SESSION_CLOSE_FAILED,
                    component = COMPONENT,
                    cluster = endpoint.name(),
                    err = %err,
                    "session close failed"
                );
            }
        }

        info!(
            event = events::BRIDGE_SHUTDOWN,
            component = COMPONENT,
            "bridge shut down"
        );
    }
}
