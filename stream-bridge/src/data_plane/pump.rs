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

//! Replication pump: the steady-state forward-then-ack loop.

use crate::cluster::{ClusterClient, MessageFeed, StreamMessage};
use crate::observability::events;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

const COMPONENT: &str = "replication_pump";

/// Outcome of one in-flight pass over a message.
///
/// The pump is a two-state machine: receiving a message from the feed moves
/// it Idle -> InFlight, and every outcome below moves it back to Idle. The
/// invariant is that `Acked` is the only outcome in which the source saw an
/// acknowledgment, and it is reachable only through a successful target
/// publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PumpOutcome {
    /// Forwarded to the target and acknowledged to the source.
    Acked,
    /// Target publish failed; the message was left unacked for source
    /// redelivery.
    ForwardFailed,
    /// Forwarded, but the ack did not reach the source; the source will
    /// redeliver and the target will hold a duplicate.
    AckFailed,
}

/// Live counters for pump progress.
#[derive(Debug, Default)]
pub struct PumpStats {
    received: AtomicU64,
    forwarded: AtomicU64,
    acked: AtomicU64,
    forward_failures: AtomicU64,
    ack_failures: AtomicU64,
}

/// Point-in-time copy of [`PumpStats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpCounters {
    pub received: u64,
    pub forwarded: u64,
    pub acked: u64,
    pub forward_failures: u64,
    pub ack_failures: u64,
}

impl PumpStats {
    pub fn snapshot(&self) -> PumpCounters {
        PumpCounters {
            received: self.received.load(Ordering::Relaxed),
            forwarded: self.forwarded.load(Ordering::Relaxed),
            acked: self.acked.load(Ordering::Relaxed),
            forward_failures: self.forward_failures.load(Ordering::Relaxed),
            ack_failures: self.ack_failures.load(Ordering::Relaxed),
        }
    }
}

/// Sequential pump with at most one message in flight.
///
/// Steady-state failures never abort the loop; they only withhold the
/// acknowledgment, leaving retries to broker redelivery. The loop ends when
/// the feed closes.
pub(crate) struct ReplicationPump {
    source: Arc<dyn ClusterClient>,
    target: Arc<dyn ClusterClient>,
    target_subject: String,
    stats: Arc<PumpStats>,
}

impl ReplicationPump {
    pub(crate) fn new(
        source: Arc<dyn ClusterClient>,
        target: Arc<dyn ClusterClient>,
        target_subject: &str,
        stats: Arc<PumpStats>,
    ) -> Self {
        Self {
            source,
            target,
            target_subject: target_subject.to_string(),
            stats,
        }
    }

    /// Drains the feed until it closes.
    pub(crate) async fn run(&self, mut feed: MessageFeed) {
        while let Some(message) = feed.recv().await {
            self.stats.received.fetch_add(1, Ordering::Relaxed);
            debug!(
                event = events::PUMP_RECEIVE,
                component = COMPONENT,
                subject = message.subject.as_str(),
                payload_len = message.payload.len(),
                "message in flight"
            );

            self.process_one(message).await;
        }

        info!(
            event = events::PUMP_FEED_CLOSED,
            component = COMPONENT,
            "feed closed; stopping pump"
        );
    }

    /// One InFlight pass: forward to the target, then ack to the source.
    ///
    /// The ack must never precede a successful forward; a crash or failure
    /// between the two yields a redelivered duplicate on the target, never a
    /// silent loss.
    pub(crate) async fn process_one(&self, message: StreamMessage) -> PumpOutcome {
        if let Err(err) = self
            .target
            .publish(&self.target_subject, message.payload.clone())
            .await
        {
            self.stats.forward_failures.fetch_add(1, Ordering::Relaxed);
            warn!(
                event = events::PUMP_FORWARD_FAILED,
                component = COMPONENT,
                subject = self.target_subject.as_str(),
                err = %err,
                "target publish failed; leaving message unacked for redelivery"
            );
            return PumpOutcome::ForwardFailed;
        }

        self.stats.forwarded.fetch_add(1, Ordering::Relaxed);
        debug!(
            event = events::PUMP_FORWARD_OK,
            component = COMPONENT,
            subject = self.target_subject.as_str(),
            "payload stored on target"
        );

        if let Err(err) = self.source.ack(&message.ack_token).await {
            self.stats.ack_failures.fetch_add(1, Ordering::Relaxed);
            warn!(
                event = events::PUMP_ACK_FAILED,
                component = COMPONENT,
                err = %err,
                "ack failed; source will redeliver"
            );
            return PumpOutcome::AckFailed;
        }

        self.stats.acked.fetch_add(1, Ordering::Relaxed);
        debug!(
            event = events::PUMP_ACK_OK,
            component = COMPONENT,
            "message acknowledged"
        );
        PumpOutcome::Acked
    }
}
