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

//! Cluster connector layer.
//!
//! Owns the session with one messaging cluster and exposes the administrative
//! and publish/subscribe primitives the control and data planes consume. All
//! components receive the connector as `Arc<dyn ClusterClient>` passed in
//! explicitly; no session state is ambient.

pub(crate) mod error;
pub(crate) mod jetstream;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc::Receiver;

pub use error::ClusterError;
pub use jetstream::JetStreamCluster;

/// Bounded queue of messages delivered by one subscription.
///
/// The subscription side pushes into the queue; the replication pump drains
/// it. A closed feed means the subscription ended and the pump should stop.
pub type MessageFeed = Receiver<StreamMessage>;

/// Cluster-assigned delivery token used to acknowledge one message.
///
/// Opaque to everything except the connector that minted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckToken(pub(crate) String);

impl AckToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One message in flight between the source subscription and the target
/// stream. Owned by the pump until acknowledged or dropped.
#[derive(Clone, Debug)]
pub struct StreamMessage {
    pub subject: String,
    pub payload: Bytes,
    pub ack_token: AckToken,
}

/// Durable consumer definition used on creation.
///
/// The remaining delivery configuration is fixed by contract: explicit
/// per-message acknowledgment, delivery of all messages from stream start,
/// and instant replay with no artificial pacing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerSpec {
    pub durable_name: String,
    pub deliver_subject: String,
}

/// Answer to a stream introspection query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamSnapshot {
    pub name: String,
    pub messages: u64,
}

/// Answer to a consumer introspection query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerSnapshot {
    pub durable_name: String,
    pub deliver_subject: Option<String>,
}

/// Session with one messaging cluster.
///
/// Every operation is an independent network RPC and may fail or time out on
/// its own; callers decide per call whether a failure is fatal.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Queries the named stream.
    async fn stream_info(&self, stream: &str) -> Result<StreamSnapshot, ClusterError>;

    /// Creates the named stream bound to the given subjects.
    async fn add_stream(&self, stream: &str, subjects: Vec<String>) -> Result<(), ClusterError>;

    /// Removes all stored messages from the named stream, keeping its
    /// definition.
    async fn purge_stream(&self, stream: &str) -> Result<(), ClusterError>;

    /// Queries the named durable consumer on a stream.
    async fn consumer_info(
        &self,
        stream: &str,
        durable_name: &str,
    ) -> Result<ConsumerSnapshot, ClusterError>;

    /// Deletes the named durable consumer.
    async fn delete_consumer(&self, stream: &str, durable_name: &str)
        -> Result<(), ClusterError>;

    /// Creates a durable consumer on the stream.
    async fn add_consumer(&self, stream: &str, spec: ConsumerSpec) -> Result<(), ClusterError>;

    /// Subscribes on a subject and returns a bounded feed of delivered
    /// messages.
    async fn subscribe(
        &self,
        subject: &str,
        queue_capacity: usize,
    ) -> Result<MessageFeed, ClusterError>;

    /// Publishes a payload under the given subject and waits until the
    /// cluster has accepted it.
    async fn publish(&self, subject: &str, payload: Bytes) -> Result<(), ClusterError>;

    /// Acknowledges one delivered message back to the cluster.
    async fn ack(&self, token: &AckToken) -> Result<(), ClusterError>;

    /// Flushes outstanding traffic and releases the session.
    async fn close(&self) -> Result<(), ClusterError>;
}
