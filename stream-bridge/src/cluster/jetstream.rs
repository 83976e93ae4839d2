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

//! NATS JetStream implementation of the cluster connector.

use crate::cluster::error::ClusterError;
use crate::cluster::{
    AckToken, ClusterClient, ConsumerSnapshot, ConsumerSpec, MessageFeed, StreamMessage,
    StreamSnapshot,
};
use async_nats::jetstream;
use async_nats::jetstream::consumer::push;
use async_nats::jetstream::consumer::{AckPolicy, DeliverPolicy, ReplayPolicy};
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::debug;

const COMPONENT: &str = "jetstream_cluster";

/// Live session with one NATS cluster plus its JetStream context.
///
/// The session is process-long: it is established once at startup and
/// released through [`ClusterClient::close`] on shutdown. Reconnect backoff
/// for an established session is the client library's concern.
pub struct JetStreamCluster {
    name: String,
    client: async_nats::Client,
    jetstream: jetstream::Context,
}

impl JetStreamCluster {
    /// Establishes a session with the cluster at `url`.
    ///
    /// Handshake failure is recoverable from the caller's perspective: it is
    /// reported as [`ClusterError::Connect`], never a panic, so startup code
    /// can surface it to the operator.
    pub async fn connect(name: &str, url: &str) -> Result<Self, ClusterError> {
        let client = async_nats::ConnectOptions::new()
            .name(name)
            .connect(url)
            .await
            .map_err(|err| ClusterError::Connect {
                endpoint: url.to_string(),
                source: Box::new(err),
            })?;
        let jetstream = jetstream::new(client.clone());

        debug!(
            component = COMPONENT,
            cluster = name,
            endpoint = url,
            "session established"
        );

        Ok(Self {
            name: name.to_string(),
            client,
            jetstream,
        })
    }

    pub fn cluster_name(&self) -> &str {
        &self.name
    }
}

/// Maps a JetStream RPC failure onto the connector error taxonomy.
///
/// JetStream admin RPCs report absence and name conflicts through their API
/// error text ("stream not found", "consumer not found", "already in use").
/// Unrecognized failures keep the client error as their `source`.
fn classify(
    operation: &'static str,
    resource: &str,
    err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
) -> ClusterError {
    let err = err.into();
    let lowered = err.to_string().to_ascii_lowercase();

    if lowered.contains("not found") {
        ClusterError::NotFound {
            resource: resource.to_string(),
        }
    } else if lowered.contains("timed out") || lowered.contains("timeout") {
        ClusterError::Timeout { operation }
    } else if lowered.contains("already in use") {
        ClusterError::AlreadyExists {
            resource: resource.to_string(),
        }
    } else {
        ClusterError::Rpc {
            operation,
            source: err,
        }
    }
}

#[async_trait]
impl ClusterClient for JetStreamCluster {
    async fn stream_info(&self, stream: &str) -> Result<StreamSnapshot, ClusterError> {
        let handle = self
            .jetstream
            .get_stream(stream)
            .await
            .map_err(|err| classify("stream_info", stream, err))?;
        let info = handle.cached_info();

        Ok(StreamSnapshot {
            name: info.config.name.clone(),
            messages: info.state.messages,
        })
    }

    async fn add_stream(&self, stream: &str, subjects: Vec<String>) -> Result<(), ClusterError> {
        self.jetstream
            .create_stream(jetstream::stream::Config {
                name: stream.to_string(),
                subjects,
                ..Default::default()
            })
            .await
            .map(|_| ())
            .map_err(|err| classify("add_stream", stream, err))
    }

    async fn purge_stream(&self, stream: &str) -> Result<(), ClusterError> {
        let handle = self
            .jetstream
            .get_stream(stream)
            .await
            .map_err(|err| classify("purge_stream", stream, err))?;

        handle
            .purge()
            .await
            .map(|_| ())
            .map_err(|err| classify("purge_stream", stream, err))
    }

    async fn consumer_info(
        &self,
        stream: &str,
        durable_name: &str,
    ) -> Result<ConsumerSnapshot, ClusterError> {
        let handle = self
            .jetstream
            .get_stream(stream)
            .await
            .map_err(|err| classify("consumer_info", stream, err))?;
        let info = handle
            .consumer_info(durable_name)
            .await
            .map_err(|err| classify("consumer_info", durable_name, err))?;

        Ok(ConsumerSnapshot {
            durable_name: durable_name.to_string(),
            deliver_subject: info.config.deliver_subject.clone(),
        })
    }

    async fn delete_consumer(
        &self,
        stream: &str,
        durable_name: &str,
    ) -> Result<(), ClusterError> {
        let handle = self
            .jetstream
            .get_stream(stream)
            .await
            .map_err(|err| classify("delete_consumer", stream, err))?;

        handle
            .delete_consumer(durable_name)
            .await
            .map(|_| ())
            .map_err(|err| classify("delete_consumer", durable_name, err))
    }

    async fn add_consumer(&self, stream: &str, spec: ConsumerSpec) -> Result<(), ClusterError> {
        let handle = self
            .jetstream
            .get_stream(stream)
            .await
            .map_err(|err| classify("add_consumer", stream, err))?;
        let durable_name = spec.durable_name.clone();

        handle
            .create_consumer(push::Config {
                durable_name: Some(spec.durable_name),
                deliver_subject: spec.deliver_subject,
                ack_policy: AckPolicy::Explicit,
                deliver_policy: DeliverPolicy::All,
                replay_policy: ReplayPolicy::Instant,
                ..Default::default()
            })
            .await
            .map(|_| ())
            .map_err(|err| classify("add_consumer", &durable_name, err))
    }

    async fn subscribe(
        &self,
        subject: &str,
        queue_capacity: usize,
    ) -> Result<MessageFeed, ClusterError> {
        let mut subscriber = self
            .client
            .subscribe(subject.to_string())
            .await
            .map_err(|err| classify("subscribe", subject, err))?;

        let (feed_sender, feed) = mpsc::channel(queue_capacity);
        tokio::spawn(async move {
            while let Some(message) = subscriber.next().await {
                // Push deliveries without a reply inbox cannot be
                // acknowledged; the broker will redeliver them.
                let Some(reply) = message.reply else {
                    continue;
                };

                let inbound = StreamMessage {
                    subject: message.subject.to_string(),
                    payload: message.payload,
                    ack_token: AckToken(reply.to_string()),
                };
                if feed_sender.send(inbound).await.is_err() {
                    break;
                }
            }
        });

        Ok(feed)
    }

    async fn publish(&self, subject: &str, payload: Bytes) -> Result<(), ClusterError> {
        let publish_ack = self
            .jetstream
            .publish(subject.to_string(), payload)
            .await
            .map_err(|err| classify("publish", subject, err))?;

        // The stream has not stored the message until the ack resolves.
        publish_ack
            .await
            .map(|_| ())
            .map_err(|err| classify("publish", subject, err))
    }

    async fn ack(&self, token: &AckToken) -> Result<(), ClusterError> {
        self.client
            .publish(token.0.clone(), Bytes::new())
            .await
            .map_err(|err| classify("ack", token.as_str(), err))
    }

    async fn close(&self) -> Result<(), ClusterError> {
        // The connection itself is released when the client is dropped;
        // flushing first keeps any outstanding acks from being lost.
        self.client
            .flush()
            .await
            .map_err(|err| classify("close", &self.name, err))
    }
}
