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

//! In-memory cluster double shared by the integration suites.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stream_bridge::{
    AckToken, BridgeConfig, ClusterClient, ClusterError, ConsumerSnapshot, ConsumerSpec,
    MessageFeed, StreamMessage, StreamSnapshot,
};
use tokio::sync::mpsc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct MockStream {
    pub subjects: Vec<String>,
    pub messages: Vec<(String, Bytes)>,
}

/// In-memory stand-in for one cluster: streams, consumers, acks, and a queue
/// of source deliveries handed out on subscribe. Publish failures can be
/// injected to model an unreachable target.
#[derive(Default)]
pub struct MockCluster {
    pub ops: Mutex<Vec<String>>,
    pub streams: Mutex<HashMap<String, MockStream>>,
    pub consumers: Mutex<HashMap<String, ConsumerSpec>>,
    pub acked: Mutex<Vec<String>>,
    pub pending: Mutex<Vec<StreamMessage>>,
    pub publish_failures: AtomicUsize,
    pub stream_lookup_error: Mutex<Option<ClusterError>>,
}

impl MockCluster {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues one source delivery, handed to the feed on subscribe.
    #[allow(dead_code)]
    pub async fn queue_delivery(&self, deliver_subject: &str, payload: &str, token: &str) {
        self.pending.lock().await.push(StreamMessage {
            subject: deliver_subject.to_string(),
            payload: Bytes::copy_from_slice(payload.as_bytes()),
            ack_token: AckToken::new(token),
        });
    }

    /// Payloads currently stored on the named stream, in arrival order.
    #[allow(dead_code)]
    pub async fn stored_payloads(&self, stream: &str) -> Vec<String> {
        self.streams
            .lock()
            .await
            .get(stream)
            .map(|entry| {
                entry
                    .messages
                    .iter()
                    .map(|(_, payload)| String::from_utf8_lossy(payload).to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[allow(dead_code)]
    pub async fn consumer_for(&self, stream: &str, durable_name: &str) -> Option<ConsumerSpec> {
        self.consumers
            .lock()
            .await
            .get(&consumer_key(stream, durable_name))
            .cloned()
    }

    #[allow(dead_code)]
    pub async fn recorded_ops(&self) -> Vec<String> {
        self.ops.lock().await.clone()
    }
}

fn consumer_key(stream: &str, durable_name: &str) -> String {
    format!("{stream}/{durable_name}")
}

/// NATS-style filter match, enough for `<stream>.>` wildcards.
fn subject_matches(filter: &str, subject: &str) -> bool {
    match filter.strip_suffix(".>") {
        Some(prefix) => subject
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('.')),
        None => filter == subject,
    }
}

#[async_trait]
impl ClusterClient for MockCluster {
    async fn stream_info(&self, stream: &str) -> Result<StreamSnapshot, ClusterError> {
        self.ops.lock().await.push(format!("stream_info:{stream}"));

        if let Some(err) = self.stream_lookup_error.lock().await.take() {
            return Err(err);
        }

        self.streams
            .lock()
            .await
            .get(stream)
            .map(|entry| StreamSnapshot {
                name: stream.to_string(),
                messages: entry.messages.len() as u64,
            })
            .ok_or_else(|| ClusterError::NotFound {
                resource: stream.to_string(),
            })
    }

    async fn add_stream(&self, stream: &str, subjects: Vec<String>) -> Result<(), ClusterError> {
        self.ops.lock().await.push(format!("add_stream:{stream}"));

        let mut streams = self.streams.lock().await;
        if streams.contains_key(stream) {
            return Err(ClusterError::AlreadyExists {
                resource: stream.to_string(),
            });
        }
        streams.insert(
            stream.to_string(),
            MockStream {
                subjects,
                messages: Vec::new(),
            },
        );
        Ok(())
    }

    async fn purge_stream(&self, stream: &str) -> Result<(), ClusterError> {
        self.ops.lock().await.push(format!("purge_stream:{stream}"));

        let mut streams = self.streams.lock().await;
        let entry = streams.get_mut(stream).ok_or_else(|| ClusterError::NotFound {
            resource: stream.to_string(),
        })?;
        entry.messages.clear();
        Ok(())
    }

    async fn consumer_info(
        &self,
        stream: &str,
        durable_name: &str,
    ) -> Result<ConsumerSnapshot, ClusterError> {
        self.ops
            .lock()
            .await
            .push(format!("consumer_info:{stream}/{durable_name}"));

        self.consumers
            .lock()
            .await
            .get(&consumer_key(stream, durable_name))
            .map(|spec| ConsumerSnapshot {
                durable_name: spec.durable_name.clone(),
                deliver_subject: Some(spec.deliver_subject.clone()),
            })
            .ok_or_else(|| ClusterError::NotFound {
                resource: durable_name.to_string(),
            })
    }

    async fn delete_consumer(
        &self,
        stream: &str,
        durable_name: &str,
    ) -> Result<(), ClusterError> {
        self.ops
            .lock()
            .await
            .push(format!("delete_consumer:{stream}/{durable_name}"));

        self.consumers
            .lock()
            .await
            .remove(&consumer_key(stream, durable_name))
            .map(|_| ())
            .ok_or_else(|| ClusterError::NotFound {
                resource: durable_name.to_string(),
            })
    }

    async fn add_consumer(&self, stream: &str, spec: ConsumerSpec) -> Result<(), ClusterError> {
        self.ops
            .lock()
            .await
            .push(format!("add_consumer:{stream}/{}", spec.durable_name));

        self.consumers
            .lock()
            .await
            .insert(consumer_key(stream, &spec.durable_name), spec);
        Ok(())
    }

    async fn subscribe(
        &self,
        subject: &str,
        queue_capacity: usize,
    ) -> Result<MessageFeed, ClusterError> {
        self.ops.lock().await.push(format!("subscribe:{subject}"));

        let mut pending = self.pending.lock().await;
        let capacity = queue_capacity.max(pending.len()).max(1);
        let (feed_sender, feed) = mpsc::channel(capacity);
        for message in pending.drain(..) {
            feed_sender
                .send(message)
                .await
                .expect("freshly created feed accepts queued deliveries");
        }
        // The sender drops here, so the feed closes once drained; tests model
        // an open-ended subscription by queueing everything up front.
        Ok(feed)
    }

    async fn publish(&self, subject: &str, payload: Bytes) -> Result<(), ClusterError> {
        if self
            .publish_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |remaining| {
                remaining.checked_sub(1)
            })
            .is_ok()
        {
            return Err(ClusterError::Rpc {
                operation: "publish",
                source: "target unreachable".into(),
            });
        }

        self.ops.lock().await.push(format!("publish:{subject}"));

        let mut streams = self.streams.lock().await;
        for entry in streams.values_mut() {
            if entry
                .subjects
                .iter()
                .any(|filter| subject_matches(filter, subject))
            {
                entry.messages.push((subject.to_string(), payload.clone()));
                return Ok(());
            }
        }
        // No bound stream: core-NATS drop semantics.
        Ok(())
    }

    async fn ack(&self, token: &AckToken) -> Result<(), ClusterError> {
        self.ops.lock().await.push(format!("ack:{}", token.as_str()));
        self.acked.lock().await.push(token.as_str().to_string());
        Ok(())
    }

    async fn close(&self) -> Result<(), ClusterError> {
        self.ops.lock().await.push("close".to_string());
        Ok(())
    }
}

pub fn test_config() -> BridgeConfig {
    BridgeConfig {
        source_url: "nats://nats-1:4222".to_string(),
        target_url: "nats://nats-2:4222".to_string(),
        stream: "orders".to_string(),
        durable_name: "orders-replicator".to_string(),
        deliver_subject: "orders-deliver".to_string(),
        message_queue_size: 8,
    }
}
