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

//! # stream-bridge
//!
//! `stream-bridge` continuously and idempotently replicates messages from a
//! named stream on one messaging cluster to the equally named stream on a
//! second, independent cluster, with at-least-once semantics: a message is
//! acknowledged to the source only after it has been stored on the target.
//!
//! Typical usage is API-first and centered on [`ClusterEndpoint`] and
//! [`StreamBridge`]. Internal modules are organized by domain layer to keep
//! behavior ownership explicit.
//!
//! ```
//! use std::sync::Arc;
//! use stream_bridge::{BridgeConfig, ClusterEndpoint, StreamBridge};
//!
//! # pub mod mock_cluster {
//! #     use async_trait::async_trait;
//! #     use bytes::Bytes;
//! #     use stream_bridge::{
//! #         AckToken, ClusterClient, ClusterError, ConsumerSnapshot, ConsumerSpec,
//! #         MessageFeed, StreamSnapshot,
//! #     };
//! #
//! #     pub struct MockCluster;
//! #
//! #     #[async_trait]
//! #     impl ClusterClient for MockCluster {
//! #         async fn stream_info(&self, stream: &str) -> Result<StreamSnapshot, ClusterError> {
//! #             Err(ClusterError::NotFound { resource: stream.to_string() })
//! #         }
//! #         async fn add_stream(
//! #             &self,
//! #             _stream: &str,
//! #             _subjects: Vec<String>,
//! #         ) -> Result<(), ClusterError> {
//! #             Ok(())
//! #         }
//! #         async fn purge_stream(&self, _stream: &str) -> Result<(), ClusterError> {
//! #             Ok(())
//! #         }
//! #         async fn consumer_info(
//! #             &self,
//! #             _stream: &str,
//! #             durable_name: &str,
//! #         ) -> Result<ConsumerSnapshot, ClusterError> {
//! #             Err(ClusterError::NotFound { resource: durable_name.to_string() })
//! #         }
//! #         async fn delete_consumer(
//! #             &self,
//! #             _stream: &str,
//! #             _durable_name: &str,
//! #         ) -> Result<(), ClusterError> {
//! #             Ok(())
//! #         }
//! #         async fn add_consumer(
//! #             &self,
//! #             _stream: &str,
//! #             _spec: ConsumerSpec,
//! #         ) -> Result<(), ClusterError> {
//! #             Ok(())
//! #         }
//! #         async fn subscribe(
//! #             &self,
//! #             _subject: &str,
//! #             queue_capacity: usize,
//! #         ) -> Result<MessageFeed, ClusterError> {
//! #             let (_, feed) = tokio::sync::mpsc::channel(queue_capacity);
//! #             Ok(feed)
//! #         }
//! #         async fn publish(&self, _subject: &str, _payload: Bytes) -> Result<(), ClusterError> {
//! #             Ok(())
//! #         }
//! #         async fn ack(&self, _token: &AckToken) -> Result<(), ClusterError> {
//! #             Ok(())
//! #         }
//! #         async fn close(&self) -> Result<(), ClusterError> {
//! #             Ok(())
//! #         }
//! #     }
//! # }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let config = BridgeConfig {
//!     source_url: "nats://nats-1:4222".to_string(),
//!     target_url: "nats://nats-2:4222".to_string(),
//!     stream: "orders".to_string(),
//!     durable_name: "orders-replicator".to_string(),
//!     deliver_subject: "orders-deliver".to_string(),
//!     message_queue_size: 16,
//! };
//!
//! // In production both sides are `JetStreamCluster::connect(..)` sessions.
//! let source = ClusterEndpoint::new("source", Arc::new(mock_cluster::MockCluster));
//! let target = ClusterEndpoint::new("target", Arc::new(mock_cluster::MockCluster));
//!
//! let bridge = StreamBridge::new(config, source, target).unwrap();
//! let deliver_subject = bridge.prepare().await.unwrap();
//! assert_eq!(deliver_subject, "orders-deliver");
//! bridge.shutdown().await;
//! # });
//! ```
//!
//! ## Internal architecture map
//!
//! - API facade: outward [`ClusterEndpoint`]/[`StreamBridge`] surface
//! - Cluster: the [`ClusterClient`] session seam and its JetStream adapter
//! - Control plane: startup consumer reconciliation and target stream reset
//! - Data plane: the sequential forward-then-ack replication pump
//!
//! ## Delivery contract
//!
//! At-least-once, not exactly-once: a restart replays the source backlog
//! (the durable consumer is recreated from stream start) onto a freshly
//! purged target stream, and a failure between forward and ack yields a
//! redelivered duplicate on the target. A message is never acknowledged
//! before the target accepted it.
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events. Library code emits events and
//! does not initialize a global subscriber; binaries are responsible for
//! one-time `tracing_subscriber` initialization at process boundaries.

mod bridge;
pub use bridge::StreamBridge;

mod cluster;
pub use cluster::{
    AckToken, ClusterClient, ClusterError, ConsumerSnapshot, ConsumerSpec, JetStreamCluster,
    MessageFeed, StreamMessage, StreamSnapshot,
};

mod config;
pub use config::{BridgeConfig, ConfigError};

mod endpoint;
pub use endpoint::ClusterEndpoint;

mod control_plane;
mod data_plane;
pub use data_plane::pump::{PumpCounters, PumpStats};

#[doc(hidden)]
pub mod observability;
