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

//! Contract tests for the idempotent setup phase.

mod support;

use bytes::Bytes;
use std::sync::Arc;
use stream_bridge::{ClusterClient, ClusterEndpoint, ClusterError, ConsumerSpec, StreamBridge};
use support::{test_config, MockCluster};

fn bridge_over(source: &Arc<MockCluster>, target: &Arc<MockCluster>) -> StreamBridge {
    StreamBridge::new(
        test_config(),
        ClusterEndpoint::new("source", source.clone()),
        ClusterEndpoint::new("target", target.clone()),
    )
    .expect("test configuration is valid")
}

#[tokio::test]
async fn running_setup_twice_leaves_the_same_end_state_as_once() {
    let source = MockCluster::new();
    let target = MockCluster::new();
    let bridge = bridge_over(&source, &target);

    let first = bridge.prepare().await.expect("first setup succeeds");
    let second = bridge.prepare().await.expect("second setup succeeds");

    assert_eq!(first, "orders-deliver");
    assert_eq!(first, second);

    // Exactly one consumer, one empty target stream.
    assert_eq!(source.consumers.lock().await.len(), 1);
    assert_eq!(target.streams.lock().await.len(), 1);
    assert!(target.stored_payloads("orders").await.is_empty());

    // The second pass purged the existing stream rather than recreating it.
    let target_ops = target.recorded_ops().await;
    assert_eq!(
        target_ops
            .iter()
            .filter(|op| op.as_str() == "add_stream:orders")
            .count(),
        1
    );
    assert!(target_ops.contains(&"purge_stream:orders".to_string()));
}

#[tokio::test]
async fn setup_replaces_a_stale_durable_with_a_different_delivery_subject() {
    let source = MockCluster::new();
    let target = MockCluster::new();

    // Leftover consumer from a previous run, pointing somewhere else.
    source.consumers.lock().await.insert(
        "orders/orders-replicator".to_string(),
        ConsumerSpec {
            durable_name: "orders-replicator".to_string(),
            deliver_subject: "leftover-subject".to_string(),
        },
    );

    let bridge = bridge_over(&source, &target);
    bridge.prepare().await.expect("setup succeeds");

    assert_eq!(source.consumers.lock().await.len(), 1);
    assert_eq!(
        source
            .consumer_for("orders", "orders-replicator")
            .await
            .expect("durable exists")
            .deliver_subject,
        "orders-deliver"
    );

    assert!(source
        .recorded_ops()
        .await
        .contains(&"delete_consumer:orders/orders-replicator".to_string()));
}

#[tokio::test]
async fn setup_purges_messages_replicated_by_a_previous_run() {
    let source = MockCluster::new();
    let target = MockCluster::new();

    // State left behind by a prior run of the bridge.
    target
        .add_stream("orders", vec!["orders.>".to_string()])
        .await
        .expect("seeding the target stream succeeds");
    target
        .publish("orders.replica", Bytes::from_static(b"stale"))
        .await
        .expect("seeding a stale message succeeds");

    let bridge = bridge_over(&source, &target);
    bridge.prepare().await.expect("setup succeeds");

    assert!(target.stored_payloads("orders").await.is_empty());
}

#[tokio::test]
async fn target_lookup_failure_falls_back_to_the_create_branch() {
    let source = MockCluster::new();
    let target = MockCluster::new();
    *target.stream_lookup_error.lock().await = Some(ClusterError::Rpc {
        operation: "stream_info",
        source: "connection reset".into(),
    });

    let bridge = bridge_over(&source, &target);
    bridge
        .prepare()
        .await
        .expect("lookup failure must not abort setup");

    assert_eq!(target.streams.lock().await.len(), 1);
}

#[tokio::test]
async fn target_lookup_timeout_tolerates_an_existing_stream() {
    let source = MockCluster::new();
    let target = MockCluster::new();
    target
        .add_stream("orders", vec!["orders.>".to_string()])
        .await
        .expect("seeding the target stream succeeds");
    *target.stream_lookup_error.lock().await = Some(ClusterError::Timeout {
        operation: "stream_info",
    });

    let bridge = bridge_over(&source, &target);
    bridge
        .prepare()
        .await
        .expect("already-exists during the defensive create must be tolerated");

    assert_eq!(target.streams.lock().await.len(), 1);
}
