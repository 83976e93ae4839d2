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

//! Ensures exactly one durable consumer drains the source stream.

use crate::cluster::{ClusterClient, ClusterError, ConsumerSpec};
use crate::observability::events;
use crate::observability::fields;
use std::sync::Arc;
use tracing::{debug, info, warn};

const COMPONENT: &str = "consumer_reconciler";

/// Reconciles the durable consumer on the source cluster.
///
/// The reconciler never trusts existing state: a consumer found under the
/// durable name is deleted unconditionally and recreated with the fixed
/// delivery configuration, trading a full backlog replay per restart for a
/// guaranteed-consistent consumer. Recreating the consumer resets its cursor
/// to the start of the stream.
pub(crate) struct ConsumerReconciler<'a> {
    source: &'a Arc<dyn ClusterClient>,
}

impl<'a> ConsumerReconciler<'a> {
    pub(crate) fn new(source: &'a Arc<dyn ClusterClient>) -> Self {
        Self { source }
    }

    /// Tears down any stale consumer and creates a fresh one.
    ///
    /// Returns the delivery subject the pump must subscribe on. Only the
    /// final create call can fail the setup phase; lookup and deletion
    /// failures all collapse into the recreate branch.
    pub(crate) async fn reconcile(
        &self,
        stream: &str,
        durable_name: &str,
        deliver_subject: &str,
    ) -> Result<String, ClusterError> {
        match self.source.consumer_info(stream, durable_name).await {
            Ok(existing) => {
                info!(
                    event = events::CONSUMER_STALE_FOUND,
                    component = COMPONENT,
                    stream,
                    durable = durable_name,
                    deliver_subject =
                        fields::deliver_subject_or_none(existing.deliver_subject.as_deref()),
                    "existing consumer found; deleting before recreation"
                );

                match self.source.delete_consumer(stream, durable_name).await {
                    Ok(()) => {
                        debug!(
                            event = events::CONSUMER_STALE_DELETE_OK,
                            component = COMPONENT,
                            stream,
                            durable = durable_name,
                            "stale consumer deleted"
                        );
                    }
                    Err(err) => {
                        // Deleting an already-gone consumer is not an error;
                        // anything else still resolves by recreating.
                        warn!(
                            event = events::CONSUMER_STALE_DELETE_FAILED,
                            component = COMPONENT,
                            stream,
                            durable = durable_name,
                            err = %err,
                            "stale consumer deletion failed; proceeding to recreate"
                        );
                    }
                }
            }
            Err(err) if err.is_timeout() => {
                warn!(
                    event = events::CONSUMER_LOOKUP_TIMEOUT,
                    component = COMPONENT,
                    stream,
                    durable = durable_name,
                    err = %err,
                    "consumer lookup timed out; treating as absent"
                );
            }
            Err(err) if err.is_not_found() => {
                debug!(
                    event = events::CONSUMER_LOOKUP_ABSENT,
                    component = COMPONENT,
                    stream,
                    durable = durable_name,
                    "no existing consumer"
                );
            }
            Err(err) => {
                warn!(
                    event = events::CONSUMER_LOOKUP_FAILED,
                    component = COMPONENT,
                    stream,
                    durable = durable_name,
                    err = %err,
                    "consumer lookup failed; treating as absent"
                );
            }
        }

        self.source
            .add_consumer(
                stream,
                ConsumerSpec {
                    durable_name: durable_name.to_string(),
                    deliver_subject: deliver_subject.to_string(),
                },
            )
            .await?;

        info!(
            event = events::CONSUMER_CREATE_OK,
            component = COMPONENT,
            stream,
            durable = durable_name,
            deliver_subject,
            "durable consumer created"
        );

        Ok(deliver_subject.to_string())
    }
}
