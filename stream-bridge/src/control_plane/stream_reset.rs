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

//! Brings the target stream to a known clean state before replication.

use crate::cluster::{ClusterClient, ClusterError};
use crate::observability::events;
use std::sync::Arc;
use tracing::{debug, info, warn};

const COMPONENT: &str = "stream_reset";

/// Ensures the target stream exists and is empty.
///
/// Consumer recreation on the source triggers a full backlog replay on every
/// restart; purging the target first keeps that replay from landing on top of
/// messages replicated by a prior run. The purge assumes this bridge is the
/// only writer to the target stream.
pub(crate) struct StreamResetCoordinator<'a> {
    target: &'a Arc<dyn ClusterClient>,
}

impl<'a> StreamResetCoordinator<'a> {
    pub(crate) fn new(target: &'a Arc<dyn ClusterClient>) -> Self {
        Self { target }
    }

    /// Purges the stream when it exists, creates it bound to
    /// `subject_filter` when it does not.
    ///
    /// Any lookup failure other than "not found" is logged and resolved
    /// through the create branch, which itself tolerates a stream that
    /// already exists.
    pub(crate) async fn reset(
        &self,
        stream: &str,
        subject_filter: &str,
    ) -> Result<(), ClusterError> {
        match self.target.stream_info(stream).await {
            Ok(snapshot) => {
                info!(
                    event = events::STREAM_PURGE_START,
                    component = COMPONENT,
                    stream,
                    messages = snapshot.messages,
                    "target stream exists; purging"
                );
                self.target.purge_stream(stream).await?;
                debug!(
                    event = events::STREAM_PURGE_OK,
                    component = COMPONENT,
                    stream,
                    "target stream purged"
                );
                return Ok(());
            }
            Err(err) if err.is_not_found() => {
                debug!(
                    event = events::STREAM_LOOKUP_ABSENT,
                    component = COMPONENT,
                    stream,
                    "target stream absent; creating"
                );
            }
            Err(err) => {
                warn!(
                    event = events::STREAM_LOOKUP_FAILED,
                    component = COMPONENT,
                    stream,
                    err = %err,
                    "target stream lookup failed; proceeding to create branch"
                );
            }
        }

        match self
            .target
            .add_stream(stream, vec![subject_filter.to_string()])
            .await
        {
            Ok(()) => {
                info!(
                    event = events::STREAM_CREATE_OK,
                    component = COMPONENT,
                    stream,
                    subject_filter,
                    "target stream created"
                );
                Ok(())
            }
            Err(err) if err.is_already_exists() => {
                debug!(
                    event = events::STREAM_CREATE_RACED,
                    component = COMPONENT,
                    stream,
                    "target stream appeared during reset; keeping it"
                );
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
