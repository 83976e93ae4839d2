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

use crate::cluster::ClusterClient;
use std::sync::Arc;

/// One side of the bridge: a human-readable name plus the session owning
/// [`Arc<dyn ClusterClient>`][crate::ClusterClient] for that cluster.
///
/// Two instances exist per bridge, one for the source cluster and one for the
/// target. The endpoint is deliberately thin; all session lifecycle lives in
/// the connector behind the trait object.
#[derive(Clone)]
pub struct ClusterEndpoint {
    pub(crate) name: String,
    pub(crate) client: Arc<dyn ClusterClient>,
}

impl ClusterEndpoint {
    pub fn new(name: &str, client: Arc<dyn ClusterClient>) -> Self {
        Self {
            name: name.to_string(),
            client,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
