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

//! Error taxonomy for cluster RPCs.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures surfaced by [`ClusterClient`](crate::ClusterClient) operations.
///
/// Setup-phase callers only distinguish `NotFound`/`Timeout` (both drive the
/// creation branch) from everything else; steady-state callers treat any
/// variant as "do not acknowledge".
#[derive(Debug)]
pub enum ClusterError {
    /// Session establishment with the cluster failed.
    Connect {
        endpoint: String,
        source: Box<dyn Error + Send + Sync>,
    },
    /// The addressed stream or consumer does not exist.
    NotFound { resource: String },
    /// An administrative RPC timed out before the cluster answered.
    Timeout { operation: &'static str },
    /// The resource already exists with a conflicting definition.
    AlreadyExists { resource: String },
    /// Any other RPC failure reported by the cluster.
    Rpc {
        operation: &'static str,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl ClusterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClusterError::NotFound { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClusterError::Timeout { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, ClusterError::AlreadyExists { .. })
    }
}

impl Display for ClusterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterError::Connect { endpoint, source } => {
                write!(f, "failed to connect to cluster at {endpoint}: {source}")
            }
            ClusterError::NotFound { resource } => write!(f, "{resource} not found"),
            ClusterError::Timeout { operation } => write!(f, "{operation} timed out"),
            ClusterError::AlreadyExists { resource } => {
                write!(f, "{resource} already exists")
            }
            ClusterError::Rpc { operation, source } => {
                write!(f, "{operation} failed: {source}")
            }
        }
    }
}

impl Error for ClusterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClusterError::Connect { source, .. } | ClusterError::Rpc { source, .. } => {
                Some(source.as_ref())
            }
            _ => None,
        }
    }
}
