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

mod config;

use crate::config::Config;
use clap::Parser;
use std::sync::Arc;
use stream_bridge::{ClusterEndpoint, JetStreamCluster, StreamBridge};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command()]
struct BridgeArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = BridgeArgs::parse();

    let contents = std::fs::read_to_string(&args.config)
        .map_err(|err| format!("unable to read config file {}: {err}", args.config))?;
    let config: Config = json5::from_str(&contents)
        .map_err(|err| format!("unable to parse config file {}: {err}", args.config))?;

    // Both sessions must be live before replication starts; a half-connected
    // bridge never enters the pump.
    let source_session =
        JetStreamCluster::connect(&config.source.name, &config.source.url).await?;
    info!(cluster = config.source.name.as_str(), "source session ready");
    let target_session =
        JetStreamCluster::connect(&config.target.name, &config.target.url).await?;
    info!(cluster = config.target.name.as_str(), "target session ready");

    let bridge = StreamBridge::new(
        config.bridge_config(),
        ClusterEndpoint::new(&config.source.name, Arc::new(source_session)),
        ClusterEndpoint::new(&config.target.name, Arc::new(target_session)),
    )?;

    let outcome = tokio::select! {
        result = bridge.run() => {
            if let Err(err) = &result {
                error!(err = %err, "replication stopped");
            }
            result.map_err(Into::into)
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupt received; shutting down");
            Ok(())
        }
    };

    // Sessions are released on every exit path, including setup failures.
    bridge.shutdown().await;

    outcome
}
