// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use shnarf_kernel::engine::KeccakSnarkHasher;
use shnarf_kernel::kzg::KzgCommitter;
use shnarf_node::config::NodeConfig;
use shnarf_node::engine::Engine;
use shnarf_node::server::{build_router, SharedEngine};
use shnarf_node::telemetry::init_telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    init_telemetry();

    let cfg = match NodeConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Initializing Shnarf Node with config: {:?}", cfg);

    let committer = match &cfg.trusted_setup_path {
        Some(path) => match KzgCommitter::from_trusted_setup_file(path) {
            Ok(committer) => committer,
            Err(e) => {
                tracing::error!("Failed to load trusted setup: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("Using bundled mainnet trusted setup");
            KzgCommitter::mainnet()
        }
    };

    let engine = Engine::new(committer, KeccakSnarkHasher, cfg.genesis_shnarf);
    let shared_state: SharedEngine<_, _> = Arc::new(engine);

    let app = build_router(shared_state, cfg.auth_token.clone());

    let addr = cfg.bind_addr;
    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
