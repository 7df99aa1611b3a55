// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::net::SocketAddr;
use std::path::PathBuf;

use shnarf_kernel::config::GENESIS_SHNARF;
use shnarf_kernel::types::Hash32;

use crate::errors::EngineError;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// Parent shnarf of the first blob handled by the rolling calculator.
    pub genesis_shnarf: Hash32,
    pub auth_token: Option<String>,
    /// Trusted setup file; the bundled mainnet setup is used when unset.
    pub trusted_setup_path: Option<PathBuf>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            genesis_shnarf: Hash32(GENESIS_SHNARF),
            auth_token: None,
            trusted_setup_path: None,
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by `SHNARF_*` environment variables.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("SHNARF_BIND_ADDR") {
            cfg.bind_addr = addr
                .parse()
                .map_err(|e| EngineError::Config(format!("SHNARF_BIND_ADDR: {}", e)))?;
        }
        if let Some(shnarf) = lookup("SHNARF_GENESIS_SHNARF") {
            cfg.genesis_shnarf = Hash32::from_hex("SHNARF_GENESIS_SHNARF", &shnarf)
                .map_err(|e| EngineError::Config(e.to_string()))?;
        }
        cfg.auth_token = lookup("SHNARF_AUTH_TOKEN").filter(|t| !t.is_empty());
        cfg.trusted_setup_path = lookup("SHNARF_TRUSTED_SETUP").map(PathBuf::from);

        Ok(cfg)
    }
}
