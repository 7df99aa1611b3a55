// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! EIP-4844 KZG backend over `c-kzg`.

use std::path::Path;

use c_kzg::{Bytes32, Bytes48, KzgSettings};

use crate::blob::Blob;
use crate::engine::BlobCommitter;
use crate::error::{Result, ShnarfError};
use crate::types::{G1Bytes, Hash32};

enum Settings {
    Mainnet(&'static KzgSettings),
    Loaded(Box<KzgSettings>),
}

/// KZG commitments over the Ethereum trusted setup.
pub struct KzgCommitter {
    settings: Settings,
}

fn kzg_err(e: c_kzg::Error) -> ShnarfError {
    ShnarfError::Commitment(format!("{:?}", e))
}

fn to_kzg_blob(blob: &Blob) -> Result<c_kzg::Blob> {
    c_kzg::Blob::from_bytes(blob.as_bytes()).map_err(kzg_err)
}

impl KzgCommitter {
    /// Uses the mainnet ceremony output bundled with `c-kzg`.
    pub fn mainnet() -> Self {
        Self {
            settings: Settings::Mainnet(c_kzg::ethereum_kzg_settings(0)),
        }
    }

    /// Loads a trusted setup in the ceremony's text format.
    pub fn from_trusted_setup_file(path: &Path) -> Result<Self> {
        let settings = KzgSettings::load_trusted_setup_file(path, 0).map_err(kzg_err)?;
        tracing::info!("Loaded KZG trusted setup from {:?}", path);
        Ok(Self {
            settings: Settings::Loaded(Box::new(settings)),
        })
    }

    fn settings(&self) -> &KzgSettings {
        match &self.settings {
            Settings::Mainnet(settings) => settings,
            Settings::Loaded(settings) => settings,
        }
    }
}

impl std::fmt::Debug for KzgCommitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match self.settings {
            Settings::Mainnet(_) => "mainnet",
            Settings::Loaded(_) => "file",
        };
        f.debug_struct("KzgCommitter").field("setup", &source).finish()
    }
}

impl BlobCommitter for KzgCommitter {
    fn commit(&self, blob: &Blob) -> Result<G1Bytes> {
        let commitment = self
            .settings()
            .blob_to_kzg_commitment(&to_kzg_blob(blob)?)
            .map_err(kzg_err)?;
        G1Bytes::from_slice("commitment", commitment.to_bytes().as_slice())
    }

    fn open(&self, blob: &Blob, z: &Hash32) -> Result<(G1Bytes, Hash32)> {
        let (proof, y) = self
            .settings()
            .compute_kzg_proof(&to_kzg_blob(blob)?, &Bytes32::new(z.0))
            .map_err(kzg_err)?;
        Ok((
            G1Bytes::from_slice("kzgProofContract", proof.to_bytes().as_slice())?,
            Hash32::from_slice("expectedY", y.as_slice())?,
        ))
    }

    fn blob_proof(&self, blob: &Blob, commitment: &G1Bytes) -> Result<G1Bytes> {
        let proof = self
            .settings()
            .compute_blob_kzg_proof(&to_kzg_blob(blob)?, &Bytes48::new(commitment.0))
            .map_err(kzg_err)?;
        G1Bytes::from_slice("kzgProofSidecar", proof.to_bytes().as_slice())
    }

    fn verify_opening(
        &self,
        commitment: &G1Bytes,
        z: &Hash32,
        y: &Hash32,
        proof: &G1Bytes,
    ) -> Result<bool> {
        self.settings()
            .verify_kzg_proof(
                &Bytes48::new(commitment.0),
                &Bytes32::new(z.0),
                &Bytes32::new(y.0),
                &Bytes48::new(proof.0),
            )
            .map_err(kzg_err)
    }

    fn verify_blob_proof(&self, blob: &Blob, commitment: &G1Bytes, proof: &G1Bytes) -> Result<bool> {
        self.settings()
            .verify_blob_kzg_proof(
                &to_kzg_blob(blob)?,
                &Bytes48::new(commitment.0),
                &Bytes48::new(proof.0),
            )
            .map_err(kzg_err)
    }
}
