// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Certificate resolution for annotations that reference Secrets.

use crate::constants::CA_CERT_KEY;
use crate::error::{IngressError, Result};
use k8s_openapi::api::core::v1::Secret;
use kube::ResourceExt;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// A CA certificate taken from a Secret
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSslCert {
    /// `<namespace>/<name>` of the source secret
    pub secret: String,
    /// Hex encoded SHA-256 of the PEM content
    pub pem_sha: String,
    #[serde(skip)]
    pub ca_pem: Vec<u8>,
}

impl AuthSslCert {
    pub fn new(secret: impl Into<String>, ca_pem: Vec<u8>) -> Self {
        let pem_sha = hex::encode(Sha256::digest(&ca_pem));
        Self {
            secret: secret.into(),
            pem_sha,
            ca_pem,
        }
    }
}

/// Looks up CA certificates by `<namespace>/<name>`
pub trait CertificateResolver {
    fn get_auth_certificate(&self, name: &str) -> Result<AuthSslCert>;
}

/// In-memory resolver over a snapshot of Secrets
#[derive(Debug, Clone, Default)]
pub struct SecretStore {
    secrets: HashMap<String, Secret>,
}

impl SecretStore {
    pub fn new(secrets: impl IntoIterator<Item = Secret>) -> Self {
        let secrets = secrets
            .into_iter()
            .map(|s| (format!("{}/{}", s.namespace().unwrap_or_default(), s.name_any()), s))
            .collect();
        Self { secrets }
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl CertificateResolver for SecretStore {
    fn get_auth_certificate(&self, name: &str) -> Result<AuthSslCert> {
        let secret = self
            .secrets
            .get(name)
            .ok_or_else(|| IngressError::SecretNotFound(name.to_string()))?;

        let Some(ca) = secret.data.as_ref().and_then(|d| d.get(CA_CERT_KEY)) else {
            return Err(IngressError::InvalidSecret(format!(
                "secret {} does not contain '{}' key",
                name, CA_CERT_KEY
            )));
        };

        Ok(AuthSslCert::new(name, ca.0.clone()))
    }
}
