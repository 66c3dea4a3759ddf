// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One-shot inspection of the annotation driven configuration of Ingresses.

use crate::annotations::{IngressAnnotation, SecureUpstream, SecureUpstreamParser};
use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{list_ingresses, list_secrets};
use crate::resolver::{CertificateResolver, SecretStore};
use k8s_openapi::api::networking::v1::Ingress;
use kube::{Client, ResourceExt};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Parsed configuration of a single Ingress, or why it could not be parsed
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressReport {
    pub namespace: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_upstream: Option<SecureUpstream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IngressReport {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse the annotations of every ingress, collecting failures instead of stopping
pub fn inspect_ingresses<R: CertificateResolver>(
    ingresses: &[Ingress],
    parser: &SecureUpstreamParser<R>,
) -> Vec<IngressReport> {
    ingresses
        .iter()
        .map(|ing| {
            let namespace = ing.namespace().unwrap_or_default();
            let name = ing.name_any();

            match parser.parse(ing) {
                Ok(upstream) => IngressReport {
                    namespace,
                    name,
                    secure_upstream: Some(upstream),
                    error: None,
                },
                Err(e) => {
                    warn!("Ingress {}/{} has invalid annotations: {}", namespace, name, e);
                    IngressReport {
                        namespace,
                        name,
                        secure_upstream: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}

/// List Ingresses and Secrets in the configured scope and inspect them
#[instrument(skip(client, config), fields(namespace = ?config.namespace()))]
pub async fn inspect(client: &Client, config: &Config) -> Result<Vec<IngressReport>> {
    let ingresses = list_ingresses(client, config.namespace()).await?;
    let store = SecretStore::new(list_secrets(client, config.namespace()).await?);

    info!(
        "Inspecting {} ingresses against {} secrets",
        ingresses.len(),
        store.len()
    );

    Ok(inspect_ingresses(&ingresses, &SecureUpstreamParser::new(store)))
}
