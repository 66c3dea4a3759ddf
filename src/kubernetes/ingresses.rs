// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

use crate::error::Result;
use crate::kubernetes::scoped_api;
use k8s_openapi::api::networking::v1::Ingress;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// List Ingresses in `namespace`, or in all namespaces
#[instrument(skip(client))]
pub async fn list_ingresses(client: &Client, namespace: Option<&str>) -> Result<Vec<Ingress>> {
    let ingresses: Api<Ingress> = scoped_api(client, namespace);
    let list = ingresses.list(&ListParams::default()).await?;

    debug!("Listed {} ingresses", list.items.len());
    Ok(list.items)
}
