// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

use crate::error::Result;
use crate::kubernetes::scoped_api;
use k8s_openapi::api::core::v1::Secret;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// List Secrets in `namespace`, or in all namespaces
#[instrument(skip(client))]
pub async fn list_secrets(client: &Client, namespace: Option<&str>) -> Result<Vec<Secret>> {
    let secrets: Api<Secret> = scoped_api(client, namespace);
    let list = secrets.list(&ListParams::default()).await?;

    debug!("Listed {} secrets", list.items.len());
    Ok(list.items)
}
