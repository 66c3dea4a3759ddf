// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for listing Ingresses and the Secrets they reference.

pub mod ingresses;
pub mod secrets;

pub use ingresses::list_ingresses;
pub use secrets::list_secrets;

use k8s_openapi::NamespaceResourceScope;
use kube::{Api, Client, Resource};

/// Api scoped to `namespace`, or cluster-wide when none is given
fn scoped_api<K>(client: &Client, namespace: Option<&str>) -> Api<K>
where
    K: Resource<Scope = NamespaceResourceScope>,
    <K as Resource>::DynamicType: Default,
{
    match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    }
}
