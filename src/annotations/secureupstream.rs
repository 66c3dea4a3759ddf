// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! TLS settings for the upstream of an ingress.

use crate::annotations::parser::{get_bool_annotation, get_string_annotation};
use crate::annotations::IngressAnnotation;
use crate::constants::annotations::{
    SECURE_BACKENDS, SECURE_CLIENT_CA_SECRET, SECURE_VERIFY_CA_SECRET,
};
use crate::error::{AnnotationError, IngressError, Result};
use crate::resolver::{AuthSslCert, CertificateResolver};
use k8s_openapi::api::networking::v1::Ingress;
use kube::ResourceExt;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecureUpstream {
    pub secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<AuthSslCert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ca_cert: Option<AuthSslCert>,
}

pub struct SecureUpstreamParser<R> {
    resolver: R,
}

impl<R: CertificateResolver> SecureUpstreamParser<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Resolve the CA referenced by `annotation`, if any
    fn resolve_ca(
        &self,
        ing: &Ingress,
        secure: bool,
        annotation: &str,
    ) -> Result<Option<AuthSslCert>> {
        let Some(secret) = not_configured_as_none(get_string_annotation(annotation, Some(ing)))?
            .filter(|s| !s.is_empty())
        else {
            return Ok(None);
        };

        let name = format!("{}/{}", ing.namespace().unwrap_or_default(), secret);
        if !secure {
            return Err(IngressError::CaOnInsecureBackend { secret: name });
        }

        self.resolver.get_auth_certificate(&name).map(Some)
    }
}

impl<R: CertificateResolver> IngressAnnotation for SecureUpstreamParser<R> {
    type Output = SecureUpstream;

    fn parse(&self, ing: &Ingress) -> Result<SecureUpstream> {
        let secure = not_configured_as_none(get_bool_annotation(SECURE_BACKENDS, Some(ing)))?
            .unwrap_or(false);

        Ok(SecureUpstream {
            secure,
            ca_cert: self.resolve_ca(ing, secure, SECURE_VERIFY_CA_SECRET)?,
            client_ca_cert: self.resolve_ca(ing, secure, SECURE_CLIENT_CA_SECRET)?,
        })
    }
}

fn not_configured_as_none<T>(res: std::result::Result<T, AnnotationError>) -> Result<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_missing() => Ok(None),
        Err(e) => Err(e.into()),
    }
}
