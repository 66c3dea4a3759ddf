// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Ingress annotation prefixes and the suffixes read by the annotation parsers
pub mod annotations {
    /// Canonical prefix for ingress annotations
    pub const PREFIX: &str = "ingress.open-cluster-management.io";
    /// Legacy prefix, consulted when the canonical annotation is absent or invalid
    pub const DEPRECATED_PREFIX: &str = "icp.management.ibm.com";

    /// When "true", the upstream is reached over TLS
    pub const SECURE_BACKENDS: &str = "secure-backends";
    /// Secret holding the CA used to verify the upstream certificate
    pub const SECURE_VERIFY_CA_SECRET: &str = "secure-verify-ca-secret";
    /// Secret holding the CA used to verify client certificates
    pub const SECURE_CLIENT_CA_SECRET: &str = "secure-client-ca-secret";
}

/// Key inside a Secret that holds the PEM encoded CA certificate
pub const CA_CERT_KEY: &str = "ca.crt";
