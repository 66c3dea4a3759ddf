// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ingress annotation parsing.

pub mod parser;
pub mod secureupstream;

use crate::error::Result;
use k8s_openapi::api::networking::v1::Ingress;

pub use parser::{
    annotation_with_deprecated_prefix, annotation_with_prefix, get_bool_annotation,
    get_int_annotation, get_string_annotation,
};
pub use secureupstream::{SecureUpstream, SecureUpstreamParser};

/// A parser for one feature configured through ingress annotations
pub trait IngressAnnotation {
    type Output;

    fn parse(&self, ing: &Ingress) -> Result<Self::Output>;
}
