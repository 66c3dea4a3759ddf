// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed access to ingress annotations.
//!
//! Every lookup tries the canonical `ingress.open-cluster-management.io/<name>`
//! key first and falls back to the deprecated `icp.management.ibm.com/<name>`
//! key when the canonical one is absent or holds an invalid value.

use crate::constants::annotations::{DEPRECATED_PREFIX, PREFIX};
use crate::error::AnnotationError;
use kube::{Resource, ResourceExt};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, AnnotationError>;

/// Read-only view over a resource's annotations
struct IngAnnotations<'a>(&'a BTreeMap<String, String>);

impl IngAnnotations<'_> {
    fn parse_bool(&self, name: &str) -> Result<bool> {
        let val = self.0.get(name).ok_or(AnnotationError::MissingAnnotations)?;
        parse_bool_literal(val).ok_or_else(|| AnnotationError::invalid_content(name, val))
    }

    fn parse_string(&self, name: &str) -> Result<String> {
        self.0
            .get(name)
            .cloned()
            .ok_or(AnnotationError::MissingAnnotations)
    }

    fn parse_int(&self, name: &str) -> Result<i64> {
        let val = self.0.get(name).ok_or(AnnotationError::MissingAnnotations)?;
        val.parse::<i64>()
            .map_err(|_| AnnotationError::invalid_content(name, val))
    }
}

/// Boolean literals accepted in annotation values
fn parse_bool_literal(val: &str) -> Option<bool> {
    match val {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn check_annotation<'a, K: Resource>(
    name: &str,
    obj: Option<&'a K>,
) -> Result<IngAnnotations<'a>> {
    let annotations = match obj {
        Some(obj) if !obj.annotations().is_empty() => obj.annotations(),
        _ => return Err(AnnotationError::MissingAnnotations),
    };
    if name.is_empty() {
        return Err(AnnotationError::InvalidAnnotationName);
    }
    Ok(IngAnnotations(annotations))
}

fn resolve<'a, K, T, F>(name: &str, obj: Option<&'a K>, parse: F) -> Result<T>
where
    K: Resource,
    F: Fn(&IngAnnotations<'a>, &str) -> Result<T>,
{
    let annotations = check_annotation(name, obj)?;

    let canonical_err = match parse(&annotations, annotation_with_prefix(name).as_str()) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    // A bad canonical value is not hidden behind an absent deprecated key
    match parse(&annotations, annotation_with_deprecated_prefix(name).as_str()) {
        Err(AnnotationError::MissingAnnotations)
            if matches!(canonical_err, AnnotationError::InvalidAnnotationContent { .. }) =>
        {
            Err(canonical_err)
        }
        result => result,
    }
}

/// Extracts a boolean from an ingress annotation
pub fn get_bool_annotation<K: Resource>(name: &str, obj: Option<&K>) -> Result<bool> {
    resolve(name, obj, IngAnnotations::parse_bool)
}

/// Extracts a string from an ingress annotation
pub fn get_string_annotation<K: Resource>(name: &str, obj: Option<&K>) -> Result<String> {
    resolve(name, obj, IngAnnotations::parse_string)
}

/// Extracts a base-10 integer from an ingress annotation
pub fn get_int_annotation<K: Resource>(name: &str, obj: Option<&K>) -> Result<i64> {
    resolve(name, obj, IngAnnotations::parse_int)
}

/// Fully qualified annotation key under the canonical prefix
pub fn annotation_with_prefix(suffix: &str) -> String {
    format!("{}/{}", PREFIX, suffix)
}

/// Fully qualified annotation key under the deprecated prefix
pub fn annotation_with_deprecated_prefix(suffix: &str) -> String {
    format!("{}/{}", DEPRECATED_PREFIX, suffix)
}
