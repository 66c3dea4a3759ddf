// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// Failure to resolve a single annotation into a typed value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("ingress rule without annotations")]
    MissingAnnotations,

    #[error("invalid annotation name")]
    InvalidAnnotationName,

    #[error("the annotation {name} does not contain a valid value ({value})")]
    InvalidAnnotationContent { name: String, value: String },
}

impl AnnotationError {
    pub fn invalid_content(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAnnotationContent {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Missing annotations mean the feature is simply not configured
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingAnnotations)
    }
}

#[derive(Error, Debug)]
pub enum IngressError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    #[error("Secret not found: {0}")]
    SecretNotFound(String),

    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    #[error("trying to use CA from secret {secret} on a non secure backend")]
    CaOnInsecureBackend { secret: String },
}

pub type Result<T> = std::result::Result<T, IngressError>;
