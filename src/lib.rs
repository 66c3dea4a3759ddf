// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod annotations;
pub mod config;
pub mod constants;
pub mod error;
pub mod inspector;
pub mod kubernetes;
pub mod resolver;

#[cfg(test)]
pub mod test_utils;
