// Copyright 2024-2026 ACS-API Contributors
// SPDX-License-Identifier: Apache-2.0

//! Orchestrator and OS vocabulary of the 2017-07-01 API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::common::{LINUX, WINDOWS};

/// Failure to decode a value of the resource schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("OrchestratorType has unknown orchestrator: {0}")]
    UnknownOrchestrator(String),
}

/// Orchestrators supported by the container service.
///
/// Decoding is case-insensitive and always yields the canonical variant;
/// encoding writes the canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OrchestratorType {
    Dcos,
    Kubernetes,
    Swarm,
    DockerCe,
}

impl OrchestratorType {
    /// Every known orchestrator, in match-table order.
    pub const ALL: [OrchestratorType; 4] = [
        OrchestratorType::Dcos,
        OrchestratorType::Kubernetes,
        OrchestratorType::Swarm,
        OrchestratorType::DockerCe,
    ];

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dcos => "DCOS",
            Self::Kubernetes => "Kubernetes",
            Self::Swarm => "Swarm",
            Self::DockerCe => "DockerCE",
        }
    }
}

impl fmt::Display for OrchestratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrchestratorType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|known| equal_fold(s, known.as_str()))
            .ok_or_else(|| {
                tracing::debug!(value = s, "rejecting unknown orchestrator type");
                DecodeError::UnknownOrchestrator(s.to_string())
            })
    }
}

/// Per-character Unicode case-insensitive comparison. Two characters match
/// when their lowercase or uppercase mappings agree, so the Kelvin sign
/// matches `k` and the long s matches `s`.
fn equal_fold(a: &str, b: &str) -> bool {
    let mut lhs = a.chars();
    let mut rhs = b.chars();
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_fold_equal(x, y) => {}
            _ => return false,
        }
    }
}

fn chars_fold_equal(x: char, y: char) -> bool {
    x == y
        || x.to_lowercase().eq(y.to_lowercase())
        || x.to_uppercase().eq(y.to_uppercase())
}

impl TryFrom<String> for OrchestratorType {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrchestratorType> for String {
    fn from(value: OrchestratorType) -> Self {
        value.as_str().to_string()
    }
}

/// Version string for an orchestrator type. Free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrchestratorVersion(pub String);

impl OrchestratorVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OrchestratorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrchestratorVersion {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Operating system of an agent pool.
///
/// Matching is exact; any other value is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OsType {
    Linux,
    Windows,
    Other(String),
}

impl OsType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Linux => LINUX,
            Self::Windows => WINDOWS,
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for OsType {
    fn from(value: String) -> Self {
        match value.as_str() {
            LINUX => Self::Linux,
            WINDOWS => Self::Windows,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for OsType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<OsType> for String {
    fn from(value: OsType) -> Self {
        match value {
            OsType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
