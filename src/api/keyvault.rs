// Copyright 2024-2026 ACS-API Contributors
// SPDX-License-Identifier: Apache-2.0

//! Key-vault secret references.
//!
//! A secret field may hold a pointer into a key vault instead of the secret
//! itself. This module only recognizes the reference; fetching the secret
//! is the deployer's job.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

const REFERENCE_PATTERN: &str = r"^/subscriptions/(?P<sub>[^/\s]+)/resourceGroups/(?P<rg>[^/\s]+)/providers/Microsoft\.KeyVault/vaults/(?P<vault>[^/\s]+)/secrets/(?P<secret>[^/\s]+)(?:/(?P<version>[^/\s]+))?$";

fn reference_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(REFERENCE_PATTERN).ok()).as_ref()
}

/// Parsed `/subscriptions/.../vaults/<KV_NAME>/secrets/<NAME>[/<VERSION>]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyVaultSecretRef {
    pub subscription_id: String,
    pub resource_group: String,
    pub vault_name: String,
    pub secret_name: String,
    /// `None` selects the latest version.
    pub secret_version: Option<String>,
}

impl KeyVaultSecretRef {
    /// Parse a reference, returning `None` for literal secrets.
    pub fn parse(value: &str) -> Option<Self> {
        let caps = reference_regex()?.captures(value)?;
        Some(Self {
            subscription_id: caps["sub"].to_string(),
            resource_group: caps["rg"].to_string(),
            vault_name: caps["vault"].to_string(),
            secret_name: caps["secret"].to_string(),
            secret_version: caps.name("version").map(|m| m.as_str().to_string()),
        })
    }

    /// Resource ID of the vault itself.
    pub fn vault_id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.KeyVault/vaults/{}",
            self.subscription_id, self.resource_group, self.vault_name
        )
    }
}

impl fmt::Display for KeyVaultSecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/secrets/{}", self.vault_id(), self.secret_name)?;
        if let Some(version) = &self.secret_version {
            write!(f, "/{}", version)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "keyvault_tests.rs"]
mod tests;
