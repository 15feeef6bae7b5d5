// Copyright 2024-2026 ACS-API Contributors
// SPDX-License-Identifier: Apache-2.0

//! Encode/decode helpers for container service definitions.
//!
//! JSON is the ARM wire format. TOML is accepted as an authoring format for
//! cluster definitions and is decode-only.
//!
//! # Security
//! Enforces a maximum definition size to prevent memory exhaustion.

use std::path::Path;

use thiserror::Error;

use super::v20170701::ContainerService;

/// Largest definition accepted by any decode path.
pub const MAX_DEFINITION_SIZE: usize = 4 * 1024 * 1024; // 4 MB

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid JSON definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid TOML definition: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Definition is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("Definition too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
    #[error("Unsupported definition format: {0}")]
    UnsupportedFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source format of a cluster definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Toml,
}

impl DefinitionFormat {
    /// Format implied by a file extension, compared case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

fn check_size(size: usize) -> Result<(), CodecError> {
    if size > MAX_DEFINITION_SIZE {
        tracing::warn!(size, max = MAX_DEFINITION_SIZE, "definition exceeds size limit");
        return Err(CodecError::TooLarge {
            size,
            max: MAX_DEFINITION_SIZE,
        });
    }
    Ok(())
}

/// Decode a JSON definition.
pub fn from_json_str(json: &str) -> Result<ContainerService, CodecError> {
    from_json_slice(json.as_bytes())
}

/// Decode a JSON definition from raw bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<ContainerService, CodecError> {
    check_size(bytes.len())?;
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode a TOML definition.
pub fn from_toml_str(text: &str) -> Result<ContainerService, CodecError> {
    check_size(text.len())?;
    Ok(toml::from_str(text)?)
}

/// Decode raw bytes in the given format.
pub fn decode(bytes: &[u8], format: DefinitionFormat) -> Result<ContainerService, CodecError> {
    match format {
        DefinitionFormat::Json => from_json_slice(bytes),
        DefinitionFormat::Toml => {
            check_size(bytes.len())?;
            from_toml_str(std::str::from_utf8(bytes)?)
        }
    }
}

/// Encode to compact JSON.
pub fn to_json_string(service: &ContainerService) -> Result<String, CodecError> {
    Ok(serde_json::to_string(service)?)
}

/// Encode to indented JSON.
pub fn to_json_pretty(service: &ContainerService) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(service)?)
}

/// Load a definition file, picking the format from its extension.
pub fn load_definition(path: impl AsRef<Path>) -> Result<ContainerService, CodecError> {
    let path = path.as_ref();
    let format = DefinitionFormat::from_path(path)
        .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))?;

    let size = usize::try_from(std::fs::metadata(path)?.len()).unwrap_or(usize::MAX);
    check_size(size)?;

    let bytes = std::fs::read(path)?;
    let service = decode(&bytes, format)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        agent_pools = service.properties.agent_pool_profiles.len(),
        "loaded cluster definition"
    );
    Ok(service)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
