// Copyright 2024-2026 ACS-API Contributors
// SPDX-License-Identifier: Apache-2.0

//! Versioned ARM API surface.

pub mod codec;
pub mod common;
pub mod keyvault;
pub mod v20170701;
