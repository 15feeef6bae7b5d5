// Copyright 2024-2026 ACS-API Contributors
// SPDX-License-Identifier: Apache-2.0

//! ACS-API - ARM resource model for managed container-service clusters.
//!
//! The crate carries the versioned schema of a container-service resource
//! and the small set of predicates derived from it. Transport, template
//! generation and secret resolution belong to the callers.

pub mod api;

pub use api::codec::{CodecError, DefinitionFormat};
pub use api::v20170701::{
    AgentPoolProfile, ContainerService, DecodeError, MasterProfile, OrchestratorProfile,
    OrchestratorType, OsType, Properties, ProvisioningState,
};
